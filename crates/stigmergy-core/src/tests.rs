//! Tests for the core vocabulary: geometry, feed parsing, config, events.

use crate::components::{Weapon, WeaponBay};
use crate::config::PipelineConfig;
use crate::enums::Phase;
use crate::error::{ConfigError, FeedParseError};
use crate::events::{EventKind, SimEvent};
use crate::feed::EntityFeed;
use crate::records::{Mutation, TrackReport};
use crate::state::WorldSnapshot;
use crate::types::{PlatformId, Position, SimTime, TargetId};

const SAMPLE_FEED: &str = "\
Blue Planes
id,x_position,y_position,z_position,fuel
1,10.0,20.0,5.0,80.0
2,50.5,60.25,1.0,30

Weapons
plane_id,range,kinematics,expiring_factor
1,500,1.5,1.25
1,100,1.0,2.0
2,300,1.1,1.9
Targets
id,x_position,y_position,z_position
7,40.0,60.0,30.0
8,  1.0 , 2.0 , 3.0
";

// ---- Geometry ----

#[test]
fn test_position_range() {
    let a = Position::new(0.0, 0.0, 0.0);
    let b = Position::new(3.0, 4.0, 12.0);
    assert!((a.range_to(&b) - 13.0).abs() < 1e-10);
    assert!((b.range_to(&a) - 13.0).abs() < 1e-10);
}

#[test]
fn test_line_of_sight_points_at_other() {
    let a = Position::new(1.0, 1.0, 1.0);
    let b = Position::new(4.0, 1.0, 1.0);
    let los = a.line_of_sight_to(&b);
    assert_eq!((los.x, los.y, los.z), (3.0, 0.0, 0.0));
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..5 {
        time.advance();
    }
    assert_eq!(time.tick, 5);
}

// ---- Weapon bay ----

#[test]
fn test_weapon_bay_take_consumes_once() {
    let mut bay = WeaponBay {
        weapons: vec![
            Weapon {
                serial: 0,
                range: 100.0,
                kinematics: 1.0,
                expiring_factor: 1.0,
            },
            Weapon {
                serial: 1,
                range: 200.0,
                kinematics: 1.0,
                expiring_factor: 1.0,
            },
        ],
    };

    let taken = bay.take(0).expect("weapon 0 is loaded");
    assert_eq!(taken.range, 100.0);
    assert!(!bay.contains(0));
    assert!(bay.take(0).is_none(), "a consumed weapon can't be taken twice");
    assert_eq!(bay.weapons.len(), 1);
    assert_eq!(bay.weapons[0].serial, 1);
}

// ---- Feed parsing ----

#[test]
fn test_csv_feed_parses_all_sections() {
    let feed = EntityFeed::from_csv_str(SAMPLE_FEED).unwrap();

    assert_eq!(feed.platforms.len(), 2);
    assert_eq!(feed.platforms[1].id, PlatformId(2));
    assert_eq!(feed.platforms[1].position, Position::new(50.5, 60.25, 1.0));
    assert_eq!(feed.platforms[1].fuel, 30.0);

    let p1: Vec<f64> = feed.weapons_of(PlatformId(1)).map(|w| w.range).collect();
    assert_eq!(p1, vec![500.0, 100.0], "weapon order must follow the feed");

    assert_eq!(feed.targets.len(), 2);
    assert_eq!(feed.targets[1].id, TargetId(8));
    assert_eq!(feed.targets[1].position, Position::new(1.0, 2.0, 3.0));
}

#[test]
fn test_csv_feed_round_trips_through_writer() {
    let feed = EntityFeed::from_csv_str(SAMPLE_FEED).unwrap();
    let again = EntityFeed::from_csv_str(&feed.to_csv()).unwrap();
    assert_eq!(feed, again);
}

#[test]
fn test_json_feed_matches_csv_feed() {
    let feed = EntityFeed::from_csv_str(SAMPLE_FEED).unwrap();
    let json = feed.to_json_string().unwrap();
    let back = EntityFeed::from_json_str(&json).unwrap();
    assert_eq!(feed, back);
}

#[test]
fn test_malformed_number_reports_line() {
    let text = "Blue Planes\nid,x,y,z,fuel\n1,0,0,zero,10\n";
    match EntityFeed::from_csv_str(text) {
        Err(FeedParseError::MalformedRow { line, reason }) => {
            assert_eq!(line, 3);
            assert!(reason.contains("z_position"), "reason was {reason}");
        }
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn test_short_row_is_rejected() {
    let text = "Targets\nid,x,y,z\n1,0,0\n";
    assert!(matches!(
        EntityFeed::from_csv_str(text),
        Err(FeedParseError::MalformedRow { line: 3, .. })
    ));
}

#[test]
fn test_row_before_section_is_rejected() {
    let text = "1,0,0,0,10\nBlue Planes\n";
    assert!(matches!(
        EntityFeed::from_csv_str(text),
        Err(FeedParseError::RowOutsideSection { line: 1 })
    ));
}

#[test]
fn test_weapon_for_unknown_platform_is_rejected() {
    let text = "Blue Planes\nheader\n1,0,0,0,10\nWeapons\nheader\n9,100,1,1\n";
    assert!(matches!(
        EntityFeed::from_csv_str(text),
        Err(FeedParseError::UnknownPlatform {
            line: 6,
            platform: PlatformId(9)
        })
    ));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let text = "Targets\nheader\n1,0,0,0\n1,5,5,5\n";
    assert!(matches!(
        EntityFeed::from_csv_str(text),
        Err(FeedParseError::DuplicateTarget(TargetId(1)))
    ));
}

#[test]
fn test_negative_fuel_and_zero_range_are_rejected() {
    let negative_fuel = "Blue Planes\nheader\n1,0,0,0,-1\n";
    assert!(matches!(
        EntityFeed::from_csv_str(negative_fuel),
        Err(FeedParseError::InvalidValue { field: "fuel", .. })
    ));

    let zero_range = "Blue Planes\nheader\n1,0,0,0,10\nWeapons\nheader\n1,0,1,1\n";
    assert!(matches!(
        EntityFeed::from_csv_str(zero_range),
        Err(FeedParseError::InvalidValue { field: "range", .. })
    ));
}

#[test]
fn test_load_missing_file_reports_path() {
    let err = EntityFeed::load(std::path::Path::new("/nonexistent/feed.csv")).unwrap_err();
    assert!(matches!(err, FeedParseError::ReadFailed { .. }));
    assert!(err.to_string().contains("/nonexistent/feed.csv"));
}

// ---- Config ----

#[test]
fn test_presets_differ_only_where_expected() {
    let basic = PipelineConfig::basic();
    assert_eq!(basic.platform_jitter, 0.0);
    assert!(!basic.fuel_enabled);
    assert!(basic.reallocation_enabled);

    let fuel = PipelineConfig::fuel_aware();
    assert!(fuel.fuel_enabled);
    assert!(!fuel.reallocation_enabled);
    assert_eq!(fuel.platform_jitter, 20.0);
    assert_eq!(fuel.target_jitter, 25.0);

    let moving = PipelineConfig::preset("moving").unwrap();
    assert_eq!(moving.platform_jitter, 5.0);
    assert_eq!(moving.target_jitter, 3.0);
    assert!(PipelineConfig::preset("warp").is_none());
}

#[test]
fn test_config_json_fills_defaults() {
    let config = PipelineConfig::from_json_str(r#"{ "fuel_enabled": false }"#).unwrap();
    assert!(!config.fuel_enabled);
    assert_eq!(config.platform_jitter, PipelineConfig::default().platform_jitter);
    assert_eq!(config.sensors_per_target, 1);
}

#[test]
fn test_config_validation() {
    let negative = PipelineConfig::from_json_str(r#"{ "target_jitter": -3.0 }"#);
    assert!(matches!(
        negative,
        Err(ConfigError::InvalidBound {
            field: "target_jitter",
            ..
        })
    ));

    let zero_sensors = PipelineConfig::from_json_str(r#"{ "sensors_per_target": 0 }"#);
    assert!(matches!(zero_sensors, Err(ConfigError::NoSensorsPerTarget)));

    assert!(matches!(
        PipelineConfig::from_json_str("not json"),
        Err(ConfigError::Parse(_))
    ));
}

// ---- Events ----

#[test]
fn test_event_rendering_matches_narration() {
    let handoff = EventKind::Handoff {
        target: TargetId(4),
        outgoing: PlatformId(9),
        incoming: PlatformId(2),
    };
    assert_eq!(
        handoff.to_string(),
        "Handoff: Plane 2 will take over reporting Target 4 from Plane 9"
    );

    let pg = EventKind::PgComputed {
        platform: PlatformId(1),
        target: TargetId(3),
        weapon_range: 500.0,
        distance: 100.0,
        kinematics: 1.0,
        expiring_factor: 1.0,
        fuel: 100.0,
        pg: 0.01,
    };
    assert!(pg.to_string().ends_with("Distance = 100.00 km, Kinematics = 1, Expiring Factor = 1, Fuel = 100, PG = 0.0100"));

    let event = SimEvent {
        tick: 12,
        phase: Phase::Reallocation,
        kind: EventKind::ReportReleased {
            platform: PlatformId(5),
            target: TargetId(6),
        },
    };
    assert_eq!(
        event.to_string(),
        "[tick 12 reallocation] Plane 5 stops reporting Target 6 to reduce redundancy"
    );
}

#[test]
fn test_event_and_mutation_serde() {
    let event = SimEvent {
        tick: 3,
        phase: Phase::Engagement,
        kind: EventKind::TargetDestroyed {
            target: TargetId(1),
            platform: PlatformId(2),
            weapon_range: 300.0,
        },
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"TargetDestroyed\""));
    let back: SimEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(event, back);

    let mutation = Mutation::ReportRemoved {
        report: TrackReport::new(PlatformId(1), TargetId(2)),
    };
    let back: Mutation = serde_json::from_str(&serde_json::to_string(&mutation).unwrap()).unwrap();
    assert_eq!(mutation, back);
}

#[test]
fn test_empty_snapshot_serializes() {
    let snapshot = WorldSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.time.tick, 0);
    assert!(!back.finished);
}
