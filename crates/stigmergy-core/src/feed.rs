//! Entity feed: the initial platform, weapon, and target records.
//!
//! Two encodings are accepted. The sectioned CSV layout:
//!
//! ```text
//! Blue Planes
//! id,x_position,y_position,z_position,fuel
//! 1,10.0,20.0,5.0,80.0
//! Weapons
//! plane_id,range,kinematics,expiring_factor
//! 1,500,1.4,1.2
//! Targets
//! id,x_position,y_position,z_position
//! 1,40.0,60.0,30.0
//! ```
//!
//! and the same records as JSON. Each section marker is followed by one
//! header line, which is skipped.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FeedParseError;
use crate::types::{PlatformId, Position, TargetId};

const PLATFORM_SECTION: &str = "Blue Planes";
const WEAPON_SECTION: &str = "Weapons";
const TARGET_SECTION: &str = "Targets";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformRecord {
    pub id: PlatformId,
    pub position: Position,
    pub fuel: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponRecord {
    pub platform: PlatformId,
    pub range: f64,
    pub kinematics: f64,
    pub expiring_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRecord {
    pub id: TargetId,
    pub position: Position,
}

/// Ordered record groups. Weapon order within a platform is load order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityFeed {
    pub platforms: Vec<PlatformRecord>,
    pub weapons: Vec<WeaponRecord>,
    pub targets: Vec<TargetRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Platforms,
    Weapons,
    Targets,
}

impl EntityFeed {
    /// Load a feed file. `.json` files are decoded as JSON, anything else as sectioned CSV.
    pub fn load(path: &Path) -> Result<Self, FeedParseError> {
        let contents = fs::read_to_string(path).map_err(|source| FeedParseError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_csv_str(&contents)
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, FeedParseError> {
        let feed: EntityFeed = serde_json::from_str(json)?;
        feed.validate()?;
        Ok(feed)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse the sectioned CSV layout.
    pub fn from_csv_str(text: &str) -> Result<Self, FeedParseError> {
        let mut feed = EntityFeed::default();
        let mut section: Option<Section> = None;
        let mut skip_header = false;

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let row = raw.trim();
            if row.is_empty() {
                continue;
            }
            let cells: Vec<&str> = row.split(',').map(str::trim).collect();

            let marker = match cells[0] {
                PLATFORM_SECTION => Some(Section::Platforms),
                WEAPON_SECTION => Some(Section::Weapons),
                TARGET_SECTION => Some(Section::Targets),
                _ => None,
            };
            if let Some(next) = marker {
                section = Some(next);
                skip_header = true;
                continue;
            }
            if skip_header {
                skip_header = false;
                continue;
            }

            match section {
                None => return Err(FeedParseError::RowOutsideSection { line }),
                Some(Section::Platforms) => {
                    expect_columns(&cells, 5, line)?;
                    feed.platforms.push(PlatformRecord {
                        id: PlatformId(parse_id(cells[0], line)?),
                        position: parse_position(&cells[1..4], line)?,
                        fuel: parse_real(cells[4], "fuel", line)?,
                    });
                }
                Some(Section::Weapons) => {
                    expect_columns(&cells, 4, line)?;
                    let platform = PlatformId(parse_id(cells[0], line)?);
                    if !feed.platforms.iter().any(|p| p.id == platform) {
                        return Err(FeedParseError::UnknownPlatform { line, platform });
                    }
                    feed.weapons.push(WeaponRecord {
                        platform,
                        range: parse_real(cells[1], "range", line)?,
                        kinematics: parse_real(cells[2], "kinematics", line)?,
                        expiring_factor: parse_real(cells[3], "expiring_factor", line)?,
                    });
                }
                Some(Section::Targets) => {
                    expect_columns(&cells, 4, line)?;
                    feed.targets.push(TargetRecord {
                        id: TargetId(parse_id(cells[0], line)?),
                        position: parse_position(&cells[1..4], line)?,
                    });
                }
            }
        }

        feed.validate()?;
        Ok(feed)
    }

    /// Render the sectioned CSV layout.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(PLATFORM_SECTION);
        out.push('\n');
        out.push_str("id,x_position,y_position,z_position,fuel\n");
        for p in &self.platforms {
            let _ = writeln!(
                out,
                "{},{},{},{},{}",
                p.id, p.position.x, p.position.y, p.position.z, p.fuel
            );
        }
        out.push_str(WEAPON_SECTION);
        out.push('\n');
        out.push_str("plane_id,range,kinematics,expiring_factor\n");
        for w in &self.weapons {
            let _ = writeln!(
                out,
                "{},{},{},{}",
                w.platform, w.range, w.kinematics, w.expiring_factor
            );
        }
        out.push_str(TARGET_SECTION);
        out.push('\n');
        out.push_str("id,x_position,y_position,z_position\n");
        for t in &self.targets {
            let _ = writeln!(
                out,
                "{},{},{},{}",
                t.id, t.position.x, t.position.y, t.position.z
            );
        }
        out
    }

    /// Weapons belonging to `platform`, in feed order.
    pub fn weapons_of(&self, platform: PlatformId) -> impl Iterator<Item = &WeaponRecord> {
        self.weapons.iter().filter(move |w| w.platform == platform)
    }

    /// Check id uniqueness, weapon ownership, and numeric invariants.
    pub fn validate(&self) -> Result<(), FeedParseError> {
        let mut platform_ids = HashSet::new();
        for p in &self.platforms {
            if !platform_ids.insert(p.id) {
                return Err(FeedParseError::DuplicatePlatform(p.id));
            }
            check_position(&p.position)?;
            if !p.fuel.is_finite() || p.fuel < 0.0 {
                return Err(FeedParseError::InvalidValue {
                    field: "fuel",
                    value: p.fuel,
                });
            }
        }

        for w in &self.weapons {
            if !platform_ids.contains(&w.platform) {
                return Err(FeedParseError::OrphanWeapon(w.platform));
            }
            if !w.range.is_finite() || w.range <= 0.0 {
                return Err(FeedParseError::InvalidValue {
                    field: "range",
                    value: w.range,
                });
            }
            for (field, value) in [
                ("kinematics", w.kinematics),
                ("expiring_factor", w.expiring_factor),
            ] {
                if !value.is_finite() {
                    return Err(FeedParseError::InvalidValue { field, value });
                }
            }
        }

        let mut target_ids = HashSet::new();
        for t in &self.targets {
            if !target_ids.insert(t.id) {
                return Err(FeedParseError::DuplicateTarget(t.id));
            }
            check_position(&t.position)?;
        }
        Ok(())
    }
}

fn expect_columns(cells: &[&str], expected: usize, line: usize) -> Result<(), FeedParseError> {
    if cells.len() < expected {
        return Err(FeedParseError::MalformedRow {
            line,
            reason: format!("expected {expected} columns, found {}", cells.len()),
        });
    }
    Ok(())
}

fn parse_id(cell: &str, line: usize) -> Result<u32, FeedParseError> {
    cell.parse::<u32>()
        .map_err(|err| FeedParseError::MalformedRow {
            line,
            reason: format!("invalid id {cell:?}: {err}"),
        })
}

fn parse_real(cell: &str, field: &str, line: usize) -> Result<f64, FeedParseError> {
    cell.parse::<f64>()
        .map_err(|err| FeedParseError::MalformedRow {
            line,
            reason: format!("invalid {field} {cell:?}: {err}"),
        })
}

fn parse_position(cells: &[&str], line: usize) -> Result<Position, FeedParseError> {
    Ok(Position::new(
        parse_real(cells[0], "x_position", line)?,
        parse_real(cells[1], "y_position", line)?,
        parse_real(cells[2], "z_position", line)?,
    ))
}

fn check_position(position: &Position) -> Result<(), FeedParseError> {
    if position.is_finite() {
        return Ok(());
    }
    let value = [position.x, position.y, position.z]
        .into_iter()
        .find(|v| !v.is_finite())
        .unwrap_or(f64::NAN);
    Err(FeedParseError::InvalidValue {
        field: "position",
        value,
    })
}
