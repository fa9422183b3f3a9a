// SPDX-License-Identifier: PMPL-1.0-or-later

//! Catalog sources for the registry.
//!
//! The built-in catalog is compiled into the binary. An alternative catalog
//! can be read from a JSON or YAML file holding a list of records; it goes
//! through the same validation as the built-in list.
//!
//! ## Adding a project
//!
//! 1. Append an entry to `BUILTIN` (order is display order)
//! 2. Use `/designs/<id>` as its path; the route table picks it up from there

use super::ProjectRegistry;
use crate::error::{ConfigError, RegistryError};
use crate::types::{HexColor, ProjectRecord};
use std::fs;
use std::path::Path;

struct BuiltinRecord {
    id: &'static str,
    name: &'static str,
    thumbnail: &'static str,
    description: &'static str,
    color: &'static str,
}

const BUILTIN: &[BuiltinRecord] = &[
    BuiltinRecord {
        id: "camera-move",
        name: "3D 摄像机控制",
        thumbnail: "https://placehold.co/600x400/9b59b6/white?text=3D+Camera+Control",
        description: "交互式的摄像机控制，用于控制针对当前构图来进行视角设置。",
        color: "#FFCDD2",
    },
    BuiltinRecord {
        id: "sketch-edit",
        name: "Sketch运镜意图识别",
        thumbnail: "https://placehold.co/600x400/3498db/white?text=Sketch+to+CamMove",
        description: "利用sketch自由绘图的方式，来识别用户的运镜意图。",
        color: "#BBDEFB",
    },
];

/// The compiled-in catalog, in display order.
pub fn builtin_records() -> Result<Vec<ProjectRecord>, RegistryError> {
    records_from(BUILTIN)
}

fn records_from(entries: &[BuiltinRecord]) -> Result<Vec<ProjectRecord>, RegistryError> {
    entries
        .iter()
        .map(|entry| {
            let color = HexColor::parse(entry.color).ok_or_else(|| RegistryError::InvalidColor {
                id: entry.id.to_string(),
                color: entry.color.to_string(),
            })?;
            let mut record = ProjectRecord::new(
                entry.id,
                entry.name,
                format!("/designs/{}", entry.id),
                color,
            )
            .with_description(entry.description);
            if !entry.thumbnail.is_empty() {
                record = record.with_thumbnail(entry.thumbnail);
            }
            Ok(record)
        })
        .collect()
}

/// Read and validate a catalog file. The format follows the extension.
pub fn load_catalog(path: &Path) -> Result<ProjectRegistry, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let records: Vec<ProjectRecord> = match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?,
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).map_err(|err| ConfigError::Parse {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?
        }
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    tracing::debug!(path = %path.display(), records = records.len(), "catalog file read");
    Ok(ProjectRegistry::new(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_colors_are_valid_literals() {
        for entry in BUILTIN {
            assert!(
                HexColor::parse(entry.color).is_some(),
                "{} has bad colour {}",
                entry.id,
                entry.color
            );
        }
    }

    #[test]
    fn bad_builtin_colour_is_an_error() {
        let entries = [BuiltinRecord {
            id: "storyline",
            name: "Storyline",
            thumbnail: "",
            description: "",
            color: "pink",
        }];
        assert_eq!(
            records_from(&entries).unwrap_err(),
            RegistryError::InvalidColor {
                id: "storyline".to_string(),
                color: "pink".to_string(),
            }
        );
    }

    #[test]
    fn builtin_paths_follow_designs_prefix() {
        for record in builtin_records().unwrap() {
            assert_eq!(record.path, format!("/designs/{}", record.id));
            assert!(record.thumbnail.is_some());
        }
    }

    #[test]
    fn builtin_catalog_validates() {
        let registry = ProjectRegistry::new(builtin_records().unwrap()).unwrap();
        let ids: Vec<&str> = registry.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["camera-move", "sketch-edit"]);
    }
}
