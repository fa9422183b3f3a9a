// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal and machine-readable output

pub mod formatter;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

pub use formatter::PageFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Coloured text for humans
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Serialise `value` for the structured formats. `None` for text, which
    /// goes through [`PageFormatter`] instead.
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<Option<String>> {
        match self {
            OutputFormat::Text => Ok(None),
            OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
            OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(value)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_not_serialised() {
        assert!(OutputFormat::Text.serialize(&[1, 2]).unwrap().is_none());
        let json = OutputFormat::Json.serialize(&[1, 2]).unwrap().unwrap();
        assert_eq!(json.split_whitespace().collect::<String>(), "[1,2]");
    }
}
