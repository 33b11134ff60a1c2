//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Value the `LandisData` record must carry in a Dynamic Fuel System file.
pub const EXTENSION_NAME: &str = "Dynamic Fuel System";

/// Options controlling how a parameter file is read.
///
/// Deserializable with defaults so a host can embed it in its own
/// configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// When set, the first record must be `LandisData <name>`. When unset,
    /// the file starts directly with `Timestep`.
    pub landis_data: Option<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            landis_data: Some(EXTENSION_NAME.to_owned()),
        }
    }
}

impl ParseOptions {
    /// Options for a file without the `LandisData` record.
    pub fn without_landis_data() -> Self {
        ParseOptions { landis_data: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let opts: ParseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, ParseOptions::default());
        assert_eq!(opts.landis_data.as_deref(), Some(EXTENSION_NAME));
    }

    #[test]
    fn null_disables_header() {
        let opts: ParseOptions = serde_json::from_str(r#"{"landis_data": null}"#).unwrap();
        assert_eq!(opts, ParseOptions::without_landis_data());
    }
}
