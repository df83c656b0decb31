use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::exit;

#[derive(Default, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub templates: TemplateSettings,
    pub output: OutputSettings,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// Directory searched for template resources before the embedded copies
    pub dir: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Parse the tool configuration; a missing file yields the defaults
pub fn parse_config(file: &str) -> Result<Config> {
    if !Path::new(file).exists() {
        info!("config file {file} not found, using defaults");
        return Ok(Config::default());
    }

    let config = match std::fs::read_to_string(file) {
        Ok(s) => s,
        Err(err) => exit!(err, "Could not read config file {}", file),
    };

    let config: Result<Config, toml::de::Error> = toml::from_str(config.as_str());
    let config = match config {
        Ok(c) => c,
        Err(err) => exit!(err, "Could not parse config file {}", file),
    };

    info!("config file parsed");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let config: Config = toml::from_str(
            r#"
[templates]
dir = "resources"

[output]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.templates.dir.as_deref(), Some("resources"));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[templates]\n").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output.format, OutputFormat::Yaml);
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = parse_config("does/not/exist.toml").unwrap();
        assert_eq!(config, Config::default());
    }
}
