use std::path::Path;

use config::builder::DefaultState;
use config::{ConfigBuilder, FileFormat};
use eyre::{Context, Result};
use serde::Deserialize;

const CONFIG_FILE_FORMAT: FileFormat = FileFormat::Yaml;
const DEFAULT_CONFIG_STR: &str = include_str!("default.yaml");

/// Configuration file looked for in the working directory when `--config` is
/// not given.
const LOCAL_CONFIG_FILE: &str = "rubik.yaml";
/// Prefix for environment variable overrides, such as `RUBIK_SIZE`.
const ENV_PREFIX: &str = "RUBIK";

/// Format for printing a cube.
#[derive(Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Unfolded sticker diagram.
    #[default]
    Text,
    /// JSON cube state.
    Json,
}

/// Settings shared by all subcommands.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct CliConfig {
    /// Default cube size.
    pub size: usize,
    /// Default output format.
    #[serde(default)]
    pub output: OutputFormat,
    /// Scramble seed, or `None` to use a fresh random scramble every time.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl CliConfig {
    /// Loads the configuration from, in increasing order of priority, the
    /// built-in defaults, the user's config file, and the environment.
    ///
    /// If `user_file` is `None`, `rubik.yaml` in the working directory is used
    /// if it exists.
    pub fn load(user_file: Option<&Path>) -> Result<Self> {
        let user_source = match user_file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::new(LOCAL_CONFIG_FILE, CONFIG_FILE_FORMAT).required(false),
        };
        let env_source = config::Environment::with_prefix(ENV_PREFIX).try_parsing(true);

        Self::from_builder(Self::defaults().add_source(user_source).add_source(env_source))
            .wrap_err("error loading configuration")
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG_STR, CONFIG_FILE_FORMAT))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config = builder.build()?.try_deserialize()?;
        log::debug!("loaded configuration: {config:?}");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn load_str(overrides: &str) -> Result<CliConfig> {
        CliConfig::from_builder(
            CliConfig::defaults()
                .add_source(config::File::from_str(overrides, CONFIG_FILE_FORMAT)),
        )
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::from_builder(CliConfig::defaults()).unwrap();
        assert_eq!(
            config,
            CliConfig {
                size: 3,
                output: OutputFormat::Text,
                seed: None,
            },
        );
    }

    #[test]
    fn test_config_overrides() {
        let config = load_str("size: 5\noutput: json\nseed: 1234\n").unwrap();
        assert_eq!(config.size, 5);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.seed, Some(1234));

        let config = load_str("seed: 9\n").unwrap();
        assert_eq!(config.size, 3);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_bad_config() {
        assert!(load_str("output: yaml\n").is_err());
        assert!(load_str("size: big\n").is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let path = Path::new("does/not/exist/rubik.yaml");
        assert!(CliConfig::load(Some(path)).is_err());
    }
}
