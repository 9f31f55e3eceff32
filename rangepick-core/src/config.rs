//! Picker configuration.

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};
use crate::grid::{GridLayout, GridOptions};
use crate::locale::{CustomMonthNames, EnglishMonthNames, MonthNames};
use crate::month::WeekStart;

/// Prefix for environment overrides, e.g. `RANGEPICK_WEEK_START=monday`.
const ENV_PREFIX: &str = "RANGEPICK";

/// Configuration at ~/.config/rangepick/config.toml
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct PickerConfig {
    #[serde(default)]
    pub week_start: WeekStart,

    #[serde(default)]
    pub grid_layout: GridLayout,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_names: Option<Vec<String>>,
}

impl PickerConfig {
    pub fn config_path() -> PickerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PickerError::Config("Could not determine config directory".into()))?
            .join("rangepick");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config file, with `RANGEPICK_*` environment variables
    /// layered on top. A missing file means defaults.
    pub fn load() -> PickerResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load `path` (optional) with the environment layered on top.
    pub fn load_from(path: &Path) -> PickerResult<Self> {
        Self::load_layered(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_layered(path: &Path, env: Environment) -> PickerResult<Self> {
        let config: PickerConfig = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env.try_parsing(false))
            .build()
            .map_err(|e| PickerError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PickerError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load a specific file, without environment overrides.
    pub fn load_file(path: &Path) -> PickerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PickerConfig =
            toml::from_str(&content).map_err(|e| PickerError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> PickerResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| PickerError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| PickerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PickerResult<()> {
        let contents = "\
# rangepick configuration

# First column of the week: \"sunday\" or \"monday\"
# week_start = \"sunday\"

# \"fixed\" always draws five weeks, \"variable\" draws as many as the month needs
# grid_layout = \"fixed\"

# Twelve month names for the header, January first
# month_names = [\"January\", \"February\", \"March\", \"April\", \"May\", \"June\",
#                \"July\", \"August\", \"September\", \"October\", \"November\", \"December\"]
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PickerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PickerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn grid_options(&self) -> GridOptions {
        GridOptions {
            week_start: self.week_start,
            layout: self.grid_layout,
        }
    }

    /// The configured month names, or English.
    pub fn month_names(&self) -> PickerResult<Box<dyn MonthNames>> {
        match &self.month_names {
            Some(names) => Ok(Box::new(CustomMonthNames::new(names.clone())?)),
            None => Ok(Box::new(EnglishMonthNames)),
        }
    }

    fn validate(&self) -> PickerResult<()> {
        if let Some(names) = &self.month_names {
            CustomMonthNames::new(names.clone())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_file_reads_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "week_start = \"monday\"\ngrid_layout = \"variable\"\n").unwrap();

        let config = PickerConfig::load_file(&path).unwrap();
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.grid_layout, GridLayout::Variable);
        assert!(config.month_names.is_none());
    }

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: ::config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "week_start = \"monday\"\n").unwrap();

        let config = PickerConfig::load_from(&path).unwrap();
        assert_eq!(config.week_start, WeekStart::Monday);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let config = PickerConfig::load_layered(&path, env(&[])).unwrap();
        assert_eq!(config, PickerConfig::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "week_start = \"monday\"\ngrid_layout = \"fixed\"\n").unwrap();

        let config =
            PickerConfig::load_layered(&path, env(&[("RANGEPICK_GRID_LAYOUT", "variable")]))
                .unwrap();
        assert_eq!(config.week_start, WeekStart::Monday, "file value kept");
        assert_eq!(config.grid_layout, GridLayout::Variable, "env value wins");
    }

    #[test]
    fn test_env_values_parse_like_cli_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "grid_layout = \"Variable\"\n").unwrap();

        let config =
            PickerConfig::load_layered(&path, env(&[("RANGEPICK_WEEK_START", "Mon")])).unwrap();
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.grid_layout, GridLayout::Variable);
    }

    #[test]
    fn test_invalid_env_value_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let err = PickerConfig::load_layered(&path, env(&[("RANGEPICK_WEEK_START", "friday")]))
            .unwrap_err();
        assert!(matches!(err, PickerError::Config(_)), "got {:?}", err);
    }

    #[test]
    fn test_default_config_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        PickerConfig::create_default_config(&path).unwrap();

        let config = PickerConfig::load_file(&path).unwrap();
        assert_eq!(config, PickerConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = PickerConfig {
            week_start: WeekStart::Monday,
            grid_layout: GridLayout::Fixed,
            month_names: None,
        };
        config.save(&path).unwrap();

        assert_eq!(PickerConfig::load_file(&path).unwrap(), config);
    }

    #[test]
    fn test_rejects_wrong_number_of_month_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "month_names = [\"Jan\", \"Feb\"]\n").unwrap();

        let err = PickerConfig::load_file(&path).unwrap_err();
        assert!(matches!(err, PickerError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_week_start() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "week_start = \"friday\"\n").unwrap();

        assert!(PickerConfig::load_file(&path).is_err());
    }

    #[test]
    fn test_month_names_default_to_english() {
        let names = PickerConfig::default().month_names().unwrap();
        assert_eq!(names.month_name(1), "February");
    }
}
