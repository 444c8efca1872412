// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::config_types::*;
use super::error::ConfigError;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub grid: GridConfig,
    pub style: StyleConfig,
    pub hero: HeroConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return exe_config;
        }

        // Fallback to loading from the current working directory
        Self::load_from_path(Path::new(CONFIG_FILE))
    }

    fn load_from_exe_dir() -> Option<Result<Self, ConfigError>> {
        let exe_path = std::env::current_exe().ok()?;
        let config_path = exe_path.parent()?.join(CONFIG_FILE);

        if config_path.exists() {
            Some(Self::load_from_path(&config_path))
        } else {
            None
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = &self.grid;
        if !(grid.cell_size_px.is_finite() && grid.cell_size_px > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "grid.cell_size_px must be positive, got {}",
                grid.cell_size_px
            )));
        }
        if !(grid.enter_duration_ms.is_finite() && grid.enter_duration_ms >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "grid.enter_duration_ms must not be negative, got {}",
                grid.enter_duration_ms
            )));
        }
        if !(grid.leave_duration_ms.is_finite() && grid.leave_duration_ms >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "grid.leave_duration_ms must not be negative, got {}",
                grid.leave_duration_ms
            )));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid("window size must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::EasingType;

    #[test]
    fn test_full_config() {
        let content = r#"
            [window]
            width = 800
            height = 600
            title = "test"

            [grid]
            cell_size_px = 50.0
            accent_color = [255, 0, 0]
            enter_duration_ms = 100.0
            leave_duration_ms = 2000.0
            easing = "linear"
            coalesce_resize = true

            [style]
            background_color = [0, 0, 0]
            border_color = [1, 2, 3]
            border_weight = 2.0

            [hero]
            enabled = false
            title = "t"
            subtitle = "s"
            button_label = "b"
        "#;
        let config = Config::from_toml(content).unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.grid.cell_size_px, 50.0);
        assert_eq!(config.grid.accent_color, [255, 0, 0]);
        assert!(matches!(config.grid.easing, EasingType::Linear));
        assert!(config.grid.coalesce_resize);
        assert_eq!(config.style.border_color, [1, 2, 3]);
        assert!(!config.hero.enabled);
        assert!((config.grid.enter_duration() - 0.1).abs() < 1e-6);
        assert!((config.grid.leave_duration() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::from_toml("[grid]\ncell_size_px = 40.0\n").unwrap();
        assert_eq!(config.grid.cell_size_px, 40.0);
        assert_eq!(config.grid.accent_color, [129, 140, 248]);
        assert_eq!(config.grid.enter_duration_ms, 150.0);
        assert_eq!(config.grid.leave_duration_ms, 1500.0);
        assert!(!config.grid.coalesce_resize);
        assert_eq!(config.window.width, 1600);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.grid.cell_size_px, 75.0);
        assert!(config.hero.enabled);
    }

    #[test]
    fn test_rejects_bad_values() {
        let tests = vec![
            "[grid]\ncell_size_px = 0.0\n",
            "[grid]\ncell_size_px = -5.0\n",
            "[grid]\nenter_duration_ms = -1.0\n",
            "[grid]\nleave_duration_ms = -1.0\n",
            "[window]\nwidth = 0\n",
        ];

        for content in tests {
            let result = Config::from_toml(content);
            assert!(
                matches!(result, Err(ConfigError::Invalid(_))),
                "Expected Invalid for {:?}",
                content
            );
        }
    }

    #[test]
    fn test_parse_error() {
        let result = Config::from_toml("[grid\ncell_size_px = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let result = Config::from_toml("[grid]\neasing = \"bouncy\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::load_from_path(Path::new("does/not/exist/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_repository_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONFIG_FILE);
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.grid.cell_size_px, 75.0);
        assert_eq!(config.grid.accent_color, [129, 140, 248]);
    }
}
