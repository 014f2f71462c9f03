use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Token, MAX_COLS, MAX_ROWS, MIN_COLS, MIN_ROWS};

/// Game setup, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub player_one: Token,
    pub player_two: Token,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: 6,
            cols: 7,
            player_one: Token::Red,
            player_two: Token::Yellow,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < MIN_ROWS || self.rows > MAX_ROWS {
            return Err(ConfigError::Validation(format!(
                "rows must be between {MIN_ROWS} and {MAX_ROWS}"
            )));
        }
        if self.cols < MIN_COLS || self.cols > MAX_COLS {
            return Err(ConfigError::Validation(format!(
                "cols must be between {MIN_COLS} and {MAX_COLS}"
            )));
        }
        if self.player_one == self.player_two {
            return Err(ConfigError::Validation(
                "player_one and player_two must use different tokens".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
rows = 9
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.rows, 9);
        // Other fields should be defaults
        assert_eq!(config.cols, 7);
        assert_eq!(config.player_one, Token::Red);
        assert_eq!(config.player_two, Token::Yellow);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 7);
    }

    #[test]
    fn test_token_names_parse_lowercase() {
        let toml_str = r#"
player_one = "green"
player_two = "blue"
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.player_one, Token::Green);
        assert_eq!(config.player_two, Token::Blue);
    }

    #[test]
    fn test_validation_rejects_out_of_range_rows() {
        let mut config = GameConfig::default();
        config.rows = 5;
        assert!(config.validate().is_err());
        config.rows = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_out_of_range_cols() {
        let mut config = GameConfig::default();
        config.cols = 6;
        assert!(config.validate().is_err());
        config.cols = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_identical_tokens() {
        let mut config = GameConfig::default();
        config.player_two = Token::Red;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 7);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
rows = 7
cols = 9
player_one = "blue"
"#
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.rows, 7);
        assert_eq!(config.cols, 9);
        assert_eq!(config.player_one, Token::Blue);
        // Others are defaults
        assert_eq!(config.player_two, Token::Yellow);
    }

    #[test]
    fn test_load_rejects_invalid_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "rows = 12\n").unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = GameConfig::default_toml();
        let config: GameConfig = toml::from_str(&toml_str).unwrap();
        config
            .validate()
            .expect("roundtripped config should be valid");
    }
}
