use crate::utils::error::{AppError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_single_line, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Presentation settings read from an optional TOML file.
///
/// Exchange rates and the transaction fee are deliberately absent: they are
/// fixed constants of the converter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub display: DisplayConfig,
    pub student: StudentProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub pause_after_activity: bool,
    pub line_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            pause_after_activity: true,
            line_width: 45,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudentProfile {
    pub name: String,
    pub section: String,
    pub age: u32,
    pub gender: String,
    pub coding_devices: String,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            name: "Alberto Jr Deniros".to_string(),
            section: "BSCS 1-A".to_string(),
            age: 23,
            gender: "MALE".to_string(),
            coding_devices: "Desktop Computer".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads and parses a TOML file. Unknown keys are an error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| AppError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AppError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Loads `path` when given, otherwise the built-in defaults. Either way the
    /// result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                tracing::info!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_range("display.line_width", self.display.line_width, 10, 120)?;

        let text_fields = [
            ("student.name", &self.student.name),
            ("student.section", &self.student.section),
            ("student.gender", &self.student.gender),
            ("student.coding_devices", &self.student.coding_devices),
        ];
        for (field, value) in text_fields {
            validate_non_empty_string(field, value)?;
            validate_single_line(field, value)?;
        }

        validate_range("student.age", self.student.age, 1, 150)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.display.pause_after_activity);
        assert_eq!(config.display.line_width, 45);
        assert_eq!(config.student.name, "Alberto Jr Deniros");
    }

    #[test]
    fn test_parse_partial_toml_config() {
        let toml_content = r#"
[display]
pause_after_activity = false

[student]
name = "Maria Santos"
age = 19
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert!(!config.display.pause_after_activity);
        assert_eq!(config.display.line_width, 45);
        assert_eq!(config.student.name, "Maria Santos");
        assert_eq!(config.student.age, 19);
        assert_eq!(config.student.section, "BSCS 1-A");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_rate_keys_are_rejected() {
        let toml_content = r#"
[rates]
usd = 50.0
"#;
        assert!(matches!(
            AppConfig::from_toml_str(toml_content),
            Err(AppError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_validation_failures() {
        let mut config = AppConfig::default();
        config.student.name = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.display.line_width = 500;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.student.age = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nline_width = 60").unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.display.line_width, 60);
    }

    #[test]
    fn test_load_missing_file() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/activity-console.toml")));
        assert!(matches!(result, Err(AppError::ConfigError { .. })));
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }
}
