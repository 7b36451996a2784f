use crate::core::demo::{
    DEFAULT_DIRECT_EQUAL_INDEX, DEFAULT_DIRECT_INDEX, DEFAULT_EXPECTED, DEFAULT_SAFE_INDEX,
    DEFAULT_UNSAFE_INDEX,
};
use crate::core::DemoSettings;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_elements, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub sequence: SequenceConfig,
    #[serde(default)]
    pub probes: ProbeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    pub elements: Vec<String>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            elements: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeConfig {
    pub expected: Option<String>,
    pub safe_index: Option<i64>,
    pub unsafe_index: Option<i64>,
    pub direct_index: Option<i64>,
    pub direct_equal_index: Option<i64>,
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| DemoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl DemoSettings for DemoConfig {
    fn elements(&self) -> &[String] {
        &self.sequence.elements
    }

    fn expected(&self) -> &str {
        self.probes.expected.as_deref().unwrap_or(DEFAULT_EXPECTED)
    }

    fn safe_index(&self) -> i64 {
        self.probes.safe_index.unwrap_or(DEFAULT_SAFE_INDEX)
    }

    fn unsafe_index(&self) -> i64 {
        self.probes.unsafe_index.unwrap_or(DEFAULT_UNSAFE_INDEX)
    }

    fn direct_index(&self) -> i64 {
        self.probes.direct_index.unwrap_or(DEFAULT_DIRECT_INDEX)
    }

    fn direct_equal_index(&self) -> i64 {
        self.probes.direct_equal_index.unwrap_or(DEFAULT_DIRECT_EQUAL_INDEX)
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_elements("sequence.elements", &self.sequence.elements)?;
        if let Some(expected) = &self.probes.expected {
            validate_non_empty_string("probes.expected", expected)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();

        assert_eq!(config.elements(), ["a", "b", "c"]);
        assert_eq!(config.expected(), "a");
        assert_eq!(config.safe_index(), 0);
        assert_eq!(config.unsafe_index(), 25);
        assert_eq!(config.direct_index(), 32);
        assert_eq!(config.direct_equal_index(), 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bare_sequence_table_keeps_default_elements() {
        let config = DemoConfig::from_toml_str("[sequence]\n").unwrap();

        assert_eq!(config.elements(), ["a", "b", "c"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_overrides() {
        let toml_content = r#"
[sequence]
elements = ["x", "y"]

[probes]
expected = "y"
safe_index = 1
unsafe_index = -4
direct_equal_index = 2
"#;

        let config = DemoConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.elements(), ["x", "y"]);
        assert_eq!(config.expected(), "y");
        assert_eq!(config.safe_index(), 1);
        assert_eq!(config.unsafe_index(), -4);
        assert_eq!(config.direct_index(), 32);
        assert_eq!(config.direct_equal_index(), 2);
    }

    #[test]
    fn test_config_validation() {
        let config = DemoConfig::from_toml_str("[sequence]\nelements = []\n").unwrap();
        assert!(config.validate().is_err());

        let config = DemoConfig::from_toml_str("[probes]\nexpected = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = DemoConfig::from_toml_str("[probes]\nsafe_index = \"zero\"\n").unwrap_err();
        assert!(matches!(err, DemoError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[probes]\ndirect_index = 2\n")
            .unwrap();

        let config = DemoConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.direct_index(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DemoConfig::from_file("/nonexistent/bounded-access.toml").unwrap_err();
        assert!(matches!(err, DemoError::IoError(_)));
    }
}
