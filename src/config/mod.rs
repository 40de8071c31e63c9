pub mod cli;

use crate::core::report::SPOT_CHECK_SUBJECT;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};

pub const INPUT_FILE: &str = "Копия Калькулятор маржи СР7.0 - 📄 Комиссии.csv";
pub const OUTPUT_FILE: &str = "public/data/wb_commissions.csv";

/// Fixed locations of the conversion, relative to the storage base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub input_path: String,
    pub output_path: String,
    pub spot_check_subject: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_path: INPUT_FILE.to_string(),
            output_path: OUTPUT_FILE.to_string(),
            spot_check_subject: SPOT_CHECK_SUBJECT.to_string(),
        }
    }
}

impl ConfigProvider for ConverterConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn spot_check_subject(&self) -> &str {
        &self.spot_check_subject
    }
}

impl Validate for ConverterConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("spot_check_subject", &self.spot_check_subject)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locations() {
        let config = ConverterConfig::default();
        assert_eq!(config.output_path(), "public/data/wb_commissions.csv");
        assert!(config.input_path().ends_with("Комиссии.csv"));
        assert_eq!(config.spot_check_subject(), "Накладные ресницы");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_output() {
        let config = ConverterConfig {
            output_path: String::new(),
            ..ConverterConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
