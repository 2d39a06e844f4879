use crate::domain::model::{Marker, OutputFormat};
use crate::utils::error::{ConverterError, Result};
use crate::utils::validation::{validate_exchange_rate, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub conversion: ConversionSection,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionSection {
    /// 匯率：每 1 美元兌換多少日圓
    pub rate: Option<f64>,
    pub use_large_units: Option<bool>,
    /// 沒有標記的金額套用的預設標記，例如 "km"
    pub default_unit: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConverterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，先替換環境變數
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ConverterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RATE})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ConverterError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn rate(&self) -> Option<f64> {
        self.conversion.rate
    }

    pub fn use_large_units(&self) -> bool {
        self.conversion.use_large_units.unwrap_or(false)
    }

    pub fn default_marker(&self) -> Result<Option<Marker>> {
        self.conversion
            .default_unit
            .as_deref()
            .map(str::parse)
            .transpose()
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(rate) = self.conversion.rate {
            validate_exchange_rate("conversion.rate", rate)?;
        }
        self.default_marker()?;
        Ok(())
    }
}
