use crate::utils::error::{FormError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_path, validate_required_field, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SINKS: [&str; 2] = ["log", "file"];
pub const FORMATS: [&str; 2] = ["json", "csv"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub form: FormSection,
    pub submission: SubmissionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSection {
    pub title: String,
}

impl Default for FormSection {
    fn default() -> Self {
        Self {
            title: "Customer Form".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// "log" or "file"
    pub sink: String,
    pub output_path: Option<String>,
    /// "json" or "csv"
    pub format: String,
    pub filename: Option<String>,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            sink: "log".to_string(),
            output_path: None,
            format: "json".to_string(),
            filename: None,
        }
    }
}

impl SubmissionConfig {
    /// Configured filename, or `customers.<format>`.
    pub fn filename(&self) -> String {
        self.filename
            .clone()
            .unwrap_or_else(|| format!("customers.{}", self.format))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: bool,
}

impl FormConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FormError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            FormError::ConfigValidationError {
                field: "env_substitution".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("form.title", &self.form.title)?;
        validate_one_of("submission.sink", &self.submission.sink, &SINKS)?;
        validate_one_of("submission.format", &self.submission.format, &FORMATS)?;

        if self.submission.sink == "file" {
            let path = validate_required_field("submission.output_path", &self.submission.output_path)?;
            validate_path("submission.output_path", path)?;
            validate_non_empty_string("submission.filename", &self.submission.filename())?;
        }

        if let Some(level) = &self.logging.level {
            validate_one_of(
                "logging.level",
                level,
                &["trace", "debug", "info", "warn", "error"],
            )?;
        }

        Ok(())
    }
}

impl Validate for FormConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
