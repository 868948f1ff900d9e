use crate::config::SubmissionConfig;
use crate::domain::model::Submission;
use crate::domain::ports::SubmissionSink;
use crate::utils::error::{FormError, Result};
use crate::utils::validation::validate_required_field;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes accepted submissions to the log.
#[derive(Debug, Clone, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn deliver(&self, submission: &Submission) -> Result<()> {
        let payload = serde_json::to_string(&submission.customers)?;
        tracing::info!(
            count = submission.customers.len(),
            submitted_at = %submission.submitted_at.to_rfc3339(),
            "Submitted customers: {}",
            payload
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(FormError::InvalidConfigValueError {
                field: "submission.format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: json, csv".to_string(),
            }),
        }
    }
}

/// Writes each accepted submission to `<base_path>/<filename>`, replacing
/// any earlier one.
#[derive(Debug, Clone)]
pub struct FileSink {
    base_path: PathBuf,
    filename: String,
    format: OutputFormat,
}

impl FileSink {
    pub fn new(base_path: impl Into<PathBuf>, filename: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            base_path: base_path.into(),
            filename: filename.into(),
            format,
        }
    }

    pub fn output_file(&self) -> PathBuf {
        self.base_path.join(&self.filename)
    }

    fn encode(&self, submission: &Submission) -> Result<Vec<u8>> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_vec_pretty(submission)?),
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(Vec::new());
                for customer in &submission.customers {
                    writer.serialize(customer)?;
                }
                writer
                    .into_inner()
                    .map_err(|e| FormError::IoError(e.into_error()))
            }
        }
    }
}

impl SubmissionSink for FileSink {
    fn deliver(&self, submission: &Submission) -> Result<()> {
        let data = self.encode(submission)?;
        let full_path = self.output_file();

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full_path, data)?;

        tracing::info!(
            "📁 Saved {} customers to {}",
            submission.customers.len(),
            full_path.display()
        );
        Ok(())
    }
}

/// Builds the sink selected by an already validated submission config.
pub fn build_sink(config: &SubmissionConfig) -> Result<Box<dyn SubmissionSink>> {
    match config.sink.as_str() {
        "file" => {
            let path = validate_required_field("submission.output_path", &config.output_path)?;
            let format = config.format.parse::<OutputFormat>()?;
            Ok(Box::new(FileSink::new(
                Path::new(path),
                config.filename(),
                format,
            )))
        }
        "log" => Ok(Box::new(LogSink)),
        other => Err(FormError::InvalidConfigValueError {
            field: "submission.sink".to_string(),
            value: other.to_string(),
            reason: "Unsupported sink. Valid sinks: log, file".to_string(),
        }),
    }
}
