use crate::config::toml_config::{FormConfig, FORMATS, SINKS};
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "customer-form")]
#[command(about = "Fill in, validate and submit a list of customers")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Where submissions go: log or file
    #[arg(long)]
    pub sink: Option<String>,

    /// Output directory for the file sink
    #[arg(long)]
    pub output_path: Option<String>,

    /// Output format for the file sink: json or csv
    #[arg(long)]
    pub format: Option<String>,

    /// Read commands from this file instead of stdin
    #[arg(long)]
    pub script: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the TOML file (if any) and applies command line overrides.
    pub fn resolve(&self) -> Result<FormConfig> {
        let mut config = match &self.config {
            Some(path) => FormConfig::from_file(path)?,
            None => FormConfig::default(),
        };

        if let Some(output_path) = &self.output_path {
            config.submission.output_path = Some(output_path.clone());
            // An output directory only makes sense with the file sink.
            if self.sink.is_none() {
                config.submission.sink = "file".to_string();
            }
        }
        if let Some(sink) = &self.sink {
            config.submission.sink = sink.clone();
        }
        if let Some(format) = &self.format {
            config.submission.format = format.clone();
        }

        tracing::debug!("Resolved form config: {:?}", config);
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(sink) = &self.sink {
            validate_one_of("--sink", sink, &SINKS)?;
        }
        if let Some(format) = &self.format {
            validate_one_of("--format", format, &FORMATS)?;
        }
        if let Some(path) = &self.output_path {
            validate_path("--output-path", path)?;
        }
        if let Some(script) = &self.script {
            validate_path("--script", script)?;
        }
        Ok(())
    }
}
