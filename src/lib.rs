pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FileSink, LogSink, OutputFormat};
pub use config::FormConfig;
pub use crate::core::{
    session::{Applied, Command, FormSession},
    store::{CustomerList, SubmitOutcome},
    validator::{validate, Validation},
};
pub use domain::model::{Customer, CustomerEntry, Field, FieldErrors, Submission, ValidationError};
pub use domain::ports::SubmissionSink;
pub use utils::error::{FormError, Result};
