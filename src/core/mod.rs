pub mod session;
pub mod store;
pub mod validator;

pub use crate::domain::model::{Customer, CustomerEntry, Field, FieldErrors, Submission, ValidationError};
pub use crate::domain::ports::SubmissionSink;
pub use crate::utils::error::Result;
