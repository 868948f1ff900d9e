use crate::domain::model::Submission;
use crate::utils::error::Result;

/// Destination for a submission that passed validation.
pub trait SubmissionSink {
    fn deliver(&self, submission: &Submission) -> Result<()>;
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for Box<S> {
    fn deliver(&self, submission: &Submission) -> Result<()> {
        (**self).deliver(submission)
    }
}
