use crate::core::store::{CustomerList, SubmitOutcome};
use crate::domain::model::{Field, Submission};
use crate::domain::ports::SubmissionSink;
use crate::utils::error::{FormError, Result};
use std::str::FromStr;

/// One user action. Indices are zero-based; the text syntax is one-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set {
        index: usize,
        field: Field,
        value: String,
    },
    Add,
    Remove(usize),
    Submit,
    Reset,
    Show,
    Help,
    Quit,
}

fn parse_position(raw: Option<&str>) -> Result<usize> {
    let raw = raw.ok_or_else(|| FormError::CommandError {
        message: "missing customer number".to_string(),
    })?;
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(FormError::CommandError {
            message: format!("'{}' is not a customer number", raw),
        }),
    }
}

impl FromStr for Command {
    type Err = FormError;

    /// `set <n> <field> <value...>`, `add`, `remove <n>`, `submit`, `reset`,
    /// `show`, `help`, `quit`. The value of `set` is the rest of the line,
    /// verbatim, and may be empty.
    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_start();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest),
            None => (line.trim_end(), ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "set" => {
                let mut parts = rest.trim_start().splitn(3, ' ');
                let index = parse_position(parts.next().filter(|s| !s.is_empty()))?;
                let field = parts
                    .next()
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| FormError::CommandError {
                        message: "missing field name".to_string(),
                    })?
                    .parse::<Field>()?;
                let value = parts.next().unwrap_or("").trim_end_matches(&['\r', '\n'][..]);
                Ok(Command::Set {
                    index,
                    field,
                    value: value.to_string(),
                })
            }
            "add" => Ok(Command::Add),
            "remove" | "rm" => Ok(Command::Remove(parse_position(rest.split_whitespace().next())?)),
            "submit" => Ok(Command::Submit),
            "reset" => Ok(Command::Reset),
            "show" | "" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(FormError::CommandError {
                message: format!("unknown command '{}'", other),
            }),
        }
    }
}

/// What a command did, for the front end to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Updated { index: usize, field: Field },
    Added { len: usize },
    AddBlocked { index: usize },
    Removed { index: usize },
    RemoveIgnored,
    Submitted { count: usize },
    SubmitRejected { invalid: Vec<usize> },
    Reset,
    Unchanged,
}

/// A customer list together with the sink its submissions go to.
pub struct FormSession<S: SubmissionSink> {
    customers: CustomerList,
    sink: S,
}

impl<S: SubmissionSink> FormSession<S> {
    pub fn new(sink: S) -> Self {
        Self {
            customers: CustomerList::new(),
            sink,
        }
    }

    pub fn customers(&self) -> &CustomerList {
        &self.customers
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn apply(&mut self, command: Command) -> Result<Applied> {
        match command {
            Command::Set {
                index,
                field,
                value,
            } => {
                self.customers.update(index, field, value)?;
                Ok(Applied::Updated { index, field })
            }
            Command::Add => {
                if self.customers.add_record() {
                    Ok(Applied::Added {
                        len: self.customers.len(),
                    })
                } else {
                    Ok(Applied::AddBlocked {
                        index: self.customers.len() - 1,
                    })
                }
            }
            Command::Remove(index) => {
                if self.customers.remove_record(index)? {
                    Ok(Applied::Removed { index })
                } else {
                    Ok(Applied::RemoveIgnored)
                }
            }
            Command::Submit => self.submit(),
            Command::Reset => {
                self.customers.reset();
                Ok(Applied::Reset)
            }
            Command::Show | Command::Help | Command::Quit => Ok(Applied::Unchanged),
        }
    }

    fn submit(&mut self) -> Result<Applied> {
        match self.customers.submit() {
            SubmitOutcome::Accepted(entries) => {
                let submission = Submission::new(entries);
                self.sink.deliver(&submission)?;
                tracing::info!("✅ Submitted {} customers", submission.customers.len());
                Ok(Applied::Submitted {
                    count: submission.customers.len(),
                })
            }
            SubmitOutcome::Rejected { invalid } => {
                let numbers: Vec<usize> = invalid.iter().map(|i| i + 1).collect();
                tracing::warn!("Validation failed. Invalid customers: {:?}", numbers);
                Ok(Applied::SubmitRejected { invalid })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        delivered: RefCell<Vec<Submission>>,
    }

    impl SubmissionSink for RecordingSink {
        fn deliver(&self, submission: &Submission) -> Result<()> {
            self.delivered.borrow_mut().push(submission.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl SubmissionSink for FailingSink {
        fn deliver(&self, _submission: &Submission) -> Result<()> {
            Err(FormError::IoError(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    fn run<S: SubmissionSink>(session: &mut FormSession<S>, lines: &[&str]) -> Vec<Applied> {
        lines
            .iter()
            .map(|line| session.apply(line.parse().unwrap()).unwrap())
            .collect()
    }

    #[test]
    fn test_parse_set_keeps_value_verbatim() {
        let command: Command = "set 2 address  12 Main St ".parse().unwrap();
        assert_eq!(
            command,
            Command::Set {
                index: 1,
                field: Field::Address,
                value: " 12 Main St ".to_string(),
            }
        );

        let cleared: Command = "set 1 name".parse().unwrap();
        assert_eq!(
            cleared,
            Command::Set {
                index: 0,
                field: Field::Name,
                value: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("add".parse::<Command>().unwrap(), Command::Add);
        assert_eq!(" REMOVE 3".parse::<Command>().unwrap(), Command::Remove(2));
        assert_eq!("submit\n".parse::<Command>().unwrap(), Command::Submit);
        assert_eq!("".parse::<Command>().unwrap(), Command::Show);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "remove 0".parse::<Command>(),
            Err(FormError::CommandError { .. })
        ));
        assert!(matches!(
            "set x name Bob".parse::<Command>(),
            Err(FormError::CommandError { .. })
        ));
        assert!(matches!(
            "set 1 email a@b.c".parse::<Command>(),
            Err(FormError::UnknownField(_))
        ));
        assert!(matches!(
            "dance".parse::<Command>(),
            Err(FormError::CommandError { .. })
        ));
    }

    #[test]
    fn test_successful_submission_reaches_sink() {
        let mut session = FormSession::new(RecordingSink::default());
        let results = run(
            &mut session,
            &["set 1 name Alice", "set 1 age 30", "set 1 address Main St", "submit"],
        );
        assert_eq!(results.last(), Some(&Applied::Submitted { count: 1 }));

        let delivered = session.sink().delivered.borrow();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].customers[0].address, "Main St");
    }

    #[test]
    fn test_rejected_submission_skips_sink() {
        let mut session = FormSession::new(RecordingSink::default());
        let results = run(&mut session, &["set 1 age -1", "submit"]);
        assert_eq!(
            results.last(),
            Some(&Applied::SubmitRejected { invalid: vec![0] })
        );
        assert!(session.sink().delivered.borrow().is_empty());
        assert_eq!(session.customers().get(0).unwrap().errors.len(), 3);
    }

    #[test]
    fn test_add_and_remove() {
        let mut session = FormSession::new(RecordingSink::default());
        assert_eq!(
            run(&mut session, &["add", "remove 1"]),
            vec![Applied::AddBlocked { index: 0 }, Applied::RemoveIgnored]
        );

        let results = run(
            &mut session,
            &["set 1 name A", "set 1 age 1", "set 1 address B", "add", "remove 1"],
        );
        assert_eq!(results[3], Applied::Added { len: 2 });
        assert_eq!(results[4], Applied::Removed { index: 0 });
        assert_eq!(session.customers().len(), 1);
        assert_eq!(session.customers().get(0).unwrap().name, "");
    }

    #[test]
    fn test_sink_failure_is_reported() {
        let mut session = FormSession::new(FailingSink);
        run(&mut session, &["set 1 name A", "set 1 age 2", "set 1 address B"]);
        assert!(matches!(
            session.apply(Command::Submit),
            Err(FormError::IoError(_))
        ));
        assert_eq!(session.customers().get(0).unwrap().name, "A");
    }
}
