use crate::core::session::{Applied, Command, FormSession};
use crate::core::store::CustomerList;
use crate::domain::model::Field;
use crate::domain::ports::SubmissionSink;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub const HELP: &str = "\
Commands:
  set <n> <field> <value>   edit customer n (field: name, age, address)
  add                       add a customer once the last one is valid
  remove <n>                remove customer n
  submit                    validate everything and submit
  reset                     start over with one empty customer
  show                      print the form
  quit                      leave";

/// Prints every customer card with the error under any failing field.
pub fn render<W: Write>(out: &mut W, title: &str, customers: &CustomerList) -> Result<()> {
    writeln!(out, "== {} ==", title)?;
    for (index, customer) in customers.iter().enumerate() {
        writeln!(out, "Customer {}", index + 1)?;
        for field in Field::ALL {
            writeln!(out, "  {:<8} {}", format!("{}:", field.label()), customer.value(field))?;
            if let Some(message) = customer.errors.message(field) {
                writeln!(out, "           ! {}", message)?;
            }
        }
        if customers.len() > 1 {
            writeln!(out, "  [remove {}]", index + 1)?;
        }
    }
    writeln!(out, "[add] [submit]")?;
    Ok(())
}

fn report(applied: &Applied) -> Option<String> {
    match applied {
        Applied::Added { len } => Some(format!("Added customer {}", len)),
        Applied::AddBlocked { index } => Some(format!(
            "Customer {} has errors, fix them before adding another",
            index + 1
        )),
        Applied::Removed { index } => Some(format!("Removed customer {}", index + 1)),
        Applied::RemoveIgnored => Some("At least one customer is required".to_string()),
        Applied::Submitted { count } => Some(format!("✅ Submitted {} customers", count)),
        Applied::SubmitRejected { .. } => Some("❌ Validation failed.".to_string()),
        Applied::Reset => Some("Form cleared".to_string()),
        Applied::Updated { .. } | Applied::Unchanged => None,
    }
}

/// Reads commands until `quit` or end of input, re-rendering the form after
/// any command that can change what is displayed.
pub fn run<R, W, S>(
    session: &mut FormSession<S>,
    title: &str,
    input: R,
    output: &mut W,
    interactive: bool,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: SubmissionSink,
{
    render(output, title, session.customers())?;

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(output, "> ")?;
            output.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "❌ {}", e.user_friendly_message())?;
                writeln!(output, "💡 {}", e.recovery_suggestion())?;
                continue;
            }
        };
        tracing::debug!("Command: {:?}", command);

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            _ => {}
        }

        let quiet = matches!(command, Command::Set { .. }) && !interactive;
        match session.apply(command) {
            Ok(applied) => {
                if let Some(message) = report(&applied) {
                    writeln!(output, "{}", message)?;
                }
                if !quiet {
                    render(output, title, session.customers())?;
                }
            }
            Err(e) => {
                tracing::error!("Command failed: {}", e);
                writeln!(output, "❌ {}", e.user_friendly_message())?;
                writeln!(output, "💡 {}", e.recovery_suggestion())?;
            }
        }
    }

    Ok(())
}
