use anyhow::Result;
use customer_form::adapters::build_sink;
use customer_form::app::terminal;
use customer_form::utils::validation::Validate;
use customer_form::{FileSink, FormConfig, FormSession, OutputFormat, Submission};
use tempfile::TempDir;

#[test]
fn test_script_submits_to_json_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let sink = FileSink::new(temp_dir.path(), "customers.json", OutputFormat::Json);
    let mut session = FormSession::new(sink);

    let script = "\
set 1 name Alice
set 1 age 30
set 1 address Main St
add
set 2 name Bob
submit
set 2 age 41
set 2 address High St
submit
";
    let mut out = Vec::new();
    terminal::run(&mut session, "Customer Form", script.as_bytes(), &mut out, false)?;
    let text = String::from_utf8(out)?;

    // First submit fails on customer 2, second one goes through.
    assert!(text.contains("❌ Validation failed."));
    assert!(text.contains("! Age is required"));
    assert!(text.contains("✅ Submitted 2 customers"));

    let content = std::fs::read_to_string(temp_dir.path().join("customers.json"))?;
    let submission: Submission = serde_json::from_str(&content)?;
    let names: Vec<&str> = submission.customers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(submission.customers[1].age, "41");
    Ok(())
}

#[test]
fn test_rejected_submission_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let sink = FileSink::new(temp_dir.path(), "customers.csv", OutputFormat::Csv);
    let output_file = sink.output_file();
    let mut session = FormSession::new(sink);

    let mut out = Vec::new();
    terminal::run(
        &mut session,
        "Customer Form",
        "set 1 age 0\nsubmit\nremove 1\nset 5 name Zed\n".as_bytes(),
        &mut out,
        false,
    )?;
    let text = String::from_utf8(out)?;

    assert!(!output_file.exists());
    assert!(text.contains("! Enter a valid positive age"));
    assert!(text.contains("At least one customer is required"));
    assert!(text.contains("There is no customer 5 (the form has 1)"));
    Ok(())
}

#[test]
fn test_config_file_drives_csv_sink() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_dir = temp_dir.path().join("out");
    let config_path = temp_dir.path().join("form.toml");
    let normalized = output_dir.to_string_lossy().replace('\\', "/");

    std::fs::write(
        &config_path,
        format!(
            r#"
[form]
title = "Branch signup"

[submission]
sink = "file"
output_path = "{}"
format = "csv"
filename = "signup.csv"
"#,
            normalized
        ),
    )?;

    let config = FormConfig::from_file(&config_path)?;
    config.validate()?;

    let mut session = FormSession::new(build_sink(&config.submission)?);
    let mut out = Vec::new();
    terminal::run(
        &mut session,
        &config.form.title,
        "set 1 name Carol\nset 1 age 52\nset 1 address 3 Mill Lane\nsubmit\n".as_bytes(),
        &mut out,
        false,
    )?;

    assert!(String::from_utf8(out)?.starts_with("== Branch signup =="));
    let csv = std::fs::read_to_string(output_dir.join("signup.csv"))?;
    assert_eq!(csv, "name,age,address\nCarol,52,3 Mill Lane\n");
    Ok(())
}
