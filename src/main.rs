use anyhow::Context;
use clap::Parser;
use customer_form::adapters::build_sink;
use customer_form::app::terminal;
use customer_form::utils::{logger, validation::Validate};
use customer_form::{CliConfig, FormSession};
use std::io::{self, BufReader, IsTerminal, Write};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if let Err(e) = cli.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger(cli.verbose, config.logging.level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, config.logging.level.as_deref());
    }

    tracing::info!("Starting customer-form");

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let sink = build_sink(&config.submission)?;
    let mut session = FormSession::new(sink);
    let mut stdout = io::stdout().lock();

    match &cli.script {
        Some(path) => {
            tracing::info!("📁 Reading commands from: {}", path);
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open script '{}'", path))?;
            terminal::run(
                &mut session,
                &config.form.title,
                BufReader::new(file),
                &mut stdout,
                false,
            )?;
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            if interactive {
                writeln!(stdout, "{}", terminal::HELP)?;
            }
            terminal::run(
                &mut session,
                &config.form.title,
                stdin.lock(),
                &mut stdout,
                interactive,
            )?;
        }
    }

    Ok(())
}
