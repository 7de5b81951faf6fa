//! Command handlers

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use crate::cli::{Cli, Commands};
use tarozi_app::config::Config;
use tarozi_app::{LocalDate, Session};
use tarozi_cli::devices::{ConfigReloader, TerminalBell};
use tarozi_cli::shell::Shell;
use tarozi_types::{Error, OutputFormat, Result};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;

    let filter = if cli.verbose { "debug" } else { config.log_filter.as_str() };
    tarozi_app::logging::init(filter);

    match &cli.command {
        Commands::Session { script, alarm_off } => {
            cmd_session(config, script.clone(), *alarm_off, cli.format)
        }

        Commands::Config {
            show,
            set_output,
            set_alarm,
            set_markers,
            set_log,
            reset,
        } => cmd_config(
            *show,
            *set_output,
            *set_alarm,
            set_markers.clone(),
            set_log.clone(),
            *reset,
        ),
    }
}

fn cmd_session(
    config: Config,
    script: Option<PathBuf>,
    alarm_off: bool,
    format_flag: Option<OutputFormat>,
) -> Result<()> {
    let alarm_on_start = config.alarm_on_start && !alarm_off;
    let session = Session::new(Box::new(LocalDate), alarm_on_start);
    let reloader = ConfigReloader::new(Config::config_path().ok(), config);

    let mut shell = Shell::new(session, TerminalBell, reloader, format_flag);
    let mut stdout = io::stdout().lock();

    let failures = match script {
        Some(path) => {
            let file = File::open(&path)
                .map_err(|e| Error::InvalidArgument(format!("{}: {}", path.display(), e)))?;
            shell.run(BufReader::new(file), &mut stdout)?
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let mut shell = shell.with_prompt(interactive);
            shell.run(stdin.lock(), &mut stdout)?
        }
    };

    if failures > 0 {
        eprintln!("{} command(s) failed", failures);
    }
    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_alarm: Option<bool>,
    set_markers: Option<Vec<String>>,
    set_log: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(alarm_on_start) = set_alarm {
        config.alarm_on_start = alarm_on_start;
        modified = true;
    }

    if let Some(markers) = set_markers {
        if let [open, close] = markers.as_slice() {
            config.highlight_open = open.clone();
            config.highlight_close = close.clone();
            modified = true;
        }
    }

    if let Some(filter) = set_log {
        config.log_filter = filter;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
