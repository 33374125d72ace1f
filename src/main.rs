//! vimlet - a small modal text editor
//!
//! This is the main entry point. It parses CLI arguments, loads the
//! configuration and hands the file to the terminal runner.

use std::process::ExitCode;

use vimlet::cli::{self, Cli};
use vimlet::config::Config;
use vimlet::{logging, run, user_config};

fn main() -> ExitCode {
    let cli = match Cli::parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("vimlet: {e}");
            eprintln!();
            eprintln!("{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };

    if cli.help {
        println!("{}", cli::USAGE);
        return ExitCode::SUCCESS;
    }
    if cli.version {
        println!("{}", cli::version_string());
        return ExitCode::SUCCESS;
    }
    let Some(path) = cli.file else {
        eprintln!("{}", cli::USAGE);
        return ExitCode::from(2);
    };

    if let Err(e) = logging::init() {
        eprintln!("vimlet: cannot open log file: {e}");
    }

    // Load configuration
    let mut config = Config::new();
    user_config::configure(&mut config);

    let result = run::require_terminal().and_then(|()| run::run_terminal_mode(&path, &config));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fatal");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
