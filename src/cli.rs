//! Command-line argument parsing for vimlet.
//!
//! This module provides the `Cli` struct which encapsulates all command-line
//! options and methods for parsing them.

use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str = "\
vimlet - A small modal text editor

Usage: vimlet [OPTIONS] <FILE>

Options:
  -h, --help        Show this help message
  -V, --version     Show version information

Environment:
  VIMLET_LOG=PATH   Write a trace log to PATH (filter with RUST_LOG)";

/// Argument errors; all of them end in a usage message
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("missing file argument")]
    MissingFile,
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
}

/// Command-line interface configuration.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Cli {
    /// File to edit
    pub file: Option<PathBuf>,

    /// Print usage and exit
    pub help: bool,

    /// Print version and exit
    pub version: bool,
}

impl Cli {
    /// Parse the process arguments.
    pub fn parse() -> Result<Self, CliError> {
        Self::parse_from(std::env::args_os().skip(1).map(|a| a.to_string_lossy().into_owned()))
    }

    /// Parse arguments, program name excluded.
    ///
    /// `--help` and `--version` win over a missing file. `--` ends flag
    /// parsing so a file named `-x` can be edited.
    pub fn parse_from<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cli = Self::default();
        let mut flags_done = false;

        for arg in args {
            let arg: String = arg.into();
            match arg.as_str() {
                "-h" | "--help" if !flags_done => cli.help = true,
                "-V" | "--version" if !flags_done => cli.version = true,
                "--" if !flags_done => flags_done = true,
                flag if !flags_done && flag.starts_with('-') && flag != "-" => {
                    return Err(CliError::UnknownFlag(flag.to_string()));
                }
                _ => {
                    if cli.file.is_some() {
                        return Err(CliError::UnexpectedArgument(arg));
                    }
                    cli.file = Some(PathBuf::from(arg));
                }
            }
        }

        if cli.file.is_none() && !cli.help && !cli.version {
            return Err(CliError::MissingFile);
        }

        Ok(cli)
    }
}

pub fn version_string() -> String {
    format!("vimlet {}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_file() {
        let cli = Cli::parse_from(["notes.txt"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("notes.txt")));
        assert!(!cli.help);
        assert!(!cli.version);
    }

    #[test]
    fn test_missing_file() {
        let empty: [&str; 0] = [];
        assert_eq!(Cli::parse_from(empty), Err(CliError::MissingFile));
    }

    #[test]
    fn test_extra_argument() {
        assert_eq!(
            Cli::parse_from(["a.txt", "b.txt"]),
            Err(CliError::UnexpectedArgument("b.txt".to_string()))
        );
    }

    #[test]
    fn test_unknown_flag() {
        assert_eq!(
            Cli::parse_from(["--frobnicate", "a.txt"]),
            Err(CliError::UnknownFlag("--frobnicate".to_string()))
        );
    }

    #[test]
    fn test_help_and_version_need_no_file() {
        assert!(Cli::parse_from(["--help"]).unwrap().help);
        assert!(Cli::parse_from(["-V"]).unwrap().version);
    }

    #[test]
    fn test_double_dash_allows_dash_file() {
        let cli = Cli::parse_from(["--", "-x"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("-x")));
    }

    #[test]
    fn test_version_string() {
        assert!(version_string().starts_with("vimlet "));
    }
}
