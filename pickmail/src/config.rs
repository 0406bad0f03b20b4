//! Command-line interface and the validated run configuration.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use slog::Level;

use crate::{logging, PickError, DEFAULT_MASK_CHAR};

/// Number of addresses picked when no count is given.
pub const DEFAULT_PICK_COUNT: usize = 3;

/// Output file used when `--output` is not given.
pub const DEFAULT_OUTPUT_FILE: &str = "picked_emails.txt";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pickmail",
    version,
    about = "Pick random email addresses from a CSV export and show them masked"
)]
pub struct Cli {
    /// CSV export; the first line is a header and the first column holds the address
    pub csv_path: Option<PathBuf>,

    /// Number of addresses to pick
    #[arg(default_value_t = DEFAULT_PICK_COUNT)]
    pub count: usize,

    /// File the unmasked selection is written to (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Character used to mask addresses on screen
    #[arg(long, default_value_t = DEFAULT_MASK_CHAR)]
    pub mask_char: char,

    /// Print only the picked addresses, not the masked list of every loaded one
    #[arg(long, default_value_t = false)]
    pub picked_only: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Log level selected by `-v`/`-q`; `None` when logging is off.
    pub fn log_level(&self) -> Option<Level> {
        logging::level_for(self.verbose, self.quiet)
    }
}

/// Everything a pick run needs, after argument validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickConfig {
    pub input: PathBuf,
    pub count: usize,
    pub output: PathBuf,
    pub seed: Option<u64>,
    pub mask_char: char,
    pub list_all: bool,
}

impl PickConfig {
    /// A configuration reading `input` with every other setting at its default.
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            count: DEFAULT_PICK_COUNT,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            seed: None,
            mask_char: DEFAULT_MASK_CHAR,
            list_all: true,
        }
    }

    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    #[must_use]
    pub fn with_list_all(mut self, list_all: bool) -> Self {
        self.list_all = list_all;
        self
    }

    /// Validates parsed arguments.
    ///
    /// Fails with [`PickError::MissingArgument`] when no CSV path was given.
    pub fn from_cli(cli: &Cli) -> Result<Self, PickError> {
        let input = cli.csv_path.clone().ok_or(PickError::MissingArgument)?;
        Ok(Self {
            input,
            count: cli.count,
            output: cli.output.clone(),
            seed: cli.seed,
            mask_char: cli.mask_char,
            list_all: !cli.picked_only,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, PickConfig, DEFAULT_OUTPUT_FILE, DEFAULT_PICK_COUNT};
    use crate::PickError;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn count_defaults_to_three() {
        let cli = Cli::try_parse_from(["pickmail", "readers.csv"]).unwrap();
        let config = PickConfig::from_cli(&cli).unwrap();
        assert_eq!(config, PickConfig::new("readers.csv"));
        assert_eq!(config.count, DEFAULT_PICK_COUNT);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert!(config.list_all);
    }

    #[test]
    fn all_options_are_carried_over() {
        let cli = Cli::try_parse_from([
            "pickmail",
            "readers.csv",
            "5",
            "--output",
            "winners.txt",
            "--seed",
            "42",
            "--mask-char",
            "#",
            "--picked-only",
        ])
        .unwrap();
        let config = PickConfig::from_cli(&cli).unwrap();
        let expected = PickConfig::new("readers.csv")
            .with_count(5)
            .with_output("winners.txt")
            .with_seed(42)
            .with_mask_char('#')
            .with_list_all(false);
        assert_eq!(config, expected);
    }

    #[test]
    fn missing_csv_path_is_missing_argument() {
        let cli = Cli::try_parse_from(["pickmail"]).unwrap();
        assert!(matches!(
            PickConfig::from_cli(&cli),
            Err(PickError::MissingArgument)
        ));
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        assert!(Cli::try_parse_from(["pickmail", "readers.csv", "three"]).is_err());
        assert!(Cli::try_parse_from(["pickmail", "readers.csv", "-1"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["pickmail", "readers.csv", "-q", "-v"]).is_err());
        let cli = Cli::try_parse_from(["pickmail", "readers.csv", "-q"]).unwrap();
        assert_eq!(cli.log_level(), None);
    }
}
