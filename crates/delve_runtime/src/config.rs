//! Command-line configuration.

use delve_foundation::{Error, Result};

/// Settings for one run of the game, parsed from arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Read commands from stdin without the line editor, banner or prompt.
    pub batch_mode: bool,
    /// Show the welcome banner.
    pub show_banner: bool,
    /// Accept verb synonyms, direction shorthands and verbs in any case.
    pub aliases: bool,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
    /// Print usage and exit.
    pub show_help: bool,
    /// Print version and exit.
    pub show_version: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            batch_mode: false,
            show_banner: true,
            aliases: false,
            log_filter: None,
            show_help: false,
            show_version: false,
        }
    }
}

impl Config {
    /// Parses arguments, skipping the program name.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown options, stray positional arguments, or
    /// `--log` without a value.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().skip(1);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "-V" | "--version" => config.show_version = true,
                "-b" | "--batch" => config.batch_mode = true,
                "--no-banner" => config.show_banner = false,
                "--aliases" => config.aliases = true,
                "--log" => {
                    let filter = args
                        .next()
                        .ok_or_else(|| Error::invalid_argument("--log requires a value"))?;
                    config.log_filter = Some(filter);
                }
                opt if opt.starts_with('-') => {
                    return Err(Error::invalid_argument(format!("unknown option: {opt}")));
                }
                other => {
                    return Err(Error::invalid_argument(format!(
                        "unexpected argument: {other}"
                    )));
                }
            }
        }

        if config.batch_mode {
            config.show_banner = false;
        }
        Ok(config)
    }
}
