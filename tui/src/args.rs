//! Parsing command-line arguments.

use clap::{
    crate_description, crate_name, crate_version, value_parser, Arg, ArgAction, ArgGroup, Command,
};
use rlifesim_lib::{Config, Seed};
use std::{
    error::Error,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

#[cfg(feature = "tui")]
use std::time::Duration;

/// Grid sizes this small cannot host the built-in patterns.
const MIN_GRIDSIZE: usize = 9;

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) readfile: Option<PathBuf>,
    pub(crate) movfile: Option<PathBuf>,
    #[cfg(feature = "tui")]
    pub(crate) interval: Duration,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
    pub(crate) generations: u64,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Box<dyn Error>> {
        let mut command = Command::new(crate_name!())
            .version(crate_version!())
            .about(crate_description!())
            .arg(
                Arg::new("GRIDSIZE")
                    .help("Side length of the square grid")
                    .long_help(
                        "Side length of the square grid\n\
                         Values of 8 or less cannot host the built-in patterns; \
                         they are rejected with a warning and the default is \
                         used instead. Ignored when --readfile is given, since \
                         the file carries its own dimension.\n",
                    )
                    .short('s')
                    .long("gridsize")
                    .value_name("N")
                    .value_parser(value_parser!(usize)),
            )
            .arg(
                Arg::new("GLIDER")
                    .help("Starts with a single glider instead of a random fill")
                    .long("glider")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("GOSPER")
                    .help("Starts with a Gosper glider gun instead of a random fill")
                    .long("gosper")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("READFILE")
                    .help("Starts from a pattern file")
                    .long_help(
                        "Starts from a pattern file\n\
                         The first line of the file holds the grid dimension N; \
                         each following line holds one row of N cells, 255 for \
                         a living cell and 0 for a dead one. Missing trailing \
                         rows are left dead.\n",
                    )
                    .long("readfile")
                    .value_name("PATH")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("MOVFILE")
                    .help("Appends every generation to a plain-text recording")
                    .long("movfile")
                    .value_name("PATH")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("CONFIG")
                    .help("Reads the configuration from a file")
                    .long_help(
                        "Reads the configuration from a file\n\
                         The format is chosen by the extension: TOML (the \
                         default), JSON (.json), or YAML (.yaml, .yml). \
                         Explicit command-line flags override values from the \
                         file.\n",
                    )
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .value_parser(value_parser!(PathBuf)),
            )
            .group(ArgGroup::new("seed").args(["GLIDER", "GOSPER", "READFILE"]));

        #[cfg(feature = "tui")]
        {
            command = command
                .arg(
                    Arg::new("INTERVAL")
                        .help("Milliseconds between generations")
                        .short('i')
                        .long("interval")
                        .value_name("MS")
                        .default_value("50")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("NOTUI")
                        .help("Runs a fixed number of generations without the TUI")
                        .short('n')
                        .long("no-tui")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("GENERATIONS")
                        .help("How many generations to run without the TUI")
                        .short('g')
                        .long("generations")
                        .value_name("G")
                        .default_value("100")
                        .value_parser(value_parser!(u64))
                        .requires("NOTUI"),
                );
        }

        #[cfg(not(feature = "tui"))]
        {
            command = command.arg(
                Arg::new("GENERATIONS")
                    .help("How many generations to run")
                    .short('g')
                    .long("generations")
                    .value_name("G")
                    .default_value("100")
                    .value_parser(value_parser!(u64)),
            );
        }

        let matches = command.get_matches();

        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => read_config(path)?,
            None => Config::default(),
        };

        if let Some(&size) = matches.get_one::<usize>("GRIDSIZE") {
            if size < MIN_GRIDSIZE {
                eprintln!(
                    "warning: grid size {} is too small (must be at least {}), using {}",
                    size, MIN_GRIDSIZE, config.size
                );
            } else {
                config = config.set_size(size);
            }
        }

        if matches.get_flag("GLIDER") {
            config = config.set_seed(Seed::Glider);
        } else if matches.get_flag("GOSPER") {
            config = config.set_seed(Seed::GosperGun);
        }

        let readfile = matches.get_one::<PathBuf>("READFILE").cloned();
        let movfile = matches.get_one::<PathBuf>("MOVFILE").cloned();
        #[cfg(feature = "tui")]
        let interval =
            Duration::from_millis(matches.get_one::<u64>("INTERVAL").copied().unwrap_or(50));
        let generations = matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(100);

        Ok(Self {
            config,
            readfile,
            movfile,
            #[cfg(feature = "tui")]
            interval,
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
            generations,
        })
    }
}

/// Reads a [`Config`] from a TOML, JSON or YAML file, chosen by the
/// file extension.
fn read_config(path: &Path) -> Result<Config, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let config: Config = match path.extension().and_then(OsStr::to_str) {
        Some("json") => serde_json::from_str(&text)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
        _ => toml::from_str(&text)?,
    };
    Ok(config)
}
