use crate::config::{self, Config};
use crate::error::Result;
use crate::maker;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for texgen.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the yaml configuration file driving the generation.
    ///
    /// Without it, the built-in default configuration is used.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the default configuration to the console and exit
    #[arg(short, long)]
    pub print: bool,

    /// Save the default configuration to the given yaml file and exit
    #[arg(short, long, value_name = "FILE")]
    pub dump: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}

/// Dispatches the parsed arguments.
///
/// `--print` and `--dump` short-circuit the run; otherwise the pipeline is
/// driven by the given configuration file or, without one, by the built-in
/// default configuration. Compilation failures are reported on the console
/// and do not affect the exit status.
pub fn run(args: Args) -> Result<()> {
    if args.print {
        return config::print_default();
    }
    if let Some(path) = args.dump {
        return config::dump_default(path);
    }

    match args.config {
        Some(path) => maker::generate(config::load_value(path)?)?,
        None => maker::run(Config::default())?,
    };

    Ok(())
}
