//! nfa2dfa - convert an NFA description into an equivalent DFA.

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::process;

use nfa2dfa::{Config, convert_file};

#[derive(Parser, Debug)]
#[command(name = "nfa2dfa")]
#[command(about = "Convert an NFA into an equivalent DFA by subset construction", long_about = None)]
#[command(version)]
struct Args {
    /// NFA document to convert
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Where to write the DFA document
    #[arg(short, long, default_value = "dfa.json")]
    output: PathBuf,

    /// Configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Abort once more than this many DFA states are discovered
    #[arg(long)]
    max_states: Option<usize>,

    /// Indentation width of the written JSON
    #[arg(long)]
    indent: Option<usize>,

    /// Do not print the converted automaton
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(limit) = self.max_states {
            config = config.with_max_states(limit);
        }
        if let Some(indent) = self.indent {
            config = config.with_indent(indent);
        }
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = args.config()?;
    let dfa = convert_file(&args.input, &args.output, &config).with_context(|| {
        format!(
            "Failed to convert {} into {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    if !args.quiet {
        println!("{dfa}");
        println!("Conversion complete! DFA saved to {}", args.output.display());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
