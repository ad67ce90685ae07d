//! CLI surface (spec §6.2): load any files given on the command line into
//! the global environment, then continue into the REPL unless `--no-repl`
//! was given.

mod repl;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lispr::{load_file, Environment, StdPrinter};

/// A read-evaluate-print loop and file loader for the Lispr dialect.
#[derive(Parser, Debug)]
#[command(name = "lispr", version)]
struct Args {
    /// Files to `load` into the global environment before starting the REPL.
    files: Vec<PathBuf>,

    /// Load the given files and exit instead of continuing into the REPL.
    #[arg(long)]
    no_repl: bool,

    /// Increase log verbosity (repeatable: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let env = Environment::new_global();
    let mut printer = StdPrinter;

    let mut had_load_error = false;
    for file in &args.files {
        let path = file.to_string_lossy().into_owned();
        let result = load_file(&env, &path, &mut printer);
        if let lispr::Value::Error(e) = result {
            eprintln!("Error: {e}");
            had_load_error = true;
        }
    }

    if args.no_repl {
        return if had_load_error { ExitCode::FAILURE } else { ExitCode::SUCCESS };
    }

    repl::run(&env, &mut printer);
    ExitCode::SUCCESS
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}
