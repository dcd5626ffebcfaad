use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;


#[derive(Clone, Debug, Eq, Parser, PartialEq)]
struct Opts {
    #[arg(
        default_value = "./cert",
        help = "The directory containing the certificate material to classify. All regular files \
directly inside it are read; subdirectories are ignored.",
    )]
    directory: PathBuf,

    #[arg(
        long = "json",
        help = "Emit the reconstructed chain as JSON instead of the human-readable report."
    )]
    json: bool,
}


fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();

    let result = match certchain::run(&opts.directory) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if opts.json {
        match certchain::report::to_json(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("failed to serialize chain result: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", result);
    }
    ExitCode::SUCCESS
}
