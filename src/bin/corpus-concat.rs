use anyhow::Result;
use clap::Parser;
use corpusprep::{ConcatConfig, DEFAULT_DELIMITER, run_concat};
use std::path::PathBuf;
use std::process::ExitCode;

/// Concatenate all text files in a directory into one file,
/// with a delimiter header naming each source file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input directory containing text files
    input_dir: PathBuf,

    /// Output file path
    output_file: PathBuf,

    /// Delimiter string wrapping each file-name header
    #[arg(short, long, default_value = DEFAULT_DELIMITER)]
    delimiter: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = ConcatConfig {
        input_dir: args.input_dir,
        output_file: args.output_file.clone(),
        delimiter: args.delimiter,
    };

    let report = run_concat(&config)?;

    for path in &report.skipped {
        eprintln!("Warning: skipped {} (not valid UTF-8)", path.display());
    }
    println!(
        "Successfully concatenated {} files into {}",
        report.written,
        args.output_file.display()
    );

    Ok(())
}
