use anyhow::Result;
use clap::Parser;
use corpusprep::{SplitConfig, format_size, parse_size, run_split};
use std::path::PathBuf;
use std::process::ExitCode;

/// Split a large text file into multiple files at paragraph boundaries.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Input text file to split
    input_file: PathBuf,

    /// Target size for each output file (e.g. "10MB", "500KB", or bytes)
    target_size: String,

    /// Output directory (default: same directory as the input file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Prefix for output files (default: input filename without extension)
    #[arg(short, long)]
    prefix: Option<String>,
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
    let target_size = parse_size(&args.target_size)?;

    let config = SplitConfig {
        input: args.input_file.clone(),
        target_size,
        output_dir: args.output_dir,
        prefix: args.prefix,
    };

    let report = run_split(&config)?;

    println!(
        "Input file: {} ({})",
        args.input_file.display(),
        format_size(report.input_size)
    );
    println!("Target batch size: {}", format_size(target_size));
    for part in &report.parts {
        println!("Created: {} ({})", part.path.display(), format_size(part.size));
    }
    println!("Wrote {} parts", report.parts.len());

    Ok(())
}
