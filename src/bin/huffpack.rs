use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use huffpack::pipeline;

#[derive(Parser, Debug)]
#[command(name = "huffpack")]
#[command(about = "Compress and decompress files with byte-level Huffman coding")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Show verbose statistics
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress FILE into FILE.huf
    Compress {
        /// Input file
        file: PathBuf,
    },
    /// Decompress FILE.huf, writing the reconstructed original
    Decompress {
        /// Compressed artifact (must end in .huf)
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), huffpack::Error> {
    let args = Args::parse();
    let start = std::time::Instant::now();

    match &args.command {
        Command::Compress { file } => {
            let report = pipeline::compress(file)?;
            let elapsed = start.elapsed();

            println!("{}", report.output.display());
            if args.verbose {
                eprintln!("Compression complete:");
                eprintln!("  Input bytes:      {}", report.input_bytes);
                eprintln!("  Output bytes:     {}", report.output_bytes);
                eprintln!("  Payload bits:     {}", report.payload_bits);
                if report.input_bytes > 0 {
                    eprintln!(
                        "  Ratio:            {:.1}%",
                        report.output_bytes as f64 / report.input_bytes as f64 * 100.0
                    );
                }
                eprintln!("  Time:             {:.2?}", elapsed);
            }
        }
        Command::Decompress { file } => {
            let report = pipeline::decompress(file)?;
            let elapsed = start.elapsed();

            println!("{}", report.output.display());
            if args.verbose {
                eprintln!("Decompression complete:");
                eprintln!("  Output bytes:     {}", report.output_bytes);
                eprintln!("  Time:             {:.2?}", elapsed);
            }
        }
    }
    Ok(())
}
