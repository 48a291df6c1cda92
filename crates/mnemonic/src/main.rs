//! `mnemonic` command-line tool.
//!
//! Exit status: 0 when every entry got a mnemonic, 2 when no assignment
//! exists, 1 on any error.

use std::process::ExitCode;

use clap::Parser;
use mnemonic::cli::{run, Args};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    if !args.quiet {
        mnemonic::console::init();
    }

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(config, args.explain).await {
        Ok(report) => {
            print!("{}", report.output);
            if !report.output.ends_with('\n') {
                println!();
            }
            if report.satisfiable {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
