//! Wordle Filter - list the words still consistent with your guesses
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use wordle_filter::cli::Args;
use wordle_filter::processor::Processor;
use wordle_filter::report::{print_error, print_header, print_info};

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging; an explicit RUST_LOG takes precedence
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Validate attempts before touching the dictionary
    let config = args.to_config()?;

    if args.verbose {
        print_config(&args);
    }

    let processor = Processor::new(config);
    processor.process()?;

    Ok(())
}

/// Print configuration summary
fn print_config(args: &Args) {
    print_header("Configuration");

    print_info(&format!("Words file:  {:?}", args.words_file));
    print_info(&format!("Attempts:    {}", args.attempts.join(" ")));
    print_info(&format!(
        "Exclusions:  {}",
        args.exclusions.as_deref().unwrap_or("(none)")
    ));
}
