// Fri May 8 2026 - Alex

use clayout::cli;
use clayout::config::Config;
use clayout::demo;
use clayout::layout::LayoutError;
use clayout::utils::logging;
use colored::Colorize;
use std::io::{self, Write};
use std::process;

fn main() {
    // With no arguments at all, print the two sizeof lines and nothing
    // else.
    if std::env::args_os().len() <= 1 {
        if let Err(e) = run_bare() {
            eprintln!("{} {}", "[!]".red(), e);
            process::exit(1);
        }
        return;
    }

    let args = cli::parse_args();
    logging::init_logger(args.verbose);

    if let Err(e) = cli::run(&args) {
        eprintln!("{} {:#}", "[!]".red(), e);
        process::exit(1);
    }
}

fn run_bare() -> Result<(), LayoutError> {
    let mut stdout = io::stdout().lock();
    demo::run(&mut stdout, &Config::default())?;
    stdout.flush()?;
    Ok(())
}
