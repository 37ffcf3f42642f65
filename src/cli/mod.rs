// Fri May 8 2026 - Alex

pub mod args;
pub mod handler;

pub use args::Args;
pub use handler::CommandHandler;

use clap::Parser;

pub fn parse_args() -> Args {
    Args::parse()
}

pub fn run(args: &Args) -> anyhow::Result<()> {
    if args.no_color || !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }
    CommandHandler::new().execute(args)
}
