// Fri May 8 2026 - Alex

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clayout")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "C struct layout and padding calculator", long_about = None)]
pub struct Args {
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(short, long)]
    pub detail: bool,

    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub text_output: Option<PathBuf>,

    #[arg(long)]
    pub markdown_output: Option<PathBuf>,

    #[arg(long)]
    pub c_output: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[arg(long)]
    pub no_color: bool,
}
