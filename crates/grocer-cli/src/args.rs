// Command-line arguments

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "corner-grocer")]
#[command(about = "Count purchased items and explore their frequencies")]
#[command(version)]
pub struct Cli {
    /// Purchase log to read, one item name per line
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Where to write the frequency backup
    #[arg(long, value_name = "PATH")]
    pub backup: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Log filter used when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}
