// corner-grocer: Interactive purchase frequency explorer.
//
// Loads a purchase log (one item name per line), writes a sorted backup of
// the per-item counts, then offers a menu for lookups, listings and a
// histogram.
//
// Usage:
//   corner-grocer [--input PATH] [--backup PATH] [--no-color] [--log-level LEVEL]
//
// Exit codes:
//   0  normal exit
//   1  the input could not be read or the backup could not be written
//   2  invalid command-line arguments

use std::io;

use clap::Parser;
use grocer_cli::{Cli, Menu, Palette, Settings};

fn main() {
    let cli = Cli::parse();
    grocer_cli::init_logging(&cli.log_level);

    let settings = Settings::from_cli(&cli);
    let table =
        grocer_cli::load_table(&settings).unwrap_or_else(|e| grocer_cli::fatal(&e.to_string()));

    println!("Loaded input:   {}", settings.input.display());
    println!("Wrote backup:   {}", settings.backup.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let palette = Palette::new(settings.color);
    let mut menu = Menu::new(&table, palette, stdin.lock(), stdout.lock());
    if let Err(e) = menu.run() {
        grocer_cli::fatal(&format!("terminal I/O failed: {e}"));
    }
}
