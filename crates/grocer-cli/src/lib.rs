// grocer-cli: argument parsing, settings, rendering and the interactive menu.

pub mod args;
pub mod config;
pub mod menu;
pub mod render;

use std::process;

use grocer_core::{FrequencyTable, GrocerError};

pub use args::Cli;
pub use config::Settings;
pub use menu::Menu;
pub use render::Palette;

/// Load the purchase log named by `settings` and immediately write its
/// backup.
pub fn load_table(settings: &Settings) -> Result<FrequencyTable, GrocerError> {
    let mut table = FrequencyTable::new(&settings.input);
    table.load()?;
    table.write_backup(&settings.backup)?;
    Ok(table)
}

/// Send log output to stderr, filtered by `RUST_LOG` or else `level`.
pub fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
