use std::process::ExitCode;

use clap::Parser;
use log::debug;

mod cli;
mod clipboard;
mod exits;
mod terminal;
mod tui;

use cli::{Args, quiet};

fn main() -> ExitCode {
    exits::install_handlers();
    init_logging();

    let interactive_default = std::env::args_os().len() == 1 && quiet::is_interactive();
    let args = Args::parse();
    debug!("entropy source: {}", charpass::rand::source_name());

    if args.interactive || interactive_default {
        tui::run()
    } else {
        cli::run(args)
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
