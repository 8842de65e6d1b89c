//! Non-interactive command line mode.

mod args;
mod context;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

use log::debug;

pub use args::Args;
pub use context::Context;

pub fn run(args: Args) -> ExitCode {
    match Context::new(args).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("cli run failed: {e:?}");
            e.report();
            e.exit_code()
        }
    }
}
