//! Bounce Square entry point
//!
//! Brings up the window, runs the loop, maps startup failures to a non-zero
//! exit code.

use std::process::ExitCode;

use bounce_square::App;
use bounce_square::platform::WinitDisplay;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Bounce Square starting...");

    let mut display = match WinitDisplay::open() {
        Ok(display) => display,
        Err(e) => {
            log::error!("{e}");
            eprintln!("\n\t{e}\n");
            return ExitCode::FAILURE;
        }
    };

    App::new().run(&mut display);
    ExitCode::SUCCESS
}
