//! # Shrine Storefront Entry Point
//!
//! Plays a scripted shopping session against the storefront host and
//! prints every notification as a JSON line.
//!
//! ## Startup Sequence
//! 1. Parse command line
//! 2. Initialize tracing (logging)
//! 3. Load configuration
//! 4. Run the frame loop until `frames.run_for_ms`

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match shrine_storefront_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("shrine-storefront: {e}");
            ExitCode::FAILURE
        }
    }
}
