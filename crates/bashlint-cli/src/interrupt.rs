//! Ctrl+C handling.
//!
//! A helper thread waits for the interrupt signal and raises a shared flag.
//! The walker checks the flag at every directory entry, so a file that is
//! being read or reported is always finished first. A second Ctrl+C exits at
//! once, since the listener keeps SIGINT from reaching its default action.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Exit status for a second Ctrl+C (128 + SIGINT).
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Installs the Ctrl+C listener and returns the flag it raises.
pub fn install() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    let raised = Arc::clone(&flag);

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                warn!("Interrupt handling unavailable: {}", e);
                return;
            }
        };

        runtime.block_on(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for Ctrl+C: {}", e);
                return;
            }
            debug!("Received Ctrl+C, stopping traversal");
            raised.store(true, Ordering::SeqCst);

            if tokio::signal::ctrl_c().await.is_ok() {
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
        });
    });

    flag
}
