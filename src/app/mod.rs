pub mod command;
pub mod controller;
pub mod shutdown;
pub mod simulation;
pub mod state;

pub use command::{Command, CommandParseError};
pub use controller::{Controller, SharedBoard};
pub use shutdown::ShutdownManager;
pub use simulation::{RunSummary, Simulation, StopReason};
pub use state::load_config;

use std::io::BufRead;

/// Reads commands from stdin, one per line, on a detached thread so a
/// pending read never holds up process exit.
pub fn spawn_stdin_commands(controller: Controller) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::warn!("Failed to read command: {e}");
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if let Err(e) = controller.dispatch(command) {
                        tracing::warn!("Command failed: {e}");
                    }
                }
                Err(e) => tracing::warn!("{e}"),
            }
            if controller.is_quit_requested() {
                break;
            }
        }
    })
}
