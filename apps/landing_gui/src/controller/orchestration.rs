//! Command orchestration helpers from UI actions to backend command queue.

use std::fmt;

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchFailure {
    QueueFull,
    Disconnected,
}

impl fmt::Display for DispatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchFailure::QueueFull => f.write_str("UI command queue is full; please retry"),
            DispatchFailure::Disconnected => f.write_str(
                "Backend command processor disconnected (possible startup/runtime failure)",
            ),
        }
    }
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), DispatchFailure> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err(DispatchFailure::QueueFull)
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(command = cmd_name, "backend command processor disconnected");
            Err(DispatchFailure::Disconnected)
        }
    }
}
