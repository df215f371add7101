//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{GenerationBackend, HttpGenerationClient};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, api_base_url: String) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                return;
            }
        };

        let client = HttpGenerationClient::new(&api_base_url);
        tracing::info!(endpoint = client.endpoint(), "backend worker ready");
        let _ = ui_tx.try_send(UiEvent::Info(format!("Endpoint: {}", client.endpoint())));

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Generate { request } => {
                        let outcome = client.generate(&request).await;
                        if ui_tx.send(UiEvent::GenerationSettled(outcome)).is_err() {
                            tracing::debug!("ui event channel closed; stopping backend worker");
                            break;
                        }
                    }
                }
            }
        });
        tracing::info!("backend worker stopped");
    });
}
