//! Page controller: the generator form state plus the glue to the backend worker.

use client_core::FormState;
use crossbeam_channel::{Receiver, Sender};
use shared::{
    error::GenerationError,
    i18n::{self, Language},
};

use crate::backend_bridge::commands::BackendCommand;
use crate::clipboard::ClipboardWriter;
use crate::controller::{
    events::UiEvent,
    orchestration::{dispatch_backend_command, DispatchFailure},
};

pub struct PageController {
    cmd_tx: Sender<BackendCommand>,
    form: FormState,
    language: Language,
    status: String,
}

impl PageController {
    pub fn new(cmd_tx: Sender<BackendCommand>, language: Language) -> Self {
        Self {
            cmd_tx,
            form: FormState::new(),
            language,
            status: String::new(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Input buffer bound to the text editor; every keystroke lands here.
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.form.input
    }

    /// The prompt field is locked while a request is in flight.
    pub fn input_editable(&self) -> bool {
        !self.form.loading
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            tracing::info!(language = %language, "switching ui language");
            self.language = language;
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    fn fallback(&self) -> &'static str {
        i18n::generation_failed(self.language)
    }

    /// Queues a generation request. Returns `false` when the form guard refused.
    pub fn submit(&mut self) -> bool {
        let Some(request) = self.form.begin_submit() else {
            return false;
        };
        if let Err(failure) =
            dispatch_backend_command(&self.cmd_tx, BackendCommand::Generate { request })
        {
            self.status = failure.to_string();
            let message = match failure {
                DispatchFailure::QueueFull => failure.to_string(),
                DispatchFailure::Disconnected => {
                    i18n::backend_unavailable(self.language).to_string()
                }
            };
            let fallback = self.fallback();
            self.form
                .settle(Err(GenerationError::transport(message)), fallback);
        }
        true
    }

    pub fn drain_events(&mut self, ui_rx: &Receiver<UiEvent>) {
        while let Ok(event) = ui_rx.try_recv() {
            self.handle_event(event);
        }
    }

    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::GenerationSettled(outcome) => {
                if !self.form.loading {
                    tracing::warn!("dropping generation result with no submission in flight");
                    return;
                }
                let fallback = self.fallback();
                self.form.settle(outcome, fallback);
            }
            UiEvent::BackendFailed(message) => {
                tracing::error!("{message}");
                self.status = message;
                if self.form.loading {
                    let fallback = self.fallback();
                    self.form.settle(
                        Err(GenerationError::transport(i18n::backend_unavailable(
                            self.language,
                        ))),
                        fallback,
                    );
                }
            }
        }
    }

    /// Puts the pretty-printed output on the clipboard. Returns `false` when
    /// there is nothing to copy or the clipboard refused the write.
    pub fn copy_output(&self, clipboard: &mut dyn ClipboardWriter) -> bool {
        let Some(text) = self.form.copy_text() else {
            return false;
        };
        match clipboard.write_text(text) {
            Ok(()) => {
                tracing::debug!("copied generation output to clipboard");
                true
            }
            Err(err) => {
                tracing::warn!("failed to copy generation output: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use serde_json::json;
    use shared::protocol::GenerationRequest;

    #[derive(Default)]
    struct RecordingClipboard {
        writes: Vec<String>,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&mut self, text: String) -> Result<(), String> {
            self.writes.push(text);
            Ok(())
        }
    }

    fn controller() -> (PageController, Receiver<BackendCommand>) {
        let (cmd_tx, cmd_rx) = bounded(8);
        (PageController::new(cmd_tx, Language::Indonesian), cmd_rx)
    }

    fn queued_request(cmd_rx: &Receiver<BackendCommand>) -> GenerationRequest {
        match cmd_rx.try_recv().expect("queued command") {
            BackendCommand::Generate { request } => request,
        }
    }

    #[test]
    fn submit_queues_trimmed_prompt_and_enters_pending() {
        let (mut page, cmd_rx) = controller();
        page.input_mut().push_str("  promosi kopi  ");

        assert!(page.submit());

        assert!(page.form().loading);
        let request = queued_request(&cmd_rx);
        assert_eq!(request.user_prompt, "promosi kopi");
        assert_eq!(request.template_id, "auto-market");
    }

    #[test]
    fn blank_submit_queues_nothing() {
        let (mut page, cmd_rx) = controller();
        page.input_mut().push_str("   ");

        assert!(!page.submit());

        assert!(cmd_rx.is_empty());
        assert!(!page.form().loading);
        assert!(page.form().error.is_empty());
    }

    #[test]
    fn second_submit_while_pending_is_ignored() {
        let (mut page, cmd_rx) = controller();
        page.input_mut().push_str("promosi kopi");

        assert!(page.submit());
        assert!(!page.submit());

        assert_eq!(cmd_rx.len(), 1);
    }

    #[test]
    fn input_is_locked_until_submission_settles() {
        let (mut page, cmd_rx) = controller();
        page.input_mut().push_str("promosi kopi");
        assert!(page.input_editable());

        page.submit();
        assert!(!page.input_editable());
        // Enter in the prompt field goes through the same guarded submit.
        assert!(!page.submit());
        assert_eq!(cmd_rx.len(), 1);

        page.handle_event(UiEvent::GenerationSettled(Ok(json!({ "title": "x" }))));
        assert!(page.input_editable());
    }

    #[test]
    fn settled_success_sets_output() {
        let (mut page, _cmd_rx) = controller();
        page.input_mut().push_str("promosi kopi");
        page.submit();

        page.handle_event(UiEvent::GenerationSettled(Ok(json!({ "title": "x" }))));

        assert_eq!(page.form().output, Some(json!({ "title": "x" })));
        assert!(page.form().error.is_empty());
        assert!(!page.form().loading);
    }

    #[test]
    fn settled_failure_uses_language_fallback_and_keeps_output() {
        let (mut page, _cmd_rx) = controller();
        page.input_mut().push_str("promosi kopi");
        page.submit();
        page.handle_event(UiEvent::GenerationSettled(Ok(json!({ "title": "old" }))));

        page.set_language(Language::English);
        page.submit();
        page.handle_event(UiEvent::GenerationSettled(Err(GenerationError::service(
            500, None,
        ))));

        assert_eq!(page.form().error, "Generation failed");
        assert_eq!(page.form().output, Some(json!({ "title": "old" })));
        assert!(!page.form().loading);
    }

    #[test]
    fn stray_result_without_pending_submission_is_dropped() {
        let (mut page, _cmd_rx) = controller();

        page.handle_event(UiEvent::GenerationSettled(Ok(json!({ "title": "x" }))));

        assert!(page.form().output.is_none());
    }

    #[test]
    fn disconnected_backend_settles_submission_immediately() {
        let (cmd_tx, cmd_rx) = bounded(8);
        drop(cmd_rx);
        let mut page = PageController::new(cmd_tx, Language::Indonesian);
        page.input_mut().push_str("promosi kopi");

        assert!(page.submit());

        assert!(!page.form().loading);
        assert_eq!(
            page.form().error,
            i18n::backend_unavailable(Language::Indonesian)
        );
        assert!(page.status().contains("disconnected"));
    }

    #[test]
    fn full_queue_settles_submission_immediately() {
        let (cmd_tx, _cmd_rx) = bounded(1);
        cmd_tx
            .try_send(BackendCommand::Generate {
                request: GenerationRequest::new("earlier"),
            })
            .expect("prefill");
        let mut page = PageController::new(cmd_tx, Language::Indonesian);
        page.input_mut().push_str("promosi kopi");

        assert!(page.submit());

        assert!(!page.form().loading);
        assert_eq!(page.form().error, DispatchFailure::QueueFull.to_string());
    }

    #[test]
    fn backend_failure_releases_pending_submission() {
        let (mut page, _cmd_rx) = controller();
        page.input_mut().push_str("promosi kopi");
        page.submit();

        page.handle_event(UiEvent::BackendFailed(
            "backend worker startup failure".to_string(),
        ));

        assert!(!page.form().loading);
        assert_eq!(page.status(), "backend worker startup failure");
    }

    #[test]
    fn copy_writes_pretty_json() {
        let (mut page, _cmd_rx) = controller();
        page.input_mut().push_str("promosi kopi");
        page.submit();
        page.handle_event(UiEvent::GenerationSettled(Ok(json!({ "a": 1 }))));
        let mut clipboard = RecordingClipboard::default();

        assert!(page.copy_output(&mut clipboard));

        assert_eq!(clipboard.writes, vec!["{\n  \"a\": 1\n}".to_string()]);
    }

    #[test]
    fn copy_without_output_does_nothing() {
        let (page, _cmd_rx) = controller();
        let mut clipboard = RecordingClipboard::default();

        assert!(!page.copy_output(&mut clipboard));

        assert!(clipboard.writes.is_empty());
    }
}
