use arboard::Clipboard;

/// Write-only access to the platform clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: String) -> Result<(), String>;
}

#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: String) -> Result<(), String> {
        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(text).map_err(|err| err.to_string())
    }
}
