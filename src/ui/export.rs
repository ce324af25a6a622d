//! File export of the display surface.

use std::path::Path;

use anyhow::Result;

use crate::config::{EXPORT_DEFAULT_FILENAME, EXPORT_EXTENSION};
use crate::domain::display_text;
use crate::ui::config::UI_TEXT;

use super::app::StockGrabberApp;

impl StockGrabberApp {
    /// Write the full current display content verbatim to a user-chosen path.
    /// Failures are reported via a blocking dialog; the app keeps running.
    pub(super) fn export_display(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Text", &[EXPORT_EXTENSION])
            .set_file_name(EXPORT_DEFAULT_FILENAME)
            .save_file()
        else {
            return; // user cancelled the dialog
        };

        match write_display(&path, &self.output_lines) {
            Ok(()) => {
                self.last_export_status = Some(format!("Saved to {}", path.display()));
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Info)
                    .set_title(UI_TEXT.export_success_title)
                    .set_description(UI_TEXT.export_success_body)
                    .show();
            }
            Err(e) => {
                self.last_export_status = Some(format!("Save failed: {e}"));
                log::error!("Failed to save display content: {e:#}");
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Warning)
                    .set_title(UI_TEXT.export_failure_title)
                    .set_description(format!("Error saving data: {e}"))
                    .show();
            }
        }
    }
}

fn write_display(path: &Path, lines: &[String]) -> Result<()> {
    std::fs::write(path, display_text(lines))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_display_lines_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");

        let lines = vec![
            "Close prices for AMZN (1d):".to_string(),
            "2024-01-02: 150.00".to_string(),
            String::new(),
        ];
        write_display(&path, &lines).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "Close prices for AMZN (1d):\n2024-01-02: 150.00\n\n");
    }

    #[test]
    fn write_failure_surfaces_as_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory path is not writable as a file.
        assert!(write_display(dir.path(), &["x".to_string()]).is_err());
    }
}
