//! Download filename construction

use crate::models::config::DEFAULT_FILENAME;
use crate::models::ExportFormat;

/// `{base}.{ext}` for a download.
///
/// An empty base falls back to [`DEFAULT_FILENAME`]; path separators become
/// `-`, and a base already ending in the format's extension is not doubled.
pub fn export_filename(base: &str, format: ExportFormat) -> String {
    let mut base = base.trim().replace(['/', '\\'], "-");

    let suffix = format!(".{}", format.extension());
    if base.to_ascii_lowercase().ends_with(&suffix) {
        base.truncate(base.len() - suffix.len());
    }

    let base = base.trim();
    let base = if base.is_empty() { DEFAULT_FILENAME } else { base };
    format!("{}{}", base, suffix)
}
