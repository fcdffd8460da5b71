// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::Sink;
use std::path::Path;

/// Checks whether a file may be created or overwritten.
///
/// - file does NOT exist → Ok
/// - file exists and `force` is set → Ok (with a warning)
/// - file exists and `force == false` → error
pub(crate) fn ensure_writable(sink: &mut dyn Sink, path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() {
        return Ok(());
    }

    if force {
        sink.warning(&format!(
            "The file '{}' already exists and will be overwritten.",
            path.display()
        ));
        return Ok(());
    }

    Err(AppError::Export(format!(
        "the file '{}' already exists (use --force to overwrite)",
        path.display()
    )))
}
