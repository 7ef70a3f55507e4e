use std::path::{Path, PathBuf};

use anyhow::Context;
use nodal_core::{Attachment, Session};

/// Write the session's rows to `<dir>/<file name>.csv`.
///
/// Returns `None` when there is nothing to export.
pub fn write_export(session: &Session, dir: &Path) -> anyhow::Result<Option<PathBuf>> {
    let Some(rows) = session.exportable() else {
        return Ok(None);
    };

    let attachment = Attachment::csv(session.file_name(), rows)?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;

    let path = dir.join(&attachment.file_name);
    std::fs::write(&path, &attachment.bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(path = %path.display(), rows = rows.len(), mime = attachment.mime, "export written");
    Ok(Some(path))
}
