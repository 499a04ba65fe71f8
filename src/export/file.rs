//! Export file naming and saving.

use super::types::{ExportError, ExportFormat, ExportedImage};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_STAMP: AtomicI64 = AtomicI64::new(0);

/// Returns the current Unix time in milliseconds, strictly increasing per process.
///
/// Two exports inside the same millisecond get consecutive stamps so their file
/// names never collide.
fn unique_millis() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_STAMP.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_STAMP.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

/// Generate a `<unix-epoch-millis>.<ext>` filename.
pub fn generate_filename(format: ExportFormat) -> String {
    format!("{}.{}", unique_millis(), format.extension())
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Writes an exported image into `directory` under its suggested name.
///
/// # Returns
/// Path to the saved file
pub fn save_export(image: &ExportedImage, directory: &Path) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(directory)?;
    let file_path = directory.join(&image.filename);

    log::info!(
        "Saving {}x{} {} export to: {} ({} bytes)",
        image.width,
        image.height,
        image.format,
        file_path.display(),
        image.bytes.len()
    );

    fs::write(&file_path, &image.bytes)?;

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
