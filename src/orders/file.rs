//! Order-file output and the confirmation hook.

use std::path::{Path, PathBuf};

use super::config::EdiConfig;
use super::segments::render;
use crate::core::{EdiError, PurchaseOrder};

/// File name of an order: `order_<id>.PLA`.
pub fn file_name(order: &PurchaseOrder) -> String {
    format!("order_{}.PLA", order.id)
}

/// Render `order` and write it to the configured directory.
pub fn write(order: &PurchaseOrder, config: &EdiConfig) -> Result<PathBuf, EdiError> {
    let dir = config.resolve_output_dir()?;
    write_to_dir(order, &dir)
}

/// Render `order` and write it into `dir`, replacing any previous file.
///
/// The order is rendered before the directory is checked, so data errors
/// are reported first. The directory is never created.
pub fn write_to_dir(order: &PurchaseOrder, dir: &Path) -> Result<PathBuf, EdiError> {
    let content = render(order)?;
    if !dir.is_dir() {
        return Err(EdiError::PathNotFound {
            path: dir.to_path_buf(),
        });
    }
    let path = dir.join(file_name(order));
    std::fs::write(&path, content.as_bytes()).map_err(|source| EdiError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!(
        order_id = order.id,
        path = %path.display(),
        bytes = content.len(),
        "wrote EDI order file"
    );
    Ok(path)
}

/// Confirmation hook: write an order file for every EDI-enabled order.
///
/// Orders are handled in sequence; the first failure is returned and the
/// remaining orders are left untouched. Returns the written paths.
pub fn proceed(orders: &[PurchaseOrder], config: &EdiConfig) -> Result<Vec<PathBuf>, EdiError> {
    let mut written = Vec::new();
    for order in orders.iter().filter(|o| o.use_edi) {
        match write(order, config) {
            Ok(path) => written.push(path),
            Err(err) => {
                tracing::warn!(order_id = order.id, error = %err, "EDI order file not written");
                return Err(err);
            }
        }
    }
    tracing::info!(
        written = written.len(),
        skipped = orders.len() - written.len(),
        "processed confirmed orders"
    );
    Ok(written)
}
