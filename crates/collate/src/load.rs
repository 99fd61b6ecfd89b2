use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

/// Load one version of the text for comparison
///
/// The bytes are decoded as UTF-8 (lossily, so a stray invalid sequence
/// becomes U+FFFD instead of aborting the run) and any byte order marks
/// are dropped from the comparison material.
pub fn load_text(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("cannot read file: {}", path.display()))?;
    let mut text = String::from_utf8_lossy(&bytes).into_owned();
    if text.contains('\u{FEFF}') {
        warn!("BOM detected in {}", path.display());
        text.retain(|ch| ch != '\u{FEFF}');
    }
    Ok(text)
}
