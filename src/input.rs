//! Carga de la imagen desde disco
//!
//! El tipo MIME declarado sale de la extensión, como haría el navegador;
//! el contenido no se inspecciona.

use crate::error::{AnprError, Result};
use anpr_common::SelectedFile;
use std::path::Path;

pub fn mime_from_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

pub fn load_image(path: &Path) -> Result<SelectedFile> {
    if !path.is_file() {
        return Err(AnprError::FileNotFound(path.display().to_string()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let bytes = std::fs::read(path)?;

    Ok(SelectedFile::new(name, mime_from_extension(path), bytes))
}
