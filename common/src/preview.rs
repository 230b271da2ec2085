//! Vista previa como Data URL

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// "data:image/png;base64,iVBOR..." a partir de los bytes del archivo
pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}
