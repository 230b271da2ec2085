//! Textos visibles para el usuario

pub const APP_TITLE: &str = "Sistema ANPR";
pub const APP_SUBTITLE: &str = "Sube una imagen de un vehículo para analizar su placa y detalles usando nuestro sistema de reconocimiento automático.";

pub const UPLOAD_TITLE: &str = "Subir Imagen";
pub const UPLOAD_DESCRIPTION: &str = "Selecciona o arrastra una imagen del vehículo para analizar";
pub const DROP_PROMPT: &str = "Haz clic para subir o arrastra y suelta";
pub const FORMAT_HINT: &str = "JPG, JPEG, o PNG (máx. 10MB)";
pub const PREVIEW_ALT: &str = "Vista previa del vehículo";
pub const LOADED_BADGE: &str = "Imagen cargada";

pub const SUBMIT_LABEL: &str = "Analizar Vehículo";
pub const SUBMIT_BUSY_LABEL: &str = "Analizando...";
pub const RESET_LABEL: &str = "Reiniciar";

pub const RESULTS_TITLE: &str = "Resultados del Análisis";
pub const RESULTS_READY: &str = "Información del vehículo y placa";
pub const RESULTS_PENDING: &str = "Los resultados aparecerán aquí después del análisis";
pub const BUSY_TEXT: &str = "Analizando tu imagen...";
pub const EMPTY_STATE: &str = "Sube y analiza una imagen de un vehículo para ver los resultados aquí";

pub const ALERT_TITLE: &str = "Error";
pub const INVALID_FILE_TYPE: &str = "Por favor sube una imagen válida (JPEG, JPG, o PNG)";
pub const NO_FILE_SELECTED: &str = "Por favor selecciona una imagen para analizar";
pub const ANALYSIS_FAILED: &str = "Ocurrió un error al analizar la imagen. Por favor intenta de nuevo.";

/// Tamaño legible: MB o KB exactos, si no bytes
pub fn size_label(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;

    if bytes >= MB && bytes % MB == 0 {
        format!("{}MB", bytes / MB)
    } else if bytes >= KB && bytes % KB == 0 {
        format!("{}KB", bytes / KB)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Alerta de tamaño con el límite realmente aplicado
pub fn file_too_large(limit: u64) -> String {
    format!("La imagen supera el tamaño máximo permitido ({})", size_label(limit))
}

/// Pista de formatos; con límite configurado muestra ese límite
pub fn format_hint(max_bytes: Option<u64>) -> String {
    match max_bytes {
        Some(limit) => format!("JPG, JPEG, o PNG (máx. {})", size_label(limit)),
        None => FORMAT_HINT.to_string(),
    }
}

/// Etiqueta del botón de envío según el estado
pub fn submit_label(is_analyzing: bool) -> &'static str {
    if is_analyzing {
        SUBMIT_BUSY_LABEL
    } else {
        SUBMIT_LABEL
    }
}

/// Descripción de la tarjeta de resultados
pub fn results_description(has_record: bool) -> &'static str {
    if has_record {
        RESULTS_READY
    } else {
        RESULTS_PENDING
    }
}
