//! Parser de respuestas del backend
//!
//! Extrae el objeto JSON de la respuesta y lo valida contra el esquema
//! estricto de AnalysisRecord.

use crate::error::AnalysisError;
use crate::types::AnalysisRecord;

/// Extrae la parte JSON de una respuesta
///
/// Prioridad de extracción:
/// 1. Bloque ```json ... ```
/// 2. Objeto {...} crudo
/// 3. Error
///
/// # Examples
/// ```
/// use anpr_common::extract_json;
///
/// let body = "resultado: {\"car\": {}} fin";
/// assert_eq!(extract_json(body).unwrap(), "{\"car\": {}}");
/// ```
pub fn extract_json(response: &str) -> Result<&str, AnalysisError> {
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + "```json".len();
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(AnalysisError::Malformed("no se encontró JSON".into()))
}

/// Parsea el cuerpo de la respuesta a un AnalysisRecord completo
///
/// # Returns
/// * `Ok(AnalysisRecord)` - todos los campos presentes
/// * `Err(AnalysisError::Malformed)` - sin JSON, JSON inválido o campos faltantes
pub fn parse_analysis_record(response: &str) -> Result<AnalysisRecord, AnalysisError> {
    let json_str = extract_json(response)?;
    serde_json::from_str(json_str.trim())
        .map_err(|e| AnalysisError::Malformed(format!("JSON inválido: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BODY: &str = r#"{
        "car": {"make": "Toyota", "model": "Corolla", "color": "Plateado"},
        "license_plate": {"number": "ABC123", "country": "México", "region": "Ciudad de México"},
        "environment": {"location_type": "Calle", "weather": "Soleado", "time_of_day": "Día"},
        "additional_info": {"occupants_visible": "Sí", "damage": "No visible"}
    }"#;

    // =============================================
    // extract_json
    // =============================================

    #[test]
    fn test_extract_json_with_block() {
        let response = "Aquí está:\n```json\n{\"a\": 1}\n```\nfin";
        assert_eq!(extract_json(response).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn test_extract_json_raw() {
        assert_eq!(extract_json(r#"{"a": 1}"#).unwrap(), r#"{"a": 1}"#);
    }

    #[test]
    fn test_extract_json_error() {
        let result = extract_json("sin json");
        match result {
            Err(AnalysisError::Malformed(msg)) => assert!(msg.contains("no se encontró JSON")),
            other => panic!("se esperaba Malformed: {:?}", other),
        }
    }

    #[test]
    fn test_extract_json_empty() {
        assert!(extract_json("").is_err());
    }

    // =============================================
    // parse_analysis_record
    // =============================================

    #[test]
    fn test_parse_full_record() {
        let record = parse_analysis_record(FULL_BODY).unwrap();
        assert_eq!(record, AnalysisRecord::mock());
    }

    #[test]
    fn test_parse_fenced_record() {
        let response = format!("```json\n{}\n```", FULL_BODY);
        let record = parse_analysis_record(&response).unwrap();
        assert_eq!(record.license_plate.number, "ABC123");
    }

    #[test]
    fn test_parse_missing_group() {
        let response = r#"{"car": {"make": "Toyota", "model": "Corolla", "color": "Plateado"}}"#;
        let err = parse_analysis_record(response).unwrap_err();
        match err {
            AnalysisError::Malformed(msg) => assert!(msg.contains("license_plate")),
            other => panic!("se esperaba Malformed: {:?}", other),
        }
    }

    #[test]
    fn test_parse_wrong_field_type() {
        let response = FULL_BODY.replace("\"ABC123\"", "123");
        assert!(matches!(
            parse_analysis_record(&response),
            Err(AnalysisError::Malformed(_))
        ));
    }
}
