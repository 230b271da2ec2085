//! ANPR Demo Common Library
//!
//! Tipos, validación y controlador compartidos por la CLI y la Web (WASM)

pub mod types;
pub mod error;
pub mod messages;
pub mod validation;
pub mod preview;
pub mod parser;
pub mod analyzer;
pub mod controller;
pub mod render;
pub mod config;

pub use types::{AdditionalInfo, AnalysisRecord, EnvironmentInfo, PlateInfo, SelectedFile, VehicleInfo};
pub use error::{AnalysisError, SubmitError, ValidationError};
pub use validation::{is_accepted_mime, validate_candidate, validate_mime, UploadLimits, ACCEPT_ATTRIBUTE};
pub use parser::{extract_json, parse_analysis_record};
pub use analyzer::{AnalysisPort, StaticAnalyzer};
pub use controller::{Alert, AnalysisTicket, Controller, InteractionState};
pub use render::{display_groups, DisplayGroup, DisplayRow, GroupKind, ResultView, ValueStyle};
pub use config::AnalyzerConfig;
