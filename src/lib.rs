//! anpr-demo: CLI del demo ANPR
//!
//! Usa el mismo controlador que la interfaz web (`anpr-common`).

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
