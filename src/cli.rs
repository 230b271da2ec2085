use crate::error::{AnprError, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "anpr-demo")]
#[command(about = "Demo de reconocimiento automático de placas (ANPR)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Logs detallados
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analiza la imagen de un vehículo
    Analyze {
        /// Imagen JPG, JPEG o PNG
        #[arg(required = true)]
        image: PathBuf,

        /// URL del backend (multipart, campo `image`)
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Forzar el analizador simulado
        #[arg(long, conflicts_with = "endpoint")]
        mock: bool,

        /// Imprimir el resultado como JSON
        #[arg(long)]
        json: bool,

        /// Tamaño máximo en MB (sin valor no se comprueba)
        #[arg(long)]
        max_upload_mb: Option<u64>,
    },

    /// Muestra o cambia la configuración
    Config {
        /// URL del backend
        #[arg(long)]
        set_endpoint: Option<String>,

        /// Volver al analizador simulado
        #[arg(long, conflicts_with = "set_endpoint")]
        clear_endpoint: bool,

        /// Retardo del analizador simulado (ms)
        #[arg(long)]
        set_mock_delay_ms: Option<u64>,

        /// Tamaño máximo de subida en MB (0 = sin límite)
        #[arg(long)]
        set_max_upload_mb: Option<u64>,

        /// Mostrar la configuración actual
        #[arg(long)]
        show: bool,
    },
}

/// MB a bytes; 0 significa sin límite
pub fn megabytes_to_limit(megabytes: u64) -> Result<Option<u64>> {
    if megabytes == 0 {
        return Ok(None);
    }

    megabytes
        .checked_mul(1024 * 1024)
        .map(Some)
        .ok_or_else(|| AnprError::Config(format!("tamaño máximo fuera de rango: {} MB", megabytes)))
}
