use anpr_common::{messages, Controller, ResultView};
use anpr_demo::error::AnprError;
use anpr_demo::{analyzer, cli, config, input, report};
use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn busy_spinner() -> anyhow::Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    spinner.set_message(messages::BUSY_TEXT);
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}

/// Mensaje de la alerta actual, o el indicado si no hay alerta
fn alert_text(controller: &Controller, fallback: &str) -> String {
    controller
        .error_message()
        .unwrap_or_else(|| fallback.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut config = Config::load().context("no se pudo leer la configuración")?;

    match cli.command {
        Commands::Analyze { image, endpoint, mock, json, max_upload_mb } => {
            // con --json sólo se imprime el resultado
            let say = |line: &str| {
                if !json {
                    println!("{}", line);
                }
            };
            say("🚗 anpr-demo - análisis de vehículo\n");

            let mut limits = config.analyzer.upload_limits();
            if let Some(megabytes) = max_upload_mb {
                limits.max_bytes = cli::megabytes_to_limit(megabytes)?;
            }
            let mut controller = Controller::new(limits);

            // 1. Imagen
            say("[1/2] Cargando imagen...");
            let file = input::load_image(&image)?;
            let name = file.name.clone();
            controller
                .select_file(file)
                .map_err(AnprError::from)
                .with_context(|| alert_text(&controller, messages::INVALID_FILE_TYPE))?;
            say(&format!("✔ {} cargada\n", name));

            // 2. Análisis
            let backend = analyzer::Backend::select(&config, endpoint, mock)?;
            say(&format!("[2/2] Analizando ({})...", backend.describe()));
            let spinner = busy_spinner()?;
            let outcome = analyzer::analyze_selected(&mut controller, &backend).await;
            spinner.finish_and_clear();
            tracing::debug!(state = controller.state().as_str(), "análisis terminado");

            let record = outcome.with_context(|| alert_text(&controller, messages::ANALYSIS_FAILED))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("✔ {}\n", messages::RESULTS_READY);
                print!("{}", report::render_view(&ResultView::of(&controller)));
                println!("✅ Análisis completado");
            }
        }

        Commands::Config { set_endpoint, clear_endpoint, set_mock_delay_ms, set_max_upload_mb, show } => {
            let mut changed = false;

            if let Some(url) = set_endpoint {
                config.set_endpoint(Some(url))?;
                changed = true;
            }
            if clear_endpoint {
                config.set_endpoint(None)?;
                changed = true;
            }
            if let Some(delay) = set_mock_delay_ms {
                config.analyzer.mock_delay_ms = delay;
                changed = true;
            }
            if let Some(megabytes) = set_max_upload_mb {
                config.analyzer.max_upload_bytes = cli::megabytes_to_limit(megabytes)?;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ Configuración guardada: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Configuración:");
                println!(
                    "  Backend: {}",
                    config.endpoint().unwrap_or_else(|| "simulado".to_string())
                );
                println!("  Retardo simulado: {} ms", config.analyzer.mock_delay_ms);
                match config.analyzer.max_upload_bytes {
                    Some(limit) => println!("  Tamaño máximo: {} bytes", limit),
                    None => println!("  Tamaño máximo: sin límite"),
                }
                println!("  Timeout HTTP: {} s", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
