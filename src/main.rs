use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use dealflow::api::{app_router, AppState};
use dealflow::config::{self, AppConfig};
use dealflow::export::{CsvSheetStore, SheetExporter};
use dealflow::pipeline::classifier::DocumentClassifier;
use dealflow::pipeline::extraction::TextExtractor;
use dealflow::pipeline::structuring::DealExtractor;
use dealflow::pipeline::DocumentPipeline;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("dealflow starting v{}", config::APP_VERSION);

    let app_config = AppConfig::from_env();
    app_config.check();

    let deal_extractor = DealExtractor::from_config(&app_config)?;
    let pipeline = DocumentPipeline::new(
        TextExtractor::default(),
        DocumentClassifier::new(),
        deal_extractor,
    );
    let exporter = SheetExporter::new(Box::new(CsvSheetStore::new(app_config.export_dir.clone())));

    let state = AppState {
        config: app_config.clone(),
        pipeline: Arc::new(pipeline),
        exporter: Arc::new(exporter),
    };

    let listener = tokio::net::TcpListener::bind(&app_config.bind_addr).await?;
    tracing::info!(addr = %app_config.bind_addr, "listening");
    axum::serve(listener, app_router(state)).await?;

    Ok(())
}
