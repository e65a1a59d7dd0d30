use briefing_core::catalog::ccsp_deck;
use briefing_core::theme::Theme;
use briefing_export::preflight::{missing_backends, remediation};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use briefing_web::config::{Config, LogFormat};
use briefing_web::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::from_env()?;
    init_tracing(config.log_format);

    for format in missing_backends() {
        tracing::warn!(
            %format,
            remediation = ?remediation(format),
            "export backend not compiled in"
        );
    }

    let state = AppState::new(ccsp_deck(), Theme::ccsp(), config.scratch_dir.clone());
    let app = briefing_web::app(state);

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        scratch_dir = %config.scratch_dir.display(),
        "briefing server listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}
