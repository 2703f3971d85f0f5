mod config;
mod error;
mod routes;
mod state;
mod telemetry;

use std::process::ExitCode;

use crate::config::Settings;
use crate::error::StartupError;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Logging may not be up yet when settings fail.
            eprintln!("copilot-server: {e}");
            tracing::error!(error = %e, "startup failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let settings = Settings::from_env()?;
    telemetry::init(settings.log_level, settings.log_format)?;

    tracing::info!(app = %settings.app_name, version = %settings.app_version, "starting");
    tracing::info!(environment = settings.environment.as_str(), debug = settings.debug, "runtime mode");
    settings.log_summary();
    if settings.uses_default_jwt_secret() && settings.environment == config::Environment::Production {
        tracing::warn!("JWT_SECRET_KEY is the default value in production");
    }

    let addr = settings.bind_addr();
    let app_name = settings.app_name.clone();
    let state = state::AppState::new(settings);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!(app = %app_name, "shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
