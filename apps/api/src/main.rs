mod biography;
mod chat;
mod config;
mod contact;
mod errors;
mod resume;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::gemini::GeminiClient;
use crate::chat::GenerativeBackend;
use crate::config::{Config, ContactTransport};
use crate::contact::mailer::{Mailer, ResendMailer, SmtpMailer};
use crate::resume::renderer::PdfRenderer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("portfolio_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize chat backend
    let chat: Arc<dyn GenerativeBackend> =
        Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    info!("Chat backend initialized (model: {})", chat::gemini::MODEL);

    // Initialize contact mail transport (SMTP or Resend, per CONTACT_TRANSPORT)
    let mailer = build_mailer(&config)?;
    info!("Contact mailer initialized ({:?})", config.contact_transport);

    // Initialize the PDF rendering engine (capability-gated)
    let renderer = PdfRenderer::new(config.render_enabled);
    if !config.render_enabled {
        warn!("Resume rendering disabled for this deployment (RESUME_RENDER_DISABLED)");
    }

    // Build app state
    let state = AppState {
        config: config.clone(),
        chat,
        mailer,
        renderer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs the contact mail strategy selected by configuration.
fn build_mailer(config: &Config) -> Result<Arc<dyn Mailer>> {
    match config.contact_transport {
        ContactTransport::Smtp => {
            let host = config
                .smtp_host
                .as_deref()
                .context("SMTP_HOST is required when CONTACT_TRANSPORT=smtp")?;
            let username = config
                .smtp_username
                .as_deref()
                .context("SMTP_USERNAME is required when CONTACT_TRANSPORT=smtp")?;
            let password = config
                .smtp_password
                .as_deref()
                .context("SMTP_PASSWORD is required when CONTACT_TRANSPORT=smtp")?;
            let mailer = SmtpMailer::new(host, username, password, &config.contact_from)
                .context("failed to build SMTP transport")?;
            Ok(Arc::new(mailer))
        }
        ContactTransport::Resend => {
            let api_key = config
                .resend_api_key
                .clone()
                .context("RESEND_API_KEY is required when CONTACT_TRANSPORT=resend")?;
            Ok(Arc::new(ResendMailer::new(
                api_key,
                config.contact_from.clone(),
            )))
        }
    }
}
