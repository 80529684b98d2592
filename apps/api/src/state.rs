use std::sync::Arc;

use crate::chat::GenerativeBackend;
use crate::config::Config;
use crate::contact::mailer::Mailer;
use crate::resume::renderer::PdfRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Upstream generative backend for the chat relay. Production: Gemini.
    pub chat: Arc<dyn GenerativeBackend>,
    /// Outbound mail strategy for the contact relay — SMTP or Resend,
    /// selected via CONTACT_TRANSPORT.
    pub mailer: Arc<dyn Mailer>,
    /// Capability-gated PDF rendering engine.
    pub renderer: PdfRenderer,
}
