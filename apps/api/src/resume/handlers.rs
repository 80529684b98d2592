//! Axum route handlers for the resume builder.

use axum::extract::State;
use axum::response::Response;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::biography;
use crate::errors::AppError;
use crate::resume::delivery;
use crate::resume::document;
use crate::resume::section::{SectionKey, SelectionState};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResumeRequest {
    #[serde(default)]
    pub sections: Vec<SectionKey>,
}

/// POST /api/v1/resume
///
/// Selection → document model → rendered PDF → download response.
/// Empty selections are rejected before the model is built, so delivery is
/// never reachable for an empty document.
pub async fn handle_build_resume(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Result<Response, AppError> {
    let selection = SelectionState::from_keys(&request.sections);
    if selection.is_empty() {
        return Err(AppError::Validation(
            "At least one section must be selected".to_string(),
        ));
    }

    let model = document::build(&selection);
    let rendered = state.renderer.render(model).await?;

    // Filename date is taken now, at delivery time.
    let filename = delivery::suggested_filename(biography::PROFILE.name, Utc::now().date_naive());
    info!(sections = selection.len(), %filename, "resume rendered");

    Ok(delivery::deliver(rendered, &filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::chat::{Content, GenerativeBackend, RelayError};
    use crate::config::{Config, ContactTransport};
    use crate::contact::mailer::{Mailer, MailerError, OutboundMail};
    use crate::resume::renderer::PdfRenderer;

    struct NoopBackend;

    #[async_trait]
    impl GenerativeBackend for NoopBackend {
        async fn generate(&self, _contents: &[Content]) -> Result<String, RelayError> {
            Err(RelayError::EmptyReply)
        }
    }

    struct NoopMailer;

    #[async_trait]
    impl Mailer for NoopMailer {
        async fn send(&self, _mail: &OutboundMail) -> Result<(), MailerError> {
            Ok(())
        }
    }

    fn test_state(render_enabled: bool) -> AppState {
        AppState {
            config: Config {
                gemini_api_key: "test-key".to_string(),
                contact_transport: ContactTransport::Smtp,
                contact_recipient: "owner@example.com".to_string(),
                contact_from: "portfolio@example.com".to_string(),
                smtp_host: None,
                smtp_username: None,
                smtp_password: None,
                resend_api_key: None,
                render_enabled,
                port: 8080,
                rust_log: "info".to_string(),
            },
            chat: Arc::new(NoopBackend),
            mailer: Arc::new(NoopMailer),
            renderer: PdfRenderer::new(render_enabled),
        }
    }

    #[tokio::test]
    async fn test_empty_selection_is_rejected_before_render() {
        // Renderer disabled on purpose: if the guard ran after rendering this
        // would surface as UnsupportedEnvironment, not a validation error.
        let err = handle_build_resume(
            State(test_state(false)),
            Json(ResumeRequest { sections: vec![] }),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            AppError::Validation(msg) if msg == "At least one section must be selected"
        ));
    }

    #[tokio::test]
    async fn test_selected_section_yields_pdf_download() {
        let response = handle_build_resume(
            State(test_state(true)),
            Json(ResumeRequest {
                sections: vec![SectionKey::Skills],
            }),
        )
        .await
        .unwrap();

        let headers = response.headers();
        assert_eq!(headers.get("content-type").unwrap(), "application/pdf");
        let disposition = headers.get("content-disposition").unwrap().to_str().unwrap();
        assert!(disposition.contains("_Resume_"));
    }
}
