//! Axum route handler for the contact relay.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::contact::{submit, ContactFields};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// POST /api/v1/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(fields): Json<ContactFields>,
) -> Result<Json<ContactResponse>, AppError> {
    let outcome = submit(
        &fields,
        &state.config.contact_recipient,
        state.mailer.as_ref(),
    )
    .await?;

    Ok(Json(ContactResponse {
        success: outcome.accepted,
        message: outcome.user_message,
    }))
}
