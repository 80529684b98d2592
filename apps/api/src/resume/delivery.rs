//! Delivery trigger: turns a rendered document into a downloadable response.
//!
//! The suggested filename uses the current date at the moment of delivery,
//! not the moment the render started. Once the response is handed to the
//! HTTP stack this stage is fire-and-forget — the client owns the rest of
//! the download lifecycle.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;

use crate::resume::renderer::RenderedDocument;

/// `<Name>_Resume_<YYYY-MM-DD>.pdf`, spaces in the name become underscores.
pub fn suggested_filename(person_name: &str, date: NaiveDate) -> String {
    format!(
        "{}_Resume_{}.pdf",
        person_name.replace(' ', "_"),
        date.format("%Y-%m-%d")
    )
}

/// Wraps the rendered bytes in a download response. Callers must not reach
/// this for an empty selection — the handler rejects those upstream.
pub fn deliver(doc: RenderedDocument, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        doc.bytes,
    )
        .into_response()
}
