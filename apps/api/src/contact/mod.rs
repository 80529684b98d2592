//! Contact relay — validates form submissions locally and forwards them to
//! the configured mail transport.
//!
//! Validation order is fixed: honeypot first (bots that fill the hidden
//! field get a silent "success" and nothing is sent), then required fields,
//! then the email shape check, and only then the upstream dispatch. Dispatch
//! failures are reported to the visitor as a generic retry-later message and
//! are never fatal to the process.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

pub mod handlers;
pub mod mailer;

use crate::errors::AppError;
use self::mailer::{Mailer, OutboundMail};

/// Basic `local@domain.tld` shape check — same rule the reference form used.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// All fields default to empty so absent JSON keys flow into the same
/// "All fields are required" validation path as blank ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Hidden spam-trap field; humans never fill it.
    pub honeypot: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitOutcome {
    pub accepted: bool,
    pub user_message: String,
}

/// Validates the submission and dispatches it through the mailer.
pub async fn submit(
    fields: &ContactFields,
    recipient: &str,
    mailer: &dyn Mailer,
) -> Result<SubmitOutcome, AppError> {
    // Spam trap: report success without sending anything.
    if !fields.honeypot.is_empty() {
        info!("honeypot tripped; dropping contact submission");
        return Ok(SubmitOutcome {
            accepted: true,
            user_message: "Message sent successfully!".to_string(),
        });
    }

    if fields.name.trim().is_empty()
        || fields.email.trim().is_empty()
        || fields.subject.trim().is_empty()
        || fields.message.trim().is_empty()
    {
        return Err(AppError::Validation("All fields are required".to_string()));
    }

    if !EMAIL_SHAPE.is_match(&fields.email) {
        return Err(AppError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }

    let mail = OutboundMail {
        to: recipient.to_string(),
        reply_to: fields.email.clone(),
        subject: format!("Portfolio Contact: {}", fields.subject),
        html_body: render_html(fields),
    };

    mailer
        .send(&mail)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(SubmitOutcome {
        accepted: true,
        user_message: "Thank you! Your message has been sent successfully.".to_string(),
    })
}

fn render_html(fields: &ContactFields) -> String {
    format!(
        "<h2>New Contact Form Submission</h2>\
         <p><strong>Name:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Subject:</strong> {}</p>\
         <p><strong>Message:</strong></p>\
         <p>{}</p>\
         <hr>\
         <p><small>Sent from your portfolio contact form</small></p>",
        fields.name,
        fields.email,
        fields.subject,
        fields.message.replace('\n', "<br>")
    )
}
