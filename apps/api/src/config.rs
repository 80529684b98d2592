use anyhow::{bail, Context, Result};

/// Which outbound mail strategy the contact relay uses. The two are
/// interchangeable; neither is canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTransport {
    Smtp,
    Resend,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub contact_transport: ContactTransport,
    /// Where contact submissions are delivered (the site owner's inbox).
    pub contact_recipient: String,
    /// The From header on outbound contact mail.
    pub contact_from: String,
    pub smtp_host: Option<String>,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub resend_api_key: Option<String>,
    /// Capability gate for the PDF renderer. Deployments without rendering
    /// support set RESUME_RENDER_DISABLED; the render endpoint then fails
    /// with a labeled UnsupportedEnvironment error instead of a fallback.
    pub render_enabled: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let contact_transport = match std::env::var("CONTACT_TRANSPORT")
            .unwrap_or_else(|_| "smtp".to_string())
            .to_lowercase()
            .as_str()
        {
            "smtp" => ContactTransport::Smtp,
            "resend" => ContactTransport::Resend,
            other => bail!("CONTACT_TRANSPORT must be 'smtp' or 'resend', got '{other}'"),
        };

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            contact_transport,
            contact_recipient: require_env("CONTACT_RECIPIENT")?,
            contact_from: require_env("CONTACT_FROM")?,
            smtp_host: std::env::var("SMTP_HOST").ok(),
            smtp_username: std::env::var("SMTP_USERNAME").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
            resend_api_key: std::env::var("RESEND_API_KEY").ok(),
            render_enabled: std::env::var("RESUME_RENDER_DISABLED").is_err(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
