//! Email notification delivery via SMTP.
//!
//! [`SmtpMailer`] wraps the `lettre` async SMTP transport and sends one HTML
//! notification per submission to the site operator. Configuration is loaded
//! from environment variables; if the credentials are not set,
//! [`MailConfig::from_env`] returns `None` and [`DisabledNotifier`] should be
//! used instead.

use async_trait::async_trait;
use folio_core::submission::NewSubmission;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, rejection).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The sender or recipient address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// No SMTP credentials were configured at startup.
    #[error("Email delivery is not configured")]
    NotConfigured,
}

// ---------------------------------------------------------------------------
// MailConfig
// ---------------------------------------------------------------------------

/// Default SMTP relay.
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Configuration for the SMTP notification transport.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// Account used to authenticate; also the sender address.
    pub user: String,
    /// Account password or app password.
    pub password: String,
    /// Fixed destination for every notification.
    pub receiver: String,
}

impl MailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `EMAIL_USER` or `EMAIL_PASS` is not set.
    ///
    /// | Variable         | Required | Default          |
    /// |------------------|----------|------------------|
    /// | `EMAIL_USER`     | yes      | —                |
    /// | `EMAIL_PASS`     | yes      | —                |
    /// | `EMAIL_RECEIVER` | no       | `EMAIL_USER`     |
    /// | `SMTP_HOST`      | no       | `smtp.gmail.com` |
    /// | `SMTP_PORT`      | no       | `587`            |
    pub fn from_env() -> Option<Self> {
        let user = std::env::var("EMAIL_USER").ok()?;
        let password = std::env::var("EMAIL_PASS").ok()?;
        Some(Self {
            smtp_host: std::env::var("SMTP_HOST")
                .unwrap_or_else(|_| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            receiver: std::env::var("EMAIL_RECEIVER").unwrap_or_else(|_| user.clone()),
            user,
            password,
        })
    }
}

// ---------------------------------------------------------------------------
// Notifier
// ---------------------------------------------------------------------------

/// Sends the operator notification for a stored submission.
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    /// Send one notification and return its `Message-ID`.
    async fn notify(&self, submission: &NewSubmission) -> Result<String, MailError>;
}

/// Notifier used when mail is not configured; every send fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn notify(&self, _submission: &NewSubmission) -> Result<String, MailError> {
        Err(MailError::NotConfigured)
    }
}

// ---------------------------------------------------------------------------
// SmtpMailer
// ---------------------------------------------------------------------------

/// SMTP notifier. The transport is built once and reused for every send.
#[derive(Debug)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Address,
    receiver: Mailbox,
}

impl SmtpMailer {
    /// Parse the configured addresses and build the STARTTLS transport.
    ///
    /// No connection is opened until the first send.
    pub fn new(config: MailConfig) -> Result<Self, MailError> {
        let sender: Address = config.user.parse()?;
        let receiver: Mailbox = config.receiver.parse()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(config.user, config.password))
            .build();

        Ok(Self {
            transport,
            sender,
            receiver,
        })
    }

    /// Assemble the notification message for a submission.
    ///
    /// The sender mailbox carries the submitter's name as display name and
    /// replies go to the submitter. A reply-to address that does not parse is
    /// left out rather than failing the whole notification.
    pub fn compose(&self, submission: &NewSubmission) -> Result<Message, MailError> {
        let message_id = format!("<{}@{}>", uuid::Uuid::new_v4(), self.sender.domain());

        let mut builder = Message::builder()
            .from(Mailbox::new(
                Some(submission.name.clone()),
                self.sender.clone(),
            ))
            .to(self.receiver.clone())
            .subject(format!("New contact form submission from {}", submission.name))
            .message_id(Some(message_id))
            .header(ContentType::TEXT_HTML);

        match submission.email.parse::<Mailbox>() {
            Ok(reply_to) => builder = builder.reply_to(reply_to),
            Err(e) => {
                tracing::warn!(
                    email = %submission.email,
                    error = %e,
                    "Submitter address is not a valid mailbox, omitting Reply-To",
                );
            }
        }

        builder
            .body(render_html_body(submission))
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl Notifier for SmtpMailer {
    async fn notify(&self, submission: &NewSubmission) -> Result<String, MailError> {
        let message = self.compose(submission)?;
        let message_id = message
            .headers()
            .get_raw("Message-ID")
            .unwrap_or_default()
            .to_string();

        let response = self.transport.send(message).await?;

        tracing::info!(
            to = %self.receiver,
            message_id = %message_id,
            smtp_code = %response.code(),
            "Notification email sent",
        );
        Ok(message_id)
    }
}

/// Render the HTML body listing the submission's fields.
///
/// Line breaks in the prompt become `<br>`; values are inserted verbatim.
pub fn render_html_body(submission: &NewSubmission) -> String {
    let prompt = submission.prompt.replace("\r\n", "<br>").replace('\n', "<br>");
    format!(
        "<h2>New contact form submission</h2>\
         <p><strong>Name:</strong> {name}</p>\
         <p><strong>Email:</strong> {email}</p>\
         <p><strong>About:</strong> {about}</p>\
         <p><strong>Message:</strong><br>{prompt}</p>",
        name = submission.name,
        email = submission.email,
        about = submission.about.as_deref().unwrap_or(""),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
