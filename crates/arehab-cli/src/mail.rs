use lettre::address::AddressError;
use lettre::message::header::{ContentType, ContentTypeErr};
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const DEFAULT_SMTP_PORT: u16 = 465;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid e-mail address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: AddressError,
    },

    #[error("invalid attachment content type: {0}")]
    ContentType(#[from] ContentTypeErr),

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP delivery failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// How the connection to the mail server is secured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmtpSecurity {
    /// TLS from the first byte (usually port 465).
    #[default]
    Tls,
    /// Plain connection upgraded with STARTTLS (usually port 587).
    StartTls,
}

/// Outgoing mail server. The password comes from `AREHAB_SMTP_PASSWORD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpSettings {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Login name; also the sender address unless `sender` is set.
    pub username: String,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub security: SmtpSecurity,
}

fn default_port() -> u16 {
    DEFAULT_SMTP_PORT
}

impl SmtpSettings {
    pub fn sender(&self) -> &str {
        self.sender.as_deref().unwrap_or(&self.username)
    }
}

/// A message carrying one DOCX document.
#[derive(Debug, Clone)]
pub struct OutgoingMail<'a> {
    pub to: &'a str,
    pub subject: &'a str,
    pub body: &'a str,
    pub file_name: &'a str,
    pub document: &'a [u8],
}

fn mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.trim().parse().map_err(|source| MailError::Address {
        address: address.to_string(),
        source,
    })
}

pub fn build_message(settings: &SmtpSettings, mail: &OutgoingMail<'_>) -> Result<Message, MailError> {
    let attachment = Attachment::new(mail.file_name.to_string())
        .body(mail.document.to_vec(), ContentType::parse(DOCX_MIME)?);

    let message = Message::builder()
        .from(mailbox(settings.sender())?)
        .to(mailbox(mail.to)?)
        .subject(mail.subject)
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(mail.body.to_string()))
                .singlepart(attachment),
        )?;
    Ok(message)
}

/// Deliver `message` through the configured server.
pub fn send(settings: &SmtpSettings, password: &str, message: &Message) -> Result<(), MailError> {
    let builder = match settings.security {
        SmtpSecurity::Tls => SmtpTransport::relay(&settings.host)?,
        SmtpSecurity::StartTls => SmtpTransport::starttls_relay(&settings.host)?,
    };
    let transport = builder
        .port(settings.port)
        .credentials(Credentials::new(settings.username.clone(), password.to_string()))
        .build();

    transport.send(message)?;
    tracing::info!(host = %settings.host, port = settings.port, "message delivered");
    Ok(())
}
