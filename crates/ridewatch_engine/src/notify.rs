use std::fmt;
use std::time::Duration;

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use ridewatch_core::{render_table, RideRecord};
use ridewatch_logging::ride_info;
use serde::Deserialize;

pub const ALERT_SUBJECT: &str = "Ride alert: watched driver found";

const SMTP_TIMEOUT: Duration = Duration::from_secs(10);

/// SMTP settings for ride alerts. Passed explicitly; nothing is read from the
/// environment here.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    pub enabled: bool,
    pub smtp_host: String,
    /// Implicit-TLS port.
    pub smtp_port: u16,
    /// Login name, also used as the sender address.
    pub username: String,
    pub password: String,
    pub recipient: String,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 465,
            username: String::new(),
            password: String::new(),
            recipient: String::new(),
        }
    }
}

impl fmt::Debug for NotifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotifierConfig")
            .field("enabled", &self.enabled)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("recipient", &self.recipient)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("notifications are disabled")]
    Disabled,
    #[error("no matching rides to report")]
    NoMatches,
    #[error("invalid address `{address}`: {message}")]
    Address { address: String, message: String },
    #[error("could not build message: {0}")]
    Message(String),
    #[error("smtp delivery failed: {0}")]
    Smtp(String),
}

pub trait Notifier {
    /// `matches` must be non-empty.
    fn notify(&self, matches: &[RideRecord]) -> Result<(), NotifyError>;
}

/// Plain-text alert body listing the matched rides as a table.
pub fn compose_alert(matches: &[RideRecord]) -> String {
    format!(
        "Found {} ride(s) by your watched driver:\n\n{}",
        matches.len(),
        render_table(matches)
    )
}

pub struct SmtpNotifier {
    from: Mailbox,
    to: Mailbox,
    transport: SmtpTransport,
}

impl SmtpNotifier {
    /// Validates addresses and prepares the TLS relay; does not connect.
    pub fn new(config: &NotifierConfig) -> Result<Self, NotifyError> {
        if !config.enabled {
            return Err(NotifyError::Disabled);
        }
        let from = parse_mailbox(&config.username)?;
        let to = parse_mailbox(&config.recipient)?;
        let transport = SmtpTransport::relay(&config.smtp_host)
            .map_err(|err| NotifyError::Smtp(err.to_string()))?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(SMTP_TIMEOUT))
            .build();
        Ok(Self { from, to, transport })
    }

    fn build_message(&self, matches: &[RideRecord]) -> Result<Message, NotifyError> {
        Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(ALERT_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(compose_alert(matches))
            .map_err(|err| NotifyError::Message(err.to_string()))
    }
}

impl Notifier for SmtpNotifier {
    fn notify(&self, matches: &[RideRecord]) -> Result<(), NotifyError> {
        if matches.is_empty() {
            return Err(NotifyError::NoMatches);
        }
        let message = self.build_message(matches)?;
        self.transport
            .send(&message)
            .map_err(|err| NotifyError::Smtp(err.to_string()))?;
        ride_info!("sent alert for {} rides to {}", matches.len(), self.to);
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address
        .trim()
        .parse::<Mailbox>()
        .map_err(|err| NotifyError::Address {
            address: address.to_string(),
            message: err.to_string(),
        })
}
