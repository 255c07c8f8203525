// notifier/email.rs

use crate::config::EmailConfig;
use crate::model::NotifyError;
use crate::notifier::Notifier;
use crate::utils::split_recipients;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, info, warn};

pub const SUBJECT: &str = "Woot Sniper: matching deals";

pub struct EmailNotifier {
    sender: Mailbox,
    recipients: Vec<Mailbox>,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailNotifier {
    pub fn new(config: &EmailConfig) -> Result<Self, NotifyError> {
        let sender = parse_mailbox(&config.sender)?;
        let recipients = config
            .recipient
            .as_deref()
            .map(split_recipients)
            .unwrap_or_default()
            .iter()
            .map(|r| parse_mailbox(r))
            .collect::<Result<Vec<_>, _>>()?;
        if recipients.is_empty() {
            return Err(NotifyError::NoRecipients);
        }

        // Plain SMTP to a local relay.
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
            .port(config.smtp_port)
            .build();

        Ok(Self {
            sender,
            recipients,
            transport,
        })
    }

    pub fn recipients(&self) -> &[Mailbox] {
        &self.recipients
    }

    pub fn build_message(&self, html: &str) -> Result<Message, NotifyError> {
        let mut builder = Message::builder()
            .from(self.sender.clone())
            .subject(SUBJECT)
            .header(ContentType::TEXT_HTML);
        for recipient in &self.recipients {
            builder = builder.to(recipient.clone());
        }
        builder
            .body(html.to_string())
            .map_err(|e| NotifyError::Message(e.to_string()))
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address
        .trim()
        .parse::<Mailbox>()
        .map_err(|_| NotifyError::Address(address.to_string()))
}

#[async_trait::async_trait]
impl Notifier for EmailNotifier {
    async fn send_report(&self, html: &str) -> Result<(), NotifyError> {
        let message = self.build_message(html)?;
        debug!("Sending report to {} recipient(s)", self.recipients.len());

        match self.transport.send(message).await {
            Ok(response) => {
                info!("Report email accepted [{}]", response.code());
                Ok(())
            }
            Err(e) => {
                warn!("Report email failed: {}", e);
                Err(NotifyError::Smtp(e.to_string()))
            }
        }
    }
}
