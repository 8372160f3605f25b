/// Outbound email for Gatherly
///
/// Confirmation emails are sent over SMTP via lettre's async transport. When
/// no SMTP host is configured the [`Mailer`] falls back to a stub transport
/// that accepts every message, so development environments and the test suite
/// run without a mail server.
///
/// Sending is awaited inside the request that triggers it and failures are
/// returned to the caller, not swallowed.

use lettre::{
    message::header::ContentType,
    transport::{
        smtp::{authentication::Credentials, Error as SmtpError},
        stub::AsyncStubTransport,
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// Errors that can occur when sending email
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport error
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build the email message
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Non-SMTP transport failure
    #[error("Mail transport error: {0}")]
    Transport(String),
}

#[derive(Clone)]
enum MailTransport {
    Smtp(AsyncSmtpTransport<Tokio1Executor>),
    Stub(AsyncStubTransport),
}

/// Mail sender for transactional email
#[derive(Clone)]
pub struct Mailer {
    transport: MailTransport,
    from_address: String,
}

impl Mailer {
    /// Creates a mailer that delivers over SMTP with STARTTLS
    ///
    /// # Errors
    ///
    /// Returns an error if the SMTP relay cannot be configured.
    pub fn smtp(
        host: &str,
        port: u16,
        username: String,
        password: String,
        from_address: String,
    ) -> Result<Self, MailError> {
        let credentials = Credentials::new(username, password);

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)?
            .port(port)
            .credentials(credentials)
            .build();

        Ok(Self {
            transport: MailTransport::Smtp(transport),
            from_address,
        })
    }

    /// Creates a mailer whose transport accepts every message without
    /// delivering it
    pub fn stub(from_address: impl Into<String>) -> Self {
        Self {
            transport: MailTransport::Stub(AsyncStubTransport::new_ok()),
            from_address: from_address.into(),
        }
    }

    /// Creates a mailer whose transport rejects every message
    ///
    /// Used by tests that exercise the send-failure path.
    pub fn failing_stub(from_address: impl Into<String>) -> Self {
        Self {
            transport: MailTransport::Stub(AsyncStubTransport::new_error()),
            from_address: from_address.into(),
        }
    }

    /// Sends the registration-confirmation email for an event
    ///
    /// # Errors
    ///
    /// Returns an error if an address is invalid, the message cannot be
    /// built, or the transport fails.
    pub async fn send_registration_confirmation(
        &self,
        to: &str,
        username: &str,
        event_title: &str,
    ) -> Result<(), MailError> {
        let subject = format!("Registration for {}", event_title);
        let body = format!(
            "Hi {},\n\n\
             You have successfully registered for the event '{}'.\n\
             Thank you for your interest!\n",
            username, event_title
        );

        self.send(to, &subject, body).await
    }

    async fn send(&self, to: &str, subject: &str, body: String) -> Result<(), MailError> {
        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| MailError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(to
                .parse()
                .map_err(|_| MailError::InvalidAddress(to.to_string()))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        match &self.transport {
            MailTransport::Smtp(mailer) => {
                mailer.send(email).await?;
            }
            MailTransport::Stub(mailer) => {
                mailer
                    .send(email)
                    .await
                    .map_err(|e| MailError::Transport(e.to_string()))?;
            }
        }

        tracing::info!(to = %to, subject = %subject, "Email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_mailer_accepts_message() {
        let mailer = Mailer::stub("noreply@gatherly.io");

        let result = mailer
            .send_registration_confirmation("alice@example.com", "alice", "RustConf")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_failing_stub_mailer_surfaces_error() {
        let mailer = Mailer::failing_stub("noreply@gatherly.io");

        let result = mailer
            .send_registration_confirmation("alice@example.com", "alice", "RustConf")
            .await;

        assert!(matches!(result, Err(MailError::Transport(_))));
    }

    #[tokio::test]
    async fn test_invalid_recipient_rejected() {
        let mailer = Mailer::stub("noreply@gatherly.io");

        let result = mailer
            .send_registration_confirmation("not-an-address", "alice", "RustConf")
            .await;

        assert!(matches!(result, Err(MailError::InvalidAddress(_))));
    }

    #[tokio::test]
    async fn test_invalid_from_address_rejected() {
        let mailer = Mailer::stub("broken");

        let result = mailer
            .send_registration_confirmation("alice@example.com", "alice", "RustConf")
            .await;

        assert!(matches!(result, Err(MailError::InvalidAddress(_))));
    }
}
