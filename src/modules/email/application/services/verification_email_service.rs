use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::{
    email_sender::EmailSender,
    user_email_notifier::{
        UserEmailNotificationError, UserEmailNotifier, VerificationCodeMessage,
    },
};
use crate::user::application::domain::state_machine::Flow;

/// Renders verification codes into emails and hands them to an [`EmailSender`].
#[derive(Clone)]
pub struct VerificationEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for VerificationEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationEmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl VerificationEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }

    fn subject(flow: Flow) -> &'static str {
        match flow {
            Flow::ConfirmEmail => "Welcome to TableRise! Confirm your email",
            Flow::EmailChange => "TableRise: confirm your email change",
            Flow::PasswordChange => "TableRise: confirm your password change",
            Flow::ResetTwoFactor => "TableRise: confirm your two-factor reset",
        }
    }

    fn body(message: &VerificationCodeMessage) -> String {
        format!(
            r#"
            <html>
                <body>
                    <p>Hi {},</p>
                    <p>Use the code below to continue:</p>
                    <h2>{}</h2>
                    <p>If you did not ask for this, you can ignore this email.</p>
                </body>
            </html>
            "#,
            message.nickname, message.code
        )
    }
}

#[async_trait]
impl UserEmailNotifier for VerificationEmailService {
    async fn send_verification_code(
        &self,
        message: VerificationCodeMessage,
    ) -> Result<(), UserEmailNotificationError> {
        let subject = Self::subject(message.flow);
        let body = Self::body(&message);

        self.sender
            .send_email(&message.email, subject, &body)
            .await
            .map_err(UserEmailNotificationError::EmailSendingFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::adapter::outgoing::mock_sender::MockEmailSender;
    use mockall::{mock, predicate::*};

    mock! {
        pub EmailSenderMock {}
        #[async_trait]
        impl EmailSender for EmailSenderMock {
            async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
        }
    }

    fn message(flow: Flow) -> VerificationCodeMessage {
        VerificationCodeMessage {
            email: "frodo@shire.me".to_string(),
            nickname: "frodo".to_string(),
            code: "K9Z2QA".to_string(),
            flow,
        }
    }

    #[tokio::test]
    async fn test_code_and_nickname_are_rendered() {
        let sender = Arc::new(MockEmailSender::new());
        let service = VerificationEmailService::new(sender.clone());

        service
            .send_verification_code(message(Flow::ConfirmEmail))
            .await
            .unwrap();

        let sent = sender.get_sent_emails();
        assert_eq!(sent.len(), 1);
        let (to, subject, body) = &sent[0];
        assert_eq!(to, "frodo@shire.me");
        assert!(subject.contains("Confirm your email"));
        assert!(body.contains("K9Z2QA"));
        assert!(body.contains("Hi frodo"));
    }

    #[tokio::test]
    async fn test_subject_follows_flow() {
        let mut mock = MockEmailSenderMock::new();
        mock.expect_send_email()
            .withf(|_, subject, _| subject.contains("password change"))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = VerificationEmailService::new(Arc::new(mock));
        let result = service
            .send_verification_code(message(Flow::PasswordChange))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_sender_failure_is_reported() {
        let mut mock = MockEmailSenderMock::new();
        mock.expect_send_email()
            .returning(|_, _, _| Err("connection refused".to_string()));

        let service = VerificationEmailService::new(Arc::new(mock));
        let result = service
            .send_verification_code(message(Flow::EmailChange))
            .await;

        assert!(matches!(
            result,
            Err(UserEmailNotificationError::EmailSendingFailed(msg)) if msg == "connection refused"
        ));
    }

    #[test]
    fn test_debug_hides_sender() {
        let service = VerificationEmailService::new(Arc::new(MockEmailSender::new()));
        assert_eq!(
            format!("{:?}", service),
            "VerificationEmailService { sender: \"<dyn EmailSender>\" }"
        );
    }
}
