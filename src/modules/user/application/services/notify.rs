use std::sync::Arc;

use crate::email::application::ports::outgoing::user_email_notifier::{
    UserEmailNotifier, VerificationCodeMessage,
};

/// Sends the code on a background task. Delivery failures are logged and
/// never reach the caller.
pub(crate) fn dispatch_verification_code(
    notifier: &Arc<dyn UserEmailNotifier + Send + Sync>,
    message: VerificationCodeMessage,
) {
    let notifier = Arc::clone(notifier);
    tokio::spawn(async move {
        let flow = message.flow;
        if let Err(e) = notifier.send_verification_code(message).await {
            tracing::error!(%flow, error = %e, "Failed to send verification code email");
        }
    });
}
