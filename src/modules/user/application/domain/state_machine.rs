use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an account stands in its lifecycle.
///
/// `WaitToStart*` states are only ever set when a flow is requested and a
/// fresh code has been issued; the verification guard moves them forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    WaitToConfirm,
    WaitToComplete,
    WaitToVerify,
    EmailChange,
    Done,
    WaitToStartEmailChange,
    WaitToStartPasswordChange,
    WaitToStartResetTwoFactor,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::WaitToConfirm => "wait_to_confirm",
            UserStatus::WaitToComplete => "wait_to_complete",
            UserStatus::WaitToVerify => "wait_to_verify",
            UserStatus::EmailChange => "email_change",
            UserStatus::Done => "done",
            UserStatus::WaitToStartEmailChange => "wait_to_start_email_change",
            UserStatus::WaitToStartPasswordChange => "wait_to_start_password_change",
            UserStatus::WaitToStartResetTwoFactor => "wait_to_start_reset_two_factor",
        }
    }

    pub fn is_confirmed(&self) -> bool {
        !matches!(self, UserStatus::WaitToConfirm)
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wait_to_confirm" => Ok(UserStatus::WaitToConfirm),
            "wait_to_complete" => Ok(UserStatus::WaitToComplete),
            "wait_to_verify" => Ok(UserStatus::WaitToVerify),
            "email_change" => Ok(UserStatus::EmailChange),
            "done" => Ok(UserStatus::Done),
            "wait_to_start_email_change" => Ok(UserStatus::WaitToStartEmailChange),
            "wait_to_start_password_change" => Ok(UserStatus::WaitToStartPasswordChange),
            "wait_to_start_reset_two_factor" => Ok(UserStatus::WaitToStartResetTwoFactor),
            other => Err(format!("Unknown user status: {}", other)),
        }
    }
}

/// Code-bearing operations an account can go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Flow {
    ConfirmEmail,
    EmailChange,
    PasswordChange,
    #[serde(alias = "two-factor-reset")]
    ResetTwoFactor,
}

impl Flow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flow::ConfirmEmail => "confirm-email",
            Flow::EmailChange => "email-change",
            Flow::PasswordChange => "password-change",
            Flow::ResetTwoFactor => "reset-two-factor",
        }
    }

    /// Statuses from which the guard accepts a code for this flow.
    pub fn allowed_statuses(&self) -> &'static [UserStatus] {
        match self {
            Flow::ConfirmEmail => &[UserStatus::WaitToConfirm],
            Flow::EmailChange => &[UserStatus::WaitToStartEmailChange],
            Flow::PasswordChange => &[UserStatus::WaitToStartPasswordChange],
            Flow::ResetTwoFactor => &[UserStatus::WaitToStartResetTwoFactor],
        }
    }

    /// Status set when a code is issued for this flow.
    pub fn pending_status(&self) -> UserStatus {
        match self {
            Flow::ConfirmEmail => UserStatus::WaitToConfirm,
            Flow::EmailChange => UserStatus::WaitToStartEmailChange,
            Flow::PasswordChange => UserStatus::WaitToStartPasswordChange,
            Flow::ResetTwoFactor => UserStatus::WaitToStartResetTwoFactor,
        }
    }

    /// Status set once the guard accepted the code.
    pub fn verified_status(&self) -> UserStatus {
        match self {
            Flow::ConfirmEmail => UserStatus::Done,
            Flow::EmailChange => UserStatus::EmailChange,
            Flow::PasswordChange => UserStatus::WaitToComplete,
            Flow::ResetTwoFactor => UserStatus::WaitToVerify,
        }
    }

    pub fn allows(&self, status: UserStatus) -> bool {
        self.allowed_statuses().contains(&status)
    }
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Flow {flow} cannot start from status {status}")]
    CannotStart { flow: Flow, status: UserStatus },

    #[error("Flow {flow} does not accept status {status}")]
    InvalidStatus { flow: Flow, status: UserStatus },
}

/// A new code is being requested for `flow`.
///
/// Confirmation can only be re-sent while the account is unconfirmed. The
/// other flows need a confirmed account and replace any unfinished flow.
pub fn start(flow: Flow, current: UserStatus) -> Result<UserStatus, TransitionError> {
    let allowed = match flow {
        Flow::ConfirmEmail => current == UserStatus::WaitToConfirm,
        Flow::EmailChange | Flow::PasswordChange | Flow::ResetTwoFactor => {
            current.is_confirmed()
        }
    };

    if !allowed {
        return Err(TransitionError::CannotStart {
            flow,
            status: current,
        });
    }

    Ok(flow.pending_status())
}

/// The guard accepted a code for `flow`.
pub fn verify(flow: Flow, current: UserStatus) -> Result<UserStatus, TransitionError> {
    if !flow.allows(current) {
        return Err(TransitionError::InvalidStatus {
            flow,
            status: current,
        });
    }

    Ok(flow.verified_status())
}

/// The operation behind `flow` has been applied.
pub fn complete(flow: Flow, current: UserStatus) -> Result<UserStatus, TransitionError> {
    if current != flow.verified_status() {
        return Err(TransitionError::InvalidStatus {
            flow,
            status: current,
        });
    }

    Ok(UserStatus::Done)
}
