mod confirm_code_service;
mod email_code_guard_service;
mod login_user_service;
mod notify;
mod profile_service;
mod register_user_service;
mod request_verification_service;
mod two_factor_guard_service;
mod two_factor_service;
mod update_credentials_service;

pub use confirm_code_service::ConfirmCodeService;
pub use email_code_guard_service::EmailCodeGuardService;
pub use login_user_service::LoginUserService;
pub use profile_service::ProfileService;
pub use register_user_service::RegisterUserService;
pub use request_verification_service::RequestVerificationService;
pub use two_factor_guard_service::TwoFactorGuardService;
pub use two_factor_service::{ActivateTwoFactorService, ResetTwoFactorService};
pub use update_credentials_service::{UpdateEmailService, UpdatePasswordService};
