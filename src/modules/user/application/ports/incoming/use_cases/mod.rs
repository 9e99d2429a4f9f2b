mod confirm_code;
mod login_user;
mod profile;
mod register_user;
mod request_verification;
mod two_factor;
mod two_factor_guard;
mod update_credentials;
mod user_error;
mod verify_email_code;

pub use confirm_code::{ConfirmCodeResponse, ConfirmCodeUseCase};
pub use login_user::{LoginRequest, LoginResponse, LoginUserUseCase};
pub use profile::{
    DeleteUserUseCase, GetUserUseCase, GetUsersUseCase, UpdateGameInfoCommand,
    UpdateGameInfoUseCase, UpdateProfilePayload, UpdateProfileUseCase,
};
pub use register_user::{
    RegisterUserPayload, RegisterUserUseCase, SecretQuestionPayload, UserDetailsPayload,
};
pub use request_verification::{RequestVerificationCommand, RequestVerificationUseCase};
pub use two_factor::{ActivateTwoFactorUseCase, ResetTwoFactorUseCase, TwoFactorResponse};
pub use two_factor_guard::TwoFactorGuard;
pub use update_credentials::{
    UpdateEmailCommand, UpdateEmailPayload, UpdateEmailUseCase, UpdatePasswordCommand,
    UpdatePasswordPayload, UpdatePasswordUseCase,
};
pub use user_error::UserError;
pub use verify_email_code::{EmailCodeGuard, VerifyEmailCodeRequest};
