use std::sync::Arc;

use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;
use crate::user::application::ports::incoming::use_cases::{
    ActivateTwoFactorUseCase, ConfirmCodeUseCase, DeleteUserUseCase, EmailCodeGuard,
    GetUserUseCase, GetUsersUseCase, LoginUserUseCase, RegisterUserUseCase,
    RequestVerificationUseCase, ResetTwoFactorUseCase, TwoFactorGuard, UpdateEmailUseCase,
    UpdateGameInfoUseCase, UpdatePasswordUseCase, UpdateProfileUseCase,
};
use crate::user::application::ports::outgoing::{
    OtpAuthenticator, PasswordHasher, TokenProvider, UserDetailsRepository, UserRepository,
};
use crate::user::application::services::{
    ActivateTwoFactorService, ConfirmCodeService, EmailCodeGuardService, LoginUserService,
    ProfileService, RegisterUserService, RequestVerificationService, ResetTwoFactorService,
    TwoFactorGuardService, UpdateEmailService, UpdatePasswordService,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub request_verification: Arc<dyn RequestVerificationUseCase + Send + Sync>,
    pub confirm_code: Arc<dyn ConfirmCodeUseCase + Send + Sync>,
    pub activate_two_factor: Arc<dyn ActivateTwoFactorUseCase + Send + Sync>,
    pub reset_two_factor: Arc<dyn ResetTwoFactorUseCase + Send + Sync>,
    pub update_email: Arc<dyn UpdateEmailUseCase + Send + Sync>,
    pub update_password: Arc<dyn UpdatePasswordUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetUsersUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetUserUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub update_game_info: Arc<dyn UpdateGameInfoUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteUserUseCase + Send + Sync>,
    pub two_factor_guard: Arc<dyn TwoFactorGuard + Send + Sync>,
}

/// Outgoing collaborators shared by the user services.
#[derive(Clone)]
pub struct UserCollaborators {
    pub hasher: Arc<dyn PasswordHasher>,
    pub otp: Arc<dyn OtpAuthenticator>,
    pub tokens: Arc<dyn TokenProvider>,
    pub notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl UserUseCases {
    pub fn wire<R, D>(users: R, details: D, deps: UserCollaborators) -> Self
    where
        R: UserRepository + Clone + 'static,
        D: UserDetailsRepository + Clone + 'static,
    {
        let email_guard: Arc<dyn EmailCodeGuard> =
            Arc::new(EmailCodeGuardService::new(users.clone(), details.clone()));
        let profile = Arc::new(ProfileService::new(users.clone(), details.clone()));

        Self {
            register: Arc::new(RegisterUserService::new(
                users.clone(),
                details,
                deps.hasher.clone(),
                deps.notifier.clone(),
            )),
            login: Arc::new(LoginUserService::new(
                users.clone(),
                deps.hasher.clone(),
                deps.tokens,
            )),
            request_verification: Arc::new(RequestVerificationService::new(
                users.clone(),
                deps.notifier,
            )),
            confirm_code: Arc::new(ConfirmCodeService::new(email_guard.clone())),
            activate_two_factor: Arc::new(ActivateTwoFactorService::new(
                users.clone(),
                deps.otp.clone(),
            )),
            reset_two_factor: Arc::new(ResetTwoFactorService::new(
                users.clone(),
                deps.otp.clone(),
                email_guard.clone(),
            )),
            update_email: Arc::new(UpdateEmailService::new(users.clone(), email_guard.clone())),
            update_password: Arc::new(UpdatePasswordService::new(
                users.clone(),
                deps.hasher,
                email_guard,
            )),
            get_list: profile.clone(),
            get_single: profile.clone(),
            update_profile: profile.clone(),
            update_game_info: profile.clone(),
            delete: profile,
            two_factor_guard: Arc::new(TwoFactorGuardService::new(users, deps.otp)),
        }
    }
}
