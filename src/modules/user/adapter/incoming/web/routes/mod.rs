mod credentials;
mod profile;
mod register;
mod two_factor;
mod verification;

use actix_web::web;

pub use credentials::{reset_password_handler, update_email_handler, update_password_handler};
pub use profile::{
    delete_user_handler, get_user_handler, get_users_handler, update_game_info_handler,
    update_profile_handler,
};
pub use register::{login_user_handler, register_user_handler};
pub use two_factor::{activate_two_factor_handler, reset_two_factor_handler};
pub use verification::{
    confirm_code_handler, request_verification_by_email_handler, request_verification_handler,
};

/// Mounts the account surface under `/profile`.
///
/// Literal segments are registered ahead of `{id}` patterns of the same shape.
pub fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profile")
            .service(register_user_handler)
            .service(login_user_handler)
            .service(request_verification_by_email_handler)
            .service(reset_password_handler)
            .service(get_users_handler)
            .service(get_user_handler)
            .service(request_verification_handler)
            .service(confirm_code_handler)
            .service(activate_two_factor_handler)
            .service(reset_two_factor_handler)
            .service(update_email_handler)
            .service(update_password_handler)
            .service(update_game_info_handler)
            .service(update_profile_handler)
            .service(delete_user_handler),
    );
}
