pub mod login_user_service;
pub mod register_user_service;
pub mod user_profile_service;

pub use login_user_service::LoginUserService;
pub use register_user_service::RegisterUserService;
pub use user_profile_service::UserProfileService;
