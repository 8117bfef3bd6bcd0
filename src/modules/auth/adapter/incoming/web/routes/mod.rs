pub mod fetch_user;
pub mod login_user;
pub mod register_user;
pub mod update_profile;

pub use fetch_user::fetch_user_handler;
pub use login_user::login_user_handler;
pub use register_user::register_user_handler;
pub use update_profile::update_profile_handler;
