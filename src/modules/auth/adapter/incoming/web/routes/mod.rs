mod delete_user;
mod fetch_profile;
mod login_user;
mod refresh_token;
mod register_user;

pub use delete_user::*;
pub use fetch_profile::*;
pub use login_user::*;
pub use refresh_token::*;
pub use register_user::*;
