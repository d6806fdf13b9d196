pub mod fetch_profile;
pub mod login_user;
pub mod refresh_token;
pub mod register_user;
pub mod soft_delete_user;

pub use fetch_profile::{FetchProfileError, FetchProfileUseCase, IFetchProfileUseCase, UserProfile};
pub use login_user::{ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse, LoginUserUseCase};
pub use refresh_token::{IRefreshTokenUseCase, RefreshTokenError, RefreshTokenResponse, RefreshTokenUseCase};
pub use register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput, RegisterUserInputError,
    RegisterUserUseCase,
};
pub use soft_delete_user::{ISoftDeleteUserUseCase, SoftDeleteUserError, SoftDeleteUserUseCase};
