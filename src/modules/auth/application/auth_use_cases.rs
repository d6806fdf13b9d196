use std::sync::Arc;

use crate::auth::application::use_cases::{
    IFetchProfileUseCase, ILoginUserUseCase, IRefreshTokenUseCase, IRegisterUserUseCase,
    ISoftDeleteUserUseCase,
};

/// Account use cases wired once in `main` and shared through `AppState`.
#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn IRegisterUserUseCase>,
    pub login: Arc<dyn ILoginUserUseCase>,
    pub refresh: Arc<dyn IRefreshTokenUseCase>,
    pub fetch_profile: Arc<dyn IFetchProfileUseCase>,
    pub soft_delete: Arc<dyn ISoftDeleteUserUseCase>,
}
