use std::sync::Arc;

use application::{AdService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub ad_service: Arc<AdService>,
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(ad_service: Arc<AdService>, user_service: Arc<UserService>) -> Self {
        Self {
            ad_service,
            user_service,
        }
    }
}
