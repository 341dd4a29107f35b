//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::auth::JwtGenerator;
use crate::infrastructure::chirp::ChirpService;
use crate::infrastructure::metrics::HitCounter;
use crate::infrastructure::user::UserService;

/// Services shared by every handler, passed explicitly through the router
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub chirp_service: Arc<ChirpService>,
    pub jwt_service: Arc<dyn JwtGenerator>,
    pub hits: Arc<HitCounter>,
    /// Whether `POST /admin/reset` may wipe storage
    pub reset_enabled: bool,
}

impl AppState {
    pub fn new(
        user_service: Arc<UserService>,
        chirp_service: Arc<ChirpService>,
        jwt_service: Arc<dyn JwtGenerator>,
    ) -> Self {
        Self {
            user_service,
            chirp_service,
            jwt_service,
            hits: Arc::new(HitCounter::new()),
            reset_enabled: false,
        }
    }

    pub fn with_reset_enabled(mut self, enabled: bool) -> Self {
        self.reset_enabled = enabled;
        self
    }
}
