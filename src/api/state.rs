use std::sync::Arc;

use crate::application::TeamService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub team_service: Arc<dyn TeamService>,
}

impl AppState {
    pub fn new(team_service: Arc<dyn TeamService>) -> Self {
        Self { team_service }
    }
}
