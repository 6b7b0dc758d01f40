// ============================================================================
// APP STATE - Estado global de la aplicación montada
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::router::Router;

#[derive(Clone)]
pub struct AppState {
    pub config: Rc<AppConfig>,
    pub router: Router,
    /// Hay un render de la zona del router programado y pendiente
    pub render_pending: Rc<Cell<bool>>,
}

impl AppState {
    pub fn new(config: AppConfig, router: Router) -> Self {
        Self {
            config: Rc::new(config),
            router,
            render_pending: Rc::new(Cell::new(false)),
        }
    }

    /// Marcar un render como pendiente; false si ya lo estaba
    pub fn request_render(&self) -> bool {
        !self.render_pending.replace(true)
    }

    pub fn take_render_request(&self) -> bool {
        self.render_pending.replace(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::create_router;

    #[test]
    fn render_requests_coalesce() {
        let state = AppState::new(AppConfig::default(), create_router().unwrap());
        assert!(state.request_render());
        assert!(!state.request_render());
        assert!(state.take_render_request());
        assert!(!state.take_render_request());
        assert!(state.request_render());
    }
}
