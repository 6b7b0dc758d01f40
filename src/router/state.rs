// ============================================================================
// ROUTER STATE - Ruta resuelta actual (reactiva)
// ============================================================================

use std::rc::Rc;

use crate::router::route::ResolvedRoute;
use crate::router::table::RouteTable;
use crate::state::ReactiveState;

/// Resultado de una navegación
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Matched(ResolvedRoute),
    /// La ruta solicitada redirigió; la URL debe reemplazarse por `path`
    Redirected(ResolvedRoute),
    /// Ningún path declarado coincide; la zona del router queda vacía
    Unmatched(String),
}

/// Router: tabla inmutable + estado actual
#[derive(Clone)]
pub struct Router {
    table: Rc<RouteTable>,
    current: ReactiveState<Option<ResolvedRoute>>,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table: Rc::new(table),
            current: ReactiveState::new(None),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolver `path` y publicar el resultado a los subscribers
    pub fn navigate(&self, path: &str) -> Navigation {
        match self.table.resolve(path) {
            Some(resolved) => {
                log::info!("🧭 [ROUTER] {} -> {:?}", path, resolved.view);
                let nav = if resolved.redirected() {
                    Navigation::Redirected(resolved.clone())
                } else {
                    Navigation::Matched(resolved.clone())
                };
                self.current.set(Some(resolved));
                nav
            }
            None => {
                log::warn!("⚠️ [ROUTER] Ninguna ruta coincide con {}", path);
                self.current.set(None);
                Navigation::Unmatched(path.to_string())
            }
        }
    }

    pub fn current(&self) -> Option<ResolvedRoute> {
        self.current.get()
    }

    /// Suscribirse a cambios de la ruta resuelta
    pub fn on_change<F>(&self, callback: F)
    where
        F: Fn(&Option<ResolvedRoute>) + 'static,
    {
        self.current.subscribe(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::route::Route;
    use crate::views::ViewId;
    use std::cell::RefCell;

    fn router() -> Router {
        Router::new(
            RouteTable::new(vec![
                Route::redirect("/", "/pois"),
                Route::view("/pois", ViewId::Pois).named("Pois"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn navigate_reports_redirect() {
        let router = router();
        match router.navigate("/") {
            Navigation::Redirected(r) => assert_eq!(r.path, "/pois"),
            other => panic!("esperaba redirección, obtuve {:?}", other),
        }
        assert_eq!(router.current().unwrap().view, ViewId::Pois);
    }

    #[test]
    fn unmatched_clears_current_and_notifies() {
        let router = router();
        let log = Rc::new(RefCell::new(Vec::new()));
        let log_c = log.clone();
        router.on_change(move |r| log_c.borrow_mut().push(r.as_ref().map(|r| r.view)));

        assert!(matches!(router.navigate("/pois"), Navigation::Matched(_)));
        assert_eq!(router.navigate("/nope"), Navigation::Unmatched("/nope".into()));
        assert!(router.current().is_none());
        assert_eq!(*log.borrow(), vec![Some(ViewId::Pois), None]);
    }

    #[test]
    fn on_change_callback_can_navigate() {
        let router = router();
        let inner = router.clone();
        router.on_change(move |r| {
            if r.is_none() {
                inner.navigate("/pois");
            }
        });

        assert_eq!(router.navigate("/unknown"), Navigation::Unmatched("/unknown".into()));
        assert_eq!(router.current().unwrap().view, ViewId::Pois);
    }
}
