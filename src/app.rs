// ============================================================================
// APP - Arranque: config -> router -> mount("#app")
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::config::AppConfig;
use crate::dom::{append_child, clear_children, query_selector, toggle_class};
use crate::error::{AppError, AppResult};
use crate::router::{history, Navigation, Router};
use crate::state::AppState;
use crate::views::{render_app, render_view, shared::header::NAV_LINK_CLASS, ROUTER_OUTLET_ID};

pub const MOUNT_SELECTOR: &str = "#app";

/// App aún sin montar. El router debe instalarse antes de mount().
pub struct App {
    config: AppConfig,
    router: Option<Router>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self { config, router: None }
    }

    pub fn use_router(mut self, router: Router) -> Self {
        self.router = Some(router);
        self
    }

    /// Montar en `selector`. Consume la app: solo se monta una vez.
    pub fn mount(self, selector: &str) -> AppResult<MountedApp> {
        let router = self.router.ok_or(AppError::RouterNotInstalled)?;
        let root = query_selector(selector)?
            .ok_or_else(|| AppError::MountTargetNotFound(selector.to_string()))?;

        log::info!("🎬 [APP] Montando en {}", selector);
        clear_children(&root);
        append_child(&root, &render_app(router.table())?)?;

        let outlet = root
            .query_selector(&format!("#{}", ROUTER_OUTLET_ID))?
            .ok_or_else(|| AppError::Dom(format!("falta #{}", ROUTER_OUTLET_ID)))?;

        let state = AppState::new(self.config, router);
        let mounted = MountedApp { state, root, outlet };

        apply_navigation(&mounted.state.router, &history::current_path()?)?;
        mounted.render_outlet()?;

        // Re-render batcheado: varios cambios en el mismo tick -> un render
        {
            let app = mounted.clone();
            mounted.state.router.on_change(move |_| {
                if !app.state.request_render() {
                    return;
                }
                let app = app.clone();
                Timeout::new(0, move || {
                    if app.state.take_render_request() {
                        if let Err(e) = app.render_outlet() {
                            log::error!("❌ [APP] Error renderizando vista: {}", e);
                        }
                    }
                })
                .forget();
            });
        }

        {
            let router = mounted.state.router.clone();
            history::listen_hash_change(move |path| {
                if let Err(e) = apply_navigation(&router, &path) {
                    log::error!("❌ [ROUTER] Error navegando a {}: {}", path, e);
                }
            })?;
        }

        log::info!("✅ [APP] App montada");
        Ok(mounted)
    }
}

/// Resolver y, si hubo redirección, reemplazar la URL por el destino
fn apply_navigation(router: &Router, path: &str) -> AppResult<Navigation> {
    let nav = router.navigate(path);
    if let Navigation::Redirected(resolved) = &nav {
        history::replace_path(&resolved.path)?;
    }
    Ok(nav)
}

/// App montada y viva durante toda la sesión
#[derive(Clone)]
pub struct MountedApp {
    state: AppState,
    root: Element,
    outlet: Element,
}

impl MountedApp {
    /// Renderizar la vista de la ruta actual (vacío si no hay coincidencia)
    pub fn render_outlet(&self) -> AppResult<()> {
        clear_children(&self.outlet);
        let current = self.state.router.current();

        let active_href = current.as_ref().map(|r| format!("#{}", r.path));
        let links = self.root.query_selector_all(&format!("a.{}", NAV_LINK_CLASS))?;
        for i in 0..links.length() {
            let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let active = active_href.is_some() && link.get_attribute("href") == active_href;
            toggle_class(&link, "active", active)?;
        }

        if let Some(resolved) = current {
            append_child(&self.outlet, &render_view(resolved.view, &self.state.config)?)?;
        }
        Ok(())
    }

    /// Navegar programáticamente (añade entrada al historial)
    pub fn navigate(&self, path: &str) -> AppResult<()> {
        history::push_path(&history::normalize_path(path))
    }
}
