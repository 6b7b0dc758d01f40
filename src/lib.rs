// ============================================================================
// TRAVEL PLANNER - FRONTEND RUST PURO + WASM
// ============================================================================
// - Router: tabla de rutas inmutable + historial por hash (#/pois, ...)
// - Views: funciones que renderizan DOM (sin lógica)
// - State: Rc<RefCell> + subscribers
// - Config: objeto explícito construido desde el entorno de compilación
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::{App, MountedApp, MOUNT_SELECTOR};
use crate::config::{debug_report, EnvSnapshot, CONFIG};
use crate::error::AppError;

// Instancia montada, viva durante toda la sesión
thread_local! {
    static APP: RefCell<Option<MountedApp>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = CONFIG.clone();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("🚀 Travel Planner ({})", config.mode);

    if config.dev {
        for line in debug_report(&EnvSnapshot::compiled(), &config) {
            log::debug!("🔧 [CONFIG] {}", line);
        }
    }

    if APP.with(|cell| cell.borrow().is_some()) {
        log::warn!("⚠️ [APP] Ya montada, ignorando start() duplicado");
        return Ok(());
    }

    let router = routes::create_router().map_err(AppError::from)?;
    let mounted = App::new(config).use_router(router).mount(MOUNT_SELECTOR)?;

    APP.with(|cell| *cell.borrow_mut() = Some(mounted));
    Ok(())
}

/// Navegación llamable desde JavaScript
#[wasm_bindgen]
pub fn navigate_to(path: &str) -> Result<(), JsValue> {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => app.navigate(path).map_err(JsValue::from),
        None => Err(AppError::Dom("la app no está montada".into()).into()),
    })
}
