// ============================================================================
// VIEWS - Vistas de la app (funciones que renderizan DOM, sin lógica)
// ============================================================================

pub mod app;
pub mod shared;
pub mod pois;
pub mod itinerary;
pub mod budget;

use web_sys::Element;

use crate::config::AppConfig;
use crate::error::AppResult;

pub use app::{render_app, ROUTER_OUTLET_ID};
pub use shared::header::render_header;

/// Vistas a las que puede apuntar una ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Pois,
    Itinerary,
    Budget,
}

impl ViewId {
    /// Título visible en cabecera y navegación
    pub fn title(self) -> &'static str {
        match self {
            ViewId::Pois => "Puntos de interés",
            ViewId::Itinerary => "Itinerario",
            ViewId::Budget => "Presupuesto",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ViewId::Pois => "view-pois",
            ViewId::Itinerary => "view-itinerary",
            ViewId::Budget => "view-budget",
        }
    }
}

/// Renderizar la vista asociada a una ruta
pub fn render_view(view: ViewId, config: &AppConfig) -> AppResult<Element> {
    match view {
        ViewId::Pois => pois::render_pois(config),
        ViewId::Itinerary => itinerary::render_itinerary(),
        ViewId::Budget => budget::render_budget(),
    }
}
