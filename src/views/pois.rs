use web_sys::Element;

use crate::config::AppConfig;
use crate::dom::ElementBuilder;
use crate::error::AppResult;
use crate::views::ViewId;

/// Vista de puntos de interés. El mapa necesita VITE_AMAP_KEY.
pub fn render_pois(config: &AppConfig) -> AppResult<Element> {
    let status = if config.has_amap_key() {
        "🗺️ Mapa AMap disponible"
    } else {
        "⚠️ VITE_AMAP_KEY no configurada: mapa deshabilitado"
    };

    Ok(ElementBuilder::new("section")?
        .class(ViewId::Pois.css_class())
        .child(ElementBuilder::new("h2")?.text(ViewId::Pois.title()).build())?
        .child(ElementBuilder::new("p")?.class("map-status").text(status).build())?
        .build())
}
