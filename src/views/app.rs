// ============================================================================
// APP VIEW - Shell: cabecera + zona del router
// ============================================================================

use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::error::AppResult;
use crate::router::RouteTable;
use crate::views::render_header;

/// Id del contenedor donde se renderiza la vista de la ruta actual
pub const ROUTER_OUTLET_ID: &str = "router-view";

pub fn render_app(table: &RouteTable) -> AppResult<Element> {
    let outlet = ElementBuilder::new("main")?
        .id(ROUTER_OUTLET_ID)?
        .class("router-view")
        .build();

    Ok(ElementBuilder::new("div")?
        .class("app-container")
        .child(render_header(table)?)?
        .child(outlet)?
        .build())
}
