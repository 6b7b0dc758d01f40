// ============================================================================
// HEADER - Título + navegación generada desde las rutas con nombre
// ============================================================================

use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::error::AppResult;
use crate::router::RouteTable;

pub const NAV_LINK_CLASS: &str = "nav-link";

pub fn render_header(table: &RouteTable) -> AppResult<Element> {
    let mut nav = ElementBuilder::new("nav")?.class("app-nav");

    for route in table.named_views() {
        let (Some(name), Some(view)) = (route.name(), route.view_id()) else {
            continue;
        };
        let href = format!("#{}", route.path());
        let link = ElementBuilder::new("a")?
            .class(NAV_LINK_CLASS)
            .attr("href", &href)?
            .attr("data-route", name)?
            .text(view.title())
            .build();
        nav = nav.child(link)?;
    }

    let title = ElementBuilder::new("h1")?.text("🧳 Travel Planner").build();
    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(title)?
        .child(nav.build())?
        .build())
}
