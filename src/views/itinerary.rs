use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::error::AppResult;
use crate::views::ViewId;

pub fn render_itinerary() -> AppResult<Element> {
    Ok(ElementBuilder::new("section")?
        .class(ViewId::Itinerary.css_class())
        .child(ElementBuilder::new("h2")?.text(ViewId::Itinerary.title()).build())?
        .build())
}
