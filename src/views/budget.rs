use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::error::AppResult;
use crate::views::ViewId;

pub fn render_budget() -> AppResult<Element> {
    Ok(ElementBuilder::new("section")?
        .class(ViewId::Budget.css_class())
        .child(ElementBuilder::new("h2")?.text(ViewId::Budget.title()).build())?
        .build())
}
