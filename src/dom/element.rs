// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use web_sys::{Document, Element, Window};

use crate::error::{AppError, AppResult};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Query selector (p.ej. "#app")
pub fn query_selector(selector: &str) -> AppResult<Option<Element>> {
    Ok(document().ok_or(AppError::NoDocument)?.query_selector(selector)?)
}

/// Crear elemento
pub fn create_element(tag: &str) -> AppResult<Element> {
    Ok(document().ok_or(AppError::NoDocument)?.create_element(tag)?)
}

/// Reemplazar todo el contenido de un elemento
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> AppResult<()> {
    parent.append_child(child)?;
    Ok(())
}

/// Marcar o desmarcar una clase
pub fn toggle_class(element: &Element, class: &str, on: bool) -> AppResult<()> {
    element.class_list().toggle_with_force(class, on)?;
    Ok(())
}
