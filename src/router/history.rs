// ============================================================================
// HASH HISTORY - Lectura/escritura del fragmento "#/..." de la URL
// ============================================================================
// GESTIÓN DE LISTENERS:
// - El listener de "hashchange" es global (window). Se registra UNA VEZ al
//   montar la app y su closure se mantiene viva con forget().
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HashChangeEvent;

use crate::dom::window;
use crate::error::{AppError, AppResult};

/// Convertir un fragmento de URL ("#/pois?x=1") en un path normalizado ("/pois")
pub fn path_from_hash(hash: &str) -> String {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    let raw = raw.split(['?', '#']).next().unwrap_or("");
    normalize_path(raw)
}

/// Normalizar: vacío -> "/", "/" inicial obligatorio, sin "/" final (salvo raíz)
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim();
    let trimmed = trimmed.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Path actual según location.hash
pub fn current_path() -> AppResult<String> {
    let hash = window()
        .ok_or(AppError::NoDocument)?
        .location()
        .hash()?;
    Ok(path_from_hash(&hash))
}

/// Navegar añadiendo una entrada al historial
pub fn push_path(path: &str) -> AppResult<()> {
    window()
        .ok_or(AppError::NoDocument)?
        .location()
        .set_hash(path)?;
    Ok(())
}

/// Reemplazar la entrada actual (usado tras una redirección)
pub fn replace_path(path: &str) -> AppResult<()> {
    let location = window().ok_or(AppError::NoDocument)?.location();
    let href = location.href()?;
    let base = href.split('#').next().unwrap_or(&href);
    location.replace(&format!("{}#{}", base, path))?;
    Ok(())
}

/// Registrar el listener global de "hashchange"
/// Debe llamarse una sola vez por ciclo de vida de la app
pub fn listen_hash_change<F>(handler: F) -> AppResult<()>
where
    F: Fn(String) + 'static,
{
    let win = window().ok_or(AppError::NoDocument)?;
    let closure = Closure::wrap(Box::new(move |event: HashChangeEvent| {
        let new_url = event.new_url();
        let hash = new_url.split_once('#').map(|(_, h)| h).unwrap_or("");
        handler(path_from_hash(hash));
    }) as Box<dyn FnMut(HashChangeEvent)>);

    win.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_is_root() {
        assert_eq!(path_from_hash(""), "/");
        assert_eq!(path_from_hash("#"), "/");
        assert_eq!(path_from_hash("#/"), "/");
    }

    #[test]
    fn strips_hash_query_and_trailing_slash() {
        assert_eq!(path_from_hash("#/pois"), "/pois");
        assert_eq!(path_from_hash("#/pois/"), "/pois");
        assert_eq!(path_from_hash("#/budget?currency=EUR"), "/budget");
        assert_eq!(path_from_hash("/itinerary"), "/itinerary");
    }

    #[test]
    fn adds_leading_slash() {
        assert_eq!(path_from_hash("#pois"), "/pois");
        assert_eq!(normalize_path("budget"), "/budget");
    }

    #[test]
    fn keeps_case_and_inner_segments() {
        assert_eq!(path_from_hash("#/Pois"), "/Pois");
        assert_eq!(path_from_hash("#/pois/12"), "/pois/12");
    }
}
