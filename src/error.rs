// ============================================================================
// ERRORES - Taxonomía de errores del router y del arranque
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errores al construir la tabla de rutas
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("ruta duplicada: {0}")]
    DuplicatePath(String),

    #[error("nombre de ruta duplicado: {0}")]
    DuplicateName(String),

    #[error("path inválido (debe empezar por '/'): {0:?}")]
    InvalidPath(String),

    #[error("la redirección de {from} apunta a una ruta no declarada: {to}")]
    UnknownRedirectTarget { from: String, to: String },

    #[error("ciclo de redirecciones detectado desde {0}")]
    RedirectCycle(String),
}

/// Errores del arranque de la aplicación y del acceso al DOM
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("no hay router instalado; llama a use_router() antes de mount()")]
    RouterNotInstalled,

    #[error("no se encontró el elemento de montaje {0}")]
    MountTargetNotFound(String),

    #[error("no hay window/document disponible")]
    NoDocument,

    #[error("error DOM: {0}")]
    Dom(String),

    #[error(transparent)]
    Router(#[from] RouterError),
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_error_converts_into_app_error() {
        let err: AppError = RouterError::DuplicatePath("/pois".into()).into();
        assert_eq!(err, AppError::Router(RouterError::DuplicatePath("/pois".into())));
        assert_eq!(err.to_string(), "ruta duplicada: /pois");
    }

    #[test]
    fn mount_error_names_selector() {
        let err = AppError::MountTargetNotFound("#app".into());
        assert!(err.to_string().contains("#app"));
    }
}
