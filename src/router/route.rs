// ============================================================================
// ROUTE - Definición de una ruta (vista o redirección)
// ============================================================================

use crate::views::ViewId;

/// Destino de una ruta: una vista o una redirección, nunca ambas
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    View(ViewId),
    Redirect(String),
}

/// Una entrada de la tabla de rutas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    target: RouteTarget,
    name: Option<String>,
}

impl Route {
    /// Ruta que renderiza una vista
    pub fn view(path: impl Into<String>, view: ViewId) -> Self {
        Self {
            path: path.into(),
            target: RouteTarget::View(view),
            name: None,
        }
    }

    /// Ruta que redirige a otro path
    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: RouteTarget::Redirect(to.into()),
            name: None,
        }
    }

    /// Asignar nombre (para enlaces y resolución inversa)
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn target(&self) -> &RouteTarget {
        &self.target
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn view_id(&self) -> Option<ViewId> {
        match self.target {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Redirect(_) => None,
        }
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match &self.target {
            RouteTarget::Redirect(to) => Some(to),
            RouteTarget::View(_) => None,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self.target, RouteTarget::Redirect(_))
    }
}

/// Resultado de resolver un path contra la tabla
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Path solicitado (normalizado)
    pub requested: String,
    /// Path final tras seguir redirecciones
    pub path: String,
    pub view: ViewId,
    pub name: Option<String>,
}

impl ResolvedRoute {
    pub fn redirected(&self) -> bool {
        self.requested != self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_and_redirect_are_exclusive() {
        let pois = Route::view("/pois", ViewId::Pois).named("Pois");
        assert_eq!(pois.view_id(), Some(ViewId::Pois));
        assert_eq!(pois.redirect_target(), None);
        assert_eq!(pois.name(), Some("Pois"));

        let root = Route::redirect("/", "/pois");
        assert!(root.is_redirect());
        assert_eq!(root.view_id(), None);
        assert_eq!(root.redirect_target(), Some("/pois"));
        assert_eq!(root.name(), None);
    }
}
