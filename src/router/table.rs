// ============================================================================
// ROUTE TABLE - Tabla inmutable de rutas + resolución
// ============================================================================
// Lista ordenada con índice por path y por nombre. Se valida una sola vez en
// new(); después no hay forma de registrar ni eliminar rutas.
// ============================================================================

use std::collections::{HashMap, HashSet};

use crate::error::RouterError;
use crate::router::route::{ResolvedRoute, Route, RouteTarget};

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Construir y validar la tabla
    pub fn new(routes: Vec<Route>) -> Result<Self, RouterError> {
        let mut by_path = HashMap::with_capacity(routes.len());
        let mut by_name = HashMap::new();

        for (idx, route) in routes.iter().enumerate() {
            if !route.path().starts_with('/') {
                return Err(RouterError::InvalidPath(route.path().to_string()));
            }
            if by_path.insert(route.path().to_string(), idx).is_some() {
                return Err(RouterError::DuplicatePath(route.path().to_string()));
            }
            if let Some(name) = route.name() {
                if by_name.insert(name.to_string(), idx).is_some() {
                    return Err(RouterError::DuplicateName(name.to_string()));
                }
            }
        }

        for route in &routes {
            if let Some(to) = route.redirect_target() {
                if !by_path.contains_key(to) {
                    return Err(RouterError::UnknownRedirectTarget {
                        from: route.path().to_string(),
                        to: to.to_string(),
                    });
                }
            }
        }

        let table = Self { routes, by_path, by_name };
        table.check_redirect_cycles()?;
        Ok(table)
    }

    fn check_redirect_cycles(&self) -> Result<(), RouterError> {
        for start in self.routes.iter().filter(|r| r.is_redirect()) {
            let mut seen = HashSet::new();
            let mut current = start;
            while let RouteTarget::Redirect(to) = current.target() {
                if !seen.insert(current.path()) {
                    return Err(RouterError::RedirectCycle(start.path().to_string()));
                }
                // Los destinos ya están validados
                match self.match_path(to) {
                    Some(next) => current = next,
                    None => break,
                }
            }
        }
        Ok(())
    }

    /// Entrada cuyo path coincide exactamente
    pub fn match_path(&self, path: &str) -> Option<&Route> {
        self.by_path.get(path).map(|&idx| &self.routes[idx])
    }

    /// Resolver un path siguiendo redirecciones hasta una vista
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        let mut current = self.match_path(path)?;
        // Acotado por el tamaño de la tabla (sin ciclos tras new())
        for _ in 0..=self.routes.len() {
            match current.target() {
                RouteTarget::View(view) => {
                    return Some(ResolvedRoute {
                        requested: path.to_string(),
                        path: current.path().to_string(),
                        view: *view,
                        name: current.name().map(str::to_string),
                    });
                }
                RouteTarget::Redirect(to) => {
                    log::debug!("↪️ [ROUTER] {} -> {}", current.path(), to);
                    current = self.match_path(to)?;
                }
            }
        }
        None
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Route> {
        self.by_name.get(name).map(|&idx| &self.routes[idx])
    }

    /// Href con hash para una ruta con nombre (p.ej. "#/pois")
    pub fn href(&self, name: &str) -> Option<String> {
        self.find_by_name(name).map(|r| format!("#{}", r.path()))
    }

    /// Rutas con nombre que renderizan una vista, en orden de declaración
    pub fn named_views(&self) -> impl Iterator<Item = &Route> {
        self.routes
            .iter()
            .filter(|r| r.name().is_some() && !r.is_redirect())
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
