// ============================================================================
// ROUTES - Tabla de rutas de la aplicación
// ============================================================================

use crate::error::RouterError;
use crate::router::{Route, RouteTable, Router};
use crate::views::ViewId;

pub const ROOT: &str = "/";
pub const POIS: &str = "/pois";
pub const ITINERARY: &str = "/itinerary";
pub const BUDGET: &str = "/budget";

/// Rutas declaradas: "/" redirige a POIs
pub fn app_routes() -> Vec<Route> {
    vec![
        Route::redirect(ROOT, POIS),
        Route::view(POIS, ViewId::Pois).named("Pois"),
        Route::view(ITINERARY, ViewId::Itinerary).named("Itinerary"),
        Route::view(BUDGET, ViewId::Budget).named("Budget"),
    ]
}

pub fn create_router() -> Result<Router, RouterError> {
    Ok(Router::new(RouteTable::new(app_routes())?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::history::path_from_hash;
    use crate::router::Navigation;

    const DECLARED: [&str; 4] = [ROOT, POIS, ITINERARY, BUDGET];

    #[test]
    fn each_declared_path_selects_exactly_one_entry() {
        let router = create_router().unwrap();
        for path in DECLARED {
            let hits = router
                .table()
                .routes()
                .iter()
                .filter(|r| r.path() == path)
                .count();
            assert_eq!(hits, 1, "{}", path);
            assert_eq!(router.table().match_path(path).unwrap().path(), path);
        }
    }

    #[test]
    fn root_resolves_like_pois() {
        let router = create_router().unwrap();
        let root = router.table().resolve("/").unwrap();
        let pois = router.table().resolve("/pois").unwrap();
        assert_eq!(root.view, pois.view);
        assert_eq!(root.name, pois.name);
        assert_eq!(root.view, ViewId::Pois);
        assert_eq!(root.name.as_deref(), Some("Pois"));
    }

    #[test]
    fn itinerary_scenario() {
        let router = create_router().unwrap();
        match router.navigate("/itinerary") {
            Navigation::Matched(r) => {
                assert_eq!(r.view, ViewId::Itinerary);
                assert_eq!(r.name.as_deref(), Some("Itinerary"));
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn budget_scenario() {
        let resolved = create_router().unwrap().table().resolve("/budget").unwrap();
        assert_eq!(resolved.view, ViewId::Budget);
        assert_eq!(resolved.name.as_deref(), Some("Budget"));
    }

    #[test]
    fn unknown_path_matches_nothing() {
        let router = create_router().unwrap();
        assert!(router.table().match_path("/unknown").is_none());
        assert_eq!(
            router.navigate("/unknown"),
            Navigation::Unmatched("/unknown".into())
        );
    }

    #[test]
    fn nav_links_follow_declaration_order() {
        let router = create_router().unwrap();
        let links: Vec<_> = router
            .table()
            .named_views()
            .filter_map(|r| r.name().and_then(|n| router.table().href(n)))
            .collect();
        assert_eq!(links, vec!["#/pois", "#/itinerary", "#/budget"]);
    }

    #[test]
    fn raw_hash_resolves_to_view() {
        let router = create_router().unwrap();
        for hash in ["", "#", "#/", "#/pois", "#/pois/", "#/pois?lang=es"] {
            let resolved = router.table().resolve(&path_from_hash(hash)).unwrap();
            assert_eq!(resolved.view, ViewId::Pois, "{:?}", hash);
            assert_eq!(resolved.path, POIS);
        }
        let resolved = router.table().resolve(&path_from_hash("#/budget/")).unwrap();
        assert_eq!(resolved.view, ViewId::Budget);
        assert!(router.table().resolve(&path_from_hash("#/unknown")).is_none());
    }
}
