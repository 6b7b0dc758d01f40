// ============================================================================
// ROUTER MODULE - Routing por hash (#/...)
// ============================================================================

pub mod route;
pub mod table;
pub mod history;
pub mod state;

pub use route::{ResolvedRoute, Route, RouteTarget};
pub use table::RouteTable;
pub use state::{Navigation, Router};
