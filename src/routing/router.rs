//! Route table lookup and dispatch targets.
//!
//! # Responsibilities
//! - Hold the ordered list of (method, path matcher, endpoint) routes
//! - Resolve a request to an endpoint plus any captured id
//! - Return explicit `None` on no match
//!
//! # Design Decisions
//! - One ordered structure for both exact and pattern routes; exact entries
//!   come first, so precedence is positional and easy to audit
//! - Endpoints are a closed enum rather than boxed closures, which keeps
//!   the table `Debug` and the dispatch a plain `match`

use axum::http::Method;

use super::matcher::PathMatcher;

/// Dispatch target for a matched route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Home,
    Demo,
    ListTodos,
    CreateTodo,
    UpdateTodo,
    DeleteTodo,
}

/// One entry in the route table.
#[derive(Debug, Clone)]
pub struct Route {
    pub method: Method,
    pub matcher: PathMatcher,
    pub endpoint: Endpoint,
}

/// A successful lookup: where to dispatch, and the id captured from the
/// path when the route carries one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub endpoint: Endpoint,
    pub id: Option<String>,
}

/// Ordered route table. Immutable after construction.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The full surface of this server. Exact routes first, then the
    /// id-capturing routes, in the order they are checked.
    pub fn todo_api() -> Self {
        Self::new(vec![
            Route {
                method: Method::GET,
                matcher: PathMatcher::exact("/"),
                endpoint: Endpoint::Home,
            },
            Route {
                method: Method::GET,
                matcher: PathMatcher::exact("/demo"),
                endpoint: Endpoint::Demo,
            },
            Route {
                method: Method::GET,
                matcher: PathMatcher::exact("/todo"),
                endpoint: Endpoint::ListTodos,
            },
            Route {
                method: Method::POST,
                matcher: PathMatcher::exact("/todo"),
                endpoint: Endpoint::CreateTodo,
            },
            Route {
                method: Method::PUT,
                matcher: PathMatcher::id_suffix("/todo/"),
                endpoint: Endpoint::UpdateTodo,
            },
            Route {
                method: Method::DELETE,
                matcher: PathMatcher::id_suffix("/todo/"),
                endpoint: Endpoint::DeleteTodo,
            },
        ])
    }

    /// Scan routes in order; first match wins.
    pub fn match_route(&self, method: &Method, path: &str) -> Option<RouteMatch> {
        for route in &self.routes {
            if route.method != *method {
                continue;
            }
            if let Some(id) = route.matcher.match_path(path) {
                return Some(RouteMatch {
                    endpoint: route.endpoint,
                    id,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_routes_resolve() {
        let table = RouteTable::todo_api();

        let home = table.match_route(&Method::GET, "/").unwrap();
        assert_eq!(home.endpoint, Endpoint::Home);
        assert_eq!(home.id, None);

        let demo = table.match_route(&Method::GET, "/demo").unwrap();
        assert_eq!(demo.endpoint, Endpoint::Demo);

        assert_eq!(
            table.match_route(&Method::GET, "/todo").unwrap().endpoint,
            Endpoint::ListTodos
        );
        assert_eq!(
            table.match_route(&Method::POST, "/todo").unwrap().endpoint,
            Endpoint::CreateTodo
        );
    }

    #[test]
    fn test_id_routes_capture_the_id() {
        let table = RouteTable::todo_api();

        let m = table.match_route(&Method::DELETE, "/todo/abc-123").unwrap();
        assert_eq!(m.endpoint, Endpoint::DeleteTodo);
        assert_eq!(m.id.as_deref(), Some("abc-123"));

        let m = table.match_route(&Method::PUT, "/todo/1").unwrap();
        assert_eq!(m.endpoint, Endpoint::UpdateTodo);
        assert_eq!(m.id.as_deref(), Some("1"));
    }

    #[test]
    fn test_method_is_part_of_the_match() {
        let table = RouteTable::todo_api();

        assert!(table.match_route(&Method::DELETE, "/todo").is_none());
        assert!(table.match_route(&Method::GET, "/todo/1").is_none());
        assert!(table.match_route(&Method::POST, "/").is_none());
    }

    #[test]
    fn test_no_match_cases() {
        let table = RouteTable::todo_api();

        assert!(table.match_route(&Method::GET, "/nope").is_none());
        assert!(table.match_route(&Method::DELETE, "/todo/").is_none()); // Empty id
        assert!(table.match_route(&Method::PUT, "/todo/a/b").is_none());
    }

    #[test]
    fn test_greeting_paths_never_hit_id_routes() {
        let table = RouteTable::todo_api();

        let home = table.match_route(&Method::GET, "/").unwrap();
        assert_eq!(home.endpoint, Endpoint::Home);
        let demo = table.match_route(&Method::GET, "/demo").unwrap();
        assert_eq!(demo.endpoint, Endpoint::Demo);
    }
}
