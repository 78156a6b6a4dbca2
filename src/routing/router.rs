//! Route table and lookup.

use axum::http::Method;

use crate::ops::Operation;

/// One entry in the route table.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: &'static str,
    pub method: Method,
    pub op: Operation,
}

/// Fixed ordered sequence of routes; linear first-match lookup.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The agent's API surface.
    pub fn api() -> Self {
        Self::new(vec![
            Route {
                path: "/api/ping",
                method: Method::GET,
                op: Operation::Ping,
            },
            Route {
                path: "/api/network/option",
                method: Method::GET,
                op: Operation::GetNetworkOption,
            },
            Route {
                path: "/api/network/option",
                method: Method::POST,
                op: Operation::SetNetworkOption,
            },
            Route {
                path: "/api/network/status",
                method: Method::GET,
                op: Operation::GetInterfaceStatus,
            },
            Route {
                path: "/api/network/status",
                method: Method::POST,
                op: Operation::CycleInterface,
            },
        ])
    }

    /// Find the first route matching (path without query string, method).
    pub fn lookup(&self, path: &str, method: &Method) -> Option<&Route> {
        self.routes
            .iter()
            .find(|route| route.path == path && route.method == *method)
    }
}
