//! The flow's routing contract as data.
//!
//! `(method, path) -> operation` lives here as a plain table so the contract
//! surface can be inspected and tested without a server, and so the HTTP
//! router is derived FROM the table rather than being a second source of
//! truth.

/// Well-known paths of the flow. Redirect targets reference these constants
/// so a renamed path cannot silently split the contract.
pub mod paths {
    /// Public landing page; also where every POST outcome and logout lands.
    pub const LANDING: &str = "/";
    /// The protected resource.
    pub const DASHBOARD: &str = "/home";
    /// Sign-in form (GET) and login attempt (POST).
    pub const LOGIN: &str = "/login";
    pub const LOGOUT: &str = "/logout";
    /// Sign-up form (GET) and registration (POST).
    pub const REGISTER: &str = "/register";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// The four operations of the authentication flow contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ViewDashboard,
    Login,
    Logout,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub operation: Operation,
}

/// The contract surface. The GET form/landing pages around it are
/// presentation, not contract, and are mounted separately.
pub const ROUTES: [Route; 4] = [
    Route {
        method: Method::Get,
        path: paths::DASHBOARD,
        operation: Operation::ViewDashboard,
    },
    Route {
        method: Method::Post,
        path: paths::LOGIN,
        operation: Operation::Login,
    },
    Route {
        method: Method::Get,
        path: paths::LOGOUT,
        operation: Operation::Logout,
    },
    Route {
        method: Method::Post,
        path: paths::REGISTER,
        operation: Operation::Register,
    },
];

/// Which operation (if any) `(method, path)` targets.
pub fn resolve(method: Method, path: &str) -> Option<Operation> {
    ROUTES
        .iter()
        .find(|route| route.method == method && route.path == path)
        .map(|route| route.operation)
}
