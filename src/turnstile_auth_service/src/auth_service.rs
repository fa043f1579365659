use axum::{
    Router,
    routing::{MethodRouter, get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use turnstile_adapters::http::routes::{
    home, landing, login, login_form, logout, register, register_form,
};
use turnstile_core::{Method, Operation, PasswordScheme, ROUTES, SessionStore, UserDirectory, paths};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The authentication flow as a mountable service: the contract routes plus
/// the public pages around them.
pub struct AuthFlowService {
    router: Router,
}

impl AuthFlowService {
    /// Wire the flow's handlers to the given adapters.
    ///
    /// The adapters implement Clone via an internal handle (`Arc`, pool,
    /// connection), so every route shares the same underlying state.
    pub fn new<D, S, P>(user_directory: D, session_store: S, password_scheme: P) -> Self
    where
        D: UserDirectory + Clone + 'static,
        S: SessionStore + Clone + 'static,
        P: PasswordScheme + Clone + 'static,
    {
        let mut router = Router::new();

        // The contract table decides which (method, path) pairs exist; the
        // router is built from it rather than from a second hand-kept list.
        for route in &ROUTES {
            let handler: MethodRouter<(D, S, P)> = match (route.method, route.operation) {
                (Method::Get, Operation::ViewDashboard) => get(home::<D, S, P>),
                (Method::Post, Operation::Login) => post(login::<D, S, P>),
                (Method::Get, Operation::Logout) => get(logout::<D, S, P>),
                (Method::Post, Operation::Register) => post(register::<D, S, P>),
                (method, operation) => {
                    unreachable!("no handler for {method:?} {operation:?}")
                }
            };

            router = router.route(route.path, handler);
        }

        // The pages around the contract: the landing target and the two
        // form pages, which merge onto the POST routes above.
        let router = router
            .route(paths::LANDING, get(landing))
            .route(paths::LOGIN, get(login_form::<D, S, P>))
            .route(paths::REGISTER, get(register_form::<D, S, P>))
            .with_state((user_directory, session_store, password_scheme));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be nested into another
    /// application.
    pub fn into_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the flow as a standalone server on `listener`.
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.into_router();

        tracing::info!("Auth flow listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
