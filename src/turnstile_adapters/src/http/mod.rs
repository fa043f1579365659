pub mod pages;
pub mod routes;
pub mod session_cookie;

pub use routes::FlowApiError;
pub use session_cookie::{removal_cookie, session_context, session_cookie};
