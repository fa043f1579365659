pub mod login;
pub mod logout;
pub mod register;
pub mod view_dashboard;

// Re-export for convenience
pub use login::{LoginError, LoginResponse, LoginUseCase};
pub use logout::{LogoutError, LogoutUseCase};
pub use register::{RegisterError, RegisterUseCase};
pub use view_dashboard::{DashboardAccess, ViewDashboardError, ViewDashboardUseCase};
