pub mod use_cases;

pub use use_cases::{
    login::{LoginError, LoginResponse, LoginUseCase},
    logout::{LogoutError, LogoutUseCase},
    register::{RegisterError, RegisterUseCase},
    view_dashboard::{DashboardAccess, ViewDashboardError, ViewDashboardUseCase},
};
