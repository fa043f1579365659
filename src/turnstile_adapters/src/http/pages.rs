//! The HTML pages served by the flow, rendered with askama.

use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
pub struct LandingPage;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage<'a> {
    pub error: &'a str,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage<'a> {
    pub error: &'a str,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct DashboardPage<'a> {
    pub display_name: &'a str,
    pub email: &'a str,
}
