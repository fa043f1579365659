use std::sync::LazyLock;

use crate::config::settings::AuthFlowSetting;

pub mod env {
    pub const CONFIG_FILE_ENV_VAR: &str = "TURNSTILE_CONFIG";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const REDIS_HOST_NAME_ENV_VAR: &str = "REDIS_HOST_NAME";
}

/// Name of the cookie carrying the session id. Leaked once so cookie
/// construction can hand out `&'static str` without re-reading settings.
pub static SESSION_COOKIE_NAME: LazyLock<&'static str> = LazyLock::new(|| {
    let cookie_name = AuthFlowSetting::load().session.cookie_name.clone();
    Box::leak(cookie_name.into_boxed_str())
});

pub mod test {
    /// Port 0 so concurrently running test apps never collide.
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
