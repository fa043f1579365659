use fake::{Fake, faker::internet::en::SafeEmail};
use reqwest::{Client, Response, redirect};
use secrecy::Secret;
use serde::Serialize;
use tokio::net::TcpListener;

use turnstile_adapters::{
    Argon2PasswordScheme, HashMapSessionStore, HashMapUserDirectory, config::test,
};
use turnstile_auth_service::AuthFlowService;
use turnstile_core::{Email, Password, PasswordScheme, User, UserDirectory};

/// The account [`TestApp::seed_user`] registers.
pub const SEEDED_EMAIL: &str = "testing@testing.com";
pub const SEEDED_NAME: &str = "usertest";
pub const SEEDED_PASSWORD: &str = "testing";

/// One service instance on an ephemeral port, with in-memory adapters and a
/// cookie-keeping client that never follows redirects, so every 302 can be
/// asserted on directly.
pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub user_directory: HashMapUserDirectory,
}

impl TestApp {
    pub async fn new() -> Self {
        let user_directory = HashMapUserDirectory::new();
        let session_store = HashMapSessionStore::new();

        let service = AuthFlowService::new(
            user_directory.clone(),
            session_store,
            Argon2PasswordScheme::new(),
        );

        let listener = TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind to random port");
        let address = format!(
            "http://{}",
            listener.local_addr().expect("Failed to read local address")
        );

        tokio::spawn(service.run_standalone(listener));

        let http_client = Client::builder()
            .redirect(redirect::Policy::none())
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            address,
            http_client,
            user_directory,
        }
    }

    /// Registers the well-known account directly through the ports, leaving
    /// the HTTP surface and the client's cookie jar untouched.
    pub async fn seed_user(&self) {
        let hash = Argon2PasswordScheme::new()
            .hash_password(&password(SEEDED_PASSWORD))
            .await
            .expect("Failed to hash the seeded password");

        let user = User::new(email(SEEDED_EMAIL), Some(SEEDED_NAME.to_string()), hash);

        self.user_directory
            .create_user(user)
            .await
            .expect("Failed to seed the user");
    }

    pub async fn get_root(&self) -> Response {
        self.get("/").await
    }

    pub async fn get_home(&self) -> Response {
        self.get("/home").await
    }

    pub async fn get_login_form(&self) -> Response {
        self.get("/login").await
    }

    pub async fn get_register_form(&self) -> Response {
        self.get("/register").await
    }

    pub async fn get_logout(&self) -> Response {
        self.get("/logout").await
    }

    pub async fn post_login(&self, email: &str, password: &str) -> Response {
        self.http_client
            .post(format!("{}/login", self.address))
            .form(&[("email", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_register(&self, form: &RegisterForm<'_>) -> Response {
        self.http_client
            .post(format!("{}/register", self.address))
            .form(form)
            .send()
            .await
            .expect("Failed to execute request")
    }

    async fn get(&self, path: &str) -> Response {
        self.http_client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

#[derive(Serialize)]
pub struct RegisterForm<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub password_confirmation: &'a str,
}

impl RegisterForm<'_> {
    /// The well-known fixture, submitted over HTTP this time.
    pub fn seeded() -> RegisterForm<'static> {
        RegisterForm {
            name: SEEDED_NAME,
            email: SEEDED_EMAIL,
            password: SEEDED_PASSWORD,
            password_confirmation: SEEDED_PASSWORD,
        }
    }
}

pub fn random_email() -> String {
    SafeEmail().fake()
}

pub fn location_of(response: &Response) -> &str {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

fn email(value: &str) -> Email {
    Email::try_from(value.to_string()).expect("Invalid email fixture")
}

fn password(value: &str) -> Password {
    Password::try_from(Secret::new(value.to_string())).expect("Invalid password fixture")
}
