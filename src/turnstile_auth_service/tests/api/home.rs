use turnstile_adapters::config::SESSION_COOKIE_NAME;

use crate::helpers::{SEEDED_EMAIL, SEEDED_NAME, SEEDED_PASSWORD, TestApp, location_of};

#[tokio::test]
async fn an_anonymous_visitor_is_redirected_to_the_login_form() {
    let app = TestApp::new().await;

    let response = app.get_home().await;

    assert_eq!(response.status(), 302);
    assert_eq!(location_of(&response), "/login");
}

#[tokio::test]
async fn a_signed_in_visitor_sees_the_dashboard() {
    let app = TestApp::new().await;
    app.seed_user().await;
    app.post_login(SEEDED_EMAIL, SEEDED_PASSWORD).await;

    let response = app.get_home().await;

    assert_eq!(response.status(), 200);
    let body = response.text().await.expect("Failed to read the page");
    assert!(body.contains(SEEDED_NAME));
    assert!(body.contains(SEEDED_EMAIL));
}

#[tokio::test]
async fn a_garbled_session_cookie_counts_as_anonymous() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/home", app.address))
        .header("Cookie", format!("{}=not-a-session-id", *SESSION_COOKIE_NAME))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 302);
    assert_eq!(location_of(&response), "/login");
}

#[tokio::test]
async fn looking_at_the_dashboard_does_not_end_the_session() {
    let app = TestApp::new().await;
    app.seed_user().await;
    app.post_login(SEEDED_EMAIL, SEEDED_PASSWORD).await;

    app.get_home().await;
    let second_visit = app.get_home().await;

    assert_eq!(second_visit.status(), 200);
}
