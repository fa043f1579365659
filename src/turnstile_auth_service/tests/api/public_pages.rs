use crate::helpers::{SEEDED_EMAIL, SEEDED_PASSWORD, TestApp, location_of};

#[tokio::test]
async fn the_landing_page_is_public() {
    let app = TestApp::new().await;

    let response = app.get_root().await;

    assert_eq!(response.status(), 200);
    let body = response.text().await.expect("Failed to read the page");
    assert!(body.contains(r#"href="/login""#));
    assert!(body.contains(r#"href="/register""#));
}

#[tokio::test]
async fn the_landing_page_looks_the_same_signed_in() {
    let app = TestApp::new().await;
    app.seed_user().await;
    app.post_login(SEEDED_EMAIL, SEEDED_PASSWORD).await;

    assert_eq!(app.get_root().await.status(), 200);
}

#[tokio::test]
async fn anonymous_visitors_get_the_forms() {
    let app = TestApp::new().await;

    assert_eq!(app.get_login_form().await.status(), 200);
    assert_eq!(app.get_register_form().await.status(), 200);
}

#[tokio::test]
async fn signed_in_visitors_are_sent_from_the_login_form_to_the_dashboard() {
    let app = TestApp::new().await;
    app.seed_user().await;
    app.post_login(SEEDED_EMAIL, SEEDED_PASSWORD).await;

    let response = app.get_login_form().await;

    assert_eq!(response.status(), 302);
    assert_eq!(location_of(&response), "/home");
}

#[tokio::test]
async fn signed_in_visitors_are_sent_from_the_register_form_to_the_dashboard() {
    let app = TestApp::new().await;
    app.seed_user().await;
    app.post_login(SEEDED_EMAIL, SEEDED_PASSWORD).await;

    let response = app.get_register_form().await;

    assert_eq!(response.status(), 302);
    assert_eq!(location_of(&response), "/home");
}
