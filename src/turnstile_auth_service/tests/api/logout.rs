use crate::helpers::{SEEDED_EMAIL, SEEDED_PASSWORD, TestApp, location_of};

#[tokio::test]
async fn logging_out_ends_the_session() {
    let app = TestApp::new().await;
    app.seed_user().await;
    app.post_login(SEEDED_EMAIL, SEEDED_PASSWORD).await;

    let response = app.get_logout().await;

    assert_eq!(response.status(), 302);
    assert_eq!(location_of(&response), "/");

    // The dashboard is out of reach again.
    let home = app.get_home().await;
    assert_eq!(home.status(), 302);
    assert_eq!(location_of(&home), "/login");
}

#[tokio::test]
async fn logging_out_while_anonymous_redirects_all_the_same() {
    let app = TestApp::new().await;

    let response = app.get_logout().await;

    assert_eq!(response.status(), 302);
    assert_eq!(location_of(&response), "/");
}

#[tokio::test]
async fn logging_out_twice_is_harmless() {
    let app = TestApp::new().await;
    app.seed_user().await;
    app.post_login(SEEDED_EMAIL, SEEDED_PASSWORD).await;

    app.get_logout().await;
    let second = app.get_logout().await;

    assert_eq!(second.status(), 302);
    assert_eq!(location_of(&second), "/");
}

#[tokio::test]
async fn the_caller_can_sign_back_in_after_logging_out() {
    let app = TestApp::new().await;
    app.seed_user().await;
    app.post_login(SEEDED_EMAIL, SEEDED_PASSWORD).await;
    app.get_logout().await;

    app.post_login(SEEDED_EMAIL, SEEDED_PASSWORD).await;

    assert_eq!(app.get_home().await.status(), 200);
}
