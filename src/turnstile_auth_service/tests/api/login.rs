use crate::helpers::{SEEDED_EMAIL, SEEDED_PASSWORD, TestApp, location_of, random_email};

#[tokio::test]
async fn the_right_password_signs_the_caller_in() {
    let app = TestApp::new().await;
    app.seed_user().await;

    let response = app.post_login(SEEDED_EMAIL, SEEDED_PASSWORD).await;

    assert_eq!(response.status(), 302);
    assert_eq!(location_of(&response), "/");
    assert_eq!(app.get_home().await.status(), 200);
}

#[tokio::test]
async fn the_wrong_password_redirects_the_same_way_but_signs_nobody_in() {
    let app = TestApp::new().await;
    app.seed_user().await;

    // "test" against the seeded "testing".
    let response = app.post_login(SEEDED_EMAIL, "test").await;

    // Same 302 to / as a success; only the session state differs.
    assert_eq!(response.status(), 302);
    assert_eq!(location_of(&response), "/");
    assert_eq!(app.get_home().await.status(), 302);
}

#[tokio::test]
async fn an_unknown_email_is_indistinguishable_from_a_wrong_password() {
    let app = TestApp::new().await;
    app.seed_user().await;

    let response = app.post_login(&random_email(), SEEDED_PASSWORD).await;

    assert_eq!(response.status(), 302);
    assert_eq!(location_of(&response), "/");
    assert_eq!(app.get_home().await.status(), 302);
}

#[tokio::test]
async fn a_rejected_login_sets_no_session_cookie() {
    let app = TestApp::new().await;
    app.seed_user().await;

    let response = app.post_login(SEEDED_EMAIL, "test").await;

    assert!(response.headers().get(reqwest::header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn an_accepted_login_sets_the_session_cookie() {
    let app = TestApp::new().await;
    app.seed_user().await;

    let response = app.post_login(SEEDED_EMAIL, SEEDED_PASSWORD).await;

    let cookie = response
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .expect("Expected a session cookie")
        .to_str()
        .expect("Cookie is not valid text");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[tokio::test]
async fn a_rejected_login_does_not_end_an_existing_session() {
    let app = TestApp::new().await;
    app.seed_user().await;
    app.post_login(SEEDED_EMAIL, SEEDED_PASSWORD).await;

    let response = app.post_login(SEEDED_EMAIL, "test").await;

    assert_eq!(response.status(), 302);
    assert_eq!(location_of(&response), "/");
    // The session from the first login survives the failed second attempt.
    assert_eq!(app.get_home().await.status(), 200);
}

#[tokio::test]
async fn empty_form_fields_are_a_validation_failure_not_a_rejection() {
    let app = TestApp::new().await;
    app.seed_user().await;

    assert_eq!(app.post_login("", SEEDED_PASSWORD).await.status(), 422);
    assert_eq!(app.post_login(SEEDED_EMAIL, "").await.status(), 422);
}
