use turnstile_core::{Email, UserDirectory};

use crate::helpers::{RegisterForm, SEEDED_EMAIL, SEEDED_NAME, TestApp, location_of, random_email};

#[tokio::test]
async fn registering_creates_the_account_and_signs_the_caller_in() {
    let app = TestApp::new().await;

    let response = app.post_register(&RegisterForm::seeded()).await;

    assert_eq!(response.status(), 302);
    assert_eq!(location_of(&response), "/");

    let email = Email::try_from(SEEDED_EMAIL.to_string()).unwrap();
    let stored = app
        .user_directory
        .find_user(&email)
        .await
        .expect("The registered user is missing from the directory");
    assert_eq!(stored.name(), Some(SEEDED_NAME));

    assert_eq!(app.get_home().await.status(), 200);
}

#[tokio::test]
async fn a_freshly_registered_account_can_log_in_with_its_password() {
    let app = TestApp::new().await;
    let email = random_email();
    let form = RegisterForm {
        name: "usertest",
        email: &email,
        password: "testing",
        password_confirmation: "testing",
    };
    app.post_register(&form).await;
    app.get_logout().await;

    app.post_login(&email, "testing").await;

    assert_eq!(app.get_home().await.status(), 200);
}

#[tokio::test]
async fn a_mismatched_confirmation_registers_nothing() {
    let app = TestApp::new().await;
    let form = RegisterForm {
        password_confirmation: "test",
        ..RegisterForm::seeded()
    };

    let response = app.post_register(&form).await;

    assert_eq!(response.status(), 422);

    let email = Email::try_from(SEEDED_EMAIL.to_string()).unwrap();
    assert!(app.user_directory.find_user(&email).await.is_err());
    assert_eq!(app.get_home().await.status(), 302);
}

#[tokio::test]
async fn a_missing_name_is_a_validation_failure() {
    let app = TestApp::new().await;
    let form = RegisterForm {
        name: "",
        ..RegisterForm::seeded()
    };

    assert_eq!(app.post_register(&form).await.status(), 422);
}

#[tokio::test]
async fn an_unshaped_email_is_a_validation_failure() {
    let app = TestApp::new().await;
    let form = RegisterForm {
        email: "not-an-email",
        ..RegisterForm::seeded()
    };

    assert_eq!(app.post_register(&form).await.status(), 422);
}

#[tokio::test]
async fn a_taken_email_cannot_be_claimed_again() {
    let app = TestApp::new().await;
    app.seed_user().await;

    let response = app.post_register(&RegisterForm::seeded()).await;

    assert_eq!(response.status(), 422);
    // The refused attempt signed nobody in.
    assert_eq!(app.get_home().await.status(), 302);
}

#[tokio::test]
async fn generated_registrations_land_in_the_directory() {
    let app = TestApp::new().await;
    let email = random_email();
    let form = RegisterForm {
        name: "usertest",
        email: &email,
        password: "testing",
        password_confirmation: "testing",
    };

    let response = app.post_register(&form).await;

    assert_eq!(response.status(), 302);
    let email = Email::try_from(email).unwrap();
    assert!(app.user_directory.find_user(&email).await.is_ok());
}
