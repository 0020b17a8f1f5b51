mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_logout_clears_authorization() {
    let server = common::create_test_server();
    common::login(&server).await;

    let response = server.get("/").add_query_param("logout", "1").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/");

    assert!(common::is_login_page(&server.get("/").await.text()));
}

#[tokio::test]
async fn test_logout_without_session_redirects() {
    let server = common::create_test_server();

    let response = server.get("/").add_query_param("logout", "1").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/");
    assert!(common::is_login_page(&server.get("/").await.text()));
}

#[tokio::test]
async fn test_logout_accepts_any_value() {
    let server = common::create_test_server();

    for value in ["", "0", "yes"] {
        common::login(&server).await;

        let response = server.get("/").add_query_param("logout", value).await;

        response.assert_status(StatusCode::FOUND);
        assert!(common::is_login_page(&server.get("/").await.text()));
    }
}

#[tokio::test]
async fn test_logout_wins_over_password_in_same_request() {
    let server = common::create_test_server();

    let response = server
        .post("/")
        .add_query_param("logout", "1")
        .form(&[("password", common::TEST_PASSWORD)])
        .await;

    response.assert_status(StatusCode::FOUND);
    assert!(common::is_login_page(&server.get("/").await.text()));
}

#[tokio::test]
async fn test_login_again_after_logout() {
    let server = common::create_test_server();
    common::login(&server).await;
    server.get("/").add_query_param("logout", "1").await;

    let response = common::login(&server).await;

    assert!(common::is_dashboard(&response.text()));
}

#[tokio::test]
async fn test_repeated_logout_parameter_clears_authorization() {
    let server = common::create_test_server();
    common::login(&server).await;

    let response = server.get("/?logout=1&logout=1").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/");
    assert!(common::is_login_page(&server.get("/").await.text()));
}

#[tokio::test]
async fn test_logout_post_without_form_body() {
    let server = common::create_test_server();
    common::login(&server).await;

    let response = server.post("/").add_query_param("logout", "1").await;

    response.assert_status(StatusCode::FOUND);
    assert!(common::is_login_page(&server.get("/").await.text()));
}

#[tokio::test]
async fn test_post_with_other_content_type_is_rejected() {
    let server = common::create_test_server();
    common::login(&server).await;

    let response = server.post("/").text("password=robot2026").await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(common::is_dashboard(&server.get("/").await.text()));
}
