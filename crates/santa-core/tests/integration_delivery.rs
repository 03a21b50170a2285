#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test, panics are the assertion mechanism")]

use santa_core::modules::delivery::{deliver_csv, DELIVERY_CONTENT_TYPE};
use santa_core::AppError;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TABLE: &str = "Employee_Name,Employee_EmailID,Secret_Child_Name,Secret_Child_EmailID\n\
Alice,a@x,Bob,b@x\nBob,b@x,Alice,a@x\n";

#[tokio::test]
async fn test_delivery_posts_csv() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/assignments/secret_santa"))
        .and(header("content-type", DELIVERY_CONTENT_TYPE))
        .and(body_string(TABLE))
        .respond_with(ResponseTemplate::new(201).set_body_string("stored"))
        .expect(1)
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/assignments/secret_santa", server.uri());
    let receipt = deliver_csv(&client, &url, TABLE.as_bytes().to_vec())
        .await
        .expect("delivery should succeed");

    assert_eq!(receipt.status, 201);
    assert_eq!(receipt.body, "stored");
}

#[tokio::test]
async fn test_delivery_rejection_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_string("bad table"))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/assignments/secret_santa", server.uri());
    let result = deliver_csv(&client, &url, TABLE.as_bytes().to_vec()).await;

    match result {
        Err(AppError::Delivery { status, body }) => {
            assert_eq!(status, 422);
            assert_eq!(body, "bad table");
        }
        other => panic!("expected delivery rejection, got {other:?}"),
    }
}
