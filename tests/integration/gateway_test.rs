//! HTTP gateway against a mock backend.

use mockito::{Matcher, Server};
use serde_json::json;

use docvault_core::config::gateway::GatewayConfig;
use docvault_core::error::ErrorKind;
use docvault_gateway::{Gateway, HttpGateway, UploadPayload};

use crate::helpers;

#[tokio::test]
async fn test_list_all_files() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/docs/all")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(helpers::list_json(vec![
            helpers::group_json("plan.docx", &["1.1", "1.0"]),
            helpers::group_json("budget.xlsx", &["2.0"]),
        ]))
        .create_async()
        .await;

    let groups = helpers::gateway(&server, None)
        .list_all_files()
        .await
        .expect("list");

    mock.assert_async().await;
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].file_name, "plan.docx");
    assert_eq!(groups[0].versions[0].version, "1.1");
    assert_eq!(groups[1].versions[0].download_link, "/uploads/budget-2.0.xlsx");
}

#[tokio::test]
async fn test_malformed_list_is_empty() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/docs/all")
        .with_status(200)
        .with_body(r#"{"files": []}"#)
        .create_async()
        .await;

    let groups = helpers::gateway(&server, None)
        .list_all_files()
        .await
        .expect("list");
    assert!(groups.is_empty());
}

#[tokio::test]
async fn test_malformed_entries_skipped() {
    let mut server = Server::new_async().await;
    let body = json!([
        { "fileName": "plan.docx", "versions": [{ "fileName": "plan.docx", "version": "1.0" }] },
        { "versions": "not a list" },
        42
    ]);
    server
        .mock("GET", "/api/docs/all")
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let groups = helpers::gateway(&server, None)
        .list_all_files()
        .await
        .expect("list");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].file_name, "plan.docx");
}

#[tokio::test]
async fn test_bearer_token_sent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/docs/all")
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    helpers::gateway(&server, Some("secret-token"))
        .list_all_files()
        .await
        .expect("list");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_failure_is_network_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/docs/all")
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let err = helpers::gateway(&server, None)
        .list_all_files()
        .await
        .expect_err("503");
    assert_eq!(err.kind, ErrorKind::NetworkError);
    assert_eq!(err.message, "Failed to load files. Please try again later.");
}

#[tokio::test]
async fn test_upload_sends_multipart_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/docs/upload")
        .match_header(
            "content-type",
            Matcher::Regex("^multipart/form-data; boundary=".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file"; filename="plan\.docx""#.to_string()),
            Matcher::Regex(r#"name="author"\s+Jane Smith"#.to_string()),
            Matcher::Regex(r#"name="version"\s+1\.3"#.to_string()),
            Matcher::Regex(r#"name="filename"\s+plan\s"#.to_string()),
            Matcher::Regex(r#"name="keywords"\s+timeline"#.to_string()),
            Matcher::Regex(r#"name="remark"\s+Major revision"#.to_string()),
        ]))
        .with_status(200)
        .with_body(helpers::version_json("plan.docx", "1.3", "2024-03-02T10:00:00Z").to_string())
        .create_async()
        .await;

    let payload = UploadPayload::new("plan.docx", b"docx bytes".to_vec())
        .author("Jane Smith")
        .version("1.3")
        .keywords("timeline")
        .remark("Major revision");
    let version = helpers::gateway(&server, None)
        .create_file(payload)
        .await
        .expect("upload");

    mock.assert_async().await;
    assert_eq!(version.version, "1.3");
    assert_eq!(version.download_link, "/uploads/plan-1.3.docx");
}

#[tokio::test]
async fn test_upload_without_echo_synthesizes_version() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/docs/upload")
        .with_status(201)
        .with_body("")
        .create_async()
        .await;

    let version = helpers::gateway(&server, None)
        .create_file(UploadPayload::new("notes.txt", b"hello".to_vec()).version("1.0"))
        .await
        .expect("upload");
    assert_eq!(version.file_name, "notes.txt");
    assert_eq!(version.version, "1.0");
}

#[tokio::test]
async fn test_upload_rejection_carries_backend_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/docs/upload")
        .with_status(413)
        .with_body(r#"{"message": "File too large"}"#)
        .create_async()
        .await;

    let err = helpers::gateway(&server, None)
        .create_file(UploadPayload::new("plan.docx", b"x".to_vec()))
        .await
        .expect_err("413");
    assert_eq!(err.kind, ErrorKind::UploadFailed);
    assert_eq!(err.message, "File too large");
}

#[tokio::test]
async fn test_upload_rejection_without_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/docs/upload")
        .with_status(500)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let err = helpers::gateway(&server, None)
        .create_file(UploadPayload::new("plan.docx", b"x".to_vec()))
        .await
        .expect_err("500");
    assert_eq!(err.kind, ErrorKind::UploadFailed);
    assert_eq!(err.message, "Upload failed");
}

#[tokio::test]
async fn test_search_encodes_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/docs/search")
        .match_query(Matcher::UrlEncoded("q".to_string(), "q4 budget & plan".to_string()))
        .with_status(200)
        .with_body(
            json!([{
                "indexedAt": "2024-03-01T09:00:00Z",
                "fileData": helpers::version_json("budget.xlsx", "2.0", ""),
                "content": "Q4 budget figures"
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let hits = helpers::gateway(&server, None)
        .search_content("q4 budget & plan")
        .await
        .expect("search");

    mock.assert_async().await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].file_data.file_name, "budget.xlsx");
    assert_eq!(hits[0].content, "Q4 budget figures");
}

#[tokio::test]
async fn test_search_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/docs/search")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"message": "Index is rebuilding"}"#)
        .create_async()
        .await;

    let err = helpers::gateway(&server, None)
        .search_content("budget")
        .await
        .expect_err("500");
    assert_eq!(err.kind, ErrorKind::SearchFailed);
    assert_eq!(err.message, "Index is rebuilding");
}

#[tokio::test]
async fn test_download_resolves_relative_link() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/uploads/plan-1.0.docx")
        .with_status(200)
        .with_body("PK docx content")
        .create_async()
        .await;

    let content = helpers::gateway(&server, None)
        .download("/uploads/plan-1.0.docx")
        .await
        .expect("download");

    mock.assert_async().await;
    assert_eq!(&content[..], b"PK docx content");
}

#[tokio::test]
async fn test_unreachable_backend() {
    let gateway = HttpGateway::new(&GatewayConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_seconds: 2,
        token: None,
    })
    .expect("gateway");

    let err = gateway.list_all_files().await.expect_err("refused");
    assert_eq!(err.kind, ErrorKind::NetworkError);
}

#[tokio::test]
async fn test_token_withheld_from_foreign_host() {
    let backend = Server::new_async().await;
    let mut cdn = Server::new_async().await;
    let without_token = cdn
        .mock("GET", "/x.pdf")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("pdf bytes")
        .create_async()
        .await;

    let content = helpers::gateway(&backend, Some("secret-token"))
        .download(&format!("{}/x.pdf", cdn.url()))
        .await
        .expect("download");

    without_token.assert_async().await;
    assert_eq!(&content[..], b"pdf bytes");
}

#[tokio::test]
async fn test_token_sent_for_backend_download() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/uploads/plan-1.0.docx")
        .match_header("authorization", "Bearer secret-token")
        .with_status(200)
        .with_body("PK")
        .create_async()
        .await;

    helpers::gateway(&server, Some("secret-token"))
        .download(&format!("{}/uploads/plan-1.0.docx", server.url()))
        .await
        .expect("download");
    mock.assert_async().await;
}
