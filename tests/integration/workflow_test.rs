//! End-to-end document workflows through the service stack.

use bytes::Bytes;
use mockito::{Matcher, Server};
use serde_json::json;

use docvault_core::error::ErrorKind;
use docvault_service::file::SearchOutcome;
use docvault_service::{AuthoredRevision, CreateDocument, RevisionUpload, notice_for};

use crate::helpers;

#[tokio::test]
async fn test_revision_lifecycle() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/docs/all")
        .with_status(200)
        .with_body(helpers::list_json(vec![
            helpers::group_json("plan.docx", &["v1.9", "v1.8"]),
        ]))
        .create_async()
        .await;
    let upload = server
        .mock("POST", "/api/docs/upload")
        .match_body(Matcher::Regex(r#"name="version"\s+2\.0"#.to_string()))
        .with_status(200)
        .with_body(helpers::version_json("plan.docx", "2.0", "2024-03-05T08:00:00Z").to_string())
        .create_async()
        .await;
    let download = server
        .mock("GET", "/uploads/plan-2.0.docx")
        .with_status(200)
        .with_body("new content")
        .create_async()
        .await;

    let registry = helpers::registry(&server);
    assert_eq!(registry.catalog.rehydrate().await.expect("rehydrate"), 1);

    let version = registry
        .upload
        .upload_revision(
            "plan.docx",
            RevisionUpload {
                source_name: "plan-final.docx".to_string(),
                content: Bytes::from_static(b"PK new"),
                author: "Jane Smith".to_string(),
                keywords: "timeline".to_string(),
                remark: "Major revision".to_string(),
            },
        )
        .await
        .expect("upload");
    upload.assert_async().await;
    assert_eq!(version.version, "2.0");

    let history = registry.catalog.history("plan.docx").await.expect("history");
    let chain: Vec<&str> = history.versions.iter().map(|v| v.version.as_str()).collect();
    assert_eq!(chain, vec!["2.0", "v1.9", "v1.8"]);

    let (current, content) = registry
        .download
        .download("plan.docx", None)
        .await
        .expect("download");
    download.assert_async().await;
    assert_eq!(current.version, "2.0");
    assert_eq!(&content[..], b"new content");

    let viewer = registry
        .viewer
        .descriptor("plan.docx", Some("1.8"))
        .await
        .expect("viewer");
    assert_eq!(viewer.url, "/uploads/plan-v1.8.docx");
    assert_eq!(viewer.document_type.as_str(), "word");
}

#[tokio::test]
async fn test_create_then_author() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/docs/all")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let first = server
        .mock("POST", "/api/docs/upload")
        .match_body(Matcher::Regex(r#"name="version"\s+1\.0\s"#.to_string()))
        .with_status(200)
        .with_body(helpers::version_json("brief.docx", "1.0", "2024-04-01T08:00:00Z").to_string())
        .create_async()
        .await;
    let second = server
        .mock("POST", "/api/docs/upload")
        .match_body(Matcher::Regex(r#"name="version"\s+1\.1\s"#.to_string()))
        .with_status(200)
        .with_body(helpers::version_json("brief.docx", "1.1", "2024-04-02T08:00:00Z").to_string())
        .create_async()
        .await;

    let registry = helpers::registry(&server);
    registry.catalog.rehydrate().await.expect("rehydrate");

    let created = registry
        .upload
        .create_document(CreateDocument {
            file_name: "brief.docx".to_string(),
            content: Bytes::from_static(b"PK brief"),
            author: "Sarah Connor".to_string(),
            keywords: String::new(),
            remark: String::new(),
        })
        .await
        .expect("create");
    first.assert_async().await;
    assert_eq!(created.version, "1.0");

    let authored = registry
        .authoring
        .author_revision(
            "brief.docx",
            AuthoredRevision {
                text: "Scope\nTimeline".to_string(),
                author: "Sarah Connor".to_string(),
                keywords: String::new(),
                remark: "Edited in app".to_string(),
            },
        )
        .await
        .expect("author");
    second.assert_async().await;
    assert_eq!(authored.version, "1.1");

    let listed = registry.catalog.list_documents().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].len(), 2);
}

#[tokio::test]
async fn test_rejected_upload_leaves_catalog() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/docs/all")
        .with_status(200)
        .with_body(helpers::list_json(vec![
            helpers::group_json("budget.xlsx", &["1.0"]),
        ]))
        .create_async()
        .await;
    server
        .mock("POST", "/api/docs/upload")
        .with_status(413)
        .with_body(r#"{"message": "File too large"}"#)
        .create_async()
        .await;

    let registry = helpers::registry(&server);
    registry.catalog.rehydrate().await.expect("rehydrate");

    let err = registry
        .upload
        .upload_revision(
            "budget.xlsx",
            RevisionUpload {
                source_name: "budget.xlsx".to_string(),
                content: Bytes::from_static(b"big"),
                author: "Alice".to_string(),
                keywords: String::new(),
                remark: String::new(),
            },
        )
        .await
        .expect_err("rejected");

    let notice = notice_for(&err);
    assert_eq!(notice.title, "Upload Failed");
    assert_eq!(notice.description, "File too large");

    let group = registry.catalog.history("budget.xlsx").await.expect("history");
    assert_eq!(group.len(), 1);
}

#[tokio::test]
async fn test_invalid_version_blocks_upload() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/docs/all")
        .with_status(200)
        .with_body(helpers::list_json(vec![
            helpers::group_json("design.docx", &["draft"]),
        ]))
        .create_async()
        .await;
    let upload = server
        .mock("POST", "/api/docs/upload")
        .expect(0)
        .create_async()
        .await;

    let registry = helpers::registry(&server);
    registry.catalog.rehydrate().await.expect("rehydrate");

    let err = registry
        .upload
        .upload_revision(
            "design.docx",
            RevisionUpload {
                source_name: "design.docx".to_string(),
                content: Bytes::from_static(b"PK"),
                author: "Alice".to_string(),
                keywords: String::new(),
                remark: String::new(),
            },
        )
        .await
        .expect_err("invalid");

    upload.assert_async().await;
    assert_eq!(err.kind, ErrorKind::InvalidVersionFormat);
    assert_eq!(notice_for(&err).title, "Invalid Version Format");
}

#[tokio::test]
async fn test_search_results() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/docs/search")
        .match_query(Matcher::UrlEncoded("q".to_string(), "budget".to_string()))
        .with_status(200)
        .with_body(
            json!([
                {
                    "indexedAt": "2024-03-01T09:00:00Z",
                    "fileData": helpers::version_json("budget.xlsx", "2.0", ""),
                    "content": "b".repeat(300)
                },
                {
                    "indexedAt": "2024-03-01T09:05:00Z",
                    "fileData": helpers::version_json("plan.docx", "1.1", ""),
                    "content": "budget overview"
                }
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let registry = helpers::registry(&server);
    let outcome = registry.search.search("budget").await.expect("search");

    let results = outcome.results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].file_type, "XLSX");
    assert_eq!(results[0].snippet.chars().count(), 203);
    assert_eq!(results[1].file_name, "plan.docx");
    assert_eq!(results[1].snippet, "budget overview");

    assert_eq!(
        registry.search.search("  ").await.expect("blank"),
        SearchOutcome::Cleared
    );
}

#[tokio::test]
async fn test_offline_backend() {
    let mut config = docvault_core::config::AppConfig::default();
    config.gateway.base_url = "http://127.0.0.1:1".to_string();
    config.gateway.timeout_seconds = 2;
    let registry = docvault_service::ServiceRegistry::from_config(config).expect("registry");

    let err = registry.catalog.rehydrate().await.expect_err("offline");
    assert_eq!(notice_for(&err).title, "Network Error");
    assert!(registry.catalog.list_documents().await.is_empty());
}
