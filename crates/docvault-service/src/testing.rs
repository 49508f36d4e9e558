//! In-process gateway double for service tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use docvault_catalog::MemoryCatalog;
use docvault_core::error::AppError;
use docvault_core::result::AppResult;
use docvault_entity::file::{FileGroup, FileVersion};
use docvault_entity::search::SearchHit;
use docvault_gateway::{Gateway, UploadPayload};

/// Gateway that answers from memory and records uploads.
#[derive(Debug, Default, Clone)]
pub struct FakeGateway {
    pub groups: Arc<Mutex<Vec<FileGroup>>>,
    pub hits: Arc<Mutex<Vec<SearchHit>>>,
    pub uploads: Arc<Mutex<Vec<UploadPayload>>>,
    pub queries: Arc<Mutex<Vec<String>>>,
    pub fail_with: Arc<Mutex<Option<AppError>>>,
}

impl FakeGateway {
    pub fn with_groups(groups: Vec<FileGroup>) -> Self {
        let gateway = Self::default();
        *gateway.groups.lock().expect("lock") = groups;
        gateway
    }

    pub fn fail_next(&self, err: AppError) {
        *self.fail_with.lock().expect("lock") = Some(err);
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.lock().expect("lock").len()
    }

    pub fn last_upload(&self) -> UploadPayload {
        self.uploads
            .lock()
            .expect("lock")
            .last()
            .cloned()
            .expect("an upload was recorded")
    }

    fn take_failure(&self) -> AppResult<()> {
        match self.fail_with.lock().expect("lock").take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn list_all_files(&self) -> AppResult<Vec<FileGroup>> {
        self.take_failure()?;
        Ok(self.groups.lock().expect("lock").clone())
    }

    async fn create_file(&self, payload: UploadPayload) -> AppResult<FileVersion> {
        self.take_failure()?;
        let version = payload.to_version();
        self.uploads.lock().expect("lock").push(payload);
        Ok(version)
    }

    async fn search_content(&self, query: &str) -> AppResult<Vec<SearchHit>> {
        self.take_failure()?;
        self.queries.lock().expect("lock").push(query.to_string());
        Ok(self.hits.lock().expect("lock").clone())
    }

    async fn download(&self, link: &str) -> AppResult<Bytes> {
        self.take_failure()?;
        Ok(Bytes::from(format!("content of {link}")))
    }
}

pub fn version(file_name: &str, v: &str) -> FileVersion {
    FileVersion {
        file_name: file_name.to_string(),
        version: v.to_string(),
        download_link: format!("http://docs.local/uploads/{file_name}"),
        uploaded_on: String::new(),
        author: "John Doe".to_string(),
        keywords: "project".to_string(),
        remark: String::new(),
    }
}

/// A catalog already holding `groups`, plus a gateway serving the same.
pub async fn seeded(groups: Vec<FileGroup>) -> (Arc<MemoryCatalog>, Arc<FakeGateway>) {
    let catalog = Arc::new(MemoryCatalog::new());
    let gateway = Arc::new(FakeGateway::with_groups(groups.clone()));
    docvault_catalog::FileCatalog::replace_all(catalog.as_ref(), groups).await;
    (catalog, gateway)
}
