use std::path::PathBuf;

use aws_sdk_s3::Client;

use crate::error::StorageError;
use crate::{local, s3};

/// Where documents live. Cheap to clone; handlers receive a copy through
/// application state.
#[derive(Clone, Debug)]
pub enum ObjectStore {
    Local { root: PathBuf },
    S3 { client: Client, bucket: String },
}

impl ObjectStore {
    pub fn local(root: impl Into<PathBuf>) -> Self {
        ObjectStore::Local { root: root.into() }
    }

    pub fn s3(client: Client, bucket: impl Into<String>) -> Self {
        ObjectStore::S3 {
            client,
            bucket: bucket.into(),
        }
    }

    /// Short backend label for logs.
    pub fn backend(&self) -> &'static str {
        match self {
            ObjectStore::Local { .. } => "local",
            ObjectStore::S3 { .. } => "s3",
        }
    }

    pub async fn get_object(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        match self {
            ObjectStore::Local { root } => local::get_object(root, key).await,
            ObjectStore::S3 { client, bucket } => s3::get_object(client, bucket, key).await,
        }
    }

    pub async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        match self {
            ObjectStore::Local { root } => local::put_object(root, key, body).await,
            ObjectStore::S3 { client, bucket } => {
                s3::put_object(client, bucket, key, body, content_type).await
            }
        }
    }

    pub async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        match self {
            ObjectStore::Local { root } => local::delete_object(root, key).await,
            ObjectStore::S3 { client, bucket } => s3::delete_object(client, bucket, key).await,
        }
    }

    /// Keys under a prefix, sorted.
    pub async fn list_objects(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        match self {
            ObjectStore::Local { root } => local::list_objects(root, prefix).await,
            ObjectStore::S3 { client, bucket } => {
                let mut keys = s3::list_objects(client, bucket, prefix).await?;
                keys.sort();
                Ok(keys)
            }
        }
    }

    pub async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        match self.get_object(key).await {
            Ok(_) => Ok(true),
            Err(StorageError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
