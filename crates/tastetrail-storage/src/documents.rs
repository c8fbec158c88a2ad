use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects::ObjectStore;

const JSON: &str = "application/json";

/// Load a JSON document.
pub async fn load_json<T: DeserializeOwned>(store: &ObjectStore, key: &str) -> Result<T, StorageError> {
    let body = store.get_object(key).await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Load a JSON document, mapping a missing key to `None`.
pub async fn try_load_json<T: DeserializeOwned>(
    store: &ObjectStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match load_json(store, key).await {
        Ok(value) => Ok(Some(value)),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Save a JSON document, pretty-printed.
pub async fn save_json<T: Serialize>(
    store: &ObjectStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    store.put_object(key, body, Some(JSON)).await
}

/// Load every JSON document under a prefix, in key order.
///
/// Documents that fail to parse are skipped with a warning so that one bad
/// record does not take a whole listing down.
pub async fn list_json<T: DeserializeOwned>(
    store: &ObjectStore,
    prefix: &str,
) -> Result<Vec<T>, StorageError> {
    let keys = store.list_objects(prefix).await?;

    let mut values = Vec::with_capacity(keys.len());
    for key in &keys {
        let body = match store.get_object(key).await {
            Ok(body) => body,
            // Deleted between list and get.
            Err(StorageError::NotFound { .. }) => continue,
            Err(e) => return Err(e),
        };
        match serde_json::from_slice(&body) {
            Ok(value) => values.push(value),
            Err(e) => tracing::warn!(key = %key, error = %e, "skipping unreadable document"),
        }
    }

    Ok(values)
}
