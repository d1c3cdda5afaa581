use std::{marker::PhantomData, path::PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::PrettyFormatter;
use tokio::{fs, sync::RwLock};
use tracing::{debug, warn};

use crate::errors::ServiceError;

/// Outcome of a mutation closure passed to [`JsonListStore::update_list`].
pub enum Change<R> {
    /// The list was modified; write it back and return the value.
    Persist(R),
    /// Nothing changed; skip the write.
    Discard(R),
}

/// Generic JSON file-backed ordered list store.
///
/// The file holds a JSON array and is the only copy of the data: every call
/// reloads it from disk. Writers are serialized behind a lock so a
/// load-mutate-persist cycle is never interleaved with another one.
pub struct JsonListStore<T> {
    file_path: PathBuf,
    lock: RwLock<()>,
    _item: PhantomData<fn() -> T>,
}

impl<T> JsonListStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Initialize the store from a path. Creates the directory and an empty list if missing.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let store = Self { file_path: path.into(), lock: RwLock::new(()), _item: PhantomData };
        store.ensure_file().await?;
        Ok(store)
    }

    pub fn path(&self) -> &std::path::Path {
        &self.file_path
    }

    async fn ensure_file(&self) -> Result<(), ServiceError> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| ServiceError::storage("create data directory", e))?;
            }
        }
        if fs::try_exists(&self.file_path)
            .await
            .map_err(|e| ServiceError::storage("stat data file", e))?
        {
            return Ok(());
        }
        debug!(path = %self.file_path.display(), "creating empty data file");
        self.save(&[]).await
    }

    async fn load(&self) -> Result<Vec<T>, ServiceError> {
        let bytes = match fs::read(&self.file_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %self.file_path.display(), "data file disappeared; recreating empty list");
                self.ensure_file().await?;
                return Ok(Vec::new());
            }
            Err(e) => return Err(ServiceError::storage("read data file", e)),
        };
        serde_json::from_slice(&bytes).map_err(|e| ServiceError::storage("parse data file", e))
    }

    /// Write the full list to a sibling temp file, then rename it over the target.
    async fn save(&self, items: &[T]) -> Result<(), ServiceError> {
        let mut data = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut data, PrettyFormatter::with_indent(b"    "));
        items.serialize(&mut ser).map_err(|e| ServiceError::storage("serialize data", e))?;

        let mut tmp_name = self.file_path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        tmp_name.push(".tmp");
        let tmp_path = self.file_path.with_file_name(tmp_name);

        fs::write(&tmp_path, data).await.map_err(|e| ServiceError::storage("write data file", e))?;
        fs::rename(&tmp_path, &self.file_path)
            .await
            .map_err(|e| ServiceError::storage("replace data file", e))?;
        Ok(())
    }

    /// Load the full list in persisted order.
    pub async fn list(&self) -> Result<Vec<T>, ServiceError> {
        let _guard = self.lock.read().await;
        self.load().await
    }

    /// Load, apply `f`, and persist if it reports a change, all under the write lock.
    pub async fn update_list<F, R>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut Vec<T>) -> Change<R>,
    {
        let _guard = self.lock.write().await;
        let mut items = self.load().await?;
        match f(&mut items) {
            Change::Persist(out) => {
                self.save(&items).await?;
                Ok(out)
            }
            Change::Discard(out) => Ok(out),
        }
    }
}
