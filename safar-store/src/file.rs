use async_trait::async_trait;
use safar_core::storage::KeyValueStore;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// File-backed store keeping one JSON document per key under a root
/// directory. Plays the role browser local storage plays for the web
/// client: origin-scoped, unversioned, survives restarts.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Open the store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(
        &self,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let path = self.path_for(key);
        tokio::fs::write(&path, value).await?;
        debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
