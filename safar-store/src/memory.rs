use async_trait::async_trait;
use safar_core::storage::KeyValueStore;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory store for tests and one-shot tooling.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key directly, e.g. to simulate pre-existing or corrupt
    /// state left behind by an earlier session.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(
        &self,
        key: &str,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set(
        &self,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.get("bookings").await.unwrap(), None);
        store.set("bookings", "[]").await.unwrap();
        assert_eq!(store.get("bookings").await.unwrap().as_deref(), Some("[]"));
    }
}
