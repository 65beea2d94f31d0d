// src/store/memory.rs
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::RwLock;

use super::RecordStore;
use crate::model::{BridgeRecord, BridgeState};

/// Process-local store keyed by canonical name.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<HashMap<String, BridgeRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded<I>(records: I) -> Self
    where
        I: IntoIterator<Item = BridgeRecord>,
    {
        let map = records
            .into_iter()
            .map(|r| (r.name.clone(), r))
            .collect::<HashMap<_, _>>();
        Self {
            inner: RwLock::new(map),
        }
    }

    /// All records sorted by name.
    pub fn snapshot(&self) -> Vec<BridgeRecord> {
        let g = self.inner.read().unwrap_or_else(|p| p.into_inner());
        let mut v: Vec<BridgeRecord> = g.values().cloned().collect();
        v.sort_by(|a, b| a.name.cmp(&b.name));
        v
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryStore {
    async fn find(&self, name: &str) -> Result<Option<BridgeRecord>> {
        let g = self
            .inner
            .read()
            .map_err(|_| anyhow!("store lock poisoned"))?;
        Ok(g.get(name).cloned())
    }

    async fn upsert(&self, name: &str, state: BridgeState) -> Result<()> {
        let mut g = self
            .inner
            .write()
            .map_err(|_| anyhow!("store lock poisoned"))?;
        match g.get_mut(name) {
            Some(rec) => {
                rec.state = state;
                Ok(())
            }
            None => Err(anyhow!("no bridge record named '{name}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_changes_existing_only() {
        let store = InMemoryStore::seeded([BridgeRecord::new(
            "Fremont Bridge",
            BridgeState::Up,
            "Seattle, Wa",
        )]);

        store.upsert("Fremont Bridge", BridgeState::Down).await.unwrap();
        let r = store.find("Fremont Bridge").await.unwrap().unwrap();
        assert_eq!(r.state, BridgeState::Down);

        assert!(store.upsert("Nope Bridge", BridgeState::Up).await.is_err());
        assert!(store.find("Nope Bridge").await.unwrap().is_none());
        assert_eq!(store.snapshot().len(), 1);
    }
}
