use super::ForestStore;
use crate::error::Result;
use crate::model::Forest;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    forest: Option<Forest>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_forest(forest: Forest) -> Self {
        Self {
            forest: Some(forest),
            saves: 0,
        }
    }

    /// How many times the document was replaced.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ForestStore for InMemoryStore {
    fn load(&self) -> Result<Forest> {
        Ok(self.forest.clone().unwrap_or_default())
    }

    fn save(&mut self, forest: &Forest) -> Result<()> {
        self.forest = Some(forest.clone());
        self.saves += 1;
        Ok(())
    }

    fn exists(&self) -> bool {
        self.forest.is_some()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Block;
    use crate::sample::sample_forest;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_sample(mut self, size: usize) -> Self {
            self.store = InMemoryStore::with_forest(sample_forest(size));
            self
        }

        /// Root blocks with the given ids, no children.
        pub fn with_roots(mut self, ids: &[&str]) -> Self {
            let blocks = ids
                .iter()
                .map(|id| Block::new(*id, format!("Block {id}"), "Block type"))
                .collect::<Vec<_>>();
            self.store = InMemoryStore::with_forest(Forest::new(blocks));
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    #[test]
    fn test_empty_store_loads_empty_forest() {
        let store = InMemoryStore::new();
        assert!(!store.exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_replaces_document() {
        let mut store = InMemoryStore::new();
        store
            .save(&Forest::new(vec![Block::new("0", "A", "t")]))
            .unwrap();
        store
            .save(&Forest::new(vec![Block::new("1", "B", "t")]))
            .unwrap();
        let forest = store.load().unwrap();
        assert_eq!(forest.len(), 1);
        assert_eq!(forest.blocks()[0].id, "1");
        assert_eq!(store.save_count(), 2);
    }

    #[test]
    fn test_preloaded_store_counts_no_saves() {
        let store = InMemoryStore::with_forest(Forest::new(vec![Block::new("0", "A", "t")]));
        assert!(store.exists());
        assert_eq!(store.load().unwrap().len(), 1);
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.location(), None);
    }
}
