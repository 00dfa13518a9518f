use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Simple thread-safe in-memory memoization map keyed by directory.
pub struct ResolutionMemo<V> {
    inner: RwLock<HashMap<PathBuf, Arc<V>>>,
}

impl<V> Default for ResolutionMemo<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ResolutionMemo<V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, key: PathBuf, value: Arc<V>) {
        let mut map = self.inner.write();
        map.insert(key, value);
    }

    pub fn get(&self, key: &Path) -> Option<Arc<V>> {
        let map = self.inner.read();
        map.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
