/**
 * Page Cache
 *
 * An in-process cache of rendered page bodies, keyed by request path.
 * Read handlers store the body they rendered; write handlers invalidate
 * the paths their mutations affect, so the next read re-renders.
 *
 * # Thread Safety
 *
 * The map lives behind `Arc<RwLock<..>>`: many concurrent reads, exclusive
 * writes. Cloning a `PageCache` clones the handle, not the contents, so
 * every clone sees the same pages.
 */
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Shared cache of rendered page bodies keyed by request path
#[derive(Clone, Default)]
pub struct PageCache {
    pages: Arc<RwLock<HashMap<String, String>>>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached body for a path, if one is present
    pub async fn get(&self, path: &str) -> Option<String> {
        self.pages.read().await.get(path).cloned()
    }

    /// Store a rendered body under a path, replacing any previous one
    pub async fn put(&self, path: &str, body: String) {
        self.pages.write().await.insert(path.to_string(), body);
    }

    /// Drop the cached body for a path so the next read re-renders
    pub async fn invalidate(&self, path: &str) {
        self.pages.write().await.remove(path);
    }
}
