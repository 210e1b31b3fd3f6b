use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use tokio::sync::RwLock;

/// Extracted document text and its summary. Immutable once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredContext {
    pub text: String,
    pub summary: String,
}

/// Process-lifetime table of uploaded contexts.
///
/// Entries are never updated or evicted, so the table grows with every
/// successful upload until the process exits.
#[derive(Clone, Default)]
pub struct ContextStore {
    inner: Arc<RwLock<HashMap<String, StoredContext>>>,
}

impl ContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a context under a freshly generated id and return the id
    pub async fn put(&self, context: StoredContext) -> String {
        let mut guard = self.inner.write().await;
        loop {
            match guard.entry(generate_context_id()) {
                Entry::Vacant(slot) => {
                    let id = slot.key().clone();
                    slot.insert(context);
                    return id;
                }
                Entry::Occupied(_) => continue,
            }
        }
    }

    pub async fn get(&self, context_id: &str) -> Option<StoredContext> {
        let guard = self.inner.read().await;
        guard.get(context_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

/// `ctx-<unix millis>-<random 0..10000>`
fn generate_context_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
    format!("ctx-{}-{}", millis, suffix)
}
