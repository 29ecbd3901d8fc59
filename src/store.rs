use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::Item;

/// Shareable in-memory item store for use across async handlers
///
/// Items are kept in arrival order and are never removed or modified. Clones
/// share the same underlying list. Appends take the write lock, so concurrent
/// requests cannot lose each other's updates.
#[derive(Clone, Default)]
pub struct ItemStore {
    inner: Arc<RwLock<Vec<Item>>>,
}

impl ItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every item, in insertion order
    pub async fn list(&self) -> Vec<Item> {
        self.inner.read().await.clone()
    }

    /// Append an item and hand it back unchanged
    pub async fn append(&self, item: Item) -> Item {
        let mut items = self.inner.write().await;
        items.push(item.clone());
        tracing::debug!("Item store now holds {} items", items.len());
        item
    }

    /// Number of items currently held
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: serde_json::Value) -> Item {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_store_is_clonable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<ItemStore>();
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ItemStore>();
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = ItemStore::new();
        assert_eq!(store.len().await, 0);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_append_returns_same_item() {
        let store = ItemStore::new();
        let pen = item(json!({"name": "pen"}));

        let echoed = store.append(pen.clone()).await;

        assert_eq!(echoed, pen);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = ItemStore::new();
        let items: Vec<Item> = (0..10)
            .map(|i| item(json!({"name": format!("item-{}", i), "index": i})))
            .collect();

        for it in &items {
            store.append(it.clone()).await;
        }

        assert_eq!(store.list().await, items);
    }

    #[tokio::test]
    async fn test_duplicate_items_are_kept() {
        let store = ItemStore::new();
        let cup = item(json!({"name": "cup"}));

        store.append(cup.clone()).await;
        store.append(cup.clone()).await;

        assert_eq!(store.list().await, vec![cup.clone(), cup]);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = ItemStore::new();
        let other = store.clone();

        other.append(item(json!({"name": "pen"}))).await;

        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_list_is_a_snapshot() {
        let store = ItemStore::new();
        store.append(item(json!({"name": "pen"}))).await;

        let snapshot = store.list().await;
        store.append(item(json!({"name": "cup"}))).await;

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_are_not_lost() {
        let store = ItemStore::new();

        let tasks: Vec<_> = (0..100)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.append(item(json!({"n": i}))).await;
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        let items = store.list().await;
        assert_eq!(items.len(), 100);

        let mut seen: Vec<i64> = items
            .iter()
            .map(|it| it.0["n"].as_i64().unwrap())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..100).collect::<Vec<i64>>());
    }
}
