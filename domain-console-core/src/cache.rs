//! 查询缓存与标签失效
//!
//! Every cached query records the tags it provides. A mutation hands its
//! invalidated tags to [`QueryCache::invalidate`], which marks the matching
//! entries stale and returns their keys so the caller can re-issue them.
//! Once those queries are settled the caller [`QueryCache::publish`]es the
//! invalidation, and subscribers whose tags were hit read the fresh entries.

use std::collections::HashMap;

use domain_console_api::{CacheTag, Domain};
use tokio::sync::{RwLock, broadcast};

/// Capacity of the invalidation broadcast channel.
const EVENT_CAPACITY: usize = 64;

/// Identity of a cached query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The full collection.
    List,
    /// One record by id.
    One(String),
}

impl QueryKey {
    /// Tags this query's result provides.
    pub fn provides(&self) -> CacheTag {
        match self {
            Self::List => CacheTag::Collection,
            Self::One(id) => CacheTag::item(id.clone()),
        }
    }
}

#[derive(Debug, Clone)]
enum CachedValue {
    List(Vec<Domain>),
    One(Domain),
}

#[derive(Debug, Clone)]
struct Entry {
    value: CachedValue,
    stale: bool,
}

/// Broadcast payload: what was invalidated and which cached queries it hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invalidation {
    pub tags: Vec<CacheTag>,
    pub keys: Vec<QueryKey>,
}

/// Tag-aware query cache.
pub struct QueryCache {
    entries: RwLock<HashMap<QueryKey, Entry>>,
    events: broadcast::Sender<Invalidation>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            entries: RwLock::new(HashMap::new()),
            events,
        }
    }

    /// Fresh list entry, if any.
    pub async fn list(&self) -> Option<Vec<Domain>> {
        match self.entries.read().await.get(&QueryKey::List) {
            Some(Entry {
                value: CachedValue::List(domains),
                stale: false,
            }) => Some(domains.clone()),
            _ => None,
        }
    }

    /// Fresh item entry, if any.
    pub async fn one(&self, id: &str) -> Option<Domain> {
        match self.entries.read().await.get(&QueryKey::One(id.to_string())) {
            Some(Entry {
                value: CachedValue::One(domain),
                stale: false,
            }) => Some(domain.clone()),
            _ => None,
        }
    }

    pub async fn store_list(&self, domains: Vec<Domain>) {
        self.entries.write().await.insert(
            QueryKey::List,
            Entry {
                value: CachedValue::List(domains),
                stale: false,
            },
        );
    }

    pub async fn store_one(&self, domain: Domain) {
        self.entries.write().await.insert(
            QueryKey::One(domain.id.clone()),
            Entry {
                value: CachedValue::One(domain),
                stale: false,
            },
        );
    }

    /// Drop an item entry, e.g. after the backend reported it gone.
    pub async fn evict(&self, key: &QueryKey) {
        self.entries.write().await.remove(key);
    }

    #[cfg(test)]
    async fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries
            .read()
            .await
            .get(key)
            .is_some_and(|entry| entry.stale)
    }

    /// Mark every entry hit by `tags` stale and return the keys to refetch.
    ///
    /// Keys come back in a stable order: the list first, then items by id.
    pub async fn invalidate(&self, tags: &[CacheTag]) -> Vec<QueryKey> {
        let mut hit = Vec::new();
        {
            let mut entries = self.entries.write().await;
            for (key, entry) in entries.iter_mut() {
                let provided = key.provides();
                if tags.iter().any(|tag| tag.invalidates(&provided)) {
                    entry.stale = true;
                    hit.push(key.clone());
                }
            }
        }
        hit.sort_by(|a, b| match (a, b) {
            (QueryKey::List, QueryKey::List) => std::cmp::Ordering::Equal,
            (QueryKey::List, _) => std::cmp::Ordering::Less,
            (_, QueryKey::List) => std::cmp::Ordering::Greater,
            (QueryKey::One(x), QueryKey::One(y)) => x.cmp(y),
        });

        log::debug!(
            "Invalidated {} ({} cached queries hit)",
            tags.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            hit.len()
        );
        hit
    }

    /// Notify subscribers of a settled invalidation.
    ///
    /// Returns how many subscribers were listening.
    pub fn publish(&self, invalidation: Invalidation) -> usize {
        // 没有订阅者时 send 会返回错误
        self.events.send(invalidation).unwrap_or(0)
    }

    /// Subscribe to invalidations touching any of `tags`.
    pub fn subscribe(&self, tags: Vec<CacheTag>) -> Subscription {
        Subscription {
            tags,
            rx: self.events.subscribe(),
        }
    }
}

/// Filtered view over the invalidation stream.
pub struct Subscription {
    tags: Vec<CacheTag>,
    rx: broadcast::Receiver<Invalidation>,
}

impl Subscription {
    /// Wait for the next invalidation that hits one of the subscribed tags.
    ///
    /// Returns `None` once the cache is dropped. A lagging receiver skips the
    /// missed events and keeps listening.
    pub async fn next(&mut self) -> Option<Invalidation> {
        loop {
            match self.rx.recv().await {
                Ok(event) if self.matches(&event) => return Some(event),
                Ok(_) => {}
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    log::warn!("Invalidation subscriber lagged, skipped {skipped} events");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    fn matches(&self, event: &Invalidation) -> bool {
        event
            .tags
            .iter()
            .any(|fired| self.tags.iter().any(|mine| fired.invalidates(mine)))
    }
}
