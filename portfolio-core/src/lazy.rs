use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Registrations that fire at most once and then unregister themselves.
#[derive(Debug)]
pub struct OneShotRegistry<K, V> {
    pending: HashMap<K, V>,
}

impl<K, V> Default for OneShotRegistry<K, V> {
    fn default() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> OneShotRegistry<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `payload` under `key`. Returns false if the key was already pending,
    /// in which case the old payload is replaced.
    pub fn subscribe(&mut self, key: K, payload: V) -> bool {
        self.pending.insert(key, payload).is_none()
    }

    /// Take the payload for `key`. Later calls for the same key return `None`.
    pub fn fire(&mut self, key: &K) -> Option<V> {
        self.pending.remove(key)
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Fire every pending registration at once.
    pub fn drain(&mut self) -> Vec<(K, V)> {
        self.pending.drain().collect()
    }
}

/// Identifies one rendered image within one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LazyKey {
    pub generation: u64,
    pub index: usize,
}

impl fmt::Display for LazyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.generation, self.index)
    }
}

impl FromStr for LazyKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (generation, index) = s.split_once(':').ok_or(())?;
        Ok(Self {
            generation: generation.parse().map_err(|_| ())?,
            index: index.parse().map_err(|_| ())?,
        })
    }
}

/// Deferred image locators for the most recent render pass.
///
/// Starting a pass drops every registration from the previous one, so an image
/// that reappears after a re-render is fetched again for its new element.
#[derive(Debug, Default)]
pub struct LazyImageTracker {
    generation: u64,
    registry: OneShotRegistry<LazyKey, String>,
}

impl LazyImageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the locators of a freshly rendered pass, returning one key per item.
    pub fn begin_pass<I>(&mut self, locators: I) -> Vec<LazyKey>
    where
        I: IntoIterator<Item = String>,
    {
        self.registry.clear();
        self.generation += 1;
        let generation = self.generation;
        locators
            .into_iter()
            .enumerate()
            .map(|(index, locator)| {
                let key = LazyKey { generation, index };
                self.registry.subscribe(key, locator);
                key
            })
            .collect()
    }

    /// Locator to fetch for `key`, exactly once.
    pub fn resolve(&mut self, key: LazyKey) -> Option<String> {
        self.registry.fire(&key)
    }

    /// Same as [`resolve`](Self::resolve) for a key read back from markup.
    pub fn resolve_attr(&mut self, raw: &str) -> Option<String> {
        raw.parse::<LazyKey>().ok().and_then(|key| self.resolve(key))
    }

    /// Resolve the intersecting entries of one observer batch.
    pub fn resolve_batch<I>(&mut self, entries: I) -> Vec<(LazyKey, String)>
    where
        I: IntoIterator<Item = (LazyKey, bool)>,
    {
        entries
            .into_iter()
            .filter(|(_, intersecting)| *intersecting)
            .filter_map(|(key, _)| self.resolve(key).map(|locator| (key, locator)))
            .collect()
    }

    /// Resolve everything pending, used when the browser has no intersection observer.
    pub fn resolve_all(&mut self) -> Vec<(LazyKey, String)> {
        let mut resolved = self.registry.drain();
        resolved.sort_by_key(|(key, _)| key.index);
        resolved
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending_count(&self) -> usize {
        self.registry.pending_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locators(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("img/{i}.webp")).collect()
    }

    #[test]
    fn registry_fires_once() {
        let mut registry = OneShotRegistry::new();
        assert!(registry.subscribe("hero", 1));
        assert_eq!(registry.fire(&"hero"), Some(1));
        assert_eq!(registry.fire(&"hero"), None);
        assert!(!registry.is_pending(&"hero"));
    }

    #[test]
    fn repeated_intersections_resolve_once() {
        let mut tracker = LazyImageTracker::new();
        let keys = tracker.begin_pass(locators(3));

        let first = tracker.resolve_batch([(keys[0], true), (keys[1], false)]);
        assert_eq!(first, vec![(keys[0], "img/0.webp".to_string())]);

        // leaves and re-enters the margin
        let second = tracker.resolve_batch([(keys[0], false), (keys[0], true), (keys[1], true)]);
        assert_eq!(second, vec![(keys[1], "img/1.webp".to_string())]);
        assert_eq!(tracker.pending_count(), 1);
    }

    #[test]
    fn new_pass_discards_previous_registrations() {
        let mut tracker = LazyImageTracker::new();
        let old = tracker.begin_pass(locators(2));
        let fresh = tracker.begin_pass(locators(2));

        assert_ne!(old[0], fresh[0]);
        assert_eq!(tracker.resolve(old[0]), None);
        assert_eq!(tracker.resolve(fresh[0]).as_deref(), Some("img/0.webp"));
        assert_eq!(tracker.generation(), 2);
    }

    #[test]
    fn keys_round_trip_through_markup() {
        let mut tracker = LazyImageTracker::new();
        let keys = tracker.begin_pass(locators(1));
        let attr = keys[0].to_string();
        assert_eq!(attr, "1:0");
        assert_eq!(tracker.resolve_attr(&attr).as_deref(), Some("img/0.webp"));
        assert_eq!(tracker.resolve_attr(&attr), None);
        assert_eq!(tracker.resolve_attr("garbage"), None);
    }

    #[test]
    fn resolve_all_returns_items_in_render_order() {
        let mut tracker = LazyImageTracker::new();
        tracker.begin_pass(locators(4));
        let all = tracker.resolve_all();
        let indices: Vec<usize> = all.iter().map(|(key, _)| key.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(tracker.pending_count(), 0);
    }
}
