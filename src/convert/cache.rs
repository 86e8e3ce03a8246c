use super::style::Style;
use dashmap::DashMap;

/// Concurrent memo of key conversions, shared across threads.
///
/// Holds at most `max_entries` conversions. Once full, the whole map is
/// dropped before the next insert, so memory stays bounded no matter how many
/// distinct keys pass through.
#[derive(Debug)]
pub struct KeyCache {
    entries: DashMap<(String, Style), String>,
    max_entries: usize,
}

impl KeyCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries,
        }
    }

    /// Return the converted key, computing and storing it on a miss.
    pub fn get_or_convert(&self, key: &str, style: Style) -> String {
        let lookup = (key.to_string(), style);
        if let Some(hit) = self.entries.get(&lookup) {
            return hit.clone();
        }

        tracing::trace!(key, %style, "key cache miss");
        let converted = style.convert(key);
        if self.max_entries == 0 {
            return converted;
        }
        if self.entries.len() >= self.max_entries {
            tracing::debug!(limit = self.max_entries, "key cache full; clearing");
            self.entries.clear();
        }
        self.entries.insert(lookup, converted.clone());
        converted
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_hit_and_miss() {
        let cache = KeyCache::new(16);
        assert!(cache.is_empty());

        assert_eq!(cache.get_or_convert("first_name", Style::Camel), "firstName");
        assert_eq!(cache.get_or_convert("first_name", Style::Camel), "firstName");
        assert_eq!(cache.len(), 1);

        assert_eq!(cache.get_or_convert("first_name", Style::Kebab), "first-name");
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_stays_within_limit() {
        let cache = KeyCache::new(8);
        for i in 0..1_000 {
            let key = format!("id_{i}");
            assert_eq!(cache.get_or_convert(&key, Style::Camel), format!("id{i}"));
            assert!(cache.len() <= 8, "{} entries after {key}", cache.len());
        }
        assert!(!cache.is_empty());
    }

    #[test]
    fn test_zero_limit_disables_storage() {
        let cache = KeyCache::new(0);
        assert_eq!(cache.get_or_convert("user_id", Style::Pascal), "UserId");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_shared_across_threads() {
        let cache = std::sync::Arc::new(KeyCache::new(16));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = cache.clone();
                std::thread::spawn(move || cache.get_or_convert("recordId", Style::Snake))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "record_id");
        }
        assert_eq!(cache.len(), 1);
    }
}
