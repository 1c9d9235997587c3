//! Routing abstraction layer.
//!
//! Lookup in Verso happens in two steps, version then method key. Both steps
//! go through [`Router`], so the storage behind a routing table can change
//! without touching the call path.

/// Result of a routing lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResult<'a, V> {
    /// Route matched, contains the value.
    Matched(&'a V),
    /// No matching route found.
    NotFound,
}

impl<'a, V> RouteResult<'a, V> {
    /// Returns true if the route was matched.
    pub fn is_matched(&self) -> bool {
        matches!(self, RouteResult::Matched(_))
    }

    /// Returns the matched value, if any.
    pub fn matched(self) -> Option<&'a V> {
        match self {
            RouteResult::Matched(v) => Some(v),
            RouteResult::NotFound => None,
        }
    }
}

impl<'a, V> From<Option<&'a V>> for RouteResult<'a, V> {
    fn from(value: Option<&'a V>) -> Self {
        match value {
            Some(v) => RouteResult::Matched(v),
            None => RouteResult::NotFound,
        }
    }
}

/// A router that maps keys to values.
pub trait Router<K: ?Sized, V>: Send + Sync {
    /// Look up a value by key.
    fn route(&self, key: &K) -> RouteResult<'_, V>;

    /// Check if a key exists in the router.
    fn contains(&self, key: &K) -> bool {
        self.route(key).is_matched()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct MapRouter(BTreeMap<String, i32>);

    impl Router<str, i32> for MapRouter {
        fn route(&self, key: &str) -> RouteResult<'_, i32> {
            self.0.get(key).into()
        }
    }

    #[test]
    fn test_route_result_helpers() {
        let val = 42;
        let matched = RouteResult::Matched(&val);
        let not_found: RouteResult<i32> = RouteResult::NotFound;

        assert!(matched.is_matched());
        assert!(!not_found.is_matched());

        assert_eq!(matched.matched(), Some(&42));
        assert_eq!(not_found.matched(), None);
    }

    #[test]
    fn test_contains_uses_route() {
        let router = MapRouter(BTreeMap::from([("home".to_string(), 1)]));
        assert!(router.contains("home"));
        assert!(!router.contains("about"));
    }
}
