use std::collections::HashMap;

/// Map keyed by names compared without regard to ASCII case.
///
/// The first insertion of a name wins; later insertions that differ only in
/// case are rejected and leave the original entry untouched.
#[derive(Debug, Clone)]
pub struct CaseInsensitiveMap<V> {
    map: HashMap<String, (String, V)>,
}

impl<V> Default for CaseInsensitiveMap<V> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
        }
    }
}

impl<V> CaseInsensitiveMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `name`, returning false if the name is taken.
    pub fn insert(&mut self, name: &str, value: V) -> bool {
        let key = name.to_ascii_uppercase();
        if self.map.contains_key(&key) {
            return false;
        }
        self.map.insert(key, (name.to_string(), value));
        true
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.map
            .get(&name.to_ascii_uppercase())
            .map(|(_, value)| value)
    }

    /// Returns the name as it was first inserted.
    pub fn original(&self, name: &str) -> Option<&str> {
        self.map
            .get(&name.to_ascii_uppercase())
            .map(|(original, _)| original.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&name.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<S: AsRef<str>, V> FromIterator<(S, V)> for CaseInsensitiveMap<V> {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name.as_ref(), value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let map: CaseInsensitiveMap<usize> = [("CustomerId", 0), ("Zip", 1)].into_iter().collect();
        assert_eq!(map.get("customerid"), Some(&0));
        assert_eq!(map.get("ZIP"), Some(&1));
        assert_eq!(map.original("zIp"), Some("Zip"));
        assert!(!map.contains("City"));
    }

    #[test]
    fn first_insert_wins() {
        let mut map = CaseInsensitiveMap::new();
        assert!(map.insert("Email", 1));
        assert!(!map.insert("EMAIL", 2));
        assert_eq!(map.get("email"), Some(&1));
        assert_eq!(map.original("email"), Some("Email"));
        assert_eq!(map.len(), 1);
    }
}
