//! Column-to-member resolution.
//!
//! A [`MemberMap`] is built once per record type from its accessor table
//! and cached process-wide. Binding it to a source's column list yields a
//! [`Binding`] that maps each column position to a member, or to nothing
//! when the column has no member of that name.
//!
//! # Thread Safety
//!
//! Member maps are immutable and shared through [`Arc`]. The cache is a
//! [`RwLock`] behind a [`OnceLock`], so concurrent mapping calls for the
//! same or different record types are safe.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use rowmap_model::CaseInsensitiveMap;

use crate::record::{Member, Record};

type CachedMap = Arc<dyn Any + Send + Sync>;

/// Cached member maps, keyed by record type.
static MEMBER_MAPS: OnceLock<RwLock<HashMap<TypeId, CachedMap>>> = OnceLock::new();

/// The members of record `T`, indexed by case-insensitive name.
#[derive(Debug)]
pub struct MemberMap<T> {
    record: &'static str,
    members: Vec<Member<T>>,
    lookup: CaseInsensitiveMap<usize>,
}

impl<T: Record> MemberMap<T> {
    /// Builds a fresh map without touching the cache.
    ///
    /// When two members share a name ignoring case, the first one declared
    /// wins and the later one is unreachable.
    pub fn build() -> Self {
        let members = T::members();
        let mut lookup = CaseInsensitiveMap::new();
        for (idx, member) in members.iter().enumerate() {
            if !lookup.insert(member.name(), idx) {
                tracing::warn!(
                    record = T::record_name(),
                    member = member.name(),
                    "Member name collides with an earlier member; it will never be matched"
                );
            }
        }
        tracing::debug!(
            record = T::record_name(),
            members = members.len(),
            "Built member map"
        );
        Self {
            record: T::record_name(),
            members,
            lookup,
        }
    }

    /// Returns the cached map for `T`, building it on first use.
    pub fn resolve() -> Arc<Self> {
        let cache = MEMBER_MAPS.get_or_init(Default::default);
        let id = TypeId::of::<T>();

        let cached = cache
            .read()
            .ok()
            .and_then(|maps| maps.get(&id).cloned())
            .and_then(|found| found.downcast::<Self>().ok());
        if let Some(map) = cached {
            return map;
        }

        let map = Arc::new(Self::build());
        if let Ok(mut maps) = cache.write() {
            let shared: CachedMap = map.clone();
            maps.entry(id).or_insert(shared);
        }
        map
    }
}

impl<T> MemberMap<T> {
    pub fn record_name(&self) -> &'static str {
        self.record
    }

    pub fn members(&self) -> &[Member<T>] {
        &self.members
    }

    pub fn member(&self, index: usize) -> Option<&Member<T>> {
        self.members.get(index)
    }

    /// Finds the member for a column name, ignoring ASCII case.
    pub fn find(&self, column: &str) -> Option<&Member<T>> {
        self.lookup.get(column).map(|&idx| &self.members[idx])
    }

    /// Matches a source's columns against the members.
    pub fn bind(&self, columns: &[String]) -> Binding {
        let slots: Vec<Option<usize>> = columns
            .iter()
            .map(|column| self.lookup.get(column).copied())
            .collect();
        let binding = Binding { slots };
        let unmatched = binding.unmatched().count();
        if unmatched > 0 {
            tracing::debug!(
                record = self.record,
                columns = columns.len(),
                unmatched,
                "Columns without a matching member are skipped"
            );
        }
        binding
    }
}

/// Column position to member index, for one column list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    slots: Vec<Option<usize>>,
}

impl Binding {
    /// Number of columns the binding was built for.
    pub fn width(&self) -> usize {
        self.slots.len()
    }

    /// Member index bound to the column at `position`.
    pub fn member_index(&self, position: usize) -> Option<usize> {
        self.slots.get(position).copied().flatten()
    }

    pub fn matched(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Positions of columns with no member.
    pub fn unmatched(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(idx, _)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Contact {
        email: String,
        zip: i32,
        alt_email: String,
    }

    crate::impl_record!(Contact {
        email: String => "Email",
        zip: i32 => "Zip",
        alt_email: String => "EMAIL",
    });

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn find_ignores_case() {
        let map = MemberMap::<Contact>::build();
        assert_eq!(map.find("email").map(Member::name), Some("Email"));
        assert_eq!(map.find("ZIP").map(Member::name), Some("Zip"));
        assert!(map.find("City").is_none());
    }

    #[test]
    fn first_declared_member_wins() {
        let map = MemberMap::<Contact>::build();
        assert_eq!(map.members().len(), 3);
        assert_eq!(map.find("EMAIL").map(Member::name), Some("Email"));
    }

    #[test]
    fn bind_skips_unknown_columns() {
        let map = MemberMap::<Contact>::build();
        let binding = map.bind(&columns(&["City", "zip", "Email"]));
        assert_eq!(binding.width(), 3);
        assert_eq!(binding.member_index(0), None);
        assert_eq!(binding.member_index(1), Some(1));
        assert_eq!(binding.member_index(2), Some(0));
        assert_eq!(binding.matched(), 2);
        assert_eq!(binding.unmatched().collect::<Vec<_>>(), [0]);
    }

    #[test]
    fn resolve_caches_per_type() {
        let first = MemberMap::<Contact>::resolve();
        let second = MemberMap::<Contact>::resolve();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
