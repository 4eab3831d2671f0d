//! A small generic utility for combining two maps.

use std::collections::BTreeMap;

/// Merges two maps into a new one. Keys found in only one of the maps are kept as they are; for keys
/// found in both, the value comes from `base` if `prefer_base` is true and from `other` otherwise.
/// # Example
/// ```
/// # use colorwheel::merge::merge;
/// use maplit::btreemap;
/// let base = btreemap!{"a" => 1, "b" => 2};
/// let other = btreemap!{"b" => 20, "c" => 30};
/// assert_eq!(merge(&base, &other, true), btreemap!{"a" => 1, "b" => 2, "c" => 30});
/// assert_eq!(merge(&base, &other, false), btreemap!{"a" => 1, "b" => 20, "c" => 30});
/// ```
pub fn merge<K, V>(base: &BTreeMap<K, V>, other: &BTreeMap<K, V>, prefer_base: bool) -> BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    let (winner, loser) = if prefer_base { (base, other) } else { (other, base) };
    let mut merged = winner.clone();
    for (key, value) in loser {
        merged.entry(key.clone()).or_insert_with(|| value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreemap;

    #[test]
    fn test_disjoint_keys_kept() {
        let base = btreemap! {"x".to_string() => 1.0};
        let other = btreemap! {"y".to_string() => 2.0};
        for &prefer_base in &[true, false] {
            let merged = merge(&base, &other, prefer_base);
            assert_eq!(merged.len(), 2);
            assert_eq!(merged["x"], 1.0);
            assert_eq!(merged["y"], 2.0);
        }
    }

    #[test]
    fn test_priority_on_overlap() {
        let base = btreemap! {1 => "base", 2 => "only base"};
        let other = btreemap! {1 => "other", 3 => "only other"};
        assert_eq!(merge(&base, &other, true)[&1], "base");
        assert_eq!(merge(&base, &other, false)[&1], "other");
        assert_eq!(merge(&base, &other, false)[&2], "only base");
    }

    #[test]
    fn test_empty_maps() {
        let empty: BTreeMap<u8, u8> = BTreeMap::new();
        let some = btreemap! {1 => 1};
        assert_eq!(merge(&empty, &empty, true), empty);
        assert_eq!(merge(&empty, &some, true), some);
        assert_eq!(merge(&some, &empty, false), some);
    }
}
