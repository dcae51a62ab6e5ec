/// How the open set orders nodes that share the same `distance_total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OpenOrdering {
    /// Scan from the front and insert before the first entry the node beats:
    /// a lower `distance_total`, or the same total with a lower
    /// `distance_to_start`. Otherwise the node goes after every entry with
    /// its total. This is the insertion rule of the classic demo and yields
    /// the same open/closed sets it does.
    #[default]
    LinearScan,
    /// Strict `(distance_total, distance_to_start)` ascending order, first-in
    /// first-out among equal keys. Insertion point found by binary search.
    Keyed,
}

/// Search configuration for a [`GridPathfinder`](crate::GridPathfinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FinderConfig {
    pub ordering: OpenOrdering,
}

impl FinderConfig {
    pub fn with_ordering(ordering: OpenOrdering) -> Self {
        Self { ordering }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn ordering_uses_kebab_case() {
        let json = serde_json::to_string(&FinderConfig::with_ordering(OpenOrdering::LinearScan))
            .unwrap();
        assert_eq!(json, r#"{"ordering":"linear-scan"}"#);
    }

    #[test]
    fn missing_fields_fall_back_to_default() {
        let cfg: FinderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, FinderConfig::default());
        let cfg: FinderConfig = serde_json::from_str(r#"{"ordering":"keyed"}"#).unwrap();
        assert_eq!(cfg.ordering, OpenOrdering::Keyed);
    }
}
