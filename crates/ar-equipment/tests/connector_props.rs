//! Property tests for the connector compatibility rule.

use ar_equipment::Connector;
use proptest::prelude::*;

fn connector_strategy() -> impl Strategy<Value = Connector> {
    (
        "[a-z]{1,12}(-[0-9]{1,3})?",
        1u32..=150,
        prop::collection::vec("[a-z]{1,12}", 0..4),
    )
        .prop_map(|(name, diameter_mm, allowed)| Connector::with_variants(name, diameter_mm, allowed))
}

proptest! {
    // Equal diameters couple regardless of allow-list content.
    #[test]
    fn equal_diameter_always_compatible(
        a in connector_strategy(),
        b in connector_strategy(),
    ) {
        let mut b = b;
        b.diameter_mm = a.diameter_mm;
        prop_assert!(a.is_compatible_with(&b));
    }

    // An empty allow-list accepts any counterpart.
    #[test]
    fn empty_allow_list_always_compatible(
        a in connector_strategy(),
        b in connector_strategy(),
    ) {
        let mut a = a;
        a.allowed_variants.clear();
        prop_assert!(a.is_compatible_with(&b));
    }

    // A listed counterpart name couples despite any diameter mismatch.
    #[test]
    fn listed_name_always_compatible(
        a in connector_strategy(),
        b in connector_strategy(),
    ) {
        let mut a = a;
        a.allowed_variants.push(b.name.clone());
        prop_assert!(a.is_compatible_with(&b));
    }

    // The full rule, restated independently of the implementation.
    #[test]
    fn rule_is_exactly_diameter_or_unrestricted_or_listed(
        a in connector_strategy(),
        b in connector_strategy(),
    ) {
        let expected = a.diameter_mm == b.diameter_mm
            || a.allowed_variants.is_empty()
            || a.allowed_variants.contains(&b.name);
        prop_assert_eq!(a.is_compatible_with(&b), expected);
    }
}
