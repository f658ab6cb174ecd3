use super::Location;

/// Locations whose name or address contains `term`, case-insensitively.
///
/// The term is trimmed first; an empty term keeps every location. Order is
/// preserved.
#[must_use]
pub fn filter_locations<'a>(locations: &'a [Location], term: &str) -> Vec<&'a Location> {
    matching_indices(locations, term).into_iter().filter_map(|index| locations.get(index)).collect()
}

/// Positions of the locations [`filter_locations`] would keep.
pub(super) fn matching_indices(locations: &[Location], term: &str) -> Vec<usize> {
    let needle = term.trim().to_lowercase();
    locations
        .iter()
        .enumerate()
        .filter(|(_, location)| needle.is_empty() || location.matches(&needle))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::locations::sample_locations;

    fn names<'a>(locations: &[&'a Location]) -> Vec<&'a str> {
        locations.iter().map(|location| location.name.as_str()).collect()
    }

    #[rstest]
    #[case("Caracas")]
    #[case("caracas")]
    #[case("  CARACAS ")]
    fn city_search_is_case_insensitive(#[case] term: &str) {
        let locations = sample_locations();

        let found = filter_locations(&locations, term);

        assert_that!(names(&found), elements_are![eq(&"Caracas")]);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn empty_term_keeps_everything_in_order(#[case] term: &str) {
        let locations = sample_locations();

        let found = filter_locations(&locations, term);

        assert_that!(found.len(), eq(8));
        assert!(found.iter().zip(&locations).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[googletest::test]
    fn address_matches_count() {
        let locations = sample_locations();

        // "Carabobo" only appears in an address.
        let found = filter_locations(&locations, "carabobo");

        expect_that!(names(&found), elements_are![eq(&"Puerto Cabello")]);
    }

    #[googletest::test]
    fn vargas_matches_two_offices() {
        let locations = sample_locations();

        let found = filter_locations(&locations, "vargas");

        expect_that!(names(&found), elements_are![eq(&"La Guaira"), eq(&"CUSALCA Catia La Mar")]);
    }

    #[googletest::test]
    fn unmatched_term_is_empty() {
        let locations = sample_locations();

        expect_that!(filter_locations(&locations, "Madrid"), is_empty());
    }
}
