//! Property tests for identifier construction and verification.

use nbn_urn::{check_digit, mint, Part, Urn, UrnBuilder, UrnError, PREFIX};
use proptest::prelude::*;

fn part() -> impl Strategy<Value = String> {
    "[a-z0-9._-]{1,16}"
}

/// A string with at least one character outside the part grammar.
fn invalid_part() -> impl Strategy<Value = String> {
    ("[a-z0-9]{0,6}", "[A-Z ,;:/+#äß\t]", "[a-z0-9]{0,6}")
        .prop_map(|(head, bad, tail)| format!("{head}{bad}{tail}"))
}

proptest! {
    #[test]
    fn built_identifiers_verify(
        network in part(),
        library in part(),
        prefix in part(),
        number in part(),
    ) {
        let urn = mint(&network, &library, &prefix, &number).unwrap();
        let text = urn.to_string();

        // Strip prefix and trailing digit, recompute, compare.
        let nss = text.strip_prefix(PREFIX).unwrap();
        let (canonical, digit) = nss.split_at(nss.len() - 1);
        prop_assert_eq!(canonical, format!("{network}:{library}-{prefix}-{number}"));
        prop_assert_eq!(check_digit(canonical).unwrap().to_string(), digit);
    }

    #[test]
    fn built_identifiers_parse_back(
        network in part(),
        library in part(),
        prefix in part(),
        number in part(),
    ) {
        let urn = mint(&network, &library, &prefix, &number).unwrap();
        let parsed: Urn = urn.to_string().parse().unwrap();
        prop_assert_eq!(parsed.check_digit(), urn.check_digit());
        prop_assert_eq!(parsed, urn);
    }

    #[test]
    fn building_is_deterministic(
        network in part(),
        library in part(),
        prefix in part(),
        number in part(),
    ) {
        let first = mint(&network, &library, &prefix, &number).unwrap();
        let second = mint(&network, &library, &prefix, &number).unwrap();
        prop_assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn altered_check_digit_is_rejected(number in "[0-9]{1,12}", delta in 1u8..10) {
        let urn = mint("bsz", "14", "qucosa", &number).unwrap();
        let wrong = (urn.check_digit() + delta) % 10;
        let text = format!("{PREFIX}{}{wrong}", urn.canonical());
        prop_assert_eq!(
            Urn::parse(&text).unwrap_err(),
            UrnError::CheckDigitMismatch { expected: urn.check_digit(), actual: wrong }
        );
    }

    #[test]
    fn invalid_parts_are_rejected_without_mutation(bad in invalid_part()) {
        let mut builder = UrnBuilder::new();
        builder
            .set_network_abbreviation("swb").unwrap()
            .set_library_identifier("14").unwrap()
            .set_sub_namespace_prefix("opus").unwrap()
            .set_unique_number("4711").unwrap();

        let err = builder.set_network_abbreviation(&bad).unwrap_err();
        prop_assert_eq!(err.part(), Some(Part::NetworkAbbreviation));
        let err = builder.set_library_identifier(&bad).unwrap_err();
        prop_assert_eq!(err.part(), Some(Part::LibraryIdentifier));
        let err = builder.set_sub_namespace_prefix(&bad).unwrap_err();
        prop_assert_eq!(err.part(), Some(Part::SubNamespacePrefix));
        let err = builder.set_unique_number(&bad).unwrap_err();
        prop_assert_eq!(
            err,
            UrnError::InvalidCharacter { part: Part::UniqueNumber, value: bad.clone() }
        );

        let built = builder.build().unwrap();
        prop_assert_eq!(built.as_str(), "urn:nbn:de:swb:14-opus-47118");
    }
}

#[test]
fn published_identifiers() {
    let cases = [
        (("swb", "14", "opus", "8765"), "urn:nbn:de:swb:14-opus-87650"),
        (("swb", "14", "opus", "1913"), "urn:nbn:de:swb:14-opus-19131"),
        (("swb", "14", "opus", "4711"), "urn:nbn:de:swb:14-opus-47118"),
        (("bsz", "15", "qucosa", "1059"), "urn:nbn:de:bsz:15-qucosa-10591"),
        (("bsz", "15", "qucosa", "1060"), "urn:nbn:de:bsz:15-qucosa-10603"),
        (("bsz", "14", "qucosa", "14106"), "urn:nbn:de:bsz:14-qucosa-141061"),
        (("bsz", "14", "qucosa", "14191"), "urn:nbn:de:bsz:14-qucosa-141916"),
    ];

    for ((network, library, prefix, number), expected) in cases {
        let urn = mint(network, library, prefix, number).unwrap();
        assert_eq!(urn.as_str(), expected);
        assert_eq!(Urn::parse(expected).unwrap(), urn);
    }
}
