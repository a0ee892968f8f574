//! Property-based tests for xlsx-linkcheck using proptest
//!
//! These tests generate random inputs to exercise the link syntax check,
//! column identifiers and progress arithmetic across a wide input range.

use proptest::prelude::*;
use xlsx_linkcheck::scan::state::{ScanState, percent_of};
use xlsx_linkcheck::{ColumnRef, LinkStatus, is_well_formed};

/// Generate links the syntax check must accept
fn url_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Dotted hostnames
        (
            prop::sample::select(vec!["http", "https", "ftp", "ftps"]),
            prop::collection::vec("[a-z][a-z0-9]{0,9}", 1..4),
            "[a-z]{2,6}"
        )
            .prop_map(|(scheme, labels, tld)| format!("{scheme}://{}.{tld}", labels.join("."))),
        // Ports
        ("[a-z]{3,8}", 1..65535u16)
            .prop_map(|(domain, port)| format!("http://{domain}.com:{port}")),
        // Paths
        ("[a-z]{3,8}", prop::collection::vec("[a-z0-9]{1,8}", 1..5)).prop_map(
            |(domain, parts)| format!("https://{domain}.com/{}", parts.join("/"))
        ),
        // Query strings
        ("[a-z]{3,8}", "[a-z]{1,8}", "[a-z0-9]{1,8}")
            .prop_map(|(domain, key, value)| format!("https://{domain}.org?{key}={value}")),
        // IPv4 hosts
        (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(a, b, c, d)| format!("http://{a}.{b}.{c}.{d}/")),
        Just("https://localhost".to_string()),
        Just("http://localhost:8080/health".to_string()),
    ]
}

/// Generate strings the syntax check must reject
fn malformed_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // No scheme
        "[a-z]{5,15}",
        "[a-z]{3,8}\\.com",
        // Unsupported schemes
        ("(mailto|file|gopher|ws)", "[a-z]{3,8}")
            .prop_map(|(scheme, host)| format!("{scheme}://{host}.com")),
        // Missing host
        Just("http://".to_string()),
        Just("https://.".to_string()),
        Just("https://-bad-.com".to_string()),
        // Whitespace only
        "[ \t]{0,5}",
    ]
}

proptest! {
    #[test]
    fn test_well_formed_links_accepted(url in url_strategy()) {
        prop_assert!(is_well_formed(Some(&url)), "rejected {}", url);
    }

    #[test]
    fn test_malformed_links_rejected(raw in malformed_strategy()) {
        prop_assert!(!is_well_formed(Some(&raw)), "accepted {:?}", raw);
    }

    #[test]
    fn test_surrounding_whitespace_ignored(
        url in url_strategy(),
        before in "[ \t]{0,3}",
        after in "[ \t]{0,3}",
    ) {
        let padded = format!("{before}{url}{after}");
        prop_assert_eq!(is_well_formed(Some(&padded)), is_well_formed(Some(&url)));
    }

    #[test]
    fn test_never_panics_on_arbitrary_input(raw in ".*") {
        let _ = is_well_formed(Some(&raw));
    }

    #[test]
    fn test_column_letter_round_trip(index in 1u32..=16_384) {
        let column = ColumnRef::from_index(index).unwrap();
        let parsed: ColumnRef = column.letter().parse().unwrap();
        prop_assert_eq!(parsed, column);

        let lower: ColumnRef = column.letter().to_lowercase().parse().unwrap();
        prop_assert_eq!(lower.index(), index);

        let numeric: ColumnRef = index.to_string().parse().unwrap();
        prop_assert_eq!(numeric, column);
    }

    #[test]
    fn test_column_letter_shape(index in 1u32..=16_384) {
        let letter = ColumnRef::from_index(index).unwrap().letter();
        prop_assert!(!letter.is_empty() && letter.len() <= 3);
        prop_assert!(letter.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_column_out_of_range_rejected(index in 16_385u32..) {
        prop_assert!(ColumnRef::from_index(index).is_err());
    }

    #[test]
    fn test_percent_bounds(processed in 0usize..10_000, total in 0usize..10_000) {
        let percent = percent_of(processed, total);
        prop_assert!(percent <= 100);
        if total == 0 {
            prop_assert_eq!(percent, 0);
        } else if processed <= total {
            prop_assert_eq!(percent as usize, processed * 100 / total);
        }
    }

    #[test]
    fn test_scan_state_counters(
        statuses in prop::collection::vec(
            prop_oneof![
                Just(LinkStatus::Valid),
                Just(LinkStatus::FormatInvalid),
                (100u16..600).prop_map(LinkStatus::from_status_code),
                "[a-z ]{1,20}".prop_map(LinkStatus::TransportError),
            ],
            0..50,
        ),
        total in 0usize..50,
    ) {
        let mut state = ScanState::new(total);
        let mut previous = 0;

        for status in &statuses {
            let progress = state.record(status);
            prop_assert_eq!(progress.valid + progress.invalid, progress.processed);
            prop_assert_eq!(progress.total, total);
            prop_assert!(progress.percent <= 100);
            prop_assert!(progress.processed > previous);
            previous = progress.processed;
        }

        let valid = statuses.iter().filter(|s| s.is_valid()).count();
        prop_assert_eq!(state.progress().valid, valid);
        prop_assert_eq!(state.progress().processed, statuses.len());
    }
}
