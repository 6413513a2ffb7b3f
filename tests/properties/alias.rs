//! Property tests for alias validation.

use proptest::prelude::*;

use stagehand::domain::value_objects::Alias;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Alias parsing never panics on arbitrary input.
    #[test]
    fn property_alias_parse_never_panics(s in "(?s).{0,200}") {
        let _ = Alias::parse(&s);
    }

    /// PROPERTY: An accepted alias is a valid stage name and never all digits.
    #[test]
    fn property_accepted_alias_is_stage_safe(s in "[A-Za-z0-9_-]{1,40}") {
        match Alias::parse(&s) {
            Ok(alias) => {
                prop_assert_eq!(alias.as_str(), s.as_str());
                prop_assert!(!alias.as_str().chars().all(|c| c.is_ascii_digit()));
            }
            Err(_) => prop_assert!(s.chars().all(|c| c.is_ascii_digit())),
        }
    }
}
