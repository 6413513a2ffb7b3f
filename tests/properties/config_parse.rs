//! Property tests for config parsing.

use std::path::Path;

use proptest::prelude::*;

use stagehand::config::parse_with_warnings;

fn function_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9-]{0,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing arbitrary text returns a result instead of panicking.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,512}") {
        let _ = parse_with_warnings(&s, Path::new("stagehand.toml"));
    }

    /// PROPERTY: Distinct function names all survive parsing in file order.
    #[test]
    fn property_targets_keep_file_order(
        names in proptest::collection::btree_set(function_name(), 1..6)
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let content: String = names
            .iter()
            .map(|n| format!(
                "[[deployments]]\nfunction_name = \"{n}\"\nsrc = \"build\"\nfile = \"{n}.zip\"\n\n"
            ))
            .collect();

        let (config, warnings) = parse_with_warnings(&content, Path::new("stagehand.toml")).unwrap();
        prop_assert!(warnings.is_empty());
        let parsed: Vec<&str> = config.deployments.iter().map(|t| t.function_name.as_str()).collect();
        prop_assert_eq!(parsed, names.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
