//! Integration tests for clivo-core
//!
//! These tests drive complete argument lists through the public parsing API,
//! the way a program would with its own process arguments.

use clivo_core::{
    config::{ParseRequest, ParserConfig, FLAG_VALUE, POSITIONAL_KEY},
    error::Error,
    option_definitions::OptionSpec,
    parsing::{parse_arguments, scan_tokens},
    registry::OptionRegistry,
};

fn restaurant_options() -> Vec<OptionSpec> {
    vec![
        OptionSpec::new("order").with_letter('o').with_label("Dishes to order"),
        OptionSpec::new("takeout").with_letter('t'),
    ]
}

/// Mixed inline, trailing and repeated values for one option
#[test]
fn test_restaurant_order_workflow() {
    let request = ParseRequest::from_args(
        [
            "clivo", "-t", "--order=burger", "cola", "-o=fries", "-o", "salad",
        ],
        1,
        restaurant_options(),
    );
    let dictionary = parse_arguments(&request).unwrap();

    assert_eq!(dictionary.get("takeout").unwrap(), [FLAG_VALUE]);
    assert_eq!(
        dictionary.get("order").unwrap(),
        ["burger", "cola", "fries", "salad"]
    );
    assert!(!dictionary.contains(POSITIONAL_KEY));
}

/// With strict equals, trailing words are positional
#[test]
fn test_restaurant_order_strict_equals_workflow() {
    let request = ParseRequest::from_args(
        [
            "node",
            "index.js",
            "-t",
            "--order=burger=cola=fries=salad",
            "burger-earl",
        ],
        2,
        restaurant_options(),
    )
    .strict_equals(true);
    let dictionary = parse_arguments(&request).unwrap();

    assert!(dictionary.is_flag("takeout"));
    assert_eq!(
        dictionary.get("order").unwrap(),
        ["burger", "cola", "fries", "salad"]
    );
    assert_eq!(dictionary.positional(), ["burger-earl"]);
}

/// Long options with values given after the flag
#[test]
fn test_trailing_values_workflow() {
    let request = ParseRequest::new(
        [
            "--withValue=hehe1=hehe2",
            "hehe3",
            "--alsoValue",
            "almond",
        ],
        vec![OptionSpec::new("withValue"), OptionSpec::new("alsoValue")],
    );
    let dictionary = parse_arguments(&request).unwrap();

    assert_eq!(
        dictionary.get("withValue").unwrap(),
        ["hehe1", "hehe2", "hehe3"]
    );
    assert_eq!(dictionary.get("alsoValue").unwrap(), ["almond"]);
}

#[test]
fn test_short_and_long_flags_mixed() {
    let request = ParseRequest::new(
        ["-s", "--longOption"],
        vec![
            OptionSpec::new("shortOption").with_letter('s'),
            OptionSpec::new("longOption"),
        ],
    );
    let dictionary = parse_arguments(&request).unwrap();

    assert_eq!(dictionary.get("shortOption").unwrap(), ["yes"]);
    assert_eq!(dictionary.get("longOption").unwrap(), ["yes"]);
}

#[test]
fn test_short_option_values() {
    let specs = vec![OptionSpec::new("shortOption").with_letter('s')];

    let inline = parse_arguments(&ParseRequest::new(["-s=hehe"], specs.clone())).unwrap();
    assert_eq!(inline.get("shortOption").unwrap(), ["hehe"]);

    let trailing =
        parse_arguments(&ParseRequest::new(["-s", "hehe1", "hehe2"], specs)).unwrap();
    assert_eq!(trailing.get("shortOption").unwrap(), ["hehe1", "hehe2"]);
}

/// Unknown options contribute nothing unless accepted
#[test]
fn test_unknown_option_law() {
    let tokens = ["--unknown", "-u", "--other=1"];

    let dropped = parse_arguments(&ParseRequest::new(tokens, Vec::new())).unwrap();
    assert!(dropped.is_empty());

    let accepted =
        parse_arguments(&ParseRequest::new(tokens, Vec::new()).accept_unspecified(true))
            .unwrap();
    assert!(accepted.is_flag("unknown"));
    assert!(accepted.is_flag("u"));
    assert_eq!(accepted.get("other").unwrap(), ["1"]);
}

/// Duplicate declarations fail before any token is read
#[test]
fn test_configuration_errors_ignore_tokens() {
    let duplicate_letter = vec![
        OptionSpec::new("firstOption").with_letter('a'),
        OptionSpec::new("secondOption").with_letter('a'),
    ];

    for tokens in [vec![], vec!["-a"], vec!["--firstOption", "x"]] {
        let result = parse_arguments(&ParseRequest::new(tokens, duplicate_letter.clone()));
        assert!(matches!(result, Err(Error::DuplicateOptionLetter('a'))));
    }

    let duplicate_name = vec![OptionSpec::new("duplicate"), OptionSpec::new("duplicate")];
    let result = parse_arguments(&ParseRequest::new(["--duplicate"], duplicate_name));
    match result {
        Err(Error::DuplicateOptionName(name)) => assert_eq!(name, "duplicate"),
        other => panic!("Expected duplicate name error, got {other:?}"),
    }
}

/// Same input always gives the same dictionary
#[test]
fn test_parsing_is_deterministic() {
    let request = ParseRequest::new(
        ["pos", "-ab", "1", "2", "--gamma", "-c=3", "tail"],
        vec![
            OptionSpec::new("alpha").with_letter('a'),
            OptionSpec::new("beta").with_letter('b'),
            OptionSpec::new("gamma").with_letter('c'),
        ],
    );

    let first = parse_arguments(&request).unwrap();
    let second = parse_arguments(&request).unwrap();
    assert_eq!(first, second);

    assert_eq!(first.positional(), ["pos"]);
    assert_eq!(first.get("alpha").unwrap(), ["1", "2"]);
    assert_eq!(first.get("gamma").unwrap(), ["yes", "3"]);

    let keys: Vec<&str> = first.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec![POSITIONAL_KEY, "alpha", "beta", "gamma"]);
}

/// A registry built once can serve several parses with different settings
#[test]
fn test_registry_reuse_with_configs() {
    let registry = OptionRegistry::build(&restaurant_options()).unwrap();
    let tokens = ["-o", "fries"];

    let loose = scan_tokens(&registry, ParserConfig::default(), &tokens);
    assert_eq!(loose.get("order").unwrap(), ["fries"]);

    let strict = scan_tokens(
        &registry,
        ParserConfig {
            accept_unspecified: false,
            strict_equals: true,
        },
        &tokens,
    );
    assert!(strict.is_flag("order"));
    assert_eq!(strict.positional(), ["fries"]);
}
