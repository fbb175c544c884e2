//! Scenario tests chaining several uber filters, the way an analysis
//! pipeline composes them.

use serde_json::json;

use uber_filters::analysis::token::Token;
use uber_filters::factory::registry;
use uber_filters::factory::TokenFilterFactory;
use uber_filters::settings::ConnectionSettings;

fn stream(words: &[&str]) -> Box<dyn Iterator<Item = Token>> {
    let tokens: Vec<_> = words
        .iter()
        .enumerate()
        .map(|(i, w)| Token::new(*w, i))
        .collect();
    Box::new(tokens.into_iter())
}

#[test]
fn keyword_marker_shields_tokens_from_overrides() {
    let filters = registry::builtin_filters();
    let connection = ConnectionSettings::default();

    let marker = filters["uber_keyword_marker"](
        &connection,
        "marker",
        &json!({ "keywords": ["running"] }),
    )
    .unwrap();
    let overrides = filters["uber_stemmer_override"](
        &connection,
        "overrides",
        &json!({ "rules": ["running => run", "mice => mouse"] }),
    )
    .unwrap();

    let tokens = marker.create(stream(&["running", "mice"])).unwrap();
    let result: Vec<_> = overrides.create(tokens).unwrap().collect();

    // "running" was marked first, so the override no longer applies
    assert_eq!(result[0].text, "running");
    assert!(result[0].is_keyword());
    assert_eq!(result[1].text, "mouse");
    assert!(result[1].is_keyword());
}

#[test]
fn stop_then_synonym_pipeline() {
    let filters = registry::builtin_filters();
    let connection = ConnectionSettings::default();

    let stop = filters["uber_stop"](&connection, "stop", &json!({})).unwrap();
    let synonyms = filters["uber_synonym"](
        &connection,
        "synonyms",
        &json!({ "synonyms": ["universe, cosmos"] }),
    )
    .unwrap();

    let tokens = stop.create(stream(&["the", "universe", "is", "big"])).unwrap();
    let texts: Vec<_> = synonyms
        .create(tokens)
        .unwrap()
        .map(|t| t.text)
        .collect();

    assert_eq!(texts, vec!["universe", "cosmos", "big"]);
}

#[test]
fn factories_are_reusable_across_streams() {
    let filters = registry::builtin_filters();
    let connection = ConnectionSettings::default();

    let stop = filters["uber_stop"](
        &connection,
        "stop",
        &json!({ "stopwords": ["not"] }),
    )
    .unwrap();

    for _ in 0..2 {
        let texts: Vec<_> = stop
            .create(stream(&["does", "not", "matter"]))
            .unwrap()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["does", "matter"]);
    }
}
