//! Solr-style synonym rule parser.
//!
//! The default rule dialect. One rule per line:
//!
//! ```text
//! # comment
//! i-pod, i pod => ipod
//! universe, cosmos
//! ```
//!
//! A line with `=>` maps every left-hand term to every right-hand term
//! (directional). A plain comma-separated line forms a group: bidirectional
//! when `expand` is set, otherwise every term maps to the first. `\,` and
//! `\=>` escape the separators inside terms.

use super::{RuleNormalizer, SynonymMap, SynonymMapBuilder};
use crate::error::{Result, UberFilterError};

/// Parse a Solr-style synonym rule document into a [`SynonymMap`].
pub fn parse(text: &str, expand: bool, normalizer: &RuleNormalizer) -> Result<SynonymMap> {
    let mut builder = SynonymMapBuilder::new();

    for (line_number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        parse_rule(line, expand, normalizer, &mut builder).map_err(|e| {
            let detail = match e {
                UberFilterError::Configuration(msg) => msg,
                other => other.to_string(),
            };
            UberFilterError::configuration(format!(
                "Invalid synonym rule at line {}: {detail}",
                line_number + 1
            ))
        })?;
    }

    Ok(builder.build())
}

// A rule character plus whether it was backslash-escaped. The flag must
// survive until the last split level: `\,` inside a `=>` side is still an
// escaped comma when the side is split into terms.
type RuleChars = Vec<(char, bool)>;

fn parse_rule(
    line: &str,
    expand: bool,
    normalizer: &RuleNormalizer,
    builder: &mut SynonymMapBuilder,
) -> Result<()> {
    let chars = decode_escapes(line);
    let sides = split_unescaped(&chars, "=>");
    match sides.len() {
        1 => {
            let terms = parse_terms(&sides[0], normalizer)?;
            builder.add_group(&terms, expand);
            Ok(())
        }
        2 => {
            let inputs = parse_terms(&sides[0], normalizer)?;
            let outputs = parse_terms(&sides[1], normalizer)?;
            if inputs.is_empty() || outputs.is_empty() {
                return Err(UberFilterError::configuration(format!(
                    "rule [{line}] has an empty side"
                )));
            }
            builder.add_directional(&inputs, &outputs);
            Ok(())
        }
        _ => Err(UberFilterError::configuration(format!(
            "rule [{line}] contains more than one `=>`"
        ))),
    }
}

fn parse_terms(side: &[(char, bool)], normalizer: &RuleNormalizer) -> Result<Vec<String>> {
    let mut terms = Vec::new();
    for segment in split_unescaped(side, ",") {
        let text: String = segment.iter().map(|(c, _)| *c).collect();
        let term = text.trim();
        if term.is_empty() {
            continue;
        }
        terms.push(normalizer.normalize(term)?);
    }
    Ok(terms)
}

/// Decode backslash escapes into `(char, escaped)` pairs.
///
/// The backslash is consumed; the flag marks the character it escaped.
fn decode_escapes(text: &str) -> RuleChars {
    let mut chars = Vec::new();
    let mut iter = text.chars();
    while let Some(c) = iter.next() {
        if c == '\\' {
            if let Some(escaped) = iter.next() {
                chars.push((escaped, true));
            }
        } else {
            chars.push((c, false));
        }
    }
    chars
}

/// Split decoded rule characters on a separator.
///
/// Escaped characters never participate in a separator match, and the
/// segments keep their escape flags for further splitting.
fn split_unescaped(chars: &[(char, bool)], separator: &str) -> Vec<RuleChars> {
    let sep: Vec<char> = separator.chars().collect();
    let mut segments = Vec::new();
    let mut current = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let is_separator = chars.len() - i >= sep.len()
            && chars[i..i + sep.len()]
                .iter()
                .zip(&sep)
                .all(|((c, escaped), s)| !escaped && c == s);

        if is_separator {
            segments.push(std::mem::take(&mut current));
            i += sep.len();
        } else {
            current.push(chars[i]);
            i += 1;
        }
    }

    segments.push(current);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(text: &str, expand: bool) -> SynonymMap {
        parse(text, expand, &RuleNormalizer::whitespace(false)).unwrap()
    }

    #[test]
    fn test_directional_rule() {
        let map = parse_default("i-pod, i pod => ipod", true);

        assert_eq!(map.lookup("i-pod").unwrap(), &["ipod".to_string()]);
        assert_eq!(map.lookup("i pod").unwrap(), &["ipod".to_string()]);
        // directional: the right-hand side is not an input
        assert!(map.lookup("ipod").is_none());
    }

    #[test]
    fn test_expanded_group() {
        let map = parse_default("universe, cosmos", true);

        let expected = vec!["universe".to_string(), "cosmos".to_string()];
        assert_eq!(map.lookup("universe").unwrap(), expected.as_slice());
        assert_eq!(map.lookup("cosmos").unwrap(), expected.as_slice());
    }

    #[test]
    fn test_contracted_group() {
        let map = parse_default("universe, cosmos", false);

        assert_eq!(map.lookup("cosmos").unwrap(), &["universe".to_string()]);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let map = parse_default("# a comment\n\nuniverse, cosmos\n", true);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_escaped_comma() {
        let map = parse_default(r"a\,b => c", true);
        assert_eq!(map.lookup("a,b").unwrap(), &["c".to_string()]);
        // the escaped comma is not a term separator
        assert!(map.lookup("a").is_none());
        assert!(map.lookup("b").is_none());
    }

    #[test]
    fn test_escaped_comma_in_group_line() {
        let map = parse_default(r"i\,pod, ipod", true);

        let expected = vec!["i,pod".to_string(), "ipod".to_string()];
        assert_eq!(map.lookup("i,pod").unwrap(), expected.as_slice());
        assert_eq!(map.lookup("ipod").unwrap(), expected.as_slice());
    }

    #[test]
    fn test_escaped_arrow_stays_in_term() {
        let map = parse_default(r"a\=>b => c", true);
        assert_eq!(map.lookup("a=>b").unwrap(), &["c".to_string()]);
    }

    #[test]
    fn test_double_arrow_is_rejected() {
        let err = parse(
            "a => b => c",
            true,
            &RuleNormalizer::whitespace(false),
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("line 1"), "unexpected message: {message}");
    }

    #[test]
    fn test_empty_right_side_is_rejected() {
        assert!(parse("a => ", true, &RuleNormalizer::whitespace(false)).is_err());
    }

    #[test]
    fn test_multi_word_terms_are_normalized() {
        let map = parse_default("i   pod => ipod", true);
        assert_eq!(map.lookup("i pod").unwrap(), &["ipod".to_string()]);
        assert_eq!(map.max_phrase_words(), 2);
    }

    #[test]
    fn test_empty_document() {
        let map = parse_default("# only comments\n", true);
        assert!(map.is_empty());
    }
}
