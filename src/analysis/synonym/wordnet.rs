//! WordNet-style synonym rule parser.
//!
//! Parses WordNet prolog `wn_s.pl` lines of the form:
//!
//! ```text
//! s(100001740,1,'entity',n,1,11).
//! ```
//!
//! Words sharing a synset id form one synonym group, with the same expansion
//! semantics as the Solr dialect's plain groups. `''` inside a quoted word
//! unescapes to a single `'`.

use super::{RuleNormalizer, SynonymMap, SynonymMapBuilder};
use crate::error::{Result, UberFilterError};

/// Parse a WordNet-style synonym rule document into a [`SynonymMap`].
pub fn parse(text: &str, expand: bool, normalizer: &RuleNormalizer) -> Result<SynonymMap> {
    let mut builder = SynonymMapBuilder::new();

    // synset entries arrive grouped; a change of id closes the open group
    let mut current_synset: Option<String> = None;
    let mut current_group: Vec<String> = Vec::new();

    for (line_number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (synset, term) = parse_line(line)
            .and_then(|(synset, word)| Ok((synset, normalizer.normalize(&word)?)))
            .map_err(|e| {
                let detail = match e {
                    UberFilterError::Configuration(msg) => msg,
                    other => other.to_string(),
                };
                UberFilterError::configuration(format!(
                    "Invalid WordNet synonym rule at line {}: {detail}",
                    line_number + 1
                ))
            })?;

        if current_synset.as_deref() != Some(synset.as_str()) {
            builder.add_group(&current_group, expand);
            current_group.clear();
            current_synset = Some(synset);
        }
        current_group.push(term);
    }

    builder.add_group(&current_group, expand);
    Ok(builder.build())
}

/// Extract the synset id and the quoted word from one `s(...)` line.
fn parse_line(line: &str) -> Result<(String, String)> {
    let body = line
        .strip_prefix("s(")
        .ok_or_else(|| UberFilterError::configuration(format!("expected `s(`: [{line}]")))?;

    let (synset, rest) = body
        .split_once(',')
        .ok_or_else(|| UberFilterError::configuration(format!("missing synset id: [{line}]")))?;

    let quote_start = rest
        .find('\'')
        .ok_or_else(|| UberFilterError::configuration(format!("missing quoted word: [{line}]")))?;

    let mut word = String::new();
    let mut chars = rest[quote_start + 1..].chars().peekable();
    loop {
        match chars.next() {
            Some('\'') => {
                // doubled quote is an escaped quote, a lone one closes the word
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    word.push('\'');
                } else {
                    return Ok((synset.trim().to_string(), word));
                }
            }
            Some(c) => word.push(c),
            None => {
                return Err(UberFilterError::configuration(format!(
                    "unterminated quoted word: [{line}]"
                )));
            }
        }
    }
}
