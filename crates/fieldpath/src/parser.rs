//! A `nom`-based parser for the field-selector grammar.
use crate::ast::{FieldSelector, PathSegment};
use crate::error::FieldPathError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, u64 as nom_u64},
    combinator::map,
    multi::{many0, many1, separated_list1},
    sequence::{delimited, pair},
};

// --- Main Public Parser ---

pub fn parse_selector(input: &str) -> Result<FieldSelector, FieldPathError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        // The empty selector addresses the document root.
        return Ok(FieldSelector::root());
    }
    match selector(trimmed) {
        Ok(("", segments)) => Ok(FieldSelector::from_segments(segments)),
        Ok((rem, _)) => Err(FieldPathError::Parse(
            input.to_string(),
            format!("parser did not consume all input, remainder: '{rem}'"),
        )),
        Err(e) => Err(FieldPathError::Parse(input.to_string(), e.to_string())),
    }
}

// --- Combinators ---

fn selector(input: &str) -> IResult<&str, Vec<PathSegment>> {
    map(separated_list1(char('.'), segment), |groups| {
        groups.into_iter().flatten().collect()
    })
    .parse(input)
}

/// One dot-separated step: a wildcard, a key with optional trailing indices,
/// or bare indices (for sequence-shaped roots).
fn segment(input: &str) -> IResult<&str, Vec<PathSegment>> {
    alt((wildcard_segment, keyed_segment, index_segments)).parse(input)
}

fn wildcard_segment(input: &str) -> IResult<&str, Vec<PathSegment>> {
    map(char('*'), |_| vec![PathSegment::Wildcard]).parse(input)
}

fn keyed_segment(input: &str) -> IResult<&str, Vec<PathSegment>> {
    map(pair(key, many0(index)), |(key, indices)| {
        let mut segments = vec![key];
        segments.extend(indices);
        segments
    })
    .parse(input)
}

fn index_segments(input: &str) -> IResult<&str, Vec<PathSegment>> {
    many1(index).parse(input)
}

fn key(input: &str) -> IResult<&str, PathSegment> {
    map(
        take_while1(|c: char| c.is_alphanumeric() || c == '_' || c == '-'),
        |s: &str| PathSegment::Key(s.to_string()),
    )
    .parse(input)
}

fn index(input: &str) -> IResult<&str, PathSegment> {
    map(delimited(char('['), nom_u64, char(']')), |i| {
        PathSegment::Index(i as usize)
    })
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_of(s: &str) -> PathSegment {
        PathSegment::Key(s.to_string())
    }

    #[test]
    fn parses_dotted_keys() {
        let selector = parse_selector("spec.template.metadata").unwrap();
        assert_eq!(
            selector.segments(),
            &[key_of("spec"), key_of("template"), key_of("metadata")]
        );
    }

    #[test]
    fn parses_indices_and_wildcards() {
        let selector = parse_selector("spec.containers[0].env.*.value").unwrap();
        assert_eq!(
            selector.segments(),
            &[
                key_of("spec"),
                key_of("containers"),
                PathSegment::Index(0),
                key_of("env"),
                PathSegment::Wildcard,
                key_of("value"),
            ]
        );
    }

    #[test]
    fn parses_chained_indices() {
        let selector = parse_selector("rows[1][2]").unwrap();
        assert_eq!(
            selector.segments(),
            &[key_of("rows"), PathSegment::Index(1), PathSegment::Index(2)]
        );
    }

    #[test]
    fn parses_leading_index() {
        let selector = parse_selector("[3].name").unwrap();
        assert_eq!(selector.segments(), &[PathSegment::Index(3), key_of("name")]);
    }

    #[test]
    fn parses_hyphenated_keys() {
        let selector = parse_selector("metadata.app-name").unwrap();
        assert_eq!(selector.segments(), &[key_of("metadata"), key_of("app-name")]);
    }

    #[test]
    fn empty_selector_is_root() {
        assert_eq!(parse_selector("").unwrap().segments(), &[]);
        assert_eq!(parse_selector("  ").unwrap().segments(), &[]);
    }

    #[test]
    fn rejects_malformed_paths() {
        assert!(parse_selector("spec..env").is_err());
        assert!(parse_selector("spec.").is_err());
        assert!(parse_selector("spec[x]").is_err());
        assert!(parse_selector("spec[1").is_err());
    }

    #[test]
    fn display_round_trips() {
        for raw in ["spec.containers[0].env", "[3].name", "data.*.value"] {
            let selector = parse_selector(raw).unwrap();
            assert_eq!(selector.to_string(), raw);
            assert_eq!(parse_selector(&selector.to_string()).unwrap(), selector);
        }
    }
}
