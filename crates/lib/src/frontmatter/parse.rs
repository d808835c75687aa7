use chrono::NaiveDate;
use tracing::debug;

use super::{Document, FieldKind, Metadata, Schema, Value, DELIMITER};
use crate::stage::Stage;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("No front matter found: expected a block opened and closed by `{DELIMITER}` lines")]
    MissingFrontmatter,
    #[error("Invalid front matter line {line_number}: `{line}` has no `:` separator")]
    InvalidLine { line_number: usize, line: String },
    #[error("Invalid front matter line {line_number}: `{line}` has an empty key")]
    EmptyKey { line_number: usize, line: String },
    #[error("Unknown front matter key `{key}` for {entity}")]
    UnknownKey { key: String, entity: &'static str },
    #[error("Front matter key `{key}` appears more than once")]
    DuplicateKey { key: String },
    #[error("Missing required front matter key `{key}` for {entity}")]
    MissingKey { key: &'static str, entity: &'static str },
    #[error("Invalid value `{value}` for front matter key `{key}`: expected {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

/// Splits `raw` into its front matter block and body and decodes the block
/// against `schema`.
///
/// In [`Stage::Drafts`] lines without a colon are skipped and required keys may
/// be missing, so half-written scaffolding still loads. Unknown keys are
/// rejected in every stage.
pub fn parse(raw: &str, stage: Stage, schema: &Schema) -> Result<Document, ParseError> {
    let (block, first_line, body) = split(raw)?;

    let mut metadata = Metadata::new();
    for (index, line) in block.iter().enumerate() {
        let line_number = first_line + index;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(colon) = line.find(':') else {
            if stage.is_lenient() {
                debug!("Skipping front matter line {line_number} without a colon: {line:?}");
                continue;
            }
            return Err(ParseError::InvalidLine {
                line_number,
                line: line.to_owned(),
            });
        };

        let key = line[..colon].trim();
        if key.is_empty() {
            return Err(ParseError::EmptyKey {
                line_number,
                line: line.to_owned(),
            });
        }
        let field = schema.field(key).ok_or_else(|| ParseError::UnknownKey {
            key: key.to_owned(),
            entity: schema.entity,
        })?;
        if metadata.contains_key(key) {
            return Err(ParseError::DuplicateKey { key: key.to_owned() });
        }

        if let Some(value) = decode(key, line[colon + 1..].trim(), field.kind)? {
            metadata.insert(field.name, value);
        }
    }

    if !stage.is_lenient() {
        if let Some(field) = schema.required().find(|field| !metadata.contains_key(field.name)) {
            return Err(ParseError::MissingKey {
                key: field.name,
                entity: schema.entity,
            });
        }
    }

    Ok(Document {
        metadata,
        body: body.trim().to_owned(),
    })
}

/// Returns the block lines between the delimiters, the 1-based line number of
/// the first of them, and the remaining text.
fn split(raw: &str) -> Result<(Vec<&str>, usize, &str), ParseError> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut lines = text.split_inclusive('\n');
    let mut consumed = 0;
    let mut first_line = 1;

    loop {
        let line = lines.next().ok_or(ParseError::MissingFrontmatter)?;
        consumed += line.len();
        first_line += 1;
        match line.trim() {
            "" => continue,
            DELIMITER => break,
            _ => return Err(ParseError::MissingFrontmatter),
        }
    }

    let mut block = Vec::new();
    loop {
        let line = lines.next().ok_or(ParseError::MissingFrontmatter)?;
        consumed += line.len();
        if line.trim() == DELIMITER {
            break;
        }
        block.push(line.trim_end_matches(['\n', '\r']));
    }

    Ok((block, first_line, &text[consumed..]))
}

/// `None` for an empty scalar, which reads as an absent key.
fn decode(key: &str, raw: &str, kind: FieldKind) -> Result<Option<Value>, ParseError> {
    let invalid = |expected| ParseError::InvalidValue {
        key: key.to_owned(),
        value: raw.to_owned(),
        expected,
    };
    if kind == FieldKind::List {
        return Ok(Some(Value::List(decode_list(raw))));
    }
    if raw.is_empty() {
        return Ok(None);
    }
    let value = unquote(raw);
    let value = match kind {
        FieldKind::Text => Value::Text(value),
        FieldKind::Date => Value::Date(
            NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| invalid("a YYYY-MM-DD date"))?,
        ),
        FieldKind::Integer => Value::Integer(value.parse().map_err(|_| invalid("an unsigned integer"))?),
        FieldKind::List => unreachable!("lists are decoded above"),
    };
    Ok(Some(value))
}

/// `["a", "b"]` into its items. Commas inside quotes do not split.
fn decode_list(raw: &str) -> Vec<String> {
    let inner = raw.strip_prefix('[').unwrap_or(raw);
    let inner = inner.strip_suffix(']').unwrap_or(inner).trim();
    if inner.is_empty() {
        return Vec::new();
    }

    let mut items = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in inner.char_indices() {
        match (quote, c) {
            _ if escaped => escaped = false,
            (Some('"'), '\\') => escaped = true,
            (Some(open), c) if c == open => quote = None,
            (None, '"' | '\'') => quote = Some(c),
            (None, ',') => {
                items.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&inner[start..]);

    items
        .into_iter()
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(unquote)
        .collect()
}

/// Strips one pair of surrounding quotes. Double-quoted values are unescaped.
fn unquote(value: &str) -> String {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        return unescape(&value[1..value.len() - 1]);
    }
    if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
        return value[1..value.len() - 1].to_owned();
    }
    value.to_owned()
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(c @ ('"' | '\\')) => out.push(c),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::{parse, ParseError};
    use crate::frontmatter::{schema, Value};
    use crate::stage::Stage;

    macro_rules! s {
        ($v:literal) => {
            $v.to_string()
        };
    }

    const ARTICLE: &str = r#"---
title: "Hello: world"
catchline: 'A catchline'
description: Plain description
publishedAt: 2024-01-01
category: news
tags: ["a", "b"]
serie: "rust"
serieOrder: 2
---

# Heading

Body text.
"#;

    #[test]
    fn parses_article() {
        let doc = parse(ARTICLE, Stage::Published, &schema::ARTICLE).unwrap();
        let m = &doc.metadata;
        assert_eq!(Some("Hello: world"), m.text("title"));
        assert_eq!(Some("A catchline"), m.text("catchline"));
        assert_eq!(Some("Plain description"), m.text("description"));
        assert_eq!(NaiveDate::from_ymd_opt(2024, 1, 1), m.date("publishedAt"));
        assert_eq!(Some(&[s!("a"), s!("b")][..]), m.list("tags"));
        assert_eq!(Some(2), m.integer("serieOrder"));
        assert_eq!(None, m.get("updatedAt"));
        assert_eq!("# Heading\n\nBody text.", doc.body);
    }

    #[test]
    fn empty_list_is_not_absent() {
        let raw = "---\ntitle: t\ncatchline: c\ndescription: d\npublishedAt: 2024-01-01\ncategory: x\ntags: []\n---\n";
        let doc = parse(raw, Stage::Published, &schema::ARTICLE).unwrap();
        assert_eq!(Some(&[] as &[String]), doc.metadata.list("tags"));
        assert_eq!("", doc.body);
    }

    #[test]
    fn list_items_keep_quoted_commas() {
        let raw = "---\ntitle: t\ncatchline: c\ndescription: d\npublishedAt: 2024-01-01\ncategory: x\ntags: [ \"a, b\", 'c', d ]\n---\n";
        let doc = parse(raw, Stage::Published, &schema::ARTICLE).unwrap();
        assert_eq!(
            Some(&[s!("a, b"), s!("c"), s!("d")][..]),
            doc.metadata.list("tags")
        );
    }

    #[test]
    fn unknown_key_rejected_in_every_stage() {
        let raw = "---\nauthor: me\n---\n";
        for entity in [&schema::PAGE, &schema::ARTICLE, &schema::TERM, &schema::WEBSITE] {
            for stage in [Stage::Drafts, Stage::Published] {
                assert_eq!(
                    Err(ParseError::UnknownKey {
                        key: s!("author"),
                        entity: entity.entity
                    }),
                    parse(raw, stage, entity)
                );
            }
        }
    }

    #[test]
    fn line_numbers_count_leading_blank_lines() {
        let raw = "\n\n---\ntitle: t\nno separator here\n---\n";
        assert_eq!(
            Err(ParseError::InvalidLine {
                line_number: 5,
                line: s!("no separator here")
            }),
            parse(raw, Stage::Published, &schema::PAGE)
        );
    }

    #[test]
    fn drafts_tolerate_incomplete_blocks() {
        let raw = "---\ntitle: Work in progress\nTODO write the rest\n---\n\nSome body";
        let doc = parse(raw, Stage::Drafts, &schema::PAGE).unwrap();
        assert_eq!(1, doc.metadata.len());
        assert_eq!("Some body", doc.body);

        assert_eq!(
            Err(ParseError::InvalidLine {
                line_number: 3,
                line: s!("TODO write the rest")
            }),
            parse(raw, Stage::Published, &schema::PAGE)
        );
    }

    #[test]
    fn published_requires_keys() {
        let raw = "---\ntitle: t\ncatchline: c\n---\n";
        assert_eq!(
            Err(ParseError::MissingKey {
                key: "description",
                entity: "page"
            }),
            parse(raw, Stage::Published, &schema::PAGE)
        );
        assert!(parse(raw, Stage::Drafts, &schema::PAGE).is_ok());
    }

    #[test]
    fn missing_delimiters() {
        assert_eq!(
            Err(ParseError::MissingFrontmatter),
            parse("just a body", Stage::Drafts, &schema::PAGE)
        );
        assert_eq!(
            Err(ParseError::MissingFrontmatter),
            parse("---\ntitle: t\n", Stage::Drafts, &schema::PAGE)
        );
        assert_eq!(
            Err(ParseError::MissingFrontmatter),
            parse("", Stage::Drafts, &schema::PAGE)
        );
    }

    #[test]
    fn empty_block_without_required_keys() {
        let doc = parse("---\n---\nbody", Stage::Published, &schema::Schema {
            entity: "empty",
            fields: &[],
        })
        .unwrap();
        assert!(doc.metadata.is_empty());
        assert_eq!("body", doc.body);
    }

    #[test]
    fn empty_key_and_duplicates() {
        assert!(matches!(
            parse("---\n: value\n---\n", Stage::Drafts, &schema::PAGE),
            Err(ParseError::EmptyKey { .. })
        ));
        assert_eq!(
            Err(ParseError::DuplicateKey { key: s!("title") }),
            parse("---\ntitle: a\ntitle: b\n---\n", Stage::Drafts, &schema::PAGE)
        );
    }

    #[test]
    fn typed_values_are_validated() {
        assert!(matches!(
            parse("---\nupdatedAt: yesterday\n---\n", Stage::Drafts, &schema::PAGE),
            Err(ParseError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse("---\nserieOrder: two\n---\n", Stage::Drafts, &schema::ARTICLE),
            Err(ParseError::InvalidValue { .. })
        ));
    }

    #[test]
    fn escaped_text_is_unescaped() {
        let raw = "---\ntitle: \"Say \\\"hi\\\"\\nthen leave \\\\o/\"\n---\n";
        let doc = parse(raw, Stage::Drafts, &schema::PAGE).unwrap();
        assert_eq!(
            Some(&Value::Text(s!("Say \"hi\"\nthen leave \\o/"))),
            doc.metadata.get("title")
        );
    }

    #[test]
    fn crlf_and_bom() {
        let raw = "\u{feff}---\r\ntitle: \"t\"\r\n---\r\n\r\nbody\r\n";
        let doc = parse(raw, Stage::Drafts, &schema::PAGE).unwrap();
        assert_eq!(Some("t"), doc.metadata.text("title"));
        assert_eq!("body", doc.body);
    }
}
