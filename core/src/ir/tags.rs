//! # Field Tags
//!
//! Parser for the tag micro-grammar attached to struct members, e.g.
//! `json:"age,optional,default=18" form:"age"`.
//!
//! Each `key:"value"` pair becomes a [`Tag`]. The value holds the parameter or
//! property name followed by comma separated options.

use regex::Regex;
use std::sync::OnceLock;

/// Tag key selecting a path parameter.
pub const PATH_KEY: &str = "path";
/// Tag key selecting a query parameter.
pub const FORM_KEY: &str = "form";
/// Tag key selecting a header parameter.
pub const HEADER_KEY: &str = "header";
/// Tag key selecting a JSON body property.
pub const JSON_KEY: &str = "json";

const DEFAULT_OPTION: &str = "default";
const OPTIONAL_OPTION: &str = "optional";
const OPTIONS_OPTION: &str = "options";
const OPTION_SEPARATOR: char = ',';
const CHOICE_SEPARATOR: char = '|';
const EQUAL_TOKEN: char = '=';

/// A single option inside a tag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOption {
    /// A bare identifier, e.g. `optional`.
    Flag(String),
    /// A `key=value` pair, e.g. `default=18`.
    Value {
        /// Option name.
        key: String,
        /// Raw option value, never converted.
        value: String,
    },
}

impl TagOption {
    /// Parses one option. Anything that is not exactly `key=value` is a flag.
    pub fn parse(raw: &str) -> Self {
        let mut segs = raw.split(EQUAL_TOKEN);
        match (segs.next(), segs.next(), segs.next()) {
            (Some(key), Some(value), None) => TagOption::Value {
                key: key.to_string(),
                value: value.to_string(),
            },
            _ => TagOption::Flag(raw.to_string()),
        }
    }

    /// The option name (flag text or pair key).
    pub fn name(&self) -> &str {
        match self {
            TagOption::Flag(name) => name,
            TagOption::Value { key, .. } => key,
        }
    }

    /// The `|` separated choices of an `options=a|b|c` option.
    pub fn choices(&self) -> Option<Vec<&str>> {
        match self {
            TagOption::Value { key, value } if key == OPTIONS_OPTION => {
                Some(value.split(CHOICE_SEPARATOR).collect())
            }
            _ => None,
        }
    }
}

/// One `key:"name,opt,..."` entry of a raw tag string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Tag key (`path`, `form`, `header`, `json`, ...).
    pub key: String,
    /// Parameter or property name.
    pub name: String,
    /// Options in declaration order.
    pub options: Vec<TagOption>,
}

impl Tag {
    /// Extracts every tag from a raw tag string, in order.
    ///
    /// Surrounding back quotes are tolerated. Malformed fragments are ignored.
    pub fn parse_all(raw: &str) -> Vec<Tag> {
        static TAG_RE: OnceLock<Regex> = OnceLock::new();
        let tag_re = TAG_RE.get_or_init(|| {
            Regex::new(r#"([A-Za-z_][A-Za-z0-9_]*):"([^"]*)""#).expect("Invalid regex")
        });

        tag_re
            .captures_iter(raw)
            .filter_map(|caps| {
                let key = caps.get(1)?.as_str();
                let value = caps.get(2)?.as_str();
                Some(Tag::parse(key, value))
            })
            .collect()
    }

    /// Builds a tag from its key and quoted value body.
    pub fn parse(key: &str, value: &str) -> Self {
        let mut parts = value.split(OPTION_SEPARATOR);
        let name = parts.next().unwrap_or_default().trim().to_string();
        let options = parts
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(TagOption::parse)
            .collect();

        Tag {
            key: key.to_string(),
            name,
            options,
        }
    }

    /// True when the tag carries at least one option.
    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// True when an `optional` flag is present.
    pub fn is_optional(&self) -> bool {
        self.options.iter().any(|o| o.name() == OPTIONAL_OPTION)
    }

    /// The value of the last `default=...` option.
    ///
    /// Every option is visited; a later `default=` overrides an earlier one.
    pub fn default_value(&self) -> Option<&str> {
        let mut found = None;
        for option in &self.options {
            if let TagOption::Value { key, value } = option {
                if key == DEFAULT_OPTION {
                    found = Some(value.as_str());
                }
            }
        }
        found
    }

    /// The choices of an `options=` option, if any. Not projected into output.
    pub fn choices(&self) -> Option<Vec<&str>> {
        self.options.iter().find_map(TagOption::choices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiple_tags() {
        let tags = Tag::parse_all(r#"json:"name,optional" form:"name""#);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].key, "json");
        assert_eq!(tags[0].name, "name");
        assert!(tags[0].is_optional());
        assert_eq!(tags[1].key, "form");
        assert!(!tags[1].has_options());
    }

    #[test]
    fn test_backquoted_raw_tag() {
        let tags = Tag::parse_all(r#"`path:"id"`"#);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].key, "path");
        assert_eq!(tags[0].name, "id");
    }

    #[test]
    fn test_default_value_is_raw_string() {
        let tag = Tag::parse("form", "age,optional,default=18");
        assert_eq!(tag.default_value(), Some("18"));
        assert!(tag.is_optional());
    }

    #[test]
    fn test_last_default_wins() {
        let tag = Tag::parse("json", "size,default=1,default=2");
        assert_eq!(tag.default_value(), Some("2"));
    }

    #[test]
    fn test_options_choices() {
        let tag = Tag::parse("json", "gender,options=male|female");
        assert_eq!(tag.choices(), Some(vec!["male", "female"]));
        assert!(!tag.is_optional());
    }

    #[test]
    fn test_malformed_pair_is_flag() {
        assert_eq!(
            TagOption::parse("default=a=b"),
            TagOption::Flag("default=a=b".into())
        );
        let tag = Tag::parse("json", "x,default=a=b");
        assert_eq!(tag.default_value(), None);
    }

    #[test]
    fn test_empty_and_garbage() {
        assert!(Tag::parse_all("").is_empty());
        assert!(Tag::parse_all("not a tag").is_empty());
        let tags = Tag::parse_all(r#"json:"""#);
        assert_eq!(tags[0].name, "");
    }
}
