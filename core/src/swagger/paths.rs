//! # Path Parameters
//!
//! Rewrites `:name` path segments to `{name}` placeholders and emits one
//! required string path parameter per segment.

use crate::swagger::models::{Parameter, ParameterLocation};

/// A rewritten path template plus its path parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedPath {
    /// Template with `{name}` placeholders.
    pub template: String,
    /// Path parameters in segment order.
    pub parameters: Vec<Parameter>,
}

/// Counts `:` characters in a path template.
pub fn count_params(path: &str) -> usize {
    path.bytes().filter(|b| *b == b':').count()
}

/// Extracts path parameters from a template such as `/user/:id/book/:book`.
pub fn extract_path_parameters(path: &str) -> ExtractedPath {
    let mut template = path.to_string();
    let mut parameters = Vec::new();

    if count_params(path) == 0 {
        return ExtractedPath {
            template,
            parameters,
        };
    }

    for segment in path.split('/') {
        let Some(key) = segment.strip_prefix(':') else {
            continue;
        };
        template = template.replacen(&format!(":{}", key), &format!("{{{}}}", key), 1);

        let mut param = Parameter::new(key, ParameterLocation::Path);
        param.required = true;
        param.type_ = "string".to_string();
        parameters.push(param);
    }

    ExtractedPath {
        template,
        parameters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_params() {
        assert_eq!(count_params("/a/:b/c/:d"), 2);
        assert_eq!(count_params("/plain"), 0);
    }

    #[test]
    fn test_no_parameters() {
        let out = extract_path_parameters("/users");
        assert_eq!(out.template, "/users");
        assert!(out.parameters.is_empty());
    }

    #[test]
    fn test_rewrites_in_order() {
        let out = extract_path_parameters("/shop/:shop/item/:item");
        assert_eq!(out.template, "/shop/{shop}/item/{item}");

        let names: Vec<_> = out.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["shop", "item"]);
        for p in &out.parameters {
            assert!(p.required);
            assert_eq!(p.type_, "string");
            assert_eq!(p.location, ParameterLocation::Path);
        }
    }

    #[test]
    fn test_prefix_names_replace_first_occurrence_only() {
        let out = extract_path_parameters("/:id/:idx");
        assert_eq!(out.template, "/{id}/{idx}");
        assert_eq!(out.parameters.len(), 2);
        assert_eq!(out.parameters[1].name, "idx");
    }
}
