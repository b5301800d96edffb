//! # Parameter Classification
//!
//! Turns the members of a request struct into query, header and body
//! parameters according to their tags. Path-tagged members are skipped here;
//! path parameters come from the path template.
//!
//! The `form`, `header` and `json` checks are independent, so a member tagged
//! with several keys contributes to each location. Every json-tagged member
//! appends its own `body` parameter.

use crate::ir::tags::{Tag, FORM_KEY, HEADER_KEY, JSON_KEY, PATH_KEY};
use crate::ir::{Member, StructType};
use crate::swagger::models::{Parameter, ParameterLocation, SchemaObject};
use crate::swagger::schemas::definition_ref;
use crate::type_mapping::{kind_of, primitive_schema};

const BODY_PARAMETER: &str = "body";

/// Classifies every member of a request struct, in member order.
pub fn classify_request_parameters(request: &StructType) -> Vec<Parameter> {
    let mut parameters = Vec::new();

    for member in &request.members {
        if member.has_tag(PATH_KEY) {
            continue;
        }
        let tags = member.tags();
        let find = |key: &str| tags.iter().find(|t| t.key == key);

        if let Some(tag) = find(FORM_KEY) {
            parameters.push(simple_parameter(member, tag, ParameterLocation::Query));
        }
        if let Some(tag) = find(HEADER_KEY) {
            parameters.push(simple_parameter(member, tag, ParameterLocation::Header));
        }
        if find(JSON_KEY).is_some() && !request.name.is_empty() {
            parameters.push(body_parameter(&request.name));
        }
    }

    parameters
}

/// Builds a query or header parameter from a member and its location tag.
fn simple_parameter(member: &Member, tag: &Tag, location: ParameterLocation) -> Parameter {
    let kind = kind_of(&member.type_name.replace("[]", ""));
    let (type_, format) = primitive_schema(kind, &member.type_name).or_unknown(kind);

    let mut param = Parameter::new(tag.name.clone(), location);
    param.type_ = type_;
    param.format = format;
    param.required = !tag.is_optional();
    param.default = tag.default_value().map(str::to_string);
    param.description = member.description().to_string();
    param
}

/// Builds the whole-body parameter referencing the request definition.
fn body_parameter(request_name: &str) -> Parameter {
    let mut param = Parameter::new(BODY_PARAMETER, ParameterLocation::Body);
    param.required = true;
    param.schema = Some(SchemaObject::reference(definition_ref(request_name)));
    param
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str, type_name: &str, tag: &str) -> Member {
        Member {
            name: name.into(),
            type_name: type_name.into(),
            tag: tag.into(),
            comment: String::new(),
        }
    }

    fn request(members: Vec<Member>) -> StructType {
        StructType {
            name: "Req".into(),
            members,
        }
    }

    #[test]
    fn test_path_members_are_skipped() {
        let params = classify_request_parameters(&request(vec![member(
            "ID",
            "string",
            r#"path:"id""#,
        )]));
        assert!(params.is_empty());
    }

    #[test]
    fn test_path_inside_a_tag_name_is_not_a_path_tag() {
        let params = classify_request_parameters(&request(vec![
            member("File", "string", r#"form:"filepath""#),
            member("Route", "string", r#"header:"X-Path""#),
        ]));

        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "filepath");
        assert_eq!(params[0].location, ParameterLocation::Query);
        assert_eq!(params[1].name, "X-Path");
    }

    #[test]
    fn test_optional_query_with_default() {
        let params = classify_request_parameters(&request(vec![member(
            "Age",
            "int",
            r#"form:"age,optional,default=18""#,
        )]));

        assert_eq!(params.len(), 1);
        let p = &params[0];
        assert_eq!(p.name, "age");
        assert_eq!(p.location, ParameterLocation::Query);
        assert_eq!(p.type_, "integer");
        assert_eq!(p.format, "int32");
        assert!(!p.required);
        assert_eq!(p.default.as_deref(), Some("18"));
    }

    #[test]
    fn test_header_required_with_description() {
        let mut m = member("Token", "string", r#"header:"X-Token""#);
        m.comment = "//auth token".into();
        let params = classify_request_parameters(&request(vec![m]));

        assert_eq!(params[0].location, ParameterLocation::Header);
        assert!(params[0].required);
        assert_eq!(params[0].type_, "string");
        assert_eq!(params[0].format, "");
        assert_eq!(params[0].description, "auth token");
    }

    #[test]
    fn test_slice_query_uses_element_kind() {
        let params = classify_request_parameters(&request(vec![member(
            "Ids",
            "[]int64",
            r#"form:"ids""#,
        )]));
        assert_eq!(params[0].type_, "integer");
        assert_eq!(params[0].format, "int64");
    }

    #[test]
    fn test_struct_query_falls_back_to_unknown() {
        let params = classify_request_parameters(&request(vec![member(
            "Filter",
            "Filter",
            r#"form:"filter""#,
        )]));
        assert_eq!(params[0].type_, "invalid");
        assert_eq!(params[0].format, "UNKNOWN");
    }

    #[test]
    fn test_each_json_member_appends_a_body_parameter() {
        let params = classify_request_parameters(&request(vec![
            member("Name", "string", r#"json:"name""#),
            member("Email", "string", r#"json:"email""#),
        ]));

        assert_eq!(params.len(), 2);
        for p in &params {
            assert_eq!(p.name, "body");
            assert_eq!(p.location, ParameterLocation::Body);
            assert!(p.required);
            assert_eq!(
                p.schema.as_ref().and_then(|s| s.ref_path.as_deref()),
                Some("#/definitions/Req")
            );
        }
    }

    #[test]
    fn test_multiple_keys_are_independent() {
        let params = classify_request_parameters(&request(vec![member(
            "Lang",
            "string",
            r#"form:"lang" header:"Accept-Language""#,
        )]));
        let locations: Vec<_> = params.iter().map(|p| p.location).collect();
        assert_eq!(
            locations,
            vec![ParameterLocation::Query, ParameterLocation::Header]
        );
    }
}
