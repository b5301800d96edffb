//! # Route Rendering
//!
//! Builds one operation per route and files it under the rewritten path
//! template. Routes sharing a template accumulate into one path item.

use crate::ir::{Route, RouteGroup, ServiceDescription};
use crate::swagger::document::unquote;
use crate::swagger::models::{Operation, PathItem, Response, SchemaObject};
use crate::swagger::params::classify_request_parameters;
use crate::swagger::paths::extract_path_parameters;
use crate::swagger::schemas::definition_ref;
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

const SUCCESS_STATUS: &str = "200";
const SUCCESS_DESCRIPTION: &str = "A successful response.";
const GROUP_ANNOTATION: &str = "group";
const DESCRIPTION_PROPERTY: &str = "description";

/// HTTP methods that have a slot in a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Case-insensitive parse. Any other method yields `None`.
    pub fn parse(method: &str) -> Option<Self> {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "DELETE" => Some(HttpMethod::Delete),
            _ => None,
        }
    }

    /// Stores `operation` in this method's slot.
    pub fn assign(self, item: &mut PathItem, operation: Operation) {
        let slot = match self {
            HttpMethod::Get => &mut item.get,
            HttpMethod::Post => &mut item.post,
            HttpMethod::Put => &mut item.put,
            HttpMethod::Delete => &mut item.delete,
        };
        *slot = Some(operation);
    }
}

/// Renders every route of every group into `paths`.
///
/// Returns the set of definitions referenced by body parameters. The set is
/// informational only; it is never used to filter definitions.
pub fn render_service_routes(
    service: &ServiceDescription,
    paths: &mut IndexMap<String, PathItem>,
) -> BTreeSet<String> {
    let mut referenced = BTreeSet::new();

    for group in &service.groups {
        for route in &group.routes {
            let (template, operation) = render_route(service, group, route);

            for param in &operation.parameters {
                let ref_path = param.schema.as_ref().and_then(|s| s.ref_path.as_ref());
                if let Some(ref_path) = ref_path.filter(|r| !r.is_empty()) {
                    referenced.insert(ref_path.clone());
                }
            }

            let item = paths.entry(template.clone()).or_default();
            match HttpMethod::parse(&route.method) {
                Some(method) => {
                    debug!(
                        path = %template,
                        method = ?method,
                        handler = %route.handler,
                        "rendered route"
                    );
                    method.assign(item, operation);
                }
                None => {
                    warn!(
                        path = %template,
                        method = %route.method,
                        "unsupported HTTP method, operation dropped"
                    );
                }
            }
        }
    }

    referenced
}

/// Builds the rewritten path template and the operation for one route.
pub fn render_route(
    service: &ServiceDescription,
    group: &RouteGroup,
    route: &Route,
) -> (String, Operation) {
    let extracted = extract_path_parameters(&route.path);
    let mut parameters = extracted.parameters;
    if let Some(request) = route.request_struct() {
        parameters.extend(classify_request_parameters(request));
    }

    let tag = match group.annotation.get(GROUP_ANNOTATION) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => service.name.clone(),
    };

    let description = if route.at_doc.properties.is_empty() {
        String::new()
    } else {
        route
            .at_doc
            .properties
            .get(DESCRIPTION_PROPERTY)
            .map(|raw| unquote(raw))
            .unwrap_or_default()
    };

    let operation = Operation {
        summary: route.joined_doc(),
        description,
        operation_id: route.handler.clone(),
        responses: BTreeMap::from([(SUCCESS_STATUS.to_string(), success_response(route))]),
        parameters,
        tags: vec![tag],
    };

    (extracted.template, operation)
}

fn success_response(route: &Route) -> Response {
    let schema = match route.response_type.as_ref() {
        Some(ty) if !ty.name().is_empty() => SchemaObject::reference(definition_ref(ty.name())),
        _ => SchemaObject::default(),
    };
    Response {
        description: SUCCESS_DESCRIPTION.to_string(),
        schema,
    }
}
