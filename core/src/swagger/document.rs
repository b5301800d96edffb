#![deny(missing_docs)]

//! # Document Assembly
//!
//! Builds the Swagger 2.0 document shell and fills it with the rendered
//! paths and definitions.

use crate::error::AppResult;
use crate::ir::ApiDescription;
use crate::swagger::definitions::render_definitions;
use crate::swagger::models::{Document, Info, SecurityScheme};
use crate::swagger::routes::render_service_routes;
use std::collections::BTreeMap;
use std::str::Chars;
use tracing::{debug, trace};

const SWAGGER_VERSION: &str = "2.0";
const JSON_MIME: &str = "application/json";
const SECURITY_SCHEME_NAME: &str = "apiKey";

/// Converts an API description into a Swagger 2.0 document.
///
/// Single pass and infallible: anything that cannot be mapped degrades to a
/// minimal fragment instead of failing the conversion.
pub fn build_document(api: &ApiDescription) -> Document {
    let props = &api.info.properties;
    let info_value = |key: &str| props.get(key).map(|raw| unquote(raw)).unwrap_or_default();

    let mut doc = Document {
        swagger: SWAGGER_VERSION.to_string(),
        info: Info {
            title: info_value("title"),
            version: info_value("version"),
            description: info_value("desc"),
        },
        schemes: vec!["http".to_string(), "https".to_string()],
        consumes: vec![JSON_MIME.to_string()],
        produces: vec![JSON_MIME.to_string()],
        security_definitions: BTreeMap::from([(
            SECURITY_SCHEME_NAME.to_string(),
            api_key_scheme(),
        )]),
        ..Default::default()
    };

    let referenced = render_service_routes(&api.service, &mut doc.paths);
    trace!(referenced = ?referenced, "definitions referenced by request bodies");

    render_definitions(&api.types, &mut doc.definitions);

    debug!(
        service = %api.service.name,
        paths = doc.paths.len(),
        definitions = doc.definitions.len(),
        "built swagger document"
    );
    doc
}

fn api_key_scheme() -> SecurityScheme {
    SecurityScheme {
        type_: "apiKey".to_string(),
        description: "Enter JWT Bearer token **_only_**".to_string(),
        name: "Authorization".to_string(),
        in_: "header".to_string(),
    }
}

/// Unquotes a string literal as written in the API file.
///
/// Double-quoted literals take the usual escapes (`\n`, `\xHH`, `\NNN`,
/// `\uHHHH`, `\UHHHHHHHH` and friends), back-quoted literals are raw with
/// `\r` removed, and single-quoted literals must decode to exactly one
/// character. A malformed literal yields `""`.
pub fn unquote(raw: &str) -> String {
    let raw = raw.trim();
    let Some(quote) = raw.chars().next() else {
        return String::new();
    };
    let Some(inner) = raw.strip_prefix(quote).and_then(|r| r.strip_suffix(quote)) else {
        return String::new();
    };

    let decoded = match quote {
        '`' => (!inner.contains('`')).then(|| inner.replace('\r', "")),
        '"' => unescape(inner, quote),
        '\'' => unescape(inner, quote).filter(|s| s.chars().count() == 1),
        _ => None,
    };
    decoded.unwrap_or_default()
}

/// Decodes the body of a quoted literal. `None` on a raw newline, a bare
/// `quote`, an unknown escape or bytes that do not form UTF-8.
fn unescape(inner: &str, quote: char) -> Option<String> {
    let mut out = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        match c {
            '\n' => return None,
            '\\' => unescape_sequence(&mut chars, quote, &mut out)?,
            c if c == quote => return None,
            c => push_char(&mut out, c),
        }
    }

    String::from_utf8(out).ok()
}

fn unescape_sequence(chars: &mut Chars<'_>, quote: char, out: &mut Vec<u8>) -> Option<()> {
    match chars.next()? {
        'a' => out.push(0x07),
        'b' => out.push(0x08),
        'f' => out.push(0x0c),
        'n' => out.push(b'\n'),
        'r' => out.push(b'\r'),
        't' => out.push(b'\t'),
        'v' => out.push(0x0b),
        '\\' => out.push(b'\\'),
        c if c == quote => push_char(out, c),
        // \xHH and \NNN are raw bytes; the final UTF-8 check rejects stray ones.
        'x' => out.push(u8::try_from(read_digits(chars, 2, 16)?).ok()?),
        c @ '0'..='7' => {
            let value = c.to_digit(8)? * 64 + read_digits(chars, 2, 8)?;
            out.push(u8::try_from(value).ok()?);
        }
        'u' => push_char(out, char::from_u32(read_digits(chars, 4, 16)?)?),
        'U' => push_char(out, char::from_u32(read_digits(chars, 8, 16)?)?),
        _ => return None,
    }
    Some(())
}

fn read_digits(chars: &mut Chars<'_>, count: usize, radix: u32) -> Option<u32> {
    (0..count).try_fold(0u32, |acc, _| {
        let digit = chars.next()?.to_digit(radix)?;
        acc.checked_mul(radix)?.checked_add(digit)
    })
}

fn push_char(out: &mut Vec<u8>, c: char) {
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

impl Document {
    /// Encodes the document as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Encodes the document as YAML.
    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
