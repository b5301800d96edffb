#![deny(missing_docs)]

//! # Generate Command
//!
//! Reads an IR document, converts it and writes the Swagger 2.0 document.
//! With no input path the IR is read from stdin; with no output path the
//! document is printed to stdout.

use crate::error::{CliError, CliResult};
use apiswag_core::{build_document, ApiDescription, Document};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Output encoding.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the IR JSON document. `-` or absent reads stdin.
    #[clap(long, env = "APISWAG_INPUT")]
    pub input: Option<PathBuf>,

    /// Output path for the Swagger document. Absent prints to stdout.
    #[clap(long, env = "APISWAG_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output encoding. Defaults to the output extension, else JSON.
    #[clap(long, value_enum, env = "APISWAG_FORMAT")]
    pub format: Option<OutputFormat>,
}

/// Executes the generate command.
pub fn execute(args: &GenerateArgs) -> CliResult<()> {
    let content = read_input(args.input.as_deref())?;
    let api = ApiDescription::from_json(&content)?;

    let document = build_document(&api);
    tracing::info!(
        service = %api.service.name,
        paths = document.paths.len(),
        definitions = document.definitions.len(),
        "converted API description"
    );

    let format = resolve_format(args.format, args.output.as_deref());
    let rendered = render(&document, format)?;

    match &args.output {
        Some(out_path) => {
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(out_path, rendered)?;
            tracing::info!(output = ?out_path, "swagger document written");
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn read_input(input: Option<&Path>) -> CliResult<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(CliError::General(format!(
                    "Input file not found: {:?}",
                    path
                )));
            }
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Picks the explicit format, else infers it from the output extension.
fn resolve_format(explicit: Option<OutputFormat>, output: Option<&Path>) -> OutputFormat {
    if let Some(format) = explicit {
        return format;
    }
    match output.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => OutputFormat::Yaml,
        _ => OutputFormat::Json,
    }
}

fn render(document: &Document, format: OutputFormat) -> CliResult<String> {
    let rendered = match format {
        OutputFormat::Json => document.to_json_pretty()?,
        OutputFormat::Yaml => document.to_yaml()?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const IR: &str = r#"{
        "info": { "properties": { "title": "\"demo\"", "version": "\"v1\"" } },
        "service": {
            "name": "demo-api",
            "groups": [{
                "routes": [{
                    "path": "/ping/:id",
                    "method": "get",
                    "handler": "Ping",
                    "response_type": { "kind": "struct", "name": "Pong", "members": [] }
                }]
            }]
        },
        "types": [{
            "name": "Pong",
            "members": [{ "name": "Msg", "type": "string", "tag": "json:\"msg\"" }]
        }]
    }"#;

    #[test]
    fn test_generate_json_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("api.json");
        let output = dir.path().join("nested").join("swagger.json");
        fs::write(&input, IR).unwrap();

        let args = GenerateArgs {
            input: Some(input),
            output: Some(output.clone()),
            format: None,
        };
        execute(&args).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["info"]["title"], "demo");
        assert_eq!(
            written["paths"]["/ping/{id}"]["get"]["operationId"],
            "Ping"
        );
        assert_eq!(written["definitions"]["Pong"]["required"][0], "msg");
    }

    #[test]
    fn test_generate_yaml_by_extension() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("api.json");
        let output = dir.path().join("swagger.yaml");
        fs::write(&input, IR).unwrap();

        let args = GenerateArgs {
            input: Some(input),
            output: Some(output.clone()),
            format: None,
        };
        execute(&args).unwrap();

        let yaml = fs::read_to_string(&output).unwrap();
        assert!(yaml.contains("operationId: Ping"));
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempdir().unwrap();
        let args = GenerateArgs {
            input: Some(dir.path().join("missing.json")),
            output: None,
            format: None,
        };
        match execute(&args).unwrap_err() {
            CliError::General(msg) => assert!(msg.contains("Input file not found")),
            other => panic!("Wrong error type: {}", other),
        }
    }

    #[test]
    fn test_invalid_ir_is_core_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.json");
        fs::write(&input, "{ not json").unwrap();
        let args = GenerateArgs {
            input: Some(input),
            output: None,
            format: None,
        };
        assert!(matches!(execute(&args), Err(CliError::Core(_))));
    }

    #[test]
    fn test_resolve_format() {
        assert_eq!(resolve_format(None, None), OutputFormat::Json);
        assert_eq!(
            resolve_format(None, Some(Path::new("out.yml"))),
            OutputFormat::Yaml
        );
        assert_eq!(
            resolve_format(Some(OutputFormat::Json), Some(Path::new("out.yaml"))),
            OutputFormat::Json
        );
    }
}
