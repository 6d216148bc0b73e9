//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

use crate::cli::{DerefArgs, ExampleArgs, HrefArgs, RefsArgs, RenderArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use schemata_core::{parse_value, Format, Schema};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Read a JSON or YAML document from disk, picking the parser by extension
pub fn load_schema(path: &Path, config: &Config) -> Result<Schema> {
    let _timer = Timer::with_details("load_schema", &path.display().to_string());

    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = Format::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = fs::read_to_string(path)?;
    let value = parse_value(&content, format)?;
    let schema = Schema::from_value_with_config(value, config.schema.clone())?;

    info!(
        path = %path.display(),
        format = ?format,
        definitions = schema.definition_ids().len(),
        "Loaded schema"
    );
    Ok(schema)
}

/// Handle the render command
pub fn handle_render(args: RenderArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let schema = load_schema(&args.file, config)?;
    let format = args.format.unwrap_or(config.output.format);
    output.write(&schema.render(format.into())?)
}

/// Handle the example command
///
/// A single requested definition prints its example directly; otherwise the
/// examples are keyed by definition id. Definitions without an example print
/// as `null`.
pub fn handle_example(args: ExampleArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let mut schema = load_schema(&args.file, config)?;
    let format = args.format.unwrap_or(config.output.format);

    let result = if let [id] = args.definitions.as_slice() {
        schema.example_for_definition(id)?.unwrap_or(Value::Null)
    } else {
        let ids: Vec<String> = if args.definitions.is_empty() {
            schema.definition_ids().into_iter().map(str::to_string).collect()
        } else {
            args.definitions
        };

        let mut examples = Map::new();
        for id in ids {
            let example = schema.example_for_definition(&id)?;
            examples.insert(id, example.unwrap_or(Value::Null));
        }
        Value::Object(examples)
    };

    debug!(stats = ?schema.example_cache_stats(), "Example synthesis finished");
    output.data(&result, format)
}

/// Handle the deref command
pub fn handle_deref(args: DerefArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let schema = load_schema(&args.file, config)?;
    let format = args.format.unwrap_or(config.output.format);

    let (key, value) = schema.dereference_pointer(&args.pointer)?;

    let mut result = Map::new();
    result.insert("key".to_string(), key.map(Value::String).unwrap_or(Value::Null));
    result.insert("value".to_string(), value);
    output.data(&Value::Object(result), format)
}

/// Handle the href command
pub fn handle_href(args: HrefArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let schema = load_schema(&args.file, config)?;
    match schema.href() {
        Some(href) => output.writeln(href),
        None => Err(Error::HrefMissing { path: args.file }),
    }
}

/// Handle the refs command
pub fn handle_refs(args: RefsArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let schema = load_schema(&args.file, config)?;
    let pointers = schema.references();

    if pointers.is_empty() {
        return output.success("No references found");
    }

    let mut failures = 0;
    for pointer in &pointers {
        match schema.dereference_pointer(pointer) {
            Ok((key, _)) => {
                let key = key.as_deref().unwrap_or("-");
                output.status(true, &format!("{} -> {}", pointer, key))?;
            }
            Err(e) => {
                failures += 1;
                output.status(false, &format!("{}: {}", pointer, e))?;
            }
        }
    }

    if failures > 0 {
        return Err(Error::UnresolvedReferences { count: failures });
    }
    output.success(&format!("All {} references resolve", pointers.len()))
}
