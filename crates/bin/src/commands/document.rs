//! Commands reading a JSON document: get, set, forget, dot and flatten.

use std::{fs::File, io, path::Path};

use sundry::{Value, arr};

use crate::cli::{DotArgs, ForgetArgs, GetArgs, InputArgs, SetArgs};
use crate::output::{OutputFormat, print_table, print_value};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Run the get command
pub fn get(args: &GetArgs, format: OutputFormat) -> CommandResult {
    let document = load(&args.input)?;
    let default = args.default.as_deref().map_or(Value::Null, parse_value);
    print_value(&arr::get_or(&document, &args.path, default), format)?;
    Ok(())
}

/// Run the set command
pub fn set(args: &SetArgs, format: OutputFormat) -> CommandResult {
    let mut document = load(&args.input)?;
    let value = parse_value(&args.value);
    if args.if_missing {
        arr::add(&mut document, &args.path, value);
    } else {
        arr::set(&mut document, &args.path, value);
    }
    print_value(&document, format)?;
    Ok(())
}

/// Run the forget command
pub fn forget(args: &ForgetArgs, format: OutputFormat) -> CommandResult {
    let mut document = load(&args.input)?;
    arr::forget_many(&mut document, &args.paths);
    print_value(&document, format)?;
    Ok(())
}

/// Run the dot command
pub fn dot(args: &DotArgs, format: OutputFormat) -> CommandResult {
    let document = load(&args.input)?;

    if args.undot {
        let Value::Map(flat) = &document else {
            return Err(format!("Cannot undot a {} document", document.type_name()).into());
        };
        print_value(&arr::undot(flat), format)?;
        return Ok(());
    }

    let flat = arr::dot(&document, &args.prefix);
    match format {
        OutputFormat::Human => {
            let rows: Vec<Vec<String>> = flat
                .iter()
                .map(|(key, value)| vec![key.clone(), value.to_json_string()])
                .collect();
            print_table(&["KEY", "VALUE"], &rows);
        }
        OutputFormat::Json => print_value(&Value::Map(flat), format)?,
    }
    Ok(())
}

/// Run the flatten command
pub fn flatten(args: &InputArgs, format: OutputFormat) -> CommandResult {
    let document = load(args)?;
    let leaves = arr::flatten(&document);
    match format {
        OutputFormat::Human => leaves.iter().for_each(|leaf| println!("{leaf}")),
        OutputFormat::Json => print_value(&Value::List(leaves), format)?,
    }
    Ok(())
}

/// Read the document from the given file or from standard input.
fn load(input: &InputArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let value = match &input.file {
        Some(path) => read_file(path)?,
        None => serde_json::from_reader(io::stdin().lock())?,
    };
    Ok(value)
}

fn read_file(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let file = File::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    tracing::debug!(path = %path.display(), "Reading document");
    Ok(serde_json::from_reader(io::BufReader::new(file))?)
}

/// Parse a command line value as JSON, keeping it as text when it is not.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::from(raw))
}
