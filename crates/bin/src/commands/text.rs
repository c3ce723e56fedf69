//! Text commands: slug and random.

use sundry::{Value, text};

use crate::cli::{RandomArgs, SlugArgs};
use crate::output::{OutputFormat, print_value};

/// Run the slug command
pub fn slug(args: &SlugArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let slug = text::slug(&args.title, &args.separator);
    print_value(&Value::from(slug), format)?;
    Ok(())
}

/// Run the random command
pub fn random(args: &RandomArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let token = if args.quick {
        text::quick_random(args.length)
    } else {
        text::random(args.length)?
    };
    if token.len() < args.length {
        tracing::warn!(
            requested = args.length,
            generated = token.len(),
            "Quick random tokens are capped by their character pool"
        );
    }
    print_value(&Value::from(token), format)?;
    Ok(())
}
