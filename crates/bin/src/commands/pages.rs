//! Pagination command.

use sundry::Cursor;

use crate::cli::PagesArgs;
use crate::output::OutputFormat;

/// Run the pages command
pub fn run(args: &PagesArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let cursor = Cursor::new(args.page, args.page_size, args.total_records);
    let total_pages = cursor.total_pages()?;

    match format {
        OutputFormat::Human => {
            println!("Page:          {}", cursor.current_page());
            println!("Page size:     {}", cursor.page_size());
            println!("Records:       {}", cursor.total_records());
            println!("Total pages:   {total_pages}");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&cursor)?);
        }
    }

    Ok(())
}
