//! Pagination descriptor.
//!
//! A [`Cursor`] records where a caller is within a paged result set. The
//! page count is derived from the other fields on every read, so it can never
//! go stale after a setter call.
//!
//! ```
//! use sundry::Cursor;
//!
//! let mut cursor = Cursor::new(1, 10, 100);
//! assert_eq!(cursor.total_pages()?, 10);
//!
//! cursor.set_total_records(105).set_current_page(2);
//! assert_eq!(cursor.total_pages()?, 10);
//! # Ok::<(), sundry::Error>(())
//! ```

use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};
use thiserror::Error;

/// Errors raised when deriving pagination values.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// Page count requested while the page size is zero
    #[error("Cannot compute total pages with a page size of zero")]
    ZeroPageSize,
}

impl CursorError {
    /// Check if this error comes from an unusable page size
    pub fn is_page_size_error(&self) -> bool {
        matches!(self, CursorError::ZeroPageSize)
    }
}

impl From<CursorError> for crate::Error {
    fn from(err: CursorError) -> Self {
        crate::Error::Cursor(err)
    }
}

/// Current page, page size and total record count of a paged listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "CursorFields")]
pub struct Cursor {
    current_page: u64,
    page_size: u64,
    total_records: u64,
}

impl Cursor {
    pub fn new(current_page: u64, page_size: u64, total_records: u64) -> Self {
        Self {
            current_page,
            page_size,
            total_records,
        }
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn set_current_page(&mut self, current_page: u64) -> &mut Self {
        self.current_page = current_page;
        self
    }

    pub fn set_page_size(&mut self, page_size: u64) -> &mut Self {
        self.page_size = page_size;
        self
    }

    pub fn set_total_records(&mut self, total_records: u64) -> &mut Self {
        self.total_records = total_records;
        self
    }

    /// Number of full pages: `total_records / page_size`, rounded down.
    ///
    /// A trailing partial page is not counted.
    pub fn total_pages(&self) -> Result<u64, CursorError> {
        self.total_records
            .checked_div(self.page_size)
            .ok_or(CursorError::ZeroPageSize)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        CursorFields::default().into()
    }
}

impl Serialize for Cursor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let total_pages = self.total_pages().ok();
        let len = if total_pages.is_some() { 4 } else { 3 };

        let mut state = serializer.serialize_struct("Cursor", len)?;
        state.serialize_field("currentPage", &self.current_page)?;
        state.serialize_field("pageSize", &self.page_size)?;
        state.serialize_field("totalRecords", &self.total_records)?;
        match total_pages {
            Some(pages) => state.serialize_field("totalPages", &pages)?,
            None => state.skip_field("totalPages")?,
        }
        state.end()
    }
}

/// Wire form of a [`Cursor`]. A `totalPages` field is accepted and ignored.
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CursorFields {
    current_page: u64,
    page_size: u64,
    total_records: u64,
}

impl Default for CursorFields {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: 1,
            total_records: 0,
        }
    }
}

impl From<CursorFields> for Cursor {
    fn from(fields: CursorFields) -> Self {
        Cursor::new(fields.current_page, fields.page_size, fields.total_records)
    }
}
