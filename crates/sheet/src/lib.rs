//! Cell/Sheet/Book model for socialdash
//!
//! Provides the in-memory workbook model the detection pipeline runs on:
//! raw 2-D grids of [`CellValue`]s per sheet, an ordered [`Book`] of
//! sheets, and an XLSX reader that materializes datetime cells as real
//! dates.
//!
//! # Examples
//!
//! ```
//! use socialdash_sheet::{Book, Sheet};
//!
//! let mut book = Book::new();
//! book.add_sheet("Facebook", Sheet::from_data(vec![
//!     vec!["Date", "Followers", "Reach"],
//!     vec!["2024-01-01", "100", "500"],
//! ])).unwrap();
//!
//! assert_eq!(book.sheet_count(), 1);
//! ```

mod book;
mod cell;
mod error;
mod sheet;
#[cfg(not(target_arch = "wasm32"))]
mod xlsx;

/// Re-export book type.
pub use book::Book;
/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export sheet type.
pub use sheet::Sheet;
