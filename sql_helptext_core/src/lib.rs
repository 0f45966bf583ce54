#![forbid(unsafe_code)]
//! Helper types for reading tiberius result sets into Rust structs
//!
//! Provides the [`TryFromRow`] trait which converts a row into a struct, the [`FromColumn`] trait which reads a single owned column out of one, and [`ColumnSource`], the view of a row both of them read through. [`ColumnSource`] is implemented for [`tiberius::Row`]
//!
//! Reexports [`tiberius::error::Error`] as SqlError (the Result::Err of the return from [`TryFromRow::from_row`]) and [`tiberius::Row`]
//!
//! [`tiberius::error::Error`]: https://docs.rs/tiberius/0.12/tiberius/error/enum.Error.html
//! [`tiberius::Row`]: https://docs.rs/tiberius/0.12/tiberius/struct.Row.html
//! [`TryFromRow::from_row`]: ./trait.TryFromRow.html#tymethod.from_row
//! [`TryFromRow`]: ./trait.TryFromRow.html
//! [`FromColumn`]: ./trait.FromColumn.html
//! [`ColumnSource`]: ./trait.ColumnSource.html

//reexports
pub use sql_helptext_derive::*;
pub use tiberius::{error::Error as SqlError, Row};

/// Implementation of `TryFromRow` and `FromColumn` for text columns
mod try_from_row;
pub use try_from_row::{ColumnSource, FromColumn, TryFromRow};
