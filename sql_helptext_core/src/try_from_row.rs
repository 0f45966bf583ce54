use super::{Row, SqlError};

/// Read access to the columns of one result row
pub trait ColumnSource {
	fn column_count(&self) -> usize;

	/// Text in column `idx`, `None` for SQL NULL. An index past the last column is an error
	fn try_get_str(&self, idx: usize) -> Result<Option<&str>, SqlError>;
}

impl ColumnSource for Row {
	fn column_count(&self) -> usize {
		self.columns().len()
	}

	fn try_get_str(&self, idx: usize) -> Result<Option<&str>, SqlError> {
		self.try_get::<&str, _>(idx)
	}
}

/// Converts from a result row. Derive it with `#[derive(TryFromRow)]` to read field `n` from column `n`
pub trait TryFromRow: Sized {
	fn from_row<R: ColumnSource>(row: &R) -> Result<Self, SqlError>;
}

/// Reads one column of a row into an owned value
///
/// `Option<String>` maps SQL NULL to `None`, `String` treats NULL as a conversion error
pub trait FromColumn: Sized {
	fn from_column<R: ColumnSource>(row: &R, idx: usize) -> Result<Self, SqlError>;
}

impl FromColumn for Option<String> {
	fn from_column<R: ColumnSource>(row: &R, idx: usize) -> Result<Self, SqlError> {
		Ok(row.try_get_str(idx)?.map(ToOwned::to_owned))
	}
}

impl FromColumn for String {
	fn from_column<R: ColumnSource>(row: &R, idx: usize) -> Result<Self, SqlError> {
		<Option<String> as FromColumn>::from_column(row, idx)?
			.ok_or_else(|| SqlError::Conversion(format!("column {} is NULL", idx).into()))
	}
}
