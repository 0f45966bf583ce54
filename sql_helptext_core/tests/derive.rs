use sql_helptext_core::*;

/// In-memory row, one entry per column
struct TextRow(Vec<Option<&'static str>>);

impl ColumnSource for TextRow {
	fn column_count(&self) -> usize {
		self.0.len()
	}

	fn try_get_str(&self, idx: usize) -> Result<Option<&str>, SqlError> {
		self.0
			.get(idx)
			.copied()
			.ok_or_else(|| SqlError::Conversion(format!("no column {}", idx).into()))
	}
}

#[derive(Debug, TryFromRow)]
struct Named {
	schema: String,
	name: Option<String>,
}

#[derive(Debug, TryFromRow)]
struct Tuple(String, Option<String>);

#[derive(Debug, TryFromRow)]
struct Unit;

#[test]
fn named_fields_read_columns_in_order() {
	let row = Named::from_row(&TextRow(vec![Some("dbo"), Some("usp_A")])).expect("row");
	assert_eq!(row.schema, "dbo");
	assert_eq!(row.name.as_deref(), Some("usp_A"));
}

#[test]
fn tuple_fields_read_columns_in_order() {
	let row = Tuple::from_row(&TextRow(vec![Some("dbo"), None])).expect("row");
	assert_eq!(row.0, "dbo");
	assert!(row.1.is_none());
}

#[test]
fn unit_struct_reads_nothing() {
	assert!(Unit::from_row(&TextRow(Vec::new())).is_ok());
}

#[test]
fn null_in_required_column_is_an_error() {
	let err = Named::from_row(&TextRow(vec![None, Some("usp_A")])).unwrap_err();
	assert!(err.to_string().contains("column 0 is NULL"));
}

#[test]
fn missing_column_is_an_error() {
	assert!(Named::from_row(&TextRow(vec![Some("dbo")])).is_err());
}
