//! Undoes the line wrapping `sp_helptext` applies to object definitions
//!
//! `sp_helptext` returns one row per source line, but any line longer than
//! [`ROW_LENGTH_FOR_SP_HELPTEXT`] characters is cut into several rows with no
//! continuation marker. The only signal is a row of exactly that length.

/// Width at which `sp_helptext` cuts long lines into separate rows
pub const ROW_LENGTH_FOR_SP_HELPTEXT: usize = 255;

/// Rebuilds the definition text from `sp_helptext` rows
///
/// `None` stands for a row that carried no usable column 0 and is skipped.
/// A row of exactly 255 characters marks the next row as its continuation,
/// which is glued on without a line break. A continuation that starts with
/// `UNION` or `--` is kept on its own line with a blank line before it.
///
/// ```
/// use sql_helptext::reassemble::build_definition;
///
/// let rows = vec![Some("CREATE VIEW v AS"), None, Some("SELECT 1")];
/// assert_eq!(build_definition(rows), "CREATE VIEW v AS\nSELECT 1");
/// ```
pub fn build_definition<I, S>(rows: I) -> String
where
	I: IntoIterator<Item = Option<S>>,
	S: AsRef<str>,
{
	let mut lines: Vec<String> = Vec::new();
	let mut is_split_line = false;

	for line in rows.into_iter().flatten() {
		let line = line.as_ref().trim_end_matches(&['\r', '\n'][..]);
		let trimmed = line.trim();

		let mut merge = is_split_line && !trimmed.is_empty();
		if merge && starts_new_statement(trimmed) {
			lines.push(String::new());
			merge = false;
		}

		match lines.last_mut() {
			Some(last) if merge => last.push_str(line),
			_ => lines.push(line.to_owned()),
		}

		is_split_line = !trimmed.is_empty()
			&& line.chars().count() == ROW_LENGTH_FOR_SP_HELPTEXT;
	}

	lines.join("\n")
}

fn starts_new_statement(trimmed: &str) -> bool {
	trimmed
		.get(..5)
		.map_or(false, |prefix| prefix.eq_ignore_ascii_case("UNION"))
		|| trimmed.starts_with("--")
}
