//! Reads the source of a SQL Server stored procedure, view or function through `sp_helptext` and undoes the line wrapping it applies
//!
//! [`reassemble::build_definition`] is the part that matters, the rest is plumbing around a single `EXEC sp_helptext` call

pub mod config;

pub mod connection;

pub mod error;

mod mssql_select_types;

pub mod reassemble;

use std::{
	fmt,
	path::PathBuf,
};
use structopt::{
	clap::ArgGroup,
	StructOpt,
};
use tiberius::Config;

use error::{HelpTextError, Result};

#[derive(Debug, StructOpt)]
#[structopt(name = "sql_helptext")]
#[structopt(group = ArgGroup::with_name("object").required(true))]
/// Prints the source of a SQL Server stored procedure, view or function
///
/// Connection settings come from --connection-string / SQL_HELPTEXT_CONNECTION_STRING or a TOML config file (--config, default ~/.sql_helptext/sql_helptext.toml)
pub struct Opt {
	/// Stored procedure name, may include the schema (dbo.usp_GetOrders)
	#[structopt(long = "proc", group = "object")]
	pub procedure: Option<String>,

	/// View name
	#[structopt(long, group = "object")]
	pub view: Option<String>,

	/// Function name
	#[structopt(long = "func", group = "object")]
	pub function: Option<String>,

	/// Write the definition to this file instead of stdout
	#[structopt(short, long, parse(from_os_str))]
	pub output: Option<PathBuf>,

	/// ADO.NET connection string, takes precedence over the config file
	#[structopt(long, env = "SQL_HELPTEXT_CONNECTION_STRING", hide_env_values = true)]
	pub connection_string: Option<String>,

	/// TOML file with a [connection] table
	#[structopt(short, long, parse(from_os_str))]
	pub config: Option<PathBuf>,

	/// Log more to stderr (-v, -vv, -vvv)
	#[structopt(short, long, parse(from_occurrences))]
	pub verbose: u8,
}

/// Which of the object flags was given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
	Procedure,
	View,
	Function,
}

impl fmt::Display for ObjectKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			ObjectKind::Procedure => "stored procedure",
			ObjectKind::View => "view",
			ObjectKind::Function => "function",
		};
		f.write_str(s)
	}
}

impl Opt {
	/// The requested object, `None` only when no object flag was parsed
	pub fn object(&self) -> Option<(ObjectKind, &str)> {
		if let Some(name) = &self.procedure {
			Some((ObjectKind::Procedure, name.as_str()))
		} else if let Some(name) = &self.view {
			Some((ObjectKind::View, name.as_str()))
		} else if let Some(name) = &self.function {
			Some((ObjectKind::Function, name.as_str()))
		} else {
			None
		}
	}

	pub fn get_config(&self) -> Result<Config> {
		config::resolve_config(self.connection_string.as_deref(), self.config.as_deref())
	}

	/// Writes the definition to the output file, or stdout when there is none
	///
	/// If the file cannot be written the definition goes to stdout anyway and the error is still returned
	pub fn make_output(&self, definition: &str) -> Result<()> {
		match &self.output {
			Some(path) => match std::fs::write(path, definition) {
				Ok(()) => {
					tracing::info!(?path, bytes = definition.len(), "definition written");
					println!("definition saved to: {}", path.display());
					Ok(())
				},
				Err(e) => {
					eprintln!("Error ({}) while writing output file. Writing output to stdout just in case", e);
					println!("{}", definition);
					Err(HelpTextError::io(path, e))
				},
			},
			None => {
				println!("{}", definition);
				Ok(())
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn opt(args: &[&str]) -> Opt {
		Opt::from_iter_safe(std::iter::once("sql_helptext").chain(args.iter().copied())).expect("parse")
	}

	#[test]
	fn object_reports_kind_and_name() {
		assert_eq!(opt(&["--proc", "dbo.usp_A"]).object(), Some((ObjectKind::Procedure, "dbo.usp_A")));
		assert_eq!(opt(&["--view", "vw_B"]).object(), Some((ObjectKind::View, "vw_B")));
		assert_eq!(opt(&["--func", "fn_C"]).object(), Some((ObjectKind::Function, "fn_C")));
	}

	#[test]
	fn make_output_writes_file_without_trailing_newline() {
		let dir = tempfile::tempdir().expect("temp dir");
		let path = dir.path().join("usp_A.sql");
		let o = opt(&["--proc", "usp_A", "-o", path.to_str().expect("utf8 path")]);

		o.make_output("CREATE PROCEDURE usp_A\nAS\nSELECT 1").expect("write");
		let written = std::fs::read_to_string(&path).expect("read back");
		assert_eq!(written, "CREATE PROCEDURE usp_A\nAS\nSELECT 1");
	}

	#[test]
	fn make_output_reports_unwritable_file() {
		let dir = tempfile::tempdir().expect("temp dir");
		let path = dir.path().join("missing").join("out.sql");
		let o = opt(&["--view", "vw_B", "--output", path.to_str().expect("utf8 path")]);

		let err = o.make_output("CREATE VIEW vw_B AS SELECT 1").unwrap_err();
		assert!(matches!(err, HelpTextError::Io { .. }));
	}

	#[test]
	fn kind_display() {
		assert_eq!(ObjectKind::Procedure.to_string(), "stored procedure");
		assert_eq!(ObjectKind::Function.to_string(), "function");
	}
}
