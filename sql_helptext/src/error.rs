//! Error type shared by the library and the binary

use std::path::PathBuf;

use sql_helptext_core::SqlError;

#[derive(Debug, thiserror::Error)]
pub enum HelpTextError {
	/// Missing or invalid connection settings
	#[error("config error: {message}")]
	Config { message: String },

	#[error("I/O error at {path:?}: {source}")]
	Io {
		path: PathBuf,
		source: std::io::Error,
	},

	/// Anything the SQL Server driver reports, from connecting to reading rows
	#[error("database error: {0}")]
	Sql(#[from] SqlError),
}

pub type Result<T> = std::result::Result<T, HelpTextError>;

impl HelpTextError {
	pub fn config(msg: impl Into<String>) -> Self {
		Self::Config {
			message: msg.into(),
		}
	}

	pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_formatting() {
		let err = HelpTextError::config("no connection configured");
		assert_eq!(err.to_string(), "config error: no connection configured");

		let err = HelpTextError::io(
			"/tmp/out.sql",
			std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
		);
		assert!(err.to_string().contains("/tmp/out.sql"));
		assert!(err.to_string().contains("denied"));
	}
}
