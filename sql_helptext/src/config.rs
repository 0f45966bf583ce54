//! Where the SQL Server connection settings come from
//!
//! An ADO.NET connection string (`--connection-string` or
//! `SQL_HELPTEXT_CONNECTION_STRING`) wins. Otherwise the `[connection]` table
//! of a TOML file is used: the `--config` path, or
//! `~/.sql_helptext/sql_helptext.toml` when it exists.
//!
//! The file never holds the password, only the name of the environment
//! variable that does.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tiberius::{AuthMethod, Config, EncryptionLevel};

use crate::error::{HelpTextError, Result};

const CONFIG_FILE_NAME: &str = "sql_helptext.toml";
const CONFIG_DIR_NAME: &str = ".sql_helptext";

pub const CONNECTION_STRING_ENV: &str = "SQL_HELPTEXT_CONNECTION_STRING";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
	#[serde(default)]
	pub connection: ConnectionSettings,
}

/// `[connection]` section
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionSettings {
	pub host: Option<String>,
	/// Left unset, the driver uses 1433, or 1434 for the SQL Browser lookup of a named instance
	pub port: Option<u16>,
	/// Named instance, looked up through the SQL Browser service
	pub instance: Option<String>,
	pub database: Option<String>,
	pub user: Option<String>,
	/// Name of the env var holding the password
	#[serde(default = "default_password_env")]
	pub password_env: String,
	#[serde(default)]
	pub trust_cert: bool,
	#[serde(default = "default_true")]
	pub encrypt: bool,
	#[serde(default = "default_application_name")]
	pub application_name: String,
}

impl Default for ConnectionSettings {
	fn default() -> Self {
		Self {
			host: None,
			port: None,
			instance: None,
			database: None,
			user: None,
			password_env: default_password_env(),
			trust_cert: false,
			encrypt: true,
			application_name: default_application_name(),
		}
	}
}

fn default_password_env() -> String {
	"SQL_HELPTEXT_PASSWORD".into()
}
fn default_true() -> bool {
	true
}
fn default_application_name() -> String {
	env!("CARGO_PKG_NAME").into()
}

impl ConnectionSettings {
	/// Builds the driver config, reading the password from the process environment
	pub fn to_tiberius(&self) -> Result<Config> {
		self.to_tiberius_with(|name| std::env::var(name).ok())
	}

	/// Builds the driver config with `lookup` standing in for the environment
	pub fn to_tiberius_with<F>(&self, lookup: F) -> Result<Config>
	where
		F: Fn(&str) -> Option<String>,
	{
		let host = self
			.host
			.as_deref()
			.ok_or_else(|| HelpTextError::config("[connection] host is not set"))?;
		let user = self
			.user
			.as_deref()
			.ok_or_else(|| HelpTextError::config("[connection] user is not set"))?;
		let password = lookup(&self.password_env)
			.filter(|p| !p.is_empty())
			.ok_or_else(|| {
				HelpTextError::config(format!(
					"password not found, set the {} environment variable",
					self.password_env
				))
			})?;

		let mut config = Config::new();
		config.host(host);
		if let Some(port) = self.port {
			config.port(port);
		}
		if let Some(instance) = &self.instance {
			config.instance_name(instance);
		}
		if let Some(database) = &self.database {
			config.database(database);
		}
		config.application_name(&self.application_name);
		config.authentication(AuthMethod::sql_server(user, password));
		if self.trust_cert {
			config.trust_cert();
		}
		if !self.encrypt {
			config.encryption(EncryptionLevel::Off);
		}
		Ok(config)
	}
}

/// Path of the per-user config directory (`~/.sql_helptext/`)
pub fn config_dir() -> Result<PathBuf> {
	let home = dirs::home_dir()
		.ok_or_else(|| HelpTextError::config("could not determine home directory"))?;
	Ok(home.join(CONFIG_DIR_NAME))
}

/// Path of the per-user config file (`~/.sql_helptext/sql_helptext.toml`)
pub fn config_file_path() -> Result<PathBuf> {
	Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
	let content = std::fs::read_to_string(path).map_err(|e| HelpTextError::io(path, e))?;

	toml::from_str(&content).map_err(|e| {
		HelpTextError::config(format!("failed to parse {}: {}", path.display(), e))
	})
}

/// Picks the connection source in precedence order and turns it into a driver config
pub fn resolve_config(connection_string: Option<&str>, config_path: Option<&Path>) -> Result<Config> {
	if let Some(ado) = connection_string.filter(|s| !s.trim().is_empty()) {
		tracing::debug!("using connection string");
		return Config::from_ado_string(ado)
			.map_err(|e| HelpTextError::config(format!("invalid connection string: {}", e)));
	}

	let path = match config_path {
		Some(path) => path.to_path_buf(),
		None => {
			let path = config_file_path()?;
			if !path.exists() {
				return Err(HelpTextError::config(format!(
					"no connection configured, set {} or create {}",
					CONNECTION_STRING_ENV,
					path.display()
				)));
			}
			path
		},
	};

	tracing::debug!(?path, "using config file");
	load_config_from(&path)?.connection.to_tiberius()
}
