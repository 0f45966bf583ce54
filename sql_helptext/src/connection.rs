use super::{
	error::Result,
	mssql_select_types::*,
	reassemble::build_definition,
};
use sql_helptext_core::*;
use tiberius::{Client, Config, SqlBrowser};
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

pub struct HelpTextClient {
	client: Client<Compat<TcpStream>>,
}

impl HelpTextClient {
	/// Opens a connection, resolving a named instance through SQL Browser when the config has one
	pub async fn connect(config: Config) -> Result<HelpTextClient> {
		let tcp = TcpStream::connect_named(&config).await?;
		tcp.set_nodelay(true).map_err(SqlError::from)?;
		let client = Client::connect(config, tcp.compat_write()).await?;
		Ok(HelpTextClient { client })
	}

	/// Runs `sp_helptext` and returns column 0 of every row, `None` where it is NULL or missing
	pub async fn get_helptext_lines(&mut self, object_name: &str) -> Result<Vec<Option<String>>> {
		let rows = self.client
			.query(GET_HELPTEXT, &[&object_name])
			.await?
			.into_first_result()
			.await?;
		tracing::debug!(rows = rows.len(), object_name, "sp_helptext returned");

		let lines = rows
			.iter()
			.map(helptext_line)
			.collect::<std::result::Result<Vec<_>, SqlError>>()?;
		Ok(lines)
	}

	pub async fn get_definition(&mut self, object_name: &str) -> Result<String> {
		let lines = self.get_helptext_lines(object_name).await?;
		Ok(build_definition(lines))
	}

	pub async fn close(self) -> Result<()> {
		self.client.close().await?;
		Ok(())
	}
}

/// Column 0 of one `sp_helptext` row, `None` when it is NULL or the row has no columns
fn helptext_line<R: ColumnSource>(row: &R) -> std::result::Result<Option<String>, SqlError> {
	if row.column_count() == 0 {
		return Ok(None);
	}
	Ok(HelpTextRow::from_row(row)?.text)
}

/// Connects, reads one definition and disconnects
pub async fn fetch_object_definition(config: Config, object_name: &str) -> Result<String> {
	let mut client = HelpTextClient::connect(config).await?;
	let definition = client.get_definition(object_name).await?;
	if let Err(e) = client.close().await {
		tracing::warn!(error = %e, "failed to close connection cleanly");
	}
	Ok(definition)
}

/// Like [`fetch_object_definition`] but any failure is logged and yields an empty string
///
/// An unknown object, a permission problem and an encrypted object all end up as `""`
pub async fn get_object_definition(config: Config, object_name: &str) -> String {
	match fetch_object_definition(config, object_name).await {
		Ok(definition) => definition,
		Err(e) => {
			tracing::error!(error = %e, object_name, "failed to read object definition");
			String::new()
		},
	}
}
