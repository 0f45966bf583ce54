//! Statements sent to SQL Server and their corresponding row types
use sql_helptext_core::*;


/// `sp_helptext` returns one `Text nvarchar(255)` column per source line
pub const GET_HELPTEXT: &str = "EXEC sp_helptext @P1";
#[derive(Debug, TryFromRow)]
pub struct HelpTextRow {
	pub text: Option<String>,
}
