use std::process;
use structopt::StructOpt;
use sql_helptext::{
	connection::get_object_definition,
	Opt,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
	let opt = Opt::from_args();
	init_tracing(opt.verbose);

	let (kind, object_name) = match opt.object() {
		Some(object) => object,
		None => {
			eprintln!("one of --proc, --view or --func is required");
			process::exit(2);
		},
	};

	let config = match opt.get_config() {
		Ok(config) => config,
		Err(e) => {
			eprintln!("{}", e);
			process::exit(1);
		},
	};

	tracing::info!(%kind, object_name, "fetching definition");
	let definition = get_object_definition(config, object_name).await;
	if definition.is_empty() {
		eprintln!("{} '{}' not found or encrypted", kind, object_name);
		process::exit(1);
	}

	if let Err(e) = opt.make_output(&definition) {
		eprintln!("{}", e);
		process::exit(1);
	}
}

// stdout is reserved for the definition itself
fn init_tracing(verbose: u8) {
	use tracing_subscriber::{fmt, EnvFilter};

	let filter = match verbose {
		0 => "sql_helptext=warn",
		1 => "sql_helptext=info",
		2 => "sql_helptext=debug",
		_ => "sql_helptext=trace,tiberius=debug",
	};

	let env_filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(filter));

	fmt()
		.with_env_filter(env_filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
