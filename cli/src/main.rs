use log::*;
use anyhow::*;
use clap::{Arg, Command};

use acc::{FormHandler, Mode};
use acc::config::Config;

mod http;
mod store;
mod terminal;

use crate::http::UreqTransport;
use crate::store::FileStore;
use crate::terminal::Terminal;

pub fn main() -> Result<()> {
	env_logger::init();
	let app = Command::new("acc")
		.about("Log in to (or register with) the ACC server")
		.arg(Arg::new("register").long("register").help("Create an account instead of logging in"))
		.arg(Arg::new("session").long("session").help("Print the stored session record"))
		.arg(Arg::new("server").long("server").takes_value(true).value_name("URL")
			.value_parser(clap::value_parser!(String))
			.help("Server root (default: $ACC_SERVER or http://localhost:5000)"))
	;

	let opts = app.get_matches();
	debug!("cli opts: {:?}", &opts);

	let mut config = Config::from_env();
	if let Some(server) = opts.get_one::<String>("server") {
		config = config.with_server(server.to_owned());
	}
	let store = FileStore::user();

	if opts.contains_id("session") {
		match acc::storage::load_session(&store)? {
			Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
			None => println!("Not logged in"),
		}
		return Ok(());
	}

	let mode = if opts.contains_id("register") {
		Mode::Registration
	} else {
		Mode::Login
	};
	let page = Terminal::prompt(&config, mode)?;
	let handler = FormHandler::new(config, UreqTransport, store, page);
	futures::executor::block_on(handler.submit());
	Ok(())
}
