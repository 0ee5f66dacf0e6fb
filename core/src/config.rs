use log::*;

pub const DEFAULT_SERVER: &str = "http://localhost:5000";
pub const SERVER_ENV: &str = "ACC_SERVER";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	/// Root of the backend, e.g. `http://localhost:5000`
	pub server: String,

	/// Page holding the login form. Its name doubles as the marker
	/// used to tell login and registration pages apart.
	pub login_page: String,

	/// Where a successful login lands.
	pub profile_page: String,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			server: DEFAULT_SERVER.to_owned(),
			login_page: "index.html".to_owned(),
			profile_page: "perfil.html".to_owned(),
		}
	}
}

impl Config {
	pub fn from_env() -> Self {
		Self::from_var(std::env::var(SERVER_ENV).ok())
	}

	/// An unset or empty override leaves the default server.
	pub fn from_var(server: Option<String>) -> Self {
		match server {
			Some(server) if !server.is_empty() => {
				debug!("Using server from ${}: {}", SERVER_ENV, server);
				Self::default().with_server(server)
			},
			_ => Self::default(),
		}
	}

	pub fn with_server<S: Into<String>>(self, server: S) -> Self {
		Self {
			server: server.into(),
			..self
		}
	}

	pub fn url(&self, path: &str) -> String {
		format!("{}/{}", self.server.trim_end_matches('/'), path.trim_start_matches('/'))
	}
}
