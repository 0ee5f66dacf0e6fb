use anyhow::*;
use serde::Serialize;

use crate::config::Config;
use crate::page::{Mode, Page};

pub const USERNAME: &str = "NomeUsuario";
pub const PASSWORD: &str = "SenhaUsuario";
pub const FULL_NAME: &str = "NomeCompleto";
pub const EMAIL: &str = "Email";

pub const LOGIN_PATH: &str = "login";
pub const REGISTRATION_PATH: &str = "enviar";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LoginRequest {
	#[serde(rename = "NomeUsuario")]
	pub username: String,
	#[serde(rename = "SenhaUsuario")]
	pub password: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RegistrationRequest {
	#[serde(rename = "NomeUsuario")]
	pub username: String,
	#[serde(rename = "SenhaUsuario")]
	pub password: String,
	#[serde(rename = "NomeCompleto")]
	pub full_name: String,
	#[serde(rename = "Email")]
	pub email: String,
}

/// One form submission, shaped by the page it came from.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Submission {
	Login(LoginRequest),
	Registration(RegistrationRequest),
}

impl Submission {
	/// Reads the fields for `mode` off the page. Values are taken as-is.
	pub fn read<P: Page + ?Sized>(mode: Mode, page: &P) -> Result<Self> {
		let username = page.field(USERNAME)?;
		let password = page.field(PASSWORD)?;
		Ok(match mode {
			Mode::Login => Submission::Login(LoginRequest { username, password }),
			Mode::Registration => Submission::Registration(RegistrationRequest {
				username,
				password,
				full_name: page.field(FULL_NAME)?,
				email: page.field(EMAIL)?,
			}),
		})
	}

	pub fn mode(&self) -> Mode {
		match self {
			Submission::Login(_) => Mode::Login,
			Submission::Registration(_) => Mode::Registration,
		}
	}

	pub fn endpoint(&self, config: &Config) -> String {
		config.url(match self {
			Submission::Login(_) => LOGIN_PATH,
			Submission::Registration(_) => REGISTRATION_PATH,
		})
	}

	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}
}
