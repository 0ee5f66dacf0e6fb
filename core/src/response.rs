use anyhow::*;
use log::*;
use serde::Deserialize;
use serde_json::Value;

use crate::transport::Reply;

pub const STATUS_OK: &str = "ok";
pub const UNKNOWN_ERROR: &str = "Erro desconhecido";

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ServerResponse {
	#[serde(default, rename = "mensagem")]
	pub message: Option<String>,
	#[serde(default)]
	pub status: Option<String>,
	#[serde(default, rename = "dados")]
	pub data: Option<Value>,
}

impl ServerResponse {
	pub fn is_ok(&self) -> bool {
		self.status.as_deref() == Some(STATUS_OK)
	}

	pub fn message(&self) -> &str {
		self.message.as_deref().unwrap_or("")
	}

	/// Decodes a reply, turning an HTTP error status into an error carrying
	/// the server's message.
	pub fn interpret(reply: &Reply) -> Result<Self> {
		if reply.ok {
			return Ok(serde_json::from_str(&reply.body)?);
		}

		let decoded = serde_json::from_str::<ServerResponse>(&reply.body)
			.map_err(|err| debug!("Undecodable error body ({}): {}", reply.status, err))
			.unwrap_or_default();
		let message = decoded.message
			.filter(|m| !m.is_empty())
			.unwrap_or_else(|| UNKNOWN_ERROR.to_owned());
		warn!("Server replied {}: {}", reply.status, message);
		Err(anyhow!(message))
	}
}
