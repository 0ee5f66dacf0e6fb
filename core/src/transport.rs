use std::future::Future;
use anyhow::*;

/// Raw outcome of a POST, before its body is interpreted.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
	pub ok: bool,
	pub status: u16,
	pub body: String,
}

impl Reply {
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self {
			ok: (200..300).contains(&status),
			status,
			body: body.into(),
		}
	}
}

pub trait Transport {
	/// POSTs `body` to `url` as `application/json`. HTTP error statuses
	/// are a successful `Reply`; only failing to get a reply is an `Err`.
	fn post_json(&self, url: &str, body: String) -> impl Future<Output = Result<Reply>>;
}
