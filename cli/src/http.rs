use anyhow::*;
use log::*;

use acc::{Reply, Transport};

#[derive(Debug, Clone, Copy)]
pub struct UreqTransport;

impl Transport for UreqTransport {
	async fn post_json(&self, url: &str, body: String) -> Result<Reply> {
		let response = ureq::post(url)
			.set("Content-type", "application/json")
			.send_string(&body);
		match response {
			Result::Ok(response) => Ok(Reply::new(response.status(), response.into_string()?)),
			Result::Err(ureq::Error::Status(status, response)) => {
				debug!("{} replied {}", url, status);
				Ok(Reply::new(status, response.into_string()?))
			},
			Result::Err(other) => Err(other.into()),
		}
	}
}
