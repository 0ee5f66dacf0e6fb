//! The form handler's capabilities, backed by the browser.

use anyhow::*;
use log::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlFormElement, HtmlInputElement, Storage, Window};

use acc::{FormHandler, KeyValueStore, Page, Reply, Transport};
use acc::config::Config;

pub type BrowserHandler = FormHandler<FetchTransport, LocalStorage, Document>;

pub fn handler() -> BrowserHandler {
	let config = match option_env!("ACC_SERVER") {
		Some(server) => Config::default().with_server(server),
		None => Config::default(),
	};
	FormHandler::new(config, FetchTransport, LocalStorage, Document)
}

fn js_error(err: JsValue) -> Error {
	match err.as_string() {
		Some(message) => anyhow!(message),
		None => anyhow!("{:?}", err),
	}
}

fn window() -> Result<Window> {
	web_sys::window().ok_or_else(|| anyhow!("No window"))
}

pub struct FetchTransport;

impl Transport for FetchTransport {
	async fn post_json(&self, url: &str, body: String) -> Result<Reply> {
		let response = gloo_net::http::Request::post(url)
			.header("Content-Type", "application/json")
			.body(body)?
			.send()
			.await?;
		let status = response.status();
		Ok(Reply::new(status, response.text().await?))
	}
}

pub struct LocalStorage;

impl LocalStorage {
	fn storage() -> Result<Storage> {
		window()?.local_storage().map_err(js_error)?
			.ok_or_else(|| anyhow!("localStorage unavailable"))
	}
}

impl KeyValueStore for LocalStorage {
	fn get(&self, key: &str) -> Result<Option<String>> {
		Self::storage()?.get_item(key).map_err(js_error)
	}

	fn set(&self, key: &str, value: &str) -> Result<()> {
		Self::storage()?.set_item(key, value).map_err(js_error)
	}
}

/// The current page and its single form.
pub struct Document;

impl Document {
	fn document() -> Result<web_sys::Document> {
		window()?.document().ok_or_else(|| anyhow!("No document"))
	}

	fn form() -> Result<HtmlFormElement> {
		Self::document()?.query_selector("form").map_err(js_error)?
			.ok_or_else(|| anyhow!("No form on page"))?
			.dyn_into::<HtmlFormElement>()
			.map_err(|_| anyhow!("Not a form"))
	}
}

impl Page for Document {
	fn location_path(&self) -> String {
		window()
			.and_then(|w| w.location().pathname().map_err(js_error))
			.unwrap_or_else(|err| {
				warn!("Can't read location: {}", err);
				String::new()
			})
	}

	fn field(&self, id: &str) -> Result<String> {
		let input = Self::document()?.get_element_by_id(id)
			.ok_or_else(|| anyhow!("No element #{}", id))?
			.dyn_into::<HtmlInputElement>()
			.map_err(|_| anyhow!("#{} is not an input", id))?;
		Ok(input.value())
	}

	fn alert(&self, message: &str) {
		if let Err(err) = window().and_then(|w| w.alert_with_message(message).map_err(js_error)) {
			error!("alert failed: {}", err);
		}
	}

	fn navigate(&self, target: &str) -> Result<()> {
		window()?.location().set_href(target).map_err(js_error)
	}

	fn reset_form(&self) {
		match Self::form() {
			Result::Ok(form) => form.reset(),
			Result::Err(err) => error!("reset failed: {}", err),
		}
	}
}
