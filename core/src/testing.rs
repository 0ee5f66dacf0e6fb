//! In-memory stand-ins for the browser, shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};

use anyhow::*;

use crate::page::Page;
use crate::request::{EMAIL, FULL_NAME, PASSWORD, USERNAME};
use crate::storage::KeyValueStore;
use crate::transport::{Reply, Transport};

#[derive(Debug, Default)]
pub struct MemoryStore {
	pub entries: RefCell<BTreeMap<String, String>>,
	pub writes: Cell<usize>,
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>> {
		Ok(self.entries.borrow().get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> Result<()> {
		self.writes.set(self.writes.get() + 1);
		self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
		Ok(())
	}
}

#[derive(Debug, Default)]
pub struct FakePage {
	pub path: String,
	pub fields: RefCell<BTreeMap<String, String>>,
	pub alerts: RefCell<Vec<String>>,
	pub navigations: RefCell<Vec<String>>,
	pub resets: Cell<usize>,
}

impl FakePage {
	pub fn login() -> Self {
		Self { path: "/app/index.html".to_owned(), ..Default::default() }
			.with_field(USERNAME, "maria")
			.with_field(PASSWORD, "segredo")
	}

	pub fn registration() -> Self {
		Self { path: "/app/cadastro.html".to_owned(), ..Default::default() }
			.with_field(USERNAME, "maria")
			.with_field(PASSWORD, "segredo")
			.with_field(FULL_NAME, "Maria Silva")
			.with_field(EMAIL, "maria@example.org")
	}

	pub fn with_field(self, id: &str, value: &str) -> Self {
		self.fields.borrow_mut().insert(id.to_owned(), value.to_owned());
		self
	}

	pub fn alerts(&self) -> Vec<String> {
		self.alerts.borrow().clone()
	}

	pub fn navigations(&self) -> Vec<String> {
		self.navigations.borrow().clone()
	}
}

impl Page for FakePage {
	fn location_path(&self) -> String {
		self.path.clone()
	}

	fn field(&self, id: &str) -> Result<String> {
		self.fields.borrow().get(id).cloned()
			.ok_or_else(|| anyhow!("Cannot read properties of null (reading '{}')", id))
	}

	fn alert(&self, message: &str) {
		self.alerts.borrow_mut().push(message.to_owned());
	}

	fn navigate(&self, target: &str) -> Result<()> {
		self.navigations.borrow_mut().push(target.to_owned());
		Ok(())
	}

	fn reset_form(&self) {
		self.resets.set(self.resets.get() + 1);
		self.fields.borrow_mut().values_mut().for_each(String::clear);
	}
}

/// Replies with queued outcomes in order, recording every request.
#[derive(Debug, Default)]
pub struct CannedTransport {
	pub replies: RefCell<VecDeque<Result<Reply>>>,
	pub sent: RefCell<Vec<(String, String)>>,
}

impl CannedTransport {
	pub fn replying(status: u16, body: &str) -> Self {
		let transport = Self::default();
		transport.push(status, body);
		transport
	}

	pub fn unreachable() -> Self {
		let transport = Self::default();
		transport.replies.borrow_mut().push_back(Err(anyhow!("Failed to fetch")));
		transport
	}

	pub fn push(&self, status: u16, body: &str) {
		self.replies.borrow_mut().push_back(Ok(Reply::new(status, body)));
	}

	pub fn sent(&self) -> Vec<(String, String)> {
		self.sent.borrow().clone()
	}
}

impl Transport for CannedTransport {
	async fn post_json(&self, url: &str, body: String) -> Result<Reply> {
		self.sent.borrow_mut().push((url.to_owned(), body));
		self.replies.borrow_mut().pop_front()
			.unwrap_or_else(|| Err(anyhow!("No reply queued for {}", url)))
	}
}
