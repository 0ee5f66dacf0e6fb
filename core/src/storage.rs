use anyhow::*;
use log::*;
use serde_json::Value;

/// Key under which a successful login's `dados` is kept.
pub const SESSION_KEY: &str = "UserData";

/// A flat string store shared by every page of the app.
pub trait KeyValueStore {
	fn get(&self, key: &str) -> Result<Option<String>>;

	fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub fn save_session<S: KeyValueStore + ?Sized>(store: &S, record: &Value) -> Result<()> {
	info!("Saving {}", SESSION_KEY);
	store.set(SESSION_KEY, &serde_json::to_string(record)?)
}

pub fn load_session<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Value>> {
	match store.get(SESSION_KEY)? {
		Some(contents) => Ok(Some(serde_json::from_str(&contents)
			.with_context(|| anyhow!("Processing {}", SESSION_KEY))?)),
		None => Ok(None),
	}
}
