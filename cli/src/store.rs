use log::*;
use anyhow::*;
use std::{fs, collections::BTreeMap, path::PathBuf};

use acc::KeyValueStore;

/// A JSON object on disk standing in for the browser's local storage.
#[derive(Debug, Clone)]
pub struct FileStore {
	path: PathBuf,
}

impl FileStore {
	pub fn user() -> Self {
		Self::at(PathBuf::from(shellexpand::tilde("~/.config/acc/storage.json").into_owned()))
	}

	pub fn at(path: PathBuf) -> Self {
		Self { path }
	}

	fn load(&self) -> Result<BTreeMap<String, String>> {
		if self.path.exists() {
			let contents = fs::read_to_string(&self.path)?;
			Ok(serde_json::from_str(&contents)
				.with_context(|| anyhow!("Processing {:?}", &self.path))?)
		} else {
			Ok(Default::default())
		}
	}
}

impl KeyValueStore for FileStore {
	fn get(&self, key: &str) -> Result<Option<String>> {
		Ok(self.load()?.remove(key))
	}

	fn set(&self, key: &str, value: &str) -> Result<()> {
		let mut entries = self.load()?;
		entries.insert(key.to_owned(), value.to_owned());
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent)?;
		}
		info!("Storing {}", &self.path.to_string_lossy());
		fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
		Ok(())
	}
}
