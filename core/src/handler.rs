use anyhow::*;
use log::*;
use serde_json::Value;

use crate::config::Config;
use crate::error::RequestFailure;
use crate::page::{Mode, Page};
use crate::request::Submission;
use crate::response::ServerResponse;
use crate::storage::{self, KeyValueStore};
use crate::transport::Transport;

/// Handles submissions of the login / registration form.
///
/// Each call to [`FormHandler::submit`] is independent: nothing stops a
/// second submission while the first is awaiting its reply, and both will
/// alert, navigate and write the store in whatever order they complete.
pub struct FormHandler<T, S, P> {
	config: Config,
	transport: T,
	store: S,
	page: P,
}

impl<T: Transport, S: KeyValueStore, P: Page> FormHandler<T, S, P> {
	pub fn new(config: Config, transport: T, store: S, page: P) -> Self {
		Self { config, transport, store, page }
	}

	pub fn store(&self) -> &S {
		&self.store
	}

	pub fn page(&self) -> &P {
		&self.page
	}

	pub fn mode(&self) -> Mode {
		Mode::from_path(&self.page.location_path(), &self.config.login_page)
	}

	/// Runs one submission to completion. Failures are reported to the
	/// user through the page, never returned.
	pub async fn submit(&self) {
		let mode = self.mode();
		debug!("Submitting in {:?} mode", mode);
		if let Err(err) = self.try_submit(mode).await {
			let failure = RequestFailure::from(err);
			error!("Submission failed: {:?}", failure.cause());
			self.page.alert(&failure.to_string());
			if mode == Mode::Registration {
				self.page.reset_form();
			}
		}
	}

	async fn try_submit(&self, mode: Mode) -> Result<()> {
		let submission = Submission::read(mode, &self.page)?;
		let url = submission.endpoint(&self.config);
		info!("POST {}", url);
		let reply = self.transport.post_json(&url, submission.to_json()?).await?;
		let response = ServerResponse::interpret(&reply)?;

		self.page.alert(response.message());
		if response.is_ok() {
			match submission {
				Submission::Login(_) => {
					let record = response.data.unwrap_or(Value::Null);
					storage::save_session(&self.store, &record)?;
					self.page.navigate(&self.config.profile_page)?;
				},
				Submission::Registration(_) => {
					self.page.navigate(&self.config.login_page)?;
				},
			}
		}
		Ok(())
	}
}
