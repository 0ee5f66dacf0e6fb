use std::{cell::RefCell, collections::BTreeMap};

use log::*;
use anyhow::*;

use acc::{Mode, Page};
use acc::config::Config;
use acc::request::{USERNAME, PASSWORD, FULL_NAME, EMAIL};

const REGISTRATION_PAGE: &str = "cadastro.html";

/// The form, filled in on the terminal.
pub struct Terminal {
	path: String,
	answers: RefCell<BTreeMap<&'static str, String>>,
}

impl Terminal {
	pub fn prompt(config: &Config, mode: Mode) -> Result<Self> {
		let mut answers = BTreeMap::new();
		answers.insert(USERNAME, rprompt::prompt_reply_stderr("Usuário: ")?);
		answers.insert(PASSWORD, rpassword::prompt_password("Senha: ")?);
		let page = match mode {
			Mode::Login => config.login_page.as_str(),
			Mode::Registration => {
				answers.insert(FULL_NAME, rprompt::prompt_reply_stderr("Nome completo: ")?);
				answers.insert(EMAIL, rprompt::prompt_reply_stderr("Email: ")?);
				REGISTRATION_PAGE
			},
		};
		Ok(Self::filled(format!("/{}", page), answers))
	}

	fn filled(path: String, answers: BTreeMap<&'static str, String>) -> Self {
		Self { path, answers: RefCell::new(answers) }
	}
}

impl Page for Terminal {
	fn location_path(&self) -> String {
		self.path.clone()
	}

	fn field(&self, id: &str) -> Result<String> {
		self.answers.borrow().get(id).cloned().ok_or_else(|| anyhow!("No field {}", id))
	}

	fn alert(&self, message: &str) {
		println!("{}", message);
	}

	fn navigate(&self, target: &str) -> Result<()> {
		info!("Navigating to {}", target);
		println!("-> {}", target);
		Ok(())
	}

	fn reset_form(&self) {
		debug!("Clearing answers");
		self.answers.borrow_mut().values_mut().for_each(String::clear);
	}
}
