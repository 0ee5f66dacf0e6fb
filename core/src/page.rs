use anyhow::*;

/// Which form the current page carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
	Login,
	Registration,
}

impl Mode {
	/// Any page other than the login page is treated as registration,
	/// including the bare root path.
	pub fn from_path(path: &str, login_page: &str) -> Self {
		if path.contains(login_page) {
			Mode::Login
		} else {
			Mode::Registration
		}
	}
}

/// The document hosting the form, and the user's view of it.
pub trait Page {
	fn location_path(&self) -> String;

	/// Current value of the input with the given element id.
	fn field(&self, id: &str) -> Result<String>;

	/// Blocking notification to the user.
	fn alert(&self, message: &str);

	fn navigate(&self, target: &str) -> Result<()>;

	fn reset_form(&self);
}
