use seed::{prelude::*, *};

use acc::Mode;
use acc::request::{USERNAME, PASSWORD, FULL_NAME, EMAIL};

use crate::Msg;

// Inputs are left uncontrolled: the handler reads them by id at submit time.
fn field(id: &str, kind: &str, label: &str) -> Node<Msg> {
	div![
		C!["field"],
		label![attrs!{ At::For => id }, label],
		input![
			attrs!{
				At::Id => id,
				At::Name => id,
				At::Type => kind,
				At::Placeholder => label,
			},
		],
	]
}

pub fn view(mode: Mode, in_flight: usize) -> Node<Msg> {
	let (title, action) = match mode {
		Mode::Login => ("Login", "Entrar"),
		Mode::Registration => ("Cadastro", "Cadastrar"),
	};

	let extra_fields = match mode {
		Mode::Login => vec![],
		Mode::Registration => vec![
			field(FULL_NAME, "text", "Nome completo"),
			field(EMAIL, "email", "Email"),
		],
	};

	form![
		ev(Ev::Submit, |event| {
			event.prevent_default();
			Msg::Submit
		}),
		h1![title],
		field(USERNAME, "text", "Nome de usuário"),
		field(PASSWORD, "password", "Senha"),
		extra_fields,
		button![attrs!{ At::Type => "submit" }, action],
		IF!(in_flight > 0 => span![C!["pending"], "Enviando..."]),
	]
}
