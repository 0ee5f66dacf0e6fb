mod browser;
mod form;

use std::rc::Rc;

use seed::{prelude::*, *};

use acc::Mode;
use crate::browser::BrowserHandler;

fn init(_: Url, _: &mut impl Orders<Msg>) -> Model {
	let handler = browser::handler();
	let mode = handler.mode();
	::log::info!("Form in {:?} mode", mode);
	Model { handler: Rc::new(handler), mode, in_flight: 0 }
}

struct Model {
	handler: Rc<BrowserHandler>,
	mode: Mode,
	in_flight: usize,
}

#[derive(Copy, Clone, Debug)]
pub enum Msg {
	Submit,
	Settled,
}

fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
	match msg {
		// The form stays enabled; each submit is its own request.
		Msg::Submit => {
			model.in_flight += 1;
			let handler = Rc::clone(&model.handler);
			orders.perform_cmd(async move {
				handler.submit().await;
				Msg::Settled
			});
		},
		Msg::Settled => model.in_flight = model.in_flight.saturating_sub(1),
	}
}

fn view(model: &Model) -> Node<Msg> {
	div![
		C!["bg-slate-100"],
		form::view(model.mode, model.in_flight),
	]
}

// (This function is invoked by `init` function in `index.html`.)
#[wasm_bindgen(start)]
pub fn start() {
	// Mount the `app` to the element with the `id` "app".
	App::start("app", init, update, view);
}
