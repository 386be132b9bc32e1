//! TicketDesk web client.

mod api;
mod app;
mod components;
mod config;
mod containers;
mod error;
mod models;
mod pages;
mod routes;
mod session;
mod view_models;

#[cfg(test)]
mod api_test;
#[cfg(test)]
mod testing;

use app::App;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger unavailable: {err}").into());
    }

    log::info!("Starting TicketDesk");

    Renderer::<Root>::new().render();
}
