mod account_modal;
mod components;
mod config;
mod dom;
mod enhancer;
mod form_guard;
mod ledger_modal;
mod modal;
mod reveal;
mod services;

fn main() {
    enhancer::start();
}
