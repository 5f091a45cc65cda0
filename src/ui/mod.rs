pub mod app;
pub mod checker;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod news_input;
pub mod render;
pub mod result_card;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod toast;

pub use runtime::run;
