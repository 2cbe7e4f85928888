pub mod app;
pub mod cards;
pub mod confirm;
pub mod editor;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod loader;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
