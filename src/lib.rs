pub mod api;
pub mod directory;
pub mod logging;
pub mod ui;
