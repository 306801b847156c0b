pub mod cities;
pub mod console;
pub mod filters;
pub mod loader;
pub mod logging;
pub mod prompt;
pub mod reports;
pub mod scroller;
pub mod session;
pub mod trip;
