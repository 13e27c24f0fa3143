//! Configuration module for the housefit application.

pub mod controls;
pub mod plot;

mod debug; // Private; the public re-export forces `crate::config::DEBUG_FLAGS`
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use controls::CONTROLS;
pub use plot::PLOT_CONFIG;
