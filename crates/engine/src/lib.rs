//! DinoPark Engine library.
//!
//! ## Structure
//!
//! - `infrastructure/` - Ports plus their in-memory and system adapters, configuration
//! - `use_cases/` - Growing dinosaurs, building enclosures, park-wide operations
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
