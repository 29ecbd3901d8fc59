pub mod append;
pub mod health;
pub mod list;
pub mod welcome;

pub use append::append_handler;
pub use health::health_handler;
pub use list::list_handler;
pub use welcome::welcome_handler;
