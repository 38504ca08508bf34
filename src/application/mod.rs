// Application layer - use cases over the domain types.
// Carts and menus live in memory; student records go through storage.

pub mod delivery;
pub mod error;
pub mod service;
pub mod shop;

pub use delivery::*;
pub use error::*;
pub use service::*;
pub use shop::*;
