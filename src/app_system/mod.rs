//! System wiring, configuration, and tracing setup.

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use self::tracing::*;
