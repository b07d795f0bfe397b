pub mod error;
pub mod repository;
pub mod service;

pub use error::*;
pub use repository::*;
pub use service::*;
