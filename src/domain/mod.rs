pub mod member;
pub mod order;

pub use member::*;
pub use order::*;
