//! Discount computation, polymorphic over the policy chosen at wiring time.

pub mod fix;
pub mod rate;

pub use fix::*;
pub use rate::*;

use crate::domain::Member;

/// A discount policy is a pure function from (member, price) to the amount
/// taken off the item price. No side effects; the result is expected to stay
/// within `0..=price`.
pub trait DiscountPolicy: Send + Sync {
    fn discount(&self, member: &Member, price: u32) -> u32;
}
