use crate::discount::DiscountPolicy;
use crate::domain::{Grade, Member};

/// Flat discount for VIP members, regardless of the item price.
const FIX_DISCOUNT_AMOUNT: u32 = 1000;

#[derive(Debug, Default)]
pub struct FixDiscountPolicy;

impl DiscountPolicy for FixDiscountPolicy {
    fn discount(&self, member: &Member, _price: u32) -> u32 {
        if member.grade == Grade::Vip {
            FIX_DISCOUNT_AMOUNT
        } else {
            0
        }
    }
}
