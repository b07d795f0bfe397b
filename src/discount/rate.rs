use crate::discount::DiscountPolicy;
use crate::domain::{Grade, Member};

/// Percentage taken off for VIP members, integer-truncated.
const RATE_DISCOUNT_PERCENT: u32 = 10;

#[derive(Debug, Default)]
pub struct RateDiscountPolicy;

impl DiscountPolicy for RateDiscountPolicy {
    fn discount(&self, member: &Member, price: u32) -> u32 {
        if member.grade == Grade::Vip {
            price * RATE_DISCOUNT_PERCENT / 100
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vip_gets_10_percent_discount() {
        let policy = RateDiscountPolicy;
        let member = Member::new(1, "VIPmember", Grade::Vip);

        assert_eq!(policy.discount(&member, 10000), 1000);
    }

    #[test]
    fn basic_member_gets_no_discount() {
        let policy = RateDiscountPolicy;
        let member = Member::new(2, "member2", Grade::Basic);

        assert_eq!(policy.discount(&member, 10000), 0);
    }

    #[test]
    fn discount_truncates_toward_zero() {
        let policy = RateDiscountPolicy;
        let member = Member::new(3, "VIPmember", Grade::Vip);

        // 10% of 9999 is 999.9; integer arithmetic keeps 999.
        assert_eq!(policy.discount(&member, 9999), 999);
    }

    #[test]
    fn discount_never_exceeds_the_price() {
        let policy = RateDiscountPolicy;
        let member = Member::new(4, "VIPmember", Grade::Vip);

        for price in [0, 1, 99, 100, 10000] {
            assert!(policy.discount(&member, price) <= price);
        }
    }
}
