use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::discount::DiscountPolicy;
use crate::domain::Order;
use crate::member::MemberRepository;
use crate::order::OrderError;

/// Service for assembling orders.
///
/// Orchestration only: resolving the member and pricing the discount are
/// delegated to the repository and policy seams, so this service never needs
/// to know which store or which policy was wired in.
pub struct OrderService {
    repository: Arc<dyn MemberRepository>,
    discount_policy: Arc<dyn DiscountPolicy>,
}

impl OrderService {
    pub fn new(
        repository: Arc<dyn MemberRepository>,
        discount_policy: Arc<dyn DiscountPolicy>,
    ) -> Self {
        Self {
            repository,
            discount_policy,
        }
    }

    #[instrument(skip(self, item_name))]
    pub fn create_order(
        &self,
        member_id: u64,
        item_name: impl Into<String>,
        item_price: u32,
    ) -> Result<Order, OrderError> {
        // Step 1: Resolve the member
        let Some(member) = self.repository.find_by_id(member_id) else {
            error!("Member not found");
            return Err(OrderError::UnknownMember(member_id));
        };

        // Step 2: Price the discount
        let discount_price = self.discount_policy.discount(&member, item_price);
        info!(member_name = %member.name, discount_price, "Discount applied");

        // Step 3: Assemble the order
        Ok(Order::new(member_id, item_name, item_price, discount_price))
    }
}
