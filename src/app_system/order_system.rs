use std::sync::Arc;

use tracing::info;

use crate::discount::{DiscountPolicy, FixDiscountPolicy, RateDiscountPolicy};
use crate::member::{MemberRepository, MemberService, MemoryMemberRepository};
use crate::order::OrderService;

/// Which discount policy the system runs with. Fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscountPolicyKind {
    #[default]
    Fix,
    Rate,
}

/// Explicit configuration for the composition root. Everything the system
/// needs to decide concrete implementations lives here; nothing is resolved
/// dynamically.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub discount_policy: DiscountPolicyKind,
}

/// The composition root: the one place that picks concrete implementations
/// and wires the services together.
///
/// Both services share a single repository instance, so a member joined
/// through `member_service` is visible to `order_service`.
pub struct OrderSystem {
    pub member_service: MemberService,
    pub order_service: OrderService,
}

impl OrderSystem {
    pub fn new(config: AppConfig) -> Self {
        info!(?config, "Wiring order system");

        let repository: Arc<dyn MemberRepository> = Arc::new(MemoryMemberRepository::new());

        let discount_policy: Arc<dyn DiscountPolicy> = match config.discount_policy {
            DiscountPolicyKind::Fix => Arc::new(FixDiscountPolicy),
            DiscountPolicyKind::Rate => Arc::new(RateDiscountPolicy),
        };

        let member_service = MemberService::new(Arc::clone(&repository));
        let order_service = OrderService::new(repository, discount_policy);

        Self {
            member_service,
            order_service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Grade, Member};

    #[test]
    fn both_services_share_one_repository() {
        let system = OrderSystem::new(AppConfig::default());
        system.member_service.join(Member::new(1, "beo", Grade::Vip));

        // Visible through the order service without any extra wiring.
        let order = system.order_service.create_order(1, "itemA", 10000).unwrap();
        assert_eq!(order.member_id, 1);
    }

    #[test]
    fn config_selects_the_rate_policy() {
        let config = AppConfig {
            discount_policy: DiscountPolicyKind::Rate,
        };
        let system = OrderSystem::new(config);
        system.member_service.join(Member::new(1, "beo", Grade::Vip));

        let order = system.order_service.create_order(1, "itemA", 20000).unwrap();
        assert_eq!(order.discount_price, 2000);
    }

    #[test]
    fn default_config_uses_the_fix_policy() {
        let system = OrderSystem::new(AppConfig::default());
        system.member_service.join(Member::new(1, "beo", Grade::Vip));

        let order = system.order_service.create_order(1, "itemA", 20000).unwrap();
        assert_eq!(order.discount_price, 1000);
    }
}
