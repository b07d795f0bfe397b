/// Represents a completed purchase: the item price together with the
/// discount the configured policy granted.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub member_id: u64,
    pub item_name: String,
    pub item_price: u32,
    pub discount_price: u32,
}

impl Order {
    pub fn new(
        member_id: u64,
        item_name: impl Into<String>,
        item_price: u32,
        discount_price: u32,
    ) -> Self {
        Self {
            member_id,
            item_name: item_name.into(),
            item_price,
            discount_price,
        }
    }

    /// The price the member actually pays.
    pub fn final_price(&self) -> u32 {
        self.item_price - self.discount_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_price_subtracts_discount() {
        let order = Order::new(1, "itemA", 10000, 1000);
        assert_eq!(order.final_price(), 9000);
    }

    #[test]
    fn final_price_without_discount_is_item_price() {
        let order = Order::new(2, "itemB", 500, 0);
        assert_eq!(order.final_price(), 500);
    }
}
