use crate::order::{Order, OrderItem};
use log::debug;

#[derive(Clone, Debug)]
pub struct ThresholdRule {
    pub threshold: i64,
    pub discount: i64,
}

#[derive(Clone, Debug)]
pub enum Promotion {
    /// Flat discounts unlocked by the order total; every satisfied rule counts.
    Threshold(Vec<ThresholdRule>),
    /// One free unit on every cosmetics line, shown on the item but never charged.
    BogoCosmetics,
    /// Percentage off the combined subtotal of one category.
    CategoryDiscount { category: String, percent: f64 },
    /// Flat discount when every required product appears in the order.
    Bundle { required: Vec<String>, discount: i64 },
    /// Bulk purchase day: every full group of ten within a line at eight tenths
    /// of its price. Overrides every other promotion when any line qualifies.
    BulkDay,
}

impl Promotion {
    pub fn applies(&self, order: &Order) -> bool {
        match self {
            Self::Threshold(rules) => {
                rules.iter().any(|rule| order.original_amount() >= rule.threshold)
            }
            Self::BogoCosmetics => order
                .items()
                .iter()
                .any(|item| item.category.as_deref() == Some("cosmetics")),
            Self::CategoryDiscount { category, .. } => order
                .items()
                .iter()
                .any(|item| item.category.as_deref() == Some(category.as_str())),
            Self::Bundle { required, .. } => required
                .iter()
                .all(|name| order.items().iter().any(|item| item.product_name == *name)),
            Self::BulkDay => order.items().iter().any(|item| item.quantity >= 10),
        }
    }

    fn apply(&self, order: &mut Order) {
        match self {
            Self::Threshold(rules) => {
                let discount: i64 = rules
                    .iter()
                    .filter(|rule| order.original_amount() >= rule.threshold)
                    .map(|rule| rule.discount)
                    .sum();
                debug!("threshold rules granted {discount}");
                order.apply_discount(discount);
            }
            Self::BogoCosmetics => {
                for item in order.items_mut() {
                    if item.category.as_deref() == Some("cosmetics") {
                        item.quantity += 1;
                    }
                }
            }
            Self::CategoryDiscount { category, percent } => {
                let subtotal: i64 = order
                    .items()
                    .iter()
                    .filter(|item| item.category.as_deref() == Some(category.as_str()))
                    .map(OrderItem::subtotal)
                    .sum();
                order.apply_discount((subtotal as f64 * percent) as i64);
            }
            Self::Bundle { discount, .. } => order.apply_discount(*discount),
            Self::BulkDay => {
                let total = order.items().iter().map(bulk_price).sum();
                order.reprice(total);
            }
        }
    }
}

fn bulk_price(item: &OrderItem) -> i64 {
    let groups = i64::from(item.quantity / 10);
    let rest = i64::from(item.quantity % 10);
    groups * 8 * item.unit_price + rest * item.unit_price
}

pub struct Checkout {
    promotions: Vec<Promotion>,
}

impl Checkout {
    pub fn new() -> Self {
        Self { promotions: Vec::new() }
    }

    pub fn with(promotions: Vec<Promotion>) -> Self {
        Self { promotions }
    }

    pub fn enable(&mut self, promotion: Promotion) {
        self.promotions.push(promotion);
    }

    pub fn place_order(&self, items: Vec<OrderItem>) -> Order {
        let mut order = Order::new(items);

        // bulk day repricing wins outright over everything else
        if let Some(bulk) = self.promotions.iter().find(|p| matches!(p, Promotion::BulkDay)) {
            if bulk.applies(&order) {
                bulk.apply(&mut order);
                debug!("bulk day override, order repriced to {}", order.total_amount());
                return order;
            }
        }

        for promotion in &self.promotions {
            if promotion.applies(&order) {
                promotion.apply(&mut order);
            }
        }

        order
    }
}
