#[derive(Clone, Eq, PartialEq, Debug)]
pub struct OrderItem {
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: i64,
    pub category: Option<String>,
}

impl OrderItem {
    pub fn new(product_name: impl Into<String>, quantity: u32, unit_price: i64) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            unit_price,
            category: None,
        }
    }

    pub fn with_category(
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: i64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::new(product_name, quantity, unit_price)
        }
    }

    pub fn subtotal(&self) -> i64 {
        i64::from(self.quantity) * self.unit_price
    }
}

/// `original_amount` is fixed when the order is created; a quantity bumped
/// for display afterwards does not change what is charged.
#[derive(Clone, Debug)]
pub struct Order {
    items: Vec<OrderItem>,
    original_amount: i64,
    discount: i64,
}

impl Order {
    pub fn new(items: Vec<OrderItem>) -> Self {
        let original_amount = items.iter().map(OrderItem::subtotal).sum();
        Self {
            items,
            original_amount,
            discount: 0,
        }
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut [OrderItem] {
        &mut self.items
    }

    pub fn original_amount(&self) -> i64 {
        self.original_amount
    }

    pub fn discount(&self) -> i64 {
        self.discount
    }

    pub fn total_amount(&self) -> i64 {
        self.original_amount - self.discount
    }

    pub fn apply_discount(&mut self, amount: i64) {
        self.discount += amount;
    }

    pub(crate) fn reprice(&mut self, original_amount: i64) {
        self.original_amount = original_amount;
        self.discount = 0;
    }
}
