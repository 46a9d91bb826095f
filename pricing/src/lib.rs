pub mod order;
pub mod promotion;

pub use order::{Order, OrderItem};
pub use promotion::{Checkout, Promotion, ThresholdRule};
