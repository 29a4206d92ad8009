//! Sales domain module: shopping cart and deals.
//!
//! Pure logic over the injected catalog. Nothing here talks to a payment
//! provider; checkout stops at computing totals.

pub mod cart;
pub mod deals;

pub use cart::{Cart, CartLine, CartTotals, CheckoutPolicy, QuantityUpdate};
pub use deals::{Deal, DealBoard, DealKind, DealProduct, ScheduledDeal};
