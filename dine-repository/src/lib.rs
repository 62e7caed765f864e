//! Stateless repositories over a caller-supplied connection.
//!
//! Every method takes the connection explicitly, so the same call works on the
//! pool or inside a request-scoped transaction.

pub mod menu_item;
pub mod order;
pub mod order_detail;

pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use order_detail::OrderDetailRepository;
