pub mod common;
pub mod order_detail;
pub mod prelude;
