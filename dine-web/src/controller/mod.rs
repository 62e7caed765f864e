//! Request-scoped business operations.
//!
//! Each operation owns the transaction it is handed: it commits on success and
//! lets the transaction drop (rolling it back) on every error path.

pub mod order_detail;
