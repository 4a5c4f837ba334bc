//! Route handlers, one module per endpoint.

pub mod health;
pub mod predict;
pub mod root;
