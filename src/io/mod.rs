pub mod store;
pub mod transfer;
