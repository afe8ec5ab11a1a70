pub mod aggregate;
pub mod catalog;
pub mod export;
pub mod filter;
pub mod selection;
pub mod session;
