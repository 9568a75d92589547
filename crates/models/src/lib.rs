//! SeaORM entities for the customer, order and product tables, plus the
//! request bodies that create and patch them.

pub mod errors;
pub mod db;
pub mod fields;
pub mod customer;
pub mod order;
pub mod product;
