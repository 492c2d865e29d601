pub mod admin;
pub mod claim;
pub mod select;
pub mod vault;
