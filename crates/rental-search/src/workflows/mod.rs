pub mod catalog;
pub mod engagement;
pub mod search;
