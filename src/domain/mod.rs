pub mod catalog;
pub mod listing;
pub mod pagination;
pub mod pricing;
pub mod review;
pub mod search;
