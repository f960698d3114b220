pub mod card;
pub mod error;
pub mod pagination;

pub use card::{card, listing_card};
pub use error::{empty_state, inline_error};
pub use pagination::{pagination_nav, Pager};
