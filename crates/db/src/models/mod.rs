pub mod org;
pub mod price_book;
pub mod product;
pub mod rate_card;
pub mod unit;
pub mod user;
