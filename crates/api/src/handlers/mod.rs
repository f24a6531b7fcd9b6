pub mod price;
pub mod price_books;
pub mod products;
pub mod rate_cards;
pub mod rates;
pub mod units;
