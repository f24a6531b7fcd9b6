pub mod org_repo;
pub mod price_book_repo;
pub mod product_repo;
pub mod rate_card_repo;
pub mod unit_repo;
pub mod user_repo;

pub use org_repo::OrgRepo;
pub use price_book_repo::PriceBookRepo;
pub use product_repo::ProductRepo;
pub use rate_card_repo::RateCardRepo;
pub use unit_repo::UnitRepo;
pub use user_repo::UserRepo;
