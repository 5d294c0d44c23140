//! One repository per table: a zero-sized struct whose async methods
//! take `&PgPool` as their first argument.

pub mod audit_repo;
pub mod hackatime_link_repo;
pub mod project_repo;
pub mod review_repo;
pub mod session_repo;
pub mod shop_item_repo;
pub mod user_repo;

pub use audit_repo::AuditLogRepo;
pub use hackatime_link_repo::HackatimeLinkRepo;
pub use project_repo::ProjectRepo;
pub use review_repo::ReviewRepo;
pub use session_repo::SessionRepo;
pub use shop_item_repo::ShopItemRepo;
pub use user_repo::UserRepo;
