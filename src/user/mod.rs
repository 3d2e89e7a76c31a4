pub mod user_models;
pub mod user_repository;
pub mod user_source;

pub use user_models::UserRecord;
pub use user_repository::UserRepository;
pub use user_source::UserSource;
