//! Repository接口定义

pub mod ad_repository;
pub mod user_repository;

pub use ad_repository::{AdFilter, AdRepository};
pub use user_repository::UserRepository;
