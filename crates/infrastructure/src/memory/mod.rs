//! 内存仓储实现

pub mod ad_repository;
pub mod user_repository;

pub use ad_repository::MemoryAdRepository;
pub use user_repository::MemoryUserRepository;
