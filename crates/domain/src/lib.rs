//! 领域层
//!
//! 包含实体、领域错误以及Repository接口定义。

pub mod entities;
pub mod errors;
pub mod repositories;

pub use entities::{Ad, NewAd, NewUser, User};
pub use errors::{DomainError, DomainResult};
pub use repositories::{AdFilter, AdRepository, UserRepository};
