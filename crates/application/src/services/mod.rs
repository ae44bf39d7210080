//! 用例服务

pub mod ad_service;
pub mod user_service;


pub use ad_service::{AdFilterQuery, AdService, AdServiceDependencies};
pub use user_service::{UserService, UserServiceDependencies};
