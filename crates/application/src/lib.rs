//! 应用层
//!
//! 用例服务：校验输入、解析操作者、把调用委托给仓储，
//! 并把领域实体转换为对外 DTO。

pub mod dto;
pub mod error;
pub mod services;

pub use dto::{AdDto, UserDto};
pub use error::ApplicationError;
pub use services::{
    AdFilterQuery, AdService, AdServiceDependencies, UserService, UserServiceDependencies,
};
