//! 用户Repository接口定义

use crate::entities::user::{NewUser, User};
use crate::errors::DomainResult;
use async_trait::async_trait;

/// 用户Repository接口
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 创建用户：分配ID并存储
    async fn create(&self, draft: NewUser) -> DomainResult<User>;

    /// 更新名字与邮箱（无所有权检查，任何调用方都可以改名）
    async fn update(&self, id: i64, name: String, email: String) -> DomainResult<User>;

    /// 删除用户
    async fn delete(&self, id: i64) -> DomainResult<()>;

    /// 按ID查找用户
    async fn get(&self, id: i64) -> DomainResult<User>;
}
