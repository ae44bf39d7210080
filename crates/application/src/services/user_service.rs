//! 用户用例服务

use std::sync::Arc;

use domain::{NewUser, UserRepository};

use crate::{dto::UserDto, error::ApplicationError};

pub struct UserServiceDependencies {
    pub user_repository: Arc<dyn UserRepository>,
}

pub struct UserService {
    deps: UserServiceDependencies,
}

impl UserService {
    pub fn new(deps: UserServiceDependencies) -> Self {
        Self { deps }
    }

    /// 创建用户，名字和邮箱在领域层做占位符替换
    pub async fn create_user(
        &self,
        name: String,
        email: String,
    ) -> Result<UserDto, ApplicationError> {
        let user = self
            .deps
            .user_repository
            .create(NewUser::sanitized(name, email))
            .await?;
        tracing::info!(user_id = user.id, "user created");
        Ok(user.into())
    }

    pub async fn get_user(&self, id: i64) -> Result<UserDto, ApplicationError> {
        let user = self.deps.user_repository.get(id).await?;
        Ok(user.into())
    }

    /// 更新用户，值原样写入（与创建不同，这里不做占位符替换）
    pub async fn update_user(
        &self,
        id: i64,
        name: String,
        email: String,
    ) -> Result<UserDto, ApplicationError> {
        let user = self.deps.user_repository.update(id, name, email).await?;
        Ok(user.into())
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApplicationError> {
        self.deps.user_repository.delete(id).await?;
        Ok(())
    }
}
