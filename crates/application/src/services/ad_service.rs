//! 广告用例服务
//!
//! 负责输入校验、操作者解析与过滤参数解析，然后委托给仓储。

use std::sync::Arc;

use chrono::NaiveDate;
use domain::{Ad, AdFilter, AdRepository, DomainError, NewAd, UserRepository};

use crate::{dto::AdDto, error::ApplicationError};

/// 原始的过滤查询参数，按字符串透传，解析失败视为 MalformedQuery
#[derive(Debug, Clone, Default)]
pub struct AdFilterQuery {
    pub author: Option<String>,
    pub date: Option<String>,
    pub title: Option<String>,
    /// 仅看是否出现，不携带值
    pub published: bool,
}

impl AdFilterQuery {
    fn parse(self) -> Result<AdFilter, DomainError> {
        let author = match self.author {
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
                DomainError::malformed_query(format!("invalid author id: {raw}"))
            })?),
            None => None,
        };
        let created_on = match self.date {
            Some(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| DomainError::malformed_query(format!("invalid date: {raw}")))?,
            ),
            None => None,
        };
        Ok(AdFilter {
            author,
            created_on,
            title: self.title,
            published_only: self.published,
        })
    }
}

pub struct AdServiceDependencies {
    pub ad_repository: Arc<dyn AdRepository>,
    pub user_repository: Arc<dyn UserRepository>,
}

pub struct AdService {
    deps: AdServiceDependencies,
}

impl AdService {
    pub fn new(deps: AdServiceDependencies) -> Self {
        Self { deps }
    }

    /// 解析操作用户，用户不存在时报认证失败而不是实体缺失
    async fn resolve_author(&self, user_id: i64) -> Result<(), ApplicationError> {
        match self.deps.user_repository.get(user_id).await {
            Ok(_) => Ok(()),
            Err(DomainError::UserNotFound) => Err(ApplicationError::Authentication),
            Err(err) => Err(ApplicationError::Domain(err)),
        }
    }

    fn validate(title: &str, text: &str) -> Result<(), ApplicationError> {
        Ad::validate_title(title)?;
        Ad::validate_text(text)?;
        Ok(())
    }

    pub async fn create_ad(
        &self,
        user_id: i64,
        title: String,
        text: String,
    ) -> Result<AdDto, ApplicationError> {
        self.resolve_author(user_id).await?;
        Self::validate(&title, &text)?;

        let ad = self
            .deps
            .ad_repository
            .create(NewAd::new(user_id, title, text))
            .await?;
        tracing::info!(ad_id = ad.id, author_id = user_id, "ad created");
        Ok(ad.into())
    }

    pub async fn update_ad(
        &self,
        ad_id: i64,
        user_id: i64,
        title: String,
        text: String,
    ) -> Result<AdDto, ApplicationError> {
        self.resolve_author(user_id).await?;
        Self::validate(&title, &text)?;

        let ad = self
            .deps
            .ad_repository
            .update(ad_id, user_id, title, text)
            .await?;
        Ok(ad.into())
    }

    pub async fn change_status(
        &self,
        ad_id: i64,
        user_id: i64,
        published: bool,
    ) -> Result<AdDto, ApplicationError> {
        self.resolve_author(user_id).await?;
        let ad = self
            .deps
            .ad_repository
            .publish(ad_id, user_id, published)
            .await?;
        Ok(ad.into())
    }

    pub async fn delete_ad(&self, ad_id: i64, author_id: i64) -> Result<(), ApplicationError> {
        self.deps.ad_repository.delete(ad_id, author_id).await?;
        Ok(())
    }

    pub async fn get_ad(&self, id: i64) -> Result<AdDto, ApplicationError> {
        let ad = self.deps.ad_repository.get_by_id(id).await?;
        Ok(ad.into())
    }

    /// 按标题子串查找已发布的广告
    pub async fn find_by_title(&self, title: &str) -> Result<Vec<AdDto>, ApplicationError> {
        let ads = self.deps.ad_repository.get_by_name(title).await?;
        Ok(ads.into_iter().map(AdDto::from).collect())
    }

    /// 按查询参数过滤广告
    pub async fn filter(&self, query: AdFilterQuery) -> Result<Vec<AdDto>, ApplicationError> {
        let filter = query.parse()?;
        let ads = self.deps.ad_repository.filter(&filter).await?;
        Ok(ads.into_iter().map(AdDto::from).collect())
    }
}
