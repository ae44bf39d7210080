//! 广告Repository接口定义

use crate::entities::ad::{Ad, NewAd};
use crate::errors::DomainResult;
use async_trait::async_trait;
use chrono::NaiveDate;

/// 广告过滤条件
///
/// 所有存在的条件按 AND 语义组合；条件全部缺省时返回全量广告。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdFilter {
    /// 按作者ID过滤
    pub author: Option<i64>,
    /// 按创建日期（年月日）过滤
    pub created_on: Option<NaiveDate>,
    /// 按标题精确匹配过滤
    pub title: Option<String>,
    /// 只返回已发布的广告
    pub published_only: bool,
}

impl AdFilter {
    /// 检查广告是否满足全部条件
    pub fn matches(&self, ad: &Ad) -> bool {
        if self.published_only && !ad.published {
            return false;
        }
        if let Some(author) = self.author {
            if ad.author_id != author {
                return false;
            }
        }
        if let Some(date) = self.created_on {
            if ad.created_at.date_naive() != date {
                return false;
            }
        }
        if let Some(ref title) = self.title {
            if ad.title != *title {
                return false;
            }
        }
        true
    }
}

/// 广告Repository接口
#[async_trait]
pub trait AdRepository: Send + Sync {
    /// 创建广告：分配ID与时间戳，发布状态默认关闭
    async fn create(&self, draft: NewAd) -> DomainResult<Ad>;

    /// 更新标题与正文，仅作者可操作
    async fn update(&self, id: i64, author_id: i64, title: String, text: String)
        -> DomainResult<Ad>;

    /// 删除广告，仅作者可操作
    async fn delete(&self, id: i64, author_id: i64) -> DomainResult<()>;

    /// 改变发布状态，仅作者可操作
    async fn publish(&self, id: i64, author_id: i64, published: bool) -> DomainResult<Ad>;

    /// 按ID查找广告
    async fn get_by_id(&self, id: i64) -> DomainResult<Ad>;

    /// 按标题子串查找已发布的广告；空子串匹配全部已发布广告，
    /// 无结果不是错误
    async fn get_by_name(&self, title: &str) -> DomainResult<Vec<Ad>>;

    /// 按条件过滤广告，全量扫描，无结果不是错误
    async fn filter(&self, filter: &AdFilter) -> DomainResult<Vec<Ad>>;
}
