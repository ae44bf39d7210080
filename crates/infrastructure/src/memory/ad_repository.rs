//! 内存广告仓储
//!
//! 一把粗粒度互斥锁守护整个map，所有操作串行执行。
//! 点查 O(1)，列表/过滤为全量扫描 O(n)，迭代顺序不保证。

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use domain::{Ad, AdFilter, AdRepository, DomainError, DomainResult, NewAd};
use tokio::sync::Mutex;

struct AdStore {
    entries: HashMap<i64, Ad>,
    // 单调递增，删除时不回退，ID 永不复用
    next_id: i64,
}

/// 互斥锁守护的内存广告仓储
pub struct MemoryAdRepository {
    inner: Mutex<AdStore>,
}

impl MemoryAdRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(AdStore {
                entries: HashMap::new(),
                next_id: 0,
            }),
        }
    }
}

impl Default for MemoryAdRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdRepository for MemoryAdRepository {
    async fn create(&self, draft: NewAd) -> DomainResult<Ad> {
        let mut store = self.inner.lock().await;
        let now = Utc::now();
        let ad = Ad {
            id: store.next_id,
            title: draft.title,
            text: draft.text,
            author_id: draft.author_id,
            created_at: now,
            updated_at: now,
            published: false,
        };
        store.entries.insert(ad.id, ad.clone());
        store.next_id += 1;
        tracing::debug!(ad_id = ad.id, author_id = ad.author_id, "ad created");
        Ok(ad)
    }

    async fn update(
        &self,
        id: i64,
        author_id: i64,
        title: String,
        text: String,
    ) -> DomainResult<Ad> {
        let mut store = self.inner.lock().await;
        let ad = store.entries.get_mut(&id).ok_or(DomainError::AdNotFound)?;
        if ad.author_id != author_id {
            return Err(DomainError::AccessForbidden);
        }
        ad.title = title;
        ad.text = text;
        ad.updated_at = Utc::now();
        Ok(ad.clone())
    }

    async fn delete(&self, id: i64, author_id: i64) -> DomainResult<()> {
        let mut store = self.inner.lock().await;
        let ad = store.entries.get(&id).ok_or(DomainError::AdNotFound)?;
        if ad.author_id != author_id {
            return Err(DomainError::AccessForbidden);
        }
        store.entries.remove(&id);
        tracing::debug!(ad_id = id, "ad deleted");
        Ok(())
    }

    async fn publish(&self, id: i64, author_id: i64, published: bool) -> DomainResult<Ad> {
        let mut store = self.inner.lock().await;
        // 不存在与作者不匹配统一视为禁止访问
        let ad = store
            .entries
            .get_mut(&id)
            .filter(|ad| ad.author_id == author_id)
            .ok_or(DomainError::AccessForbidden)?;
        ad.published = published;
        ad.updated_at = Utc::now();
        Ok(ad.clone())
    }

    async fn get_by_id(&self, id: i64) -> DomainResult<Ad> {
        let store = self.inner.lock().await;
        store
            .entries
            .get(&id)
            .cloned()
            .ok_or(DomainError::AdNotFound)
    }

    async fn get_by_name(&self, title: &str) -> DomainResult<Vec<Ad>> {
        let store = self.inner.lock().await;
        Ok(store
            .entries
            .values()
            .filter(|ad| ad.published && ad.title.contains(title))
            .cloned()
            .collect())
    }

    async fn filter(&self, filter: &AdFilter) -> DomainResult<Vec<Ad>> {
        let store = self.inner.lock().await;
        Ok(store
            .entries
            .values()
            .filter(|ad| filter.matches(ad))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(author_id: i64, title: &str) -> NewAd {
        NewAd::new(author_id, title, "some ad text")
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = MemoryAdRepository::new();
        for expected in 0..5 {
            let ad = repo.create(draft(0, "hello")).await.unwrap();
            assert_eq!(ad.id, expected);
            assert!(!ad.published);
            assert_eq!(ad.created_at, ad.updated_at);
        }
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = MemoryAdRepository::new();
        let ad = repo.create(draft(0, "hello")).await.unwrap();
        repo.delete(ad.id, 0).await.unwrap();
        let next = repo.create(draft(0, "hello")).await.unwrap();
        assert_eq!(next.id, ad.id + 1);
    }

    #[tokio::test]
    async fn test_update_refreshes_fields_and_timestamp() {
        let repo = MemoryAdRepository::new();
        let ad = repo.create(draft(1, "old title")).await.unwrap();

        let updated = repo
            .update(ad.id, 1, "new title".to_string(), "new text".to_string())
            .await
            .unwrap();
        assert_eq!(updated.title, "new title");
        assert_eq!(updated.text, "new text");
        assert_eq!(updated.created_at, ad.created_at);
        assert!(updated.updated_at >= ad.created_at);

        let fetched = repo.get_by_id(ad.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_by_non_author_is_forbidden() {
        let repo = MemoryAdRepository::new();
        let ad = repo.create(draft(1, "hello")).await.unwrap();
        let err = repo
            .update(ad.id, 2, "other".to_string(), "other text".to_string())
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::AccessForbidden);
    }

    #[tokio::test]
    async fn test_update_missing_ad_is_not_found() {
        let repo = MemoryAdRepository::new();
        let err = repo
            .update(42, 0, "title".to_string(), "text".to_string())
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::AdNotFound);
    }

    #[tokio::test]
    async fn test_delete_missing_ad_is_not_found() {
        let repo = MemoryAdRepository::new();
        assert_eq!(repo.delete(0, 0).await.unwrap_err(), DomainError::AdNotFound);
    }

    #[tokio::test]
    async fn test_delete_by_non_author_is_forbidden() {
        let repo = MemoryAdRepository::new();
        let ad = repo.create(draft(1, "hello")).await.unwrap();
        assert_eq!(
            repo.delete(ad.id, 2).await.unwrap_err(),
            DomainError::AccessForbidden
        );
        // 广告仍然存在
        assert!(repo.get_by_id(ad.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_publish_missing_or_wrong_author_is_forbidden() {
        let repo = MemoryAdRepository::new();
        assert_eq!(
            repo.publish(42, 0, true).await.unwrap_err(),
            DomainError::AccessForbidden
        );
        let ad = repo.create(draft(1, "hello")).await.unwrap();
        assert_eq!(
            repo.publish(ad.id, 2, true).await.unwrap_err(),
            DomainError::AccessForbidden
        );
    }

    #[tokio::test]
    async fn test_publish_toggles_flag() {
        let repo = MemoryAdRepository::new();
        let ad = repo.create(draft(1, "hello")).await.unwrap();

        let published = repo.publish(ad.id, 1, true).await.unwrap();
        assert!(published.published);
        // 状态变更同样刷新更新时间，创建时间不变
        assert!(published.updated_at >= ad.updated_at);
        assert_eq!(published.created_at, ad.created_at);

        let unpublished = repo.publish(ad.id, 1, false).await.unwrap();
        assert!(!unpublished.published);
        assert!(unpublished.updated_at >= published.updated_at);
    }

    #[tokio::test]
    async fn test_get_by_name_returns_only_published() {
        let repo = MemoryAdRepository::new();
        let first = repo.create(draft(0, "red bicycle")).await.unwrap();
        let second = repo.create(draft(0, "blue bicycle")).await.unwrap();
        repo.create(draft(0, "red car")).await.unwrap();

        repo.publish(first.id, 0, true).await.unwrap();
        repo.publish(second.id, 0, true).await.unwrap();

        // 空子串匹配全部已发布广告
        let all_published = repo.get_by_name("").await.unwrap();
        assert_eq!(all_published.len(), 2);

        // 大小写敏感的子串匹配
        let bicycles = repo.get_by_name("bicycle").await.unwrap();
        assert_eq!(bicycles.len(), 2);
        assert!(repo.get_by_name("Bicycle").await.unwrap().is_empty());

        // 未发布的广告不会出现在结果中
        assert!(repo.get_by_name("car").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_filter_without_criteria_returns_all() {
        let repo = MemoryAdRepository::new();
        repo.create(draft(0, "hello")).await.unwrap();
        repo.create(draft(1, "best cat")).await.unwrap();

        let all = repo.filter(&AdFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_filter_and_semantics() {
        let repo = MemoryAdRepository::new();
        let a = repo.create(draft(0, "hello")).await.unwrap();
        let b = repo.create(draft(0, "hello")).await.unwrap();
        repo.create(draft(1, "best cat")).await.unwrap();

        repo.publish(a.id, 0, true).await.unwrap();
        repo.publish(b.id, 0, true).await.unwrap();

        let filter = AdFilter {
            author: Some(0),
            created_on: Some(Utc::now().date_naive()),
            title: Some("hello".to_string()),
            published_only: true,
        };
        let mut ids: Vec<i64> = repo
            .filter(&filter)
            .await
            .unwrap()
            .into_iter()
            .map(|ad| ad.id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![a.id, b.id]);
    }
}
