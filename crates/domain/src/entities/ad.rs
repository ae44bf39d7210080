//! 广告实体定义
//!
//! 广告属于唯一的作者，只有作者可以修改、删除或改变发布状态。

use crate::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 标题长度限制（字符数）
pub const TITLE_MIN_LEN: usize = 4;
pub const TITLE_MAX_LEN: usize = 100;

/// 正文长度限制（字符数）
pub const TEXT_MIN_LEN: usize = 4;
pub const TEXT_MAX_LEN: usize = 500;

/// 广告实体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ad {
    /// 广告唯一ID（由仓储在创建时分配，从0开始单调递增）
    pub id: i64,
    /// 标题
    pub title: String,
    /// 正文
    pub text: String,
    /// 作者ID（指向用户）
    pub author_id: i64,
    /// 创建时间（创建后不可变）
    pub created_at: DateTime<Utc>,
    /// 更新时间（每次成功修改都会刷新）
    pub updated_at: DateTime<Utc>,
    /// 发布状态（默认未发布）
    pub published: bool,
}

/// 待创建的广告，ID 与时间戳由仓储分配
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAd {
    pub author_id: i64,
    pub title: String,
    pub text: String,
}

impl NewAd {
    pub fn new(author_id: i64, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author_id,
            title: title.into(),
            text: text.into(),
        }
    }
}

impl Ad {
    /// 验证标题长度（4-100个字符）
    pub fn validate_title(title: &str) -> DomainResult<()> {
        let len = title.chars().count();
        if len < TITLE_MIN_LEN || len > TITLE_MAX_LEN {
            return Err(DomainError::validation(
                "title",
                format!(
                    "length must be between {} and {} characters",
                    TITLE_MIN_LEN, TITLE_MAX_LEN
                ),
            ));
        }
        Ok(())
    }

    /// 验证正文长度（4-500个字符）
    pub fn validate_text(text: &str) -> DomainResult<()> {
        let len = text.chars().count();
        if len < TEXT_MIN_LEN || len > TEXT_MAX_LEN {
            return Err(DomainError::validation(
                "text",
                format!(
                    "length must be between {} and {} characters",
                    TEXT_MIN_LEN, TEXT_MAX_LEN
                ),
            ));
        }
        Ok(())
    }

    /// 检查给定用户是否为作者
    pub fn is_authored_by(&self, user_id: i64) -> bool {
        self.author_id == user_id
    }
}
