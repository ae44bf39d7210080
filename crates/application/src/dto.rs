//! 对外传输对象
//!
//! HTTP 与 RPC 两个适配器共用同一组 DTO。
//! 时间戳在线上序列化为 `create` / `update` 字段。

use chrono::{DateTime, Utc};
use domain::{Ad, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdDto {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub author_id: i64,
    pub published: bool,
    #[serde(rename = "create")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "update")]
    pub updated_at: DateTime<Utc>,
}

impl From<Ad> for AdDto {
    fn from(ad: Ad) -> Self {
        Self {
            id: ad.id,
            title: ad.title,
            text: ad.text,
            author_id: ad.author_id,
            published: ad.published,
            created_at: ad.created_at,
            updated_at: ad.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ad_dto_wire_field_names() {
        let now = Utc::now();
        let dto = AdDto::from(Ad {
            id: 1,
            title: "hello".to_string(),
            text: "hello text".to_string(),
            author_id: 0,
            created_at: now,
            updated_at: now,
            published: true,
        });
        let value = serde_json::to_value(&dto).unwrap();
        assert!(value.get("create").is_some());
        assert!(value.get("update").is_some());
        assert!(value.get("created_at").is_none());
        assert_eq!(value["author_id"], 0);
    }
}
