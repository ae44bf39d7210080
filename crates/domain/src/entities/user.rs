//! 用户实体定义
//!
//! 用户的名字和邮箱采用"替换而非拒绝"的策略：未通过纯字母检查的值
//! 会被静默替换为固定占位符（广告的标题/正文则是校验失败直接拒绝，
//! 两种策略并存，不要统一）。

use serde::{Deserialize, Serialize};

/// 名字未通过纯字母检查时的占位符
pub const NAME_PLACEHOLDER: &str = "auto-generated-string";
/// 邮箱未通过纯字母检查时的占位符
pub const EMAIL_PLACEHOLDER: &str = "auto-generated-email";

/// 用户实体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 用户唯一ID（由仓储在创建时分配，从0开始单调递增）
    pub id: i64,
    /// 名字
    pub name: String,
    /// 邮箱
    pub email: String,
}

/// 待创建的用户，ID 由仓储分配
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// 纯字母检查（等价于 `^[A-Za-z]+$`）
fn is_letters(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}

impl NewUser {
    /// 创建新用户，对名字和邮箱分别应用占位符替换
    pub fn sanitized(name: impl Into<String>, email: impl Into<String>) -> Self {
        let name = name.into();
        let email = email.into();
        Self {
            name: if is_letters(&name) {
                name
            } else {
                NAME_PLACEHOLDER.to_string()
            },
            email: if is_letters(&email) {
                email
            } else {
                EMAIL_PLACEHOLDER.to_string()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name_kept() {
        let user = NewUser::sanitized("John", "johnmail");
        assert_eq!(user.name, "John");
        assert_eq!(user.email, "johnmail");
    }

    #[test]
    fn test_non_alphabetic_name_replaced() {
        let user = NewUser::sanitized("Привет", "johnmail");
        assert_eq!(user.name, NAME_PLACEHOLDER);
        assert_eq!(user.email, "johnmail");
    }

    #[test]
    fn test_real_email_replaced() {
        // 纯字母检查对真实邮箱必然失败，占位符行为保持不变
        let user = NewUser::sanitized("John", "example@gmail.com");
        assert_eq!(user.name, "John");
        assert_eq!(user.email, EMAIL_PLACEHOLDER);
    }

    #[test]
    fn test_empty_fields_replaced() {
        let user = NewUser::sanitized("", "");
        assert_eq!(user.name, NAME_PLACEHOLDER);
        assert_eq!(user.email, EMAIL_PLACEHOLDER);
    }

    #[test]
    fn test_fields_sanitized_independently() {
        let user = NewUser::sanitized("John Smith", "mail");
        assert_eq!(user.name, NAME_PLACEHOLDER);
        assert_eq!(user.email, "mail");
    }
}
