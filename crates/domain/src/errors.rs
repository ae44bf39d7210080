//! 领域模型错误定义
//!
//! 封闭的错误枚举，适配器边界对其进行穷尽匹配。

use thiserror::Error;

/// 领域模型错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 广告不存在
    #[error("no such ad")]
    AdNotFound,

    /// 用户不存在
    #[error("no such user")]
    UserNotFound,

    /// 访问被拒绝（非作者尝试修改广告）
    #[error("access forbidden")]
    AccessForbidden,

    /// 字段校验失败
    #[error("validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    /// 过滤参数无法解析
    #[error("malformed query: {message}")]
    MalformedQuery { message: String },
}

impl DomainError {
    /// 创建校验错误
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 创建查询参数错误
    pub fn malformed_query(message: impl Into<String>) -> Self {
        Self::MalformedQuery {
            message: message.into(),
        }
    }
}

/// 领域模型结果类型
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(DomainError::AdNotFound.to_string(), "no such ad");
        assert_eq!(DomainError::UserNotFound.to_string(), "no such user");
        assert_eq!(DomainError::AccessForbidden.to_string(), "access forbidden");
        assert_eq!(
            DomainError::validation("title", "too short").to_string(),
            "validation failed: title: too short"
        );
        assert_eq!(
            DomainError::malformed_query("bad date").to_string(),
            "malformed query: bad date"
        );
    }
}
