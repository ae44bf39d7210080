use domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    /// 操作用户不存在（广告变更接口先解析操作者，解析失败与
    /// 实体缺失是两种不同的错误）
    #[error("authentication failed: no such user")]
    Authentication,
}
