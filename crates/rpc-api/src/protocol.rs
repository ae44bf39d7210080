//! RPC 线协议
//!
//! 每行一个 JSON 请求、每行一个 JSON 响应。请求是带 `method` 标签的
//! 枚举，响应为 `{"result": ..., "error": null}` 或
//! `{"result": null, "error": {"code": ..., "message": ...}}`。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// RPC 请求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum RpcRequest {
    CreateAd {
        user_id: i64,
        title: String,
        text: String,
    },
    UpdateAd {
        ad_id: i64,
        user_id: i64,
        title: String,
        text: String,
    },
    ChangeAdStatus {
        ad_id: i64,
        user_id: i64,
        published: bool,
    },
    DeleteAd {
        ad_id: i64,
        author_id: i64,
    },
    ListAds {
        title: String,
    },
    CreateUser {
        name: String,
        email: String,
    },
    GetUser {
        id: i64,
    },
    UpdateUser {
        id: i64,
        name: String,
        email: String,
    },
    DeleteUser {
        id: i64,
    },
}

/// RPC 错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RpcCode {
    InvalidArgument,
    NotFound,
    Unauthenticated,
    PermissionDenied,
    Unknown,
}

/// RPC 错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: RpcCode,
    pub message: String,
}

/// RPC 响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    pub result: Option<Value>,
    pub error: Option<RpcError>,
}

impl RpcResponse {
    pub fn ok(result: Value) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    pub fn err(code: RpcCode, message: impl Into<String>) -> Self {
        Self {
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_format() {
        let frame = json!({
            "method": "CreateAd",
            "params": { "user_id": 0, "title": "hello", "text": "hello text" }
        });
        let request: RpcRequest = serde_json::from_value(frame).unwrap();
        assert_eq!(
            request,
            RpcRequest::CreateAd {
                user_id: 0,
                title: "hello".to_string(),
                text: "hello text".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        let frame = json!({ "method": "DropTables", "params": {} });
        assert!(serde_json::from_value::<RpcRequest>(frame).is_err());
    }

    #[test]
    fn test_error_code_wire_names() {
        let response = RpcResponse::err(RpcCode::PermissionDenied, "access forbidden");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["error"]["code"], "permission_denied");
        assert!(value["result"].is_null());
    }
}
