//! RPC 服务器
//!
//! TCP 监听，每个连接一个任务。请求处理中的 panic 被捕获并转换为
//! 通用失败响应，连接保持存活。

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use application::{AdService, ApplicationError, UserService};
use domain::DomainError;
use futures::FutureExt;
use serde_json::json;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::{tcp::OwnedWriteHalf, TcpListener, TcpStream},
    sync::watch,
};

use crate::protocol::{RpcCode, RpcError, RpcRequest, RpcResponse};

#[derive(Clone)]
pub struct RpcState {
    pub ad_service: Arc<AdService>,
    pub user_service: Arc<UserService>,
}

impl RpcState {
    pub fn new(ad_service: Arc<AdService>, user_service: Arc<UserService>) -> Self {
        Self {
            ad_service,
            user_service,
        }
    }
}

/// 接受连接直到收到停机信号
pub async fn serve(
    listener: TcpListener,
    state: RpcState,
    mut shutdown: watch::Receiver<bool>,
) -> std::io::Result<()> {
    loop {
        tokio::select! {
            _ = shutdown.changed() => {
                tracing::info!("rpc server shutting down");
                return Ok(());
            }
            accepted = listener.accept() => {
                let (stream, peer) = accepted?;
                tracing::debug!(%peer, "rpc connection accepted");
                tokio::spawn(handle_connection(stream, state.clone()));
            }
        }
    }
}

async fn handle_connection(stream: TcpStream, state: RpcState) {
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        if line.trim().is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<RpcRequest>(&line) {
            Ok(request) => {
                match AssertUnwindSafe(dispatch(&state, request)).catch_unwind().await {
                    Ok(response) => response,
                    Err(_) => {
                        tracing::error!("panic while handling rpc request");
                        RpcResponse::err(RpcCode::Unknown, "internal failure")
                    }
                }
            }
            Err(err) => {
                RpcResponse::err(RpcCode::InvalidArgument, format!("invalid request frame: {err}"))
            }
        };
        if write_response(&mut write_half, &response).await.is_err() {
            break;
        }
    }
}

async fn write_response(
    write_half: &mut OwnedWriteHalf,
    response: &RpcResponse,
) -> std::io::Result<()> {
    let mut payload = serde_json::to_vec(response).unwrap_or_else(|_| b"{}".to_vec());
    payload.push(b'\n');
    write_half.write_all(&payload).await
}

/// 把单个请求分派给对应的用例服务
pub async fn dispatch(state: &RpcState, request: RpcRequest) -> RpcResponse {
    match request {
        RpcRequest::CreateAd {
            user_id,
            title,
            text,
        } => to_response(state.ad_service.create_ad(user_id, title, text).await),
        RpcRequest::UpdateAd {
            ad_id,
            user_id,
            title,
            text,
        } => to_response(state.ad_service.update_ad(ad_id, user_id, title, text).await),
        RpcRequest::ChangeAdStatus {
            ad_id,
            user_id,
            published,
        } => to_response(state.ad_service.change_status(ad_id, user_id, published).await),
        RpcRequest::DeleteAd { ad_id, author_id } => {
            match state.ad_service.delete_ad(ad_id, author_id).await {
                Ok(()) => RpcResponse::ok(json!({ "success": true })),
                Err(err) => from_error(err),
            }
        }
        RpcRequest::ListAds { title } => match state.ad_service.find_by_title(&title).await {
            Ok(ads) if ads.is_empty() => {
                RpcResponse::err(RpcCode::NotFound, DomainError::AdNotFound.to_string())
            }
            Ok(ads) => to_response(Ok(ads)),
            Err(err) => from_error(err),
        },
        RpcRequest::CreateUser { name, email } => {
            to_response(state.user_service.create_user(name, email).await)
        }
        RpcRequest::GetUser { id } => to_response(state.user_service.get_user(id).await),
        RpcRequest::UpdateUser { id, name, email } => {
            to_response(state.user_service.update_user(id, name, email).await)
        }
        RpcRequest::DeleteUser { id } => match state.user_service.delete_user(id).await {
            Ok(()) => RpcResponse::ok(json!({ "success": true })),
            Err(err) => from_error(err),
        },
    }
}

fn to_response<T: serde::Serialize>(result: Result<T, ApplicationError>) -> RpcResponse {
    match result {
        Ok(payload) => match serde_json::to_value(payload) {
            Ok(value) => RpcResponse::ok(value),
            Err(err) => RpcResponse::err(RpcCode::Unknown, err.to_string()),
        },
        Err(err) => from_error(err),
    }
}

fn from_error(error: ApplicationError) -> RpcResponse {
    let message = error.to_string();
    let code = match error {
        ApplicationError::Domain(DomainError::Validation { .. })
        | ApplicationError::Domain(DomainError::MalformedQuery { .. }) => RpcCode::InvalidArgument,
        ApplicationError::Domain(DomainError::AdNotFound)
        | ApplicationError::Domain(DomainError::UserNotFound) => RpcCode::NotFound,
        ApplicationError::Domain(DomainError::AccessForbidden) => RpcCode::PermissionDenied,
        ApplicationError::Authentication => RpcCode::Unauthenticated,
    };
    RpcResponse {
        result: None,
        error: Some(RpcError { code, message }),
    }
}
