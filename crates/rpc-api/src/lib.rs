//! RPC API 层。
//!
//! 通过 TCP 上的按行 JSON 协议暴露与 HTTP 相同的用例服务。

pub mod protocol;
pub mod server;

pub use protocol::{RpcCode, RpcError, RpcRequest, RpcResponse};
pub use server::{dispatch, serve, RpcState};
