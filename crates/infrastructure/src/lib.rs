//! 基础设施层
//!
//! 提供领域Repository接口的内存实现。

pub mod memory;

pub use memory::{MemoryAdRepository, MemoryUserRepository};
