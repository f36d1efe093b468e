//! 核心层：错误、响应、请求校验、中间件与服务启动

pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
pub mod server;
