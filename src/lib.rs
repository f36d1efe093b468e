//! # 文档存储 CRUD 应用
//!
//! 三个独立的单进程 Web 应用，共享同一套分层结构：
//! - `inventory`：库存目录，商品的增删查
//! - `projects`：项目管理，项目及内嵌任务
//! - `storefront`：商城，商品目录加浏览器端购物车
//!
//! 每个应用都由 REST API、文档存储和内联的 HTML 页面组成。

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::build_router;
pub use config::{AppConfig, AppKind};
