//! # Product Service
//!
//! 基于 axum + sqlx 的单实体产品 CRUD REST 服务：
//! - Handler 层把 HTTP 请求翻译成存储调用并映射状态码
//! - Store 层抽象 products 表的增删改查和过滤查询
//! - 单行操作的原子性与并发一致性委托给 PostgreSQL

pub mod app;
pub mod core;
pub mod infrastructure;
