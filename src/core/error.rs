//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

/// 核心错误类型
///
/// NotFound 对应资源缺失的 404 空响应体；数据库错误统一映射为 500，
/// 细节只进日志，不泄露给客户端。
#[derive(Debug)]
pub enum CoreError {
    NotFound,
    Database(sqlx::Error),
}

/// 内部错误的响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
    pub request_id: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            CoreError::NotFound => StatusCode::NOT_FOUND.into_response(),
            CoreError::Database(e) => {
                error!("Database error: {}", e);

                let error_response = ErrorResponse {
                    error: "INTERNAL_SERVER_ERROR".to_string(),
                    message: "Database error".to_string(),
                    code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    timestamp: chrono::Utc::now().to_rfc3339(),
                    request_id: Uuid::new_v4().to_string(),
                };

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(error_response),
                )
                    .into_response()
            }
        }
    }
}

impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        CoreError::Database(err)
    }
}
