//! 统一错误处理
//!
//! 应用级错误枚举。业务错误分三类（与错误处理设计一致）：
//!
//! | 分类 | 说明 | 处理方式 |
//! |------|------|----------|
//! | 验证失败 | 加料选择不完整、空购物车、字段校验 | 返回给调用方，用户修正后重试 |
//! | 查找未命中 | 未知订单号、未知食材 | 返回给调用方并记录 warn，状态不变 |
//! | 库存告警 | 库存到达或低于阈值 | 不是错误，仅展示层提示 |

use crate::cart::CartError;
use crate::orders::LifecycleError;
use crate::session::SessionError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::ProductNotFound(id) => AppError::NotFound(format!("product {id}")),
            other => AppError::Validation(other.to_string()),
        }
    }
}

impl From<LifecycleError> for AppError {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::OrderNotFound(id) => AppError::NotFound(format!("order {id}")),
            other @ LifecycleError::InvalidTransition { .. } => {
                AppError::BusinessRule(other.to_string())
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}
