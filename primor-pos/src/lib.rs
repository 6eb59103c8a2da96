//! Primor POS - 小吃店单机销售终端核心
//!
//! Single-process point-of-sale core for a snack shop: catalog and
//! inventory state, cart pricing with complement validation, the order
//! lifecycle engine with its stock side effect, and the four role surfaces.
//! Rendering, form input and charts are collaborator concerns and live
//! outside this crate.
//!
//! # 模块结构
//!
//! ```text
//! primor-pos/src/
//! ├── core/        # 配置、状态、错误
//! ├── catalog/     # 商品与加料组
//! ├── inventory/   # 库存
//! ├── cart/        # 购物车与定价
//! ├── money.rs     # Decimal 精度计算
//! ├── orders/      # 订单存储、生命周期、统计
//! ├── session/     # 当前登录会话持久化
//! ├── surfaces/    # 四个角色的控制器
//! └── utils/       # 日志
//! ```

pub mod cart;
pub mod catalog;
pub mod core;
pub mod inventory;
pub mod money;
pub mod orders;
pub mod session;
pub mod surfaces;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{AppError, AppResult, AppState, Config};
pub use crate::orders::{LifecycleError, OrderStore, set_order_status};
pub use crate::surfaces::Surface;

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};
