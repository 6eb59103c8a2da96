use std::path::Path;

use crate::catalog::Catalog;
use crate::core::Config;
use crate::inventory::Inventory;
use crate::orders::OrderStore;
use crate::session::SessionStore;

/// 应用状态 - 持有所有共享集合的单例
///
/// 终端的全部可变状态集中在这里，由组合根 (`main`) 独占持有，
/// 按需以 `&`/`&mut` 借给各个 surface 处理器，不使用全局可变量。
///
/// # 组件
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | catalog | 商品与加料组目录 |
/// | inventory | 食材库存 |
/// | orders | 已提交订单存储 |
/// | session | 当前登录会话持久化 |
#[derive(Debug)]
pub struct AppState {
    /// 终端配置
    pub config: Config,
    /// 商品目录
    pub catalog: Catalog,
    /// 食材库存
    pub inventory: Inventory,
    /// 订单存储
    pub orders: OrderStore,
    /// 会话存储
    pub session: SessionStore,
}

impl AppState {
    /// 以种子数据构建状态（目录、库存均来自启动常量）
    pub fn seeded(config: Config) -> Self {
        let session = SessionStore::new(Path::new(&config.work_dir));
        Self {
            catalog: Catalog::seeded(),
            inventory: Inventory::seeded(),
            orders: OrderStore::new(),
            session,
            config,
        }
    }

}
