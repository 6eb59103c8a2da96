//! Primor POS terminal entry point
//!
//! Composition root: configuration, logging, seeded state, session restore
//! and the one-time surface selection for the logged-in role.

use anyhow::Result;
use primor_pos::core::{AppState, Config};
use primor_pos::surfaces::Surface;
use primor_pos::utils::logger::init_logger_with_file;

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!(
        work_dir = %config.work_dir,
        environment = %config.environment,
        "Primor POS starting"
    );

    let state = AppState::seeded(config);
    tracing::info!(
        products = state.catalog.products().len(),
        ingredients = state.inventory.ingredients().len(),
        "Catalog and inventory seeded"
    );

    // 恢复上次登录；无会话时回落到收银员演示账号
    let record = match state.session.load()? {
        Some(record) => record,
        None => state.session.login("caixa1")?,
    };

    let surface = Surface::for_role(record.user.role);
    tracing::info!(
        user = %record.user.name,
        role = ?record.user.role,
        surface = surface.name(),
        "Surface selected"
    );

    Ok(())
}
