//! 当前会话持久化
//!
//! 单一登录用户记录，固定路径 `{work_dir}/auth/current_session.json`。
//! 登录时写入、登出时删除、启动时恢复。这是系统唯一的持久化数据。

mod users;

pub use users::{find, system_users};

use std::path::{Path, PathBuf};

use shared::models::User;
use shared::util::now_millis;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// 当前会话记录
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SessionRecord {
    pub user: User,
    pub logged_in_at: i64,
}

/// 会话存储 - 固定键下的单条序列化记录
#[derive(Debug)]
pub struct SessionStore {
    /// 会话文件路径: {work_dir}/auth/current_session.json
    file_path: PathBuf,
}

impl SessionStore {
    pub fn new(work_dir: &Path) -> Self {
        Self {
            file_path: work_dir.join("auth/current_session.json"),
        }
    }

    /// 按用户名登录（硬编码用户表查找），写入会话文件
    pub fn login(&self, username: &str) -> Result<SessionRecord, SessionError> {
        let user =
            users::find(username).ok_or_else(|| SessionError::UnknownUser(username.to_string()))?;
        let record = SessionRecord {
            user,
            logged_in_at: now_millis(),
        };
        self.save(&record)?;
        tracing::info!(
            username = %record.user.username,
            role = ?record.user.role,
            "User logged in"
        );
        Ok(record)
    }

    fn save(&self, record: &SessionRecord) -> Result<(), SessionError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(record)?;
        std::fs::write(&self.file_path, content)?;
        Ok(())
    }

    /// 加载当前会话（无文件时返回 None）
    pub fn load(&self) -> Result<Option<SessionRecord>, SessionError> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.file_path)?;
        let record: SessionRecord = serde_json::from_str(&content)?;
        tracing::info!(username = %record.user.username, "Restored cached session");
        Ok(Some(record))
    }

    /// 登出并清除会话文件
    pub fn logout(&self) -> Result<(), SessionError> {
        if self.file_path.exists() {
            std::fs::remove_file(&self.file_path)?;
            tracing::debug!("Current session cleared");
        }
        Ok(())
    }
}
