// ==========================================
// 灌装线质量检查点系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和 API 实例
// 红线: 配置校验失败必须在接收任何输入前终止
// ==========================================

use crate::api::{CheckpointApi, DashboardApi};
use crate::config::QcConfig;
use crate::repository::{CheckpointSink, SqliteCheckpointSink};
use std::sync::Arc;

/// 应用状态
///
/// 持有 API 实例与共享落盘后端,整个会话一份
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 检查点提交 API
    pub checkpoint_api: Arc<CheckpointApi>,

    /// 趋势看板 API
    pub dashboard_api: Arc<DashboardApi>,
}

impl AppState {
    /// 初始化应用状态
    ///
    /// 流程: 校验配置(失败即终止) → 打开 SQLite 落盘 → 装配 API
    pub fn new(config: QcConfig, db_path: &str) -> anyhow::Result<Self> {
        config.validate()?;

        let sink: Arc<dyn CheckpointSink> = Arc::new(SqliteCheckpointSink::open(db_path)?);

        Self::with_sink(config, db_path.to_string(), sink)
    }

    /// 用指定落盘后端装配(供 CSV 部署与测试替身使用)
    pub fn with_sink(
        config: QcConfig,
        db_path: String,
        sink: Arc<dyn CheckpointSink>,
    ) -> anyhow::Result<Self> {
        config.validate()?;

        tracing::info!(db_path = %db_path, "应用状态初始化");

        Ok(Self {
            db_path,
            checkpoint_api: Arc::new(CheckpointApi::new(&config, Arc::clone(&sink))),
            dashboard_api: Arc::new(DashboardApi::new(sink)),
        })
    }
}

/// 默认数据库文件路径
///
/// 优先读环境变量 BOTTLING_QC_DB_PATH(便于调试/测试/CI),
/// 其次使用用户数据目录,最后回退到当前目录
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    if let Ok(path) = std::env::var("BOTTLING_QC_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./bottling_qc.db");

    if let Some(data_dir) = dirs::data_dir() {
        // 开发环境使用独立目录,避免污染生产数据
        #[cfg(debug_assertions)]
        let dir = data_dir.join("bottling-qc-dev");

        #[cfg(not(debug_assertions))]
        let dir = data_dir.join("bottling-qc");

        if std::fs::create_dir_all(&dir).is_ok() {
            path = dir.join("bottling_qc.db");
        }
    }

    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_default_db_path() {
        let path = get_default_db_path();
        assert!(!path.is_empty());
        assert!(path.ends_with(".db"));
    }
}
