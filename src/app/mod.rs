// ==========================================
// 灌装线质量检查点系统 - 应用层
// ==========================================
// 职责: 装配配置、落盘与 API,供外部界面接入
// ==========================================

pub mod state;

// 重导出
pub use state::{get_default_db_path, AppState};
