// ==========================================
// 灌装线质量检查点系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 质检数据采集校验与记录引擎
// 红线: 表单界面与图表渲染由外部承载,本库只负责校验、组装与落盘
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 追加式日志落盘
pub mod repository;

// 引擎层 - 校验规则与记录组装
pub mod engine;

// 配置层 - 部署配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 装配与共享状态
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{BatchMatch, CheckKind, ProductionLine, Verdict};

// 领域实体
pub use domain::{
    BatchCodeFact, CheckpointRecord, FormSnapshot, LineTrendSeries, Product, ProductCatalog,
    TorqueTrials, TrendLine, TrendPoint,
};

// 引擎
pub use engine::{
    BatchCodeComparator, CheckpointAssembler, FillCheck, ToleranceBand, ToleranceEvaluator,
    TorqueCheck, TorqueEvaluator, TrendAggregator,
};

// 配置
pub use config::{ConfigError, ProductEntry, QcConfig};

// 仓储
pub use repository::{
    CheckpointSink, CsvCheckpointSink, SinkError, SinkResult, SqliteCheckpointSink,
    SINK_SCHEMA_VERSION,
};

// API
pub use api::{ApiError, ApiResult, CheckpointApi, DashboardApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "灌装线质量检查点系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
