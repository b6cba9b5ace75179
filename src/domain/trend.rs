// ==========================================
// 灌装线质量检查点系统 - 趋势视图实体
// ==========================================
// 职责: 由历史检查点记录派生的趋势数据结构
// 仅供趋势聚合引擎产出、外部图表渲染器消费,不单独落盘
// ==========================================

use crate::domain::types::ProductionLine;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 趋势采样点
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub captured_at: NaiveDateTime,
    pub production_line: ProductionLine,
    /// 生产速率(瓶/分钟)
    pub production_rate: f64,
}

/// 一元线性趋势 (速率对时间)
///
/// 自变量为采集时刻的 epoch 秒
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    /// 趋势线在指定时刻的预测速率
    pub fn rate_at(&self, at: NaiveDateTime) -> f64 {
        self.slope * at.and_utc().timestamp() as f64 + self.intercept
    }
}

/// 单条产线的趋势序列
///
/// 采样点少于 2 个时不拟合趋势线
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineTrendSeries {
    pub production_line: ProductionLine,
    pub points: Vec<TrendPoint>,
    pub trend: Option<TrendLine>,
}
