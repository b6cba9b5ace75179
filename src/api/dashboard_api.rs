// ==========================================
// 灌装线质量检查点系统 - 趋势看板 API
// ==========================================
// 职责: 读回全量历史并聚合产线速率趋势,交外部图表渲染器
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::trend::LineTrendSeries;
use crate::engine::trend::TrendAggregator;
use crate::repository::CheckpointSink;
use std::sync::Arc;

// ==========================================
// DashboardApi - 趋势看板 API
// ==========================================
pub struct DashboardApi {
    sink: Arc<dyn CheckpointSink>,
    aggregator: TrendAggregator,
}

impl DashboardApi {
    pub fn new(sink: Arc<dyn CheckpointSink>) -> Self {
        Self {
            sink,
            aggregator: TrendAggregator::new(),
        }
    }

    /// 每条产线的速率趋势序列
    ///
    /// 读回失败原样上报;历史为空时返回空序列
    pub fn line_trends(&self) -> ApiResult<Vec<LineTrendSeries>> {
        let records = self.sink.read_all()?;
        Ok(self.aggregator.aggregate(&records))
    }
}
