// ==========================================
// 灌装线质量检查点系统 - 产线速率趋势聚合引擎
// ==========================================
// 职责: 按产线分组历史记录并拟合一元线性趋势
// 输入: 日志落盘读回的全量检查点记录(只读)
// 输出: 每条产线的采样序列 + 可选趋势线,交外部图表渲染
// ==========================================

use crate::domain::checkpoint::CheckpointRecord;
use crate::domain::trend::{LineTrendSeries, TrendLine, TrendPoint};
use crate::domain::types::ProductionLine;
use tracing::instrument;

// ==========================================
// TrendAggregator - 趋势聚合引擎
// ==========================================
#[derive(Debug, Default)]
pub struct TrendAggregator;

impl TrendAggregator {
    pub fn new() -> Self {
        Self
    }

    /// 聚合全量历史记录为每条产线的趋势序列
    ///
    /// - 无生产速率的记录不参与趋势
    /// - 分组按产线首次出现顺序
    /// - 采样点 >= 2 且时间有离散度时做最小二乘拟合,否则 trend 为 None
    /// - 不改动输入记录
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub fn aggregate(&self, records: &[CheckpointRecord]) -> Vec<LineTrendSeries> {
        let mut groups: Vec<(ProductionLine, Vec<TrendPoint>)> = Vec::new();

        for record in records {
            let Some(rate) = record.production_rate else {
                continue;
            };

            let point = TrendPoint {
                captured_at: record.captured_at,
                production_line: record.production_line,
                production_rate: rate,
            };

            match groups
                .iter_mut()
                .find(|(line, _)| *line == record.production_line)
            {
                Some((_, points)) => points.push(point),
                None => groups.push((record.production_line, vec![point])),
            }
        }

        groups
            .into_iter()
            .map(|(production_line, points)| {
                let trend = fit_line(&points);
                LineTrendSeries {
                    production_line,
                    points,
                    trend,
                }
            })
            .collect()
    }
}

/// 普通最小二乘拟合: 速率对 epoch 秒
///
/// 采样点少于 2 个,或时间全部重合(分母为 0)时不拟合
fn fit_line(points: &[TrendPoint]) -> Option<TrendLine> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let xs: Vec<f64> = points
        .iter()
        .map(|p| p.captured_at.and_utc().timestamp() as f64)
        .collect();
    let ys: Vec<f64> = points.iter().map(|p| p.production_rate).collect();

    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;

    let denominator: f64 = xs.iter().map(|x| (x - x_mean) * (x - x_mean)).sum();
    if denominator == 0.0 {
        return None;
    }

    let numerator: f64 = xs
        .iter()
        .zip(ys.iter())
        .map(|(x, y)| (x - x_mean) * (y - y_mean))
        .sum();

    let slope = numerator / denominator;
    let intercept = y_mean - slope * x_mean;

    Some(TrendLine { slope, intercept })
}
