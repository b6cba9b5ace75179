// ==========================================
// 灌装线质量检查点系统 - 旋盖扭矩评估引擎
// ==========================================
// 职责: 三次试测聚合为均值并对阈值判定
// 输入: TorqueTrials + 部署扭矩阈值(ft-lbs)
// 输出: TorqueCheck (均值 + 结论 + reason)
// ==========================================

use crate::domain::checkpoint::TorqueTrials;
use crate::domain::types::Verdict;

/// 扭矩检查结果
#[derive(Debug, Clone, PartialEq)]
pub struct TorqueCheck {
    /// 三次试测均值,保留两位小数;任一试测缺失时为 None
    pub average: Option<f64>,
    pub verdict: Verdict,
    pub reason: String,
}

// ==========================================
// TorqueEvaluator - 旋盖扭矩评估引擎
// ==========================================
pub struct TorqueEvaluator {
    threshold_ftlbs: f64,
}

impl TorqueEvaluator {
    /// 创建指定阈值的评估引擎
    ///
    /// 阈值是部署常量(各产线部署见 7.0 / 8.0 ft-lbs),由配置层保证为正
    pub fn new(threshold_ftlbs: f64) -> Self {
        Self { threshold_ftlbs }
    }

    pub fn threshold_ftlbs(&self) -> f64 {
        self.threshold_ftlbs
    }

    /// 聚合三次试测并对阈值判定
    ///
    /// 规则:
    /// - 任一试测未录入 → NotEvaluated,不计算均值
    /// - 均值 = (t1+t2+t3)/3,四舍五入到两位小数后参与展示与落盘
    /// - 均值 >= 阈值(含等于) → Acceptable,否则 NotAcceptable
    pub fn evaluate(&self, trials: &TorqueTrials) -> TorqueCheck {
        let (Some(t1), Some(t2), Some(t3)) = (trials.t1, trials.t2, trials.t3) else {
            return TorqueCheck {
                average: None,
                verdict: Verdict::NotEvaluated,
                reason: "TORQUE_NOT_EVALUATED: trials incomplete".to_string(),
            };
        };

        let average = round2((t1 + t2 + t3) / 3.0);

        if average >= self.threshold_ftlbs {
            TorqueCheck {
                average: Some(average),
                verdict: Verdict::Acceptable,
                reason: format!(
                    "TORQUE_ACCEPTABLE: avg {:.2} >= threshold {:.2}",
                    average, self.threshold_ftlbs
                ),
            }
        } else {
            TorqueCheck {
                average: Some(average),
                verdict: Verdict::NotAcceptable,
                reason: format!(
                    "TORQUE_NOT_ACCEPTABLE: avg {:.2} < threshold {:.2}",
                    average, self.threshold_ftlbs
                ),
            }
        }
    }
}

/// 四舍五入到两位小数
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
