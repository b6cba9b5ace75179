// ==========================================
// 灌装线质量检查点系统 - 灌装量容差评估引擎
// ==========================================
// 职责: 以目标灌装量为中心的容差带判定
// 输入: 目标灌装量(目录保证为正) + 实际读数
// 输出: FillCheck (结论 + 容差带 + reason)
// ==========================================

use crate::domain::types::Verdict;

/// 默认容差带下沿倍率 (-5%)
pub const DEFAULT_LOWER_MULTIPLIER: f64 = 0.95;

/// 默认容差带上沿倍率 (+5%)
pub const DEFAULT_UPPER_MULTIPLIER: f64 = 1.05;

// ==========================================
// 容差带 (Tolerance Band)
// ==========================================
// 派生值,不落盘;倍率为正且下沿不高于上沿时 lower <= upper 恒成立
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceBand {
    pub lower: f64,
    pub upper: f64,
}

impl ToleranceBand {
    /// 围绕目标值构建容差带
    pub fn around(target: f64, lower_multiplier: f64, upper_multiplier: f64) -> Self {
        Self {
            lower: target * lower_multiplier,
            upper: target * upper_multiplier,
        }
    }

    /// 闭区间包含判定(两端边界均视为带内)
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// 灌装量检查结果
#[derive(Debug, Clone, PartialEq)]
pub struct FillCheck {
    pub verdict: Verdict,
    pub band: ToleranceBand,
    pub reason: String,
}

// ==========================================
// ToleranceEvaluator - 灌装量容差评估引擎
// ==========================================
pub struct ToleranceEvaluator {
    lower_multiplier: f64,
    upper_multiplier: f64,
}

impl Default for ToleranceEvaluator {
    fn default() -> Self {
        Self::new(DEFAULT_LOWER_MULTIPLIER, DEFAULT_UPPER_MULTIPLIER)
    }
}

impl ToleranceEvaluator {
    /// 创建指定倍率的评估引擎
    ///
    /// 倍率由配置层 validate() 保证 0 < lower <= upper
    pub fn new(lower_multiplier: f64, upper_multiplier: f64) -> Self {
        Self {
            lower_multiplier,
            upper_multiplier,
        }
    }

    /// 判定实际灌装量是否落在容差带内
    ///
    /// 规则:
    /// - 读数缺失 → NotEvaluated(不得对未录入的测量判定合格)
    /// - band.lower <= actual <= band.upper(两端含) → Acceptable
    /// - 其他 → NotAcceptable
    pub fn evaluate(&self, target_fill_oz: f64, actual_fill_oz: Option<f64>) -> FillCheck {
        let band = ToleranceBand::around(target_fill_oz, self.lower_multiplier, self.upper_multiplier);

        let Some(actual) = actual_fill_oz else {
            return FillCheck {
                verdict: Verdict::NotEvaluated,
                band,
                reason: "FILL_NOT_EVALUATED: no reading entered".to_string(),
            };
        };

        if band.contains(actual) {
            FillCheck {
                verdict: Verdict::Acceptable,
                band,
                reason: format!(
                    "FILL_ACCEPTABLE: {:.2}oz in [{:.2}, {:.2}]",
                    actual, band.lower, band.upper
                ),
            }
        } else {
            FillCheck {
                verdict: Verdict::NotAcceptable,
                band,
                reason: format!(
                    "FILL_NOT_ACCEPTABLE: {:.2}oz outside [{:.2}, {:.2}]",
                    actual, band.lower, band.upper
                ),
            }
        }
    }
}
