// ==========================================
// 灌装线质量检查点系统 - 检查点记录组装器
// ==========================================
// 职责: 表单快照 + 产品 → 一条不可变检查点记录
// 每次用户提交调用一次;组装从不失败,缺失字段落默认值
// ==========================================

use crate::config::QcConfig;
use crate::domain::checkpoint::{CheckpointRecord, FormSnapshot, TorqueTrials};
use crate::domain::product::Product;
use crate::domain::types::{BatchMatch, CheckKind, Verdict};
use crate::engine::batch_code::BatchCodeComparator;
use crate::engine::tolerance::ToleranceEvaluator;
use crate::engine::torque::TorqueEvaluator;
use chrono::{Local, NaiveDateTime, Timelike};
use std::collections::BTreeSet;
use tracing::instrument;
use uuid::Uuid;

// ==========================================
// CheckpointAssembler - 检查点记录组装器
// ==========================================
pub struct CheckpointAssembler {
    tolerance: ToleranceEvaluator,
    torque: TorqueEvaluator,
    batch: BatchCodeComparator,
    enabled_checks: BTreeSet<CheckKind>,
}

impl CheckpointAssembler {
    /// 创建组装器
    pub fn new(
        tolerance: ToleranceEvaluator,
        torque: TorqueEvaluator,
        enabled_checks: BTreeSet<CheckKind>,
    ) -> Self {
        Self {
            tolerance,
            torque,
            batch: BatchCodeComparator::new(),
            enabled_checks,
        }
    }

    /// 按部署配置创建组装器
    pub fn from_config(config: &QcConfig) -> Self {
        Self::new(
            ToleranceEvaluator::new(config.band_lower_multiplier, config.band_upper_multiplier),
            TorqueEvaluator::new(config.torque_threshold_ftlbs),
            config.enabled_checks.clone(),
        )
    }

    fn is_enabled(&self, kind: CheckKind) -> bool {
        self.enabled_checks.contains(&kind)
    }

    /// 组装一条检查点记录,采集时刻取系统时钟(秒精度)
    #[instrument(skip(self, product, form), fields(product = %product.name, line = %form.production_line))]
    pub fn assemble(&self, product: &Product, form: &FormSnapshot) -> CheckpointRecord {
        let now = Local::now().naive_local();
        let captured_at = now.with_nanosecond(0).unwrap_or(now);
        self.assemble_at(product, form, captured_at)
    }

    /// 确定性组装核心: 相同表单快照 + 相同时刻 → 相同记录内容
    ///
    /// 部署未启用的检查项落 NotEvaluated/NotApplicable 与空默认值,
    /// 列位保持不变
    pub fn assemble_at(
        &self,
        product: &Product,
        form: &FormSnapshot,
        captured_at: NaiveDateTime,
    ) -> CheckpointRecord {
        // 灌装量检查始终启用
        let fill = self.tolerance.evaluate(product.target_fill_oz, form.actual_fill_oz);
        tracing::debug!(reason = %fill.reason, "灌装量判定");

        let (torque_trials, average_torque, torque_verdict) = if self.is_enabled(CheckKind::Torque)
        {
            let check = self.torque.evaluate(&form.torque);
            tracing::debug!(reason = %check.reason, "扭矩判定");
            (form.torque, check.average, check.verdict)
        } else {
            (TorqueTrials::default(), None, Verdict::NotEvaluated)
        };

        let (label_level, front_back_level, label_wrinkled) = if self.is_enabled(CheckKind::Label) {
            (form.label_level, form.front_back_level, form.label_wrinkled)
        } else {
            (None, None, None)
        };

        let (bottle_code, case_code, batch_match) = if self.is_enabled(CheckKind::BatchCode) {
            let verdict = self.batch.compare(&form.batch_codes);
            (
                form.batch_codes.bottle().unwrap_or_default().to_string(),
                form.batch_codes.case().unwrap_or_default().to_string(),
                verdict,
            )
        } else {
            (String::new(), String::new(), BatchMatch::NotApplicable)
        };

        let production_rate = if self.is_enabled(CheckKind::Production) {
            form.production_rate
        } else {
            None
        };

        let employee_count = if self.is_enabled(CheckKind::Labor) {
            form.employee_count
        } else {
            None
        };

        CheckpointRecord {
            checkpoint_id: Uuid::new_v4().to_string(),
            captured_at,
            sample_date: form.sample_date,
            sample_time: form.sample_time.clone(),
            supervisor: form.supervisor.clone(),
            production_line: form.production_line,
            product: product.name.clone(),
            target_fill_oz: product.target_fill_oz,
            actual_fill_oz: form.actual_fill_oz,
            fill_verdict: fill.verdict,
            label_level,
            front_back_level,
            label_wrinkled,
            torque: torque_trials,
            average_torque,
            torque_verdict,
            bottle_code,
            case_code,
            batch_match,
            production_rate,
            employee_count,
            comments: form.comments.clone(),
        }
    }
}
