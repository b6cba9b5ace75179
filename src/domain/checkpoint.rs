// ==========================================
// 灌装线质量检查点系统 - 检查点记录实体
// ==========================================
// 职责: 表单快照、检查点记录与行记录契约
// 红线: CheckpointRecord 组装后不可变,系统只追加、不更新、不删除
// ==========================================

use crate::domain::types::{BatchMatch, ProductionLine, Verdict};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// 扭矩三次试测 (Torque Trials)
// ==========================================
// 未录入的试测用 None 表示,不复用数值 0 作为哨兵
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TorqueTrials {
    pub t1: Option<f64>,
    pub t2: Option<f64>,
    pub t3: Option<f64>,
}

impl TorqueTrials {
    pub fn new(t1: Option<f64>, t2: Option<f64>, t3: Option<f64>) -> Self {
        Self { t1, t2, t3 }
    }

    /// 从表单原始数值构建
    ///
    /// 表单输入框以 0.0 起始,恰好为 0.0 的读数视为"尚未录入"。
    /// 若产品方确认 0 扭矩是真实读数,只需改此边界换算,引擎不受影响。
    pub fn from_raw(t1: f64, t2: f64, t3: f64) -> Self {
        fn reading(v: f64) -> Option<f64> {
            if v == 0.0 {
                None
            } else {
                Some(v)
            }
        }
        Self {
            t1: reading(t1),
            t2: reading(t2),
            t3: reading(t3),
        }
    }

    /// 三次试测是否全部录入
    pub fn is_complete(&self) -> bool {
        self.t1.is_some() && self.t2.is_some() && self.t3.is_some()
    }

    /// 按次序返回三次试测
    pub fn as_array(&self) -> [Option<f64>; 3] {
        [self.t1, self.t2, self.t3]
    }
}

// ==========================================
// 批次码事实 (Batch Code Fact)
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchCodeFact {
    /// 瓶身批次码(仅在瓶码可辨识时录入)
    pub bottle_code: Option<String>,
    /// 外箱批次码(仅在箱码可辨识时录入)
    pub case_code: Option<String>,
    /// 瓶码是否可辨识
    pub bottle_legible: bool,
    /// 箱码是否可辨识
    pub case_legible: bool,
}

impl BatchCodeFact {
    /// 两侧均可辨识且已录入
    pub fn legible(bottle_code: &str, case_code: &str) -> Self {
        Self {
            bottle_code: Some(bottle_code.to_string()),
            case_code: Some(case_code.to_string()),
            bottle_legible: true,
            case_legible: true,
        }
    }

    /// 生效的瓶码(不可辨识或空串视为缺失)
    pub fn bottle(&self) -> Option<&str> {
        if !self.bottle_legible {
            return None;
        }
        self.bottle_code.as_deref().filter(|s| !s.is_empty())
    }

    /// 生效的箱码(不可辨识或空串视为缺失)
    pub fn case(&self) -> Option<&str> {
        if !self.case_legible {
            return None;
        }
        self.case_code.as_deref().filter(|s| !s.is_empty())
    }
}

// ==========================================
// 表单快照 (Form Snapshot)
// ==========================================
// 提交瞬间对全部表单字段的一次性不可变快照,
// 整体传值进入组装器,消除散落字段间的隐式耦合
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub sample_date: NaiveDate,
    /// 取样时间,自由文本(如 "2:30 PM")
    pub sample_time: String,
    pub supervisor: String,
    pub production_line: ProductionLine,
    pub product_name: String,
    /// 实际灌装量,未录入为 None
    pub actual_fill_oz: Option<f64>,
    /// 标签贴正(启用标签检查的部署才录入)
    pub label_level: Option<bool>,
    /// 前后标签对齐
    pub front_back_level: Option<bool>,
    /// 标签起皱
    pub label_wrinkled: Option<bool>,
    pub torque: TorqueTrials,
    pub batch_codes: BatchCodeFact,
    /// 生产速率(瓶/分钟)
    pub production_rate: Option<f64>,
    /// 在岗人数
    pub employee_count: Option<u32>,
    pub comments: String,
}

impl FormSnapshot {
    /// 表单原始灌装量读数换算
    ///
    /// 与 TorqueTrials::from_raw 同一条边界规则: 恰好 0.0 视为未录入
    pub fn fill_reading(raw: f64) -> Option<f64> {
        if raw == 0.0 {
            None
        } else {
            Some(raw)
        }
    }
}

// ==========================================
// 行记录契约 (列序即接口)
// ==========================================
// 追加式日志按列位取数,列序不可变更;
// 新增列只能追加在尾部并升级 schema 版本
pub const COLUMN_NAMES: [&str; 23] = [
    "timestamp",
    "sample_date",
    "sample_time",
    "supervisor",
    "production_line",
    "product",
    "target_fill_oz",
    "actual_fill_oz",
    "fill_verdict",
    "label_level",
    "front_back_level",
    "label_wrinkled",
    "torque_1",
    "torque_2",
    "torque_3",
    "average_torque",
    "torque_verdict",
    "bottle_code",
    "case_code",
    "batch_match",
    "production_rate",
    "employee_count",
    "comments",
];

// ==========================================
// 检查点记录 (Checkpoint Record)
// ==========================================
// 每次提交组装一次,随后立即交付日志落盘与会话缓存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointRecord {
    /// 记录标识 (UUID v4)
    pub checkpoint_id: String,
    /// 采集时刻,秒精度
    pub captured_at: NaiveDateTime,
    pub sample_date: NaiveDate,
    pub sample_time: String,
    pub supervisor: String,
    pub production_line: ProductionLine,
    pub product: String,
    pub target_fill_oz: f64,
    pub actual_fill_oz: Option<f64>,
    pub fill_verdict: Verdict,
    pub label_level: Option<bool>,
    pub front_back_level: Option<bool>,
    pub label_wrinkled: Option<bool>,
    pub torque: TorqueTrials,
    pub average_torque: Option<f64>,
    pub torque_verdict: Verdict,
    /// 瓶身批次码,空串表示缺失
    pub bottle_code: String,
    pub case_code: String,
    pub batch_match: BatchMatch,
    pub production_rate: Option<f64>,
    pub employee_count: Option<u32>,
    pub comments: String,
}

impl CheckpointRecord {
    /// 采集时刻的落盘格式
    pub const TIMESTAMP_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    /// 取样日期的落盘格式
    pub const DATE_FORMAT: &'static str = "%Y-%m-%d";

    /// 按行记录契约序列化为一行
    ///
    /// 缺失的数值列写 "0.00"/"0",缺失的文本与布尔列写空串——
    /// 列位承载语义,任何字段都不允许缺列
    pub fn to_row(&self) -> Vec<String> {
        let [t1, t2, t3] = self.torque.as_array();
        vec![
            self.captured_at.format(Self::TIMESTAMP_FORMAT).to_string(),
            self.sample_date.format(Self::DATE_FORMAT).to_string(),
            self.sample_time.clone(),
            self.supervisor.clone(),
            self.production_line.to_db_str().to_string(),
            self.product.clone(),
            fmt_f2(Some(self.target_fill_oz)),
            fmt_f2(self.actual_fill_oz),
            self.fill_verdict.to_db_str().to_string(),
            fmt_flag(self.label_level),
            fmt_flag(self.front_back_level),
            fmt_flag(self.label_wrinkled),
            fmt_f2(t1),
            fmt_f2(t2),
            fmt_f2(t3),
            fmt_f2(self.average_torque),
            self.torque_verdict.to_db_str().to_string(),
            self.bottle_code.clone(),
            self.case_code.clone(),
            self.batch_match.to_db_str().to_string(),
            fmt_f2(self.production_rate),
            self.employee_count.unwrap_or(0).to_string(),
            self.comments.clone(),
        ]
    }
}

/// 数值列格式: 两位小数,缺失写 0.00
fn fmt_f2(v: Option<f64>) -> String {
    format!("{:.2}", v.unwrap_or(0.0))
}

/// 布尔列格式: YES/NO,缺失写空串
fn fmt_flag(v: Option<bool>) -> String {
    match v {
        Some(true) => "YES".to_string(),
        Some(false) => "NO".to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_zero_means_unentered() {
        let trials = TorqueTrials::from_raw(0.0, 5.0, 9.0);
        assert_eq!(trials.t1, None);
        assert_eq!(trials.t2, Some(5.0));
        assert!(!trials.is_complete());
    }

    #[test]
    fn test_batch_code_fact_illegible_side_has_no_code() {
        let fact = BatchCodeFact {
            bottle_code: Some("LOT123".to_string()),
            case_code: Some("LOT123".to_string()),
            bottle_legible: true,
            case_legible: false,
        };
        assert_eq!(fact.bottle(), Some("LOT123"));
        assert_eq!(fact.case(), None);
    }

    #[test]
    fn test_row_width_matches_contract() {
        let record = CheckpointRecord {
            checkpoint_id: "c1".to_string(),
            captured_at: NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
            sample_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            sample_time: "2:30 PM".to_string(),
            supervisor: "Zach Courtney".to_string(),
            production_line: ProductionLine::Line1,
            product: "32oz CVS Drain Opener".to_string(),
            target_fill_oz: 32.0,
            actual_fill_oz: None,
            fill_verdict: Verdict::NotEvaluated,
            label_level: None,
            front_back_level: None,
            label_wrinkled: None,
            torque: TorqueTrials::default(),
            average_torque: None,
            torque_verdict: Verdict::NotEvaluated,
            bottle_code: String::new(),
            case_code: String::new(),
            batch_match: BatchMatch::NotApplicable,
            production_rate: None,
            employee_count: None,
            comments: String::new(),
        };

        let row = record.to_row();
        assert_eq!(row.len(), COLUMN_NAMES.len());
        // 缺失数值列落 0,缺失布尔列落空串
        assert_eq!(row[7], "0.00");
        assert_eq!(row[9], "");
        assert_eq!(row[21], "0");
    }
}
