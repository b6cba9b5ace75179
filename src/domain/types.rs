// ==========================================
// 灌装线质量检查点系统 - 领域类型定义
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与落盘行一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 检验结论 (Verdict)
// ==========================================
// 红线: 未录入的测量不得判定为合格,只能判定为未评估
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Acceptable,    // 合格
    NotAcceptable, // 不合格
    NotEvaluated,  // 未评估(测量缺失)
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Acceptable => write!(f, "ACCEPTABLE"),
            Verdict::NotAcceptable => write!(f, "NOT_ACCEPTABLE"),
            Verdict::NotEvaluated => write!(f, "NOT_EVALUATED"),
        }
    }
}

impl Verdict {
    /// 从字符串解析检验结论
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "ACCEPTABLE" => Verdict::Acceptable,
            "NOT_ACCEPTABLE" => Verdict::NotAcceptable,
            _ => Verdict::NotEvaluated, // 默认值
        }
    }

    /// 转换为落盘存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Verdict::Acceptable => "ACCEPTABLE",
            Verdict::NotAcceptable => "NOT_ACCEPTABLE",
            Verdict::NotEvaluated => "NOT_EVALUATED",
        }
    }
}

// ==========================================
// 批次码比对结论 (Batch Match)
// ==========================================
// 任一侧批次码缺失时比对不适用,不得判定为不匹配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchMatch {
    Yes,           // 匹配
    No,            // 不匹配(需人工核查)
    NotApplicable, // 不适用(任一侧缺码)
}

impl fmt::Display for BatchMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchMatch::Yes => write!(f, "YES"),
            BatchMatch::No => write!(f, "NO"),
            BatchMatch::NotApplicable => write!(f, "NOT_APPLICABLE"),
        }
    }
}

impl BatchMatch {
    /// 从字符串解析比对结论
    pub fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "YES" => BatchMatch::Yes,
            "NO" => BatchMatch::No,
            _ => BatchMatch::NotApplicable, // 默认值
        }
    }

    /// 转换为落盘存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            BatchMatch::Yes => "YES",
            BatchMatch::No => "NO",
            BatchMatch::NotApplicable => "NOT_APPLICABLE",
        }
    }
}

// ==========================================
// 产线标识 (Production Line)
// ==========================================
// 序列化显式指定 "LINE_n",与落盘字符串一字不差
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductionLine {
    #[serde(rename = "LINE_1")]
    Line1,
    #[serde(rename = "LINE_2")]
    Line2,
    #[serde(rename = "LINE_3")]
    Line3,
    #[serde(rename = "LINE_4")]
    Line4,
    #[serde(rename = "LINE_5")]
    Line5,
    #[serde(rename = "LINE_6")]
    Line6,
    #[serde(rename = "LINE_7")]
    Line7,
    #[serde(rename = "LINE_8")]
    Line8,
    #[serde(rename = "LINE_9")]
    Line9,
}

impl fmt::Display for ProductionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

impl ProductionLine {
    /// 全部产线（按编号顺序）
    pub const ALL: [ProductionLine; 9] = [
        ProductionLine::Line1,
        ProductionLine::Line2,
        ProductionLine::Line3,
        ProductionLine::Line4,
        ProductionLine::Line5,
        ProductionLine::Line6,
        ProductionLine::Line7,
        ProductionLine::Line8,
        ProductionLine::Line9,
    ];

    /// 从字符串解析产线标识
    ///
    /// 同时接受落盘形式 "LINE_3" 与表单显示形式 "Line 3"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().replace(' ', "_").as_str() {
            "LINE_1" => Some(ProductionLine::Line1),
            "LINE_2" => Some(ProductionLine::Line2),
            "LINE_3" => Some(ProductionLine::Line3),
            "LINE_4" => Some(ProductionLine::Line4),
            "LINE_5" => Some(ProductionLine::Line5),
            "LINE_6" => Some(ProductionLine::Line6),
            "LINE_7" => Some(ProductionLine::Line7),
            "LINE_8" => Some(ProductionLine::Line8),
            "LINE_9" => Some(ProductionLine::Line9),
            _ => None,
        }
    }

    /// 转换为落盘存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ProductionLine::Line1 => "LINE_1",
            ProductionLine::Line2 => "LINE_2",
            ProductionLine::Line3 => "LINE_3",
            ProductionLine::Line4 => "LINE_4",
            ProductionLine::Line5 => "LINE_5",
            ProductionLine::Line6 => "LINE_6",
            ProductionLine::Line7 => "LINE_7",
            ProductionLine::Line8 => "LINE_8",
            ProductionLine::Line9 => "LINE_9",
        }
    }

    /// 表单显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductionLine::Line1 => "Line 1",
            ProductionLine::Line2 => "Line 2",
            ProductionLine::Line3 => "Line 3",
            ProductionLine::Line4 => "Line 4",
            ProductionLine::Line5 => "Line 5",
            ProductionLine::Line6 => "Line 6",
            ProductionLine::Line7 => "Line 7",
            ProductionLine::Line8 => "Line 8",
            ProductionLine::Line9 => "Line 9",
        }
    }
}

// ==========================================
// 检查项类别 (Check Kind)
// ==========================================
// 各部署通过启用集合裁剪检查项,灌装量检查始终启用
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckKind {
    Label,     // 标签质量
    Torque,    // 旋盖扭矩
    BatchCode, // 批次码比对
    Production, // 生产速率
    Labor,     // 人员数量
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

impl CheckKind {
    /// 全部检查项
    pub const ALL: [CheckKind; 5] = [
        CheckKind::Label,
        CheckKind::Torque,
        CheckKind::BatchCode,
        CheckKind::Production,
        CheckKind::Labor,
    ];

    /// 转换为落盘存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            CheckKind::Label => "LABEL",
            CheckKind::Torque => "TORQUE",
            CheckKind::BatchCode => "BATCH_CODE",
            CheckKind::Production => "PRODUCTION",
            CheckKind::Labor => "LABOR",
        }
    }
}
