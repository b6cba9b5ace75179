// ==========================================
// 灌装线质量检查点系统 - 部署配置
// ==========================================
// 职责: 配置文件载入、启动期校验、目录构建
// 背景: 历史上同一张表单被手工复制出多份,只改阈值/字段集/名单;
//       现在收敛为一份参数化配置,阈值与名单一律不进代码
// ==========================================

use crate::domain::product::{Product, ProductCatalog};
use crate::domain::types::{CheckKind, ProductionLine};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use thiserror::Error;

/// 默认扭矩阈值(ft-lbs)
pub const DEFAULT_TORQUE_THRESHOLD_FTLBS: f64 = 8.0;

// ==========================================
// 配置错误
// ==========================================
// 任何一项都在启动期致命,不接受带病运行
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置文件解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("产品目录为空")]
    EmptyCatalog,

    #[error("产品重复定义: {0}")]
    DuplicateProduct(String),

    #[error("目标灌装量必须为正 (product={product}): {target_fill_oz}")]
    InvalidTargetFill { product: String, target_fill_oz: f64 },

    #[error("扭矩阈值必须为正: {0}")]
    InvalidThreshold(f64),

    #[error("容差带倍率无效: lower={lower}, upper={upper}")]
    InvalidBand { lower: f64, upper: f64 },

    #[error("{0}名单为空")]
    EmptyRoster(&'static str),

    #[error("未知产品: {0}")]
    UnknownProduct(String),
}

/// 产品目录条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntry {
    pub name: String,
    pub target_fill_oz: f64,
}

// ==========================================
// QcConfig - 部署配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QcConfig {
    /// 扭矩阈值(ft-lbs),各部署见 7.0 / 8.0
    #[serde(default = "default_torque_threshold")]
    pub torque_threshold_ftlbs: f64,

    /// 容差带下沿倍率
    #[serde(default = "default_lower_multiplier")]
    pub band_lower_multiplier: f64,

    /// 容差带上沿倍率
    #[serde(default = "default_upper_multiplier")]
    pub band_upper_multiplier: f64,

    /// 产品目录: 名称 → 目标灌装量
    pub catalog: Vec<ProductEntry>,

    /// 主管名单
    pub supervisors: Vec<String>,

    /// 产线名单
    pub lines: Vec<ProductionLine>,

    /// 本部署启用的检查项(灌装量检查不在此列,始终启用)
    #[serde(default = "all_checks")]
    pub enabled_checks: BTreeSet<CheckKind>,
}

fn default_torque_threshold() -> f64 {
    DEFAULT_TORQUE_THRESHOLD_FTLBS
}

fn default_lower_multiplier() -> f64 {
    crate::engine::tolerance::DEFAULT_LOWER_MULTIPLIER
}

fn default_upper_multiplier() -> f64 {
    crate::engine::tolerance::DEFAULT_UPPER_MULTIPLIER
}

fn all_checks() -> BTreeSet<CheckKind> {
    CheckKind::ALL.into_iter().collect()
}

impl QcConfig {
    /// 从 JSON 文件载入配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// 从 JSON 字符串载入配置
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: QcConfig = serde_json::from_str(raw)?;
        Ok(config)
    }

    /// 启动期校验
    ///
    /// 校验项:
    /// - 目录非空、产品不重名、目标灌装量为正
    /// - 扭矩阈值为正
    /// - 容差带倍率为正且下沿不高于上沿
    /// - 主管与产线名单非空
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for entry in &self.catalog {
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::DuplicateProduct(entry.name.clone()));
            }
            if entry.target_fill_oz <= 0.0 {
                return Err(ConfigError::InvalidTargetFill {
                    product: entry.name.clone(),
                    target_fill_oz: entry.target_fill_oz,
                });
            }
        }

        if self.torque_threshold_ftlbs <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.torque_threshold_ftlbs));
        }

        if self.band_lower_multiplier <= 0.0
            || self.band_upper_multiplier <= 0.0
            || self.band_lower_multiplier > self.band_upper_multiplier
        {
            return Err(ConfigError::InvalidBand {
                lower: self.band_lower_multiplier,
                upper: self.band_upper_multiplier,
            });
        }

        if self.supervisors.is_empty() {
            return Err(ConfigError::EmptyRoster("主管"));
        }

        if self.lines.is_empty() {
            return Err(ConfigError::EmptyRoster("产线"));
        }

        Ok(())
    }

    /// 构建运行期产品目录
    pub fn product_catalog(&self) -> ProductCatalog {
        ProductCatalog::new(
            self.catalog
                .iter()
                .map(|entry| Product {
                    name: entry.name.clone(),
                    target_fill_oz: entry.target_fill_oz,
                })
                .collect(),
        )
    }

    /// 检查项是否启用
    pub fn is_check_enabled(&self, kind: CheckKind) -> bool {
        self.enabled_checks.contains(&kind)
    }
}
