// ==========================================
// 灌装线质量检查点系统 - 检查点提交 API
// ==========================================
// 职责: 一次提交的完整流程
//   解析产品 → 组装记录 → 落盘 → 会话缓存
// 红线: 落盘失败即提交失败,由操作员重新提交;不自动重试
//       会话缓存只供当场回看,永远不当历史真相
// ==========================================

use crate::config::{ConfigError, QcConfig};
use crate::domain::checkpoint::{CheckpointRecord, FormSnapshot};
use crate::domain::product::ProductCatalog;
use crate::domain::types::BatchMatch;
use crate::engine::assembler::CheckpointAssembler;
use crate::api::error::{ApiError, ApiResult};
use crate::repository::CheckpointSink;
use std::sync::{Arc, Mutex};
use tracing::instrument;

// ==========================================
// CheckpointApi - 检查点提交 API
// ==========================================
pub struct CheckpointApi {
    catalog: ProductCatalog,
    supervisors: Vec<String>,
    assembler: CheckpointAssembler,
    sink: Arc<dyn CheckpointSink>,
    /// 本会话已提交记录(展示缓存,进程退出即丢失)
    session: Mutex<Vec<CheckpointRecord>>,
}

impl CheckpointApi {
    /// 按部署配置创建提交 API
    pub fn new(config: &QcConfig, sink: Arc<dyn CheckpointSink>) -> Self {
        Self {
            catalog: config.product_catalog(),
            supervisors: config.supervisors.clone(),
            assembler: CheckpointAssembler::from_config(config),
            sink,
            session: Mutex::new(Vec::new()),
        }
    }

    /// 提交一次质检检查点
    ///
    /// # 返回
    /// - Ok(record): 已落盘的记录(同时进入会话缓存)
    /// - Err(ApiError::Config): 产品不在目录中
    /// - Err(ApiError::Sink): 落盘失败,本次提交作废,记录不进缓存
    #[instrument(skip(self, form), fields(line = %form.production_line, product = %form.product_name))]
    pub fn submit(&self, form: FormSnapshot) -> ApiResult<CheckpointRecord> {
        let product = self
            .catalog
            .get(&form.product_name)
            .ok_or_else(|| ConfigError::UnknownProduct(form.product_name.clone()))?;

        // 主管不在名单内不拦截提交,表单侧应当阻止;这里只留痕
        if !self.supervisors.iter().any(|s| s == &form.supervisor) {
            tracing::warn!(supervisor = %form.supervisor, "主管不在配置名单中");
        }

        let record = self.assembler.assemble(product, &form);

        // 批次码不匹配需要操作员人工核查,提示走日志,记录照常落盘
        if record.batch_match == BatchMatch::No {
            tracing::warn!(
                bottle_code = %record.bottle_code,
                case_code = %record.case_code,
                "瓶码与箱码不一致,请通知主管核查批次"
            );
        }

        self.sink.append(&record)?;

        self.session
            .lock()
            .map_err(|e| ApiError::Internal(e.to_string()))?
            .push(record.clone());

        tracing::info!(checkpoint_id = %record.checkpoint_id, "检查点已落盘");
        Ok(record)
    }

    /// 本会话已提交记录的副本(供当场回看)
    pub fn session_records(&self) -> ApiResult<Vec<CheckpointRecord>> {
        Ok(self
            .session
            .lock()
            .map_err(|e| ApiError::Internal(e.to_string()))?
            .clone())
    }
}
