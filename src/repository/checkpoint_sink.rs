// ==========================================
// 灌装线质量检查点系统 - 日志落盘接口
// ==========================================
// 引擎对落盘后端只依赖两个操作;落盘是唯一可信的历史来源,
// 会话内缓存永远只是展示用副本
// ==========================================

use crate::domain::checkpoint::CheckpointRecord;
use crate::repository::error::SinkResult;

/// 追加式检查点日志
pub trait CheckpointSink: Send + Sync {
    /// 追加一条记录
    ///
    /// 对调用方原子: 要么完整落盘,要么返回错误;一次提交只尝试一次
    fn append(&self, record: &CheckpointRecord) -> SinkResult<()>;

    /// 按写入顺序读回全部记录(供趋势聚合)
    fn read_all(&self) -> SinkResult<Vec<CheckpointRecord>>;
}
