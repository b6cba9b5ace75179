// ==========================================
// 灌装线质量检查点系统 - 引擎层
// ==========================================
// 职责: 实现校验规则与记录组装,不拼 SQL
// 红线: 评估器是纯函数,不抛错;所有规则必须输出 reason
// ==========================================

pub mod assembler;
pub mod batch_code;
pub mod tolerance;
pub mod torque;
pub mod trend;

// 重导出核心引擎
pub use assembler::CheckpointAssembler;
pub use batch_code::BatchCodeComparator;
pub use tolerance::{FillCheck, ToleranceBand, ToleranceEvaluator};
pub use torque::{TorqueCheck, TorqueEvaluator};
pub use trend::TrendAggregator;
