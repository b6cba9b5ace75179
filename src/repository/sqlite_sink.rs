// ==========================================
// 灌装线质量检查点系统 - SQLite 日志落盘
// ==========================================
// 存储: checkpoint_log 表,列序即行记录契约,seq 保证写入顺序
// schema 版本写入 schema_version 表;版本不一致直接拒开,
// 避免同一存储混用两套列序导致读回错位
// ==========================================

use crate::db::{configure_sqlite_connection, open_sqlite_connection, read_schema_version};
use crate::domain::checkpoint::{CheckpointRecord, TorqueTrials};
use crate::domain::types::{BatchMatch, ProductionLine, Verdict};
use crate::repository::checkpoint_sink::CheckpointSink;
use crate::repository::error::{SinkError, SinkResult};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

/// 当前日志存储的 schema 版本
pub const SINK_SCHEMA_VERSION: i64 = 1;

// ==========================================
// SqliteCheckpointSink - SQLite 日志落盘
// ==========================================
pub struct SqliteCheckpointSink {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteCheckpointSink {
    /// 打开(或创建)数据库文件并初始化 schema
    pub fn open(db_path: &str) -> SinkResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Self::from_connection(Arc::new(Mutex::new(conn)))
    }

    /// 从已有连接创建
    ///
    /// 会对传入连接再次应用统一 PRAGMA(幂等),随后初始化并校验 schema
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> SinkResult<Self> {
        let sink = Self { conn };
        {
            let guard = sink.get_conn()?;
            configure_sqlite_connection(&guard)?;
            init_schema(&guard)?;
        }
        Ok(sink)
    }

    /// 获取数据库连接
    fn get_conn(&self) -> SinkResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| SinkError::LockError(e.to_string()))
    }
}

/// 初始化 checkpoint_log / schema_version 表并校验版本
fn init_schema(conn: &Connection) -> SinkResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS checkpoint_log (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            checkpoint_id TEXT NOT NULL UNIQUE,
            timestamp TEXT NOT NULL,
            sample_date TEXT NOT NULL,
            sample_time TEXT NOT NULL,
            supervisor TEXT NOT NULL,
            production_line TEXT NOT NULL,
            product TEXT NOT NULL,
            target_fill_oz REAL NOT NULL,
            actual_fill_oz REAL,
            fill_verdict TEXT NOT NULL,
            label_level TEXT,
            front_back_level TEXT,
            label_wrinkled TEXT,
            torque_1 REAL,
            torque_2 REAL,
            torque_3 REAL,
            average_torque REAL,
            torque_verdict TEXT NOT NULL,
            bottle_code TEXT NOT NULL,
            case_code TEXT NOT NULL,
            batch_match TEXT NOT NULL,
            production_rate REAL,
            employee_count INTEGER,
            comments TEXT NOT NULL
        );
        "#,
    )?;

    match read_schema_version(conn)? {
        None => {
            conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![SINK_SCHEMA_VERSION],
            )?;
            Ok(())
        }
        Some(actual) if actual == SINK_SCHEMA_VERSION => Ok(()),
        Some(actual) => Err(SinkError::SchemaMismatch {
            expected: SINK_SCHEMA_VERSION,
            actual,
        }),
    }
}

impl CheckpointSink for SqliteCheckpointSink {
    fn append(&self, record: &CheckpointRecord) -> SinkResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO checkpoint_log (
                checkpoint_id, timestamp, sample_date, sample_time, supervisor,
                production_line, product, target_fill_oz, actual_fill_oz, fill_verdict,
                label_level, front_back_level, label_wrinkled,
                torque_1, torque_2, torque_3, average_torque, torque_verdict,
                bottle_code, case_code, batch_match,
                production_rate, employee_count, comments
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                record.checkpoint_id,
                record
                    .captured_at
                    .format(CheckpointRecord::TIMESTAMP_FORMAT)
                    .to_string(),
                record
                    .sample_date
                    .format(CheckpointRecord::DATE_FORMAT)
                    .to_string(),
                record.sample_time,
                record.supervisor,
                record.production_line.to_db_str(),
                record.product,
                record.target_fill_oz,
                record.actual_fill_oz,
                record.fill_verdict.to_db_str(),
                flag_to_db(record.label_level),
                flag_to_db(record.front_back_level),
                flag_to_db(record.label_wrinkled),
                record.torque.t1,
                record.torque.t2,
                record.torque.t3,
                record.average_torque,
                record.torque_verdict.to_db_str(),
                record.bottle_code,
                record.case_code,
                record.batch_match.to_db_str(),
                record.production_rate,
                record.employee_count.map(|v| v as i64),
                record.comments,
            ],
        )
        .map_err(|e| SinkError::AppendFailed(e.to_string()))?;

        Ok(())
    }

    fn read_all(&self) -> SinkResult<Vec<CheckpointRecord>> {
        let conn = self.get_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT
                checkpoint_id, timestamp, sample_date, sample_time, supervisor,
                production_line, product, target_fill_oz, actual_fill_oz, fill_verdict,
                label_level, front_back_level, label_wrinkled,
                torque_1, torque_2, torque_3, average_torque, torque_verdict,
                bottle_code, case_code, batch_match,
                production_rate, employee_count, comments
            FROM checkpoint_log
            ORDER BY seq ASC
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(CheckpointRecord {
                    checkpoint_id: row.get(0)?,
                    captured_at: NaiveDateTime::parse_from_str(
                        &row.get::<_, String>(1)?,
                        CheckpointRecord::TIMESTAMP_FORMAT,
                    )
                    .unwrap_or_default(),
                    sample_date: NaiveDate::parse_from_str(
                        &row.get::<_, String>(2)?,
                        CheckpointRecord::DATE_FORMAT,
                    )
                    .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
                    sample_time: row.get(3)?,
                    supervisor: row.get(4)?,
                    production_line: ProductionLine::from_str(&row.get::<_, String>(5)?)
                        .unwrap_or(ProductionLine::Line1),
                    product: row.get(6)?,
                    target_fill_oz: row.get(7)?,
                    actual_fill_oz: row.get(8)?,
                    fill_verdict: Verdict::from_str(&row.get::<_, String>(9)?),
                    label_level: db_to_flag(row.get(10)?),
                    front_back_level: db_to_flag(row.get(11)?),
                    label_wrinkled: db_to_flag(row.get(12)?),
                    torque: TorqueTrials::new(row.get(13)?, row.get(14)?, row.get(15)?),
                    average_torque: row.get(16)?,
                    torque_verdict: Verdict::from_str(&row.get::<_, String>(17)?),
                    bottle_code: row.get(18)?,
                    case_code: row.get(19)?,
                    batch_match: BatchMatch::from_str(&row.get::<_, String>(20)?),
                    production_rate: row.get(21)?,
                    employee_count: row
                        .get::<_, Option<i64>>(22)?
                        .map(|v| v as u32),
                    comments: row.get(23)?,
                })
            })
            .map_err(|e| SinkError::ReadFailed(e.to_string()))?;

        let records = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| SinkError::ReadFailed(e.to_string()))?;

        Ok(records)
    }
}

// ==========================================
// 辅助函数
// ==========================================

/// 布尔标志落盘: YES/NO,缺失为 NULL
fn flag_to_db(v: Option<bool>) -> Option<&'static str> {
    v.map(|b| if b { "YES" } else { "NO" })
}

/// 布尔标志读回
fn db_to_flag(v: Option<String>) -> Option<bool> {
    match v.as_deref() {
        Some("YES") => Some(true),
        Some("NO") => Some(false),
        _ => None,
    }
}
