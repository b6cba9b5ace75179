// ==========================================
// 灌装线质量检查点系统 - CSV 日志落盘
// ==========================================
// 存储: 单个 CSV 文件,首行为表头,其后每行一条记录
// 列序即行记录契约;打开已有文件时校验表头,
// 表头不一致直接拒开,避免两套列序混写
// ==========================================

use crate::domain::checkpoint::{CheckpointRecord, TorqueTrials, COLUMN_NAMES};
use crate::domain::types::{BatchMatch, ProductionLine, Verdict};
use crate::repository::checkpoint_sink::CheckpointSink;
use crate::repository::error::{SinkError, SinkResult};
use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

// ==========================================
// CsvCheckpointSink - CSV 日志落盘
// ==========================================
pub struct CsvCheckpointSink {
    path: PathBuf,
}

impl CsvCheckpointSink {
    /// 打开(或创建)CSV 日志文件
    ///
    /// 新文件写入表头;已有文件校验表头与行记录契约一致
    pub fn open<P: AsRef<Path>>(path: P) -> SinkResult<Self> {
        let path = path.as_ref().to_path_buf();

        let exists = path.exists() && std::fs::metadata(&path)?.len() > 0;
        if exists {
            verify_header(&path)?;
        } else {
            let mut writer = csv::Writer::from_path(&path)?;
            writer.write_record(expected_header())?;
            writer.flush()?;
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CheckpointSink for CsvCheckpointSink {
    fn append(&self, record: &CheckpointRecord) -> SinkResult<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| SinkError::AppendFailed(e.to_string()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        let mut row = vec![record.checkpoint_id.clone()];
        row.extend(record.to_row());

        writer
            .write_record(&row)
            .map_err(|e| SinkError::AppendFailed(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| SinkError::AppendFailed(e.to_string()))?;

        Ok(())
    }

    fn read_all(&self) -> SinkResult<Vec<CheckpointRecord>> {
        verify_header(&self.path)?;

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| SinkError::ReadFailed(e.to_string()))?;
            records.push(parse_row(&row)?);
        }

        Ok(records)
    }
}

// ==========================================
// 行记录映射
// ==========================================

/// 完整表头: 记录标识 + 契约列
fn expected_header() -> Vec<&'static str> {
    let mut header = vec!["checkpoint_id"];
    header.extend(COLUMN_NAMES);
    header
}

/// 校验已有文件的表头
fn verify_header(path: &Path) -> SinkResult<()> {
    let mut reader = csv::Reader::from_path(path)?;
    let actual = reader
        .headers()
        .map_err(|e| SinkError::ReadFailed(e.to_string()))?;

    let expected = expected_header();
    if actual.iter().ne(expected.iter().copied()) {
        return Err(SinkError::HeaderMismatch(format!(
            "expected {} columns, got: {}",
            expected.len(),
            actual.iter().collect::<Vec<_>>().join(",")
        )));
    }

    Ok(())
}

/// 一行 CSV → 检查点记录
///
/// 数值列的 0 读回为缺失,与落盘时的默认值规则互逆
fn parse_row(row: &StringRecord) -> SinkResult<CheckpointRecord> {
    let field = |i: usize| row.get(i).unwrap_or_default();

    if row.len() != COLUMN_NAMES.len() + 1 {
        return Err(SinkError::ReadFailed(format!(
            "row has {} columns, contract requires {}",
            row.len(),
            COLUMN_NAMES.len() + 1
        )));
    }

    Ok(CheckpointRecord {
        checkpoint_id: field(0).to_string(),
        captured_at: NaiveDateTime::parse_from_str(field(1), CheckpointRecord::TIMESTAMP_FORMAT)
            .unwrap_or_default(),
        sample_date: NaiveDate::parse_from_str(field(2), CheckpointRecord::DATE_FORMAT)
            .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
        sample_time: field(3).to_string(),
        supervisor: field(4).to_string(),
        production_line: ProductionLine::from_str(field(5)).unwrap_or(ProductionLine::Line1),
        product: field(6).to_string(),
        target_fill_oz: parse_f64(field(7)),
        actual_fill_oz: parse_f64_opt(field(8)),
        fill_verdict: Verdict::from_str(field(9)),
        label_level: parse_flag(field(10)),
        front_back_level: parse_flag(field(11)),
        label_wrinkled: parse_flag(field(12)),
        torque: TorqueTrials::new(
            parse_f64_opt(field(13)),
            parse_f64_opt(field(14)),
            parse_f64_opt(field(15)),
        ),
        average_torque: parse_f64_opt(field(16)),
        torque_verdict: Verdict::from_str(field(17)),
        bottle_code: field(18).to_string(),
        case_code: field(19).to_string(),
        batch_match: BatchMatch::from_str(field(20)),
        production_rate: parse_f64_opt(field(21)),
        employee_count: parse_count(field(22)),
        comments: field(23).to_string(),
    })
}

fn parse_f64(s: &str) -> f64 {
    s.parse::<f64>().unwrap_or(0.0)
}

/// 数值列读回: 解析失败或为 0 视为缺失
fn parse_f64_opt(s: &str) -> Option<f64> {
    match s.parse::<f64>() {
        Ok(v) if v != 0.0 => Some(v),
        _ => None,
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s {
        "YES" => Some(true),
        "NO" => Some(false),
        _ => None,
    }
}

/// 人数列读回: 0 视为缺失
fn parse_count(s: &str) -> Option<u32> {
    match s.parse::<u32>() {
        Ok(v) if v > 0 => Some(v),
        _ => None,
    }
}
