// ==========================================
// 检查点记录组装器集成测试
// ==========================================
// 测试目标: 表单快照 → 不可变记录的组装语义
// 覆盖范围: 内容幂等、检查项裁剪、行记录契约
// ==========================================


use bottling_qc::domain::checkpoint::{BatchCodeFact, TorqueTrials, COLUMN_NAMES};
use bottling_qc::domain::product::Product;
use bottling_qc::domain::types::{BatchMatch, CheckKind, Verdict};
use bottling_qc::engine::CheckpointAssembler;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use test_helpers::{make_form, small_config};

fn cvs_drain_opener() -> Product {
    Product {
        name: "32oz CVS Drain Opener".to_string(),
        target_fill_oz: 32.0,
    }
}

fn fixed_instant() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

#[test]
fn test_assembly_runs_all_evaluators() {
    let assembler = CheckpointAssembler::from_config(&small_config());
    let record = assembler.assemble_at(&cvs_drain_opener(), &make_form("32oz CVS Drain Opener"), fixed_instant());

    assert_eq!(record.fill_verdict, Verdict::Acceptable);
    assert_eq!(record.average_torque, Some(8.5));
    assert_eq!(record.torque_verdict, Verdict::Acceptable);
    assert_eq!(record.batch_match, BatchMatch::Yes);
    assert_eq!(record.target_fill_oz, 32.0);
    assert_eq!(record.product, "32oz CVS Drain Opener");
}

#[test]
fn test_same_form_same_instant_same_content() {
    // 相同表单快照 + 相同时刻 → 除记录标识外逐字段相等
    let assembler = CheckpointAssembler::from_config(&small_config());
    let form = make_form("32oz CVS Drain Opener");
    let product = cvs_drain_opener();

    let a = assembler.assemble_at(&product, &form, fixed_instant());
    let mut b = assembler.assemble_at(&product, &form, fixed_instant());

    assert_ne!(a.checkpoint_id, b.checkpoint_id);
    b.checkpoint_id = a.checkpoint_id.clone();
    assert_eq!(a, b);
}

#[test]
fn test_fresh_timestamp_per_assembly() {
    // assemble() 自行盖时间戳;内容幂等但时间戳不保证相同
    let assembler = CheckpointAssembler::from_config(&small_config());
    let form = make_form("32oz CVS Drain Opener");
    let product = cvs_drain_opener();

    let a = assembler.assemble(&product, &form);
    let mut b = assembler.assemble(&product, &form);

    b.checkpoint_id = a.checkpoint_id.clone();
    b.captured_at = a.captured_at;
    assert_eq!(a, b);
}

#[test]
fn test_disabled_checks_fall_to_defaults_without_moving_columns() {
    // 只保留扭矩检查的部署: 其余检查项落默认值,列数不变
    let mut config = small_config();
    config.enabled_checks = BTreeSet::from([CheckKind::Torque]);

    let assembler = CheckpointAssembler::from_config(&config);
    let record = assembler.assemble_at(&cvs_drain_opener(), &make_form("32oz CVS Drain Opener"), fixed_instant());

    assert_eq!(record.label_level, None);
    assert_eq!(record.front_back_level, None);
    assert_eq!(record.label_wrinkled, None);
    assert_eq!(record.bottle_code, "");
    assert_eq!(record.case_code, "");
    assert_eq!(record.batch_match, BatchMatch::NotApplicable);
    assert_eq!(record.production_rate, None);
    assert_eq!(record.employee_count, None);
    // 扭矩检查照常评估
    assert_eq!(record.torque_verdict, Verdict::Acceptable);

    let row = record.to_row();
    assert_eq!(row.len(), COLUMN_NAMES.len());
    assert_eq!(row[9], "");
    assert_eq!(row[17], "");
    assert_eq!(row[20], "0.00");
    assert_eq!(row[21], "0");
}

#[test]
fn test_missing_measurements_never_block_assembly() {
    // 全部测量缺失也要产出完整记录
    let mut form = make_form("32oz CVS Drain Opener");
    form.actual_fill_oz = None;
    form.torque = TorqueTrials::default();
    form.batch_codes = BatchCodeFact::default();
    form.production_rate = None;
    form.employee_count = None;

    let assembler = CheckpointAssembler::from_config(&small_config());
    let record = assembler.assemble_at(&cvs_drain_opener(), &form, fixed_instant());

    assert_eq!(record.fill_verdict, Verdict::NotEvaluated);
    assert_eq!(record.torque_verdict, Verdict::NotEvaluated);
    assert_eq!(record.average_torque, None);
    assert_eq!(record.batch_match, BatchMatch::NotApplicable);
    assert_eq!(record.to_row().len(), COLUMN_NAMES.len());
}

#[test]
fn test_row_follows_column_contract() {
    let assembler = CheckpointAssembler::from_config(&small_config());
    let record = assembler.assemble_at(&cvs_drain_opener(), &make_form("32oz CVS Drain Opener"), fixed_instant());

    let row = record.to_row();
    assert_eq!(row[0], "2025-06-01 14:30:00");
    assert_eq!(row[1], "2025-06-01");
    assert_eq!(row[4], "LINE_1");
    assert_eq!(row[5], "32oz CVS Drain Opener");
    assert_eq!(row[6], "32.00");
    assert_eq!(row[8], "ACCEPTABLE");
    assert_eq!(row[15], "8.50");
    assert_eq!(row[19], "YES");
}
