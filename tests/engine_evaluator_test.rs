// ==========================================
// 校验引擎集成测试
// ==========================================
// 测试目标: 容差带/扭矩/批次码三个评估器的判定规则
// 覆盖范围: 边界取值、缺失读数、阈值相等
// ==========================================

use bottling_qc::domain::checkpoint::TorqueTrials;
use bottling_qc::domain::types::{BatchMatch, Verdict};
use bottling_qc::engine::{BatchCodeComparator, ToleranceEvaluator, TorqueEvaluator};

// ==========================================
// 容差带评估
// ==========================================

#[test]
fn test_band_is_five_percent_around_target() {
    let evaluator = ToleranceEvaluator::default();

    // 目录中出现过的全部目标规格
    for target in [24.0, 32.0, 33.0, 40.0, 56.0, 64.0, 128.0] {
        let check = evaluator.evaluate(target, None);
        assert!((check.band.lower - target * 0.95).abs() < 1e-9);
        assert!((check.band.upper - target * 1.05).abs() < 1e-9);
        assert!(check.band.lower <= check.band.upper);
    }
}

#[test]
fn test_fill_within_band_is_acceptable() {
    // 32oz CVS Drain Opener: 目标 32oz,实际 31.0oz → 带 [30.4, 33.6] → 合格
    let evaluator = ToleranceEvaluator::default();
    let check = evaluator.evaluate(32.0, Some(31.0));

    assert!((check.band.lower - 30.4).abs() < 1e-9);
    assert!((check.band.upper - 33.6).abs() < 1e-9);
    assert_eq!(check.verdict, Verdict::Acceptable);
}

#[test]
fn test_fill_band_boundaries_inclusive() {
    let evaluator = ToleranceEvaluator::default();

    assert_eq!(evaluator.evaluate(32.0, Some(30.4)).verdict, Verdict::Acceptable);
    assert_eq!(evaluator.evaluate(32.0, Some(33.6)).verdict, Verdict::Acceptable);
    assert_eq!(
        evaluator.evaluate(32.0, Some(30.39)).verdict,
        Verdict::NotAcceptable
    );
    assert_eq!(
        evaluator.evaluate(32.0, Some(33.61)).verdict,
        Verdict::NotAcceptable
    );
}

#[test]
fn test_fill_without_reading_is_not_evaluated() {
    let evaluator = ToleranceEvaluator::default();
    assert_eq!(evaluator.evaluate(32.0, None).verdict, Verdict::NotEvaluated);
}

// ==========================================
// 扭矩评估
// ==========================================

#[test]
fn test_torque_below_threshold_not_acceptable() {
    // 三次 6.0,阈值 7.0 → 均值 6.0 → 不合格
    let evaluator = TorqueEvaluator::new(7.0);
    let check = evaluator.evaluate(&TorqueTrials::new(Some(6.0), Some(6.0), Some(6.0)));

    assert_eq!(check.average, Some(6.0));
    assert_eq!(check.verdict, Verdict::NotAcceptable);
}

#[test]
fn test_torque_average_equal_to_threshold_is_acceptable() {
    let evaluator = TorqueEvaluator::new(8.0);
    let check = evaluator.evaluate(&TorqueTrials::new(Some(7.0), Some(8.0), Some(9.0)));

    assert_eq!(check.average, Some(8.0));
    assert_eq!(check.verdict, Verdict::Acceptable);
}

#[test]
fn test_torque_with_unentered_trial_not_evaluated() {
    // 0 表示该次试测尚未录入 → 不评估
    let evaluator = TorqueEvaluator::new(7.0);
    let check = evaluator.evaluate(&TorqueTrials::from_raw(0.0, 5.0, 9.0));

    assert_eq!(check.average, None);
    assert_eq!(check.verdict, Verdict::NotEvaluated);
}

#[test]
fn test_torque_threshold_is_deployment_config() {
    // 同样的试测在 7.0 与 8.0 两种部署阈值下结论不同
    let trials = TorqueTrials::new(Some(7.5), Some(7.5), Some(7.5));

    assert_eq!(
        TorqueEvaluator::new(7.0).evaluate(&trials).verdict,
        Verdict::Acceptable
    );
    assert_eq!(
        TorqueEvaluator::new(8.0).evaluate(&trials).verdict,
        Verdict::NotAcceptable
    );
}

// ==========================================
// 批次码比对
// ==========================================

#[test]
fn test_batch_codes_equal_is_yes() {
    assert_eq!(
        BatchCodeComparator::compare_codes(Some("LOT123"), Some("LOT123")),
        BatchMatch::Yes
    );
}

#[test]
fn test_batch_codes_different_is_no() {
    assert_eq!(
        BatchCodeComparator::compare_codes(Some("LOT123"), Some("LOT124")),
        BatchMatch::No
    );
}

#[test]
fn test_batch_code_missing_side_is_not_applicable() {
    assert_eq!(
        BatchCodeComparator::compare_codes(Some(""), Some("LOT123")),
        BatchMatch::NotApplicable
    );
    assert_eq!(
        BatchCodeComparator::compare_codes(Some(""), Some("")),
        BatchMatch::NotApplicable
    );
    assert_eq!(
        BatchCodeComparator::compare_codes(None, None),
        BatchMatch::NotApplicable
    );
}
