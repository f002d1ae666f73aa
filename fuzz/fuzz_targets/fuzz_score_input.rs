#![no_main]
use libfuzzer_sys::fuzz_target;
use quality_eval::{AnalysisInput, QualityScorer, Validatable};

/// Fuzz parse → validate → score.
///
/// Whatever parses must validate and score without panicking, and every
/// score must stay on the 0-100 scale.
fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(input) = AnalysisInput::parse_str(s) else {
        return;
    };
    let _ = input.validate();
    let report = QualityScorer::default().score(&input);
    assert!((0.0..=100.0).contains(&report.overall_score));
    for score in report.characteristic_scores.values() {
        assert!((0.0..=100.0).contains(score));
    }
});
