#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the analysis input parser.
///
/// Feeds arbitrary UTF-8 strings to `AnalysisInput::parse_str`, which picks
/// JSON or YAML from the first character and deserializes the document.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = quality_eval::AnalysisInput::parse_str(s);
    }
});
