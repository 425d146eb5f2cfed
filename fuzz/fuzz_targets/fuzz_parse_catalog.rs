#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the catalog loading entry point.
///
/// Feeds arbitrary UTF-8 strings to `parse_catalog_str`, which sniffs the
/// format, decodes the document and runs every integrity check.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = facet_filter::parsers::parse_catalog_str(s);
    }
});
