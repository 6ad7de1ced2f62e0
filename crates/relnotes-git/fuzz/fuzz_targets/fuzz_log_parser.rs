#![no_main]

use libfuzzer_sys::fuzz_target;
use relnotes_git::{parse_log, render_changelog};

fuzz_target!(|data: &[u8]| {
    let entries = parse_log(data);
    for entry in &entries {
        assert!(!entry.subject.contains('\n'));
    }
    let _ = render_changelog(&entries);
});
