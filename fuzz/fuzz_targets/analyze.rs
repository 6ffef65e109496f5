#![no_main]

use chisel::{InlineTagConfig, PhpdocInlineTagFixer, TokenStream, TokensAnalyzer, fix_source};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(stream) = TokenStream::from_source(s) else {
        return;
    };
    assert_eq!(stream.source(), s);

    // Every query must return, whatever the stream looks like
    let analyzer = TokensAnalyzer::new(&stream);
    for i in 0..stream.len() {
        let _ = analyzer.operator_role(i);
        let _ = analyzer.is_lambda(i);
        let _ = analyzer.is_anonymous_class(i);
        let _ = analyzer.is_array_multiline(i);
        let _ = analyzer.is_while_part_of_do_while(i);
        let _ = analyzer.member_attributes(i);
        let _ = stream.matching_bracket(i);
    }
    let _ = analyzer.import_use_groups();
    let _ = analyzer.all_classy_elements();

    if let Ok(fixer) = PhpdocInlineTagFixer::new(&InlineTagConfig::default()) {
        let _ = fix_source(&fixer, s);
    }
});
