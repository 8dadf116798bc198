#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use recawk::FieldSplitter;

#[derive(Arbitrary, Debug)]
struct SplitInput {
    separator: String,
    record: String,
}

fuzz_target!(|input: SplitInput| {
    let splitter = FieldSplitter::new(&input.separator);
    let fields = splitter.split(&input.record);

    match &splitter {
        FieldSplitter::Whitespace => {
            assert!(fields.iter().all(|f| !f.is_empty()));
        }
        FieldSplitter::Literal(sep) => {
            if input.record.is_empty() {
                assert!(fields.is_empty());
            } else {
                // Splitting must be lossless
                assert_eq!(&fields.join(sep.as_str()), &input.record);
            }
        }
    }
});
