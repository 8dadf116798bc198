#![no_main]

use libfuzzer_sys::fuzz_target;
use recawk::{Engine, Hooks};

fuzz_target!(|data: &[u8]| {
    // First byte picks the separator, the rest is input
    let Some((&selector, input)) = data.split_first() else {
        return;
    };

    // Limit input sizes to prevent slow runs
    if input.len() > 100_000 {
        return;
    }

    let fs = match selector % 4 {
        0 => " ",
        1 => ",",
        2 => "\t",
        _ => "::",
    };

    let program = Hooks::new().on_action(|ctx| {
        let last = ctx.field(ctx.nf() as isize).to_string();
        ctx.set_field(ctx.nf() as isize + 2, "x");
        Some(ctx.format([last.as_str(), ctx.field(-1), ctx.field(1)]))
    });

    let mut engine = Engine::new(program);
    engine.set_fs(fs);
    let mut output = Vec::new();
    // Invalid UTF-8 surfaces as an input error; that is fine here
    let _ = engine.run(input, &mut output);
});
