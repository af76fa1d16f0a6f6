#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tomlit::{Converter, Value};

/// Building blocks that keep the input close to the literal grammars, so the
/// fuzzer spends its time past the first character.
#[derive(Arbitrary, Debug)]
enum Piece {
    Digits(u32),
    Raw(String),
    Punct(u8),
}

const PUNCT: &[&str] = &[
    "-", "+", ":", ".", "_", "T", "t", " ", "Z", "z", "e", "E", "0x", "0o", "0b", "inf", "nan",
];

#[derive(Arbitrary, Debug)]
struct Input {
    start: u8,
    pieces: Vec<Piece>,
}

fn render(input: &Input) -> String {
    let mut out = String::new();
    for piece in &input.pieces {
        match piece {
            Piece::Digits(n) => out.push_str(&n.to_string()),
            Piece::Raw(s) => out.push_str(s),
            Piece::Punct(i) => out.push_str(PUNCT[usize::from(*i) % PUNCT.len()]),
        }
    }
    out
}

fuzz_target!(|input: Input| {
    let text = render(&input);
    let start = usize::from(input.start).min(text.len());
    let conv = Converter::new();
    let Some(result) = conv.parse_scalar(&text, start) else {
        return;
    };
    let Ok((value, span)) = result else {
        return;
    };
    assert!(span.start == start && span.end <= text.len());

    // Canonical output must convert back to the same value.
    let canonical = value.to_string();
    let (again, _) = conv
        .parse_scalar(&canonical, 0)
        .expect("canonical form must match")
        .expect("canonical form must convert");
    match (&value, &again) {
        (Value::Float(a), Value::Float(b)) if a.is_nan() => assert!(b.is_nan()),
        _ => assert_eq!(value, again, "{text:?} -> {canonical:?}"),
    }
});
