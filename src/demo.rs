//! Fixed demonstration driver.
//!
//! Builds each of the four closure kinds with literal inputs and renders one
//! line per call, in a fixed order. The first four lines reuse two filter
//! closures across two inputs to show that filtering is stateless; the last
//! six reuse folding closures to show the accumulator carrying across calls.

use crate::ops;

/// Render a sequence in bracketed, space-separated form, e.g. `[1 3 5]`.
pub fn format_seq(items: &[i64]) -> String {
    let rendered: Vec<String> = items.iter().map(|v| v.to_string()).collect();
    format!("[{}]", rendered.join(" "))
}

/// Produce the demonstration output, one line per call.
pub fn lines() -> Vec<String> {
    let mut out = Vec::new();

    let odds = ops::filter(|x| x % 2 == 1);
    let evens = ops::filter(|x| x % 2 == 0);
    out.push(format_seq(&odds(&[1, 2, 3, 4, 5])));
    out.push(format_seq(&evens(&[1, 2, 3, 4, 5])));
    out.push(format_seq(&odds(&[6, 7, 8, 9, 10])));
    out.push(format_seq(&evens(&[6, 7, 8, 9, 10])));

    let double = ops::map(|a| 2 * a);
    out.push(format_seq(&double(&[1, 2, 3])));
    out.push(format_seq(&double(&[4, 5, 6])));

    let mut sum = ops::reduce(0, |a, b| a + b);
    out.push(sum(&[1, 2, 3]).to_string());
    out.push(sum(&[5]).to_string());
    out.push(sum(&[100, 101, 102]).to_string());

    let mut power_sum = ops::map_reduce(0, |v| v * v, |a, v| a + v);
    out.push(power_sum(&[1, 2, 3, 4]).to_string());
    out.push(power_sum(&[1, 2, 3, 4]).to_string());
    out.push(power_sum(&[]).to_string());

    out
}
