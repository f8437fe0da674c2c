//! Helpers for inspecting emitted C source.

use pretty_assertions::assert_eq;

/// Parse the initializer of `name[] = { ... };` into numbers.
pub fn c_array(source: &str, name: &str) -> Vec<u64> {
    let marker = format!(" {name}[] = {{");
    let start = source
        .find(&marker)
        .unwrap_or_else(|| panic!("Array {name} not found in:\n{source}"))
        + marker.len();
    let end = start
        + source[start..]
            .find("};")
            .unwrap_or_else(|| panic!("Array {name} is not terminated"));

    source[start..end]
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().unwrap_or_else(|_| panic!("Bad value {s:?} in {name}")))
        .collect()
}

/// Rows of `name[]`, one per source line.
pub fn c_array_rows(source: &str, name: &str) -> Vec<Vec<u64>> {
    let marker = format!(" {name}[] = {{");
    let start = source.find(&marker).unwrap_or_else(|| panic!("Array {name} not found"));
    source[start..]
        .lines()
        .skip(1)
        .take_while(|l| !l.starts_with("};"))
        .map(|l| {
            l.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.parse().unwrap())
                .collect()
        })
        .collect()
}

/// Value and C type of scalar `name`.
pub fn c_scalar(source: &str, name: &str) -> (String, u64) {
    let marker = format!(" {name} = ");
    let line = source
        .lines()
        .find(|l| l.contains(&marker))
        .unwrap_or_else(|| panic!("Scalar {name} not found in:\n{source}"));
    let ctype = line
        .trim_start_matches("const ")
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();
    let value = line
        .split(" = ")
        .nth(1)
        .and_then(|v| v.trim_end_matches(';').parse().ok())
        .unwrap_or_else(|| panic!("Scalar {name} has no value: {line}"));
    (ctype, value)
}

/// Assert scalar `name` has the given type and value.
pub fn assert_scalar(source: &str, name: &str, ctype: &str, value: u64) {
    assert_eq!(
        c_scalar(source, name),
        (ctype.to_string(), value),
        "Scalar {name} mismatch"
    );
}

/// Assert every emitted file starts with the stdint include.
pub fn assert_c_source(source: &str) {
    assert!(
        source.starts_with("#include <stdint.h>\n"),
        "Expected stdint include, got: {}",
        source.lines().next().unwrap_or_default()
    );
}
