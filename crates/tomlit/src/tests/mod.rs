

/// Iteration count for property tests, raised on CI.
fn property_tests() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}
