//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tally_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("tally_core ping={}", tally_core::ping());
    println!("tally_core version={}", tally_core::core_version());
}
