// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with `cargo run --example basic_usage --features logging` to see the
// trace output from limb assembly and range rejections.

use fixed_fraction::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Fixed Fraction Example ===\n");

    // Values as an account decoder would hand them over
    let reserves: [(&str, &[u64]); 4] = [
        ("borrow rate", &[1 << 59, 0, 0, 0]),
        ("deposit cap", &[0, 1 << 60, 0, 0]),
        ("dust", &[1]),
        ("corrupted", &[0, 0, 0, 0, 7]),
    ];

    println!("Decoding limb sequences...");
    for (name, limbs) in reserves.iter() {
        match assemble(limbs) {
            Ok(value) => println!("  {:<12} {:?} -> {}", name, limbs, value),
            Err(err) => println!("  {:<12} {:?} -> error: {}", name, limbs, err),
        }
    }

    // Fees configured in basis points
    println!("\n=== Fees ===");
    for bps in [1u64, 25, 10_000] {
        let fee = FixedFraction::from_bps(bps);
        println!("  {:>6} bps = {} (limbs {:?})", bps, fee, fee.to_limbs());
    }

    // Reduced precision for display
    println!("\n=== Precision ===");
    let dust = FixedFraction::from(1u64);
    let short = ConversionConfig::standard().with_precision(6);
    println!("  40 digits: {}", dust.to_decimal());
    println!("   6 digits: {}", dust.to_decimal_with(&short));

    // Ordering on raw values
    println!("\n=== Ordering ===");
    let half = FixedFraction::from_percent(50);
    let one = FixedFraction::one();
    println!("  {} < {}: {}", half, one, half < one);
    println!("  max(half, one) = {}", half.max(one));
}
