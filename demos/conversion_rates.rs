//! Conversion rate interval estimation example

use binomial_confidence::{agresti_coull, agresti_coull_for_level, Estimates};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Agresti-Coull Interval Examples ===\n");

    // Example 1: one campaign, one conversion rate
    println!("1. Single Conversion Rate");
    let interval = agresti_coull()
        .estimate(50u64, 21u64)?
        .ok_or("sample size must be positive")?;

    println!("  21 conversions out of 50 trials");
    println!("  Naive rate: {:.4}", 21.0 / 50.0);
    println!("  Interval:   {}", interval);
    println!(
        "  Bounds:     [{:.4}, {:.4}]",
        interval.lower(),
        interval.upper()
    );

    // Example 2: tightening and loosening the confidence level
    println!("\n2. Confidence Levels");
    for level in [0.90, 0.95, 0.99] {
        let estimator = agresti_coull_for_level(level);
        let interval = estimator
            .estimate(50u64, 21u64)?
            .ok_or("sample size must be positive")?;
        println!(
            "  {:.0}% (z = {:.3}): {}",
            level * 100.0,
            estimator.z(),
            interval
        );
    }

    // Example 3: one interval per experiment arm
    println!("\n3. Per-Arm Batch");
    let trials = vec![1200u64, 1180, 1240];
    let conversions = vec![93u64, 141, 118];

    let batch = agresti_coull().estimate_each(&trials, &conversions)?;
    for (i, entry) in batch.iter().enumerate() {
        match entry {
            Some(interval) => println!(
                "  Arm {}: {} ({} / {} trials)",
                (b'A' + i as u8) as char,
                interval,
                conversions[i],
                trials[i]
            ),
            None => println!("  Arm {}: undefined", (b'A' + i as u8) as char),
        }
    }

    // Example 4: broadcasting a shared sample size
    println!("\n4. Broadcasting a Shared Sample Size");
    let conversions = vec![37u64, 52, 41, 66];

    if let Estimates::Many(batch) = agresti_coull().estimate_broadcast(500u64, conversions)? {
        let centers = batch.centers();
        let half_widths = batch.half_widths();
        for i in 0..batch.len() {
            println!(
                "  500 trials, center {:.4} ± {:.4}",
                centers[i], half_widths[i]
            );
        }
    }

    // Example 5: degenerate samples stay visible as NaN in projections
    println!("\n5. Undefined Entries");
    let batch = agresti_coull().estimate_each(&[3u64, 1, 0], &[3u64, 0, 0])?;
    println!("  Centers:     {:?}", batch.centers());
    println!("  Half-widths: {:?}", batch.half_widths());

    Ok(())
}
