//! Thermometry Fit Example
//!
//! This example walks through a typical calibration workflow:
//! - Repeated readings at a handful of bath temperatures (°C)
//! - Conversion to Kelvin with `Series::translate`
//! - Collapsing repeats into points with `2σ` error bars
//! - Weighted fit through the data mean with confidence intervals
//!
//! Run with `RUST_LOG=linfit=debug` to see the library's tracing events.

use linfit::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), LinFitError> {
    init_tracing();

    println!("{}", "=".repeat(80));
    println!("Resistance thermometer calibration");
    println!("{}", "=".repeat(80));

    // Three readings per bath; the bath drifts slightly between readings
    let celsius = [
        0.02, -0.05, 0.01, 24.9, 25.1, 25.0, 50.2, 49.9, 50.0, 74.8, 75.1, 75.0,
    ];
    let ohms = [
        100.02, 99.97, 100.05, 109.71, 109.80, 109.75, 119.41, 119.30, 119.38, 128.98, 129.11,
        129.05,
    ];

    let mut series = Series::from_samples("Pt100", &celsius, &ohms)?;
    series.translate(273.15);
    series.aggregate(1.0)?;

    println!();
    println!("Aggregated points (K, Ω):");
    for point in &series {
        println!("  {point}");
    }
    println!(
        "Range: {:.2} K to {:.2} K",
        series.minimum_x()?,
        series.maximum_x()?
    );

    // Error bars on every point give inverse-variance weights
    let mut model = LinearModel::from_series(&series)?
        .with_headers("temperature K", "resistance ohm")
        .mean_origin(true);
    model.set_origin(OriginShift::Both);

    let config = FitConfig::weighted().with_decimal_digits(4)?;
    let result = model.fit_with(&config)?;

    println!();
    println!("Fit ({} confidence):", result.confidence_level);
    println!("  {}", result.equation(&config.format));
    println!(
        "  origin: ({:.3} K, {:.3} Ω)",
        result.origin_offset_x, result.origin_offset_y
    );

    println!();
    println!("Half-widths by confidence level:");
    for level in ConfidenceLevel::ALL {
        let ci = model.confidence_interval(level)?;
        println!(
            "  {:<12} slope ± {:.5}  (t = {:.4})",
            level.to_string(),
            ci.slope,
            model.t_statistic(level)?
        );
    }

    println!();
    println!("Summary row:");
    println!("  {}", result.summary_row(&config.format));

    Ok(())
}
