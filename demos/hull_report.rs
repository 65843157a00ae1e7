//! Hull report: generates a board from default or inch-based parameters and
//! prints its cross-sections.
//!
//! Usage:
//! ```text
//! cargo run --example hull_report                  # defaults, centimetres
//! cargo run --example hull_report -- 72 20 12      # length, width (in), slices
//! RUST_LOG=hullform=trace cargo run --example hull_report
//! ```

use hullform::units::Unit;
use hullform::{generate, HullError, HullParameters};

fn main() -> Result<(), HullError> {
    // Default: WARN for everything, INFO for hullform.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("hullform=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let dimensions: Vec<f64> = args.iter().take(2).filter_map(|a| a.parse().ok()).collect();
    let slices: u32 = args.get(2).and_then(|a| a.parse().ok()).unwrap_or(10);

    let (params, display) = match dimensions.as_slice() {
        [length, width] => {
            let inches = HullParameters {
                length: *length,
                max_width: *width,
                nose_rocker: 5.0,
                tail_rocker: 2.5,
                nose_thickness: 0.5,
                tail_thickness: 0.75,
                max_thickness: 2.5,
                slice_count: slices,
                ..HullParameters::default()
            };
            (inches.converted_from(Unit::Inches), Unit::Inches)
        }
        _ => (HullParameters::default(), Unit::Centimeters),
    };

    let hull = generate(&params)?;
    let u = |v: f64| display.from_centimeters(v);
    let sym = display.symbol();

    println!("{:>3} {:>9} {:>9} {:>9} {:>9} {:>9}", "i", "x", "rocker", "half-w", "apex z", "thick");
    for s in hull.sections() {
        println!(
            "{:>3} {:>9.3} {:>9.3} {:>9.3} {:>9.3} {:>9.3}",
            s.index(),
            u(s.x()),
            u(s.bottom().z),
            u(s.rail_apex().y),
            u(s.rail_apex().z),
            u(s.thickness()),
        );
    }
    println!("({} sections, lengths in {sym})", hull.sections().len());
    Ok(())
}
