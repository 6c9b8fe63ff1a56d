use gnuplot::*;
use spline_path::{Knot, PathBuilder};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // -----------------------
    // 1. Set up the course
    // -----------------------
    // Three knots with polar tangent specifications: angle in radians,
    // magnitude in length units. The middle knot is shared by both
    // segments, which keeps the chained curve continuous.
    let mut builder = PathBuilder::new();
    builder
        .add(Knot::new(0.0, -5.0).with_polar_tangent((-45f64).to_radians(), 1.0))
        .add(Knot::new(1.0, 3.0).with_polar_tangent((-45f64).to_radians(), 3.0))
        .add(Knot::new(3.0, 0.0).with_polar_tangent(0.0, 1.0));

    // -------------------------
    // 2. Build and validate
    // -------------------------
    let path = builder.build()?;
    let total_length = path.length();

    // Basic sanity check
    if total_length <= 0.0 {
        return Err("Calculated path length is non-positive. Check inputs.".into());
    }

    // -------------------------
    // 3. Sample by distance
    // -------------------------
    // Points spaced evenly along the distance-traveled coordinate, the
    // same coordinate a motion-profile generator would walk.
    let spacing = total_length / 400.0;
    let points = path.sample_by_distance(spacing)?;

    let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.1).collect();

    // Tangent magnitude along the course, to visualize how uneven the
    // local parametrization is compared to the arc-length coordinate.
    let mut distances = Vec::with_capacity(points.len());
    let mut speeds = Vec::with_capacity(points.len());
    for i in 0..points.len() {
        let s = (i as f64 * spacing).min(total_length);
        let (dx, dy) = path.tangent_at(s)?;
        distances.push(s);
        speeds.push((dx * dx + dy * dy).sqrt());
    }

    // Quick final check (did the sampling reach the last knot?)
    let final_point = *points.last().unwrap_or(&(0.0, 0.0));
    if (final_point.0 - 3.0).abs() > 0.01 || final_point.1.abs() > 0.01 {
        eprintln!("Warning: final sample is off the last knot by more than 0.01 units.");
        // Not returning an error, just alerting.
    }

    // --------------
    // 4. Plot data
    // --------------
    // Two sub-plots: the planned x-y course with its knots, and the
    // tangent magnitude over distance traveled.
    let mut fg = Figure::new();

    {
        let axes = fg.axes2d();
        axes.set_title("Quintic spline path", &[]);
        axes.set_x_label("x", &[]);
        axes.set_y_label("y", &[]);
        axes.lines(&xs, &ys, &[Color("blue"), Caption("Path")]);
        axes.points(
            &[0.0, 1.0, 3.0],
            &[-5.0, 3.0, 0.0],
            &[Color("red"), Caption("Knots")],
        );
    }

    let mut fg_speed = Figure::new();
    {
        let axes = fg_speed.axes2d();
        axes.set_title("Tangent magnitude vs. distance traveled", &[]);
        axes.set_x_label("Distance traveled", &[]);
        axes.set_y_label("|dP/dt|", &[]);
        axes.lines(&distances, &speeds, &[Color("green"), Caption("Speed")]);
    }

    // Attempt to show in a pop-up window (might require gnuplot installed)
    fg.show().map_err(|e| format!("Failed to display plot: {e}"))?;
    fg_speed
        .show()
        .map_err(|e| format!("Failed to display plot: {e}"))?;

    println!(
        "Plot generated. Total path length: {:.3} units over {} segments.",
        total_length,
        path.segment_count()
    );
    Ok(())
}
