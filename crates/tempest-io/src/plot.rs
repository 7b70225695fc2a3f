use plotters::prelude::*;
use std::error::Error;
use tempest_core::Path;
use tempest_sampler::Histogram;

/// Line plot of one trajectory, x = time, y = cumulative value.
pub fn trajectory(path: &Path, out: &std::path::Path) -> Result<(), Box<dyn Error>> {
    let y_min = path.values.iter().copied().fold(f64::INFINITY, f64::min);
    let y_max = path
        .values
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let pad = ((y_max - y_min) * 0.05).max(1e-3);

    let root = BitMapBackend::new(out, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Simulated Temperature Path", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..path.horizon(), (y_min - pad)..(y_max + pad))?;

    chart
        .configure_mesh()
        .x_desc("time")
        .y_desc("temperature")
        .x_labels(10)
        .draw()?;

    chart.draw_series(LineSeries::new(
        path.times().zip(path.values.iter().copied()),
        BLUE,
    ))?;

    root.present()?;
    Ok(())
}

/// Density histogram of one batch's statistic samples.
pub fn histogram(
    hist: &Histogram,
    caption: &str,
    x_desc: &str,
    out: &std::path::Path,
) -> Result<(), Box<dyn Error>> {
    let y_max = hist.max_density().max(1e-3) * 1.1;
    let width = hist.bin_width();

    let root = BitMapBackend::new(out, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(hist.min..hist.max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc("density")
        .x_labels(10)
        .draw()?;

    chart.draw_series(hist.densities.iter().enumerate().map(|(i, &density)| {
        let x0 = hist.min + i as f64 * width;
        let x1 = x0 + width;
        Rectangle::new([(x0, 0.0), (x1, density)], BLUE.mix(0.5).filled())
    }))?;

    root.present()?;
    Ok(())
}

/// Mean statistic against dt on a log-scaled x axis.
pub fn mean_curve(
    points: &[(f64, f64)],
    statistic_name: &str,
    out: &std::path::Path,
) -> Result<(), Box<dyn Error>> {
    if points.is_empty() {
        return Ok(());
    }
    let x_min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let x_max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    // Widen a single-dt sweep so the log axis keeps a non-empty range.
    let (x_min, x_max) = if x_min == x_max {
        (x_min * 0.5, x_max * 2.0)
    } else {
        (x_min, x_max)
    };

    let root = BitMapBackend::new(out, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Mean {} vs Delta_t", statistic_name),
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((x_min..x_max).log_scale(), 0.0..1.0)?;

    chart
        .configure_mesh()
        .x_desc("Delta_t")
        .y_desc(format!("mean {}", statistic_name))
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), BLUE))?;
    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 4, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}
