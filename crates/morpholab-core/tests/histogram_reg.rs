//! Histogram regression test
//!
//! Tests:
//!   (1) Counts sum to the pixel count for every channel
//!   (2) Per-channel tables agree with the single-grid tables
//!   (3) Plot geometry and colors
//!
//! Run with:
//! ```
//! cargo test -p morpholab-core --test histogram_reg
//! ```

use morpholab_core::{
    Channel, ColorHistogram, Grid8, HISTOGRAM_BINS, HistogramTable, RgbGrid,
    render_histogram_plot, split_channels,
};
use morpholab_test::{RegParams, test_pattern};

#[test]
fn histogram_reg() {
    let mut rp = RegParams::new("histogram");
    let base = test_pattern(64, 48);
    let rgb = RgbGrid::from_channels(&base, &base.invert(), &Grid8::new_filled(64, 48, 7).unwrap())
        .unwrap();

    // ====================================================================
    // (1) Totals
    // ====================================================================
    eprintln!("  Testing totals");
    let color = ColorHistogram::from_rgb(&rgb);
    for channel in Channel::RGB {
        rp.compare_values(3072.0, color.channel(channel).total() as f64, 0.0);
    }
    rp.compare_values(3072.0, color.blue.get(7) as f64, 0.0);
    rp.compare_values(7.0, color.blue.mode() as f64, 0.0);

    // ====================================================================
    // (2) Agreement with split channels
    // ====================================================================
    eprintln!("  Testing agreement with split channels");
    let set = split_channels(&rgb, Channel::BGR);
    for (channel, grid) in set.iter() {
        let table = HistogramTable::from_grid(grid);
        let same = &table == color.channel(*channel);
        rp.compare_values(1.0, if same { 1.0 } else { 0.0 }, 0.0);
    }
    // inversion mirrors the table
    let red = color.channel(Channel::Red).counts();
    let green = color.channel(Channel::Green).counts();
    let mirrored = (0..HISTOGRAM_BINS).all(|i| red[i] == green[HISTOGRAM_BINS - 1 - i]);
    rp.compare_values(1.0, if mirrored { 1.0 } else { 0.0 }, 0.0);
    let red_mean = color.red.mean().unwrap();
    let green_mean = color.green.mean().unwrap();
    rp.compare_values(255.0, red_mean + green_mean, 1e-9);

    // ====================================================================
    // (3) Plot
    // ====================================================================
    eprintln!("  Testing plot");
    let series = [
        (&color.blue, (0, 0, 255)),
        (&color.green, (0, 128, 0)),
        (&color.red, (255, 0, 0)),
    ];
    let plot = render_histogram_plot(&series, 256).unwrap();
    rp.compare_values(256.0, plot.width() as f64, 0.0);
    rp.compare_values(256.0, plot.height() as f64, 0.0);
    // the constant blue channel peaks at level 7, on the top row
    rp.compare_values(1.0, if plot.get_rgb(7, 0) == Some((0, 0, 255)) { 1.0 } else { 0.0 }, 0.0);
    rp.compare_values(1.0, if render_histogram_plot(&[], 10).is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup());
}
