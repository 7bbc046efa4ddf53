//! Channel decomposition regression test
//!
//! Tests:
//!   (1) Split in BGR order then merge reproduces the color grid
//!   (2) Every sample lands in exactly one isolated view
//!   (3) Gray reduction with luminance and average weights
//!
//! Run with:
//! ```
//! cargo test -p morpholab-core --test channel_reg
//! ```

use morpholab_core::{
    Channel, GrayWeights, Grid8, RgbGrid, isolated_views, split_channels,
};
use morpholab_test::{RegParams, test_pattern};

fn color_pattern(width: u32, height: u32) -> RgbGrid {
    let base = test_pattern(width, height);
    let shifted = Grid8::from_fn(width, height, |x, y| base.pixel((x + 7) % width, y)).unwrap();
    let flipped = base.invert();
    RgbGrid::from_channels(&base, &shifted, &flipped).unwrap()
}

#[test]
fn channel_reg() {
    let mut rp = RegParams::new("channel");
    let rgb = color_pattern(53, 41);

    // ====================================================================
    // (1) Split and merge
    // ====================================================================
    eprintln!("  Testing split/merge");
    let set = split_channels(&rgb, Channel::BGR);
    let order: Vec<Channel> = set.iter().map(|(c, _)| *c).collect();
    rp.compare_values(1.0, if order == Channel::BGR { 1.0 } else { 0.0 }, 0.0);
    let merged = set.merge().unwrap();
    rp.compare_values(1.0, if merged == rgb { 1.0 } else { 0.0 }, 0.0);
    rp.compare_grids(set.get(Channel::Red).unwrap(), &test_pattern(53, 41));
    rp.compare_grids(set.get(Channel::Blue).unwrap(), &test_pattern(53, 41).invert());

    // ====================================================================
    // (2) Isolated views
    // ====================================================================
    eprintln!("  Testing isolated views");
    let views = isolated_views(&set).unwrap();
    rp.compare_values(3.0, views.len() as f64, 0.0);
    let mut summed = vec![0u32; rgb.data().len()];
    for (channel, view) in &views {
        rp.compare_grids(&view.channel(*channel), set.get(*channel).unwrap());
        for (acc, &v) in summed.iter_mut().zip(view.data()) {
            *acc += v as u32;
        }
    }
    let same = summed.iter().zip(rgb.data()).all(|(&a, &b)| a == b as u32);
    rp.compare_values(1.0, if same { 1.0 } else { 0.0 }, 0.0);

    // ====================================================================
    // (3) Gray reduction
    // ====================================================================
    eprintln!("  Testing gray reduction");
    let gray_rgb = RgbGrid::from_channels(
        set.get(Channel::Red).unwrap(),
        set.get(Channel::Red).unwrap(),
        set.get(Channel::Red).unwrap(),
    )
    .unwrap();
    for weights in [GrayWeights::LUMINANCE, GrayWeights::AVERAGE] {
        let gray = gray_rgb.to_gray(weights).unwrap();
        rp.compare_grids(&gray, set.get(Channel::Red).unwrap());
    }
    let lum = rgb.to_gray(GrayWeights::LUMINANCE).unwrap();
    let again = rgb.to_gray(GrayWeights::LUMINANCE).unwrap();
    rp.compare_grids(&lum, &again);

    assert!(rp.cleanup());
}
