//! Channel decomposition
//!
//! Splits an [`RgbGrid`] into single-channel grids and builds the
//! isolated-channel visualizations used for export. No numeric
//! transformation occurs: every sample lands unchanged in exactly one
//! output grid.

use crate::error::{Error, Result};
use crate::grid::{Channel, Grid8, RgbGrid};

/// The three single-channel grids of one color image, in a caller-chosen
/// order.
#[derive(Debug, Clone)]
pub struct ChannelSet {
    planes: [(Channel, Grid8); 3],
}

impl ChannelSet {
    /// Channels with their grids, in split order.
    pub fn planes(&self) -> &[(Channel, Grid8); 3] {
        &self.planes
    }

    /// Grid for one channel.
    pub fn get(&self, channel: Channel) -> Option<&Grid8> {
        self.planes
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, g)| g)
    }

    /// Iterate over `(channel, grid)` pairs in split order.
    pub fn iter(&self) -> impl Iterator<Item = &(Channel, Grid8)> {
        self.planes.iter()
    }

    /// Recompose the color image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the set was split with a
    /// repeated channel and so lacks one of R, G, B.
    pub fn merge(&self) -> Result<RgbGrid> {
        let pick = |ch: Channel| {
            self.get(ch)
                .ok_or_else(|| Error::InvalidParameter(format!("channel {ch} missing from set")))
        };
        RgbGrid::from_channels(
            pick(Channel::Red)?,
            pick(Channel::Green)?,
            pick(Channel::Blue)?,
        )
    }
}

/// Split a color grid into three single-channel grids.
///
/// `order` decides the order of the returned planes, e.g.
/// [`Channel::BGR`]. Repeating a channel in `order` repeats its grid.
pub fn split_channels(rgb: &RgbGrid, order: [Channel; 3]) -> ChannelSet {
    log::debug!(
        "splitting {}x{} grid into {}{}{}",
        rgb.width(),
        rgb.height(),
        order[0],
        order[1],
        order[2]
    );
    ChannelSet {
        planes: order.map(|ch| (ch, rgb.channel(ch))),
    }
}

/// Build a color grid carrying `grid` in `channel` and zero elsewhere.
pub fn isolate_channel(grid: &Grid8, channel: Channel) -> Result<RgbGrid> {
    let mut data = vec![0u8; grid.pixel_count() * 3];
    let offset = channel.offset();
    for (px, &v) in data.chunks_exact_mut(3).zip(grid.data()) {
        px[offset] = v;
    }
    RgbGrid::from_interleaved(grid.width(), grid.height(), data)
}

/// Isolated-channel visualizations for every plane of a [`ChannelSet`].
pub fn isolated_views(set: &ChannelSet) -> Result<Vec<(Channel, RgbGrid)>> {
    set.iter()
        .map(|(ch, grid)| Ok((*ch, isolate_channel(grid, *ch)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RgbGridMut;

    fn sample_rgb() -> RgbGrid {
        let mut gm = RgbGridMut::new_filled(4, 3, (10, 20, 30)).unwrap();
        gm.set_rgb(2, 1, (1, 2, 3)).unwrap();
        gm.into()
    }

    #[test]
    fn test_split_bgr_order() {
        let set = split_channels(&sample_rgb(), Channel::BGR);
        let planes = set.planes();
        assert_eq!(planes[0].0, Channel::Blue);
        assert_eq!(planes[0].1.get_pixel(0, 0), Some(30));
        assert_eq!(planes[2].1.get_pixel(2, 1), Some(1));
        for (_, g) in set.iter() {
            assert_eq!(g.dimensions(), (4, 3));
        }
    }

    #[test]
    fn test_split_then_merge_is_identity() {
        let rgb = sample_rgb();
        let set = split_channels(&rgb, Channel::BGR);
        assert_eq!(set.merge().unwrap(), rgb);
    }

    #[test]
    fn test_isolated_view() {
        let rgb = sample_rgb();
        let set = split_channels(&rgb, Channel::BGR);
        let views = isolated_views(&set).unwrap();
        assert_eq!(views.len(), 3);
        let (ch, green) = &views[1];
        assert_eq!(*ch, Channel::Green);
        assert_eq!(green.get_rgb(0, 0), Some((0, 20, 0)));
        assert_eq!(green.get_rgb(2, 1), Some((0, 2, 0)));
    }

    #[test]
    fn test_get_by_channel() {
        let set = split_channels(&sample_rgb(), Channel::RGB);
        assert_eq!(set.get(Channel::Green).unwrap().get_pixel(3, 2), Some(20));
    }

    #[test]
    fn test_merge_with_repeated_channel_fails() {
        let set = split_channels(&sample_rgb(), [Channel::Red, Channel::Red, Channel::Blue]);
        assert!(set.merge().is_err());
    }
}
