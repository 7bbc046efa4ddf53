//! Synthetic stand-ins for the three report photographs
//!
//! Used when no matching file exists in the input directory. Coordinates
//! are absolute pixels tuned for the default 800x600 canvas; shapes that
//! fall outside a smaller canvas are clipped. Text is drawn as solid bars
//! of roughly the size the glyphs would occupy.

use crate::ReportResult;
use morpholab_core::{Rgb, RgbGrid, RgbGridMut};
use rand::prelude::*;

const WHITE: Rgb = (255, 255, 255);

/// Upper bound (exclusive) of the additive document noise.
pub const DOCUMENT_NOISE: u32 = 25;

/// Fill the box a line of `chars` glyphs would cover, with its baseline
/// at `baseline`.
fn text_bar(img: &mut RgbGridMut, x: i32, baseline: i32, chars: u32, scale: f32, color: Rgb) {
    let advance = (20.0 * scale) as i32;
    let cap = (22.0 * scale) as i32;
    img.fill_rect(x, baseline - cap, x + advance * chars as i32, baseline, color);
}

/// Stylized figure on a white background.
pub fn generate_person(width: u32, height: u32) -> ReportResult<RgbGrid> {
    let mut img = RgbGridMut::new_filled(width, height, WHITE)?;
    text_bar(&mut img, 20, 50, 18, 1.0, (60, 60, 60));

    let (cx, cy) = ((width / 2) as i32, (height / 2) as i32 - 40);
    let head_r = (width.min(height) / 10).max(40) as i32;
    let (torso_w, torso_h) = (head_r, head_r * 2);

    img.fill_circle(cx, cy - head_r - 10, head_r as u32, (220, 120, 40));
    img.fill_rect(cx - torso_w, cy - 20, cx + torso_w, cy + torso_h, (60, 160, 60));

    let limb = (170, 90, 50);
    let leg_len = torso_h + head_r;
    let arm_len = torso_w * 2;
    img.draw_line(cx - torso_w, cy + torso_h, cx - torso_w - 20, cy + leg_len, 14, limb);
    img.draw_line(cx + torso_w, cy + torso_h, cx + torso_w + 20, cy + leg_len, 14, limb);
    img.draw_line(cx - torso_w, cy + 10, cx - torso_w - arm_len, cy - 30, 12, limb);
    img.draw_line(cx + torso_w, cy + 10, cx + torso_w + arm_len, cy - 30, 12, limb);

    img.fill_circle(cx - head_r / 3, cy - head_r - 20, 8, WHITE);
    img.fill_circle(cx + head_r / 3, cy - head_r - 20, 8, WHITE);
    img.fill_half_ellipse(
        cx,
        cy - head_r + 5,
        (head_r / 2) as u32,
        (head_r / 4) as u32,
        (240, 240, 240),
    );
    Ok(img.into())
}

/// Nested boxes next to a ring with a forked stem, on a light background.
pub fn generate_object(width: u32, height: u32) -> ReportResult<RgbGrid> {
    let mut img = RgbGridMut::new_filled(width, height, (240, 240, 240))?;
    text_bar(&mut img, 20, 50, 16, 1.0, (100, 60, 20));

    let (rw, rh) = ((width / 5) as i32, (height / 3) as i32);
    let (rx, ry) = ((width / 4) as i32, (height / 3) as i32);
    img.fill_rect(rx, ry, rx + rw, ry + rh, (30, 80, 180));
    if rw > 30 && rh > 50 {
        img.fill_rect(rx + 15, ry + 15, rx + rw - 15, ry + rh / 2, (80, 120, 210));
        img.fill_rect(rx + 15, ry + rh / 2 + 10, rx + rw - 15, ry + rh - 15, (20, 60, 130));
    }

    let radius = (width.min(height) / 6) as i32;
    let (cx, cy) = ((width * 13 / 20) as i32, (height * 11 / 20) as i32);
    img.fill_circle(cx, cy, radius as u32, (220, 150, 60));
    if radius > 30 {
        img.fill_circle(cx, cy, (radius - 30) as u32, (255, 230, 200));
    }

    let stem = (160, 90, 30);
    let top = cy - radius;
    img.draw_line(cx, top, cx, top - 80, 12, stem);
    img.draw_line(cx, top - 80, cx - 40, top - 120, 12, stem);
    img.draw_line(cx, top - 80, cx + 40, top - 120, 12, stem);
    Ok(img.into())
}

/// Glyph counts of the six body lines of the document.
const DOCUMENT_LINES: [u32; 6] = [14, 10, 20, 19, 24, 16];

/// Form-like page with text lines and a 5x2 grid of field boxes, plus
/// uniform noise in `[0, 25)` added per sample (saturating).
///
/// The noise is drawn from a generator seeded with `seed`, so equal
/// arguments give equal images.
pub fn generate_document(width: u32, height: u32, seed: u64) -> ReportResult<RgbGrid> {
    let mut img = RgbGridMut::new_filled(width, height, WHITE)?;
    let (w, h) = (width as i32, height as i32);
    let (mx, my) = (w / 12, h / 20);

    img.draw_rect_outline(mx, my, w - mx, h - my, 2, (220, 220, 220));
    text_bar(&mut img, mx + 10, my + 40, 19, 1.1, (0, 0, 0));
    for (i, &chars) in DOCUMENT_LINES.iter().enumerate() {
        let baseline = my + 110 + i as i32 * 50;
        text_bar(&mut img, mx + 10, baseline, chars, 0.9, (30, 30, 30));
    }

    let box_w = ((w - 2 * mx - 40) / 2).max(1);
    let box_h = 60;
    for row in 0..5 {
        for col in 0..2 {
            let x1 = mx + 10 + col * (box_w + 40);
            let y1 = my + 350 + row * 80;
            img.draw_rect_outline(x1, y1, x1 + box_w, y1 + box_h, 2, (140, 140, 140));
            let label = if row * 2 + col + 1 < 10 { 7 } else { 8 };
            text_bar(&mut img, x1 + 10, y1 + 35, label, 0.6, (50, 50, 50));
        }
    }

    let mut rng = StdRng::seed_from_u64(seed);
    img.add_saturating(|_, _, _| (rng.next_u32() % DOCUMENT_NOISE) as u8);
    Ok(img.into())
}
