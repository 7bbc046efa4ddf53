//! Gray morphology regression test
//!
//! Tests:
//!   (1) Ordering: erode(I) <= I <= dilate(I) for every shape
//!   (2) Idempotence of opening and closing
//!   (3) Larger elements widen the dilate/erode spread
//!   (4) Flat and single-spike inputs
//!   (5) Element geometry (member counts, even size normalization)
//!   (6) Duality: erode(I) == invert(dilate(invert(I)))
//!   (7) A smaller element (cross inside square) erodes less
//!
//! Run with:
//! ```
//! cargo test -p morpholab-morph --test graymorph_reg
//! ```

use morpholab_core::{Grid8, Grid8Mut};
use morpholab_morph::{
    ElementShape, MorphSet, StructuringElement, close_gray, dilate_gray, erode_gray,
    gradient_gray, open_gray, subtract_gray,
};
use morpholab_test::{RegParams, test_pattern};

const WIDTH: u32 = 61;
const HEIGHT: u32 = 47;

fn all_le(a: &Grid8, b: &Grid8) -> bool {
    a.data().iter().zip(b.data()).all(|(x, y)| x <= y)
}

fn as_value(ok: bool) -> f64 {
    if ok { 1.0 } else { 0.0 }
}

#[test]
fn graymorph_reg() {
    let mut rp = RegParams::new("graymorph");
    let pixs = test_pattern(WIDTH, HEIGHT);

    // ====================================================================
    // (1) Ordering and (2) idempotence, per shape
    // ====================================================================
    for shape in ElementShape::ALL {
        eprintln!("  Testing ordering and idempotence for {shape}");
        let sel = StructuringElement::new(shape, 5).expect("element");
        let set = MorphSet::compute(&pixs, &sel).expect("morph set");

        rp.compare_values(1.0, as_value(all_le(&set.erosion, &pixs)), 0.0);
        rp.compare_values(1.0, as_value(all_le(&pixs, &set.dilation)), 0.0);
        rp.compare_values(1.0, as_value(all_le(&set.opening, &pixs)), 0.0);
        rp.compare_values(1.0, as_value(all_le(&pixs, &set.closing)), 0.0);

        let reopened = open_gray(&set.opening, &sel).expect("open");
        rp.compare_grids(&set.opening, &reopened);
        let reclosed = close_gray(&set.closing, &sel).expect("close");
        rp.compare_grids(&set.closing, &reclosed);

        let spread = subtract_gray(&set.dilation, &set.erosion).expect("subtract");
        rp.compare_grids(&set.gradient, &spread);
    }

    // ====================================================================
    // (3) Spread grows with element size
    // ====================================================================
    eprintln!("  Testing size monotonicity");
    let mut previous: Option<Grid8> = None;
    for size in [1, 3, 5, 7, 9] {
        let sel = StructuringElement::rectangle(size).expect("element");
        let grad = gradient_gray(&pixs, &sel).expect("gradient");
        if let Some(prev) = &previous {
            rp.compare_values(1.0, as_value(all_le(prev, &grad)), 0.0);
        }
        previous = Some(grad);
    }
    let size1 = StructuringElement::cross(1).expect("element");
    let grad1 = gradient_gray(&pixs, &size1).expect("gradient");
    rp.compare_values(0.0, grad1.data().iter().map(|&v| v as f64).sum(), 0.0);

    // ====================================================================
    // (4) Flat and single-spike inputs
    // ====================================================================
    eprintln!("  Testing flat 5x5 grid");
    let flat = Grid8::new_filled(5, 5, 100).expect("grid");
    let sel = StructuringElement::rectangle(3).expect("element");
    let set = MorphSet::compute(&flat, &sel).expect("morph set");
    for (op, result) in set.iter() {
        eprintln!("    {op}");
        let expected = if op == morpholab_morph::MorphOp::Gradient { 0 } else { 100 };
        rp.compare_values(25.0, result.count_value(expected) as f64, 0.0);
    }

    eprintln!("  Testing single bright pixel");
    let mut spike = Grid8Mut::new(9, 9).expect("grid");
    spike.set_pixel(4, 4, 255).expect("set");
    let spike: Grid8 = spike.into();
    let sel = StructuringElement::rectangle(3).expect("element");
    let dilated = dilate_gray(&spike, &sel).expect("dilate");
    rp.compare_values(9.0, dilated.count_value(255) as f64, 0.0);
    let eroded = erode_gray(&spike, &sel).expect("erode");
    rp.compare_values(81.0, eroded.count_value(0) as f64, 0.0);
    let opened = open_gray(&spike, &sel).expect("open");
    rp.compare_values(81.0, opened.count_value(0) as f64, 0.0);

    eprintln!("  Testing centered spike on 5x5 grid");
    let mut spike = Grid8Mut::new(5, 5).expect("grid");
    spike.set_pixel(2, 2, 255).expect("set");
    let spike: Grid8 = spike.into();
    let set = MorphSet::compute(&spike, &sel).expect("morph set");
    rp.compare_values(9.0, set.dilation.count_value(255) as f64, 0.0);
    rp.compare_values(25.0, set.erosion.count_value(0) as f64, 0.0);
    rp.compare_grids(&set.gradient, &set.dilation);

    // ====================================================================
    // (5) Element geometry
    // ====================================================================
    eprintln!("  Testing element geometry");
    let count = |shape, size| {
        StructuringElement::new(shape, size)
            .expect("element")
            .member_count() as f64
    };
    rp.compare_values(5.0, count(ElementShape::Cross, 3), 0.0);
    rp.compare_values(9.0, count(ElementShape::Rectangle, 3), 0.0);
    rp.compare_values(5.0, count(ElementShape::Ellipse, 3), 0.0);
    rp.compare_values(13.0, count(ElementShape::Ellipse, 5), 0.0);
    let normalized = StructuringElement::from_config("rect", 4).expect("element");
    rp.compare_values(5.0, normalized.size() as f64, 0.0);
    rp.compare_values(25.0, normalized.mask().len() as f64, 0.0);

    // ====================================================================
    // (6) Duality between erosion and dilation
    // ====================================================================
    for shape in ElementShape::ALL {
        eprintln!("  Testing duality for {shape}");
        let sel = StructuringElement::new(shape, 7).expect("element");
        let eroded = erode_gray(&pixs, &sel).expect("erode");
        let dual = dilate_gray(&pixs.invert(), &sel).expect("dilate").invert();
        rp.compare_grids(&eroded, &dual);

        let opened = open_gray(&pixs, &sel).expect("open");
        let dual = close_gray(&pixs.invert(), &sel).expect("close").invert();
        rp.compare_grids(&opened, &dual);
    }

    // ====================================================================
    // (7) Containment across shapes
    // ====================================================================
    eprintln!("  Testing containment across shapes");
    let rect = StructuringElement::rectangle(5).expect("element");
    let cross = StructuringElement::cross(5).expect("element");
    let rect_eroded = erode_gray(&pixs, &rect).expect("erode");
    let cross_eroded = erode_gray(&pixs, &cross).expect("erode");
    // the cross is a subset of the square, so it erodes less
    rp.compare_values(1.0, as_value(all_le(&rect_eroded, &cross_eroded)), 0.0);

    assert!(rp.cleanup());
}
