use approx::assert_abs_diff_eq;
use isotype_charts::render::{FillRule, GlyphShape, PartTone};
use kurbo::{Point, Shape};

#[test]
fn view_box_is_fitted_and_centred_in_glyph_box() {
    let shape = GlyphShape::StandingPerson;
    let view_box = shape.view_box();
    let transform = shape.placement(0.0, 0.0, 36.0, 44.0);

    let scale = 44.0 / view_box.height;
    let inset = (36.0 - view_box.width * scale) / 2.0;

    let top_left = transform * Point::new(view_box.x, view_box.y);
    assert_abs_diff_eq!(top_left.x, inset, epsilon = 1e-9);
    assert_abs_diff_eq!(top_left.y, 0.0, epsilon = 1e-9);

    let bottom_right = transform * Point::new(view_box.x + view_box.width, view_box.y + view_box.height);
    assert_abs_diff_eq!(bottom_right.x, 36.0 - inset, epsilon = 1e-9);
    assert_abs_diff_eq!(bottom_right.y, 44.0, epsilon = 1e-9);
}

#[test]
fn hospital_bed_parts_stay_inside_their_box() {
    let parts = GlyphShape::HospitalBed
        .paths_in(40.0, 790.0, 40.0, 40.0)
        .expect("bed artwork");

    assert_eq!(parts.len(), 10);
    for part in &parts {
        let bounds = part.path.bounding_box();
        assert!(bounds.x0 >= 40.0 - 1e-6 && bounds.x1 <= 80.0 + 1e-6);
        assert!(bounds.y0 >= 790.0 - 1e-6 && bounds.y1 <= 830.0 + 1e-6);
    }
    assert_eq!(parts.last().map(|part| part.tone), Some(PartTone::Knockout));
    assert!(
        parts[..parts.len() - 1]
            .iter()
            .all(|part| part.tone == PartTone::Fill)
    );
}

#[test]
fn every_shape_parses_into_paths() {
    for shape in [
        GlyphShape::StandingPerson,
        GlyphShape::Figure,
        GlyphShape::HospitalBed,
    ] {
        let parts = shape.paths_in(0.0, 0.0, 50.0, 60.0).expect("artwork");
        assert!(!parts.is_empty());
        assert!(parts.iter().all(|part| !part.path.elements().is_empty()));
    }
}

#[test]
fn only_the_figure_uses_even_odd_fill() {
    assert_eq!(GlyphShape::Figure.fill_rule(), FillRule::EvenOdd);
    assert_eq!(GlyphShape::StandingPerson.fill_rule(), FillRule::NonZero);
    assert_eq!(GlyphShape::HospitalBed.fill_rule(), FillRule::NonZero);
}
