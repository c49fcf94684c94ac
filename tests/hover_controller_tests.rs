use approx::assert_relative_eq;
use isotype_charts::ChartError;
use isotype_charts::interaction::{HoverController, HoverState, TooltipPlacement};

fn controller() -> HoverController {
    HoverController::new(274, 1066.0, TooltipPlacement::new(260.0, 50.0)).expect("controller")
}

#[test]
fn starts_with_nothing_hovered() {
    let hover = controller();
    assert_eq!(hover.state(), HoverState::default());
    assert!(!hover.is_dimmed(0));
    assert_relative_eq!(hover.opacity_for(0, 0.2), 1.0);
    assert!(!hover.current_tooltip(|_| vec!["unused".to_owned()]).visible);
}

#[test]
fn at_most_one_glyph_is_hovered() {
    let mut hover = controller();
    assert!(hover.on_glyph_enter(3));
    assert!(hover.on_glyph_enter(7));
    assert_eq!(hover.hovered(), Some(7));
    assert!(!hover.on_glyph_enter(7));

    let dimmed = (0..274).filter(|index| hover.is_dimmed(*index)).count();
    assert_eq!(dimmed, 273);
    assert!(!hover.is_dimmed(7));
    assert_relative_eq!(hover.opacity_for(3, 0.2), 0.2);
    assert_relative_eq!(hover.opacity_for(7, 0.2), 1.0);
}

#[test]
fn out_of_range_enter_is_discarded() {
    let mut hover = controller();
    hover.on_glyph_enter(5);
    assert!(!hover.on_glyph_enter(274));
    assert_eq!(hover.hovered(), Some(5));
}

#[test]
fn surface_move_never_changes_hovered_glyph() {
    let mut hover = controller();
    hover.on_glyph_enter(12);
    hover.on_surface_move(500.0, 300.0);
    assert_eq!(hover.hovered(), Some(12));
    assert_eq!(hover.pointer(), (500.0, 300.0));

    hover.on_surface_move(f64::NAN, 10.0);
    assert_eq!(hover.pointer(), (500.0, 300.0));
}

#[test]
fn surface_leave_clears_hover() {
    let mut hover = controller();
    assert!(!hover.on_surface_leave());
    hover.on_glyph_enter(0);
    assert!(hover.on_surface_leave());
    assert_eq!(hover.hovered(), None);
    assert!(!hover.is_dimmed(1));
}

#[test]
fn glyph_leave_only_clears_the_hovered_glyph() {
    let mut hover = controller();
    hover.on_glyph_enter(4);
    assert!(!hover.on_glyph_leave(3));
    assert_eq!(hover.hovered(), Some(4));
    assert!(hover.on_glyph_leave(4));
    assert_eq!(hover.hovered(), None);
}

#[test]
fn tooltip_follows_pointer_and_asks_for_label() {
    let mut hover = controller();
    hover.on_surface_move(500.0, 200.0);
    hover.on_glyph_enter(9);

    let tooltip = hover.current_tooltip(|index| vec![format!("glyph {index}"), "detail".to_owned()]);
    assert!(tooltip.visible);
    assert_eq!(tooltip.glyph, Some(9));
    assert_eq!(tooltip.headline(), "glyph 9");
    assert_eq!(tooltip.text(), "glyph 9 \u{2014} detail");
    assert_relative_eq!(tooltip.anchor_x, 500.0);
    assert_relative_eq!(tooltip.anchor_y, 190.0);
    assert_relative_eq!(tooltip.left(), 370.0);
    assert_relative_eq!(tooltip.top(), 140.0);
}

#[test]
fn reset_clears_state_for_new_layout() {
    let mut hover = controller();
    hover.on_glyph_enter(200);
    hover.on_surface_move(10.0, 10.0);
    hover.reset(70, 818.0).expect("reset");

    assert_eq!(hover.state(), HoverState::default());
    assert_eq!(hover.glyph_count(), 70);
    assert!(!hover.on_glyph_enter(200));
}

#[test]
fn invalid_surface_or_placement_is_rejected() {
    let err = HoverController::new(10, -1.0, TooltipPlacement::new(100.0, 40.0))
        .expect_err("surface width must be >= 0");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = HoverController::new(10, f64::NAN, TooltipPlacement::new(100.0, 40.0))
        .expect_err("surface width must be finite");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = HoverController::new(10, 800.0, TooltipPlacement::new(-1.0, 40.0))
        .expect_err("tooltip width must be > 0");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn zero_width_surface_centres_tooltip_on_origin() {
    let mut hover = HoverController::new(0, 0.0, TooltipPlacement::new(100.0, 40.0))
        .expect("empty surface is valid");
    hover.on_surface_move(25.0, 30.0);
    assert!(!hover.on_glyph_enter(0));

    let tooltip = hover.current_tooltip(|_| Vec::new());
    assert!(!tooltip.visible);
    assert_relative_eq!(tooltip.anchor_x, 0.0);
}
