use isotype_charts::core::{GlyphCategory, layout_grid, partition};
use isotype_charts::interaction::{HoverController, TooltipPlacement, clamp_tooltip_x};
use proptest::prelude::*;

proptest! {
    #[test]
    fn grid_cells_never_overlap_and_stay_in_bounds(
        total in 0usize..400,
        columns in 1usize..40,
        icon_w in 1.0f64..80.0,
        icon_h in 1.0f64..80.0,
        pad_x in 0.0f64..10.0,
        pad_y in 0.0f64..10.0
    ) {
        let layout = layout_grid(total, columns, icon_w, icon_h, pad_x, pad_y).expect("grid");
        prop_assert_eq!(layout.len(), total);
        prop_assert_eq!(layout.rows, total.div_ceil(columns));

        for placement in &layout.placements {
            prop_assert_eq!(placement.row * columns + placement.column, placement.flat_index);
            prop_assert!(placement.x >= 0.0 && placement.y >= 0.0);
            prop_assert!(placement.x + icon_w <= layout.width + 1e-9);
            prop_assert!(placement.y + icon_h <= layout.height + 1e-9);
        }
        for pair in layout.placements.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.row == b.row {
                prop_assert!(a.x + icon_w <= b.x + 1e-9);
            } else {
                prop_assert!(a.y + icon_h <= b.y + 1e-9);
            }
        }
    }

    #[test]
    fn derived_ratio_always_maps_back_to_icon_count(
        icons in 1usize..5_000,
        per_icon in 1u64..10_000,
        remainder_fraction in 0.0f64..1.0,
        tail in 0usize..500
    ) {
        let remainder = ((remainder_fraction * per_icon as f64) as u64).min(per_icon - 1);
        let total = icons as u64 * per_icon + remainder;
        let unit_per_icon = total as f64 / icons as f64;
        let split = partition(total as f64, unit_per_icon, tail).expect("partition");

        prop_assert_eq!(split.major_icon_count, icons);
        prop_assert_eq!(split.boundary_index, icons);
        prop_assert_eq!(split.total_icon_count, icons + tail);
        prop_assert_eq!(split.category_of(icons - 1), GlyphCategory::Major);
        if tail > 0 {
            prop_assert_eq!(split.category_of(icons), GlyphCategory::Subcategory);
        }
    }

    #[test]
    fn tooltip_footprint_stays_on_surface(
        pointer_x in -500.0f64..3_000.0,
        tooltip_width in 1.0f64..400.0,
        surface_width in 1.0f64..2_500.0,
        edge_margin in 0.0f64..20.0
    ) {
        let x = clamp_tooltip_x(pointer_x, tooltip_width, surface_width, edge_margin);
        if tooltip_width + 2.0 * edge_margin <= surface_width {
            prop_assert!(x - tooltip_width / 2.0 >= edge_margin - 1e-9);
            prop_assert!(x + tooltip_width / 2.0 <= surface_width - edge_margin + 1e-9);
        } else {
            prop_assert!((x - surface_width / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn hover_sequences_keep_a_single_hovered_glyph(
        glyph_count in 1usize..300,
        events in proptest::collection::vec((0u8..3, 0usize..400), 0..64)
    ) {
        let mut hover = HoverController::new(glyph_count, 800.0, TooltipPlacement::new(160.0, 50.0))
            .expect("controller");
        let mut expected: Option<usize> = None;
        for (kind, index) in events {
            match kind {
                0 => {
                    hover.on_glyph_enter(index);
                    if index < glyph_count {
                        expected = Some(index);
                    }
                }
                1 => {
                    hover.on_surface_leave();
                    expected = None;
                }
                _ => hover.on_surface_move(index as f64, 10.0),
            }
            prop_assert_eq!(hover.hovered(), expected);
            let undimmed = (0..glyph_count).filter(|i| !hover.is_dimmed(*i)).count();
            match expected {
                Some(_) => prop_assert_eq!(undimmed, 1),
                None => prop_assert_eq!(undimmed, glyph_count),
            }
        }
    }

    #[test]
    fn grid_layout_is_a_pure_function_of_its_inputs(
        total in 0usize..400,
        columns in 1usize..40,
        icon in 1.0f64..80.0,
        pad in 0.0f64..10.0
    ) {
        let first = layout_grid(total, columns, icon, icon, pad, pad).expect("grid");
        let second = layout_grid(total, columns, icon, icon, pad, pad).expect("grid");
        prop_assert_eq!(first, second);
    }
}
