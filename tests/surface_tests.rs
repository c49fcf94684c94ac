use approx::assert_relative_eq;
use isotype_charts::core::CanvasSize;
use isotype_charts::interaction::SurfaceRect;

#[test]
fn uniform_scale_maps_client_to_canvas() {
    let canvas = CanvasSize::new(1066.0, 522.0);
    let surface = SurfaceRect::new(0.0, 0.0, 533.0, 261.0);

    let fit = surface.fit(canvas).expect("fit");
    assert_relative_eq!(fit.scale, 0.5);
    assert_relative_eq!(fit.offset_x, 0.0);
    assert_relative_eq!(fit.offset_y, 0.0);

    let (x, y) = surface.to_canvas(5.0, 5.0, canvas).expect("canvas point");
    assert_relative_eq!(x, 10.0);
    assert_relative_eq!(y, 10.0);
}

#[test]
fn spare_axis_is_letterboxed_around_the_centre() {
    let canvas = CanvasSize::new(1066.0, 522.0);
    let surface = SurfaceRect::new(100.0, 50.0, 1066.0, 1044.0);

    let fit = surface.fit(canvas).expect("fit");
    assert_relative_eq!(fit.scale, 1.0);
    assert_relative_eq!(fit.offset_x, 100.0);
    assert_relative_eq!(fit.offset_y, 311.0);

    let (x, y) = fit.to_canvas(110.0, 321.0);
    assert_relative_eq!(x, 10.0);
    assert_relative_eq!(y, 10.0);

    let (client_x, client_y) = fit.to_client(x, y);
    assert_relative_eq!(client_x, 110.0);
    assert_relative_eq!(client_y, 321.0);
}

#[test]
fn degenerate_surfaces_do_not_fit() {
    let canvas = CanvasSize::new(800.0, 400.0);
    assert!(SurfaceRect::new(0.0, 0.0, 0.0, 100.0).fit(canvas).is_none());
    assert!(SurfaceRect::new(0.0, 0.0, 100.0, f64::NAN).fit(canvas).is_none());
    assert!(
        SurfaceRect::new(0.0, 0.0, 100.0, 100.0)
            .fit(CanvasSize::new(0.0, 10.0))
            .is_none()
    );
}
