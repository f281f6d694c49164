use xyplot::core::{
    Axis, BoundaryMode, EdgeConstraint, FramingModel, RectRegion, SharedSeries, SimpleXySeries,
    Viewport,
};
use xyplot::render::{LineAndPointFormatter, NullRenderer};
use xyplot::{PlotConfig, PlotError, XyPlot};

fn plot() -> XyPlot<NullRenderer> {
    XyPlot::new(NullRenderer::default(), PlotConfig::new(Viewport::new(800, 600)))
        .expect("plot init")
}

fn xy(xs: &[f64], ys: &[f64]) -> SharedSeries {
    SimpleXySeries::from_xy(xs, ys).into_shared()
}

fn replace_series(plot: &XyPlot<NullRenderer>, series: SharedSeries) {
    plot.handle().clear_series();
    assert!(
        plot.handle()
            .add_series(series, LineAndPointFormatter::default())
    );
}

#[test]
fn auto_bounds_follow_series_extremes() {
    let plot = plot();
    let series = SimpleXySeries::from_y_values(&[1.0, 8.0, 5.0, 2.0, 7.0, 4.0]).into_shared();
    plot.handle()
        .add_series(series, LineAndPointFormatter::default());

    let bounds = plot.calculate_min_max().expect("bounds");
    assert_eq!(bounds.min_x, 0.0);
    assert_eq!(bounds.max_x, 5.0);
    assert_eq!(bounds.min_y, 1.0);
    assert_eq!(bounds.max_y, 8.0);
    assert_eq!(plot.handle().domain_origin(), 0.0);
    assert_eq!(plot.handle().range_origin(), 1.0);
}

#[test]
fn accessors_report_default_bounds_before_first_frame() {
    let plot = plot();
    assert_eq!(plot.handle().calculated_min_x(), -1.0);
    assert_eq!(plot.handle().calculated_max_x(), 1.0);
    assert_eq!(plot.handle().calculated_min_y(), -1.0);
    assert_eq!(plot.handle().calculated_max_y(), 1.0);
    assert!(plot.handle().previous_bounds().is_none());
}

#[test]
fn empty_registry_uses_default_bounds() {
    let plot = plot();
    plot.handle()
        .set_default_bounds(RectRegion::new(0.0, 10.0, 0.0, 100.0).expect("region"))
        .expect("default bounds");

    let bounds = plot.calculate_min_max().expect("bounds");
    assert_eq!((bounds.min_x, bounds.max_x), (0.0, 10.0));
    assert_eq!((bounds.min_y, bounds.max_y), (0.0, 100.0));
}

#[test]
fn fixed_edges_override_data() {
    let plot = plot();
    replace_series(&plot, xy(&[0.0, 3.0], &[1.0, 2.0]));
    plot.handle()
        .set_domain_boundaries(-5.0, 5.0, BoundaryMode::Fixed)
        .expect("boundaries");

    let bounds = plot.calculate_min_max().expect("bounds");
    assert_eq!((bounds.min_x, bounds.max_x), (-5.0, 5.0));
    assert_eq!((bounds.min_y, bounds.max_y), (1.0, 2.0));
}

#[test]
fn per_edge_modes_resolve_independently() {
    let plot = plot();
    replace_series(&plot, xy(&[2.0, 9.0], &[1.0, 2.0]));
    plot.handle().set_domain_boundaries_per_edge(
        0.0,
        BoundaryMode::Fixed,
        0.0,
        BoundaryMode::Auto,
    )
    .expect("boundaries");

    let bounds = plot.calculate_min_max().expect("bounds");
    assert_eq!((bounds.min_x, bounds.max_x), (0.0, 9.0));
}

#[test]
fn grow_never_contracts_between_frames() {
    let plot = plot();
    plot.handle()
        .set_domain_boundaries(0.0, 0.0, BoundaryMode::Grow)
        .expect("boundaries");

    replace_series(&plot, xy(&[0.0, 10.0], &[1.0, 1.0]));
    let first = plot.calculate_min_max().expect("first frame");
    assert_eq!((first.min_x, first.max_x), (0.0, 10.0));

    replace_series(&plot, xy(&[0.0, 5.0], &[1.0, 1.0]));
    let second = plot.calculate_min_max().expect("second frame");
    assert_eq!((second.min_x, second.max_x), (0.0, 10.0));
    assert_eq!(plot.handle().previous_bounds(), Some(first));

    replace_series(&plot, xy(&[-3.0, 12.0], &[1.0, 1.0]));
    let third = plot.calculate_min_max().expect("third frame");
    assert_eq!((third.min_x, third.max_x), (-3.0, 12.0));
}

#[test]
fn shrink_never_expands_between_frames() {
    let plot = plot();
    plot.handle()
        .set_domain_boundaries(0.0, 0.0, BoundaryMode::Shrink)
        .expect("boundaries");

    replace_series(&plot, xy(&[0.0, 10.0], &[1.0, 1.0]));
    plot.calculate_min_max().expect("first frame");

    replace_series(&plot, xy(&[-5.0, 20.0], &[1.0, 1.0]));
    let second = plot.calculate_min_max().expect("second frame");
    assert_eq!((second.min_x, second.max_x), (0.0, 10.0));

    replace_series(&plot, xy(&[2.0, 8.0], &[1.0, 1.0]));
    let third = plot.calculate_min_max().expect("third frame");
    assert_eq!((third.min_x, third.max_x), (2.0, 8.0));
}

#[test]
fn reset_history_releases_grow() {
    let plot = plot();
    plot.handle()
        .set_domain_boundaries(0.0, 0.0, BoundaryMode::Grow)
        .expect("boundaries");
    replace_series(&plot, xy(&[0.0, 10.0], &[1.0, 1.0]));
    plot.calculate_min_max().expect("first frame");

    plot.handle().reset_bounds_history();
    replace_series(&plot, xy(&[0.0, 5.0], &[1.0, 1.0]));
    let bounds = plot.calculate_min_max().expect("fresh frame");
    assert_eq!(bounds.max_x, 5.0);
}

#[test]
fn clamps_limit_each_edge() {
    let plot = plot();
    replace_series(&plot, xy(&[0.0, 10.0], &[1.0, 8.0]));
    let handle = plot.handle();
    handle.set_domain_left_min(Some(2.0)).expect("clamp");
    handle.set_domain_right_max(Some(8.0)).expect("clamp");
    handle.set_range_top_max(Some(6.0)).expect("clamp");
    handle.set_range_bottom_min(Some(-3.0)).expect("clamp");

    let bounds = plot.calculate_min_max().expect("bounds");
    assert_eq!((bounds.min_x, bounds.max_x), (2.0, 8.0));
    assert_eq!((bounds.min_y, bounds.max_y), (1.0, 6.0));

    handle.set_domain_left_min(None).expect("clamp");
    handle.set_domain_left_max(Some(-1.0)).expect("clamp");
    handle.set_domain_right_max(None).expect("clamp");
    handle.set_domain_right_min(Some(15.0)).expect("clamp");
    let bounds = plot.calculate_min_max().expect("bounds");
    assert_eq!((bounds.min_x, bounds.max_x), (-1.0, 15.0));
}

#[test]
fn clamps_apply_after_grow() {
    let plot = plot();
    let handle = plot.handle();
    handle.set_domain_boundaries(0.0, 0.0, BoundaryMode::Grow).expect("boundaries");
    handle.set_domain_right_max(Some(15.0)).expect("clamp");

    replace_series(&plot, xy(&[0.0, 10.0], &[1.0, 1.0]));
    plot.calculate_min_max().expect("first frame");
    replace_series(&plot, xy(&[0.0, 20.0], &[1.0, 1.0]));
    let bounds = plot.calculate_min_max().expect("second frame");
    assert_eq!(bounds.max_x, 15.0);
}

#[test]
fn non_finite_fixed_edges_and_clamps_are_rejected() {
    let plot = plot();
    replace_series(&plot, xy(&[0.0, 10.0], &[1.0, 4.0]));
    let handle = plot.handle();
    let before = handle.constraints();

    let err = handle
        .set_domain_boundaries(f64::NAN, 10.0, BoundaryMode::Fixed)
        .expect_err("nan edge");
    assert!(matches!(err, PlotError::InvalidData(_)));
    let err = handle
        .set_range_upper_boundary(f64::INFINITY, BoundaryMode::Fixed)
        .expect_err("infinite edge");
    assert!(matches!(err, PlotError::InvalidData(_)));
    let err = handle
        .set_domain_right_max(Some(f64::INFINITY))
        .expect_err("infinite clamp");
    assert!(matches!(err, PlotError::InvalidData(_)));
    let err = handle
        .set_range_bottom_min(Some(f64::NAN))
        .expect_err("nan clamp");
    assert!(matches!(err, PlotError::InvalidData(_)));

    let after = handle.constraints();
    assert_eq!(after.domain.model, FramingModel::Edge);
    assert_eq!(after.domain.lower, EdgeConstraint::Unset);
    assert_eq!(after.domain.upper, before.domain.upper);
    assert_eq!(after.domain.upper_clamp, before.domain.upper_clamp);
    assert_eq!(after.range.lower_clamp, before.range.lower_clamp);

    let bounds = plot.calculate_min_max().expect("bounds");
    assert_eq!((bounds.min_x, bounds.max_x), (0.0, 10.0));
    assert_eq!((bounds.min_y, bounds.max_y), (1.0, 4.0));

    // Non-fixed modes drop the value, so it is not checked.
    handle
        .set_domain_boundaries(f64::NAN, f64::NAN, BoundaryMode::Grow)
        .expect("grow ignores value");
}

#[test]
fn domain_origin_auto_is_symmetric_around_origin() {
    let plot = plot();
    replace_series(&plot, xy(&[0.0, 12.0], &[1.0, 1.0]));
    plot.handle()
        .center_on_domain_origin(5.0, None, BoundaryMode::Auto)
        .expect("center");

    let bounds = plot.calculate_min_max().expect("bounds");
    assert_eq!((bounds.min_x, bounds.max_x), (-2.0, 12.0));
    assert_eq!(bounds.domain_origin, 5.0);
}

#[test]
fn domain_origin_fixed_ignores_data() {
    let plot = plot();
    replace_series(&plot, xy(&[0.0, 12.0], &[1.0, 1.0]));
    plot.handle()
        .center_on_domain_origin(5.0, Some(3.0), BoundaryMode::Fixed)
        .expect("center");

    let bounds = plot.calculate_min_max().expect("bounds");
    assert_eq!((bounds.min_x, bounds.max_x), (2.0, 8.0));
}

#[test]
fn domain_origin_grow_and_shrink_compare_each_edge() {
    let plot = plot();
    plot.handle()
        .center_on_domain_origin(5.0, None, BoundaryMode::Grow)
        .expect("center");

    replace_series(&plot, xy(&[0.0, 12.0], &[1.0, 1.0]));
    plot.calculate_min_max().expect("first frame");
    replace_series(&plot, xy(&[4.0, 6.0], &[1.0, 1.0]));
    let bounds = plot.calculate_min_max().expect("second frame");
    assert_eq!((bounds.min_x, bounds.max_x), (-2.0, 12.0));

    replace_series(&plot, xy(&[-10.0, 5.0], &[1.0, 1.0]));
    let bounds = plot.calculate_min_max().expect("third frame");
    assert_eq!((bounds.min_x, bounds.max_x), (-10.0, 20.0));

    plot.handle()
        .center_on_domain_origin(5.0, None, BoundaryMode::Shrink)
        .expect("center");
    replace_series(&plot, xy(&[4.0, 6.0], &[1.0, 1.0]));
    let bounds = plot.calculate_min_max().expect("shrink frame");
    assert_eq!((bounds.min_x, bounds.max_x), (4.0, 6.0));
}

#[test]
fn fixed_origin_without_extent_is_rejected_without_mutation() {
    let plot = plot();
    let err = plot
        .handle()
        .center_on_domain_origin(5.0, None, BoundaryMode::Fixed)
        .expect_err("missing extent");
    assert!(matches!(
        err,
        PlotError::MissingOriginExtent { axis: Axis::Domain }
    ));
    assert_eq!(plot.handle().constraints().domain.model, FramingModel::Edge);
}

#[test]
fn non_finite_origin_is_rejected() {
    let plot = plot();
    let err = plot
        .handle()
        .center_on_domain_origin(f64::NAN, None, BoundaryMode::Auto)
        .expect_err("nan origin");
    assert!(matches!(err, PlotError::MissingOrigin { axis: Axis::Domain }));
    assert!(plot.handle().set_user_range_origin(f64::INFINITY).is_err());
}

#[test]
fn range_origin_supports_only_auto() {
    let plot = plot();
    for mode in [BoundaryMode::Fixed, BoundaryMode::Grow, BoundaryMode::Shrink] {
        let err = plot
            .handle()
            .center_on_range_origin(0.0, Some(1.0), mode)
            .expect_err("unsupported");
        assert!(matches!(
            err,
            PlotError::UnsupportedFraming {
                axis: Axis::Range,
                model: FramingModel::Origin,
                ..
            }
        ));
    }
    assert_eq!(plot.handle().constraints().range.model, FramingModel::Edge);

    replace_series(&plot, xy(&[0.0, 1.0], &[-3.0, 10.0]));
    plot.handle()
        .center_on_range_origin(0.0, None, BoundaryMode::Auto)
        .expect("auto range origin");
    let bounds = plot.calculate_min_max().expect("bounds");
    assert_eq!((bounds.min_y, bounds.max_y), (-10.0, 10.0));
    assert_eq!(bounds.range_origin, 0.0);
}

#[test]
fn missing_origin_fails_the_frame_and_keeps_bounds() {
    let plot = plot();
    replace_series(&plot, xy(&[0.0, 4.0], &[1.0, 2.0]));
    let first = plot.calculate_min_max().expect("first frame");

    let mut constraints = plot.handle().constraints();
    constraints.range.model = FramingModel::Origin;
    constraints.range.origin = None;
    plot.handle().set_constraints(constraints);

    let err = plot.calculate_min_max().expect_err("missing origin");
    assert!(matches!(err, PlotError::MissingOrigin { axis: Axis::Range }));
    assert_eq!(plot.handle().calculated_bounds(), first);
}

#[test]
fn origin_framing_resets_edges_and_edge_setters_restore_edge_model() {
    let plot = plot();
    let handle = plot.handle();
    handle.set_domain_boundaries(1.0, 2.0, BoundaryMode::Fixed).expect("boundaries");
    handle
        .center_on_domain_origin(0.0, None, BoundaryMode::Auto)
        .expect("center");

    let domain = handle.constraints().domain;
    assert_eq!(domain.model, FramingModel::Origin);
    assert_eq!(domain.lower, EdgeConstraint::Unset);
    assert_eq!(domain.upper, EdgeConstraint::Unset);

    handle.set_domain_upper_boundary(4.0, BoundaryMode::Fixed).expect("boundaries");
    let domain = handle.constraints().domain;
    assert_eq!(domain.model, FramingModel::Edge);
    assert_eq!(domain.upper, EdgeConstraint::Fixed(4.0));
}

#[test]
fn user_origin_overrides_reported_origin_only() {
    let plot = plot();
    replace_series(&plot, xy(&[1.0, 4.0], &[2.0, 6.0]));
    plot.handle().set_user_range_origin(0.0).expect("origin");
    plot.handle().set_user_domain_origin(3.0).expect("origin");

    let bounds = plot.calculate_min_max().expect("bounds");
    assert_eq!((bounds.min_y, bounds.max_y), (2.0, 6.0));
    assert_eq!(bounds.range_origin, 0.0);
    assert_eq!(bounds.domain_origin, 3.0);
}

#[test]
fn range_edges_fall_back_to_defaults_without_series() {
    let plot = plot();
    plot.handle()
        .set_range_boundaries(0.0, 0.0, BoundaryMode::Grow)
        .expect("boundaries");
    replace_series(&plot, xy(&[0.0, 1.0], &[0.0, 50.0]));
    let first = plot.calculate_min_max().expect("first frame");
    assert_eq!((first.min_y, first.max_y), (0.0, 50.0));

    plot.handle().clear_series();
    let bounds = plot.calculate_min_max().expect("empty frame");
    assert_eq!((bounds.min_y, bounds.max_y), (-1.0, 1.0));
}

#[test]
fn nan_samples_are_skipped_per_axis() {
    let plot = plot();
    replace_series(
        &plot,
        xy(&[0.0, f64::NAN, 3.0, 4.0], &[2.0, 9.0, f64::NAN, 5.0]),
    );

    let bounds = plot.calculate_min_max().expect("bounds");
    assert_eq!((bounds.min_x, bounds.max_x), (0.0, 4.0));
    assert_eq!((bounds.min_y, bounds.max_y), (2.0, 9.0));
}
