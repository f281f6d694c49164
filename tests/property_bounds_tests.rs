use proptest::prelude::*;
use xyplot::core::{BoundaryMode, SimpleXySeries, Viewport};
use xyplot::render::{LineAndPointFormatter, NullRenderer};
use xyplot::{PlotConfig, XyPlot};

fn plot() -> XyPlot<NullRenderer> {
    XyPlot::new(NullRenderer::default(), PlotConfig::new(Viewport::new(640, 480)))
        .expect("plot init")
}

fn show(plot: &XyPlot<NullRenderer>, xs: &[f64], ys: &[f64]) {
    plot.handle().clear_series();
    plot.handle().add_series(
        SimpleXySeries::from_xy(xs, ys).into_shared(),
        LineAndPointFormatter::default(),
    );
}

fn extremes(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

proptest! {
    #[test]
    fn auto_bounds_equal_true_extremes(
        ys in prop::collection::vec(-1_000_000.0f64..1_000_000.0, 1..64)
    ) {
        let plot = plot();
        plot.handle().add_series(
            SimpleXySeries::from_y_values(&ys).into_shared(),
            LineAndPointFormatter::default(),
        );

        let bounds = plot.calculate_min_max().expect("bounds");
        let (min_y, max_y) = extremes(&ys);
        prop_assert_eq!(bounds.min_y, min_y);
        prop_assert_eq!(bounds.max_y, max_y);
        prop_assert_eq!(bounds.min_x, 0.0);
        prop_assert_eq!(bounds.max_x, (ys.len() - 1) as f64);
    }

    #[test]
    fn grow_bounds_are_monotonic(
        frames in prop::collection::vec(
            prop::collection::vec(-10_000.0f64..10_000.0, 1..16),
            2..8
        )
    ) {
        let plot = plot();
        plot.handle().set_domain_boundaries(0.0, 0.0, BoundaryMode::Grow).expect("boundaries");
        plot.handle().set_range_boundaries(0.0, 0.0, BoundaryMode::Grow).expect("boundaries");

        let mut previous = None;
        for values in &frames {
            show(&plot, values, values);
            let bounds = plot.calculate_min_max().expect("bounds");
            if let Some((min_x, max_x, min_y, max_y)) = previous {
                prop_assert!(bounds.min_x <= min_x);
                prop_assert!(bounds.max_x >= max_x);
                prop_assert!(bounds.min_y <= min_y);
                prop_assert!(bounds.max_y >= max_y);
            }
            previous = Some((bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y));
        }
    }

    #[test]
    fn shrink_bounds_are_monotonic(
        frames in prop::collection::vec(
            prop::collection::vec(-10_000.0f64..10_000.0, 1..16),
            2..8
        )
    ) {
        let plot = plot();
        plot.handle().set_domain_boundaries(0.0, 0.0, BoundaryMode::Shrink).expect("boundaries");

        let mut previous: Option<(f64, f64)> = None;
        for values in &frames {
            show(&plot, values, values);
            let bounds = plot.calculate_min_max().expect("bounds");
            if let Some((min_x, max_x)) = previous {
                prop_assert!(bounds.min_x >= min_x);
                prop_assert!(bounds.max_x <= max_x);
            }
            previous = Some((bounds.min_x, bounds.max_x));
        }
    }

    #[test]
    fn origin_auto_is_symmetric(
        origin in -1_000i32..1_000,
        xs in prop::collection::vec(-100_000i32..100_000, 1..32)
    ) {
        let plot = plot();
        let xs: Vec<f64> = xs.into_iter().map(f64::from).collect();
        let ys = vec![0.0; xs.len()];
        show(&plot, &xs, &ys);
        let origin = f64::from(origin);
        plot.handle()
            .center_on_domain_origin(origin, None, BoundaryMode::Auto)
            .expect("center");

        let bounds = plot.calculate_min_max().expect("bounds");
        let (min_x, max_x) = extremes(&xs);
        prop_assert_eq!(bounds.max_x - origin, origin - bounds.min_x);
        prop_assert!(bounds.min_x <= min_x);
        prop_assert!(bounds.max_x >= max_x);
    }

    #[test]
    fn clamps_always_hold(
        xs in prop::collection::vec(-10_000.0f64..10_000.0, 1..32),
        left_min in -5_000.0f64..0.0,
        right_max in 0.0f64..5_000.0
    ) {
        let plot = plot();
        let ys = vec![1.0; xs.len()];
        show(&plot, &xs, &ys);
        plot.handle().set_domain_left_min(Some(left_min)).expect("clamp");
        plot.handle().set_domain_right_max(Some(right_max)).expect("clamp");

        let bounds = plot.calculate_min_max().expect("bounds");
        prop_assert!(bounds.min_x >= left_min);
        prop_assert!(bounds.max_x <= right_max);
    }
}
