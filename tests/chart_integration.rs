//! ChartController bounds under long gesture sequences.

use cryptoboard_sdk::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_gesture(rng: &mut StdRng) -> Gesture {
    let anchor = Anchor::new(rng.gen_range(-0.5..1.5), rng.gen_range(-0.5..1.5));
    match rng.gen_range(0..5) {
        0 => Gesture::Wheel {
            delta_y: rng.gen_range(-2_000.0..2_000.0),
            anchor,
        },
        1 => Gesture::Pinch {
            ratio: rng.gen_range(-1.0..6.0),
            anchor,
        },
        2 => Gesture::Drag {
            dx: rng.gen_range(-3.0..3.0),
            dy: rng.gen_range(-3.0..3.0),
        },
        3 => Gesture::Pinch {
            ratio: f64::NAN,
            anchor,
        },
        _ => Gesture::End,
    }
}

fn assert_in_bounds(t: ZoomTransform, limits: &ChartLimits) {
    assert!(t.scale_x >= 1.0 && t.scale_x <= limits.max_scale, "{t:?}");
    assert!(t.scale_y >= 1.0 && t.scale_y <= limits.max_scale, "{t:?}");
    let (x0, x1) = t.window_x();
    let (y0, y1) = t.window_y();
    let eps = 1e-9;
    assert!(x0 >= -eps && x1 <= 1.0 + eps, "{t:?}");
    assert!(y0 >= -eps && y1 <= 1.0 + eps, "{t:?}");
}

#[test]
fn random_gestures_stay_in_bounds() {
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut chart = ChartController::new();
        for _ in 0..200 {
            let t = chart.on_gesture(random_gesture(&mut rng));
            assert_in_bounds(t, chart.limits());
        }
        chart.reset();
        assert_eq!(chart.current_transform(), ZoomTransform::IDENTITY);
        assert_eq!(chart.phase(), ChartPhase::Idle);
    }
}

#[test]
fn custom_limits_are_respected() {
    let limits = ChartLimits {
        max_scale: 4.0,
        zoom_y: false,
        ..ChartLimits::default()
    };
    let mut rng = StdRng::seed_from_u64(7);
    let mut chart = ChartController::with_limits(limits);
    for _ in 0..500 {
        let t = chart.on_gesture(random_gesture(&mut rng));
        assert_in_bounds(t, &limits);
        assert_eq!(t.scale_y, 1.0);
        assert_eq!(t.pan_y, 0.0);
    }
}

#[test]
fn zoom_then_pan_shows_the_latest_data() {
    let history = HistorySeries::new(
        AssetId::from("bitcoin"),
        (0..=10)
            .map(|i| HistoryPoint {
                timestamp_ms: i * 60_000,
                price: rust_decimal::Decimal::from(100 + i),
            })
            .collect(),
    );
    let series = ChartSeries::from(&history);

    let mut chart = ChartController::new();
    chart.load_series(&history);
    chart.on_gesture(Gesture::Pinch {
        ratio: 2.0,
        anchor: Anchor::new(0.0, 0.5),
    });
    chart.on_gesture(Gesture::Drag { dx: -5.0, dy: 0.0 });
    chart.on_gesture(Gesture::End);

    assert_eq!(chart.visible_window(&series), Some((300_000, 600_000)));
    assert_eq!(chart.cursor_at(&series, 1.0, 0.01), CursorShape::Pointer);
}
