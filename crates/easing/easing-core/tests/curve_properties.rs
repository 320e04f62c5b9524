use easing_core::{Direction, Easing, Family};

fn approx(a: f64, b: f64, eps: f64) {
    assert!(
        (a - b).abs() <= eps,
        "approx failed: left={a} right={b} eps={eps}"
    );
}

const EPS: f64 = 1e-9;

// (start, change, duration) triples; negative change and non-unit durations included.
const SHAPES: [(f64, f64, f64); 4] = [
    (0.0, 1.0, 1.0),
    (1.0, 9.0, 9.0),
    (-3.5, 12.0, 0.25),
    (100.0, -40.0, 7.0),
];

/// it should start at the start value, except the exponential ease-in curves
#[test]
fn starts_at_start_value() {
    for easing in Easing::ALL {
        for (s, c, d) in SHAPES {
            let got = easing.apply(0.0, s, c, d);
            let want = match easing {
                Easing::EaseInExponential => s + c * 2f64.powi(-10),
                Easing::EaseInOutExponential => s + c / 2.0 * 2f64.powi(-10),
                _ => s,
            };
            approx(got, want, EPS);
        }
    }
}

/// it should end at start + change, except the exponential ease-out curves
#[test]
fn ends_at_end_value() {
    for easing in Easing::ALL {
        for (s, c, d) in SHAPES {
            let got = easing.apply(d, s, c, d);
            let want = match easing {
                Easing::EaseOutExponential => s + c * (1.0 - 2f64.powi(-10)),
                Easing::EaseInOutExponential => s + c / 2.0 * (2.0 - 2f64.powi(-10)),
                _ => s + c,
            };
            approx(got, want, EPS);
        }
    }
}

/// exponential offsets are exact, not approximately zero
#[test]
fn exponential_offsets_are_preserved() {
    let c = 1024.0;
    assert_eq!(easing_core::ease_in_exponential(0.0, 0.0, c, 1.0), 1.0);
    assert_eq!(easing_core::ease_out_exponential(1.0, 0.0, c, 1.0), c - 1.0);
    assert_eq!(easing_core::ease_in_out_exponential(0.0, 0.0, c, 1.0), 0.5);
    assert_eq!(easing_core::ease_in_out_exponential(1.0, 0.0, c, 1.0), c - 0.5);
}

#[test]
fn in_out_midpoint_is_half_change() {
    for easing in Easing::ALL
        .into_iter()
        .filter(|e| e.direction() == Some(Direction::InOut))
    {
        for (s, c, d) in SHAPES {
            approx(easing.apply(d / 2.0, s, c, d), s + c / 2.0, EPS);
        }
    }
}

#[test]
fn monotonic_over_duration() {
    const STEPS: usize = 200;
    for easing in Easing::ALL {
        for (s, c, d) in SHAPES {
            let sign = c.signum();
            let mut prev = easing.apply(0.0, s, c, d);
            for i in 1..=STEPS {
                let t = d * i as f64 / STEPS as f64;
                let v = easing.apply(t, s, c, d);
                assert!(
                    (v - prev) * sign >= -1e-12,
                    "{easing} not monotonic at t={t}: {prev} -> {v}"
                );
                prev = v;
            }
        }
    }
}

/// it should pick the second phase once the normalized time reaches 1
#[test]
fn in_out_second_phase_starts_at_half_duration() {
    assert_eq!(easing_core::ease_in_out_quad(1.0, 0.0, 8.0, 2.0), 4.0);
    assert_eq!(easing_core::ease_in_out_quad(1.5, 0.0, 8.0, 2.0), 7.0);
    assert_eq!(easing_core::ease_in_out_exponential(1.0, 0.0, 1024.0, 2.0), 512.0);
}

/// zero duration at time zero divides 0 by 0 in every curve
#[test]
fn zero_duration_is_not_guarded() {
    for easing in Easing::ALL {
        let v = easing.apply(0.0, 1.0, 2.0, 0.0);
        assert!(v.is_nan(), "{easing} returned {v} for zero duration");
    }
    assert!(easing_core::linear(0.5, 1.0, 2.0, 0.0).is_infinite());
}

#[test]
fn time_is_not_clamped() {
    approx(easing_core::linear(3.0, 0.0, 1.0, 1.0), 3.0, EPS);
    approx(easing_core::ease_in_cubic(2.0, 0.0, 1.0, 1.0), 8.0, EPS);
    assert!(easing_core::ease_in_circular(1.5, 0.0, 1.0, 1.0).is_nan());
}

#[test]
fn repeated_calls_are_identical() {
    for easing in Easing::ALL {
        let a = easing.apply(0.37, -2.0, 5.5, 1.3);
        let b = easing.apply(0.37, -2.0, 5.5, 1.3);
        assert_eq!(a.to_bits(), b.to_bits(), "{easing}");
    }
}

#[test]
fn callable_from_many_threads() {
    let expected: Vec<f64> = Easing::ALL
        .iter()
        .map(|e| e.apply(0.4, 1.0, 3.0, 2.0))
        .collect();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                Easing::ALL
                    .iter()
                    .map(|e| e.apply(0.4, 1.0, 3.0, 2.0))
                    .collect::<Vec<f64>>()
            })
        })
        .collect();
    for handle in handles {
        let got = handle.join().unwrap();
        assert_eq!(got, expected);
    }
}

#[test]
fn free_functions_match_catalog() {
    let table: [(Easing, easing_core::EasingFn); 4] = [
        (Easing::Linear, easing_core::linear),
        (Easing::EaseOutQuartic, easing_core::ease_out_quartic),
        (Easing::EaseInOutSinusoidal, easing_core::ease_in_out_sinusoidal),
        (Easing::EaseOutCircular, easing_core::ease_out_circular),
    ];
    for (easing, f) in table {
        assert_eq!(easing.apply(0.3, 2.0, 4.0, 1.0), f(0.3, 2.0, 4.0, 1.0));
    }
    assert_eq!(Easing::EaseInCubic.ease(0.5), 0.125);
    assert_eq!(Easing::EaseInCubic.family(), Family::Cubic);
}
