use cplx64::Complex64;
use float_cmp::approx_eq;
use num_complex::Complex;

const GRID: [f32; 12] = [
    0.0,
    -0.0,
    1.0,
    -1.0,
    0.5,
    -3.0,
    1e-45,
    1.17549435e-38,
    3.4028235e38,
    f32::INFINITY,
    f32::NEG_INFINITY,
    f32::NAN,
];

fn grid() -> impl Iterator<Item = (Complex64, Complex64)> {
    GRID.iter().flat_map(|&r1| {
        GRID.iter().flat_map(move |&i1| {
            GRID.iter().flat_map(move |&r2| {
                GRID.iter()
                    .map(move |&i2| (Complex64::new(r1, i1), Complex64::new(r2, i2)))
            })
        })
    })
}

fn same_lane(want: f32, have: f32) -> bool {
    want.to_bits() == have.to_bits() || (want.is_nan() && have.is_nan())
}

fn same(want: Complex64, have: Complex64) -> bool {
    same_lane(want.real(), have.real()) && same_lane(want.imag(), have.imag())
}

fn both_nan(z: Complex64) -> bool {
    z.real().is_nan() && z.imag().is_nan()
}

#[test]
fn test_add_sub_match_lane_arithmetic() {
    for (x, y) in grid() {
        let want = Complex64::new(x.real() + y.real(), x.imag() + y.imag());
        assert!(same(want, x + y), "`{x} + {y}`: want {want}, have {}", x + y);

        let want = Complex64::new(x.real() - y.real(), x.imag() - y.imag());
        assert!(same(want, x - y), "`{x} - {y}`: want {want}, have {}", x - y);
    }
}

#[test]
fn test_mul_matches_wide_product() {
    for (x, y) in grid() {
        let wide = Complex::new(f64::from(x.real()), f64::from(x.imag()))
            * Complex::new(f64::from(y.real()), f64::from(y.imag()));
        let want = Complex64::new(wide.re as f32, wide.im as f32);
        let have = x * y;
        assert!(same(want, have), "`{x} * {y}`: want {want}, have {have}");
    }
}

#[test]
fn test_add_mul_commute() {
    for (x, y) in grid().filter(|(x, y)| !x.is_nan() && !y.is_nan()) {
        assert!(same(x + y, y + x), "`{x} + {y}`");
        assert!(same(x * y, y * x), "`{x} * {y}`");
    }
}

#[test]
fn test_eq_neq_follow_lanes() {
    for (x, y) in grid() {
        let want = x.real() == y.real() && x.imag() == y.imag();
        assert_eq!(x.eq(y), want, "`{x} == {y}`");
        assert_eq!(x.neq(y), !want, "`{x} != {y}`");
        assert_eq!(x == y, want, "`{x} == {y}`");
    }
}

#[test]
fn test_is_zero_follows_lanes() {
    for (x, _) in grid().step_by(GRID.len() * GRID.len()) {
        let want = x.real() == 0.0 && x.imag() == 0.0;
        assert_eq!(x.is_zero(), want, "`{x}`");
    }
}

#[test]
fn test_div_matches_textbook_formula_on_plain_values() {
    let values = [1.0f32, -1.0, 0.5, 2.0, 3.0, -0.25];
    for &r1 in &values {
        for &i1 in &values {
            for &r2 in &values {
                for &i2 in &values {
                    let x = Complex64::new(r1, i1);
                    let y = Complex64::new(r2, i2);
                    let naive = Complex::new(f64::from(r1), f64::from(i1))
                        / Complex::new(f64::from(r2), f64::from(i2));
                    let q = x / y;
                    assert!(
                        approx_eq!(f32, q.real(), naive.re as f32, epsilon = 1e-6, ulps = 4),
                        "`{x} / {y}`: have {q}"
                    );
                    assert!(
                        approx_eq!(f32, q.imag(), naive.im as f32, epsilon = 1e-6, ulps = 4),
                        "`{x} / {y}`: have {q}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_div_by_zero_is_signed_infinity() {
    for (x, y) in grid().filter(|(_, y)| y.is_zero()) {
        let q = x / y;
        let sign = if y.real().is_sign_negative() { -1.0 } else { 1.0 };
        for (part, have) in [(x.real(), q.real()), (x.imag(), q.imag())] {
            if part.is_nan() || part == 0.0 {
                assert!(have.is_nan(), "`{x} / {y}`: have {q}");
            } else {
                let want = sign * part.signum() * f32::INFINITY;
                assert_eq!(have, want, "`{x} / {y}`: have {q}");
            }
        }
    }
}

#[test]
fn test_div_infinite_dividend_is_not_indeterminate() {
    for (x, y) in grid().filter(|(x, y)| x.is_infinite() && y.is_finite() && !y.is_zero()) {
        let q = x / y;
        assert!(!both_nan(q), "`{x} / {y}`: have {q}");
        assert!(q.is_infinite(), "`{x} / {y}`: have {q}");
    }
}

#[test]
fn test_div_infinite_divisor_is_zero() {
    for (x, y) in grid().filter(|(x, y)| x.is_finite() && y.is_infinite() && !y.is_nan()) {
        let q = x / y;
        assert!(q.is_zero(), "`{x} / {y}`: have {q}");
    }
}

#[test]
fn test_div_identity() {
    for &v in &[1.0f32, -1.0, 0.5, -3.0, 1e-45, 1.17549435e-38, 3.4028235e38] {
        for a in [Complex64::new(v, 0.0), Complex64::new(0.0, v), Complex64::new(v, v)] {
            assert_eq!(a / a, Complex64::ONE, "`{a} / {a}`");
        }
    }
}
