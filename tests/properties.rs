use std::f64::consts::PI;
use contvar::math::{
    approx::approx_equals,
    probability::Continuous,
    range::Relation,
};

fn std_normal(x: f64) -> f64 {
    return (-x.powi(2) / 2.0).exp() / (2.0 * PI).sqrt();
}

fn grid(min: f64, max: f64, n: usize) -> Vec<f64> {
    return (0..=n)
        .map(|k| min + (max - min) * k as f64 / n as f64)
        .collect();
}

#[test]
fn full_support_integrates_to_one() {
    let uniform = Continuous::new(0.0, 1.0, |_| 1.0);
    assert!(approx_equals(uniform.distribution(Relation::LessThan(1.0)), 1.0));

    let normal = Continuous::new(-5.0, 5.0, std_normal);
    assert!(approx_equals(normal.distribution(Relation::LessThan(5.0)), 1.0));

    // exponential truncated to [0, 5): the left-endpoint bias of a
    // decreasing density needs a finer step to land within tolerance
    let norm: f64 = 1.0 - (-5.0_f64).exp();
    let exponential
        = Continuous::with_step(0.0, 5.0, 0.0005, move |x| (-x).exp() / norm);
    assert!(approx_equals(exponential.total_probability(), 1.0));
}

#[test]
fn point_probability_exactly_zero() {
    let normal = Continuous::new(-5.0, 5.0, std_normal);
    for x in grid(-6.0, 6.0, 24) {
        assert_eq!(normal.probability_of(x), 0.0);
    }
}

#[test]
fn monotone_in_upper_limit() {
    let normal = Continuous::new(-5.0, 5.0, std_normal);
    let cdf: Vec<f64>
        = grid(-6.0, 6.0, 48).into_iter()
        .map(|x| normal.distribution(Relation::LessThan(x)))
        .collect();
    assert!(cdf.windows(2).all(|w| w[1] >= w[0]));

    let triangle = Continuous::new(0.0, 1.0, |x| 2.0 * x);
    let cdf: Vec<f64>
        = grid(0.0, 1.0, 20).into_iter()
        .map(|x| triangle.cdf(x))
        .collect();
    assert!(cdf.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn less_than_matches_between_from_min() {
    let normal = Continuous::new(-5.0, 5.0, std_normal);
    for c in grid(-4.5, 4.5, 18) {
        let lt: f64 = normal.distribution(Relation::LessThan(c));
        let btw: f64 = normal.distribution(Relation::Between(-5.0, c));
        assert!(approx_equals(lt, btw));
    }
}

#[test]
fn complementary_relations() {
    let uniform = Continuous::new(0.0, 1.0, |_| 1.0);
    for c in grid(0.1, 0.9, 8) {
        let lo: f64 = uniform.distribution(..c);
        let hi: f64 = uniform.distribution(c..);
        // the sample at c may be counted on both sides
        assert!((lo + hi - 1.0).abs() < 0.011 + 1e-9);
    }
}

#[test]
fn inverted_range_is_zero() {
    let wide = Continuous::new(0.0, 10.0, |_| 0.1);
    assert_eq!(wide.distribution(Relation::Between(5.0, 3.0)), 0.0);
    assert_eq!(wide.distribution(5.0..3.0), 0.0);
}

#[test]
fn outside_support_is_zero() {
    // a coarse step makes a stray edge sample worth a full 0.25
    let uniform = Continuous::with_step(0.0, 1.0, 0.25, |_| 1.0);
    let (min, max) = (uniform.min(), uniform.max());
    assert_eq!(uniform.distribution(..min - 1.0), 0.0);
    assert_eq!(uniform.distribution(..min), 0.0);
    assert_eq!(uniform.distribution(max + 1.0..), 0.0);
    assert_eq!(uniform.distribution(max..), 0.0);
    assert_eq!(
        uniform.distribution(Relation::Between(max + 1.0, max + 2.0)),
        0.0,
    );
    assert_eq!(
        uniform.distribution(Relation::Between(min - 2.0, min - 1.0)),
        0.0,
    );

    let normal = Continuous::new(-5.0, 5.0, std_normal);
    assert_eq!(normal.cdf(-6.0), 0.0);
    assert_eq!(normal.distribution(6.0..), 0.0);
}

#[test]
fn uniform_scenario() {
    let uniform = Continuous::new(0.0, 1.0, |_| 1.0);
    assert!((uniform.distribution(Relation::LessThan(0.5)) - 0.5).abs() < 0.01);
    assert!((uniform.expected(|x| x) - 0.5).abs() < 0.01);
    assert!((uniform.variance(|x| x) - 0.0825).abs() < 0.002);
    assert!((uniform.variance(|x| x) - 1.0 / 12.0).abs() < 0.001);
}

#[test]
fn approx_equals_threshold() {
    assert!(approx_equals(1.0, 1.0009));
    assert!(!approx_equals(1.0, 1.002));
}

#[test]
fn halving_step_converges() {
    // P(X < 1/2) = 1/4 for density 2x on [0, 1)
    let exact: f64 = 0.25;
    let errors: Vec<f64>
        = [0.01, 0.005, 0.0025].into_iter()
        .map(|step| {
            Continuous::with_step(0.0, 1.0, step, |x| 2.0 * x)
                .distribution(Relation::LessThan(0.5))
        })
        .map(|p| (p - exact).abs())
        .collect();
    assert!(errors.windows(2).all(|w| w[1] < w[0]));
    assert!(errors[2] < 0.002);
}

#[test]
fn shared_across_threads() {
    let normal = Continuous::new(-5.0, 5.0, std_normal);
    let serial: Vec<f64>
        = grid(-2.0, 2.0, 4).into_iter()
        .map(|x| normal.cdf(x))
        .collect();
    let parallel: Vec<f64> = std::thread::scope(|s| {
        let handles: Vec<_>
            = grid(-2.0, 2.0, 4).into_iter()
            .map(|x| {
                let normal = &normal;
                s.spawn(move || normal.cdf(x))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(serial, parallel);
}
