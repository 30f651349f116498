//! Properties every scheme must satisfy on the steady problem
//!
//! Boundary exactness, pure-diffusion agreement, coefficient balance,
//! boundedness of UDS/PLDS, CDS oscillation at high Péclet numbers and
//! first-order convergence of the error metric.

use approx::assert_relative_eq;

use convdiff_rs::physics::DomainParameters;
use convdiff_rs::schemes::{Scheme, SchemeInputs};

mod common;
use common::{is_non_increasing, is_within, relative_error, solve, textbook_parameters};

#[test]
fn test_boundary_values_are_exact() {
    for scheme in Scheme::ALL {
        for velocity in [-50.0, -2.0, 0.0, 1.0, 2.0, 50.0] {
            for gridpoints in [2, 3, 5, 37] {
                let params = textbook_parameters().velocity(velocity).gridpoints(gridpoints);
                let record = solve(params, scheme);

                assert_eq!(record.numerical_phi[0], 100.0, "{scheme} u={velocity} N={gridpoints}");
                assert_eq!(record.numerical_phi[gridpoints - 1], 20.0, "{scheme} u={velocity} N={gridpoints}");
            }
        }
    }
}

#[test]
fn test_extreme_velocities_stay_finite() {
    for scheme in Scheme::ALL {
        for velocity in [-1e4, -7.3, 0.0, 1e-14, 3.1, 1e4] {
            for gridpoints in [2, 3, 11, 500] {
                let record = solve(textbook_parameters().velocity(velocity).gridpoints(gridpoints), scheme);
                let label = format!("{scheme} u={velocity} N={gridpoints}");

                assert_eq!(record.numerical_phi[0], 100.0, "{label}");
                assert_eq!(record.numerical_phi[gridpoints - 1], 20.0, "{label}");
                assert!(record.numerical_phi.iter().all(|v| v.is_finite()), "{label}");
                assert!(record.error.is_finite(), "{label}: error = {}", record.error);
            }
        }
    }
}

#[test]
fn test_two_nodes_give_the_boundaries() {
    for scheme in Scheme::ALL {
        let record = solve(textbook_parameters().gridpoints(2), scheme);
        assert_eq!(record.numerical_phi.as_slice(), &[100.0, 20.0]);
    }
}

#[test]
fn test_pure_diffusion_is_linear_and_scheme_independent() {
    let params = textbook_parameters().velocity(0.0).gridpoints(7);
    let reference = solve(params, Scheme::Cds);

    for scheme in Scheme::ALL {
        let record = solve(params, scheme);
        assert_eq!(record.coefficients, reference.coefficients, "{scheme}");

        for (i, phi) in record.numerical_phi.iter().enumerate() {
            let linear = 100.0 - 80.0 * i as f64 / 6.0;
            assert!(relative_error(*phi, linear) < 1e-9, "{scheme} node {i}: {phi} vs {linear}");
        }
    }
}

#[test]
fn test_central_weight_balances_neighbours() {
    for scheme in Scheme::ALL {
        for velocity in [-30.0, -1.0, 0.0, 0.7, 4.0, 120.0] {
            let set = scheme.coefficients(&SchemeInputs::new(0.5, 0.05, 0.5, velocity));
            assert_relative_eq!(set.a, set.b + set.c, max_relative = 1e-12);
        }
    }
}

#[test]
fn test_textbook_profiles() {
    let expected = [
        (Scheme::Cds, [100.0, 90.153846153846, 75.384615384615, 53.230769230769, 20.0]),
        (Scheme::Uds, [100.0, 88.738738738739, 72.972972972973, 50.900900900901, 20.0]),
        (Scheme::Plds, [100.0, 90.030096525020, 75.169225518591, 53.018009348449, 20.0]),
    ];

    for (scheme, values) in expected {
        let record = solve(textbook_parameters(), scheme);
        assert_relative_eq!(record.local_peclet, 0.4, epsilon = 1e-12);

        for (actual, expected) in record.numerical_phi.iter().zip(values) {
            assert_relative_eq!(*actual, expected, max_relative = 1e-10);
        }
    }
}

#[test]
fn test_upwind_and_power_law_stay_monotone() {
    for scheme in [Scheme::Uds, Scheme::Plds] {
        for velocity in [2.0, 50.0] {
            let record = solve(textbook_parameters().velocity(velocity), scheme);
            let phi = record.numerical_phi.as_slice();

            assert!(is_non_increasing(phi), "{scheme} u={velocity}: {phi:?}");
            assert!(is_within(phi, 20.0, 100.0), "{scheme} u={velocity}: {phi:?}");
            assert!(record.is_bounded());
        }
    }
}

#[test]
fn test_central_oscillates_at_high_peclet() {
    // Local Pe = 10
    let record = solve(textbook_parameters().velocity(50.0), Scheme::Cds);
    let phi = record.numerical_phi.as_slice();

    assert_relative_eq!(record.local_peclet, 10.0, epsilon = 1e-12);
    assert!(!is_non_increasing(phi));
    assert!(phi.iter().any(|v| *v > 100.0), "{phi:?}");
    assert!(!record.is_bounded());
}

#[test]
fn test_power_law_fully_upwinded_beyond_cutoff() {
    let record = solve(textbook_parameters().velocity(50.0), Scheme::Plds);
    assert_eq!(record.coefficients.b, 0.0);

    for phi in &record.numerical_phi.as_slice()[..4] {
        assert_relative_eq!(*phi, 100.0, epsilon = 1e-12);
    }
}

#[test]
fn test_negative_velocity_mirrors_the_flow() {
    let record = solve(textbook_parameters().velocity(-2.0), Scheme::Cds);
    let expected = [100.0, 66.769230769231, 44.615384615385, 29.846153846154, 20.0];

    for (actual, expected) in record.numerical_phi.iter().zip(expected) {
        assert_relative_eq!(*actual, expected, max_relative = 1e-10);
    }
    assert!(record.global_peclet < 0.0);
}

#[test]
fn test_repeated_runs_are_bit_identical() {
    for scheme in Scheme::ALL {
        let first = solve(textbook_parameters(), scheme);
        let second = solve(textbook_parameters(), scheme);

        assert_eq!(first.numerical_phi, second.numerical_phi);
        assert_eq!(first.analytical_phi, second.analytical_phi);
        assert_eq!(first.error.to_bits(), second.error.to_bits());
    }
}

#[test]
fn test_error_decreases_as_one_over_n() {
    for scheme in Scheme::ALL {
        for velocity in [1.0, 2.0] {
            let error = |n: usize| solve(DomainParameters::default().velocity(velocity).gridpoints(n), scheme).error;

            let coarse = error(50);
            let medium = error(100);
            let fine = error(500);

            assert!(fine.abs() < 0.5, "{scheme} u={velocity}: error(500) = {fine}");

            // Halving dx halves the error
            let ratio = coarse / medium;
            assert!(ratio > 1.8 && ratio < 2.2, "{scheme} u={velocity}: ratio {ratio}");

            let ratio = coarse / fine;
            assert!(ratio > 8.0 && ratio < 12.0, "{scheme} u={velocity}: ratio {ratio}");
        }
    }
}

#[test]
fn test_textbook_error_value() {
    let record = solve(textbook_parameters(), Scheme::Cds);
    assert_relative_eq!(record.error, -20.05, epsilon = 0.01);
}
