//! Performance benchmarks for the steady solver
//!
//! # What We're Measuring
//!
//! 1. **Thomas sweep** alone: one forward elimination and one back
//!    substitution, O(N) in the number of nodes.
//! 2. **Full pipeline** per scheme: coefficients, sweep, analytical reference
//!    on the 50·N sub-grid and the error metric. The reference evaluation
//!    dominates, so the three schemes should cost about the same.
//! 3. **Parameter sweep**: many independent solves, sequential or split
//!    across rayon workers with the `parallel` feature.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --bench solver_performance
//!
//! # Only the Thomas sweep
//! cargo bench --bench solver_performance "Thomas"
//!
//! # Sweep with the rayon path enabled
//! cargo bench --bench solver_performance --features parallel sweep
//! ```
//!
//! # Expected Results
//!
//! Time should scale linearly with N for both the sweep and the pipeline:
//!
//! ```text
//! N=10:     baseline
//! N=100:    ~10× baseline
//! N=1000:   ~100× baseline
//! ```
//!
//! A super-linear jump usually means an allocation crept into the inner loop.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use convdiff_rs::physics::DomainParameters;
use convdiff_rs::schemes::{Scheme, SchemeInputs};
use convdiff_rs::solver::{tdma, ParameterSweep, Scenario, Solver, SteadyStateSolver};

const SIZES: [usize; 4] = [10, 100, 1_000, 10_000];

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Thomas sweep alone on the UDS coefficients of the default problem
fn benchmark_thomas_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("Thomas Sweep");

    for nodes in SIZES {
        let params = DomainParameters::default().gridpoints(nodes);
        let dx = params.length / nodes as f64;
        let coefficients = Scheme::Uds.coefficients(&SchemeInputs::new(params.gamma, dx, params.density, params.velocity));

        group.throughput(Throughput::Elements(nodes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(nodes), &nodes, |b, &nodes| {
            b.iter(|| {
                tdma::solve(
                    black_box(&coefficients),
                    black_box(params.inlet_bc),
                    black_box(params.outlet_bc),
                    nodes,
                )
                .unwrap()
            });
        });
    }

    group.finish();
}

/// Full solve for every scheme across grid sizes
fn benchmark_scheme_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Steady Solve");
    let solver = SteadyStateSolver::new();

    for scheme in Scheme::ALL {
        for nodes in &SIZES[..3] {
            // Setup (not measured)
            let params = DomainParameters::default().velocity(2.0).gridpoints(*nodes);
            let scenario = Scenario::new(params, scheme).unwrap();

            group.throughput(Throughput::Elements(*nodes as u64));
            group.bench_with_input(BenchmarkId::new(scheme.acronym(), nodes), &scenario, |b, scenario| {
                b.iter(|| solver.solve(black_box(scenario)).unwrap());
            });
        }
    }

    group.finish();
}

/// Scheme × velocity × gridpoints sweep, the workload of `convdiff sweep`
fn benchmark_parameter_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parameter Sweep");
    group.sample_size(20);

    let sweep = ParameterSweep::new(DomainParameters::default())
        .schemes(&Scheme::ALL)
        .velocities(&[-2.0, 1.0, 2.0, 50.0])
        .gridpoints(&[5, 10, 20, 50, 100, 500]);

    group.throughput(Throughput::Elements(sweep.len() as u64));
    group.bench_function(format!("{} points", sweep.len()), |b| {
        b.iter(|| black_box(&sweep).run());
    });

    group.finish();
}

// =================================================================================================
// Criterion Configuration
// =================================================================================================

criterion_group!(
    benches,
    benchmark_thomas_sweep,
    benchmark_scheme_comparison,
    benchmark_parameter_sweep,
);

criterion_main!(benches);
