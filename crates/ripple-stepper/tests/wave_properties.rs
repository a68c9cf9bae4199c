//! Integration tests: physical and numerical properties of the stepper.
//!
//! Each test drives whole grids through several steps and checks a
//! property that must hold for every step: scenario values, symmetry,
//! wall behaviour, clamping, determinism.

use ripple_core::{BoundaryMode, Stencil};
use ripple_grid::topology::flat_index;
use ripple_grid::Grid;
use ripple_stepper::{advance, source_value, StepConfig};
use ripple_test_utils::{
    adversarial_grid, edge_values, exact_config, impulse_grid, interior_is_zero, max_asymmetry,
    peak, scenario_config, scenario_grid,
};

const STENCILS: [Stencil; 2] = [Stencil::VonNeumann, Stencil::Moore];

fn run(grid: &mut Grid, config: &StepConfig, steps: u64) {
    for t in 0..steps {
        advance(grid, config, t as f64);
    }
}

// ── Scenario ─────────────────────────────────────────────────────────

#[test]
fn five_by_five_scenario() {
    let config = scenario_config();
    let mut grid = scenario_grid();
    advance(&mut grid, &config, 0.0);

    let p = grid.pressure();
    assert!((p[flat_index(2, 2, 5)] - 9.8).abs() < 1e-5);
    assert!((p[flat_index(1, 2, 5)] - 0.05).abs() < 1e-6);
    assert!((p[flat_index(3, 2, 5)] - 0.05).abs() < 1e-6);
    assert!((p[flat_index(2, 1, 5)] - 0.05).abs() < 1e-6);
    assert!((p[flat_index(2, 3, 5)] - 0.05).abs() < 1e-6);
    // Diagonals are untouched by the von Neumann stencil.
    assert_eq!(p[flat_index(1, 1, 5)], 0.0);
    assert!(edge_values(p, 5, 5).iter().all(|&v| v == 0.0));
    assert!(grid.prev_pressure().iter().sum::<f32>() == 5.0);
}

// ── Stability & symmetry ─────────────────────────────────────────────

#[test]
fn zero_field_stays_zero() {
    for boundary in BoundaryMode::ALL {
        for stencil in STENCILS {
            let config = StepConfig::builder()
                .boundary(boundary)
                .stencil(stencil)
                .build()
                .unwrap();
            let mut grid = Grid::new(8, 6).unwrap();
            run(&mut grid, &config, 50);
            assert!(
                grid.pressure().iter().all(|&v| v == 0.0),
                "{boundary}/{stencil} grew from nothing"
            );
        }
    }
}

#[test]
fn centre_impulse_stays_symmetric() {
    for boundary in BoundaryMode::ALL {
        for stencil in STENCILS {
            let config = exact_config(boundary, stencil);
            let mut grid = impulse_grid(11, 11, 1.0);
            for t in 0..25 {
                advance(&mut grid, &config, t as f64);
                let asym = max_asymmetry(grid.pressure(), 11, 11);
                assert!(asym < 1e-5, "{boundary}/{stencil} step {t}: {asym}");
            }
        }
    }
}

#[test]
fn stable_config_stays_bounded() {
    let config = StepConfig::builder()
        .boundary(BoundaryMode::Periodic)
        .stencil(Stencil::VonNeumann)
        .damping(1.0)
        .clip_magnitude(None)
        .build()
        .unwrap();
    assert!(config.is_stable());
    // Start at rest so the periodic mean mode cannot drift.
    let mut field = vec![0.0; 256];
    field[flat_index(8, 8, 16)] = 1.0;
    let mut grid = Grid::from_fields(16, 16, field.clone(), field).unwrap();
    run(&mut grid, &config, 2000);
    assert!(peak(grid.pressure()) < 10.0);
}

#[test]
fn damping_drains_energy() {
    let config = StepConfig::builder()
        .boundary(BoundaryMode::Periodic)
        .damping(0.99)
        .build()
        .unwrap();
    let mut grid = impulse_grid(9, 9, 5.0);
    run(&mut grid, &config, 3000);
    assert!(peak(grid.pressure()) < 1e-3);
}

#[test]
fn coarser_spacing_slows_spread() {
    let fine = scenario_config();
    let coarse = fine.to_builder().spacing(2.0).build().unwrap();
    assert_eq!((coarse.dx(), coarse.dy()), (2.0, 2.0));
    assert!((coarse.max_stable_dt() - 2.0 * fine.max_stable_dt()).abs() < 1e-12);

    let mut a = scenario_grid();
    let mut b = scenario_grid();
    advance(&mut a, &fine, 0.0);
    advance(&mut b, &coarse, 0.0);
    // The Laplacian divides by dx·dy, so the neighbour kick drops fourfold.
    let n = flat_index(1, 2, 5);
    assert!((a.pressure()[n] - 0.05).abs() < 1e-6);
    assert!((b.pressure()[n] - 0.0125).abs() < 1e-6);
}

// ── Walls ────────────────────────────────────────────────────────────

#[test]
fn fixed_edges_stay_zero() {
    for stencil in STENCILS {
        let config = exact_config(BoundaryMode::Fixed, stencil);
        let mut grid = Grid::new(9, 7).unwrap();
        grid.apply_impulse(4, 3, 3.0);
        grid.apply_impulse(1, 1, -2.0);
        grid.add_source(1, 5);
        for t in 0..60 {
            advance(&mut grid, &config, t as f64);
            let edges = edge_values(grid.pressure(), 9, 7);
            assert!(edges.iter().all(|&v| v == 0.0), "{stencil} step {t}");
        }
    }
}

#[test]
fn reflective_edges_mirror_neighbours() {
    for stencil in STENCILS {
        let config = exact_config(BoundaryMode::Reflective, stencil);
        let (w, h) = (10u32, 8u32);
        let mut grid = Grid::new(w, h).unwrap();
        grid.apply_impulse(3, 2, 4.0);
        grid.add_source(7, 5);
        for t in 0..40 {
            advance(&mut grid, &config, t as f64);
            let p = grid.pressure();
            for x in 0..w {
                assert_eq!(p[flat_index(x, 0, w)], p[flat_index(x, 1, w)]);
                assert_eq!(p[flat_index(x, h - 1, w)], p[flat_index(x, h - 2, w)]);
            }
            for y in 0..h {
                assert_eq!(p[flat_index(0, y, w)], p[flat_index(1, y, w)]);
                assert_eq!(p[flat_index(w - 1, y, w)], p[flat_index(w - 2, y, w)]);
            }
        }
    }
}

#[test]
fn periodic_wave_crosses_the_seam() {
    let config = exact_config(BoundaryMode::Periodic, Stencil::VonNeumann);
    let mut grid = Grid::new(8, 8).unwrap();
    grid.apply_impulse(0, 0, 1.0);
    advance(&mut grid, &config, 0.0);
    let p = grid.pressure();
    // Left and top neighbours of (0,0) live on the far edges.
    assert!(p[flat_index(7, 0, 8)] > 0.0);
    assert!(p[flat_index(0, 7, 8)] > 0.0);
    assert_eq!(p[flat_index(7, 0, 8)], p[flat_index(1, 0, 8)]);
}

// ── Numerical safety ─────────────────────────────────────────────────

#[test]
fn adversarial_state_is_sanitised() {
    for boundary in BoundaryMode::ALL {
        for stencil in STENCILS {
            let config = StepConfig::builder()
                .boundary(boundary)
                .stencil(stencil)
                .clip_magnitude(Some(50.0))
                .build()
                .unwrap();
            let mut grid = adversarial_grid(7, 5);
            let stats = advance(&mut grid, &config, 0.0);
            assert!(!stats.is_clean());
            for &v in grid.pressure() {
                assert!(v.is_finite(), "{boundary}/{stencil}: {v}");
                assert!(v.abs() <= 50.0, "{boundary}/{stencil}: {v}");
            }
        }
    }
}

#[test]
fn unclipped_nan_becomes_zero() {
    let config = exact_config(BoundaryMode::Periodic, Stencil::VonNeumann);
    let nan = vec![f32::NAN; 9];
    let mut grid = Grid::from_fields(3, 3, nan.clone(), nan).unwrap();
    advance(&mut grid, &config, 0.0);
    assert!(grid.pressure().iter().all(|&v| v == 0.0));
}

#[test]
fn unstable_config_is_held_by_clip() {
    // c = 1.7 with unit dt is far past the bound; the clip keeps it finite.
    let config = StepConfig::builder()
        .sound_speed(1.7)
        .dt(1.0)
        .stencil(Stencil::VonNeumann)
        .boundary(BoundaryMode::Periodic)
        .clip_magnitude(Some(50.0))
        .build()
        .unwrap();
    assert!(!config.is_stable());
    let mut grid = impulse_grid(12, 12, 5.0);
    grid.add_source(3, 3);
    let mut saw_clamp = false;
    for t in 0..300 {
        let stats = advance(&mut grid, &config, t as f64);
        saw_clamp |= stats.clamped > 0;
        assert!(grid.pressure().iter().all(|v| v.is_finite() && v.abs() <= 50.0));
    }
    assert!(saw_clamp);
}

// ── Sources & determinism ────────────────────────────────────────────

#[test]
fn source_phase_tracks_time() {
    let config = StepConfig::builder()
        .boundary(BoundaryMode::Fixed)
        .damping(1.0)
        .build()
        .unwrap();
    let mut grid = Grid::new(9, 9).unwrap();
    grid.add_source(4, 4);

    // Step 0 has zero phase: nothing is injected.
    advance(&mut grid, &config, 0.0);
    assert!(interior_is_zero(grid.pressure(), 9, 9));

    advance(&mut grid, &config, 1.0);
    assert_eq!(grid.pressure_at(4, 4), Some(source_value(&config, 1.0)));
}

#[test]
fn identical_runs_are_bit_identical() {
    let config = StepConfig::default();
    let build = || {
        let mut g = Grid::new(20, 15).unwrap();
        g.apply_impulse(5, 5, 5.0);
        g.apply_impulse(14, 9, -3.0);
        g.add_source(10, 2);
        g.add_source(2, 12);
        g
    };
    let mut a = build();
    let mut b = build();
    for t in 0..200 {
        advance(&mut a, &config, t as f64);
        advance(&mut b, &config, t as f64);
    }
    let bits = |g: &Grid| g.pressure().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a), bits(&b));
}

mod props {
    use super::*;
    use proptest::prelude::*;

    fn boundary() -> impl Strategy<Value = BoundaryMode> {
        prop::sample::select(BoundaryMode::ALL.to_vec())
    }

    fn stencil() -> impl Strategy<Value = Stencil> {
        prop::sample::select(STENCILS.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn field_respects_clip(
            w in 3u32..12,
            h in 3u32..12,
            boundary in boundary(),
            stencil in stencil(),
            c in 0.1f64..3.0,
            clip in 1.0f32..100.0,
            impulses in prop::collection::vec((0i32..12, 0i32..12, -50.0f32..50.0), 0..6),
            steps in 1u64..40,
        ) {
            let config = StepConfig::builder()
                .sound_speed(c)
                .dt(1.0)
                .boundary(boundary)
                .stencil(stencil)
                .clip_magnitude(Some(clip))
                .build()
                .unwrap();
            let mut grid = Grid::new(w, h).unwrap();
            for (x, y, a) in impulses {
                grid.apply_impulse(x, y, a);
                grid.add_source(y, x);
            }
            for t in 0..steps {
                advance(&mut grid, &config, t as f64);
                for &v in grid.pressure() {
                    prop_assert!(v.is_finite());
                    prop_assert!(v.abs() <= clip);
                }
                if boundary == BoundaryMode::Fixed {
                    prop_assert!(edge_values(grid.pressure(), w, h).iter().all(|&v| v == 0.0));
                }
            }
        }

        #[test]
        fn history_is_the_previous_field(
            w in 3u32..10,
            h in 3u32..10,
            boundary in boundary(),
            stencil in stencil(),
            x in 0i32..10,
            y in 0i32..10,
        ) {
            let config = StepConfig::builder()
                .boundary(boundary)
                .stencil(stencil)
                .build()
                .unwrap();
            let mut grid = Grid::new(w, h).unwrap();
            grid.apply_impulse(x, y, 2.0);
            for t in 0..5 {
                let before = grid.pressure().to_vec();
                advance(&mut grid, &config, t as f64);
                prop_assert_eq!(grid.prev_pressure(), before.as_slice());
            }
        }
    }
}
