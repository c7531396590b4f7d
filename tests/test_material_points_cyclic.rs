use j2plate::prelude::*;

// Cyclic loading of a set of plate fibers
//
// TEST GOAL
//
// Verifies the commit/revert lifecycle of many material points updated in
// parallel, and that the accumulated plastic strain never decreases under
// load reversal.
//
// CONFIGURATION AND PARAMETERS
//
// * Linear hardening: K = 1000, G = 600, σ0 = 9, H = 800
// * Eight points with different amplitudes; three load reversals

#[test]
fn test_material_points_cyclic() -> Result<(), StrError> {
    let param = SampleParams::param_j2_linear();
    let settings = Settings::new();
    let n_point = 8;
    let mut points = MaterialPoints::new_plate_fibers(&param, &settings, n_point)?;

    let n_inc = 10;
    let amplitudes: Vec<f64> = (0..n_point).map(|p| 0.004 + 0.001 * p as f64).collect();
    let mut xi_prev = vec![0.0; n_point];
    for cycle in 0..4 {
        let sign = if cycle % 2 == 0 { 1.0 } else { -1.0 };
        for k in 1..(n_inc + 1) {
            let alpha = sign * k as f64 / n_inc as f64;
            let strains: Vec<Vec<f64>> = amplitudes
                .iter()
                .map(|a| vec![alpha * a, 0.0, 0.5 * alpha * a, 0.0, 0.0])
                .collect();

            // a rejected trial is discarded by revert
            let rejected: Vec<Vec<f64>> = strains.iter().map(|s| s.iter().map(|v| 1.5 * v).collect()).collect();
            points.set_trial_strains(&rejected).unwrap();
            points.revert_all();

            points.set_trial_strains(&strains).unwrap();
            points.commit_all();
            for p in 0..n_point {
                let xi = points.all[p].xi();
                assert!(xi >= xi_prev[p]);
                xi_prev[p] = xi;
            }
        }
    }
    assert!(xi_prev.iter().all(|xi| *xi > 0.0));

    // larger amplitudes accumulate more plastic strain
    for p in 1..n_point {
        assert!(xi_prev[p] > xi_prev[p - 1]);
    }

    // reset
    points.revert_all_to_start();
    for point in &points.all {
        assert_eq!(point.xi(), 0.0);
        assert_eq!(point.snapshot().eps_zz, 0.0);
        assert_eq!(point.tangent().as_data(), point.initial_tangent().as_data());
    }
    Ok(())
}
