use j2plate::prelude::*;
use russell_lab::*;

// Checkpoint and restore of a plate fiber
//
// TEST GOAL
//
// Verifies that a committed state written to JSON and read back into a fresh
// material point reproduces the response of the original point.
//
// CONFIGURATION AND PARAMETERS
//
// * Saturation hardening (steel-like parameters)
// * Loading: ten increments of combined extension and shear; then one more
//   increment applied to both the original and the restored points

#[test]
fn test_checkpoint_restore() -> Result<(), StrError> {
    let param = SampleParams::param_j2_steel();
    let settings = Settings::new();

    // load the original point
    let mut original = J2PlateFiber::new(&param, &settings)?;
    let path = StrainPath::new_linear(&[0.0; 5], &[0.006, -0.001, 0.004, 0.0, 0.001], 10)?;
    let res = path.follow_strain(&mut original, &settings).unwrap();
    assert!(res[10].xi > 0.0);

    // checkpoint
    let json = serde_json::to_string(&original.snapshot()).map_err(|_| "cannot write snapshot")?;
    let snapshot: MaterialSnapshot = serde_json::from_str(&json).map_err(|_| "cannot read snapshot")?;

    // restore into a fresh point
    let mut restored = J2PlateFiber::new(&param, &settings)?;
    restored.restore(&snapshot);
    approx_eq(restored.xi(), original.xi(), 1e-15);
    approx_eq(restored.eps_zz(), original.eps_zz(), 1e-15);

    // same response to the next strain
    let next = [0.0066, -0.0011, 0.0044, 0.0, 0.0011];
    original.set_trial_strain(&next).unwrap();
    restored.set_trial_strain(&next).unwrap();
    let sig_a = original.stress();
    let sig_b = restored.stress();
    for m in 0..5 {
        approx_eq(sig_a[m], sig_b[m], 1e-9);
    }
    approx_eq(original.xi(), restored.xi(), 1e-12);
    let (dd_a, dd_b) = (original.tangent(), restored.tangent());
    for i in 0..5 {
        for j in 0..5 {
            approx_eq(dd_a.get(i, j), dd_b.get(i, j), 1e-6);
        }
    }
    Ok(())
}
