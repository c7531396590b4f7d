use super::{index_map, new_sym_tensor, FULL_ORDER};
use russell_tensor::Tensor2;
use serde::{Deserialize, Serialize};

/// Holds the hardening (internal) variables
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HardeningState {
    /// Accumulated plastic strain ξ
    pub xi: f64,

    /// Plastic strain tensor εp (deviatoric)
    pub epsilon_p: Tensor2,
}

/// Holds the unit of persistence of a material point
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Hardening variables
    pub hardening: HardeningState,

    /// Full strain tensor; its (2, 2) component is the out-of-plane strain εzz
    pub strain: Tensor2,

    /// Stress tensor σ (always computed by the stress-update algorithm)
    pub stress: Tensor2,
}

/// Holds the minimal data needed to resume an analysis exactly (checkpoint/restore)
///
/// The plastic strain components follow the reduced ordering
/// `[xx, yy, xy, yz, zx, zz]` with tensor (not engineering) shear values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialSnapshot {
    /// Accumulated plastic strain ξ
    pub xi: f64,

    /// Independent components of the plastic strain tensor
    pub epsilon_p: [f64; FULL_ORDER],

    /// Committed out-of-plane strain εzz
    pub eps_zz: f64,
}

/// Holds the committed and trial records of a material point
///
/// The trial record is derived from the committed record plus the latest
/// stress update. Only [MaterialStateStore::commit] and
/// [MaterialStateStore::revert_to_last_commit] move data between the two.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MaterialStateStore {
    committed: MaterialRecord,
    trial: MaterialRecord,
}

impl HardeningState {
    /// Allocates a zero (virgin) state
    pub fn new() -> Self {
        HardeningState {
            xi: 0.0,
            epsilon_p: new_sym_tensor(),
        }
    }
}

impl MaterialRecord {
    /// Allocates a record with all-zero state
    pub fn new() -> Self {
        MaterialRecord {
            hardening: HardeningState::new(),
            strain: new_sym_tensor(),
            stress: new_sym_tensor(),
        }
    }

    /// Returns the out-of-plane strain εzz
    pub fn eps_zz(&self) -> f64 {
        self.strain.get(2, 2)
    }
}

impl MaterialStateStore {
    /// Allocates a new instance with zero state
    pub fn new() -> Self {
        MaterialStateStore {
            committed: MaterialRecord::new(),
            trial: MaterialRecord::new(),
        }
    }

    /// Returns an access to the committed record
    pub fn committed(&self) -> &MaterialRecord {
        &self.committed
    }

    /// Returns an access to the trial record
    pub fn trial(&self) -> &MaterialRecord {
        &self.trial
    }

    /// Returns the committed hardening state and a mutable access to the trial record
    ///
    /// This is the only way the stress-update algorithms modify the trial record.
    pub(crate) fn split_mut(&mut self) -> (&HardeningState, &mut MaterialRecord) {
        (&self.committed.hardening, &mut self.trial)
    }

    /// Promotes the trial record to committed
    pub fn commit(&mut self) {
        self.committed.clone_from(&self.trial);
    }

    /// Discards the trial record by restoring the last committed one
    pub fn revert_to_last_commit(&mut self) {
        self.trial.clone_from(&self.committed);
    }

    /// Resets both records to the all-zero initial state
    pub fn revert_to_start(&mut self) {
        self.committed = MaterialRecord::new();
        self.trial = MaterialRecord::new();
    }

    /// Returns the minimal committed data required to restart an analysis
    pub fn snapshot(&self) -> MaterialSnapshot {
        let mut epsilon_p = [0.0; FULL_ORDER];
        for m in 0..FULL_ORDER {
            let (i, j) = index_map(m);
            epsilon_p[m] = self.committed.hardening.epsilon_p.get(i, j);
        }
        MaterialSnapshot {
            xi: self.committed.hardening.xi,
            epsilon_p,
            eps_zz: self.committed.eps_zz(),
        }
    }

    /// Restores the committed (and trial) records from a snapshot
    ///
    /// Strain and stress other than εzz are not part of the snapshot; they are
    /// zeroed and recomputed by the next trial strain.
    pub fn restore(&mut self, snapshot: &MaterialSnapshot) {
        let mut record = MaterialRecord::new();
        record.hardening.xi = snapshot.xi;
        for m in 0..FULL_ORDER {
            let (i, j) = index_map(m);
            record.hardening.epsilon_p.sym_set(i, j, snapshot.epsilon_p[m]);
        }
        record.strain.sym_set(2, 2, snapshot.eps_zz);
        self.trial.clone_from(&record);
        self.committed = record;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{MaterialRecord, MaterialStateStore};
    use russell_lab::approx_eq;

    fn modify_trial(store: &mut MaterialStateStore, xi: f64, eps_zz: f64) {
        let (_, trial) = store.split_mut();
        trial.hardening.xi = xi;
        trial.hardening.epsilon_p.sym_set(0, 1, 0.5 * xi);
        trial.strain.sym_set(2, 2, eps_zz);
        trial.stress.sym_set(0, 0, 10.0 * xi);
    }

    fn check_equal(a: &MaterialRecord, b: &MaterialRecord) {
        assert_eq!(a.hardening.xi, b.hardening.xi);
        assert_eq!(a.hardening.epsilon_p.vector().as_data(), b.hardening.epsilon_p.vector().as_data());
        assert_eq!(a.strain.vector().as_data(), b.strain.vector().as_data());
        assert_eq!(a.stress.vector().as_data(), b.stress.vector().as_data());
    }

    #[test]
    fn new_store_is_zero() {
        let store = MaterialStateStore::new();
        check_equal(store.committed(), &MaterialRecord::new());
        check_equal(store.trial(), &MaterialRecord::new());
        assert_eq!(store.committed().stress.vector().dim(), 6);
    }

    #[test]
    fn commit_and_revert_work() {
        let mut store = MaterialStateStore::new();
        modify_trial(&mut store, 0.1, -0.002);
        assert_eq!(store.committed().hardening.xi, 0.0);

        // revert discards the trial values
        store.revert_to_last_commit();
        check_equal(store.trial(), &MaterialRecord::new());

        // commit promotes the trial values
        modify_trial(&mut store, 0.1, -0.002);
        store.commit();
        assert_eq!(store.committed().hardening.xi, 0.1);
        assert_eq!(store.committed().eps_zz(), -0.002);

        // idempotence
        let committed = store.committed().clone();
        store.commit();
        check_equal(store.committed(), &committed);
        store.revert_to_last_commit();
        store.revert_to_last_commit();
        check_equal(store.committed(), &committed);
        check_equal(store.trial(), &committed);

        // reset
        store.revert_to_start();
        check_equal(store.committed(), &MaterialRecord::new());
        check_equal(store.trial(), &MaterialRecord::new());
    }

    #[test]
    fn snapshot_and_restore_work() {
        let mut store = MaterialStateStore::new();
        modify_trial(&mut store, 0.2, 0.003);
        store.commit();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.xi, 0.2);
        let correct = [0.0, 0.0, 0.1, 0.0, 0.0, 0.0];
        for m in 0..6 {
            approx_eq(snapshot.epsilon_p[m], correct[m], 1e-15);
        }
        assert_eq!(snapshot.eps_zz, 0.003);

        let json = serde_json::to_string(&snapshot).unwrap();
        let mut other = MaterialStateStore::new();
        other.restore(&serde_json::from_str(&json).unwrap());
        let restored = other.snapshot();
        approx_eq(restored.xi, 0.2, 1e-15);
        approx_eq(restored.eps_zz, 0.003, 1e-15);
        for m in 0..6 {
            approx_eq(restored.epsilon_p[m], snapshot.epsilon_p[m], 1e-15);
        }
        approx_eq(other.trial().hardening.epsilon_p.get(1, 0), 0.1, 1e-15);
        approx_eq(other.trial().eps_zz(), 0.003, 1e-15);
        assert_eq!(other.trial().stress.norm(), 0.0);
    }
}
