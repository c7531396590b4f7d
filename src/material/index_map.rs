use russell_tensor::Tensor2;

/// Number of strain (and stress) components of a plate fiber
pub const PLATE_FIBER_ORDER: usize = 5;

/// Number of independent components of a symmetric 3×3 tensor
pub const FULL_ORDER: usize = 6;

/// Maps reduced (vector) indices to tensor indices
///
/// ```text
/// reduced    tensor
/// -------    ------
///    0       (0, 0)
///    1       (1, 1)
///    2       (0, 1)  or (1, 0)
///    3       (1, 2)  or (2, 1)
///    4       (2, 0)  or (0, 2)
///    5       (2, 2)
/// ```
///
/// The out-of-plane normal component comes last, thus the first five entries
/// are the components retained after plane-stress condensation.
const REDUCED_TO_TENSOR: [(usize, usize); FULL_ORDER] = [(0, 0), (1, 1), (0, 1), (1, 2), (2, 0), (2, 2)];

/// Returns the tensor indices (i, j) corresponding to a reduced index
///
/// # Panics
///
/// A panic will occur if `m > 5`.
#[inline]
pub fn index_map(m: usize) -> (usize, usize) {
    assert!(m < FULL_ORDER, "reduced index must be in [0, 5]");
    REDUCED_TO_TENSOR[m]
}

/// Returns the reduced index corresponding to the tensor indices (i, j)
///
/// # Panics
///
/// A panic will occur if `i > 2` or `j > 2`.
pub fn reduced_index(i: usize, j: usize) -> usize {
    assert!(i < 3 && j < 3, "tensor indices must be in [0, 2]");
    match (usize::min(i, j), usize::max(i, j)) {
        (0, 0) => 0,
        (1, 1) => 1,
        (0, 1) => 2,
        (1, 2) => 3,
        (0, 2) => 4,
        _ => 5,
    }
}

/// Converts engineering strain components into a symmetric strain tensor
///
/// The shear components (m = 2, 3, 4) are halved. If only five components are
/// given, `eps_zz` is used for the (2, 2) component.
///
/// # Panics
///
/// A panic will occur if `values.len()` is not 5 or 6.
pub fn strain_tensor_from_engineering(epsilon: &mut Tensor2, values: &[f64], eps_zz: f64) {
    assert!(values.len() == PLATE_FIBER_ORDER || values.len() == FULL_ORDER);
    epsilon.clear();
    for m in 0..values.len() {
        let (i, j) = index_map(m);
        let value = if i == j { values[m] } else { 0.5 * values[m] };
        epsilon.sym_set(i, j, value);
    }
    if values.len() == PLATE_FIBER_ORDER {
        epsilon.sym_set(2, 2, eps_zz);
    }
}

/// Converts a symmetric strain tensor into the first `order` engineering components
///
/// # Panics
///
/// A panic will occur if `order > 6`.
pub fn engineering_from_strain_tensor(epsilon: &Tensor2, order: usize) -> Vec<f64> {
    (0..order)
        .map(|m| {
            let (i, j) = index_map(m);
            if i == j {
                epsilon.get(i, j)
            } else {
                2.0 * epsilon.get(i, j)
            }
        })
        .collect()
}

/// Extracts the first `order` (true) components of a symmetric tensor
pub fn components_from_tensor(tensor: &Tensor2, order: usize) -> Vec<f64> {
    (0..order)
        .map(|m| {
            let (i, j) = index_map(m);
            tensor.get(i, j)
        })
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
