use super::index_map;
use russell_lab::Matrix;
use russell_tensor::{Mandel, Tensor2, Tensor4};

/// Defines the Mandel representation of all second-order tensors (symmetric, 3D)
pub const MANDEL: Mandel = Mandel::Symmetric;

/// Allocates a zero symmetric second-order tensor
pub fn new_sym_tensor() -> Tensor2 {
    Tensor2::new(MANDEL)
}

/// Holds a fourth-order tensor with 3×3×3×3 components
///
/// The tangent operators handled here possess the minor symmetries
/// `T[i][j][k][l] = T[j][i][k][l] = T[i][j][l][k]`; use [Tensor4Full::set_minor_sym]
/// to preserve them. This container is used where single components are
/// modified in place (static condensation) and exported through the reduced index map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tensor4Full {
    data: [[[[f64; 3]; 3]; 3]; 3],
}

impl Tensor4Full {
    /// Allocates a zero tensor
    pub fn new() -> Self {
        Tensor4Full {
            data: [[[[0.0; 3]; 3]; 3]; 3],
        }
    }

    /// Allocates a new instance with the components of a (Mandel) fourth-order tensor
    pub fn from_tensor4(dd: &Tensor4) -> Self {
        let mut tt = Tensor4Full::new();
        tt.set_tensor4(dd);
        tt
    }

    /// Copies all components from a (Mandel) fourth-order tensor
    pub fn set_tensor4(&mut self, dd: &Tensor4) {
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    for l in 0..3 {
                        self.data[i][j][k][l] = dd.get(i, j, k, l);
                    }
                }
            }
        }
    }

    /// Returns the (i, j, k, l) component
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize, l: usize) -> f64 {
        self.data[i][j][k][l]
    }

    /// Sets the (i, j, k, l) component together with its minor-symmetric counterparts
    #[inline]
    pub fn set_minor_sym(&mut self, i: usize, j: usize, k: usize, l: usize, value: f64) {
        self.data[i][j][k][l] = value;
        self.data[j][i][k][l] = value;
        self.data[i][j][l][k] = value;
        self.data[j][i][l][k] = value;
    }

    /// Returns the largest absolute difference between major-symmetric entries
    ///
    /// ```text
    /// max |T[i][j][k][l] - T[k][l][i][j]|
    /// ```
    pub fn major_asymmetry(&self) -> f64 {
        let mut max = 0.0;
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    for l in 0..3 {
                        let diff = f64::abs(self.data[i][j][k][l] - self.data[k][l][i][j]);
                        if diff > max {
                            max = diff;
                        }
                    }
                }
            }
        }
        max
    }

    /// Writes the reduced matrix representation to `mat`
    ///
    /// ```text
    /// mat[m][n] = T[i][j][k][l]  with  (i,j) = map(m)  and  (k,l) = map(n)
    /// ```
    ///
    /// # Panics
    ///
    /// A panic will occur if the matrix is not square or larger than 6×6.
    pub fn to_reduced_matrix(&self, mat: &mut Matrix) {
        let (nrow, ncol) = mat.dims();
        assert_eq!(nrow, ncol);
        for m in 0..nrow {
            let (i, j) = index_map(m);
            for n in 0..ncol {
                let (k, l) = index_map(n);
                mat.set(m, n, self.data[i][j][k][l]);
            }
        }
    }

    /// Returns the reduced matrix representation with `order` rows and columns
    pub fn as_reduced_matrix(&self, order: usize) -> Matrix {
        let mut mat = Matrix::new(order, order);
        self.to_reduced_matrix(&mut mat);
        mat
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
