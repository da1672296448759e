//! Integration tests for element-wise arithmetic, products, transposition and
//! the identity factory.

use densemat::{Matrix, MatrixError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix {
    let data = (0..rows * cols)
        .map(|_| rng.gen_range(-10.0..10.0))
        .collect::<Vec<f64>>();
    Matrix::from_shape_vec((rows, cols), data).unwrap()
}

fn sample_pair() -> (Matrix, Matrix) {
    let a = Matrix::from_slice_rows(&[[1.0, 3.0], [3.4, 3.6]]).unwrap();
    let b = Matrix::from_slice_rows(&[[5.5, 3.1], [1.1, 0.5]]).unwrap();
    (a, b)
}

// ---------------------------------------------------------------------------
// Addition / subtraction
// ---------------------------------------------------------------------------

#[test]
fn add_is_element_wise() {
    let (a, b) = sample_pair();
    let sum = a.add(&b).unwrap();
    assert_eq!(
        sum.get_raw_matrix(),
        vec![vec![1.0 + 5.5, 3.0 + 3.1], vec![3.4 + 1.1, 3.6 + 0.5]]
    );
}

#[test]
fn sub_is_element_wise() {
    let (a, b) = sample_pair();
    let diff = a.sub(&b).unwrap();
    assert_eq!(
        diff.get_raw_matrix(),
        vec![vec![1.0 - 5.5, 3.0 - 3.1], vec![3.4 - 1.1, 3.6 - 0.5]]
    );
}

#[test]
fn add_then_sub_restores_operand() {
    let mut rng = StdRng::seed_from_u64(11);
    for (rows, cols) in [(1, 1), (2, 5), (4, 3)] {
        let a = random_matrix(&mut rng, rows, cols);
        let b = random_matrix(&mut rng, rows, cols);
        let back = a.add(&b).unwrap().sub(&b).unwrap();
        assert!(back.approx_eq(&a, 1e-12), "{} x {} round trip drifted", rows, cols);
    }
}

#[test]
fn add_and_sub_leave_operands_unchanged() {
    let (a, b) = sample_pair();
    let (a0, b0) = (a.clone(), b.clone());
    let _ = a.add(&b).unwrap();
    let _ = a.sub(&b).unwrap();
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

#[test]
fn mismatched_shapes_are_rejected() {
    let a = Matrix::new(2, 3).unwrap();
    let b = Matrix::new(3, 2).unwrap();
    assert_eq!(
        a.add(&b),
        Err(MatrixError::DimensionMismatch {
            op: "add",
            lhs: (2, 3),
            rhs: (3, 2)
        })
    );
    assert!(matches!(
        a.sub(&b),
        Err(MatrixError::DimensionMismatch { op: "subtract", .. })
    ));
}

// ---------------------------------------------------------------------------
// Multiplication
// ---------------------------------------------------------------------------

#[test]
fn mult_square_matches_dot_products() {
    let (a, b) = sample_pair();
    let product = a.mult(&b).unwrap();
    let expected = vec![
        vec![1.0 * 5.5 + 3.0 * 1.1, 1.0 * 3.1 + 3.0 * 0.5],
        vec![3.4 * 5.5 + 3.6 * 1.1, 3.4 * 3.1 + 3.6 * 0.5],
    ];
    assert_eq!(product.get_raw_matrix(), expected);
}

#[test]
fn mult_result_is_rows_by_other_cols() {
    let a = Matrix::from_slice_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let b = Matrix::from_slice_rows(&[[7.0], [8.0], [9.0]]).unwrap();
    let product = a.mult(&b).unwrap();
    assert_eq!(product.shape(), (2, 1));
    assert_eq!(product.get_raw_matrix(), vec![vec![50.0], vec![122.0]]);

    let outer = b.mult(&Matrix::from_slice_rows(&[[1.0, 2.0]]).unwrap()).unwrap();
    assert_eq!(outer.shape(), (3, 2));
    assert_eq!(outer.get(2, 1).unwrap(), 18.0);
}

#[test]
fn mult_requires_inner_dimensions_to_agree() {
    let a = Matrix::new(2, 3).unwrap();
    let b = Matrix::new(2, 3).unwrap();
    assert_eq!(
        a.mult(&b),
        Err(MatrixError::DimensionMismatch {
            op: "multiply",
            lhs: (2, 3),
            rhs: (2, 3)
        })
    );
}

#[test]
fn mult_by_integer_scalar() {
    let (a, _) = sample_pair();
    let scaled = a.mult_scalar(5);
    assert_eq!(
        scaled.get_raw_matrix(),
        vec![vec![1.0 * 5.0, 3.0 * 5.0], vec![3.4 * 5.0, 3.6 * 5.0]]
    );
}

#[test]
fn mult_by_float_scalar() {
    let (a, _) = sample_pair();
    let scaled = a.mult_scalar(5.7);
    assert_eq!(
        scaled.get_raw_matrix(),
        vec![vec![1.0 * 5.7, 3.0 * 5.7], vec![3.4 * 5.7, 3.6 * 5.7]]
    );
    assert_eq!(scaled.shape(), a.shape());
}

#[test]
fn scalar_mult_distributes_over_addition() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = random_matrix(&mut rng, 3, 4);
    let b = random_matrix(&mut rng, 3, 4);
    for k in [-2.0, 0.0, 0.5, 7.25] {
        let lhs = a.add(&b).unwrap().mult_scalar(k);
        let rhs = a.mult_scalar(k).add(&b.mult_scalar(k)).unwrap();
        assert!(lhs.approx_eq(&rhs, 1e-10), "distributivity failed for k = {}", k);
    }
}

#[test]
fn operators_match_named_methods() {
    let (a, b) = sample_pair();
    assert_eq!(&a + &b, a.add(&b).unwrap());
    assert_eq!(&a - &b, a.sub(&b).unwrap());
    assert_eq!(&a * &b, a.mult(&b).unwrap());
    assert_eq!(&a * 2.0, a.mult_scalar(2));
    assert_eq!(-&a, a.mult_scalar(-1));
}

#[test]
#[should_panic(expected = "cannot multiply")]
fn mul_operator_panics_on_mismatch() {
    let a = Matrix::new(2, 3).unwrap();
    let _ = &a * &a;
}

// ---------------------------------------------------------------------------
// Transpose
// ---------------------------------------------------------------------------

#[test]
fn transpose_swaps_entries() {
    let mut m = Matrix::from_slice_rows(&[[1.0, 3.0], [3.4, 3.6]]).unwrap();
    m.transpose();
    assert_eq!(m.get_raw_matrix(), vec![vec![1.0, 3.4], vec![3.0, 3.6]]);
}

#[test]
fn transpose_twice_is_identity() {
    let mut rng = StdRng::seed_from_u64(5);
    for (rows, cols) in [(1, 4), (3, 3), (5, 2)] {
        let original = random_matrix(&mut rng, rows, cols);
        let mut m = original.clone();
        m.transpose();
        assert_eq!(m.shape(), (cols, rows));
        m.transpose();
        assert_eq!(m, original);
    }
}

#[test]
fn transposed_leaves_receiver_alone() {
    let m = Matrix::from_slice_rows(&[[1.0, 2.0, 3.0]]).unwrap();
    let t = m.transposed();
    assert_eq!(m.shape(), (1, 3));
    assert_eq!(t.get_raw_matrix(), vec![vec![1.0], vec![2.0], vec![3.0]]);
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

#[test]
fn identity_has_unit_diagonal() {
    let id = Matrix::identity(2).unwrap();
    assert_eq!(id.get_raw_matrix(), vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    assert!(Matrix::identity(0).is_err());
}

#[test]
fn identity_is_neutral_for_products() {
    let id = Matrix::identity(3).unwrap();
    assert_eq!(id.mult_scalar(1), id);

    let mut rng = StdRng::seed_from_u64(17);
    let a = random_matrix(&mut rng, 3, 3);
    assert!(a.mult(&id).unwrap().approx_eq(&a, 0.0));
    assert!(id.mult(&a).unwrap().approx_eq(&a, 0.0));

    // Non-square: identity of matching order on each side.
    let r = random_matrix(&mut rng, 2, 3);
    assert!(r.mult(&id).unwrap().approx_eq(&r, 0.0));
    assert!(Matrix::identity(2).unwrap().mult(&r).unwrap().approx_eq(&r, 0.0));
}

#[test]
fn mapv_applies_function_to_every_entry() {
    let m = Matrix::from_slice_rows(&[[1.0, -2.0], [3.0, -4.0]]).unwrap();
    let abs = m.mapv(f64::abs);
    assert_eq!(abs.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
}
