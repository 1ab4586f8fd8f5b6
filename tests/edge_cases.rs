//! Shape policy and algebraic properties of `matrix_dot_vector`.

use matdot::{DotOptions, MatDotError, RowCheck, matrix_dot_vector, matrix_dot_vector_with};
use rand::Rng;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn identity(n: usize) -> Vec<Vec<i64>> {
    (0..n)
        .map(|i| (0..n).map(|j| i64::from(i == j)).collect())
        .collect()
}

#[test]
fn empty_matrix_and_empty_vector() {
    init_logger();
    let a: Vec<Vec<i32>> = Vec::new();
    let x: Vec<i32> = Vec::new();
    assert_eq!(matrix_dot_vector(&a, &x), Ok(Vec::new()));
}

#[test]
fn empty_matrix_and_nonempty_vector() {
    init_logger();
    let a: Vec<Vec<i32>> = Vec::new();
    let err = matrix_dot_vector(&a, &[1]).unwrap_err();
    assert!(matches!(err, MatDotError::DimensionMismatch { cols: 0, len: 1, .. }));
}

#[test]
fn column_count_mismatch() {
    init_logger();
    let a = vec![vec![1, 2, 3], vec![4, 5, 6]];
    assert_eq!(
        matrix_dot_vector(&a, &[1, 2]),
        Err(MatDotError::DimensionMismatch { row: 0, cols: 3, len: 2 })
    );
}

#[test]
fn small_integer_product() {
    let a = vec![vec![1, 2], vec![2, 4]];
    assert_eq!(matrix_dot_vector(&a, &[1, 2]), Ok(vec![5, 10]));
}

#[test]
fn identity_three() {
    let a = identity(3);
    assert_eq!(matrix_dot_vector(&a, &[5, 10, 15]), Ok(vec![5, 10, 15]));
}

#[test]
fn identity_returns_vector_unchanged() {
    let mut rng = rand::thread_rng();
    for n in 1..=16 {
        let x: Vec<i64> = (0..n).map(|_| rng.gen_range(-1000..1000)).collect();
        assert_eq!(matrix_dot_vector(&identity(n), &x), Ok(x));
    }
}

#[test]
fn single_row_and_single_column() {
    assert_eq!(matrix_dot_vector(&[[1.0, 2.0, 3.0]], &[1.0, 1.0, 1.0]), Ok(vec![6.0]));
    assert_eq!(matrix_dot_vector(&[[2.0], [3.0], [4.0]], &[0.5]), Ok(vec![1.0, 1.5, 2.0]));
}

#[test]
fn repeated_calls_are_identical() {
    let mut rng = rand::thread_rng();
    let a: Vec<Vec<f64>> = (0..9)
        .map(|_| (0..5).map(|_| rng.r#gen::<f64>()).collect())
        .collect();
    let x: Vec<f64> = (0..5).map(|_| rng.r#gen()).collect();
    let first = matrix_dot_vector(&a, &x);
    for _ in 0..10 {
        assert_eq!(matrix_dot_vector(&a, &x), first);
    }
}

#[test]
fn strict_rows_reject_jagged_matrix() {
    init_logger();
    let a = vec![vec![1, 2], vec![3, 4], vec![5, 6, 7]];
    let opts = DotOptions::new().with_row_check(RowCheck::EveryRow);
    assert_eq!(
        matrix_dot_vector_with(&a, &[1, 1], &opts),
        Err(MatDotError::DimensionMismatch { row: 2, cols: 3, len: 2 })
    );
    // the default policy only looks at the first row
    assert_eq!(matrix_dot_vector(&a, &[1, 1]), Ok(vec![3, 7, 11]));
}

#[test]
fn accepts_borrowed_rows() {
    let r0 = [1u32, 0, 2];
    let r1 = [0u32, 3, 0];
    let a: [&[u32]; 2] = [&r0, &r1];
    assert_eq!(matrix_dot_vector(&a, &[1, 1, 1]), Ok(vec![3, 3]));
}
