/// Product of two row-major matrices.
///
/// Returns `None` when either matrix is empty, a row is ragged (rows of
/// unequal length), or the inner dimensions disagree (columns of `a` !=
/// rows of `b`).
pub fn matrix_product(a: &[Vec<i64>], b: &[Vec<i64>]) -> Option<Vec<Vec<i64>>> {
    let rows_a = a.len();
    let rows_b = b.len();
    if rows_a == 0 || rows_b == 0 {
        return None;
    }
    let cols_a = a[0].len();
    let cols_b = b[0].len();
    if a.iter().any(|row| row.len() != cols_a) || b.iter().any(|row| row.len() != cols_b) {
        return None;
    }
    if cols_a != rows_b {
        return None;
    }

    let mut product = vec![vec![0; cols_b]; rows_a];
    for i in 0..rows_a {
        for k in 0..rows_b {
            for j in 0..cols_b {
                product[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    Some(product)
}
