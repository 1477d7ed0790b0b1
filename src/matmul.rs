//! Small GEMM wrapper behind `Matrix::multiply`.
//!
//! - default: a simple, safe triple-loop implementation
//! - optional: a faster backend via the `matrixmultiply` feature

/// `c = a * b` for dense row-major buffers. `c` is overwritten.
///
/// `a` is `(m, k)`, `b` is `(k, n)`, `c` is `(m, n)`.
#[inline]
pub(crate) fn gemm_f64(m: usize, n: usize, k: usize, a: &[f64], b: &[f64], c: &mut [f64]) {
    assert_eq!(a.len(), m * k, "a must be {m}x{k}");
    assert_eq!(b.len(), k * n, "b must be {k}x{n}");
    assert_eq!(c.len(), m * n, "c must be {m}x{n}");

    #[cfg(feature = "matrixmultiply")]
    {
        // SAFETY: the three buffers were checked above to hold exactly m*k, k*n and m*n
        // row-major elements, which is what these strides address.
        unsafe {
            matrixmultiply::dgemm(
                m,
                k,
                n,
                1.0,
                a.as_ptr(),
                k as isize,
                1,
                b.as_ptr(),
                n as isize,
                1,
                0.0,
                c.as_mut_ptr(),
                n as isize,
                1,
            );
        }
    }

    #[cfg(not(feature = "matrixmultiply"))]
    for i in 0..m {
        let a_row = &a[i * k..(i + 1) * k];
        for j in 0..n {
            let mut acc = 0.0_f64;
            for (p, &av) in a_row.iter().enumerate() {
                acc = av.mul_add(b[p * n + j], acc);
            }
            c[i * n + j] = acc;
        }
    }
}
