//! Small sampling helpers shared by the profile generator and grid edges.

use crate::traits::Scalar;

/// Evenly spaced samples over `[start, end]`, inclusive of both endpoints.
///
/// `n == 1` yields just `start`; `n == 0` yields nothing.
pub fn linspace<T: Scalar>(start: T, end: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / T::from_usize(n - 1).unwrap();
            (0..n)
                .map(|i| start + step * T::from_usize(i).unwrap())
                .collect()
        }
    }
}

/// Index of the maximum value, first occurrence winning ties.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, max)) if v <= max => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}
