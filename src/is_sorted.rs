//! Derivative work of [`core::slice`] licensed under `MIT OR Apache-2.0`.
//!
//! [`core::slice`]: https://doc.rust-lang.org/src/core/slice/mod.rs.html

use core::cmp::Ordering::{self, Equal, Less};
use ndarray::ArrayView1;

/// Checks whether `compare` considers every element less than or equal to its successor.
pub fn is_sorted<T, F>(v: ArrayView1<'_, T>, mut compare: F) -> bool
where
	F: FnMut(&T, &T) -> Option<Ordering>,
{
	(1..v.len()).all(|i| matches!(compare(&v[i - 1], &v[i]), Some(Less | Equal)))
}
