//! Parallel sorting of the lanes of *n*-dimensional arrays.

use crate::heap_sort::heap_sort;
use ndarray::{ArrayBase, Axis, DataMut, Dimension, Zip};

/// Sorts every lane of `v` along `axis` in parallel, one heapsort per lane.
pub fn par_heap_sort_lanes<A, S, D, F>(v: &mut ArrayBase<S, D>, axis: Axis, is_less: F)
where
	A: Send,
	S: DataMut<Elem = A>,
	D: Dimension,
	F: Fn(&A, &A) -> bool + Sync,
{
	Zip::from(v.lanes_mut(axis)).par_for_each(|lane| heap_sort(lane, &is_less));
}

#[cfg(test)]
mod test {
	use super::par_heap_sort_lanes;
	use crate::heap_sort::heap_sort;
	use ndarray::{Array, Array3, Axis};
	use quickcheck_macros::quickcheck;
	use rand::Rng;

	#[cfg_attr(miri, ignore)]
	#[test]
	fn sequential_agreement() {
		let rng = &mut rand::rng();

		for _ in 0..50 {
			let shape = (
				rng.random_range(0..6usize),
				rng.random_range(0..6usize),
				rng.random_range(0..40usize),
			);
			let mut parallel: Array3<u16> = Array::from_shape_simple_fn(shape, || rng.random());
			let mut sequential = parallel.clone();
			let axis = Axis(rng.random_range(0..3));

			par_heap_sort_lanes(&mut parallel, axis, u16::lt);
			for lane in sequential.lanes_mut(axis) {
				heap_sort(lane, u16::lt);
			}
			assert_eq!(parallel, sequential);
		}
	}

	#[cfg_attr(miri, ignore)]
	#[quickcheck]
	fn rows_sorted(xs: Vec<i32>) {
		let cols = 7;
		let rows = xs.len() / cols;
		let mut array = Array::from_shape_vec((rows, cols), xs[..rows * cols].to_vec()).unwrap();
		par_heap_sort_lanes(&mut array, Axis(1), i32::lt);
		for row in array.rows() {
			assert!(row.iter().zip(row.iter().skip(1)).all(|(a, b)| a <= b));
		}
	}
}
