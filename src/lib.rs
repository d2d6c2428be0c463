//! Generic [heapsort] for (sub)views into *n*-dimensional arrays with arbitrary memory layout
//! (e.g., non-contiguous), together with [`Decreasing`], a value wrapper inverting the natural
//! order so the same ascending machinery sorts in descending order.
//!
//! # Example
//!
//! ```
//! use ndarray_heapsort::{Decreasing, Slice1Ext, ndarray::arr1};
//!
//! let v = arr1(&[3, 1, 4, 1, 5]);
//!
//! // Sorted copies, `v` stays untouched.
//! assert_eq!(v.heap_sorted(), arr1(&[1, 1, 3, 4, 5]));
//! assert_eq!(v.mapv(Decreasing).heap_sorted().mapv(Decreasing::into_inner), arr1(&[5, 4, 3, 1, 1]));
//! assert_eq!(v, arr1(&[3, 1, 4, 1, 5]));
//! ```
//!
//! # Current Implementation
//!
//! The heap is built by inserting one element after another and sifting it up towards the root.
//! Maximal elements are then popped off into the growing sorted tail while the new root is sifted
//! down, ranking it against both children per level and promoting the left child of two equal
//! ones. The order of equal elements is deterministic but not preserved (i.e., unstable).
//!
//! | Resource | Complexity | Sorting (in-place) | Sorting (copy) |
//! |----------|------------|--------------------|----------------|
//! | Time     | Worst      | *O*(*n* log *n*)   | *O*(*n* log *n*) |
//! | Space    | Worst      | *O*(1)             | *O*(*n*)       |
//!
//! [heapsort]: https://en.wikipedia.org/wiki/Heapsort
//!
//! # Features
//!
//!   * `std` for [`std`] support, otherwise `no_std` allocating through [`ndarray`]. Enabled by
//!     `default` or `rayon`.
//!   * `rayon` for parallel `par_heap_sort_axis*` sorting lanes concurrently.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod decreasing;
mod heap_sort;
mod is_sorted;

#[cfg(feature = "rayon")]
mod par;
#[cfg(feature = "rayon")]
use par::par_heap_sort_lanes;

use crate::{heap_sort::heap_sort, is_sorted::is_sorted};
use core::cmp::Ordering::{self, Less};
use ndarray::{Array1, ArrayBase, Axis, Data, DataMut, Dimension, Ix1};

pub use decreasing::{Decreasing, DecreasingInt};
pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing [heapsort] methods similar to the
/// sorting methods of [`slice`].
///
/// The `heap_sorted*` methods return a sorted copy and leave `self` untouched whereas the
/// `heap_sort*` methods sort in-place.
///
/// [heapsort]: https://en.wikipedia.org/wiki/Heapsort
pub trait Slice1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Returns a sorted copy of the array.
	///
	/// This sort is unstable (i.e., may reorder equal elements) and *O*(*n* log *n*) worst-case.
	/// It allocates the returned array only.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::arr1, Slice1Ext};
	///
	/// let v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// assert_eq!(v.heap_sorted(), arr1(&[-5, -3, 1, 2, 4]));
	/// assert_eq!(v, arr1(&[-5, 4, 1, -3, 2]));
	/// ```
	#[must_use]
	fn heap_sorted(&self) -> Array1<A>
	where
		A: Ord + Clone;
	/// Returns a copy of the array sorted with a comparator function.
	///
	/// This sort is unstable (i.e., may reorder equal elements) and *O*(*n* log *n*) worst-case.
	///
	/// The comparator function must define a total ordering for the elements in the array. If
	/// the ordering is not total, the order of the elements is unspecified. An order is a
	/// total order if it is (for all `a`, `b` and `c`):
	///
	/// * total and antisymmetric: exactly one of `a < b`, `a == b` or `a > b` is true, and
	/// * transitive, `a < b` and `b < c` implies `a < c`. The same must hold for both `==` and `>`.
	///
	/// For example, while [`f64`] doesn't implement [`Ord`] because `NaN != NaN`, we can use
	/// `partial_cmp` as our sort function when we know the array doesn't contain a `NaN`.
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::arr1, Slice1Ext};
	///
	/// let floats = arr1(&[5f64, 4.0, 1.0, 3.0, 2.0]);
	/// let sorted = floats.heap_sorted_by(|a, b| a.partial_cmp(b).unwrap());
	/// assert_eq!(sorted, arr1(&[1.0, 2.0, 3.0, 4.0, 5.0]));
	/// ```
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::arr1, Slice1Ext};
	///
	/// let v = arr1(&[5, 4, 1, 3, 2]);
	/// assert_eq!(v.heap_sorted_by(|a, b| a.cmp(b)), arr1(&[1, 2, 3, 4, 5]));
	///
	/// // reverse sorting
	/// assert_eq!(v.heap_sorted_by(|a, b| b.cmp(a)), arr1(&[5, 4, 3, 2, 1]));
	/// ```
	#[must_use]
	fn heap_sorted_by<F>(&self, compare: F) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering;
	/// Returns a copy of the array sorted with a key extraction function.
	///
	/// This sort is unstable (i.e., may reorder equal elements) and *O*(*mn* log *n*) worst-case,
	/// where the key function is *O*(*m*).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::arr1, Slice1Ext};
	///
	/// let v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// assert_eq!(v.heap_sorted_by_key(|k| k.abs()), arr1(&[1, 2, -3, 4, -5]));
	/// ```
	#[must_use]
	fn heap_sorted_by_key<K, F>(&self, f: F) -> Array1<A>
	where
		A: Clone,
		K: Ord,
		F: FnMut(&A) -> K;

	/// Sorts the array in-place.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place
	/// (i.e., does not allocate), and *O*(*n* log *n*) worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::arr2, Slice1Ext};
	///
	/// let mut v = arr2(&[[-5, 4, 1, -3,  2],
	///                    [ 8, 3, 2,  4,  8],
	///                    [38, 9, 3,  0,  3],
	///                    [ 4, 9, 0,  8, -1]]);
	///
	/// // Columns are non-contiguous in row-major memory layout.
	/// v.column_mut(4).heap_sort();
	///
	/// assert!(v == arr2(&[[-5, 4, 1, -3, -1],
	///                     [ 8, 3, 2,  4,  2],
	///                     [38, 9, 3,  0,  3],
	///                     [ 4, 9, 0,  8,  8]]));
	/// ```
	fn heap_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array in-place with a comparator function.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place
	/// (i.e., does not allocate), and *O*(*n* log *n*) worst-case.
	///
	/// The comparator function must define a total ordering for the elements in the array, see
	/// [`heap_sorted_by`](Slice1Ext::heap_sorted_by).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// v.heap_sort_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	fn heap_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array in-place with a key extraction function.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place
	/// (i.e., does not allocate), and *O*(*mn* log *n*) worst-case, where the key function is
	/// *O*(*m*).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::arr1, Slice1Ext};
	///
	/// let mut v = arr1(&["ccc", "a", "bb"]);
	/// v.heap_sort_by_key(|s| s.len());
	/// assert!(v == arr1(&["a", "bb", "ccc"]));
	/// ```
	fn heap_sort_by_key<K, F>(&mut self, f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;

	/// Checks if the elements of this array are sorted.
	///
	/// That is, for each element `a` and its following element `b`, `a <= b` must hold. If the
	/// array yields exactly zero or one element, `true` is returned.
	///
	/// Note that if `Self::Item` is only `PartialOrd`, but not `Ord`, the above definition
	/// implies that this function returns `false` if any two consecutive items are not
	/// comparable.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::arr1, Decreasing, Slice1Ext};
	///
	/// let empty: [i32; 0] = [];
	///
	/// assert!(arr1(&[1, 2, 2, 9]).is_sorted());
	/// assert!(!arr1(&[1, 3, 2, 4]).is_sorted());
	/// assert!(arr1(&[Decreasing(9), Decreasing(2), Decreasing(2)]).is_sorted());
	/// assert!(arr1(&[0]).is_sorted());
	/// assert!(arr1(&empty).is_sorted());
	/// assert!(!arr1(&[0.0, 1.0, f32::NAN]).is_sorted());
	/// ```
	#[must_use]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd;
	/// Checks if the elements of this array are sorted using the given comparator function.
	///
	/// Instead of using `PartialOrd::partial_cmp`, this function uses the given `compare`
	/// function to determine the ordering of two elements. Apart from that, it's equivalent to
	/// [`is_sorted`]; see its documentation for more information.
	///
	/// [`is_sorted`]: Slice1Ext::is_sorted
	#[must_use]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>;
	/// Checks if the elements of this array are sorted using the given key extraction function.
	///
	/// Instead of comparing the array's elements directly, this function compares the keys of the
	/// elements, as determined by `f`. Apart from that, it's equivalent to [`is_sorted`]; see its
	/// documentation for more information.
	///
	/// [`is_sorted`]: Slice1Ext::is_sorted
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::arr1, Slice1Ext};
	///
	/// assert!(arr1(&["c", "bb", "aaa"]).is_sorted_by_key(|s| s.len()));
	/// assert!(!arr1(&[-2i32, -1, 0, 3]).is_sorted_by_key(|n| n.abs()));
	/// ```
	#[must_use]
	fn is_sorted_by_key<F, K>(&self, f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd;
}

impl<A, S> Slice1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn heap_sorted(&self) -> Array1<A>
	where
		A: Ord + Clone,
	{
		let mut temp = self.to_owned();
		heap_sort(temp.view_mut(), A::lt);
		temp
	}
	#[inline]
	fn heap_sorted_by<F>(&self, mut compare: F) -> Array1<A>
	where
		A: Clone,
		F: FnMut(&A, &A) -> Ordering,
	{
		let mut temp = self.to_owned();
		heap_sort(temp.view_mut(), |a: &A, b: &A| compare(a, b) == Less);
		temp
	}
	#[inline]
	fn heap_sorted_by_key<K, F>(&self, mut f: F) -> Array1<A>
	where
		A: Clone,
		K: Ord,
		F: FnMut(&A) -> K,
	{
		let mut temp = self.to_owned();
		heap_sort(temp.view_mut(), |a: &A, b: &A| f(a).lt(&f(b)));
		temp
	}

	#[inline]
	fn heap_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		heap_sort(self.view_mut(), A::lt);
	}
	#[inline]
	fn heap_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		heap_sort(self.view_mut(), |a: &A, b: &A| compare(a, b) == Less);
	}
	#[inline]
	fn heap_sort_by_key<K, F>(&mut self, mut f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		heap_sort(self.view_mut(), |a: &A, b: &A| f(a).lt(&f(b)));
	}

	#[inline]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd,
	{
		is_sorted(self.view(), |a, b| a.partial_cmp(b))
	}
	#[inline]
	fn is_sorted_by<F>(&self, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>,
	{
		is_sorted(self.view(), compare)
	}
	#[inline]
	fn is_sorted_by_key<F, K>(&self, mut f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd,
	{
		is_sorted(self.view(), |a, b| f(a).partial_cmp(&f(b)))
	}
}

/// Extension trait for *n*-dimensional [`ArrayBase<S, D>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) sorting every lane along an [`Axis`].
///
/// A lane is a 1-dimensional subview along the given axis, e.g., a row of a matrix is a lane along
/// `Axis(1)` whereas a column is a lane along `Axis(0)`. Lanes are sorted independently of each
/// other in the manner of [`Slice1Ext::heap_sort`].
pub trait SliceExt<A, S, D>
where
	S: Data<Elem = A>,
	D: Dimension,
{
	/// Sorts every lane along `axis` in parallel.
	///
	/// # Panics
	///
	/// Panics if `axis` is out of bounds.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::{arr2, Axis}, SliceExt};
	///
	/// let mut v = arr2(&[[3, 1, 2],
	///                    [9, 7, 8]]);
	/// v.par_heap_sort_axis(Axis(1));
	/// assert!(v == arr2(&[[1, 2, 3],
	///                     [7, 8, 9]]));
	/// ```
	#[cfg(feature = "rayon")]
	fn par_heap_sort_axis(&mut self, axis: Axis)
	where
		A: Ord + Send,
		S: DataMut;
	/// Sorts every lane along `axis` in parallel with a comparator function.
	///
	/// # Panics
	///
	/// Panics if `axis` is out of bounds.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::{arr2, Axis}, SliceExt};
	///
	/// let mut v = arr2(&[[3, 1, 2],
	///                    [9, 7, 8]]);
	/// v.par_heap_sort_axis_by(Axis(0), |a, b| b.cmp(a));
	/// assert!(v == arr2(&[[9, 7, 8],
	///                     [3, 1, 2]]));
	/// ```
	#[cfg(feature = "rayon")]
	fn par_heap_sort_axis_by<F>(&mut self, axis: Axis, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut;

	/// Sorts every lane along `axis`.
	///
	/// # Panics
	///
	/// Panics if `axis` is out of bounds.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::{arr2, Axis}, SliceExt};
	///
	/// let mut v = arr2(&[[3, 1, 2],
	///                    [0, 7, 8]]);
	/// v.heap_sort_axis(Axis(0));
	/// assert!(v == arr2(&[[0, 1, 2],
	///                     [3, 7, 8]]));
	/// ```
	fn heap_sort_axis(&mut self, axis: Axis)
	where
		A: Ord,
		S: DataMut;
	/// Sorts every lane along `axis` with a comparator function.
	///
	/// # Panics
	///
	/// Panics if `axis` is out of bounds.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_heapsort::{ndarray::{arr2, Axis}, SliceExt};
	///
	/// let mut v = arr2(&[[3, 1, 2],
	///                    [9, 7, 8]]);
	/// v.heap_sort_axis_by(Axis(1), |a, b| b.cmp(a));
	/// assert!(v == arr2(&[[3, 2, 1],
	///                     [9, 8, 7]]));
	/// ```
	fn heap_sort_axis_by<F>(&mut self, axis: Axis, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
}

impl<A, S, D> SliceExt<A, S, D> for ArrayBase<S, D>
where
	S: Data<Elem = A>,
	D: Dimension,
{
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_heap_sort_axis(&mut self, axis: Axis)
	where
		A: Ord + Send,
		S: DataMut,
	{
		par_heap_sort_lanes(self, axis, A::lt);
	}
	#[cfg(feature = "rayon")]
	#[inline]
	fn par_heap_sort_axis_by<F>(&mut self, axis: Axis, compare: F)
	where
		A: Send,
		F: Fn(&A, &A) -> Ordering + Sync,
		S: DataMut,
	{
		par_heap_sort_lanes(self, axis, |a: &A, b: &A| compare(a, b) == Less);
	}

	fn heap_sort_axis(&mut self, axis: Axis)
	where
		A: Ord,
		S: DataMut,
	{
		for lane in self.lanes_mut(axis) {
			heap_sort(lane, A::lt);
		}
	}
	fn heap_sort_axis_by<F>(&mut self, axis: Axis, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		for lane in self.lanes_mut(axis) {
			heap_sort(lane, |a: &A, b: &A| compare(a, b) == Less);
		}
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{Decreasing, DecreasingInt, Slice1Ext, SliceExt};
	use ndarray::{Array1, Array2, Axis, arr1, arr2, s};
	use quickcheck_macros::quickcheck;

	#[test]
	fn decreasing_scenario() {
		let v = arr1(&[3, 1, 4, 1, 5]).mapv(DecreasingInt::new);
		let sorted = v.heap_sorted();
		assert_eq!(sorted.mapv(Decreasing::into_inner), arr1(&[5, 4, 3, 1, 1]));
		assert!(sorted.is_sorted());
		assert_eq!(v.mapv(Decreasing::into_inner), arr1(&[3, 1, 4, 1, 5]));
	}

	#[test]
	fn boundaries() {
		let empty = Array1::<DecreasingInt>::from_vec(Vec::new());
		assert!(empty.heap_sorted().is_empty());
		assert_eq!(arr1(&[Decreasing(7)]).heap_sorted(), arr1(&[Decreasing(7)]));
		assert_eq!(arr1(&[2, 2, 2, 2]).heap_sorted(), arr1(&[2, 2, 2, 2]));
		assert_eq!(arr1(&[1, 2]).heap_sorted(), arr1(&[1, 2]));
		assert_eq!(arr1(&[2, 1]).heap_sorted(), arr1(&[1, 2]));
	}

	#[quickcheck]
	fn copied(xs: Vec<i32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let array = Array1::from_vec(xs.clone());
		assert_eq!(array.heap_sorted().to_vec(), sorted);
		assert_eq!(array.to_vec(), xs);
	}

	#[quickcheck]
	fn inverted(xs: Vec<i32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable_by(|a, b| b.cmp(a));
		let array = Array1::from_vec(xs).mapv(Decreasing);
		assert_eq!(array.heap_sorted().mapv(Decreasing::into_inner).to_vec(), sorted);
	}

	#[quickcheck]
	fn idempotent(xs: Vec<i32>) {
		let once = Array1::from_vec(xs).heap_sorted();
		assert_eq!(once.heap_sorted(), once);
	}

	#[quickcheck]
	fn in_place(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let mut array = Array1::from_vec(xs);
		array.heap_sort();
		assert_eq!(array.to_vec(), sorted);
		assert!(array.is_sorted());
	}

	#[quickcheck]
	fn strided(x: u32, xs: Vec<u32>) {
		let mut array = Array1::from_iter(core::iter::once(x).chain(xs));
		let mut odd = array.slice(s![1..;2]).to_vec();
		let even = array.slice(s![..;2]).to_vec();
		array.slice_mut(s![1..;2]).heap_sort();
		odd.sort_unstable();
		assert_eq!(array.slice(s![1..;2]).to_vec(), odd);
		assert_eq!(array.slice(s![..;2]).to_vec(), even);
	}

	#[quickcheck]
	fn keyed(xs: Vec<i32>) {
		let array = Array1::from_vec(xs);
		let sorted = array.heap_sorted_by_key(|x| x.unsigned_abs());
		assert!(sorted.is_sorted_by_key(|x| x.unsigned_abs()));
		let mut reversed = array.clone();
		reversed.heap_sort_by(|a, b| b.cmp(a));
		assert!(reversed.is_sorted_by(|a, b| b.partial_cmp(a)));
	}

	#[test]
	fn lanes() {
		let mut v: Array2<i32> = arr2(&[[3, 1, 2], [0, 7, 8], [6, 5, 4]]);
		v.heap_sort_axis(Axis(1));
		assert_eq!(v, arr2(&[[1, 2, 3], [0, 7, 8], [4, 5, 6]]));
		v.heap_sort_axis_by(Axis(0), |a, b| b.cmp(a));
		assert_eq!(v, arr2(&[[4, 7, 8], [1, 5, 6], [0, 2, 3]]));
	}

	#[test]
	#[should_panic]
	fn lanes_out_of_bounds() {
		let mut v = arr2(&[[1, 2], [3, 4]]);
		v.heap_sort_axis(Axis(2));
	}
}
