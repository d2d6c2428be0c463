//! Heapsort building its heap by sift-up and draining it by a three-way sift-down.
//!
//! Only `is_less` is required of the elements. The heap derives `a > b` as `is_less(b, a)` and
//! `a == b` as neither `is_less(a, b)` nor `is_less(b, a)`.

use ndarray::{ArrayViewMut1, s};

/// Parent of `node` in the implicit binary tree, `None` for the root.
#[inline]
fn parent(node: usize) -> Option<usize> {
	node.checked_sub(1).map(|node| node / 2)
}

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
///
/// Only swaps are performed, so `v` remains a permutation of its input even if `is_less` panics
/// or does not define a total order, in which case the resulting order is unspecified.
pub fn heap_sort<T, F>(mut v: ArrayViewMut1<'_, T>, mut is_less: F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	if len < 2 {
		return;
	}

	build_heap(v.view_mut(), &mut is_less);

	// Pop maximal elements from the heap, the sorted tail grows by one per round.
	for end in (1..len).rev() {
		v.swap(0, end);
		sift_down(v.slice_mut(s![..end]), &mut is_less);
	}
}

/// Arranges `v` into a binary heap respecting the invariant `parent >= child`.
///
/// The heap grows one element at a time by sifting each appended element up towards the root for
/// as long as it is strictly greater than its parent.
fn build_heap<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	for i in 1..v.len() {
		let mut node = i;
		while let Some(up) = parent(node) {
			if !is_less(&v[up], &v[node]) {
				break;
			}
			v.swap(node, up);
			node = up;
		}
	}
}

/// Restores the heap property of `v` after its root has been replaced.
///
/// Each round ranks the node against both of its children. The greater child is promoted, and of
/// two equal children the left one is. Once complete pairs of children run out, a single left
/// child at the very end of `v` gets one final comparison.
fn sift_down<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	let mut node = 0;
	let mut left = 1;
	let mut right = 2;

	while right < len {
		let (n, l, r) = (&v[node], &v[left], &v[right]);
		let child = if is_less(r, l) && is_less(n, l) {
			left
		} else if !is_less(l, r) && !is_less(r, l) && is_less(n, l) {
			left
		} else if is_less(l, r) && is_less(n, r) {
			right
		} else {
			// Heap property holds at `node`.
			break;
		};
		v.swap(node, child);
		node = child;
		left = 2 * node + 1;
		right = left + 1;
	}

	if left + 1 == len && is_less(&v[node], &v[left]) {
		v.swap(node, left);
	}
}
