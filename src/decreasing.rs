//! Value wrapper inverting the natural order of the wrapped value.

use core::{cmp::Ordering, fmt};

/// Wraps a value and orders it in reverse, so ascending sorts yield descending wrapped values.
///
/// Equality compares the wrapped values directly whereas `<` holds iff the wrapped value is
/// greater, and `>` holds iff it is less. Unlike [`core::cmp::Reverse`], formatting is transparent.
///
/// # Examples
///
/// ```
/// use ndarray_heapsort::{Decreasing, DecreasingInt};
///
/// assert!(Decreasing(3) < Decreasing(1));
/// assert!(Decreasing(1) > Decreasing(3));
/// assert!(DecreasingInt::new(2) == Decreasing(2));
/// assert!(Decreasing(2) != Decreasing(-2));
/// assert_eq!(Decreasing(-42).to_string(), "-42");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decreasing<T>(pub T);

/// Decreasingly ordered [`i32`].
pub type DecreasingInt = Decreasing<i32>;

impl<T> Decreasing<T> {
	/// Wraps `value`.
	#[must_use]
	#[inline]
	pub const fn new(value: T) -> Self {
		Self(value)
	}
	/// Returns a reference to the wrapped value.
	#[must_use]
	#[inline]
	pub const fn get(&self) -> &T {
		&self.0
	}
	/// Unwraps the value.
	#[must_use]
	#[inline]
	pub fn into_inner(self) -> T {
		self.0
	}
}

impl<T> From<T> for Decreasing<T> {
	#[inline]
	fn from(value: T) -> Self {
		Self(value)
	}
}

impl<T: PartialOrd> PartialOrd for Decreasing<T> {
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		other.0.partial_cmp(&self.0)
	}
	#[inline]
	fn lt(&self, other: &Self) -> bool {
		self.0 > other.0
	}
	#[inline]
	fn le(&self, other: &Self) -> bool {
		self.0 >= other.0
	}
	#[inline]
	fn gt(&self, other: &Self) -> bool {
		self.0 < other.0
	}
	#[inline]
	fn ge(&self, other: &Self) -> bool {
		self.0 <= other.0
	}
}

impl<T: Ord> Ord for Decreasing<T> {
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		other.0.cmp(&self.0)
	}
}

impl<T: fmt::Display> fmt::Display for Decreasing<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{Decreasing, DecreasingInt};
	use core::cmp::Ordering;
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn inverted(a: i32, b: i32) {
		let (x, y) = (Decreasing(a), Decreasing(b));
		assert_eq!(x < y, a > b);
		assert_eq!(x > y, a < b);
		assert_eq!(x == y, a == b);
		assert_eq!(x != y, a != b);
		assert_eq!(x.cmp(&y), b.cmp(&a));
		assert_eq!(x > y, y < x);
	}

	#[quickcheck]
	fn trichotomous(a: i64, b: i64) {
		let (x, y) = (Decreasing(a), Decreasing(b));
		let holds = [x < y, x == y, y < x];
		assert_eq!(holds.iter().filter(|&&holds| holds).count(), 1);
	}

	#[test]
	fn rendered() {
		assert_eq!(DecreasingInt::new(0).to_string(), "0");
		assert_eq!(DecreasingInt::from(1234).to_string(), "1234");
		assert_eq!(Decreasing(i32::MIN).to_string(), i32::MIN.to_string());
		assert_eq!(format!("{:>4}", Decreasing(7u8)), "   7");
	}

	#[test]
	fn extremes() {
		assert!(Decreasing(i32::MAX) < Decreasing(i32::MIN));
		assert_eq!(
			Decreasing(i32::MIN).partial_cmp(&Decreasing(i32::MAX)),
			Some(Ordering::Greater)
		);
		assert_eq!(DecreasingInt::default().into_inner(), 0);
		assert_eq!(*Decreasing(5).get(), 5);
	}
}
