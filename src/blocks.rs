//! Pointer-level loops over limb regions.
//!
//! Everything here is `unsafe` and trusts its documented preconditions; the
//! callers in the crate root hold the region bounds. None of the loops
//! allocate or touch anything outside the regions they are given.

use core::cmp::Ordering;

use crate::limb::{Limb, LimbDivisor, Value};

#[inline]
fn has_overlap(a: *const Limb, a_len: usize, b: *const Limb, b_len: usize) -> bool {
	let a_end = a.wrapping_add(a_len);
	let b_end = b.wrapping_add(b_len);
	a_end > b && b_end > a
}

#[inline]
fn has_no_overlap(a: *const Limb, a_len: usize, b: *const Limb, b_len: usize) -> bool {
	!has_overlap(a, a_len, b, b_len)
}

//--------------------------------------------------------------------------------------------------
// synchronization

/// Returns the number of limbs in use: the index of the highest nonzero limb
/// plus one, or 0 when the whole region is zero.
///
/// Preconditions:
/// - p[0..<n] is a valid region
#[inline]
pub unsafe fn trim_unchecked(p: *const Limb, mut n: usize) -> usize {
	unsafe {
		while n > 0 && p.add(n - 1).read().is_zero() {
			n -= 1;
		}
		n
	}
}

/// rp[i..<n] = 0
///
/// Preconditions:
/// - i <= n
/// - rp[0..<n] is a valid region
#[inline]
pub unsafe fn fill_unchecked(rp: *mut Limb, i: usize, n: usize) {
	debug_assert!(i <= n);
	unsafe {
		let re = rp.add(n);
		let mut rp = rp.add(i);
		while rp != re {
			rp.write(Limb::ZERO);
			rp = rp.add(1);
		}
	}
}

/// rp[0..<n] = ap[0..<n]
///
/// Preconditions:
/// - rp[0..<n] and ap[0..<n] are valid regions
/// - the regions are disjoint or identical
#[inline]
pub unsafe fn numcpy_unchecked(mut rp: *mut Limb, mut ap: *const Limb, n: usize) {
	unsafe {
		let re = rp.add(n);
		while rp != re {
			rp.write(ap.read());
			rp = rp.add(1);
			ap = ap.add(1);
		}
	}
}

//--------------------------------------------------------------------------------------------------
// compare

/// Compares two regions of the same length, most significant limb first.
///
/// Preconditions:
/// - ap[0..<n] and bp[0..<n] are valid regions
pub unsafe fn cmp_unchecked(ap: *const Limb, bp: *const Limb, mut n: usize) -> Ordering {
	unsafe {
		while n > 0 {
			n -= 1;
			let a = ap.add(n).read();
			let b = bp.add(n).read();
			if a != b {
				return if a < b { Ordering::Less } else { Ordering::Greater };
			}
		}
		Ordering::Equal
	}
}

//--------------------------------------------------------------------------------------------------
// add

/// rp[0..<min(r_cap, max(a_len, b_len) + 1)] = a + b, truncated to r_cap limbs.
///
/// Returns:
///     (len, overflow)
/// Where:
///     len = highest nonzero limb written + 1
///     overflow = the true sum needs more than r_cap limbs
///
/// Every position reads both operand limbs before the destination limb is
/// written, so the destination may alias either source. Positions past the
/// capacity are still evaluated to keep the overflow flag exact.
///
/// Preconditions:
/// - rp[0..<r_cap], ap[0..<a_len] and bp[0..<b_len] are valid regions
/// - rp is equal to ap/bp or does not overlap it; shifted overlap is not
///   supported
pub unsafe fn add_unchecked(
	rp: *mut Limb, r_cap: usize, ap: *const Limb, a_len: usize, bp: *const Limb, b_len: usize,
) -> (usize, bool) {
	let limit = if a_len >= b_len { a_len } else { b_len } + 1;

	let mut len = 0;
	let mut carry = false;
	let mut overflow = false;
	unsafe {
		let mut i = 0;
		while i < limit {
			let a = if i < a_len { ap.add(i).read() } else { Limb::ZERO };
			let b = if i < b_len { bp.add(i).read() } else { Limb::ZERO };
			let (sum, carry_out) = Limb::addc(a, b, carry);
			carry = carry_out;

			if i < r_cap {
				rp.add(i).write(sum);
				if sum.is_not_zero() {
					len = i + 1;
				}
			} else if sum.is_not_zero() {
				overflow = true;
			}
			i += 1;
		}
	}
	(len, overflow | carry)
}

//--------------------------------------------------------------------------------------------------
// mul

/// rp[0..<min(r_cap, a_len + b_len)] = a * b, truncated to r_cap limbs.
///
/// Returns:
///     (len, overflow)
///
/// Schoolbook convolution by destination position. The carry spilling into
/// the next position outgrows one limb once the operands have a few limbs,
/// so it is tracked as a low limb plus a wrap count. Positions past the
/// capacity are still evaluated to keep the overflow flag exact.
///
/// Preconditions:
/// - rp[0..<r_cap], ap[0..<a_len] and bp[0..<b_len] are valid regions
/// - the destination overlaps neither source
pub unsafe fn mul_unchecked(
	rp: *mut Limb, r_cap: usize, ap: *const Limb, a_len: usize, bp: *const Limb, b_len: usize,
) -> (usize, bool) {
	debug_assert!(has_no_overlap(rp, r_cap, ap, a_len));
	debug_assert!(has_no_overlap(rp, r_cap, bp, b_len));

	if a_len == 0 || b_len == 0 {
		return (0, false);
	}

	let out_len = a_len + b_len;
	let mut len = 0;
	let mut overflow = false;

	// carry out of the previous position, low limb and wrap count
	let mut carry = Limb::ZERO;
	let mut carry_high = Limb::ZERO;

	unsafe {
		let mut p = 0;
		while p < out_len {
			let mut acc = carry;
			let mut c_lo = carry_high;
			let mut c_hi: Value = 0;

			// pairs (i, j = p - i) with i < a_len and j < b_len
			let i_lo = if p + 1 > b_len { p + 1 - b_len } else { 0 };
			let i_hi = if p + 1 < a_len { p + 1 } else { a_len };
			let mut i = i_lo;
			while i < i_hi {
				let [low, high] = Limb::mul(ap.add(i).read(), bp.add(p - i).read(), Limb::ZERO, Limb::ZERO);

				let (sum, c) = Limb::addc(acc, low, false);
				acc = sum;
				let (sum, c) = Limb::addc(c_lo, high, c);
				c_lo = sum;
				c_hi += c as Value;
				i += 1;
			}

			if p < r_cap {
				rp.add(p).write(acc);
				if acc.is_not_zero() {
					len = p + 1;
				}
			} else if acc.is_not_zero() {
				overflow = true;
			}

			carry = c_lo;
			carry_high = Limb(c_hi);
			p += 1;
		}
	}
	(len, overflow | carry.is_not_zero() | carry_high.is_not_zero())
}

//--------------------------------------------------------------------------------------------------
// divmod

/// rp[0..<min(r_cap, a_len)] = a / divisor, truncated to r_cap limbs.
///
/// Returns:
///     (len, rem)
/// Where:
///     len = highest nonzero limb written + 1
///     rem = a % divisor
///
/// Limbs are processed from most significant to least, so the quotient can
/// be written over the dividend (`rp == ap` works). Quotient limbs at
/// positions `>= r_cap` are computed and dropped; the remainder covers all
/// of `a` and stays exact.
///
/// Preconditions:
/// - rp[0..<r_cap] and ap[0..<a_len] are valid regions
/// - rp is equal to ap or does not overlap it
pub unsafe fn divmod_unchecked(
	rp: *mut Limb, r_cap: usize, ap: *const Limb, a_len: usize, div: LimbDivisor,
) -> (usize, Limb) {
	let mut len = 0;
	let mut rem = Limb::ZERO;
	unsafe {
		let mut i = a_len;
		while i > 0 {
			i -= 1;
			let (quot, r) = div.step(rem, ap.add(i).read());
			rem = r;
			if i < r_cap {
				rp.add(i).write(quot);
				if quot.is_not_zero() && len == 0 {
					len = i + 1;
				}
			}
		}
	}
	(len, rem)
}

/// a % divisor, without storing the quotient anywhere.
///
/// Preconditions:
/// - ap[0..<a_len] is a valid region
pub unsafe fn rem_unchecked(ap: *const Limb, a_len: usize, div: LimbDivisor) -> Limb {
	let mut rem = Limb::ZERO;
	unsafe {
		let mut i = a_len;
		while i > 0 {
			i -= 1;
			rem = div.step(rem, ap.add(i).read()).1;
		}
	}
	rem
}

//--------------------------------------------------------------------------------------------------
