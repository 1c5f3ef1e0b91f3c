//! Soft-float helpers on raw IEEE-754 bit patterns.
//!
//! These work on the integer encoding alone, so they behave the same on
//! every target and never touch the floating-point environment. They back
//! the comparison and conversion checks in the test suite.

/// Result of comparing two IEEE values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatOrdering {
    Less,
    Equal,
    Greater,
    /// At least one operand is NaN.
    Unordered,
}

/// Maps a sign-magnitude encoding onto a monotone signed integer.
///
/// Both zeros map to 0.
#[inline]
fn ordered_key64(bits: u64) -> i64 {
    let magnitude = (bits & !(1 << 63)) as i64;
    if bits >> 63 != 0 {
        -magnitude
    } else {
        magnitude
    }
}

#[inline]
fn ordered_key32(bits: u32) -> i32 {
    let magnitude = (bits & !(1 << 31)) as i32;
    if bits >> 31 != 0 {
        -magnitude
    } else {
        magnitude
    }
}

fn order<T: Ord>(a: T, b: T) -> FloatOrdering {
    match a.cmp(&b) {
        std::cmp::Ordering::Less => FloatOrdering::Less,
        std::cmp::Ordering::Equal => FloatOrdering::Equal,
        std::cmp::Ordering::Greater => FloatOrdering::Greater,
    }
}

/// Compares two doubles given as bit patterns.
///
/// `+0` and `-0` are equal; any NaN operand, quiet or signalling, makes the
/// result [`FloatOrdering::Unordered`].
///
/// # Examples
///
/// ```rust
/// use lanemath::softfp::{dcmp, FloatOrdering};
///
/// assert_eq!(dcmp(0, 0x8000_0000_0000_0000), FloatOrdering::Equal);
/// assert_eq!(dcmp(0, 0x7ff0_0000_a5a4_2e09), FloatOrdering::Unordered);
/// assert_eq!(dcmp(0x3ff0_0000_0000_0000, 0x4000_0000_0000_0000), FloatOrdering::Less);
/// ```
pub fn dcmp(a: u64, b: u64) -> FloatOrdering {
    const INF: u64 = 0x7ff0_0000_0000_0000;
    let abs_mask = !(1u64 << 63);
    if a & abs_mask > INF || b & abs_mask > INF {
        return FloatOrdering::Unordered;
    }
    order(ordered_key64(a), ordered_key64(b))
}

/// Single-precision form of [`dcmp`].
pub fn fcmp(a: u32, b: u32) -> FloatOrdering {
    const INF: u32 = 0x7f80_0000;
    let abs_mask = !(1u32 << 31);
    if a & abs_mask > INF || b & abs_mask > INF {
        return FloatOrdering::Unordered;
    }
    order(ordered_key32(a), ordered_key32(b))
}

/// Widens a float bit pattern to a double bit pattern.
///
/// Exact for every finite input, subnormals included. A signalling NaN is
/// quietened; the payload moves to the top of the double mantissa.
///
/// # Special Values
/// | Input | Output |
/// |-------|--------|
/// | `0x3f80_0000` (1.0) | `0x3ff0_0000_0000_0000` |
/// | `0x0000_0001` (2^-149) | `0x36a0_0000_0000_0000` |
/// | `0x7faf_53b1` (sNaN) | `0x7ffd_ea76_2000_0000` |
pub fn f2d(bits: u32) -> u64 {
    let sign = ((bits >> 31) as u64) << 63;
    let exponent = (bits >> 23) & 0xff;
    let mantissa = bits & 0x007f_ffff;

    match exponent {
        0xff if mantissa != 0 => {
            let quiet = (mantissa | 0x0040_0000) as u64;
            sign | 0x7ff0_0000_0000_0000 | (quiet << 29)
        }
        0xff => sign | 0x7ff0_0000_0000_0000,
        0 if mantissa == 0 => sign,
        0 => {
            // Shift the leading one up to bit 23, the implicit bit.
            let shift = mantissa.leading_zeros() - 8;
            let normalized = (mantissa << shift) & 0x007f_ffff;
            let exponent = (1023 - 126 - shift) as u64;
            sign | (exponent << 52) | ((normalized as u64) << 29)
        }
        _ => {
            let exponent = (exponent + 1023 - 127) as u64;
            sign | (exponent << 52) | ((mantissa as u64) << 29)
        }
    }
}
