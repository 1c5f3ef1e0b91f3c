//! Function metadata for tests and benchmarks.
//!
//! Every kernel has one [`FunctionInfo`] entry giving its ABI name, its
//! accuracy bound and the input intervals it is checked over. The intervals
//! mirror the sampling used to establish the bounds: `count` points spread
//! uniformly over the bit patterns between `lo` and `hi`, and a symmetric
//! interval is sampled on both sides of zero.
//!
//! Binary functions draw both operands from the same interval.
//!
//! Bounds follow the usual convention for vector math libraries: they leave
//! out the 0.5 ULP of the final rounding. Measured against the exact result,
//! a kernel's error can reach `max_ulp + 0.5`, and against a rounded `f64`
//! reference such as `std` it can reach `max_ulp + 1`.

use crate::error::{unknown_function, validation_error, Result};

/// Element precision of a kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    F64,
    F32,
}

/// A sampling interval over input bit patterns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
    /// Also sample `[-hi, -lo]`.
    pub symmetric: bool,
}

impl Interval {
    pub const fn new(lo: f64, hi: f64, count: usize) -> Self {
        Self {
            lo,
            hi,
            count,
            symmetric: false,
        }
    }

    pub const fn symmetric(lo: f64, hi: f64, count: usize) -> Self {
        Self {
            lo,
            hi,
            count,
            symmetric: true,
        }
    }

    /// Builds an interval from runtime bounds, rejecting empty or reversed
    /// ones.
    pub fn checked(lo: f64, hi: f64, count: usize, symmetric: bool) -> Result<Self> {
        if lo.is_nan() || hi.is_nan() || lo > hi {
            return Err(validation_error(format!("invalid interval [{lo}, {hi}]")));
        }
        if count == 0 {
            return Err(validation_error("interval needs at least one sample"));
        }
        Ok(Self {
            lo,
            hi,
            count,
            symmetric,
        })
    }

    /// Whether `x` (or `-x` for a symmetric interval) lies in `[lo, hi]`.
    pub fn contains(&self, x: f64) -> bool {
        let inside = |v: f64| v >= self.lo && v <= self.hi;
        inside(x) || (self.symmetric && inside(-x))
    }
}

/// Metadata for one kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionInfo {
    /// Kernel name, as exported from [`kernels`](crate::kernels).
    pub name: &'static str,
    /// Fixed-width entry point in [`abi`](crate::abi).
    pub abi_name: &'static str,
    pub precision: Precision,
    pub arity: usize,
    /// Error bound in ULP, excluding the 0.5 ULP of the final rounding.
    pub max_ulp: f64,
    pub intervals: &'static [Interval],
}

const INF: f64 = f64::INFINITY;

const fn hex(bits: u64) -> f64 {
    f64::from_bits(bits)
}

const TWO_P23: f64 = hex(0x4160_0000_0000_0000);
const TWO_M23: f64 = hex(0x3e80_0000_0000_0000);
const TWO_M14: f64 = hex(0x3f10_0000_0000_0000);
const TWO_M27: f64 = hex(0x3e40_0000_0000_0000);
const TWO_M51: f64 = hex(0x3cc0_0000_0000_0000);

static FUNCTIONS: [FunctionInfo; 17] = [
    FunctionInfo {
        name: "sin",
        abi_name: "vsinq_f64",
        precision: Precision::F64,
        arity: 1,
        max_ulp: 2.73,
        intervals: &[
            Interval::symmetric(0.0, TWO_P23, 500_000),
            Interval::symmetric(TWO_P23, INF, 10_000),
        ],
    },
    FunctionInfo {
        name: "cos",
        abi_name: "vcosq_f64",
        precision: Precision::F64,
        arity: 1,
        max_ulp: 2.78,
        intervals: &[
            Interval::symmetric(0.0, TWO_P23, 500_000),
            Interval::symmetric(TWO_P23, INF, 10_000),
        ],
    },
    FunctionInfo {
        name: "sincos",
        abi_name: "vsincosq_f64",
        precision: Precision::F64,
        arity: 1,
        max_ulp: 2.78,
        intervals: &[
            Interval::symmetric(0.0, TWO_P23, 500_000),
            Interval::symmetric(TWO_P23, INF, 10_000),
        ],
    },
    FunctionInfo {
        name: "exp",
        abi_name: "vexpq_f64",
        precision: Precision::F64,
        arity: 1,
        max_ulp: 1.9,
        intervals: &[
            Interval::symmetric(0.0, TWO_M23, 10_000),
            Interval::symmetric(TWO_M23, hex(0x4086_232b_dd76_683c), 100_000),
            Interval::symmetric(hex(0x4086_232b_dd76_683c), INF, 10_000),
        ],
    },
    FunctionInfo {
        name: "exp2",
        abi_name: "vexp2q_f64",
        precision: Precision::F64,
        arity: 1,
        max_ulp: 1.15,
        intervals: &[
            Interval::symmetric(0.0, TWO_M23, 10_000),
            Interval::symmetric(TWO_M23, hex(0x408f_f000_0000_0000), 10_000),
            Interval::symmetric(hex(0x408f_f000_0000_0000), INF, 10_000),
        ],
    },
    FunctionInfo {
        name: "expm1",
        abi_name: "vexpm1q_f64",
        precision: Precision::F64,
        arity: 1,
        max_ulp: 1.68,
        intervals: &[
            Interval::symmetric(0.0, TWO_M51, 1_000),
            Interval::symmetric(TWO_M51, hex(0x4086_2b7d_369a_5aa9), 100_000),
            Interval::symmetric(hex(0x4086_2b7d_369a_5aa9), INF, 100),
        ],
    },
    FunctionInfo {
        name: "log",
        abi_name: "vlogq_f64",
        precision: Precision::F64,
        arity: 1,
        max_ulp: 1.67,
        intervals: &[
            Interval::new(0.0, hex(0x0010_0000_0000_0000), 50_000),
            Interval::new(hex(0x0010_0000_0000_0000), 1.0, 50_000),
            Interval::new(1.0, 100.0, 50_000),
            Interval::new(100.0, INF, 50_000),
        ],
    },
    FunctionInfo {
        name: "tanh",
        abi_name: "vtanhq_f64",
        precision: Precision::F64,
        arity: 1,
        max_ulp: 2.21,
        intervals: &[
            Interval::symmetric(0.0, TWO_M27, 5_000),
            Interval::symmetric(TWO_M27, hex(0x4032_41bf_835f_9d5f), 50_000),
            Interval::symmetric(hex(0x4032_41bf_835f_9d5f), INF, 1_000),
        ],
    },
    FunctionInfo {
        name: "hypot",
        abi_name: "vhypotq_f64",
        precision: Precision::F64,
        arity: 2,
        max_ulp: 0.71,
        intervals: &[Interval::symmetric(0.0, INF, 10_000)],
    },
    FunctionInfo {
        name: "pow",
        abi_name: "vpowq_f64",
        precision: Precision::F64,
        arity: 2,
        max_ulp: 0.55,
        intervals: &[
            Interval::new(0.5, 2.0, 10_000),
            Interval::new(hex(0x3fee_0000_0000_0000), hex(0x3ff1_0000_0000_0000), 10_000),
        ],
    },
    FunctionInfo {
        name: "sinf",
        abi_name: "vsinq_f32",
        precision: Precision::F32,
        arity: 1,
        max_ulp: 1.89,
        intervals: &[
            Interval::symmetric(0.0, hex(0x4130_0000_0000_0000), 500_000),
            Interval::symmetric(hex(0x4130_0000_0000_0000), INF, 10_000),
        ],
    },
    FunctionInfo {
        name: "cosf",
        abi_name: "vcosq_f32",
        precision: Precision::F32,
        arity: 1,
        max_ulp: 1.89,
        intervals: &[
            Interval::symmetric(0.0, hex(0x4130_0000_0000_0000), 500_000),
            Interval::symmetric(hex(0x4130_0000_0000_0000), INF, 10_000),
        ],
    },
    FunctionInfo {
        name: "expf",
        abi_name: "vexpq_f32",
        precision: Precision::F32,
        arity: 1,
        max_ulp: 1.49,
        intervals: &[
            Interval::new(0.0, INF, 10_000),
            Interval::symmetric(TWO_M14, 256.0, 500_000),
        ],
    },
    FunctionInfo {
        name: "expm1f",
        abi_name: "vexpm1q_f32",
        precision: Precision::F32,
        arity: 1,
        max_ulp: 1.13,
        intervals: &[
            Interval::symmetric(0.0, TWO_M23, 10_000),
            Interval::symmetric(TWO_M23, hex(0x4054_d814_c000_0000), 1_000_000),
            Interval::symmetric(hex(0x4054_d814_c000_0000), 384.0, 1_000_000),
            Interval::symmetric(384.0, INF, 10_000),
        ],
    },
    FunctionInfo {
        name: "tanhf",
        abi_name: "vtanhq_f32",
        precision: Precision::F32,
        arity: 1,
        max_ulp: 2.09,
        intervals: &[
            Interval::symmetric(0.0, TWO_M23, 10_000),
            Interval::symmetric(TWO_M23, hex(0x4022_0596_6000_0000), 100_000),
            Interval::symmetric(hex(0x4022_0596_6000_0000), INF, 10_000),
        ],
    },
    FunctionInfo {
        name: "hypotf",
        abi_name: "vhypotq_f32",
        precision: Precision::F32,
        arity: 2,
        max_ulp: 1.21,
        intervals: &[Interval::symmetric(0.0, INF, 10_000)],
    },
    FunctionInfo {
        name: "powf",
        abi_name: "vpowq_f32",
        precision: Precision::F32,
        arity: 2,
        max_ulp: 2.1,
        intervals: &[
            Interval::new(0.5, 2.0, 50_000),
            Interval::new(hex(0x3fee_0000_0000_0000), hex(0x3ff1_0000_0000_0000), 50_000),
        ],
    },
];

/// Looks up a kernel by name (`"sin"`, `"powf"`, ...) or by ABI name
/// (`"vsinq_f64"`, ...).
pub fn lookup(name: &str) -> Result<&'static FunctionInfo> {
    FUNCTIONS
        .iter()
        .find(|info| info.name == name || info.abi_name == name)
        .ok_or_else(|| unknown_function(name))
}

/// Every registered kernel.
pub fn all() -> impl Iterator<Item = &'static FunctionInfo> {
    FUNCTIONS.iter()
}
