//! Trigonometric constants.
//!
//! Digits of 2/π for the large-argument reduction, the π/2 splits used to turn
//! the reduced fraction back into radians, and the polynomials of the sin/cos
//! fast path and fallback.

/// Number of 24-bit digits of 2/π held in [`INV_PIO2`].
pub const INV_PIO2_DIGITS: usize = 75;

/// 2/π as consecutive 24-bit digits, most significant first.
///
/// Digit `i` has weight `2^(-24 (i + 1))`. Every entry is an integer below
/// `2^24`, so products with a 27-bit split half of `x` are exact.
pub static INV_PIO2: [f64; INV_PIO2_DIGITS] = [
    10680707.0, 7228996.0, 1387004.0, 2578385.0, 16069853.0,
    12639074.0, 9804092.0, 4427841.0, 16666979.0, 11263675.0,
    12935607.0, 2387514.0, 4345298.0, 14681673.0, 3074569.0,
    13734428.0, 16653803.0, 1880361.0, 10960616.0, 8533493.0,
    3062596.0, 8710556.0, 7349940.0, 6258241.0, 3772886.0,
    3769171.0, 3798172.0, 8675211.0, 12450088.0, 3874808.0,
    9961438.0, 366607.0, 15675153.0, 9132554.0, 7151469.0,
    3571407.0, 2607881.0, 12013382.0, 4155038.0, 6285869.0,
    7677882.0, 13102053.0, 15825725.0, 473591.0, 9065106.0,
    15363067.0, 6271263.0, 9264392.0, 5636912.0, 4652155.0,
    7056368.0, 13614112.0, 10155062.0, 1944035.0, 9527646.0,
    15080200.0, 6658437.0, 6231200.0, 6832269.0, 16767104.0,
    5075751.0, 3212806.0, 1398474.0, 7579849.0, 6349435.0,
    12618859.0, 4703257.0, 12806093.0, 14477321.0, 2786137.0,
    12875403.0, 9837734.0, 14528324.0, 13719321.0, 343717.0,
];

/// Interleaved sine and cosine coefficients, `[s0, c0, s1, c1, ...]`.
///
/// The sine column approximates `(sin(r) - r) / r^3` and the cosine column
/// `(cos(r) - 1) / r^2`, both as polynomials in `r^2` on `[-π/4, π/4]`.
pub static SINCOS_POLY: [f64; 14] = [
    f64::from_bits(0xbfc5_5555_5555_547b), f64::from_bits(0xbfe0_0000_0000_0000),
    f64::from_bits(0x3f81_1111_1110_8a4d), f64::from_bits(0x3fa5_5555_5555_554c),
    f64::from_bits(0xbf2a_01a0_1993_6f27), f64::from_bits(0xbf56_c16c_16c1_521f),
    f64::from_bits(0x3ec7_1de3_7a97_d93e), f64::from_bits(0x3efa_01a0_19cb_f62a),
    f64::from_bits(0xbe5a_e633_9199_87c6), f64::from_bits(0xbe92_7e4f_812b_681e),
    f64::from_bits(0x3de6_0e27_7ae0_7cec), f64::from_bits(0x3e21_ee9f_152a_57cd),
    f64::from_bits(0xbd69_e954_0300_a100), f64::from_bits(0xbda8_fb13_1098_404b),
];

/// Dekker splitting constant, `2^27 + 1`.
pub const SPLIT: f64 = f64::from_bits(0x41a0_0000_0200_0000); // 0x1.0000002p+27

/// π/2 rounded to double.
pub const HP0: f64 = f64::from_bits(0x3ff9_21fb_5444_2d18);
/// π/2 - HP0.
pub const HP1: f64 = f64::from_bits(0x3c91_a626_3314_5c07);
/// π/2 with 27 significant bits, so that products with split halves are exact.
pub const MP0: f64 = f64::from_bits(0x3ff9_21fb_5800_0000);
/// π/2 - MP0, also 27 significant bits.
pub const MP1: f64 = f64::from_bits(0xbe4d_de97_4000_0000);

/// Rounds to a multiple of four when added and subtracted.
pub const SHIFT_MOD4: f64 = f64::from_bits(0x4358_0000_0000_0000); // 0x1.8p54

/// Inputs at or above this magnitude take the extended-precision reduction.
pub const LARGE_BOUND: f64 = 8_388_608.0; // 2^23

pub const INV_PI: f64 = f64::from_bits(0x3fd4_5f30_6dc9_c883);

/// π split into three parts for Cody-Waite reduction.
pub const PI_1: f64 = f64::from_bits(0x4009_21fb_5444_2d18);
pub const PI_2: f64 = f64::from_bits(0x3ca1_a626_3314_5c06);
pub const PI_3: f64 = f64::from_bits(0x395c_1cd1_2902_4e09);

/// Odd polynomial for sin on `[-π/2, π/2]`: `sin(r) ≈ r + r^3 P(r^2)`.
pub static SIN_POLY: [f64; 7] = [
    f64::from_bits(0xbfc5_5555_5555_547b),
    f64::from_bits(0x3f81_1111_1110_8a4d),
    f64::from_bits(0xbf2a_01a0_1993_6f27),
    f64::from_bits(0x3ec7_1de3_7a97_d93e),
    f64::from_bits(0xbe5a_e633_9199_87c6),
    f64::from_bits(0x3de6_0e27_7ae0_7cec),
    f64::from_bits(0xbd69_e954_0300_a100),
];
