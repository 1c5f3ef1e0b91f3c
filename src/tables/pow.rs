//! Tables for pow.
//!
//! Single precision evaluates `log2(x)` in double precision scaled by
//! `N = 32`, so that `y log2(x)` comes out in units of `1/N` ready for the
//! exp2 table.
//!
//! Double precision needs `log(x)` to about 68 bits. Each subinterval stores
//! `log(c)` as a head and a tail, and the exponential reuses the shared
//! `2^(i/N)` table with a per-entry correction.

pub const POWF_LOG2_TABLE_BITS: u32 = 5;
pub const POWF_EXP2_TABLE_BITS: u32 = 5;
pub const POWF_LOG2_LEN: usize = 1 << POWF_LOG2_TABLE_BITS;
pub const POWF_EXP2_LEN: usize = 1 << POWF_EXP2_TABLE_BITS;

/// `(1/c, N log2(c))` per subinterval of `[OFF, 2 OFF)`.
pub static POWF_LOG2_TABLE: [(f64, f64); POWF_LOG2_LEN] = [
    (f64::from_bits(0x3ff6_4898_9058_2816), f64::from_bits(0xc02e_960f_97b2_2702)),
    (f64::from_bits(0x3ff5_cf19_b35e_3472), f64::from_bits(0xc02c_9934_06cd_4db6)),
    (f64::from_bits(0x3ff5_5aac_0e95_6d65), f64::from_bits(0xc02a_a711_d9a7_d0f3)),
    (f64::from_bits(0x3ff4_eb00_2297_7e01), f64::from_bits(0xc028_bf37_bacd_ce9b)),
    (f64::from_bits(0x3ff4_7fcc_cda1_dd1f), f64::from_bits(0xc026_e13b_3519_946e)),
    (f64::from_bits(0x3ff4_18ce_abab_68c1), f64::from_bits(0xc025_0cb8_281e_4089)),
    (f64::from_bits(0x3ff3_b5c7_88f1_edb3), f64::from_bits(0xc023_4150_4a23_7e2b)),
    (f64::from_bits(0x3ff3_567d_e48e_9c9a), f64::from_bits(0xc021_7eaa_b624_ffbb)),
    (f64::from_bits(0x3ff2_fabc_80fd_19ba), f64::from_bits(0xc01f_88e7_08f8_c853)),
    (f64::from_bits(0x3ff2_a252_00ce_536b), f64::from_bits(0xc01c_24b6_da11_3914)),
    (f64::from_bits(0x3ff2_4d10_8e01_52e3), f64::from_bits(0xc018_d02e_e397_cb1d)),
    (f64::from_bits(0x3ff1_facd_8ab2_fbe1), f64::from_bits(0xc015_8ac1_2234_08b3)),
    (f64::from_bits(0x3ff1_ab61_4a03_efdf), f64::from_bits(0xc012_53e6_fd19_0e89)),
    (f64::from_bits(0x3ff1_5ea6_d03a_f9ff), f64::from_bits(0xc00e_5641_882c_12ff)),
    (f64::from_bits(0x3ff1_147b_994b_b776), f64::from_bits(0xc008_1fea_7129_26f7)),
    (f64::from_bits(0x3ff0_ccbf_6505_93aa), f64::from_bits(0xc002_03e2_40de_64a3)),
    (f64::from_bits(0x3ff0_8754_0847_7302), f64::from_bits(0xbff8_029b_86a7_8281)),
    (f64::from_bits(0x3ff0_441d_42a9_3328), f64::from_bits(0xbfe8_5d71_3190_fb90)),
    (f64::from_bits(0x3ff0_0000_0000_0000), f64::from_bits(0x0000_0000_0000_0000)),
    (f64::from_bits(0x3fef_1d00_6c85_5e86), f64::from_bits(0x3ff4_c1cc_0731_2997)),
    (f64::from_bits(0x3fee_28c3_341a_a301), f64::from_bits(0x4005_e184_8cce_c948)),
    (f64::from_bits(0x3fed_4bdf_9aa6_4747), f64::from_bits(0x4010_4cfc_b7f1_196f)),
    (f64::from_bits(0x3fec_7b45_a24e_5803), f64::from_bits(0x4015_8281_3d46_3c21)),
    (f64::from_bits(0x3feb_b5f5_eb2e_d60a), f64::from_bits(0x401a_936f_a687_60cc)),
    (f64::from_bits(0x3fea_fb0b_ff8f_e6b4), f64::from_bits(0x401f_81bc_31d6_cc4e)),
    (f64::from_bits(0x3fea_49ba_df7a_b1f5), f64::from_bits(0x4022_279a_09fa_e6b1)),
    (f64::from_bits(0x3fe9_a14a_111f_c4c9), f64::from_bits(0x4024_7ec0_b6df_5526)),
    (f64::from_bits(0x3fe9_0113_1f5b_2fdc), f64::from_bits(0x4026_c717_6228_0f10)),
    (f64::from_bits(0x3fe8_687f_73f6_d865), f64::from_bits(0x4029_0155_0707_98da)),
    (f64::from_bits(0x3fe7_d706_7eb7_7986), f64::from_bits(0x402b_2e23_b1d3_068c)),
    (f64::from_bits(0x3fe7_4c2c_1cf9_7b65), f64::from_bits(0x402d_4e21_b0da_a86a)),
    (f64::from_bits(0x3fe6_c77f_37cf_f2a1), f64::from_bits(0x402f_61e2_a2f6_7f3f)),
];

/// `N log2(1 + r)` as `((p0 r + p1) r + p2) r + p3` times `r`.
pub static POWF_LOG2_POLY: [f64; 4] = [
    f64::from_bits(0xc026_ff5d_aa3b_3d7c),
    f64::from_bits(0x402e_c81d_03c0_1aeb),
    f64::from_bits(0xc037_1547_bb43_f101),
    f64::from_bits(0x4047_1547_64a8_15cb),
];

/// `bits(2^(i/N)) - (i << 47)`, the N = 32 analogue of the exp table.
pub static POWF_EXP2_TABLE: [u64; POWF_EXP2_LEN] = [
    0x3ff0_0000_0000_0000, 0x3fef_d9b0_d315_8574, 0x3fef_b558_6cf9_890f, 0x3fef_9301_d012_5b51,
    0x3fef_72b8_3c7d_517b, 0x3fef_5487_3168_b9aa, 0x3fef_387a_6e75_6238, 0x3fef_1e9d_f51f_dee1,
    0x3fef_06fe_0a31_b715, 0x3fee_f1a7_373a_a9cb, 0x3fee_dea6_4c12_3422, 0x3fee_ce08_6061_892d,
    0x3fee_bfda_d536_2a27, 0x3fee_b42b_569d_4f82, 0x3fee_ab07_dd48_5429, 0x3fee_a47e_b03a_5585,
    0x3fee_a09e_667f_3bcd, 0x3fee_9f75_e8ec_5f74, 0x3fee_a114_73eb_0187, 0x3fee_a589_994c_ce13,
    0x3fee_ace5_422a_a0db, 0x3fee_b737_b0cd_c5e5, 0x3fee_c491_82a3_f090, 0x3fee_d503_b23e_255d,
    0x3fee_e89f_995a_d3ad, 0x3fee_ff76_f2fb_5e47, 0x3fef_199b_dd85_529c, 0x3fef_3720_dcef_9069,
    0x3fef_5818_dcfb_a487, 0x3fef_7c97_337b_9b5f, 0x3fef_a4af_a2a4_90da, 0x3fef_d076_5b6e_4540,
];

/// `2^(r/N) - 1 ≈ ((e0 r + e1) r + e2) r` for `|r| <= 1/2`.
pub static POWF_EXP2_POLY: [f64; 3] = [
    f64::from_bits(0x3ebc_6af8_4b91_2394),
    f64::from_bits(0x3f2e_bfce_50fa_c4f3),
    f64::from_bits(0x3f96_2e42_ff0c_52d6),
];

/// log2 of the number of subintervals in the double-precision log table.
pub const POW_LOG_TABLE_BITS: u32 = 7;
pub const POW_LOG_LEN: usize = 1 << POW_LOG_TABLE_BITS;

/// `x = 2^k z` with `z` in `[OFF, 2 OFF)`; the top 7 mantissa bits of
/// `bits(x) - OFF` select the subinterval.
pub const POW_LOG_OFF: u64 = 0x3fe6_9555_0000_0000;

/// `ln 2` split so that `k LN2_HI` is exact for every exponent `k`.
pub const POW_LN2_HI: f64 = f64::from_bits(0x3fe6_2e42_fefa_3800);
pub const POW_LN2_LO: f64 = f64::from_bits(0x3d2e_f357_93c7_6730);

/// `1/c` per subinterval.
///
/// Each entry is a multiple of `2^-7` (above 1) or `2^-8` (below 1), so
/// `z/c - 1` is exact when formed with one fma. The subinterval holding 1.0
/// uses `c = 1`.
pub static POW_LOG_INVC: [f64; POW_LOG_LEN] = [
    f64::from_bits(0x3ff6_a000_0000_0000),
    f64::from_bits(0x3ff6_8000_0000_0000),
    f64::from_bits(0x3ff6_6000_0000_0000),
    f64::from_bits(0x3ff6_4000_0000_0000),
    f64::from_bits(0x3ff6_2000_0000_0000),
    f64::from_bits(0x3ff6_0000_0000_0000),
    f64::from_bits(0x3ff5_e000_0000_0000),
    f64::from_bits(0x3ff5_c000_0000_0000),
    f64::from_bits(0x3ff5_a000_0000_0000),
    f64::from_bits(0x3ff5_8000_0000_0000),
    f64::from_bits(0x3ff5_6000_0000_0000),
    f64::from_bits(0x3ff5_6000_0000_0000),
    f64::from_bits(0x3ff5_4000_0000_0000),
    f64::from_bits(0x3ff5_2000_0000_0000),
    f64::from_bits(0x3ff5_0000_0000_0000),
    f64::from_bits(0x3ff4_e000_0000_0000),
    f64::from_bits(0x3ff4_c000_0000_0000),
    f64::from_bits(0x3ff4_a000_0000_0000),
    f64::from_bits(0x3ff4_a000_0000_0000),
    f64::from_bits(0x3ff4_8000_0000_0000),
    f64::from_bits(0x3ff4_6000_0000_0000),
    f64::from_bits(0x3ff4_4000_0000_0000),
    f64::from_bits(0x3ff4_2000_0000_0000),
    f64::from_bits(0x3ff4_0000_0000_0000),
    f64::from_bits(0x3ff4_0000_0000_0000),
    f64::from_bits(0x3ff3_e000_0000_0000),
    f64::from_bits(0x3ff3_c000_0000_0000),
    f64::from_bits(0x3ff3_a000_0000_0000),
    f64::from_bits(0x3ff3_a000_0000_0000),
    f64::from_bits(0x3ff3_8000_0000_0000),
    f64::from_bits(0x3ff3_6000_0000_0000),
    f64::from_bits(0x3ff3_4000_0000_0000),
    f64::from_bits(0x3ff3_4000_0000_0000),
    f64::from_bits(0x3ff3_2000_0000_0000),
    f64::from_bits(0x3ff3_0000_0000_0000),
    f64::from_bits(0x3ff3_0000_0000_0000),
    f64::from_bits(0x3ff2_e000_0000_0000),
    f64::from_bits(0x3ff2_c000_0000_0000),
    f64::from_bits(0x3ff2_c000_0000_0000),
    f64::from_bits(0x3ff2_a000_0000_0000),
    f64::from_bits(0x3ff2_8000_0000_0000),
    f64::from_bits(0x3ff2_6000_0000_0000),
    f64::from_bits(0x3ff2_6000_0000_0000),
    f64::from_bits(0x3ff2_4000_0000_0000),
    f64::from_bits(0x3ff2_4000_0000_0000),
    f64::from_bits(0x3ff2_2000_0000_0000),
    f64::from_bits(0x3ff2_0000_0000_0000),
    f64::from_bits(0x3ff2_0000_0000_0000),
    f64::from_bits(0x3ff1_e000_0000_0000),
    f64::from_bits(0x3ff1_c000_0000_0000),
    f64::from_bits(0x3ff1_c000_0000_0000),
    f64::from_bits(0x3ff1_a000_0000_0000),
    f64::from_bits(0x3ff1_a000_0000_0000),
    f64::from_bits(0x3ff1_8000_0000_0000),
    f64::from_bits(0x3ff1_6000_0000_0000),
    f64::from_bits(0x3ff1_6000_0000_0000),
    f64::from_bits(0x3ff1_4000_0000_0000),
    f64::from_bits(0x3ff1_4000_0000_0000),
    f64::from_bits(0x3ff1_2000_0000_0000),
    f64::from_bits(0x3ff1_0000_0000_0000),
    f64::from_bits(0x3ff1_0000_0000_0000),
    f64::from_bits(0x3ff0_e000_0000_0000),
    f64::from_bits(0x3ff0_e000_0000_0000),
    f64::from_bits(0x3ff0_c000_0000_0000),
    f64::from_bits(0x3ff0_c000_0000_0000),
    f64::from_bits(0x3ff0_a000_0000_0000),
    f64::from_bits(0x3ff0_a000_0000_0000),
    f64::from_bits(0x3ff0_8000_0000_0000),
    f64::from_bits(0x3ff0_8000_0000_0000),
    f64::from_bits(0x3ff0_6000_0000_0000),
    f64::from_bits(0x3ff0_4000_0000_0000),
    f64::from_bits(0x3ff0_4000_0000_0000),
    f64::from_bits(0x3ff0_2000_0000_0000),
    f64::from_bits(0x3ff0_2000_0000_0000),
    f64::from_bits(0x3ff0_0000_0000_0000),
    f64::from_bits(0x3ff0_0000_0000_0000),
    f64::from_bits(0x3fef_c000_0000_0000),
    f64::from_bits(0x3fef_8000_0000_0000),
    f64::from_bits(0x3fef_4000_0000_0000),
    f64::from_bits(0x3fef_0000_0000_0000),
    f64::from_bits(0x3fee_c000_0000_0000),
    f64::from_bits(0x3fee_8000_0000_0000),
    f64::from_bits(0x3fee_4000_0000_0000),
    f64::from_bits(0x3fee_2000_0000_0000),
    f64::from_bits(0x3fed_e000_0000_0000),
    f64::from_bits(0x3fed_a000_0000_0000),
    f64::from_bits(0x3fed_6000_0000_0000),
    f64::from_bits(0x3fed_4000_0000_0000),
    f64::from_bits(0x3fed_0000_0000_0000),
    f64::from_bits(0x3fec_c000_0000_0000),
    f64::from_bits(0x3fec_a000_0000_0000),
    f64::from_bits(0x3fec_6000_0000_0000),
    f64::from_bits(0x3fec_4000_0000_0000),
    f64::from_bits(0x3fec_0000_0000_0000),
    f64::from_bits(0x3feb_e000_0000_0000),
    f64::from_bits(0x3feb_a000_0000_0000),
    f64::from_bits(0x3feb_8000_0000_0000),
    f64::from_bits(0x3feb_4000_0000_0000),
    f64::from_bits(0x3feb_2000_0000_0000),
    f64::from_bits(0x3fea_e000_0000_0000),
    f64::from_bits(0x3fea_c000_0000_0000),
    f64::from_bits(0x3fea_a000_0000_0000),
    f64::from_bits(0x3fea_6000_0000_0000),
    f64::from_bits(0x3fea_4000_0000_0000),
    f64::from_bits(0x3fea_0000_0000_0000),
    f64::from_bits(0x3fe9_e000_0000_0000),
    f64::from_bits(0x3fe9_c000_0000_0000),
    f64::from_bits(0x3fe9_a000_0000_0000),
    f64::from_bits(0x3fe9_6000_0000_0000),
    f64::from_bits(0x3fe9_4000_0000_0000),
    f64::from_bits(0x3fe9_2000_0000_0000),
    f64::from_bits(0x3fe9_0000_0000_0000),
    f64::from_bits(0x3fe8_c000_0000_0000),
    f64::from_bits(0x3fe8_a000_0000_0000),
    f64::from_bits(0x3fe8_8000_0000_0000),
    f64::from_bits(0x3fe8_6000_0000_0000),
    f64::from_bits(0x3fe8_4000_0000_0000),
    f64::from_bits(0x3fe8_2000_0000_0000),
    f64::from_bits(0x3fe7_e000_0000_0000),
    f64::from_bits(0x3fe7_c000_0000_0000),
    f64::from_bits(0x3fe7_a000_0000_0000),
    f64::from_bits(0x3fe7_8000_0000_0000),
    f64::from_bits(0x3fe7_6000_0000_0000),
    f64::from_bits(0x3fe7_4000_0000_0000),
    f64::from_bits(0x3fe7_2000_0000_0000),
    f64::from_bits(0x3fe7_0000_0000_0000),
    f64::from_bits(0x3fe6_e000_0000_0000),
    f64::from_bits(0x3fe6_c000_0000_0000),
];

/// Head of `ln(c)`, a multiple of `2^-42` so `k LN2_HI + logc` is exact.
pub static POW_LOG_LOGC: [f64; POW_LOG_LEN] = [
    f64::from_bits(0xbfd6_2c82_f2b9_c000),
    f64::from_bits(0xbfd5_d1bd_bf58_1000),
    f64::from_bits(0xbfd5_7677_1745_6000),
    f64::from_bits(0xbfd5_1aad_872e_0000),
    f64::from_bits(0xbfd4_be5f_9577_8000),
    f64::from_bits(0xbfd4_618b_c21c_6000),
    f64::from_bits(0xbfd4_0430_8686_a000),
    f64::from_bits(0xbfd3_a64c_5569_4000),
    f64::from_bits(0xbfd3_47dd_9a98_8000),
    f64::from_bits(0xbfd2_e8e2_bae1_2000),
    f64::from_bits(0xbfd2_895a_13de_8000),
    f64::from_bits(0xbfd2_895a_13de_8000),
    f64::from_bits(0xbfd2_2941_fbcf_8000),
    f64::from_bits(0xbfd1_c898_c169_a000),
    f64::from_bits(0xbfd1_675c_abab_a000),
    f64::from_bits(0xbfd1_058b_f9ae_5000),
    f64::from_bits(0xbfd0_a324_e273_9000),
    f64::from_bits(0xbfd0_4025_94b4_d000),
    f64::from_bits(0xbfd0_4025_94b4_d000),
    f64::from_bits(0xbfcf_b918_6d5e_4000),
    f64::from_bits(0xbfce_f0ad_cbdc_6000),
    f64::from_bits(0xbfce_2707_6e2b_0000),
    f64::from_bits(0xbfcd_5c21_6b4f_c000),
    f64::from_bits(0xbfcc_8ff7_c79a_a000),
    f64::from_bits(0xbfcc_8ff7_c79a_a000),
    f64::from_bits(0xbfcb_c286_742d_8000),
    f64::from_bits(0xbfca_f3c9_4e80_c000),
    f64::from_bits(0xbfca_23bc_1fe2_c000),
    f64::from_bits(0xbfca_23bc_1fe2_c000),
    f64::from_bits(0xbfc9_525a_9cf4_6000),
    f64::from_bits(0xbfc8_7fa0_6520_c000),
    f64::from_bits(0xbfc7_ab89_0210_e000),
    f64::from_bits(0xbfc7_ab89_0210_e000),
    f64::from_bits(0xbfc6_d60f_e719_e000),
    f64::from_bits(0xbfc5_ff30_70a7_a000),
    f64::from_bits(0xbfc5_ff30_70a7_a000),
    f64::from_bits(0xbfc5_26e5_e3a1_c000),
    f64::from_bits(0xbfc4_4d2b_6ccb_8000),
    f64::from_bits(0xbfc4_4d2b_6ccb_8000),
    f64::from_bits(0xbfc3_71fc_201e_8000),
    f64::from_bits(0xbfc2_9552_f820_0000),
    f64::from_bits(0xbfc1_b72a_d52f_6000),
    f64::from_bits(0xbfc1_b72a_d52f_6000),
    f64::from_bits(0xbfc0_d77e_7cd0_8000),
    f64::from_bits(0xbfc0_d77e_7cd0_8000),
    f64::from_bits(0xbfbf_ec91_31dc_0000),
    f64::from_bits(0xbfbe_2707_6e2b_0000),
    f64::from_bits(0xbfbe_2707_6e2b_0000),
    f64::from_bits(0xbfbc_5e54_8f5b_c000),
    f64::from_bits(0xbfba_926d_3a4a_c000),
    f64::from_bits(0xbfba_926d_3a4a_c000),
    f64::from_bits(0xbfb8_c345_d631_8000),
    f64::from_bits(0xbfb8_c345_d631_8000),
    f64::from_bits(0xbfb6_f0d2_8ae5_8000),
    f64::from_bits(0xbfb5_1b07_3f06_0000),
    f64::from_bits(0xbfb5_1b07_3f06_0000),
    f64::from_bits(0xbfb3_41d7_961b_c000),
    f64::from_bits(0xbfb3_41d7_961b_c000),
    f64::from_bits(0xbfb1_6536_eea3_8000),
    f64::from_bits(0xbfaf_0a30_c011_8000),
    f64::from_bits(0xbfaf_0a30_c011_8000),
    f64::from_bits(0xbfab_42dd_7119_8000),
    f64::from_bits(0xbfab_42dd_7119_8000),
    f64::from_bits(0xbfa7_7458_f633_0000),
    f64::from_bits(0xbfa7_7458_f633_0000),
    f64::from_bits(0xbfa3_9e87_b9fe_8000),
    f64::from_bits(0xbfa3_9e87_b9fe_8000),
    f64::from_bits(0xbf9f_829b_0e78_0000),
    f64::from_bits(0xbf9f_829b_0e78_0000),
    f64::from_bits(0xbf97_b91b_07d6_0000),
    f64::from_bits(0xbf8f_c0a8_b0fc_0000),
    f64::from_bits(0xbf8f_c0a8_b0fc_0000),
    f64::from_bits(0xbf7f_e02a_6b10_0000),
    f64::from_bits(0xbf7f_e02a_6b10_0000),
    f64::from_bits(0x0000_0000_0000_0000),
    f64::from_bits(0x0000_0000_0000_0000),
    f64::from_bits(0x3f80_1015_7588_0000),
    f64::from_bits(0x3f90_2056_5893_0000),
    f64::from_bits(0x3f98_4925_28c9_0000),
    f64::from_bits(0x3fa0_415d_89e7_8000),
    f64::from_bits(0x3fa4_66ae_d42e_0000),
    f64::from_bits(0x3fa8_94aa_149f_8000),
    f64::from_bits(0x3fac_cb73_cddd_8000),
    f64::from_bits(0x3fae_ea31_c006_8000),
    f64::from_bits(0x3fb1_973b_d146_4000),
    f64::from_bits(0x3fb3_bdf5_a7d2_0000),
    f64::from_bits(0x3fb5_e95a_4d97_8000),
    f64::from_bits(0x3fb7_00d3_0aea_c000),
    f64::from_bits(0x3fb9_335e_5d59_4000),
    f64::from_bits(0x3fbb_6ac8_8dad_4000),
    f64::from_bits(0x3fbc_8858_01bc_4000),
    f64::from_bits(0x3fbe_c739_830a_0000),
    f64::from_bits(0x3fbf_e891_39db_c000),
    f64::from_bits(0x3fc1_178e_8227_e000),
    f64::from_bits(0x3fc1_aa2b_7e24_0000),
    f64::from_bits(0x3fc2_d161_0c86_8000),
    f64::from_bits(0x3fc3_65fc_b015_a000),
    f64::from_bits(0x3fc4_913d_8333_c000),
    f64::from_bits(0x3fc5_27e5_e4a1_c000),
    f64::from_bits(0x3fc6_574e_be8c_2000),
    f64::from_bits(0x3fc6_f012_8b75_6000),
    f64::from_bits(0x3fc7_898d_8544_4000),
    f64::from_bits(0x3fc8_beaf_eb39_0000),
    f64::from_bits(0x3fc9_5a5a_dcf7_0000),
    f64::from_bits(0x3fca_93ed_3c8a_e000),
    f64::from_bits(0x3fcb_31d8_575b_c000),
    f64::from_bits(0x3fcb_d087_383b_e000),
    f64::from_bits(0x3fcc_6ffb_c6f0_0000),
    f64::from_bits(0x3fcd_b13d_b0d4_8000),
    f64::from_bits(0x3fce_530e_ffe7_2000),
    f64::from_bits(0x3fce_f5ad_e4dd_0000),
    f64::from_bits(0x3fcf_991c_6cb3_c000),
    f64::from_bits(0x3fd0_7138_604d_6000),
    f64::from_bits(0x3fd0_c42d_6761_6000),
    f64::from_bits(0x3fd1_178e_8227_e000),
    f64::from_bits(0x3fd1_6b5c_cbad_0000),
    f64::from_bits(0x3fd1_bf99_635a_7000),
    f64::from_bits(0x3fd2_1445_6d0e_c000),
    f64::from_bits(0x3fd2_bef0_7cdc_9000),
    f64::from_bits(0x3fd3_14f1_e1d3_6000),
    f64::from_bits(0x3fd3_6b67_76be_1000),
    f64::from_bits(0x3fd3_c252_7733_3000),
    f64::from_bits(0x3fd4_19b4_23d5_f000),
    f64::from_bits(0x3fd4_718d_c271_c000),
    f64::from_bits(0x3fd4_c9e0_9e17_3000),
    f64::from_bits(0x3fd5_22ae_0738_a000),
    f64::from_bits(0x3fd5_7bf7_53c8_d000),
    f64::from_bits(0x3fd5_d5bd_df59_6000),
];

/// `ln(c) - logc`.
pub static POW_LOG_LOGCTAIL: [f64; POW_LOG_LEN] = [
    f64::from_bits(0xbd3e_54bd_bd7c_8a98),
    f64::from_bits(0x3d38_d6bd_c9c7_c238),
    f64::from_bits(0x3d36_4ead_9524_d7ca),
    f64::from_bits(0x3d3f_4bd8_db0a_7cc1),
    f64::from_bits(0x3d3d_7c92_cd9a_d824),
    f64::from_bits(0x3d13_d82f_484c_84cc),
    f64::from_bits(0xbd3f_8ef4_3049_f7d3),
    f64::from_bits(0xbd37_a71c_bcd7_35d0),
    f64::from_bits(0x3d25_594d_d4c5_8092),
    f64::from_bits(0x3d26_7b1e_99b7_2bd8),
    f64::from_bits(0xbd3a_8d7a_d24c_13f0),
    f64::from_bits(0xbd3a_8d7a_d24c_13f0),
    f64::from_bits(0x3d3a_6976_f5eb_0963),
    f64::from_bits(0x3d38_1410_e5c6_2aff),
    f64::from_bits(0xbd38_380e_731f_55c4),
    f64::from_bits(0x3d34_ab9d_817d_52cd),
    f64::from_bits(0xbd0c_6bee_7ef4_030e),
    f64::from_bits(0xbcf0_36b8_9ef4_2d7f),
    f64::from_bits(0xbcf0_36b8_9ef4_2d7f),
    f64::from_bits(0x3d0d_572a_ab99_3c87),
    f64::from_bits(0x3d2b_26b7_9c86_af24),
    f64::from_bits(0x3d3a_342c_2af0_003c),
    f64::from_bits(0x3d21_ba91_bbca_681b),
    f64::from_bits(0x3d27_794f_689f_8434),
    f64::from_bits(0x3d27_794f_689f_8434),
    f64::from_bits(0xbd39_ac53_f39d_121c),
    f64::from_bits(0x3cba_4e63_3fcd_9066),
    f64::from_bits(0x3d35_39cd_91dc_9f0b),
    f64::from_bits(0x3d35_39cd_91dc_9f0b),
    f64::from_bits(0x3d32_9713_7d9f_158f),
    f64::from_bits(0xbd32_2120_4012_02fc),
    f64::from_bits(0x3d2b_db90_7253_4a58),
    f64::from_bits(0x3d2b_db90_7253_4a58),
    f64::from_bits(0x3d3b_c6e5_5713_4767),
    f64::from_bits(0x3d38_586f_183b_ebf2),
    f64::from_bits(0x3d38_586f_183b_ebf2),
    f64::from_bits(0x3d37_90ba_37fc_5238),
    f64::from_bits(0x3d17_0cc1_6135_783c),
    f64::from_bits(0x3d17_0cc1_6135_783c),
    f64::from_bits(0xbd3e_e877_9b2d_8abc),
    f64::from_bits(0x3d35_b967_f447_1dfc),
    f64::from_bits(0xbd2e_80a4_1811_a396),
    f64::from_bits(0xbd2e_80a4_1811_a396),
    f64::from_bits(0xbd3c_b2cd_2ee2_f482),
    f64::from_bits(0xbd3c_b2cd_2ee2_f482),
    f64::from_bits(0x3d35_4555_d1ae_6607),
    f64::from_bits(0x3d2a_342c_2af0_003c),
    f64::from_bits(0x3d2a_342c_2af0_003c),
    f64::from_bits(0xbd1d_0c57_585f_be06),
    f64::from_bits(0xbd35_6365_0bd2_2a9c),
    f64::from_bits(0xbd35_6365_0bd2_2a9c),
    f64::from_bits(0xbd3b_20f5_acb4_2a66),
    f64::from_bits(0xbd3b_20f5_acb4_2a66),
    f64::from_bits(0x3d34_b464_1b66_4613),
    f64::from_bits(0xbd38_3f69_278e_686a),
    f64::from_bits(0xbd38_3f69_278e_686a),
    f64::from_bits(0xbd31_d092_9983_7610),
    f64::from_bits(0xbd31_d092_9983_7610),
    f64::from_bits(0x3d14_7c5e_768f_a309),
    f64::from_bits(0x3d2d_599e_8336_8e91),
    f64::from_bits(0x3d2d_599e_8336_8e91),
    f64::from_bits(0x3d1c_827a_e5d6_704c),
    f64::from_bits(0x3d1c_827a_e5d6_704c),
    f64::from_bits(0x3d31_81dc_e586_af09),
    f64::from_bits(0x3d31_81dc_e586_af09),
    f64::from_bits(0xbd3e_afd4_80ad_9015),
    f64::from_bits(0xbd3e_afd4_80ad_9015),
    f64::from_bits(0xbd29_8026_7c7e_09e4),
    f64::from_bits(0xbd29_8026_7c7e_09e4),
    f64::from_bits(0x3d33_b955_b602_ace4),
    f64::from_bits(0xbcdf_1e7c_f6d3_a69c),
    f64::from_bits(0xbcdf_1e7c_f6d3_a69c),
    f64::from_bits(0xbd19_e23f_0dda_40e4),
    f64::from_bits(0xbd19_e23f_0dda_40e4),
    f64::from_bits(0x0000_0000_0000_0000),
    f64::from_bits(0x0000_0000_0000_0000),
    f64::from_bits(0x3d3b_ce25_1998_b506),
    f64::from_bits(0x3d36_11d2_7c8e_8417),
    f64::from_bits(0xbd2a_a0ba_325a_0c34),
    f64::from_bits(0xbd3d_ddc7_f461_c516),
    f64::from_bits(0xbd2c_1673_75bd_fd28),
    f64::from_bits(0x3d39_a19a_8be9_7661),
    f64::from_bits(0x3d39_65c3_6e09_f5fe),
    f64::from_bits(0x3d3c_3dd8_3606_d891),
    f64::from_bits(0x3d35_66d1_54f9_30b3),
    f64::from_bits(0xbd31_9bd0_ad12_5895),
    f64::from_bits(0x3d31_cb7c_e1d1_7171),
    f64::from_bits(0x3cec_1e8d_a99d_ed32),
    f64::from_bits(0x3d23_115c_3abd_47da),
    f64::from_bits(0x3d3b_1bdf_f502_25c7),
    f64::from_bits(0x3d26_46d1_c65a_acd3),
    f64::from_bits(0x3d31_1fcb_a80c_dd10),
    f64::from_bits(0x3d35_6594_d82f_7a82),
    f64::from_bits(0x3d21_ef78_ce2d_07f2),
    f64::from_bits(0xbd31_ac38_dde3_b366),
    f64::from_bits(0x3d03_9d6c_cb81_b4a1),
    f64::from_bits(0xbd3f_d3a0_afb9_691b),
    f64::from_bits(0xbd35_3e43_5581_24c4),
    f64::from_bits(0xbd34_e60b_8d4b_411d),
    f64::from_bits(0xbd39_8c1d_34f0_f462),
    f64::from_bits(0x3d35_7739_0d31_ef0f),
    f64::from_bits(0x3d38_e67b_e3db_af3f),
    f64::from_bits(0xbd07_3d54_aae9_2cd1),
    f64::from_bits(0x3d07_f228_58a0_ff6f),
    f64::from_bits(0xbd28_7243_5056_2169),
    f64::from_bits(0x3d3c_794e_562a_63cb),
    f64::from_bits(0xbd2d_4bc4_5954_12b6),
    f64::from_bits(0x3d3e_e138_d3a6_9d43),
    f64::from_bits(0x3d32_806a_8475_27e6),
    f64::from_bits(0xbd3f_dbdb_b13f_7c18),
    f64::from_bits(0xbcca_2115_65bb_8e11),
    f64::from_bits(0xbd39_0d04_cd7c_c834),
    f64::from_bits(0xbd3e_7632_4e91_2b17),
    f64::from_bits(0x3d27_188b_163c_eae9),
    f64::from_bits(0x3d31_ef78_ce2d_07f2),
    f64::from_bits(0xbd32_3299_042d_74bf),
    f64::from_bits(0xbd31_ac89_575c_2125),
    f64::from_bits(0xbd3c_af04_28b7_28a3),
    f64::from_bits(0x3d2a_9cfa_4a50_04f4),
    f64::from_bits(0xbd28_e27a_d321_3cb8),
    f64::from_bits(0x3d11_6ecd_b0f1_77c8),
    f64::from_bits(0x3d18_3b54_b606_bd5c),
    f64::from_bits(0xbd3c_e379_226d_e3ec),
    f64::from_bits(0x3d30_6c18_fb4c_14c5),
    f64::from_bits(0xbd2e_2089_1b0a_d8a4),
    f64::from_bits(0x3d2e_be70_8164_c759),
    f64::from_bits(0x3d1f_aded_ee5d_40ef),
    f64::from_bits(0xbd0a_0b2a_08a4_65dc),
];

/// `log1p(r) - r` as `ar3 (A1 + r A2 + ar2 (A3 + r A4 + ar2 (A5 + r A6)))`
/// with `ar2 = A0 r^2`, `ar3 = A0 r^3` and `A0 = -1/2`.
///
/// Relative error below `2^-67` for `|r| <= 0x1.78p-8`.
pub static POW_LOG_POLY: [f64; 7] = [
    f64::from_bits(0xbfe0_0000_0000_0000),
    f64::from_bits(0xbfe5_5555_5555_5560),
    f64::from_bits(0x3fe0_0000_0000_0006),
    f64::from_bits(0x3fe9_9999_9959_554e),
    f64::from_bits(0xbfe5_5555_5529_a47a),
    f64::from_bits(0xbff2_495b_9b48_45e9),
    f64::from_bits(0x3ff0_002b_8b26_3fc3),
];

/// `2^(i/N) / s_i - 1`, where `s_i` is the double the shared exponential
/// table produces for index `i`.
pub static POW_EXP_TAIL: [f64; crate::tables::exp::EXP_TABLE_LEN] = [
    f64::from_bits(0x0000_0000_0000_0000),
    f64::from_bits(0x3c9b_3b4f_1a88_bf6e),
    f64::from_bits(0xbc71_6013_9cd8_dc5d),
    f64::from_bits(0xbc90_5e7a_1087_66d1),
    f64::from_bits(0x3c8c_d252_3567_f613),
    f64::from_bits(0xbc8b_ce80_23f9_8efa),
    f64::from_bits(0x3c60_f74e_61e6_c861),
    f64::from_bits(0x3c90_a3e4_5b33_d399),
    f64::from_bits(0x3c97_9aa6_5d83_7b6d),
    f64::from_bits(0x3c8e_b51a_92fd_effc),
    f64::from_bits(0x3c3e_be3d_702f_9cd1),
    f64::from_bits(0xbc6a_0334_8990_6e0b),
    f64::from_bits(0xbc95_5652_2a2f_bd0e),
    f64::from_bits(0xbc50_80ef_8c4e_ea55),
    f64::from_bits(0xbc91_c923_b9d5_f416),
    f64::from_bits(0x3c80_d3e3_e95c_55af),
    f64::from_bits(0xbc80_1b15_eaa5_9348),
    f64::from_bits(0xbc8f_1ff0_55de_323d),
    f64::from_bits(0x3c8b_898c_3f13_53bf),
    f64::from_bits(0xbc96_d99c_7611_eb26),
    f64::from_bits(0x3c9a_ecf7_3e3a_2f60),
    f64::from_bits(0xbc8f_e782_cb86_389d),
    f64::from_bits(0x3c8a_6f41_44a6_c38d),
    f64::from_bits(0x3c80_7a05_b0e4_047d),
    f64::from_bits(0x3c96_8efd_e3a8_a894),
    f64::from_bits(0x3c87_5e18_f274_487d),
    f64::from_bits(0x3c80_472b_981f_e7f2),
    f64::from_bits(0xbc96_b87b_3f71_085e),
    f64::from_bits(0x3c82_f7e1_6d09_ab31),
    f64::from_bits(0xbc3d_219b_1a6f_bffa),
    f64::from_bits(0x3c8b_3782_720c_0ab4),
    f64::from_bits(0x3c6e_1492_89ce_cb8f),
    f64::from_bits(0x3c83_4d75_4db0_abb6),
    f64::from_bits(0x3c86_4201_e2ac_744c),
    f64::from_bits(0x3c8f_dd39_5dd3_f84a),
    f64::from_bits(0xbc86_a380_3b8e_5b04),
    f64::from_bits(0xbc92_4aed_cc4b_5068),
    f64::from_bits(0xbc99_07f8_1b51_2d8e),
    f64::from_bits(0xbc71_d1e8_3e94_36d2),
    f64::from_bits(0xbc99_1919_b3ce_1b15),
    f64::from_bits(0x3c85_9f48_a72a_4c6d),
    f64::from_bits(0xbc93_1260_7a28_698a),
    f64::from_bits(0xbc58_a78f_4817_895b),
    f64::from_bits(0xbc7c_2c9b_6749_9a1b),
    f64::from_bits(0x3c43_63ed_60c2_ac11),
    f64::from_bits(0x3c96_6609_3b06_64ef),
    f64::from_bits(0x3c6e_cce1_daa1_0379),
    f64::from_bits(0x3c93_ff8e_3f0f_1230),
    f64::from_bits(0x3c76_90ce_bb7a_afb0),
    f64::from_bits(0x3c93_1dbd_eb54_e077),
    f64::from_bits(0xbc8f_9434_0071_a38e),
    f64::from_bits(0xbc87_decc_dc93_a349),
    f64::from_bits(0xbc78_dec6_bd0f_385f),
    f64::from_bits(0xbc86_1246_ec7b_5cf6),
    f64::from_bits(0x3c93_3505_18fd_d78e),
    f64::from_bits(0x3c7b_98b7_2f8a_9b05),
    f64::from_bits(0x3c90_63e1_e21c_5409),
    f64::from_bits(0x3c34_c785_5019_c6ea),
    f64::from_bits(0x3c94_32e6_2b64_c035),
    f64::from_bits(0xbc8c_e44a_6199_769f),
    f64::from_bits(0xbc8c_33c5_3bef_4da8),
    f64::from_bits(0xbc84_5378_892b_e9ae),
    f64::from_bits(0xbc93_cedd_7856_5858),
    f64::from_bits(0x3c57_10aa_807e_1964),
    f64::from_bits(0xbc93_b3ef_bf5e_2228),
    f64::from_bits(0xbc6a_12ad_8734_b982),
    f64::from_bits(0xbc63_67ef_b86d_a9ee),
    f64::from_bits(0xbc80_dc3d_54e0_8851),
    f64::from_bits(0xbc78_1f64_7e5a_3ecf),
    f64::from_bits(0xbc86_ee4a_c08b_7db0),
    f64::from_bits(0xbc86_1932_1e55_e68a),
    f64::from_bits(0x3c90_9ccb_5e09_d4d3),
    f64::from_bits(0xbc7b_32dc_b94d_a51d),
    f64::from_bits(0x3c94_ecfd_5467_c06b),
    f64::from_bits(0x3c65_ebe1_abd6_6c55),
    f64::from_bits(0xbc88_a1c5_2fb3_cf42),
    f64::from_bits(0xbc93_69b6_f13b_3734),
    f64::from_bits(0xbc80_5e84_3a19_ff1e),
    f64::from_bits(0xbc94_d450_d872_576e),
    f64::from_bits(0x3c90_ad67_5b0e_8a00),
    f64::from_bits(0x3c8d_b72f_c1f0_eab4),
    f64::from_bits(0xbc65_b660_9cc5_e7ff),
    f64::from_bits(0x3c7b_f683_59f3_5f44),
    f64::from_bits(0xbc93_091f_a71e_3d83),
    f64::from_bits(0xbc5d_a9b8_8b6c_1e29),
    f64::from_bits(0xbc6c_23f9_7c90_b959),
    f64::from_bits(0xbc92_4343_22f4_f9aa),
    f64::from_bits(0xbc85_ca6c_d766_8e4b),
    f64::from_bits(0x3c71_affc_2b91_ce27),
    f64::from_bits(0x3c6d_d235_e10a_73bb),
    f64::from_bits(0xbc87_c504_2262_2263),
    f64::from_bits(0x3c8b_1c86_e3e2_31d5),
    f64::from_bits(0xbc91_bbd1_d3bc_bb15),
    f64::from_bits(0x3c90_cc31_9cee_31d2),
    f64::from_bits(0x3c84_6984_6e73_5ab3),
    f64::from_bits(0xbc82_dfcd_978e_9db4),
    f64::from_bits(0x3c8c_1a77_92cb_3387),
    f64::from_bits(0xbc90_7b8f_4ad1_d9fa),
    f64::from_bits(0xbc55_c3d9_56dc_aeba),
    f64::from_bits(0xbc90_a40e_3da6_f640),
    f64::from_bits(0xbc68_d6f4_38ad_9334),
    f64::from_bits(0xbc91_eee2_6b58_8a35),
    f64::from_bits(0x3c74_ffd7_0a5f_ddcd),
    f64::from_bits(0xbc91_bdfb_fa92_98ac),
    f64::from_bits(0x3c73_6eae_30af_0cb3),
    f64::from_bits(0x3c8e_e332_5c9f_fd94),
    f64::from_bits(0x3c84_e08f_d109_59ac),
    f64::from_bits(0x3c63_cdaf_384e_1a67),
    f64::from_bits(0x3c67_6b2c_6c92_1968),
    f64::from_bits(0xbc80_8a18_83cc_b5d2),
    f64::from_bits(0xbc8f_ad5d_3fff_fa6f),
    f64::from_bits(0xbc90_0dae_3875_a949),
    f64::from_bits(0x3c74_a385_a63d_07a7),
    f64::from_bits(0xbc82_919e_2040_220f),
    f64::from_bits(0x3c8e_5a50_d5c1_92ac),
    f64::from_bits(0x3c84_3a59_ac01_6b4b),
    f64::from_bits(0xbc82_d521_07b4_3e1f),
    f64::from_bits(0xbc89_2ab9_3b47_0dc9),
    f64::from_bits(0x3c74_b604_603a_88d3),
    f64::from_bits(0x3c83_c5ec_519d_7271),
    f64::from_bits(0xbc8f_f712_8fd3_91f0),
    f64::from_bits(0xbc8d_ae98_e223_747d),
    f64::from_bits(0x3c8e_c3bc_41aa_2008),
    f64::from_bits(0x3c84_2b94_c3a9_eb32),
    f64::from_bits(0x3c8a_64a9_31d1_85ee),
    f64::from_bits(0xbc8e_37ba_e43b_e3ed),
    f64::from_bits(0x3c77_893b_4d91_cd9d),
    f64::from_bits(0x3c53_05c1_4160_cc89),
];

/// `e^r - 1 - r ≈ r^2 (C2 + C3 r) + r^4 (C4 + C5 r)`.
pub static POW_EXP_POLY: [f64; 4] = [
    f64::from_bits(0x3fe0_0000_0000_0000),
    f64::from_bits(0x3fc5_5555_5555_5555),
    f64::from_bits(0x3fa5_5555_5555_5555),
    f64::from_bits(0x3f81_1111_1111_1111),
];
