//! Logarithm table.

/// log2 of the number of table entries.
pub const LOG_TABLE_BITS: u32 = 7;

pub const LOG_TABLE_LEN: usize = 1 << LOG_TABLE_BITS;

/// Offset that centres the table subintervals around 1.0.
///
/// `x = 2^k z` with `z` in `[OFF, 2 OFF)`, where `OFF` is the bit pattern
/// below. The top 7 mantissa bits of `bits(x) - OFF` select the
/// subinterval.
pub const LOG_OFF: u64 = 0x3fe6_9009_0000_0000;

/// `1/c` and `ln(c)` for subinterval `i`.
///
/// `c` is near the centre of the subinterval and is chosen so that `ln(c)`
/// rounds to double with an error well below half an ulp. The subinterval
/// containing 1.0 uses `c = 1` exactly so that `log(1) = 0`.
pub static LOG_INVC: [f64; LOG_TABLE_LEN] = [
    f64::from_bits(0x3ff6_a08e_50d9_005f),
    f64::from_bits(0x3ff6_7fb0_2f48_0f0e),
    f64::from_bits(0x3ff6_6408_9bef_312a),
    f64::from_bits(0x3ff6_4075_a319_2f7c),
    f64::from_bits(0x3ff6_236e_d91a_43b9),
    f64::from_bits(0x3ff6_029c_9a18_c9db),
    f64::from_bits(0x3ff5_e8e7_49d7_b7c3),
    f64::from_bits(0x3ff5_cc17_1382_ca3b),
    f64::from_bits(0x3ff5_acff_a97c_5724),
    f64::from_bits(0x3ff5_8d11_852c_b548),
    f64::from_bits(0x3ff5_729f_a6d3_2b00),
    f64::from_bits(0x3ff5_5679_1558_5555),
    f64::from_bits(0x3ff5_36de_1e21_fa11),
    f64::from_bits(0x3ff5_1f95_d4e8_3795),
    f64::from_bits(0x3ff5_0362_538c_05ea),
    f64::from_bits(0x3ff4_e5aa_f9ee_fd01),
    f64::from_bits(0x3ff4_cc07_adcc_54a0),
    f64::from_bits(0x3ff4_b065_da93_12c8),
    f64::from_bits(0x3ff4_9368_f141_5e1a),
    f64::from_bits(0x3ff4_79f2_a840_e9d5),
    f64::from_bits(0x3ff4_6130_bb44_71c7),
    f64::from_bits(0x3ff4_479a_2b26_3ca9),
    f64::from_bits(0x3ff4_2bde_3dc7_9be7),
    f64::from_bits(0x3ff4_12ee_fdf1_601a),
    f64::from_bits(0x3ff3_faa7_7b35_39e1),
    f64::from_bits(0x3ff3_e1ee_09cf_ff0f),
    f64::from_bits(0x3ff3_c805_028c_cc69),
    f64::from_bits(0x3ff3_b1ae_82a8_fc9e),
    f64::from_bits(0x3ff3_9a66_2bb8_ed44),
    f64::from_bits(0x3ff3_82de_a38d_8af9),
    f64::from_bits(0x3ff3_6c0f_141a_9e25),
    f64::from_bits(0x3ff3_52d3_2b5d_d1e1),
    f64::from_bits(0x3ff3_3af0_9b46_6ef8),
    f64::from_bits(0x3ff3_23aa_199d_c524),
    f64::from_bits(0x3ff3_0e59_1ff0_3cbf),
    f64::from_bits(0x3ff2_f424_6b77_0b96),
    f64::from_bits(0x3ff2_e002_fd02_877b),
    f64::from_bits(0x3ff2_cace_18e5_119d),
    f64::from_bits(0x3ff2_b6bb_86de_95b5),
    f64::from_bits(0x3ff2_9eb1_9208_985b),
    f64::from_bits(0x3ff2_8879_88c2_cff8),
    f64::from_bits(0x3ff2_72dd_7ca0_43fa),
    f64::from_bits(0x3ff2_6001_4254_ee07),
    f64::from_bits(0x3ff2_4a59_31a3_d930),
    f64::from_bits(0x3ff2_34b2_a54d_bb2d),
    f64::from_bits(0x3ff2_1fab_bb00_03dc),
    f64::from_bits(0x3ff2_0923_5344_5f63),
    f64::from_bits(0x3ff1_f891_5170_a768),
    f64::from_bits(0x3ff1_e08e_5b97_3ffd),
    f64::from_bits(0x3ff1_d11e_5a77_dd01),
    f64::from_bits(0x3ff1_b91d_7970_acb6),
    f64::from_bits(0x3ff1_a9a2_e66f_e4a0),
    f64::from_bits(0x3ff1_956d_91e5_ad90),
    f64::from_bits(0x3ff1_7e9f_aeb6_6c28),
    f64::from_bits(0x3ff1_6d16_f22d_6303),
    f64::from_bits(0x3ff1_5de2_d3ef_abd1),
    f64::from_bits(0x3ff1_4730_cdef_84f3),
    f64::from_bits(0x3ff1_3327_dc5f_f0f7),
    f64::from_bits(0x3ff1_2629_7da8_a5a9),
    f64::from_bits(0x3ff1_0e54_725a_485d),
    f64::from_bits(0x3ff0_fc58_bd22_f52c),
    f64::from_bits(0x3ff0_ec18_22c3_0f0c),
    f64::from_bits(0x3ff0_dcdf_ea02_5695),
    f64::from_bits(0x3ff0_c6a9_5ba5_457c),
    f64::from_bits(0x3ff0_babd_c262_acc1),
    f64::from_bits(0x3ff0_a737_6ad9_93b8),
    f64::from_bits(0x3ff0_93a9_e387_5608),
    f64::from_bits(0x3ff0_84f8_3cbd_fee2),
    f64::from_bits(0x3ff0_72f8_089a_dfb3),
    f64::from_bits(0x3ff0_61a6_1afd_60ad),
    f64::from_bits(0x3ff0_537d_c97e_0984),
    f64::from_bits(0x3ff0_415a_2b65_c0cf),
    f64::from_bits(0x3ff0_2e8a_d9a5_408b),
    f64::from_bits(0x3ff0_2079_eecc_be53),
    f64::from_bits(0x3ff0_1094_c703_c5cd),
    f64::from_bits(0x3ff0_0000_0000_0000),
    f64::from_bits(0x3fef_c15a_0930_2689),
    f64::from_bits(0x3fef_81ec_2c3d_49f7),
    f64::from_bits(0x3fef_4435_2ef6_b93f),
    f64::from_bits(0x3fef_087d_838f_ee8c),
    f64::from_bits(0x3fee_ca39_c6ff_153d),
    f64::from_bits(0x3fee_8ffa_3f64_9558),
    f64::from_bits(0x3fee_57b9_9a84_c63f),
    f64::from_bits(0x3fee_1cb0_6c52_d97b),
    f64::from_bits(0x3fed_e7a7_ad8c_1c63),
    f64::from_bits(0x3fed_b012_ba62_bc71),
    f64::from_bits(0x3fed_7751_9137_4648),
    f64::from_bits(0x3fed_43a0_5160_22f4),
    f64::from_bits(0x3fed_0cf0_39fe_617b),
    f64::from_bits(0x3fec_db1f_28df_24f8),
    f64::from_bits(0x3fec_a5d2_d969_18ce),
    f64::from_bits(0x3fec_710c_e395_5553),
    f64::from_bits(0x3fec_418b_3af3_2796),
    f64::from_bits(0x3fec_0f98_adb6_369c),
    f64::from_bits(0x3feb_de93_23ce_87b7),
    f64::from_bits(0x3feb_af2e_5e09_ea78),
    f64::from_bits(0x3feb_7e13_f53e_5b1b),
    f64::from_bits(0x3feb_508b_197c_f05b),
    f64::from_bits(0x3feb_2256_d14c_ef47),
    f64::from_bits(0x3fea_f27e_f8ee_a509),
    f64::from_bits(0x3fea_c652_81a5_ab91),
    f64::from_bits(0x3fea_989c_310a_42d7),
    f64::from_bits(0x3fea_6a46_6061_6cd5),
    f64::from_bits(0x3fea_3f4d_3bfb_7e93),
    f64::from_bits(0x3fea_1781_8298_dc92),
    f64::from_bits(0x3fe9_ea5b_04d4_9c96),
    f64::from_bits(0x3fe9_c03c_2494_ca68),
    f64::from_bits(0x3fe9_99d8_5480_1061),
    f64::from_bits(0x3fe9_717f_9778_87cb),
    f64::from_bits(0x3fe9_4b4a_801b_780e),
    f64::from_bits(0x3fe9_22d6_7045_ce69),
    f64::from_bits(0x3fe8_f998_189d_1aa9),
    f64::from_bits(0x3fe8_d4ea_781c_dfc2),
    f64::from_bits(0x3fe8_ad0d_dba8_0999),
    f64::from_bits(0x3fe8_87d7_1d9e_5b79),
    f64::from_bits(0x3fe8_6226_e575_ace7),
    f64::from_bits(0x3fe8_3c45_6756_cc67),
    f64::from_bits(0x3fe8_1802_63bd_e1ce),
    f64::from_bits(0x3fe7_f55a_e71e_2b6a),
    f64::from_bits(0x3fe7_cf19_0988_f315),
    f64::from_bits(0x3fe7_ae6b_6e57_99d9),
    f64::from_bits(0x3fe7_8c9e_03d8_9a5d),
    f64::from_bits(0x3fe7_6642_42ff_63b5),
    f64::from_bits(0x3fe7_458d_6f16_efa6),
    f64::from_bits(0x3fe7_24fe_d576_f8b8),
    f64::from_bits(0x3fe7_0102_0d3b_b59e),
    f64::from_bits(0x3fe6_e424_3700_00c3),
    f64::from_bits(0x3fe6_c078_bc99_d3da),
];

pub static LOG_LOGC: [f64; LOG_TABLE_LEN] = [
    f64::from_bits(0xbfd6_2e15_8071_74c5),
    f64::from_bits(0xbfd5_d0da_b609_c7bb),
    f64::from_bits(0xbfd5_81ff_a8dd_f43e),
    f64::from_bits(0xbfd5_1bff_e2e3_d479),
    f64::from_bits(0xbfd4_c84d_04ae_89bb),
    f64::from_bits(0xbfd4_6924_54cb_76ba),
    f64::from_bits(0xbfd4_1e37_c6d5_aff2),
    f64::from_bits(0xbfd3_c9d5_cf9a_860e),
    f64::from_bits(0xbfd3_6e4a_6697_2aca),
    f64::from_bits(0xbfd3_0fbd_af08_4da0),
    f64::from_bits(0xbfd2_c104_ea14_0370),
    f64::from_bits(0xbfd2_6ccd_39dd_d313),
    f64::from_bits(0xbfd2_0dba_ea5d_f644),
    f64::from_bits(0xbfd1_c757_18dc_79ad),
    f64::from_bits(0xbfd1_71ac_1299_3fb0),
    f64::from_bits(0xbfd1_16ea_1ec0_acfe),
    f64::from_bits(0xbfd0_c834_e9e1_1024),
    f64::from_bits(0xbfd0_72f3_7686_80d2),
    f64::from_bits(0xbfd0_1908_6481_e3fb),
    f64::from_bits(0xbfcf_9348_e657_e66d),
    f64::from_bits(0xbfce_f827_f700_6296),
    f64::from_bits(0xbfce_570c_205f_38ab),
    f64::from_bits(0xbfcd_a787_2a69_9a30),
    f64::from_bits(0xbfcd_08eb_5001_5419),
    f64::from_bits(0xbfcc_6dbc_af31_261b),
    f64::from_bits(0xbfcb_cef3_94ea_69a0),
    f64::from_bits(0xbfcb_27b8_5959_74c0),
    f64::from_bits(0xbfca_96db_853e_450e),
    f64::from_bits(0xbfc9_ff2f_0db9_aca7),
    f64::from_bits(0xbfc9_652f_78f7_cfad),
    f64::from_bits(0xbfc8_cf32_472e_e8e6),
    f64::from_bits(0xbfc8_2878_4e64_f382),
    f64::from_bits(0xbfc7_89df_0eb7_26cc),
    f64::from_bits(0xbfc6_ee94_1489_1c35),
    f64::from_bits(0xbfc6_5fb5_468f_0f47),
    f64::from_bits(0xbfc5_af35_3f5c_90de),
    f64::from_bits(0xbfc5_26fa_2781_c808),
    f64::from_bits(0xbfc4_96d9_6d55_ad09),
    f64::from_bits(0xbfc4_0dd7_afaf_10a9),
    f64::from_bits(0xbfc3_6901_72f3_ed50),
    f64::from_bits(0xbfc2_cfe8_62dd_bcd2),
    f64::from_bits(0xbfc2_3a51_b120_f860),
    f64::from_bits(0xbfc1_b733_9a8a_ea20),
    f64::from_bits(0xbfc1_1ffe_966e_ee16),
    f64::from_bits(0xbfc0_8820_c980_16a1),
    f64::from_bits(0xbfbf_e7ea_eb06_06ca),
    f64::from_bits(0xbfbe_a8dc_e38a_e040),
    f64::from_bits(0xbfbd_bd3d_3821_60da),
    f64::from_bits(0xbfbc_664b_3d08_503c),
    f64::from_bits(0xbfbb_88db_1de9_1b82),
    f64::from_bits(0xbfba_2f0d_dcd7_44b5),
    f64::from_bits(0xbfb9_4f16_ea68_77bc),
    f64::from_bits(0xbfb8_2989_4b2c_e6b5),
    f64::from_bits(0xbfb6_dcaf_d93f_ffaf),
    f64::from_bits(0xbfb5_db9a_f414_d20d),
    f64::from_bits(0xbfb4_fbdf_d26d_d1ae),
    f64::from_bits(0xbfb3_ac77_f949_da7f),
    f64::from_bits(0xbfb2_82f2_9740_6bcd),
    f64::from_bits(0xbfb1_c144_22bf_a4c9),
    f64::from_bits(0xbfb0_5c88_1dec_b5fa),
    f64::from_bits(0xbfae_9c1d_0de9_bc62),
    f64::from_bits(0xbfac_b14d_3e76_6718),
    f64::from_bits(0xbfaa_e401_7525_92fb),
    f64::from_bits(0xbfa8_3fd0_7852_006e),
    f64::from_bits(0xbfa6_d380_f29d_6305),
    f64::from_bits(0xbfa4_7c96_71da_5143),
    f64::from_bits(0xbfa2_220e_2ae6_f694),
    f64::from_bits(0xbfa0_5b6c_3b27_0a33),
    f64::from_bits(0xbf9c_58a2_f418_9539),
    f64::from_bits(0xbf98_2031_ee0a_81c2),
    f64::from_bits(0xbf94_a9b7_5d31_263a),
    f64::from_bits(0xbf90_3586_ce7d_d781),
    f64::from_bits(0xbf87_23d5_21e9_1e45),
    f64::from_bits(0xbf80_2c92_ba60_c7ae),
    f64::from_bits(0xbf70_8c35_7407_8e21),
    f64::from_bits(0x0000_0000_0000_0000),
    f64::from_bits(0x3f7f_71cd_4671_d28f),
    f64::from_bits(0x3f8f_c3b1_75ff_8aca),
    f64::from_bits(0x3f97_bf4d_4a92_1bb0),
    f64::from_bits(0x3f9f_6a6d_61fe_15d1),
    f64::from_bits(0x3fa3_bc88_0eae_8d89),
    f64::from_bits(0x3fa7_88b9_b82d_6f34),
    f64::from_bits(0x3fab_3a81_7311_3475),
    f64::from_bits(0x3faf_227a_2204_7645),
    f64::from_bits(0x3fb1_55ab_a975_299e),
    f64::from_bits(0x3fb3_3336_798c_84aa),
    f64::from_bits(0x3fb5_1e72_a74e_a009),
    f64::from_bits(0x3fb6_e118_3e8d_0498),
    f64::from_bits(0x3fb8_c140_d929_e7f5),
    f64::from_bits(0x3fba_79b9_e0a7_77cc),
    f64::from_bits(0x3fbc_5448_4abc_1c24),
    f64::from_bits(0x3fbe_2d93_8359_96e3),
    f64::from_bits(0x3fbf_da94_0d70_b1dd),
    f64::from_bits(0x3fc0_d056_177e_1405),
    f64::from_bits(0x3fc1_b0b7_1254_d628),
    f64::from_bits(0x3fc2_8b1c_ed79_1c17),
    f64::from_bits(0x3fc3_6eef_3b82_4c0f),
    f64::from_bits(0x3fc4_439f_c072_6d39),
    f64::from_bits(0x3fc5_1cdc_9cbb_2d31),
    f64::from_bits(0x3fc5_ff55_523f_5422),
    f64::from_bits(0x3fc6_d1d5_7d1a_8c62),
    f64::from_bits(0x3fc7_ad19_5881_830f),
    f64::from_bits(0x3fc8_8cdc_3163_8f97),
    f64::from_bits(0x3fc9_5dc2_9aa0_7b55),
    f64::from_bits(0x3fca_2068_c234_2bb5),
    f64::from_bits(0x3fca_fea8_5cd3_1ab6),
    f64::from_bits(0x3fcb_cf5c_4322_b6a2),
    f64::from_bits(0x3fcc_8ebe_229a_8e5b),
    f64::from_bits(0x3fcd_5917_8275_3a63),
    f64::from_bits(0x3fce_19de_f2c8_c0ce),
    f64::from_bits(0x3fce_e739_d956_8a2d),
    f64::from_bits(0x3fcf_b9ec_efe9_7da0),
    f64::from_bits(0x3fd0_3b39_4784_ad67),
    f64::from_bits(0x3fd0_a248_f231_a394),
    f64::from_bits(0x3fd1_0316_b47a_d604),
    f64::from_bits(0x3fd1_65b6_96c6_9ded),
    f64::from_bits(0x3fd1_c971_7df7_6211),
    f64::from_bits(0x3fd2_297b_a2f9_114e),
    f64::from_bits(0x3fd2_85cb_4bab_0a91),
    f64::from_bits(0x3fd2_ec4f_88b6_c76d),
    f64::from_bits(0x3fd3_4463_4c84_a796),
    f64::from_bits(0x3fd3_9fff_0a64_b290),
    f64::from_bits(0x3fd4_0893_7dcf_6b40),
    f64::from_bits(0x3fd4_6246_d1ae_aa31),
    f64::from_bits(0x3fd4_bc0e_d9d3_5a9f),
    f64::from_bits(0x3fd5_1fe0_0864_766e),
    f64::from_bits(0x3fd5_7062_176f_1e54),
    f64::from_bits(0x3fd5_d46a_3b33_7f2e),
];
