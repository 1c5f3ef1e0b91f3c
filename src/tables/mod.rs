//! Immutable constant data shared by the kernels.
//!
//! Values are written as bit patterns so they carry over bit for bit from the
//! Remez fits and tables they were generated from.

pub mod exp;

pub mod log;

pub mod pow;

pub mod trig;
