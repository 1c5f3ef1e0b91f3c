//! Double-precision kernels.

mod cos;
mod exp;
mod exp2;
mod expm1;
mod hypot;
mod log;
mod pow;
mod sin;
mod sincos;
mod tanh;

pub use cos::cos;
pub use exp::exp;
pub use exp2::exp2;
pub use expm1::expm1;
pub use hypot::hypot;
pub use log::log;
pub use pow::pow;
pub use sin::sin;
pub use sincos::sincos;
pub use tanh::tanh;
