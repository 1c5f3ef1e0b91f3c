//! Single-precision kernels.

mod cosf;
mod expf;
mod expm1f;
mod hypotf;
mod powf;
mod sinf;
mod tanhf;

pub use cosf::cosf;
pub use expf::expf;
pub use expm1f::expm1f;
pub use hypotf::hypotf;
pub use powf::powf;
pub use sinf::sinf;
pub use tanhf::tanhf;
