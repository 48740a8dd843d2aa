//! Single precision complex arithmetic that matches a native `complex64`
//! bit for bit, including its NaN, signed zero and infinity behaviour.
//!
//! ```
//! use cplx64::Complex64;
//!
//! let q = Complex64::new(1.0, 2.0) / Complex64::new(3.0, 4.0);
//! assert_eq!(q.real(), 0.44);
//! assert_eq!(q.imag(), 0.08);
//!
//! let z = Complex64::new(1.0, 1.0) / Complex64::ZERO;
//! assert_eq!(z.real(), f32::INFINITY);
//! ```
mod bits;
pub mod complex64;
pub mod parse;
pub mod prelude;

pub use crate::complex64::Complex64;
