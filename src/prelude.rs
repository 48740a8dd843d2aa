//! cplx64 prelude.
//!
//! This module contains the most used types and traits that you can import
//! easily as a group.
//!
//! ```
//! use cplx64::prelude::*;
//!
//! let z = Complex64::new(1.0, 2.0) * Complex64::I;
//! assert!(!Zero::is_zero(&z));
//! ```

#[doc(no_inline)]
pub use crate::complex64::Complex64;

#[doc(no_inline)]
pub use num_traits::{One, Zero};
