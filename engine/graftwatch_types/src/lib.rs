// Domain types for GraftWatch transplant monitoring
pub mod domain;
pub mod traits;

pub use domain::*;
pub use traits::*;
