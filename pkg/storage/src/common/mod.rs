#[macro_use]
mod macros;

pub mod block;
pub mod device;
pub mod error;

pub use block::*;
pub use device::*;
pub use error::*;
