//! MBR decoding for raw disk images.
//!
//! reference: <https://wiki.osdev.org/MBR_(x86)>

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

#[macro_use]
pub mod common;
pub use common::*;

pub mod humanize;
pub use humanize::*;

pub mod partition;
pub use partition::*;
