//! Platform abstraction layer
//!
//! The host owns windowing and event delivery; this layer only translates
//! host key codes into the keyboard state the simulation reads.

pub mod input;

pub use input::{Key, Keyboard};
