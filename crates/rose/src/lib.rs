#![deny(unsafe_code)]
//! Rose curve generators.
//!
//! - [`RoseCurve`] traces `r = amplitude · sin(k·θ)` with θ in radians.
//! - [`MaurerRose`] joins points of `r = amplitude · sin(n·θ)` sampled every
//!   `d` degrees, producing star-like figures.
//!
//! Both draw a single segment per render call onto a
//! [`Surface`](rosette_core::Surface).

pub mod maurer;
pub mod rose;

pub use maurer::{MaurerRose, MAURER_SEGMENTS};
pub use rose::RoseCurve;
