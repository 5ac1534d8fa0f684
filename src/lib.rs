//! A projective-geometric-algebra slicing core: contour assembly, inside-orientation
//! probing, and extrusion planning for FDM G-code generation.
//!
//! # Features
//! - **f64**: use f64 as Real (the only scalar precision offered)
//! - **parallel**: use rayon for the slicing fan-out and extrusion-cooking prefix sum

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod algebra;
pub mod contour;
pub mod errors;
pub mod float_types;
pub mod gcode;
pub mod geometry;
pub mod pga;
pub mod slice;
