//! Planar cross-sections ("slices") of closed triangulated surface meshes,
//! with per-slice polygons and cross-sectional areas for shape analysis of
//! scanned objects such as prosthetic limb sockets.
//!
//! The pipeline for one plane: classify the mesh edges cut by the plane,
//! order the cut faces into a single closed walk (an Eulerian circuit over
//! the crossing edges), reduce the walk to the ring of crossing edges, and
//! interpolate the exact intersection point of each with the plane. The
//! [`SurfaceMesh`] driver methods run that pipeline for one plane or for a
//! whole batch of heights.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to compute independent slice planes concurrently

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod mesh;
pub mod section;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{MeshError, SectionError};
pub use mesh::SurfaceMesh;
pub use section::{Axis, CrossSection, SlicePlane};
