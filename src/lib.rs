//! Procedural **gear wheel** meshes: a deterministic geometric construction
//! turning five scalars (bore radius, outer radius, width, tooth count, tooth
//! depth) into a closed, consistently wound polygonal solid with per-face and
//! per-vertex normals, ready for lit rendering.
//!
//! The builder is a pure function: no caches, no shared state, safe to call
//! from any number of threads for independent specs. Bake the result into
//! whatever retained form your renderer uses and draw it every frame.
//!
//! ```rust
//! use gearmesh::{GearMesh, GearSpec};
//!
//! let spec = GearSpec::new(1.0, 4.0, 1.0, 20, 0.7);
//! let mesh = GearMesh::gear(&spec).unwrap();
//! assert_eq!(mesh.primitives.len(), 2 * 20 + 4);
//! ```
//!
//! # Features
//! #### Default
//! - **f32**: use f32 as Real, matching what renderers upload
//! - **hashmap**: enables `is_manifold` via hashbrown
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//!
//! #### Optional
//! - **f64**: use f64 as Real, this conflicts with f32

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod vertex;
pub mod primitive;
pub mod mesh;
pub mod gear;
pub mod scene;
pub mod view;

#[cfg(feature = "stl-io")]
pub mod io;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f32' or 'f64' feature must be specified, but not both");

pub use errors::InvalidGearSpec;
pub use gear::GearSpec;
pub use mesh::GearMesh;
pub use primitive::Primitive;
pub use vertex::Vertex;
