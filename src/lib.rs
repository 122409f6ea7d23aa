//! # PetPals
//!
//! Library side of the `petpals` binary: the engine re-exported under
//! [`model`], the line-oriented front-end in [`app`], and text rendering in
//! [`ui`].

pub mod app;
pub mod model;
pub mod ui;
