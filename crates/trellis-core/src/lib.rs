//! Core types for the Trellis flex layout engine.
//!
//! This crate holds everything the layout pass reads but does not compute:
//!
//! - [`SizeConstraint`]: packed `(mode, size)` sizing instructions
//! - Attribute enums ([`FlexDirection`], [`JustifyContent`], ...) with their
//!   numeric encodings and style-sheet names
//! - [`ItemStyle`] and [`ContainerStyle`] configuration
//! - [`LayoutError`], the error type of every layout entry point
//!
//! # Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for all attribute and style types

pub mod constraint;
pub mod errors;
pub mod style;
pub mod types;

pub use constraint::{MeasureMode, SizeConstraint};
pub use errors::{LayoutError, LayoutResult};
pub use style::{ContainerStyle, ItemStyle};
pub use types::{
    AlignContent, AlignItems, AlignSelf, Dimension, Edges, FlexDirection, FlexWrap,
    JustifyContent, LayoutDirection, Rect, Size, Visibility,
};
