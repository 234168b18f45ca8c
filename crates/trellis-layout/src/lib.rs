//! Flexbox layout for Trellis item trees.
//!
//! This crate sizes and positions rectangular items inside flex containers:
//! it splits children into lines, grows and shrinks them along the main axis,
//! distributes lines along the cross axis and assigns every item a frame.
//!
//! # Architecture
//!
//! 1. **Items**: [`Item`] holds an [`ItemStyle`](trellis_core::ItemStyle) and
//!    its content, either a [`Measure`] leaf or a nested [`FlexContainer`]
//! 2. **Lines**: [`FlexLine`] records the items sharing one cross-axis band
//! 3. **Flex pass**: [`FlexEngine`] runs partition, main-axis and cross-axis
//!    resolution, stretch and positioning for one container
//! 4. **Cycle**: [`compute_layout`] measures and lays out a whole tree
//!
//! # Example
//!
//! ```ignore
//! use trellis_core::{ContainerStyle, FlexWrap, ItemStyle};
//! use trellis_layout::{compute_layout, FlexContainer, Item, LayoutOptions};
//!
//! let container = FlexContainer::with_children(
//!     ContainerStyle::row().with_wrap(FlexWrap::Wrap),
//!     (0..10).map(|_| Item::new(ItemStyle::fixed(120, 40).with_grow(1.0))),
//! );
//! let mut root = Item::container(ItemStyle::default(), container);
//! let frame = compute_layout(&mut root, &LayoutOptions::viewport(800, 600))?;
//!
//! for child in root.as_container().unwrap().children() {
//!     println!("{:?}", child.frame());
//! }
//! ```

mod compute;
mod container;
pub mod flex;
mod item;
mod line;

pub use compute::{compute_layout, LayoutOptions};
pub use container::FlexContainer;
pub use flex::{FlexEngine, ItemSource};
pub use item::{Content, Intrinsic, Item, Measure, MeasuredState};
pub use line::FlexLine;
