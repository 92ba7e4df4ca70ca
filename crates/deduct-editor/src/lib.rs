//! Editor core for the Deduct proof canvas.
//!
//! Users build natural-deduction proofs by placing inference-rule blocks on
//! a 2D canvas. Each block exposes input placeholders that can be filled
//! with nested rule blocks, forming a tree of inferences. This crate owns
//! the layout/geometry engine that positions blocks and their nested
//! placeholders deterministically, and the event-dispatch model that routes
//! normalized pointer/touch input through the object tree.
//!
//! The crate has no windowing or rasterization code: drawing goes through
//! [`deduct_render_common::DrawSurface`] and input arrives as
//! [`deduct_foundation::PointerEvent`] values.

mod block;
mod editor;
mod error;
pub mod layout;
mod placeholder;
mod rule;

pub use block::RuleBlock;
pub use editor::{BlockFrame, BlockId, RuleEditor};
pub use error::{EditorError, SlotError};
pub use placeholder::{Placeholder, Slot};
pub use rule::{premise_count, rule_label, Connective, ParseRuleError, RuleKind, SeedRule};

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::block::RuleBlock;
    pub use crate::editor::{BlockId, RuleEditor};
    pub use crate::placeholder::{Placeholder, Slot};
    pub use crate::rule::{Connective, RuleKind, SeedRule};
}
