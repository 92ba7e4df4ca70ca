//! The registry of top-level rule blocks.

use std::fmt;

use deduct_foundation::PointerEvent;
use deduct_render_common::DrawSurface;
use deduct_ui_graphics::Rect;
use indexmap::IndexMap;

use crate::block::RuleBlock;
use crate::error::EditorError;
use crate::rule::{Connective, RuleKind, SeedRule};

/// Identity of a top-level block within its editor.
///
/// Ids are assigned as the registry size at insertion time, so they are
/// monotonic per session. Nested blocks carry no id; they are reachable
/// only through the placeholder that owns them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub usize);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule#{}", self.0)
    }
}

/// Snapshot of one top-level block's interactive region, taken before an
/// event traversal so blocks can consult their siblings without touching
/// the live registry mid-iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockFrame {
    pub id: BlockId,
    pub bounds: Rect,
}

/// Owns every top-level rule block and fans update/render/event calls out
/// to them. This is the only component with cross-rule awareness.
#[derive(Debug, Default)]
pub struct RuleEditor {
    rules: IndexMap<BlockId, RuleBlock>,
}

impl RuleEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an editor pre-populated with the given seed rules.
    pub fn with_seeds(seeds: &[SeedRule]) -> Self {
        let mut editor = Self::new();
        for seed in seeds {
            editor.add_rule(seed.x, seed.y, seed.kind, seed.connective);
        }
        editor
    }

    /// Constructs a block at the given anchor and registers it under the
    /// next sequential id.
    pub fn add_rule(
        &mut self,
        x: f32,
        y: f32,
        kind: RuleKind,
        connective: Connective,
    ) -> BlockId {
        let id = BlockId(self.rules.len());
        let block = RuleBlock::new(x, y, kind, connective);
        log::debug!("{id} added: {} at ({x}, {y})", block.label());
        self.rules.insert(id, block);
        id
    }

    /// Soft-attaches `child` beneath `parent`'s output.
    ///
    /// The relation is a registry key on the child, never an owning edge,
    /// so block ownership stays a tree. Detaching is interactive: dragging
    /// the connected block pulls it free.
    pub fn connect(&mut self, child: BlockId, parent: BlockId) -> Result<(), EditorError> {
        if child == parent {
            return Err(EditorError::SelfConnection(child));
        }
        if !self.rules.contains_key(&parent) {
            return Err(EditorError::UnknownBlock(parent));
        }
        let block = self
            .rules
            .get_mut(&child)
            .ok_or(EditorError::UnknownBlock(child))?;
        block.set_connected(parent);
        log::debug!("{child} connected beneath {parent}");
        Ok(())
    }

    pub fn get(&self, id: BlockId) -> Option<&RuleBlock> {
        self.rules.get(&id)
    }

    pub fn get_mut(&mut self, id: BlockId) -> Option<&mut RuleBlock> {
        self.rules.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Blocks in insertion order.
    pub fn blocks(&self) -> impl Iterator<Item = (BlockId, &RuleBlock)> {
        self.rules.iter().map(|(id, block)| (*id, block))
    }

    /// Re-runs layout on every block from its current anchor; geometry is
    /// unchanged unless an anchor moved, but nested positions re-cascade.
    pub fn update(&mut self) {
        for block in self.rules.values_mut() {
            block.update();
        }
    }

    /// Renders every block in insertion order; later blocks draw over
    /// earlier ones.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        for block in self.rules.values() {
            block.render(surface);
        }
    }

    /// Forwards a normalized event to every block in insertion order.
    ///
    /// Sibling frames are snapshotted first; the traversal never reads the
    /// live registry through the blocks it hands the event to.
    pub fn handle_event(&mut self, event: &PointerEvent) {
        let frames: Vec<BlockFrame> = self
            .rules
            .iter()
            .map(|(id, block)| BlockFrame {
                id: *id,
                bounds: block.collision_bounds(),
            })
            .collect();
        for block in self.rules.values_mut() {
            block.handle_event(event, &frames);
        }
    }
}
