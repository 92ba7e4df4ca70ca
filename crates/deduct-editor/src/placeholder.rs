//! Input/output slots on a rule block.

use deduct_foundation::{PointerEvent, PointerEventKind};
use deduct_render_common::DrawSurface;
use deduct_ui_graphics::{Color, Point, Rect};

use crate::block::RuleBlock;
use crate::editor::BlockFrame;
use crate::error::SlotError;
use crate::layout::{SLOT_HEIGHT, SLOT_WIDTH};
use crate::rule::{Connective, RuleKind};

/// Fill color of an idle empty placeholder.
pub const SLOT_IDLE_COLOR: Color = Color(0.8, 0.8, 0.8, 1.0);
/// Fill color of an empty placeholder under the pointer.
pub const SLOT_HOVER_COLOR: Color = Color(0.667, 0.667, 0.667, 1.0);

/// What a placeholder currently holds.
///
/// Symbol slots are reserved for terminal formula tokens; they render
/// nothing and reject activation until the feature lands.
#[derive(Debug)]
pub enum Slot {
    Empty,
    Symbol(String),
    Rule(Box<RuleBlock>),
}

/// A slot on a rule block: empty, a terminal symbol, or a nested block.
///
/// The placeholder and a nested block share an anchor; moving the
/// placeholder cascades into the block it owns. Ownership is strictly
/// downward (`Box`), so a block can never hold an ancestor and layout
/// recursion terminates by construction.
#[derive(Debug)]
pub struct Placeholder {
    position: Point,
    color: Color,
    slot: Slot,
}

impl Placeholder {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            color: SLOT_IDLE_COLOR,
            slot: Slot::Empty,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.slot, Slot::Empty)
    }

    /// The nested block, when this slot holds one.
    pub fn rule(&self) -> Option<&RuleBlock> {
        match &self.slot {
            Slot::Rule(block) => Some(block),
            _ => None,
        }
    }

    pub fn rule_mut(&mut self) -> Option<&mut RuleBlock> {
        match &mut self.slot {
            Slot::Rule(block) => Some(block),
            _ => None,
        }
    }

    /// Point-in-rectangle test against the fixed slot extent, edges
    /// included. Interaction only consults this while the slot is empty.
    pub fn collides(&self, x: f32, y: f32) -> bool {
        self.bounds().contains(x, y)
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, SLOT_WIDTH, SLOT_HEIGHT)
    }

    /// Current width: the fixed slot width, or the nested block's computed
    /// width when the slot holds a rule.
    pub fn width(&self) -> f32 {
        match &self.slot {
            Slot::Rule(block) => block.width(),
            _ => SLOT_WIDTH,
        }
    }

    /// Moves the placeholder, cascading the same anchor into a nested block.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Point::new(x, y);
        if let Slot::Rule(block) = &mut self.slot {
            block.layout(x, y);
        }
    }

    /// Fills an empty slot with a fresh default rule block, anchored so the
    /// new block is horizontally centered on the placeholder's prior
    /// position.
    pub fn activate(&mut self) -> Result<(), SlotError> {
        match self.slot {
            Slot::Empty => {
                let mut block = RuleBlock::new(
                    self.position.x,
                    self.position.y,
                    RuleKind::Elimination,
                    Connective::Or,
                );
                let width = block.width();
                block.layout(self.position.x - width / 2.0, self.position.y);
                self.slot = Slot::Rule(Box::new(block));
                Ok(())
            }
            Slot::Symbol(_) => Err(SlotError::SymbolUnsupported),
            Slot::Rule(_) => Err(SlotError::Occupied),
        }
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        match &self.slot {
            Slot::Empty => surface.fill_rect(self.bounds(), self.color),
            Slot::Symbol(_) => {}
            Slot::Rule(block) => block.render(surface),
        }
    }

    /// Handles a normalized input event.
    ///
    /// Empty slots activate on a colliding pointer-down and track hover on
    /// pointer-move; everything else is forwarded unchanged into a nested
    /// block. Touch events neither activate nor hover a slot.
    pub fn handle_event(&mut self, event: &PointerEvent, siblings: &[BlockFrame]) {
        if self.is_empty() {
            match event.kind {
                PointerEventKind::Down => {
                    if self.collides(event.position.x, event.position.y) {
                        if let Err(err) = self.activate() {
                            log::warn!("placeholder activation rejected: {err}");
                        }
                    }
                }
                PointerEventKind::Move => {
                    self.color = if self.collides(event.position.x, event.position.y) {
                        SLOT_HOVER_COLOR
                    } else {
                        SLOT_IDLE_COLOR
                    };
                }
                _ => {}
            }
        } else if let Slot::Rule(block) = &mut self.slot {
            block.handle_event(event, siblings);
        }
    }
}
