//! Inference-rule blocks: layout and interaction.

use deduct_foundation::{PointerEvent, PointerEventKind};
use deduct_render_common::DrawSurface;
use deduct_ui_graphics::{Color, Point, Rect};

use crate::editor::{BlockFrame, BlockId};
use crate::layout::{
    self, BRACKET_LENGTH, EDGE_GAP, FONT_SIZE, LABEL_GAP, LABEL_WIDTH, NESTED_RISE, SELECT_MARGIN,
    SLOT_HEIGHT, SLOT_WIDTH,
};
use crate::placeholder::Placeholder;
use crate::rule::{premise_count, rule_label, Connective, RuleKind};

/// The horizontal inference line separating premises from the conclusion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Edge {
    from: Point,
    to: Point,
}

/// A labeled inference step: a row of input placeholders above an inference
/// edge, one conclusion placeholder below it, and a rule label beside it.
///
/// The anchor is the top-left corner of the input row; every other position
/// is a deterministic function of it, so [`RuleBlock::layout`] may run any
/// number of times without drift.
#[derive(Debug)]
pub struct RuleBlock {
    position: Point,
    kind: RuleKind,
    connective: Connective,
    label: String,
    label_anchor: Point,
    edge: Edge,
    premises: Vec<Placeholder>,
    conclusion: Placeholder,
    color: Color,
    dragged: bool,
    selected: bool,
    hovered: bool,
    connected: Option<BlockId>,
}

impl RuleBlock {
    pub fn new(x: f32, y: f32, kind: RuleKind, connective: Connective) -> Self {
        let premises = (0..premise_count(kind, connective))
            .map(|_| Placeholder::new(x, y))
            .collect();
        let mut block = Self {
            position: Point::new(x, y),
            kind,
            connective,
            label: rule_label(kind, connective),
            label_anchor: Point::default(),
            edge: Edge::default(),
            premises,
            conclusion: Placeholder::new(x, y),
            color: Color::BLACK,
            dragged: false,
            selected: false,
            hovered: false,
            connected: None,
        };
        block.layout(x, y);
        block
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn connective(&self) -> Connective {
        self.connective
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn premises(&self) -> &[Placeholder] {
        &self.premises
    }

    pub fn premise_mut(&mut self, index: usize) -> &mut Placeholder {
        &mut self.premises[index]
    }

    pub fn conclusion(&self) -> &Placeholder {
        &self.conclusion
    }

    pub fn is_dragged(&self) -> bool {
        self.dragged
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Registry key of the block this one is soft-attached beneath.
    pub fn connected(&self) -> Option<BlockId> {
        self.connected
    }

    /// Marks the block as attached beneath `parent`, dropping any live
    /// selection or drag.
    pub(crate) fn set_connected(&mut self, parent: BlockId) {
        self.connected = Some(parent);
        self.selected = false;
        self.dragged = false;
    }

    /// Current block width: from the anchor to the right edge of the last
    /// input placeholder. Nested blocks widen their placeholder and
    /// therefore every enclosing block.
    pub fn width(&self) -> f32 {
        let last = self
            .premises
            .last()
            .expect("every rule shape has at least one premise");
        last.position().x + last.width() - self.position.x
    }

    /// Recomputes the entire block geometry from the given anchor.
    ///
    /// Input placeholders chain left to right, each offset by its
    /// predecessor's current width; a placeholder holding a nested block is
    /// raised above the anchor row so nested proof lines stack upward.
    pub fn layout(&mut self, x: f32, y: f32) {
        self.position = Point::new(x, y);
        for index in 0..self.premises.len() {
            let slot_x = if index == 0 {
                x
            } else {
                let previous = &self.premises[index - 1];
                previous.position().x + previous.width() + layout::PREMISE_GAP
            };
            let slot_y = if self.premises[index].rule().is_some() {
                y - NESTED_RISE
            } else {
                y
            };
            self.premises[index].set_position(slot_x, slot_y);
        }
        let width = self.width();
        self.conclusion.set_position(
            x + width / 2.0 - SLOT_WIDTH / 2.0,
            y + SLOT_HEIGHT + 2.0 * EDGE_GAP,
        );
        self.label_anchor = Point::new(x + width + LABEL_GAP, y + SLOT_HEIGHT + FONT_SIZE / 2.0);
        let edge_y = y + SLOT_HEIGHT + EDGE_GAP;
        self.edge = Edge {
            from: Point::new(x, edge_y),
            to: Point::new(x + width, edge_y),
        };
    }

    /// Re-runs layout from the current anchor, cascading into nested blocks.
    pub fn update(&mut self) {
        let anchor = self.position;
        self.layout(anchor.x, anchor.y);
    }

    /// The interactive region: input row, inference edge, and label, plus
    /// the selection margin.
    pub fn collision_bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.width() + LABEL_WIDTH + SELECT_MARGIN,
            2.0 * SLOT_HEIGHT + 2.0 * EDGE_GAP + SELECT_MARGIN,
        )
    }

    /// Point test against [`collision_bounds`](Self::collision_bounds),
    /// bounds exclusive.
    pub fn collides(&self, x: f32, y: f32) -> bool {
        let bounds = self.collision_bounds();
        bounds.x < x
            && x < bounds.x + bounds.width
            && bounds.y < y
            && y < bounds.y + bounds.height
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        self.conclusion.render(surface);
        for premise in &self.premises {
            premise.render(surface);
        }
        if self.connected.is_none() && (self.selected || self.hovered) {
            self.render_selection_box(surface);
        }
        surface.text(&self.label, self.label_anchor, self.color);
        surface.line(self.edge.from, self.edge.to, self.color);
    }

    fn render_selection_box(&self, surface: &mut dyn DrawSurface) {
        let frame = Rect::new(
            self.position.x - SELECT_MARGIN,
            self.position.y - SELECT_MARGIN,
            self.width() + LABEL_WIDTH + SELECT_MARGIN,
            2.0 * SLOT_HEIGHT + 3.0 * EDGE_GAP + SELECT_MARGIN,
        );
        draw_corner_brackets(surface, frame, BRACKET_LENGTH, self.color);
    }

    /// Routes a normalized event through the block.
    ///
    /// Premises are consulted first so the deepest visual element sees the
    /// event before this block's own drag/select logic; events are never
    /// consumed between the two layers. `siblings` carries the frames of
    /// all top-level blocks, snapshotted by the editor before dispatch.
    pub fn handle_event(&mut self, event: &PointerEvent, siblings: &[BlockFrame]) {
        for premise in &mut self.premises {
            premise.handle_event(event, siblings);
        }
        if self.connected.is_none() {
            self.handle_free_event(event);
        } else {
            self.handle_connected_event(event);
        }
    }

    fn handle_free_event(&mut self, event: &PointerEvent) {
        let Point { x, y } = event.position;
        match event.kind {
            PointerEventKind::TouchStart => {
                if self.collides(x, y) {
                    self.dragged = true;
                    self.selected = true;
                } else {
                    self.selected = false;
                }
                return;
            }
            PointerEventKind::TouchMove => {
                if self.dragged {
                    self.drag_to(x, y);
                    self.selected = true;
                } else {
                    self.selected = false;
                }
                return;
            }
            PointerEventKind::TouchEnd | PointerEventKind::TouchCancel => {
                self.dragged = false;
                self.selected = false;
                return;
            }
            _ => {}
        }

        let hit = self.collides(x, y);
        match event.kind {
            PointerEventKind::Down if hit => {
                self.dragged = true;
                self.selected = true;
                return;
            }
            PointerEventKind::Down => self.selected = false,
            PointerEventKind::Up => self.dragged = false,
            _ => {}
        }
        self.hovered = hit;
        if self.dragged && event.kind == PointerEventKind::Move {
            self.drag_to(x, y);
        }
    }

    /// While soft-attached beneath a parent, the only transition is
    /// detaching: a press followed by a drag-move inside the block.
    fn handle_connected_event(&mut self, event: &PointerEvent) {
        let Point { x, y } = event.position;
        if self.collides(x, y) {
            if event.kind == PointerEventKind::Down {
                self.dragged = true;
            }
            if self.dragged {
                match event.kind {
                    PointerEventKind::Up => self.dragged = false,
                    PointerEventKind::Move => {
                        if let Some(parent) = self.connected.take() {
                            log::debug!("block detached from {parent}");
                        }
                        self.selected = true;
                    }
                    _ => {}
                }
            }
        } else {
            self.dragged = false;
        }
    }

    fn drag_to(&mut self, x: f32, y: f32) {
        let anchor = layout::drag_anchor(Point::new(x, y), self.width());
        self.layout(anchor.x, anchor.y);
    }
}

/// Draws the four corner brackets marking a selected or hovered block.
fn draw_corner_brackets(surface: &mut dyn DrawSurface, frame: Rect, length: f32, color: Color) {
    let Rect {
        x,
        y,
        width,
        height,
    } = frame;
    surface.line(Point::new(x, y), Point::new(x + length, y), color);
    surface.line(Point::new(x, y), Point::new(x, y + length), color);
    surface.line(
        Point::new(x + width, y),
        Point::new(x + width - length, y),
        color,
    );
    surface.line(
        Point::new(x + width, y),
        Point::new(x + width, y + length),
        color,
    );
    surface.line(
        Point::new(x, y + height),
        Point::new(x + length, y + height),
        color,
    );
    surface.line(
        Point::new(x, y + height),
        Point::new(x, y + height - length),
        color,
    );
    surface.line(
        Point::new(x + width, y + height),
        Point::new(x + width - length, y + height),
        color,
    );
    surface.line(
        Point::new(x + width, y + height),
        Point::new(x + width, y + height - length),
        color,
    );
}
