use deduct_foundation::{PointerEvent, PointerEventKind};
use deduct_ui_graphics::Point;

use crate::layout::{EDGE_GAP, SLOT_HEIGHT};
use crate::rule::{Connective, RuleKind};
use crate::RuleBlock;

fn send(block: &mut RuleBlock, kind: PointerEventKind, x: f32, y: f32) {
    block.handle_event(&PointerEvent::at(kind, x, y), &[]);
}

#[test]
fn mouse_down_inside_selects_and_starts_drag() {
    let mut block = RuleBlock::new(100.0, 100.0, RuleKind::Introduction, Connective::And);
    send(&mut block, PointerEventKind::Down, 150.0, 120.0);
    assert!(block.is_selected());
    assert!(block.is_dragged());
}

#[test]
fn mouse_down_outside_deselects() {
    let mut block = RuleBlock::new(100.0, 100.0, RuleKind::Introduction, Connective::And);
    send(&mut block, PointerEventKind::Down, 150.0, 120.0);
    send(&mut block, PointerEventKind::Up, 150.0, 120.0);
    assert!(block.is_selected());
    send(&mut block, PointerEventKind::Down, 0.0, 0.0);
    assert!(!block.is_selected());
}

#[test]
fn drag_re_anchors_the_block_center_under_the_pointer() {
    let mut block = RuleBlock::new(100.0, 100.0, RuleKind::Introduction, Connective::And);
    let width = block.width();
    send(&mut block, PointerEventKind::Down, 150.0, 120.0);
    send(&mut block, PointerEventKind::Move, 400.0, 300.0);
    assert_eq!(
        block.position(),
        Point::new(400.0 - width / 2.0, 300.0 - SLOT_HEIGHT - EDGE_GAP)
    );
    // Cascaded placeholder geometry matches a fresh layout at that anchor.
    assert_eq!(block.premises()[0].position(), block.position());
    assert_eq!(
        block.conclusion().position(),
        Point::new(
            block.position().x + width / 2.0 - 10.0,
            block.position().y + SLOT_HEIGHT + 2.0 * EDGE_GAP
        )
    );

    send(&mut block, PointerEventKind::Up, 400.0, 300.0);
    assert!(!block.is_dragged());
    assert!(block.is_selected());
    let parked = block.position();
    send(&mut block, PointerEventKind::Move, 600.0, 400.0);
    assert_eq!(block.position(), parked);
}

#[test]
fn hover_tracks_containment_without_a_press() {
    let mut block = RuleBlock::new(100.0, 100.0, RuleKind::Introduction, Connective::And);
    send(&mut block, PointerEventKind::Move, 150.0, 120.0);
    assert!(block.is_hovered());
    assert!(!block.is_dragged());
    send(&mut block, PointerEventKind::Move, 500.0, 500.0);
    assert!(!block.is_hovered());
}

#[test]
fn touch_selection_clears_when_the_gesture_ends() {
    let mut block = RuleBlock::new(100.0, 100.0, RuleKind::Introduction, Connective::And);
    send(&mut block, PointerEventKind::TouchStart, 150.0, 120.0);
    assert!(block.is_selected());
    assert!(block.is_dragged());
    send(&mut block, PointerEventKind::TouchEnd, 150.0, 120.0);
    assert!(!block.is_selected());
    assert!(!block.is_dragged());
}

#[test]
fn touch_drag_follows_the_finger_and_cancel_releases() {
    let mut block = RuleBlock::new(100.0, 100.0, RuleKind::Introduction, Connective::And);
    let width = block.width();
    send(&mut block, PointerEventKind::TouchStart, 150.0, 120.0);
    send(&mut block, PointerEventKind::TouchMove, 300.0, 300.0);
    assert_eq!(
        block.position(),
        Point::new(300.0 - width / 2.0, 300.0 - SLOT_HEIGHT - EDGE_GAP)
    );
    assert!(block.is_selected());
    send(&mut block, PointerEventKind::TouchCancel, 300.0, 300.0);
    assert!(!block.is_dragged());
    assert!(!block.is_selected());
}

#[test]
fn pointer_down_on_an_empty_premise_fills_it() {
    let mut block = RuleBlock::new(200.0, 200.0, RuleKind::Introduction, Connective::Or);
    send(&mut block, PointerEventKind::Down, 205.0, 205.0);

    let nested = block.premises()[0].rule().expect("slot should be filled");
    assert_eq!(nested.kind(), RuleKind::Elimination);
    assert_eq!(nested.connective(), Connective::Or);
    // The press lands inside the parent too; both layers see the event.
    assert!(block.is_selected());
    assert!(block.is_dragged());
}

#[test]
fn activation_is_rejected_on_an_occupied_slot() {
    use crate::error::SlotError;
    let mut block = RuleBlock::new(200.0, 200.0, RuleKind::Introduction, Connective::Or);
    block.premise_mut(0).activate().unwrap();
    assert_eq!(block.premise_mut(0).activate(), Err(SlotError::Occupied));
}

#[test]
fn nested_blocks_receive_forwarded_events() {
    let mut block = RuleBlock::new(200.0, 200.0, RuleKind::Introduction, Connective::Or);
    block.premise_mut(0).activate().unwrap();
    block.update();

    // Touch the nested block's second premise slot; the event must reach it
    // through the owning placeholder.
    let nested_slot = block.premises()[0].rule().unwrap().premises()[1].position();
    send(
        &mut block,
        PointerEventKind::Down,
        nested_slot.x + 5.0,
        nested_slot.y + 5.0,
    );
    let nested = block.premises()[0].rule().unwrap();
    assert!(nested.premises()[1].rule().is_some());
}
