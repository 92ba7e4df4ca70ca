use deduct_ui_graphics::Point;

use crate::layout::{EDGE_GAP, NESTED_RISE, SLOT_HEIGHT, SLOT_WIDTH};
use crate::placeholder::Placeholder;
use crate::rule::{Connective, RuleKind};
use crate::RuleBlock;

/// Recursively collects every position a layout pass produces.
fn geometry_snapshot(block: &RuleBlock) -> Vec<Point> {
    let mut points = vec![block.position()];
    for premise in block.premises() {
        points.push(premise.position());
        if let Some(nested) = premise.rule() {
            points.extend(geometry_snapshot(nested));
        }
    }
    points.push(block.conclusion().position());
    points
}

#[test]
fn intro_and_block_lays_out_from_anchor() {
    let block = RuleBlock::new(100.0, 100.0, RuleKind::Introduction, Connective::And);
    assert_eq!(block.premises().len(), 2);
    assert_eq!(block.premises()[0].position(), Point::new(100.0, 100.0));
    assert_eq!(block.premises()[1].position(), Point::new(160.0, 100.0));
    assert_eq!(block.width(), 80.0);
    assert_eq!(block.conclusion().position(), Point::new(130.0, 128.0));
}

#[test]
fn every_rule_shape_builds_its_premises() {
    for kind in [RuleKind::Introduction, RuleKind::Elimination] {
        for connective in [
            Connective::And,
            Connective::Or,
            Connective::Implication,
            Connective::Equivalence,
            Connective::Negation,
        ] {
            let block = RuleBlock::new(0.0, 0.0, kind, connective);
            assert_eq!(
                block.premises().len(),
                crate::premise_count(kind, connective)
            );
        }
    }
}

#[test]
fn placeholder_collision_is_edge_inclusive() {
    let slot = Placeholder::new(10.0, 10.0);
    assert!(slot.collides(10.0, 10.0));
    assert!(slot.collides(10.0 + SLOT_WIDTH, 10.0 + SLOT_HEIGHT));
    assert!(slot.collides(20.0, 15.0));
    assert!(!slot.collides(9.9, 15.0));
    assert!(!slot.collides(10.0 + SLOT_WIDTH + 0.1, 15.0));
}

#[test]
fn activation_centers_the_new_block_on_the_slot() {
    let mut block = RuleBlock::new(200.0, 200.0, RuleKind::Introduction, Connective::Or);
    assert_eq!(block.premises().len(), 1);
    block.premise_mut(0).activate().unwrap();

    let nested = block.premises()[0].rule().unwrap();
    assert_eq!(nested.kind(), RuleKind::Elimination);
    assert_eq!(nested.connective(), Connective::Or);
    assert_eq!(nested.premises().len(), 3);
    assert_eq!(nested.width(), 140.0);
    // Horizontally centered on the slot's prior position.
    assert_eq!(nested.position(), Point::new(130.0, 200.0));
}

#[test]
fn relayout_raises_a_nested_premise_above_the_anchor_row() {
    let mut block = RuleBlock::new(200.0, 200.0, RuleKind::Introduction, Connective::Or);
    block.premise_mut(0).activate().unwrap();
    block.update();

    let slot = &block.premises()[0];
    assert_eq!(slot.position(), Point::new(200.0, 200.0 - NESTED_RISE));
    // The nested block follows its slot's anchor.
    assert_eq!(
        slot.rule().unwrap().position(),
        Point::new(200.0, 200.0 - NESTED_RISE)
    );
    assert_eq!(block.width(), 140.0);
    assert_eq!(
        block.conclusion().position(),
        Point::new(200.0 + 70.0 - SLOT_WIDTH / 2.0, 200.0 + SLOT_HEIGHT + 2.0 * EDGE_GAP)
    );
}

#[test]
fn widening_a_premise_shifts_later_siblings_right() {
    let mut block = RuleBlock::new(200.0, 200.0, RuleKind::Introduction, Connective::And);
    let narrow_width = block.width();
    assert_eq!(narrow_width, 80.0);
    assert_eq!(block.premises()[1].position().x, 260.0);

    block.premise_mut(0).activate().unwrap();
    block.update();

    // Premise 0 widened from 20 to 140; the sibling moves right by exactly
    // that increase and the block widens by the same amount.
    assert_eq!(block.premises()[0].width(), 140.0);
    assert_eq!(block.premises()[1].position().x, 380.0);
    assert_eq!(block.width(), 200.0);
    assert_eq!(block.width() - narrow_width, 140.0 - 20.0);
}

#[test]
fn middle_nested_premise_keeps_the_chain_consistent() {
    let mut block = RuleBlock::new(50.0, 75.0, RuleKind::Elimination, Connective::Or);
    block.premise_mut(1).activate().unwrap();
    block.update();

    assert_eq!(block.premises()[0].position(), Point::new(50.0, 75.0));
    assert_eq!(
        block.premises()[1].position(),
        Point::new(110.0, 75.0 - NESTED_RISE)
    );
    assert_eq!(block.premises()[2].position(), Point::new(290.0, 75.0));
    assert_eq!(block.width(), 260.0);
}

#[test]
fn layout_is_idempotent_recursively() {
    let mut block = RuleBlock::new(50.0, 75.0, RuleKind::Elimination, Connective::Or);
    block.premise_mut(1).activate().unwrap();

    block.update();
    let first = geometry_snapshot(&block);
    block.update();
    let second = geometry_snapshot(&block);
    assert_eq!(first, second);

    block.layout(50.0, 75.0);
    assert_eq!(geometry_snapshot(&block), first);
}

#[test]
fn nested_slot_width_tracks_its_block() {
    let mut block = RuleBlock::new(0.0, 0.0, RuleKind::Introduction, Connective::Negation);
    assert_eq!(block.premises()[0].width(), SLOT_WIDTH);
    block.premise_mut(0).activate().unwrap();
    let slot = &block.premises()[0];
    assert_eq!(slot.width(), slot.rule().unwrap().width());
}
