use criterion::{black_box, criterion_group, criterion_main, Criterion};
use deduct_editor::{Connective, RuleBlock, RuleEditor, RuleKind};
use deduct_foundation::{PointerEvent, PointerEventKind};

fn nest(block: &mut RuleBlock, depth: usize) {
    if depth == 0 {
        return;
    }
    block.premise_mut(0).activate().unwrap();
    nest(block.premise_mut(0).rule_mut().unwrap(), depth - 1);
}

fn deep_editor(depth: usize) -> RuleEditor {
    let mut editor = RuleEditor::new();
    let id = editor.add_rule(400.0, 600.0, RuleKind::Elimination, Connective::Or);
    nest(editor.get_mut(id).unwrap(), depth);
    editor.update();
    editor
}

fn relayout_deep_tree(c: &mut Criterion) {
    let mut editor = deep_editor(32);
    c.bench_function("relayout_deep_tree", |b| {
        b.iter(|| {
            editor.update();
            black_box(&editor);
        })
    });
}

fn dispatch_move_storm(c: &mut Criterion) {
    let mut editor = deep_editor(16);
    c.bench_function("dispatch_move_storm", |b| {
        b.iter(|| {
            for step in 0..16 {
                let event = PointerEvent::at(
                    PointerEventKind::Move,
                    200.0 + step as f32,
                    300.0,
                );
                editor.handle_event(black_box(&event));
            }
        })
    });
}

criterion_group!(benches, relayout_deep_tree, dispatch_move_storm);
criterion_main!(benches);
