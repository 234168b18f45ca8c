//! End-to-end layout cycles over small item trees.

use std::cell::Cell;
use std::rc::Rc;

use trellis_core::{
    AlignContent, ContainerStyle, Edges, FlexDirection, FlexWrap, ItemStyle, JustifyContent,
    LayoutDirection, LayoutError, Rect, Size, SizeConstraint, Visibility,
};
use trellis_layout::{
    compute_layout, FlexContainer, FlexEngine, Intrinsic, Item, LayoutOptions, Measure,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn frames(root: &Item) -> Vec<Rect> {
    root.as_container()
        .map(|container| container.children().iter().map(Item::frame).collect())
        .unwrap_or_default()
}

#[test]
fn test_nested_containers() {
    init_logging();

    let column = FlexContainer::with_children(
        ContainerStyle::column(),
        vec![
            Item::new(ItemStyle::fixed(30, 20)),
            Item::new(ItemStyle::fixed(40, 20)),
        ],
    );
    let row = FlexContainer::with_children(
        ContainerStyle::row(),
        vec![
            Item::new(ItemStyle::fixed(100, 50)),
            Item::container(ItemStyle::default().with_grow(1.0), column),
        ],
    );
    let mut root = Item::container(ItemStyle::default(), row);

    let frame = compute_layout(&mut root, &LayoutOptions::viewport(300, 100)).unwrap();
    assert_eq!(frame, Rect::new(0, 0, 300, 100));
    assert_eq!(
        frames(&root),
        vec![Rect::new(0, 0, 100, 50), Rect::new(100, 0, 300, 40)]
    );

    let nested = &root.as_container().unwrap().children()[1];
    assert_eq!(
        frames(nested),
        vec![Rect::new(0, 0, 30, 20), Rect::new(0, 20, 40, 40)]
    );
}

#[test]
fn test_growing_wrapped_lines_fill_the_row() {
    init_logging();

    let container = FlexContainer::with_children(
        ContainerStyle::row().with_wrap(FlexWrap::Wrap),
        (0..10).map(|_| Item::new(ItemStyle::fixed(100, 20).with_grow(1.0))),
    );
    let mut root = Item::container(ItemStyle::default(), container);
    compute_layout(&mut root, &LayoutOptions::viewport(450, 300)).unwrap();

    let container = root.as_container().unwrap();
    let lines: Vec<_> = container.flex_lines().collect();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        let last = &container.children()[line.last_index];
        assert_eq!(last.frame().right, 450);
        assert_eq!(line.bounds.map(|bounds| bounds.width()), Some(450));
    }
    assert_eq!(container.children()[8].frame(), Rect::new(0, 40, 225, 60));
}

#[test]
fn test_column_wrap_under_rtl_stacks_from_the_right() {
    init_logging();

    let container = FlexContainer::with_children(
        ContainerStyle::column()
            .with_wrap(FlexWrap::Wrap)
            .with_align_content(AlignContent::FlexStart)
            .with_layout_direction(LayoutDirection::Rtl),
        vec![
            Item::new(ItemStyle::fixed(30, 60)),
            Item::new(ItemStyle::fixed(40, 60)),
        ],
    );
    let mut root = Item::container(ItemStyle::default(), container);
    compute_layout(&mut root, &LayoutOptions::viewport(200, 100)).unwrap();

    assert_eq!(
        frames(&root),
        vec![Rect::new(170, 0, 200, 60), Rect::new(130, 0, 170, 60)]
    );
}

#[test]
fn test_row_reverse_with_padding_and_margins() {
    init_logging();

    let container = FlexContainer::with_children(
        ContainerStyle::row()
            .with_direction(FlexDirection::RowReverse)
            .with_padding(Edges::new(5, 5, 15, 5)),
        vec![
            Item::new(ItemStyle::fixed(20, 20).with_margin(Edges::new(2, 0, 4, 0))),
            Item::new(ItemStyle::fixed(30, 20)),
        ],
    );
    let mut root = Item::container(ItemStyle::default(), container);
    compute_layout(&mut root, &LayoutOptions::viewport(200, 50)).unwrap();

    // Right padding and the right margin lead
    assert_eq!(
        frames(&root),
        vec![Rect::new(161, 5, 181, 25), Rect::new(129, 5, 159, 25)]
    );
}

#[test]
fn test_gone_and_absent_items() {
    init_logging();

    let style = ContainerStyle::row().with_justify_content(JustifyContent::SpaceBetween);
    let engine = FlexEngine::new(&style);
    let mut items = vec![
        Some(Item::new(ItemStyle::fixed(50, 20))),
        None,
        Some(Item::new(ItemStyle::fixed(50, 20).with_visibility(Visibility::Gone))),
        Some(Item::new(ItemStyle::fixed(50, 20))),
    ];
    let main = SizeConstraint::exactly(200);
    let cross = SizeConstraint::exactly(50);

    let mut lines = Vec::new();
    engine.partition(items.as_mut_slice(), main, cross, &mut lines).unwrap();
    engine.resolve_main_axis(items.as_mut_slice(), main, cross, &mut lines).unwrap();
    engine.resolve_cross_axis(cross, &mut lines);
    engine.stretch(items.as_mut_slice(), &lines).unwrap();

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].item_count, 4);
    assert_eq!(lines[0].gone_item_count, 2);
    assert_eq!(lines[0].main_size, 100);

    engine.position_line(items.as_mut_slice(), &mut lines[0], Size::new(200, 50), 0);
    let lefts: Vec<_> = items
        .iter()
        .flatten()
        .map(|item| item.frame().left)
        .collect();
    assert_eq!(lefts, vec![0, 0, 150]);
}

#[test]
fn test_max_line_caps_wrapping() {
    init_logging();

    let container = FlexContainer::with_children(
        ContainerStyle::row().with_wrap(FlexWrap::Wrap).with_max_line(2),
        (0..5).map(|_| Item::new(ItemStyle::fixed(40, 10).with_shrink(0.0))),
    );
    let mut root = Item::container(ItemStyle::default(), container);
    compute_layout(&mut root, &LayoutOptions::viewport(100, 100)).unwrap();

    let container = root.as_container().unwrap();
    let counts: Vec<_> = container.flex_lines().map(|line| line.item_count).collect();
    assert_eq!(counts, vec![2, 3]);
}

struct Counter {
    layouts: Rc<Cell<u32>>,
}

impl Measure for Counter {
    fn measure(&mut self, width: SizeConstraint, _height: SizeConstraint) -> Size {
        Size::new(width.size().min(60), 24)
    }

    fn on_layout(&mut self, _frame: Rect) {
        self.layouts.set(self.layouts.get() + 1);
    }
}

#[test]
fn test_leaf_hook_runs_only_on_frame_change() {
    init_logging();

    let layouts = Rc::new(Cell::new(0));
    let container = FlexContainer::with_children(
        ContainerStyle::row().with_justify_content(JustifyContent::Center),
        vec![Item::leaf(
            ItemStyle::default(),
            Counter {
                layouts: layouts.clone(),
            },
        )],
    );
    let mut root = Item::container(ItemStyle::default(), container);

    compute_layout(&mut root, &LayoutOptions::viewport(200, 50)).unwrap();
    compute_layout(&mut root, &LayoutOptions::viewport(200, 50)).unwrap();
    assert_eq!(layouts.get(), 1);
    assert_eq!(frames(&root), vec![Rect::new(70, 0, 130, 24)]);

    compute_layout(&mut root, &LayoutOptions::viewport(300, 50)).unwrap();
    assert_eq!(layouts.get(), 2);
    assert_eq!(frames(&root), vec![Rect::new(120, 0, 180, 24)]);
}

#[test]
fn test_baseline_alignment_in_a_cycle() {
    init_logging();

    let container = FlexContainer::with_children(
        ContainerStyle::row().with_align_items(trellis_core::AlignItems::Baseline),
        vec![
            Item::leaf(ItemStyle::default(), Intrinsic::new(40, 32).with_baseline(26)),
            Item::leaf(ItemStyle::default(), Intrinsic::new(40, 16).with_baseline(12)),
        ],
    );
    let mut root = Item::container(ItemStyle::default(), container);
    compute_layout(&mut root, &LayoutOptions::viewport(200, 50)).unwrap();

    assert_eq!(
        frames(&root),
        vec![Rect::new(0, 0, 40, 32), Rect::new(40, 14, 80, 30)]
    );
}

#[test]
fn test_nested_errors_reach_the_caller() {
    init_logging();

    let nested = FlexContainer::with_children(
        ContainerStyle::column(),
        vec![
            Item::new(ItemStyle::fixed(10, 10)),
            Item::new(ItemStyle::fixed(10, 10).with_basis_percent(1.5)),
        ],
    );
    let container = FlexContainer::with_children(
        ContainerStyle::row(),
        vec![Item::container(ItemStyle::default(), nested)],
    );
    let mut root = Item::container(ItemStyle::default(), container);

    let err = compute_layout(&mut root, &LayoutOptions::default()).unwrap_err();
    assert_eq!(err, LayoutError::invalid_item(1, "flex-basis-percent", 1.5));
}
