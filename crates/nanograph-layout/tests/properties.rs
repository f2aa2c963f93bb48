//! Property tests for the measure/arrange passes.

use nanograph_core::{
    DockPosition, GridProperties, LayoutMode, LayoutTree, NodeId, Rect, StackOrientation,
};
use nanograph_layout::{measure, recalculate};
use proptest::prelude::*;

const EPSILON: f32 = 0.01;

fn dock_position() -> impl Strategy<Value = DockPosition> {
    prop_oneof![
        Just(DockPosition::Top),
        Just(DockPosition::Bottom),
        Just(DockPosition::Left),
        Just(DockPosition::Right),
    ]
}

fn layout_mode() -> impl Strategy<Value = LayoutMode> {
    prop_oneof![
        Just(LayoutMode::None),
        Just(LayoutMode::Stack),
        Just(LayoutMode::Dock),
        Just(LayoutMode::Grid),
    ]
}

/// Random tree: node `i` (i > 0) hangs under `parents[i - 1] % i`.
fn build_tree(parents: &[usize], modes: &[LayoutMode], sizes: &[(f32, f32)]) -> (LayoutTree, NodeId) {
    let mut tree = LayoutTree::new();
    let root = tree.create_root();
    let mut ids = vec![root];
    for (i, &parent) in parents.iter().enumerate() {
        let id = tree.insert_child(ids[parent % (i + 1)]).unwrap();
        ids.push(id);
    }

    for (i, &id) in ids.iter().enumerate() {
        let (width, height) = sizes[i % sizes.len()];
        let node = tree.get_mut(id).unwrap();
        node.with_layout(modes[i % modes.len()])
            .with_user_rect(Rect::new(0.0, 0.0, width, height));
        node.stack_orientation = if i % 2 == 0 {
            StackOrientation::Horizontal
        } else {
            StackOrientation::Vertical
        };
        node.grid = GridProperties::uniform(i % 3, (i + 1) % 4);
    }
    (tree, root)
}

/// Thinnest side of the overlap between two rects. Zero when disjoint.
fn overlap_depth(a: &Rect, b: &Rect) -> f32 {
    a.intersect(b).map_or(0.0, |r| r.width.min(r.height))
}

/// Dock `children` inside a seeded 400x300 root and return their rects.
fn dock_rects(children: &[(DockPosition, f32, f32)]) -> (Rect, Vec<Rect>) {
    let mut tree = LayoutTree::new();
    let root = tree.create_root();
    tree.get_mut(root).unwrap().with_layout(LayoutMode::Dock);
    let interior = Rect::new(0.0, 0.0, 400.0, 300.0);
    tree.seed_rect(root, interior);

    let ids: Vec<_> = children
        .iter()
        .map(|&(dock, width, height)| {
            let id = tree.insert_child(root).unwrap();
            tree.get_mut(id)
                .unwrap()
                .with_dock(dock)
                .with_user_rect(Rect::new(0.0, 0.0, width, height));
            id
        })
        .collect();

    recalculate(&mut tree, root);

    let rects = ids.iter().map(|&id| tree.get(id).unwrap().calculated_rect()).collect();
    (interior, rects)
}

fn snapshot(tree: &LayoutTree, root: NodeId) -> Vec<(f32, f32, Rect)> {
    tree.descendants(root)
        .map(|id| {
            let node = tree.get(id).unwrap();
            let size = node.calculated_size();
            (size.width, size.height, node.calculated_rect())
        })
        .collect()
}

proptest! {
    #[test]
    fn recalculate_is_idempotent(
        parents in prop::collection::vec(0usize..64, 0..40),
        modes in prop::collection::vec(layout_mode(), 1..8),
        sizes in prop::collection::vec((0.0f32..200.0, 0.0f32..200.0), 1..8),
    ) {
        let (mut tree, root) = build_tree(&parents, &modes, &sizes);
        tree.seed_rect(root, Rect::new(0.0, 0.0, 640.0, 480.0));

        recalculate(&mut tree, root);
        let first = snapshot(&tree, root);
        recalculate(&mut tree, root);
        let second = snapshot(&tree, root);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn layout_never_produces_nan(
        parents in prop::collection::vec(0usize..64, 0..40),
        modes in prop::collection::vec(layout_mode(), 1..8),
        sizes in prop::collection::vec((0.0f32..200.0, 0.0f32..200.0), 1..8),
    ) {
        let (mut tree, root) = build_tree(&parents, &modes, &sizes);
        recalculate(&mut tree, root);

        for (width, height, rect) in snapshot(&tree, root) {
            prop_assert!(width.is_finite() && height.is_finite());
            prop_assert!(rect.x.is_finite() && rect.y.is_finite());
            prop_assert!(rect.width.is_finite() && rect.height.is_finite());
        }
    }

    #[test]
    fn measure_ignores_later_values(
        parents in prop::collection::vec(0usize..64, 0..40),
        modes in prop::collection::vec(layout_mode(), 1..8),
        sizes in prop::collection::vec((0.0f32..200.0, 0.0f32..200.0), 1..8),
    ) {
        // Sizes from a fresh tree match sizes from a tree whose nodes still
        // carry results of an earlier, different layout.
        let (mut fresh, root) = build_tree(&parents, &modes, &sizes);
        measure(&mut fresh, root);

        let (mut reused, root) = build_tree(&parents, &modes, &sizes);
        for id in reused.descendants(root).collect::<Vec<_>>() {
            reused.set_calculated_size(id, nanograph_core::Size::new(999.0, 999.0));
        }
        measure(&mut reused, root);

        let fresh_sizes: Vec<_> = fresh.descendants(root).map(|id| fresh.get(id).unwrap().calculated_size()).collect();
        let reused_sizes: Vec<_> = reused.descendants(root).map(|id| reused.get(id).unwrap().calculated_size()).collect();
        prop_assert_eq!(fresh_sizes, reused_sizes);
    }

    #[test]
    fn dock_children_tile_interior(
        children in prop::collection::vec((dock_position(), 0.0f32..30.0, 0.0f32..30.0), 1..6),
    ) {
        let (interior, rects) = dock_rects(&children);

        // No overlaps beyond float rounding at shared edges
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                prop_assert!(overlap_depth(a, b) < EPSILON, "{:?} overlaps {:?}", a, b);
            }
        }

        // Total area covers the interior, and the union is the interior
        let area: f32 = rects.iter().map(Rect::area).sum();
        prop_assert!((area - interior.area()).abs() < 1.0);
        let union = rects.iter().skip(1).fold(rects[0], |acc, r| acc.union(r));
        prop_assert!((union.width - interior.width).abs() < EPSILON);
        prop_assert!((union.height - interior.height).abs() < EPSILON);
    }

    #[test]
    fn horizontal_stack_widths_sum(widths in prop::collection::vec(0.0f32..100.0, 1..10)) {
        let mut tree = LayoutTree::new();
        let root = tree.create_root();
        tree.get_mut(root)
            .unwrap()
            .with_stack(StackOrientation::Horizontal)
            .with_user_rect(Rect::new(0.0, 0.0, 0.0, 10.0));
        let ids: Vec<_> = widths
            .iter()
            .map(|&width| {
                let id = tree.insert_child(root).unwrap();
                tree.get_mut(id).unwrap().with_user_rect(Rect::new(0.0, 0.0, width, 10.0));
                id
            })
            .collect();

        recalculate(&mut tree, root);

        let measured = tree.get(root).unwrap().calculated_size().width;
        let rects: Vec<_> = ids.iter().map(|&id| tree.get(id).unwrap().calculated_rect()).collect();
        let total: f32 = rects.iter().map(|r| r.width).sum();
        prop_assert!((total - measured).abs() < EPSILON);

        for pair in rects.windows(2) {
            prop_assert!(pair[0].right() <= pair[1].x + EPSILON);
        }
    }

    #[test]
    fn grid_cells_follow_index(rows in 1usize..6, columns in 1usize..6) {
        let mut tree = LayoutTree::new();
        let root = tree.create_root();
        tree.get_mut(root).unwrap().with_grid(GridProperties::uniform(rows, columns));
        let (width, height) = (600.0f32, 360.0f32);
        tree.seed_rect(root, Rect::new(0.0, 0.0, width, height));

        let ids: Vec<_> = (0..rows * columns).map(|_| tree.insert_child(root).unwrap()).collect();
        recalculate(&mut tree, root);

        for (i, &id) in ids.iter().enumerate() {
            let rect = tree.get(id).unwrap().calculated_rect();
            let expected_x = (i % columns) as f32 * (width / columns as f32);
            let expected_y = (i / columns) as f32 * (height / rows as f32);
            prop_assert!((rect.x - expected_x).abs() < EPSILON);
            prop_assert!((rect.y - expected_y).abs() < EPSILON);
            prop_assert!((rect.width - width / columns as f32).abs() < EPSILON);
            prop_assert!((rect.height - height / rows as f32).abs() < EPSILON);
        }
    }
}

#[test]
fn dock_tiling_tolerates_rounding() {
    // Fractional edges whose sums round one ulp past the opposite cursor
    let (_, rects) = dock_rects(&[
        (DockPosition::Right, 18.55605, 0.0),
        (DockPosition::Left, 24.7957, 0.0),
        (DockPosition::Top, 0.0, 0.0),
    ]);

    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            assert!(overlap_depth(a, b) < EPSILON, "{a:?} overlaps {b:?}");
        }
    }
    let width: f32 = rects.iter().map(|r| r.width).sum();
    assert!((width - 400.0).abs() < EPSILON);
}

#[test]
fn deep_tree_recalculates_without_overflow() {
    let mut tree = LayoutTree::with_capacity(200_000);
    let root = tree.create_root();
    let mut tip = root;
    for _ in 0..199_999 {
        tip = tree.insert_child(tip).unwrap();
        tree.get_mut(tip).unwrap().with_stack(StackOrientation::Vertical);
    }
    tree.get_mut(tip)
        .unwrap()
        .with_layout(LayoutMode::None)
        .with_user_rect(Rect::new(0.0, 0.0, 4.0, 4.0));
    tree.get_mut(root).unwrap().with_stack(StackOrientation::Vertical);
    tree.seed_rect(root, Rect::new(0.0, 0.0, 100.0, 100.0));

    recalculate(&mut tree, root);

    assert_eq!(tree.get(root).unwrap().calculated_size().height, 4.0);
    let tip_rect = tree.get(tip).unwrap().calculated_rect();
    assert_eq!(tip_rect, Rect::new(0.0, 0.0, 100.0, 4.0));
}
