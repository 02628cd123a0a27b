//! Geometry and tree fixtures.

use ferrodrop::{ItemId, MeasureTable, Rect, TreeNode, ZoneId};

/// Item ids `prefix0..prefixN`.
pub fn item_ids(prefix: &str, count: usize) -> Vec<ItemId> {
    (0..count).map(|i| ItemId::new(format!("{prefix}{i}"))).collect()
}

/// Lay `items` out top to bottom from `origin_y`, each `row_height` tall and
/// `width` wide, and register the enclosing zone bounds.
pub fn vertical_stack(
    zone: impl Into<ZoneId>,
    items: &[ItemId],
    origin_y: f32,
    width: f32,
    row_height: f32,
) -> MeasureTable {
    let mut table = MeasureTable::new();
    add_vertical_stack(&mut table, zone, items, 0.0, origin_y, width, row_height);
    table
}

/// Like [`vertical_stack`], but into an existing table at `(x, y)`.
pub fn add_vertical_stack(
    table: &mut MeasureTable,
    zone: impl Into<ZoneId>,
    items: &[ItemId],
    x: f32,
    y: f32,
    width: f32,
    row_height: f32,
) {
    for (i, id) in items.iter().enumerate() {
        table.set_item(id.clone(), Rect::new(x, y + i as f32 * row_height, width, row_height));
    }
    let height = items.len().max(1) as f32 * row_height;
    table.set_zone(zone, Rect::new(x, y, width, height));
}

/// Lay `items` out left to right from x = 0.
pub fn horizontal_row(zone: impl Into<ZoneId>, items: &[ItemId], cell_width: f32, height: f32) -> MeasureTable {
    let mut table = MeasureTable::new();
    for (i, id) in items.iter().enumerate() {
        table.set_item(id.clone(), Rect::new(i as f32 * cell_width, 0.0, cell_width, height));
    }
    let width = items.len().max(1) as f32 * cell_width;
    table.set_zone(zone, Rect::new(0.0, 0.0, width, height));
    table
}

/// Lay `items` out row-major in `columns` square cells of `cell` size.
pub fn grid(zone: impl Into<ZoneId>, items: &[ItemId], columns: usize, cell: f32) -> MeasureTable {
    let columns = columns.max(1);
    let mut table = MeasureTable::new();
    for (i, id) in items.iter().enumerate() {
        let (row, col) = (i / columns, i % columns);
        table.set_item(id.clone(), Rect::new(col as f32 * cell, row as f32 * cell, cell, cell));
    }
    let rows = items.len().div_ceil(columns).max(1);
    table.set_zone(zone, Rect::new(0.0, 0.0, columns as f32 * cell, rows as f32 * cell));
    table
}

/// ```text
/// root
/// ├── n1
/// │   └── n2
/// └── n3
/// ```
pub fn sample_tree() -> TreeNode<()> {
    TreeNode::new("root", ())
        .with_child(TreeNode::new("n1", ()).with_child(TreeNode::new("n2", ())))
        .with_child(TreeNode::new("n3", ()))
}
