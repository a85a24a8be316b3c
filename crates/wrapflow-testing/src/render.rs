//! ASCII rendering of flow layouts
//!
//! Renders placed items as `X` cells on a bordered grid. Rendering also checks
//! the two placement invariants a flow layout must keep: every item receives a
//! placement and no two placements overlap.

use std::collections::HashMap;

use wrapflow_graphics::{Rect, Size};
use wrapflow_layout::{FlowLayout, ProposedSize};

use crate::item::TestItem;

/// Items after a layout pass, together with the size they were laid out in.
#[derive(Clone, Copy, Debug)]
pub struct LayoutDescription<'a> {
    pub items: &'a [TestItem],
    pub reported_size: Size,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    Unplaced { index: usize },
    Overlap { first: usize, second: usize },
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Unplaced { index } => write!(f, "item {index} was never placed"),
            RenderError::Overlap { first, second } => {
                write!(f, "items {first} and {second} overlap")
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Measures `items` within `bounds`, then places them using the measured size
/// as the proposal, the way a host negotiates with the layout.
pub fn layout<'a>(
    flow: &FlowLayout,
    items: &'a [TestItem],
    bounds: Size,
) -> LayoutDescription<'a> {
    for item in items {
        item.reset();
    }
    let size = flow.measure(ProposedSize::from(bounds), items);
    flow.place(Rect::from_size(bounds), ProposedSize::from(size), items);
    log::debug!("test layout of {} items measured {size:?} in {bounds:?}", items.len());
    LayoutDescription {
        items,
        reported_size: bounds,
    }
}

/// Physical rectangles of every placed item, in input order.
pub fn placed_rects(items: &[TestItem]) -> Result<Vec<Rect>, RenderError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.placement()
                .map(|placement| Rect::from_origin_size(placement.position, placement.size))
                .ok_or(RenderError::Unplaced { index })
        })
        .collect()
}

/// Grid cells covered by each item, failing on the first shared cell.
fn occupied_cells(items: &[TestItem]) -> Result<HashMap<(i64, i64), usize>, RenderError> {
    let mut cells = HashMap::new();
    for (index, rect) in placed_rects(items)?.into_iter().enumerate() {
        let (left, top) = (rect.x as i64, rect.y as i64);
        let (right, bottom) = (rect.max_x() as i64, rect.max_y() as i64);
        for y in top..bottom {
            for x in left..right {
                if let Some(first) = cells.insert((x, y), index) {
                    return Err(RenderError::Overlap {
                        first,
                        second: index,
                    });
                }
            }
        }
    }
    Ok(cells)
}

fn render_rows(description: &LayoutDescription<'_>) -> Result<Vec<String>, RenderError> {
    let cells = occupied_cells(description.items)?;
    let width = description.reported_size.width as i64;
    let height = description.reported_size.height as i64;
    Ok((0..height)
        .map(|y| {
            (0..width)
                .map(|x| if cells.contains_key(&(x, y)) { 'X' } else { ' ' })
                .collect()
        })
        .collect())
}

/// Renders the layout inside a `+---+` border sized to the reported size.
pub fn render(description: &LayoutDescription<'_>) -> Result<String, RenderError> {
    let rows = render_rows(description)?;
    let border = format!(
        "+{}+",
        "-".repeat(description.reported_size.width.max(0.0) as usize)
    );
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(border.clone());
    lines.extend(rows.into_iter().map(|row| format!("|{row}|")));
    lines.push(border);
    Ok(lines.join("\n"))
}

/// Renders the layout without a border, trimming trailing blanks on each row.
pub fn render_unbordered(description: &LayoutDescription<'_>) -> Result<String, RenderError> {
    let rows = render_rows(description)?;
    Ok(rows
        .iter()
        .map(|row| row.trim_end())
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
