//! Render-facing view of the game and helpers for drawing it on a character grid.

use crate::config::Config;
use crate::types::{Rect, Rgb};

/// Everything a renderer needs for one frame
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct View {
    pub frame: u64,
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Rect,
    pub draw_color: Rgb,
    pub background_color: Rgb,
    pub screen_width: i32,
    pub screen_height: i32,
}

impl View {
    /// Rectangles in draw order
    pub fn rects(&self) -> [Rect; 3] {
        [self.left_paddle, self.right_paddle, self.ball]
    }
}

/// Inclusive cell range covered by a rectangle
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CellRect {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl CellRect {
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Maps pixel rectangles onto a `cols` x `rows` grid
#[derive(Debug, Copy, Clone)]
pub struct RenderHelper {
    cols: usize,
    rows: usize,
    screen_width: i32,
    screen_height: i32,
}

impl RenderHelper {
    pub fn new(cols: usize, rows: usize, config: &Config) -> Self {
        RenderHelper {
            cols,
            rows,
            screen_width: config.screen_width,
            screen_height: config.screen_height,
        }
    }

    /// Cells covered by `rect`, or `None` when it is entirely off screen.
    /// Any visible rectangle covers at least one cell.
    pub fn map_rect(&self, rect: &Rect) -> Option<CellRect> {
        let (left, right) = Self::map_span(rect.left(), rect.right(), self.screen_width, self.cols)?;
        let (top, bottom) =
            Self::map_span(rect.top(), rect.bottom(), self.screen_height, self.rows)?;
        Some(CellRect {
            left,
            top,
            right,
            bottom,
        })
    }

    fn map_span(start: i32, end: i32, extent: i32, cells: usize) -> Option<(usize, usize)> {
        if cells == 0 || extent <= 0 {
            return None;
        }
        let start = start.max(0) as i64;
        let end = end.min(extent) as i64;
        if start >= end {
            return None;
        }

        let extent = extent as i64;
        let cells = cells as i64;
        let first = start * cells / extent;
        // ceil(end * cells / extent) - 1
        let last = ((end * cells + extent - 1) / extent - 1).max(first);
        Some((first as usize, last as usize))
    }

    /// Boolean occupancy grid, `rows` vectors of `cols` cells
    pub fn rasterize(&self, view: &View) -> Vec<Vec<bool>> {
        let mut grid = vec![vec![false; self.cols]; self.rows];
        for rect in view.rects() {
            if let Some(cells) = self.map_rect(&rect) {
                for row in &mut grid[cells.top..=cells.bottom] {
                    for cell in &mut row[cells.left..=cells.right] {
                        *cell = true;
                    }
                }
            }
        }
        grid
    }
}
