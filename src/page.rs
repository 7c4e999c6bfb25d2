//! Annotated page model: tip regions and pointer hit testing.
//!
//! A page is the caller side of the tooltip boundary: rectangular
//! regions in document coordinates, each carrying the content shown
//! while the pointer is inside it. Point queries go through a spatial
//! grid so a move event scans one cell instead of every region.

use std::collections::HashMap;

use kurbo::{Point, Rect};

/// Cell size in document pixels. Each cell is CELL_SIZE × CELL_SIZE.
const CELL_SIZE: f64 = 64.0;

/// Identifier of a region within its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u64);

/// A rectangle of the document with tooltip content attached.
#[derive(Debug, Clone)]
pub struct TipRegion {
    pub id: RegionId,
    pub rect: Rect,
    pub content: String,
    /// Content is markup and goes through the sanitizer on show.
    pub rich: bool,
}

/// A document with hover regions and a lazily rebuilt hit grid.
#[derive(Debug)]
pub struct Page {
    width: f64,
    height: f64,
    regions: Vec<TipRegion>,
    next_region_id: u64,
    grid: Option<HitGrid>,
}

impl Page {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            regions: Vec::new(),
            next_region_id: 0,
            grid: None,
        }
    }

    /// Add a plain-text region. Later additions sit on top of earlier
    /// ones where they overlap.
    pub fn add_region(&mut self, rect: Rect, content: impl Into<String>) -> RegionId {
        self.push_region(rect, content.into(), false)
    }

    /// Add a region whose content is markup.
    pub fn add_rich_region(&mut self, rect: Rect, content: impl Into<String>) -> RegionId {
        self.push_region(rect, content.into(), true)
    }

    fn push_region(&mut self, rect: Rect, content: String, rich: bool) -> RegionId {
        self.next_region_id += 1;
        let id = RegionId(self.next_region_id);
        self.regions.push(TipRegion {
            id,
            rect,
            content,
            rich,
        });
        self.grid = None;
        id
    }

    pub fn region(&self, id: RegionId) -> Option<&TipRegion> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn regions(&self) -> &[TipRegion] {
        &self.regions
    }

    /// The topmost region containing `pos`, if any.
    pub fn region_at(&mut self, pos: Point) -> Option<RegionId> {
        if self.grid.is_none() {
            self.grid = Some(HitGrid::new(&self.regions, self.width, self.height));
        }
        self.grid.as_ref().and_then(|grid| grid.topmost_at(pos))
    }
}

/// Spatial grid: O(1) cell lookup + O(k) scan within the cell.
#[derive(Debug)]
struct HitGrid {
    /// Flat array of cells, indexed by `row * cols + col`. Each cell
    /// holds region ids that overlap it, in insertion order (low→high).
    cells: Vec<Vec<RegionId>>,
    /// Rectangle for each region, keyed by region id.
    rects: HashMap<RegionId, Rect>,
    cols: usize,
    rows: usize,
}

impl HitGrid {
    fn new(regions: &[TipRegion], page_w: f64, page_h: f64) -> Self {
        let cols = ((page_w / CELL_SIZE).ceil() as usize).max(1);
        let rows = ((page_h / CELL_SIZE).ceil() as usize).max(1);
        let mut cells: Vec<Vec<RegionId>> = vec![Vec::new(); cols * rows];
        let mut rects = HashMap::with_capacity(regions.len());

        for region in regions {
            rects.insert(region.id, region.rect);
            let (c0, r0, c1, r1) = cell_range(region.rect, cols, rows);
            for row in r0..=r1 {
                for col in c0..=c1 {
                    cells[row * cols + col].push(region.id);
                }
            }
        }

        Self {
            cells,
            rects,
            cols,
            rows,
        }
    }

    /// Find the topmost region containing `pos`.
    ///
    /// Cell entries are in insertion order, so reverse iteration yields
    /// the most recently added region first.
    fn topmost_at(&self, pos: Point) -> Option<RegionId> {
        if pos.x < 0.0 || pos.y < 0.0 {
            return None;
        }
        let col = ((pos.x / CELL_SIZE) as usize).min(self.cols - 1);
        let row = ((pos.y / CELL_SIZE) as usize).min(self.rows - 1);
        let cell = &self.cells[row * self.cols + col];
        cell.iter()
            .rev()
            .find(|&&id| self.rects.get(&id).is_some_and(|r| r.contains(pos)))
            .copied()
    }
}

/// Compute the inclusive cell range `(col_start, row_start, col_end,
/// row_end)` for a rectangle.
fn cell_range(rect: Rect, cols: usize, rows: usize) -> (usize, usize, usize, usize) {
    let c0 = (rect.x0.max(0.0) / CELL_SIZE) as usize;
    let r0 = (rect.y0.max(0.0) / CELL_SIZE) as usize;
    let c1 = (rect.x1.max(0.0) / CELL_SIZE) as usize;
    let r1 = (rect.y1.max(0.0) / CELL_SIZE) as usize;
    (
        c0.min(cols - 1),
        r0.min(rows - 1),
        c1.min(cols - 1),
        r1.min(rows - 1),
    )
}
