use smallvec::SmallVec;

use crate::core::Glyph;

#[derive(Debug, Clone, Copy, PartialEq)]
struct HitBox {
    flat_index: usize,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl HitBox {
    fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }
}

/// Uniform-bucket spatial index over precomputed glyph boxes.
///
/// Built once per layout; a surface-wide pointer position resolves to at most
/// one glyph without per-glyph event handlers. Bucket size is the largest glyph
/// dimension, so each glyph lands in at most four buckets.
#[derive(Debug, Clone, Default)]
pub struct GlyphHitMap {
    origin_x: f64,
    origin_y: f64,
    cell_size: f64,
    columns: usize,
    rows: usize,
    buckets: Vec<SmallVec<[usize; 4]>>,
    boxes: Vec<HitBox>,
}

impl GlyphHitMap {
    #[must_use]
    pub fn build(glyphs: &[Glyph]) -> Self {
        let boxes: Vec<HitBox> = glyphs
            .iter()
            .filter(|glyph| {
                glyph.x.is_finite()
                    && glyph.y.is_finite()
                    && glyph.width > 0.0
                    && glyph.height > 0.0
            })
            .map(|glyph| HitBox {
                flat_index: glyph.flat_index,
                x0: glyph.x,
                y0: glyph.y,
                x1: glyph.right(),
                y1: glyph.bottom(),
            })
            .collect();
        if boxes.is_empty() {
            return Self::default();
        }

        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut cell_size = 0.0_f64;
        for hit_box in &boxes {
            min_x = min_x.min(hit_box.x0);
            min_y = min_y.min(hit_box.y0);
            max_x = max_x.max(hit_box.x1);
            max_y = max_y.max(hit_box.y1);
            cell_size = cell_size
                .max(hit_box.x1 - hit_box.x0)
                .max(hit_box.y1 - hit_box.y0);
        }

        let columns = (((max_x - min_x) / cell_size).ceil() as usize).max(1);
        let rows = (((max_y - min_y) / cell_size).ceil() as usize).max(1);
        let mut map = Self {
            origin_x: min_x,
            origin_y: min_y,
            cell_size,
            columns,
            rows,
            buckets: vec![SmallVec::new(); columns * rows],
            boxes,
        };

        for (slot, hit_box) in map.boxes.iter().enumerate() {
            let (c0, r0) = map.bucket_coords(hit_box.x0, hit_box.y0);
            // Right/bottom edges are exclusive, so step back an ulp-sized amount.
            let (c1, r1) = map.bucket_coords(
                hit_box.x1 - f64::EPSILON * hit_box.x1.abs().max(1.0),
                hit_box.y1 - f64::EPSILON * hit_box.y1.abs().max(1.0),
            );
            for row in r0..=r1 {
                for column in c0..=c1 {
                    map.buckets[row * map.columns + column].push(slot);
                }
            }
        }
        map
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Flat index of the glyph whose box contains `(x, y)`, if any.
    #[must_use]
    pub fn hit(&self, x: f64, y: f64) -> Option<usize> {
        if self.boxes.is_empty() || !x.is_finite() || !y.is_finite() {
            return None;
        }
        if x < self.origin_x || y < self.origin_y {
            return None;
        }
        let column = ((x - self.origin_x) / self.cell_size).floor() as usize;
        let row = ((y - self.origin_y) / self.cell_size).floor() as usize;
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.buckets[row * self.columns + column]
            .iter()
            .map(|slot| self.boxes[*slot])
            .find(|hit_box| hit_box.contains(x, y))
            .map(|hit_box| hit_box.flat_index)
    }

    fn bucket_coords(&self, x: f64, y: f64) -> (usize, usize) {
        let column = ((x - self.origin_x) / self.cell_size).floor().max(0.0) as usize;
        let row = ((y - self.origin_y) / self.cell_size).floor().max(0.0) as usize;
        (column.min(self.columns - 1), row.min(self.rows - 1))
    }
}
