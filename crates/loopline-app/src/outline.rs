use loopline_engine::render::LineVertex;

/// Maximum number of vertices the outline will ever hold.
///
/// Clicks while the outline is at capacity are ignored.
pub const MAX_VERTICES: usize = 8;

/// Once an append pushes the vertex count past this, the outline is closed
/// into a loop by re-appending the first vertex.
pub const CLOSE_THRESHOLD: usize = 6;

/// Append-only list of line-list vertices built from clicks.
///
/// Semantics per click (positions in NDC):
/// - first click appends the vertex once, as the shape's start anchor
/// - later clicks append the vertex twice; in line-list pairing the duplicate
///   ends the previous segment and starts the next one
/// - the append that crosses [`CLOSE_THRESHOLD`] also re-appends vertex 0,
///   closing the shape
/// - at [`MAX_VERTICES`] the click has no effect
///
/// Nothing is ever removed; there is no undo or clear.
#[derive(Debug, Default)]
pub struct Outline {
    vertices: Vec<LineVertex>,
}

impl Outline {
    pub fn new() -> Self {
        Self {
            vertices: Vec::with_capacity(MAX_VERTICES),
        }
    }

    /// Records a click at NDC position `(x, y)`.
    pub fn push(&mut self, x: f32, y: f32) {
        if self.is_full() {
            return;
        }

        let v = LineVertex::new(x, y, 0.0);

        if !self.vertices.is_empty() {
            // Duplicate pairs the new vertex with the previous one.
            self.vertices.push(v);
        }
        self.vertices.push(v);

        if self.vertices.len() > CLOSE_THRESHOLD {
            let first = self.vertices[0];
            self.vertices.push(first);
        }
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_full(&self) -> bool {
        self.vertices.len() >= MAX_VERTICES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floats(outline: &Outline) -> &[f32] {
        bytemuck::cast_slice(outline.vertices())
    }

    // ── growth ────────────────────────────────────────────────────────────

    #[test]
    fn first_click_appends_one_vertex() {
        let mut o = Outline::new();
        o.push(0.5, 0.5);

        assert_eq!(o.vertex_count(), 1);
        assert_eq!(floats(&o), &[0.5, 0.5, 0.0]);
    }

    #[test]
    fn second_click_appends_two_vertices_pairing_with_the_first() {
        let mut o = Outline::new();
        o.push(-0.5, 0.0);
        o.push(0.5, 0.0);

        assert_eq!(o.vertex_count(), 3);
        // Segment 0-1 spans the two clicks; the duplicate at index 2 starts
        // the next segment.
        assert_eq!(o.vertices()[0], LineVertex::new(-0.5, 0.0, 0.0));
        assert_eq!(o.vertices()[1], LineVertex::new(0.5, 0.0, 0.0));
        assert_eq!(o.vertices()[2], o.vertices()[1]);
    }

    #[test]
    fn float_length_is_always_a_multiple_of_three_and_bounded() {
        let mut o = Outline::new();
        let clicks = [
            (0.0, 0.0),
            (0.1, 0.2),
            (-0.3, 0.4),
            (0.5, -0.6),
            (0.7, 0.8),
            (-0.9, -0.1),
        ];

        for (x, y) in clicks {
            o.push(x, y);
            assert_eq!(floats(&o).len() % 3, 0);
            assert!(floats(&o).len() <= MAX_VERTICES * 3);
        }
    }

    // ── closing ───────────────────────────────────────────────────────────

    #[test]
    fn crossing_the_threshold_closes_the_loop_with_the_first_vertex() {
        let mut o = Outline::new();
        o.push(0.1, 0.1); // count 1
        o.push(0.2, 0.2); // count 3
        o.push(0.3, 0.3); // count 5
        o.push(0.4, 0.4); // count 7, crosses CLOSE_THRESHOLD, closes to 8

        assert_eq!(o.vertex_count(), MAX_VERTICES);
        let f = floats(&o);
        assert_eq!(&f[f.len() - 3..], &f[..3]);
    }

    #[test]
    fn no_closure_before_the_threshold() {
        let mut o = Outline::new();
        o.push(0.1, 0.1);
        o.push(0.2, 0.2);
        o.push(0.3, 0.3);

        assert_eq!(o.vertex_count(), 5);
        assert!(!o.is_full());
        assert_ne!(o.vertices()[4], o.vertices()[0]);
    }

    // ── capacity ──────────────────────────────────────────────────────────

    #[test]
    fn clicks_at_capacity_are_ignored() {
        let mut o = Outline::new();
        for i in 0..4 {
            o.push(i as f32 * 0.1, 0.0);
        }
        assert!(o.is_full());

        let before = o.vertices().to_vec();
        o.push(0.9, 0.9);
        o.push(-0.9, -0.9);

        assert_eq!(o.vertices(), &before[..]);
    }

    #[test]
    fn empty_outline_draws_zero_vertices() {
        let o = Outline::new();
        assert!(o.vertices().is_empty());
        assert_eq!(o.vertex_count(), 0);
    }
}
