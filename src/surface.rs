//! Display surface abstraction
//!
//! The game draws through primitive shapes keyed by opaque handles, the way
//! a retained-mode canvas works: create a shape once, move it with
//! `set_coords` every frame, delete it when its entity dies. Coordinate
//! system: origin at the top-left corner, y grows downward.
//!
//! Window setup, input wiring and font handling live behind this trait and
//! are the host's problem.

/// Opaque handle to a shape owned by the surface
pub type ShapeId = u32;

/// A retained-mode drawing surface
pub trait Surface {
    /// Field width in display units
    fn width(&self) -> f32;
    /// Field height in display units
    fn height(&self) -> f32;

    /// Create a filled oval; position it later with `set_coords`
    fn create_oval(&mut self, fill: &str) -> ShapeId;
    /// Create an outlined rectangle
    fn create_rect(&mut self, outline: &str) -> ShapeId;
    /// Create a line segment
    fn create_line(&mut self, color: &str) -> ShapeId;
    /// Create a centered text item
    fn create_text(&mut self, text: &str, fill: &str) -> ShapeId;

    /// Set a shape's bounding coordinates (for text: both points = center)
    fn set_coords(&mut self, id: ShapeId, x1: f32, y1: f32, x2: f32, y2: f32);
    /// Show or hide a shape without deleting it
    fn set_visible(&mut self, id: ShapeId, visible: bool);
    /// Remove a shape permanently
    fn delete(&mut self, id: ShapeId);
}

/// Headless surface: hands out handles and discards all drawing. Used by the
/// demo binary and by tests that only care about simulation behavior.
#[derive(Debug, Clone)]
pub struct NullSurface {
    width: f32,
    height: f32,
    next_id: ShapeId,
    live_shapes: usize,
}

impl NullSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            next_id: 1,
            live_shapes: 0,
        }
    }

    /// Number of shapes created and not yet deleted
    pub fn live_shapes(&self) -> usize {
        self.live_shapes
    }

    fn alloc(&mut self) -> ShapeId {
        let id = self.next_id;
        self.next_id += 1;
        self.live_shapes += 1;
        id
    }
}

impl Surface for NullSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn create_oval(&mut self, _fill: &str) -> ShapeId {
        self.alloc()
    }

    fn create_rect(&mut self, _outline: &str) -> ShapeId {
        self.alloc()
    }

    fn create_line(&mut self, _color: &str) -> ShapeId {
        self.alloc()
    }

    fn create_text(&mut self, _text: &str, _fill: &str) -> ShapeId {
        self.alloc()
    }

    fn set_coords(&mut self, _id: ShapeId, _x1: f32, _y1: f32, _x2: f32, _y2: f32) {}

    fn set_visible(&mut self, _id: ShapeId, _visible: bool) {}

    fn delete(&mut self, _id: ShapeId) {
        self.live_shapes = self.live_shapes.saturating_sub(1);
    }
}
