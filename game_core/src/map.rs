use glam::Vec2;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Rectangle for a sprite whose position is its center
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            position: center - size * 0.5,
            size,
        }
    }

    pub fn end(&self) -> Vec2 {
        self.position + self.size
    }

    /// Half-open containment: the far edges are outside the rectangle
    pub fn has_point(&self, point: Vec2) -> bool {
        let end = self.end();
        point.x >= self.position.x
            && point.y >= self.position.y
            && point.x < end.x
            && point.y < end.y
    }
}
