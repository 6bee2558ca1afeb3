//! Hit regions recorded while drawing.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Element regions in draw order.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, String)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn insert(&mut self, rect: Rect, id: impl Into<String>) {
        self.regions.push((rect, id.into()));
    }

    /// Find the element at the given coordinates.
    /// Later regions win (last drawn = on top).
    pub fn hit_test(&self, x: u16, y: u16) -> Option<String> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|(_, id)| id.clone())
    }
}
