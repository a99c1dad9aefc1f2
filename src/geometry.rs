use crate::types::Terrain;

/// Side length every bought parcel must have on both axes.
pub const TERRAIN_SIZE: u64 = 3;

impl Terrain {
    pub fn is_well_formed(&self) -> bool {
        self.x1 < self.x2 && self.y1 < self.y2
    }

    /// Edges may touch the outer bound.
    pub fn is_within(&self, outer: &Terrain) -> bool {
        self.x1 >= outer.x1 && self.x2 <= outer.x2 && self.y1 >= outer.y1 && self.y2 <= outer.y2
    }

    /// True when the two rectangles share interior area. Touching edges
    /// or corners do not count.
    pub fn overlaps(&self, other: &Terrain) -> bool {
        !(self.x2 <= other.x1 || other.x2 <= self.x1 || self.y2 <= other.y1 || other.y2 <= self.y1)
    }

    pub fn is_allotted_size(&self, side: u64) -> bool {
        self.x2.checked_sub(self.x1) == Some(side) && self.y2.checked_sub(self.y1) == Some(side)
    }
}
