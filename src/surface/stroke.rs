use egui::Pos2;

/// Points of one continuous gesture. Dropped once the gesture ends; the ink
/// itself already lives in the raster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokePath {
    points: Vec<Pos2>,
}

impl StrokePath {
    pub fn starting_at(point: Pos2) -> Self {
        Self {
            points: vec![point],
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    /// Current pen position
    pub fn last(&self) -> Option<Pos2> {
        self.points.last().copied()
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
