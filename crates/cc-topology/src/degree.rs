//! Degree metrics and the visual node-size scale.
//!
//! The size scale maps degree linearly onto `[MIN_NODE_SIZE, MAX_NODE_SIZE]`
//! by dividing by the maximum degree.  A graph with no edges has a maximum
//! degree of zero; every node then gets `MIN_NODE_SIZE`.

pub const MIN_NODE_SIZE: f64 = 3.5;
pub const MAX_NODE_SIZE: f64 = 20.0;

/// Summary of a topology's degree distribution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DegreeStats {
    pub min:  usize,
    pub max:  usize,
    pub mean: f64,
    /// Nodes with degree 0.
    pub isolated: usize,
}

impl DegreeStats {
    pub fn from_degrees(degrees: impl IntoIterator<Item = usize>) -> Self {
        let mut min = usize::MAX;
        let mut max = 0;
        let mut total = 0usize;
        let mut count = 0usize;
        let mut isolated = 0;
        for d in degrees {
            min = min.min(d);
            max = max.max(d);
            total += d;
            count += 1;
            if d == 0 {
                isolated += 1;
            }
        }
        if count == 0 {
            return Self { min: 0, max: 0, mean: 0.0, isolated: 0 };
        }
        Self { min, max, mean: total as f64 / count as f64, isolated }
    }

    /// Display size for a node of `degree`.
    pub fn scaled_size(&self, degree: usize) -> f64 {
        if self.max == 0 {
            return MIN_NODE_SIZE;
        }
        let scale = (MAX_NODE_SIZE - MIN_NODE_SIZE) / self.max as f64;
        scale * degree as f64 + MIN_NODE_SIZE
    }
}
