//! Fixed-capacity ring buffer of phase space points.

/// A single (displacement, velocity) sample
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhasePoint {
    pub displacement: f64,
    pub velocity: f64,
}

impl PhasePoint {
    pub const fn new(displacement: f64, velocity: f64) -> Self {
        Self {
            displacement,
            velocity,
        }
    }
}

/// Most recent phase points of one oscillator, oldest first.
///
/// Once full, each push overwrites the oldest sample in O(1).
#[derive(Debug, Clone)]
pub struct Trajectory {
    points: Vec<PhasePoint>,
    /// Index of the oldest point once the buffer has wrapped
    head: usize,
    capacity: usize,
}

impl Trajectory {
    /// Create an empty trajectory. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.points.len() == self.capacity
    }

    /// Append a point, evicting the oldest when full
    pub fn push(&mut self, point: PhasePoint) {
        if self.points.len() < self.capacity {
            self.points.push(point);
        } else {
            self.points[self.head] = point;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.head = 0;
    }

    /// Oldest retained point
    pub fn first(&self) -> Option<&PhasePoint> {
        self.points.get(self.head).or_else(|| self.points.first())
    }

    /// Most recent point
    pub fn last(&self) -> Option<&PhasePoint> {
        if self.points.is_empty() {
            None
        } else if self.head == 0 {
            self.points.last()
        } else {
            self.points.get(self.head - 1)
        }
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PhasePoint> + '_ {
        let (newer, older) = self.points.split_at(self.head);
        older.iter().chain(newer.iter())
    }
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::new(phasespace_types::DEFAULT_TRAJECTORY_CAPACITY)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a PhasePoint;
    type IntoIter = Box<dyn DoubleEndedIterator<Item = &'a PhasePoint> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
