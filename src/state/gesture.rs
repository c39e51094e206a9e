// Gesture tracking: which interaction is in progress and its last sample.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// One finger or a mouse button is down.
    Dragging { last: Point },
    /// Two fingers are down. `origin` is their midpoint in viewport coordinates.
    Pinching { last_distance: f64, origin: Point },
}

impl Gesture {
    /// Gesture for a fresh set of contact points. Extra fingers past the second are ignored.
    pub fn begin(points: &[Point]) -> Gesture {
        match points {
            [] => Gesture::Idle,
            [p] => Gesture::Dragging { last: *p },
            [a, b, ..] => Gesture::Pinching {
                last_distance: a.distance(*b),
                origin: a.midpoint(*b),
            },
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Gesture::Idle)
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self, Gesture::Pinching { .. })
    }
}
