use crate::geometry::point::Point;
use crate::utils::number::Number;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundRect<T: Number> {
    position: Point<T>,
    size: Point<T>,
}

impl<T: Number> BoundRect<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            position: Point::new(x, y),
            size: Point::new(width, height),
        }
    }

    pub fn from_ltrb(left: T, top: T, right: T, bottom: T) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn empty() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    pub fn position(&self) -> &Point<T> {
        &self.position
    }

    pub fn size(&self) -> &Point<T> {
        &self.size
    }

    pub fn x(&self) -> T {
        self.position.x
    }

    pub fn y(&self) -> T {
        self.position.y
    }

    pub fn width(&self) -> T {
        self.size.x
    }

    pub fn height(&self) -> T {
        self.size.y
    }

    pub fn left(&self) -> T {
        self.position.x
    }

    pub fn top(&self) -> T {
        self.position.y
    }

    pub fn right(&self) -> T {
        self.position.x + self.size.x
    }

    pub fn bottom(&self) -> T {
        self.position.y + self.size.y
    }

    pub fn is_empty(&self) -> bool {
        self.size.x <= T::zero() || self.size.y <= T::zero()
    }

    pub fn contains_rect(&self, other: &Self) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// Strict containment; points on the border are outside.
    pub fn contains_point(&self, point: &Point<T>) -> bool {
        point.x > self.left() && point.x < self.right() && point.y > self.top() && point.y < self.bottom()
    }

    pub fn intersects(&self, other: &Self) -> bool {
        self.left().max_num(other.left()) <= self.right().min_num(other.right())
            && self.top().max_num(other.top()) <= self.bottom().min_num(other.bottom())
    }

    pub fn mid_point(&self) -> Point<T> {
        let two = T::one() + T::one();

        Point::new(
            (self.left() + self.right()) / two,
            (self.top() + self.bottom()) / two,
        )
    }

    pub fn as_path(&self) -> Vec<Point<T>> {
        vec![
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.top()),
            Point::new(self.right(), self.bottom()),
            Point::new(self.left(), self.bottom()),
        ]
    }
}
