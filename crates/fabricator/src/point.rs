use std::ops::{Index, IndexMut};

use crate::{
    fabricator::Fabricator,
    random::OsRandom,
    regression::{self, LinearFit},
};

/// A single sample, i.e. one data point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An ordered sequence of points, kept in ascending order of x.
///
/// [`add`](Self::add) preserves that order. The unchecked [`push`](Self::push),
/// [`Extend`], [`FromIterator`] and `From<Vec<Point>>` append as given, for
/// sources that are already sorted; call [`sort`](Self::sort) whenever the
/// order cannot be guaranteed by construction.
///
/// A point set is mutated in place. [`Clone`] yields a fully independent copy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSet(Vec<Point>);

impl PointSet {
    /// Creates an empty point set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a point, keeping ascending order of x.
    ///
    /// The point goes immediately before the first existing point whose x is
    /// not less than its own, so it lands ahead of any points with equal x.
    pub fn add(&mut self, point: Point) {
        #[allow(clippy::neg_cmp_op_on_partial_ord)]
        let index = self
            .0
            .iter()
            .position(|existing| !(existing.x < point.x))
            .unwrap_or(self.0.len());

        self.0.insert(index, point);
    }

    /// Appends a point without checking order.
    pub fn push(&mut self, point: Point) {
        self.0.push(point);
    }

    /// Sorts the points in ascending order of x.
    pub fn sort(&mut self) {
        self.0.sort_by(|a, b| a.x.total_cmp(&b.x));
    }

    /// Returns true if the points are in ascending order of x.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.0.windows(2).all(|pair| pair[0].x <= pair[1].x)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.0.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [Point] {
        &mut self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Point> {
        self.0.iter_mut()
    }

    /// Fits a line to the points using least squares.
    ///
    /// See [`regression::fit`] for behavior on degenerate input.
    #[must_use]
    pub fn linear_regression(&self) -> LinearFit {
        regression::fit(&self.0)
    }

    /// Returns a perfect (noise-free) fabricator fitted to the points.
    #[must_use]
    pub fn fabricate(&self) -> Fabricator<OsRandom> {
        Fabricator::fit(self)
    }
}

impl From<Vec<Point>> for PointSet {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl From<PointSet> for Vec<Point> {
    fn from(set: PointSet) -> Self {
        set.0
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Point> for PointSet {
    fn extend<T: IntoIterator<Item = Point>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for PointSet {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut PointSet {
    type Item = &'a mut Point;
    type IntoIter = std::slice::IterMut<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl Index<usize> for PointSet {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for PointSet {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}
