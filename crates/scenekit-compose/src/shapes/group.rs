// Imports
use super::Rect;
use crate::layout::Alignment;
use crate::transform::Resizable;
use serde::{Deserialize, Serialize};

/// How a group places its children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "arrangement")]
pub enum Arrangement {
    /// Children are positioned relative to the group origin when they are added.
    #[serde(rename = "static")]
    #[default]
    Static,
    /// Children are laid out one after another.
    #[serde(rename = "stack")]
    Stack {
        /// Stack along the x-axis, else along the y-axis.
        #[serde(rename = "horizontal")]
        horizontal: bool,
        /// Spacing between consecutive children.
        #[serde(rename = "dist")]
        dist: f64,
    },
    /// Children are wrapped into rows, or columns when not horizontal, no longer than `max_length`.
    ///
    /// `row_mode` aligns every row along its own axis inside the group, `shapes_mode` aligns the children
    /// across it inside their row. Both only position, a `Fill` mode places at the start. `dist_x` and
    /// `dist_y` are the horizontal and vertical gaps, between children of a row and between rows.
    #[serde(rename = "rows")]
    Rows {
        /// The longest row before wrapping.
        #[serde(rename = "max_length")]
        max_length: f64,
        /// Rows along the x-axis, else columns along the y-axis.
        #[serde(rename = "horizontal")]
        horizontal: bool,
        /// Alignment of the rows inside the group.
        #[serde(rename = "row_mode")]
        row_mode: Alignment,
        /// Alignment of the children inside their row.
        #[serde(rename = "shapes_mode")]
        shapes_mode: Alignment,
        /// Horizontal gap.
        #[serde(rename = "dist_x")]
        dist_x: f64,
        /// Vertical gap.
        #[serde(rename = "dist_y")]
        dist_y: f64,
    },
    /// Children keep their absolute positions and the group box wraps around them.
    ///
    /// The origin follows the smallest coordinates of the children without an alignment on that axis.
    #[serde(rename = "dynamic")]
    Dynamic,
}

impl Arrangement {
    /// A rows arrangement.
    pub fn rows(
        max_length: f64,
        horizontal: bool,
        row_mode: impl Into<Alignment>,
        shapes_mode: impl Into<Alignment>,
        dist_x: f64,
        dist_y: f64,
    ) -> Self {
        Self::Rows {
            max_length,
            horizontal,
            row_mode: row_mode.into(),
            shapes_mode: shapes_mode.into(),
            dist_x,
            dist_y,
        }
    }

    /// Whether the arrangement decides the child positions from their order.
    pub fn is_ordered(&self) -> bool {
        matches!(self, Self::Stack { .. } | Self::Rows { .. })
    }
}

/// A run of consecutive children of a rows arrangement.
#[derive(Debug, Clone, Copy, Default)]
struct Row {
    start: usize,
    end: usize,
    length: f64,
    thickness: f64,
}

impl Row {
    fn at(start: usize) -> Self {
        Self {
            start,
            end: start,
            ..Self::default()
        }
    }

    fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A container of resizable children, with its own box and alignments.
///
/// Moving the group moves every child. Resizing or re-aligning the group re-aligns every child
/// inside the group box. Unless the group fills along an axis, its size follows its children: the largest
/// child extent (ignoring children that fill), and the largest right or bottom edge of children without
/// an alignment, measured from the group origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "group")]
pub struct Group<T> {
    #[serde(rename = "rect")]
    rect: Rect,
    #[serde(rename = "children")]
    children: Vec<T>,
    #[serde(rename = "arrangement")]
    arrangement: Arrangement,
}

impl<T> Default for Group<T> {
    fn default() -> Self {
        Self {
            rect: Rect::default(),
            children: Vec::new(),
            arrangement: Arrangement::default(),
        }
    }
}

impl<T> Group<T>
where
    T: Resizable,
{
    /// A new empty group with a static arrangement at `(x, y)`.
    pub fn new_static(
        x: f64,
        y: f64,
        x_mode: impl Into<Alignment>,
        y_mode: impl Into<Alignment>,
    ) -> Self {
        Self {
            rect: Rect::new(x, y, 0.0, 0.0, x_mode, y_mode),
            children: Vec::new(),
            arrangement: Arrangement::Static,
        }
    }

    /// A new empty group stacking its children at `(x, y)`.
    pub fn new_stack(
        x: f64,
        y: f64,
        x_mode: impl Into<Alignment>,
        y_mode: impl Into<Alignment>,
        horizontal: bool,
        dist: f64,
    ) -> Self {
        Self {
            rect: Rect::new(x, y, 0.0, 0.0, x_mode, y_mode),
            children: Vec::new(),
            arrangement: Arrangement::Stack { horizontal, dist },
        }
    }

    /// A new empty group at `(x, y)` with the given arrangement.
    pub fn with_arrangement(
        x: f64,
        y: f64,
        x_mode: impl Into<Alignment>,
        y_mode: impl Into<Alignment>,
        arrangement: Arrangement,
    ) -> Self {
        Self {
            rect: Rect::new(x, y, 0.0, 0.0, x_mode, y_mode),
            children: Vec::new(),
            arrangement,
        }
    }

    /// A new empty group wrapping around its children.
    pub fn new_dynamic(x_mode: impl Into<Alignment>, y_mode: impl Into<Alignment>) -> Self {
        Self::with_arrangement(0.0, 0.0, x_mode, y_mode, Arrangement::Dynamic)
    }

    /// The arrangement.
    pub fn arrangement(&self) -> Arrangement {
        self.arrangement
    }

    /// The children.
    pub fn children(&self) -> &[T] {
        &self.children
    }

    /// The child at the index.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.children.get(index)
    }

    /// Mutable access to a child. Call [Group::relayout] after changing its box, or use [Group::update].
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.children.get_mut(index)
    }

    /// Change the child at the index and recompute the layout. `None` when out of range.
    pub fn update<R>(&mut self, index: usize, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let result = f(self.children.get_mut(index)?);
        self.relayout();
        Some(result)
    }

    /// Iterate over the children.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.children.iter()
    }

    /// The number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Append a child.
    pub fn push(&mut self, child: T) {
        let child = self.adopt(child);
        self.children.push(child);
        self.relayout();
    }

    /// Insert a child at the index. Panics when `index > len`, like [Vec::insert].
    pub fn insert(&mut self, index: usize, child: T) {
        let child = self.adopt(child);
        self.children.insert(index, child);
        self.relayout();
    }

    /// Append several children.
    pub fn extend(&mut self, children: impl IntoIterator<Item = T>) {
        for child in children {
            let child = self.adopt(child);
            self.children.push(child);
        }
        self.relayout();
    }

    /// Replace all children.
    pub fn set_children(&mut self, children: Vec<T>) {
        self.children.clear();
        self.extend(children);
    }

    /// Remove and return the child at the index, `None` when out of range.
    pub fn pop(&mut self, index: usize) -> Option<T> {
        if index >= self.children.len() {
            return None;
        }
        let child = self.children.remove(index);
        self.relayout();
        Some(child)
    }

    /// Remove all children.
    pub fn clear(&mut self) {
        self.children.clear();
        self.relayout();
    }

    /// Reverse the order of the children.
    pub fn reverse(&mut self) {
        self.children.reverse();
        if self.arrangement.is_ordered() {
            self.relayout();
        }
    }

    /// Recompute the layout.
    ///
    /// Rows are wrapped and placed in one pass. Otherwise the children are stacked when stacking, the
    /// dynamic origin follows the children, then the group size is updated and the children are re-aligned
    /// inside the group box.
    pub fn relayout(&mut self) {
        match self.arrangement {
            Arrangement::Rows { .. } => {
                self.wrap_rows();
                return;
            }
            Arrangement::Stack { horizontal, dist } => self.stack(horizontal, dist),
            Arrangement::Dynamic => self.wrap_origin(),
            Arrangement::Static => {}
        }
        self.update_size();
        self.align_children();
    }

    fn adopt(&self, mut child: T) -> T {
        if self.arrangement == Arrangement::Static {
            child.move_by(self.x(), self.y());
        }
        child
    }

    fn stack(&mut self, horizontal: bool, dist: f64) {
        let (x, y) = (self.x(), self.y());
        let mut offset = 0.0;

        for child in self.children.iter_mut() {
            if horizontal {
                child.set_pos(x + offset, y);
                offset += child.width() + dist;
            } else {
                child.set_pos(x, y + offset);
                offset += child.height() + dist;
            }
        }
    }

    fn wrap_origin(&mut self) {
        let min_x = self
            .children
            .iter()
            .filter(|c| c.x_mode().is_default())
            .map(|c| c.x())
            .reduce(f64::min);
        let min_y = self
            .children
            .iter()
            .filter(|c| c.y_mode().is_default())
            .map(|c| c.y())
            .reduce(f64::min);

        if let Some(x) = min_x {
            self.rect.place_x(x);
        }
        if let Some(y) = min_y {
            self.rect.place_y(y);
        }
    }

    fn wrap_rows(&mut self) {
        let Arrangement::Rows {
            max_length,
            horizontal,
            row_mode,
            shapes_mode,
            dist_x,
            dist_y,
        } = self.arrangement
        else {
            return;
        };
        let (along_dist, cross_dist) = if horizontal {
            (dist_x, dist_y)
        } else {
            (dist_y, dist_x)
        };
        // (along, across) the rows
        let extents = |child: &T| {
            if horizontal {
                (child.width(), child.height())
            } else {
                (child.height(), child.width())
            }
        };
        let along_mode = if horizontal { self.x_mode() } else { self.y_mode() };
        let cross_mode = if horizontal { self.y_mode() } else { self.x_mode() };
        let line_length = if along_mode.is_fill() {
            max_length.max(if horizontal { self.width() } else { self.height() })
        } else {
            max_length
        };

        let mut rows = Vec::new();
        let mut row = Row::at(0);
        for (i, child) in self.children.iter().enumerate() {
            let (along, cross) = extents(child);
            if !row.is_empty() && row.length + along_dist + along > line_length {
                rows.push(row);
                row = Row::at(i);
            }
            if !row.is_empty() {
                row.length += along_dist;
            }
            row.length += along;
            row.thickness = row.thickness.max(cross);
            row.end = i + 1;
        }
        if !row.is_empty() {
            rows.push(row);
        }

        let along_size = rows.iter().map(|r| r.length).fold(line_length, f64::max);
        let cross_size = rows.iter().map(|r| r.thickness).sum::<f64>()
            + cross_dist * rows.len().saturating_sub(1) as f64;
        if !along_mode.is_fill() {
            if horizontal {
                self.resize_self_width(along_size);
            } else {
                self.resize_self_height(along_size);
            }
        }
        if !cross_mode.is_fill() {
            if horizontal {
                self.resize_self_height(cross_size);
            } else {
                self.resize_self_width(cross_size);
            }
        }

        let (along_start, mut cross_pos, along_total) = if horizontal {
            (self.x(), self.y(), self.width())
        } else {
            (self.y(), self.x(), self.height())
        };
        for row in rows {
            let mut along_pos = row_mode
                .aligned_start(row.length, along_total, along_start)
                .unwrap_or(along_start);
            for child in self.children[row.start..row.end].iter_mut() {
                let (along, cross) = extents(&*child);
                let cross_at = shapes_mode
                    .aligned_start(cross, row.thickness, cross_pos)
                    .unwrap_or(cross_pos);
                if horizontal {
                    child.set_pos(along_pos, cross_at);
                } else {
                    child.set_pos(cross_at, along_pos);
                }
                along_pos += along + along_dist;
            }
            cross_pos += row.thickness + cross_dist;
        }
    }

    /// Re-place the children after the group box changed.
    fn place_children(&mut self) {
        if matches!(self.arrangement, Arrangement::Rows { .. }) {
            self.wrap_rows();
        } else {
            self.align_children();
        }
    }

    fn update_size(&mut self) {
        let (x, y) = (self.x(), self.y());

        if !self.x_mode().is_fill() {
            let width = self
                .children
                .iter()
                .filter(|c| !c.x_mode().is_fill())
                .map(|c| c.width())
                .chain(
                    self.children
                        .iter()
                        .filter(|c| c.x_mode().is_default())
                        .map(|c| c.x2() - x),
                )
                .fold(0.0, f64::max);
            self.resize_self_width(width);
        }
        if !self.y_mode().is_fill() {
            let height = self
                .children
                .iter()
                .filter(|c| !c.y_mode().is_fill())
                .map(|c| c.height())
                .chain(
                    self.children
                        .iter()
                        .filter(|c| c.y_mode().is_default())
                        .map(|c| c.y2() - y),
                )
                .fold(0.0, f64::max);
            self.resize_self_height(height);
        }
    }

    fn align_children(&mut self) {
        let region = *self.rect.transform();
        for child in self.children.iter_mut() {
            child.update_alignment_in(&region);
        }
    }

    fn resize_self_width(&mut self, width: f64) {
        let dx = self.rect.resize_width(width);
        self.move_x(dx);
    }

    fn resize_self_height(&mut self, height: f64) {
        let dy = self.rect.resize_height(height);
        self.move_y(dy);
    }
}

impl<T> Resizable for Group<T>
where
    T: Resizable,
{
    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn modes_mut(&mut self) -> (&mut Alignment, &mut Alignment) {
        self.rect.modes_mut()
    }

    fn set_x(&mut self, x: f64) {
        let dx = x - self.x();
        self.children.iter_mut().for_each(|c| c.move_x(dx));
        self.rect.place_x(x);
    }

    fn set_y(&mut self, y: f64) {
        let dy = y - self.y();
        self.children.iter_mut().for_each(|c| c.move_y(dy));
        self.rect.place_y(y);
    }

    fn set_width(&mut self, width: f64) {
        self.resize_self_width(width);
        self.place_children();
    }

    fn set_height(&mut self, height: f64) {
        self.resize_self_height(height);
        self.place_children();
    }

    fn update_alignment(
        &mut self,
        total_width: f64,
        total_height: f64,
        x_start: f64,
        y_start: f64,
    ) {
        self.x_mode().align_x(self, total_width, x_start);
        self.y_mode().align_y(self, total_height, y_start);
        match self.arrangement {
            Arrangement::Rows { .. } => self.wrap_rows(),
            Arrangement::Stack { horizontal, dist } => {
                self.stack(horizontal, dist);
                self.update_size();
                self.align_children();
            }
            Arrangement::Static | Arrangement::Dynamic => self.align_children(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Shape};
    use crate::AlignMode;
    use approx::assert_relative_eq;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new(x, y, w, h, AlignMode::Default, AlignMode::Default)
    }

    #[test]
    fn static_children_are_relative() {
        let mut group = Group::new_static(100.0, 50.0, AlignMode::Default, AlignMode::Default);
        group.push(rect(10.0, 0.0, 20.0, 5.0));
        group.push(rect(0.0, 10.0, 5.0, 30.0));

        assert_relative_eq!(group.get(0).unwrap().x(), 110.0);
        assert_relative_eq!(group.get(1).unwrap().y(), 60.0);
        // Widest right edge measured from the origin, tallest bottom edge.
        assert_relative_eq!(group.width(), 30.0);
        assert_relative_eq!(group.height(), 40.0);
    }

    #[test]
    fn moving_moves_children() {
        let mut group = Group::new_static(0.0, 0.0, AlignMode::Default, AlignMode::Default);
        group.push(rect(5.0, 5.0, 10.0, 10.0));
        group.move_by(10.0, -5.0);

        assert_relative_eq!(group.get(0).unwrap().x(), 15.0);
        assert_relative_eq!(group.get(0).unwrap().y(), 0.0);
        assert_relative_eq!(group.x(), 10.0);
    }

    #[test]
    fn children_align_inside_the_group() {
        let mut group: Group<Shape> = Group::new_static(0.0, 0.0, AlignMode::Fill, AlignMode::Fill);
        group.update_alignment(200.0, 100.0, 0.0, 0.0);
        group.push(Shape::from(Rect::new(
            0.0,
            0.0,
            20.0,
            10.0,
            AlignMode::Right,
            AlignMode::Middle,
        )));
        group.push(Shape::from(Circle::new(0.0, 0.0, 5.0, AlignMode::Middle, AlignMode::Below)));

        assert_relative_eq!(group.width(), 200.0);
        assert_relative_eq!(group.get(0).unwrap().x(), 180.0);
        assert_relative_eq!(group.get(0).unwrap().y(), 45.0);
        assert_relative_eq!(group.get(1).unwrap().x(), 95.0);
        assert_relative_eq!(group.get(1).unwrap().y(), 90.0);

        // Growing the region re-aligns the children.
        group.update_alignment(400.0, 100.0, 0.0, 0.0);
        assert_relative_eq!(group.get(0).unwrap().x(), 380.0);
        assert_relative_eq!(group.get(1).unwrap().x(), 195.0);
    }

    #[test]
    fn stack_lays_out_in_order() {
        let mut group =
            Group::new_stack(10.0, 10.0, AlignMode::Default, AlignMode::Default, true, 5.0);
        group.extend([
            rect(0.0, 0.0, 10.0, 10.0),
            rect(0.0, 0.0, 20.0, 5.0),
            rect(0.0, 0.0, 30.0, 15.0),
        ]);

        let xs: Vec<f64> = group.iter().map(|c| c.x()).collect();
        assert_eq!(xs, vec![10.0, 25.0, 50.0]);
        assert!(group.iter().all(|c| c.y() == 10.0));
        assert_relative_eq!(group.width(), 70.0);
        assert_relative_eq!(group.height(), 15.0);

        group.reverse();
        let xs: Vec<f64> = group.iter().map(|c| c.x()).collect();
        assert_eq!(xs, vec![10.0, 45.0, 70.0]);

        assert!(group.pop(5).is_none());
        assert!(group.pop(0).is_some());
        assert_eq!(group.len(), 2);
        assert_relative_eq!(group.get(0).unwrap().x(), 10.0);
    }

    fn positions(group: &Group<Rect>) -> Vec<(f64, f64)> {
        group.iter().map(|c| (c.x(), c.y())).collect()
    }

    #[test]
    fn rows_wrap_at_max_length() {
        let rows =
            Arrangement::rows(50.0, true, AlignMode::Default, AlignMode::Default, 5.0, 2.0);
        let mut group =
            Group::with_arrangement(10.0, 20.0, AlignMode::Default, AlignMode::Default, rows);
        group.extend([
            rect(0.0, 0.0, 20.0, 10.0),
            rect(0.0, 0.0, 20.0, 6.0),
            rect(0.0, 0.0, 20.0, 8.0),
            rect(0.0, 0.0, 30.0, 4.0),
        ]);

        assert_eq!(
            positions(&group),
            vec![(10.0, 20.0), (35.0, 20.0), (10.0, 32.0), (10.0, 42.0)]
        );
        assert_relative_eq!(group.width(), 50.0);
        // Three rows of 10, 8 and 4 with two gaps.
        assert_relative_eq!(group.height(), 26.0);

        // A wider first child pushes the second one into the next row.
        group.update(0, |c| c.set_width(40.0));
        assert_eq!(
            positions(&group),
            vec![(10.0, 20.0), (10.0, 32.0), (35.0, 32.0), (10.0, 42.0)]
        );
        assert!(group.update(9, |c| c.set_width(1.0)).is_none());

        group.move_by(5.0, 0.0);
        assert_relative_eq!(group.get(2).unwrap().x(), 40.0);
    }

    #[test]
    fn rows_align_inside_the_group_and_the_row() {
        let rows =
            Arrangement::rows(50.0, true, AlignMode::Middle, AlignMode::Below, 5.0, 2.0);
        let mut group =
            Group::with_arrangement(10.0, 20.0, AlignMode::Default, AlignMode::Default, rows);
        group.extend([
            rect(0.0, 0.0, 20.0, 10.0),
            rect(0.0, 0.0, 20.0, 6.0),
            rect(0.0, 0.0, 20.0, 8.0),
            rect(0.0, 0.0, 30.0, 4.0),
        ]);

        assert_eq!(
            positions(&group),
            vec![(12.5, 20.0), (37.5, 24.0), (25.0, 32.0), (20.0, 42.0)]
        );
    }

    #[test]
    fn columns_wrap_at_max_length() {
        let rows =
            Arrangement::rows(30.0, false, AlignMode::Default, AlignMode::Middle, 4.0, 1.0);
        let mut group =
            Group::with_arrangement(0.0, 0.0, AlignMode::Default, AlignMode::Default, rows);
        group.extend([
            rect(0.0, 0.0, 10.0, 12.0),
            rect(0.0, 0.0, 6.0, 12.0),
            rect(0.0, 0.0, 8.0, 20.0),
        ]);

        assert_eq!(positions(&group), vec![(0.0, 0.0), (2.0, 13.0), (14.0, 0.0)]);
        assert_relative_eq!(group.width(), 22.0);
        assert_relative_eq!(group.height(), 30.0);

        group.reverse();
        assert_eq!(positions(&group), vec![(0.0, 0.0), (14.0, 0.0), (12.0, 13.0)]);
    }

    #[test]
    fn dynamic_group_wraps_its_children() {
        let mut group = Group::new_dynamic(AlignMode::Default, AlignMode::Default);
        group.push(rect(30.0, 40.0, 10.0, 10.0));
        group.push(rect(10.0, 50.0, 5.0, 5.0));

        assert_eq!(positions(&group), vec![(30.0, 40.0), (10.0, 50.0)]);
        assert_relative_eq!(group.x(), 10.0);
        assert_relative_eq!(group.y(), 40.0);
        assert_relative_eq!(group.width(), 30.0);
        assert_relative_eq!(group.height(), 15.0);

        // Moving a child moves the box with it.
        group.update(1, |c| c.move_x(-5.0));
        assert_relative_eq!(group.x(), 5.0);
        assert_relative_eq!(group.width(), 35.0);

        group.move_by(10.0, 0.0);
        assert_relative_eq!(group.get(0).unwrap().x(), 40.0);
        assert_relative_eq!(group.x(), 15.0);
    }
}
