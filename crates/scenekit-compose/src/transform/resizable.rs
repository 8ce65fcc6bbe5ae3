// Imports
use super::Transform;
use crate::layout::Alignment;
use crate::shapes::Rect;

/// Trait for types that have a box which can be moved and resized.
///
/// Implementors provide the raw setters, every other mutator is expressed through them, so kind-specific
/// behaviour (moving polygon points, keeping a circle's radius consistent) only needs to be written once.
pub trait Resizable {
    /// The underlying rect.
    fn rect(&self) -> &Rect;
    /// The alignment policies along the x- and y-axis.
    fn modes_mut(&mut self) -> (&mut Alignment, &mut Alignment);
    /// Set the x coordinate.
    fn set_x(&mut self, x: f64);
    /// Set the y coordinate.
    fn set_y(&mut self, y: f64);
    /// Set the width.
    fn set_width(&mut self, width: f64);
    /// Set the height.
    fn set_height(&mut self, height: f64);

    /// The box.
    fn transform(&self) -> Transform {
        *self.rect().transform()
    }
    /// The x coordinate.
    fn x(&self) -> f64 {
        self.rect().transform().x
    }
    /// The y coordinate.
    fn y(&self) -> f64 {
        self.rect().transform().y
    }
    /// The width.
    fn width(&self) -> f64 {
        self.rect().transform().width
    }
    /// The height.
    fn height(&self) -> f64 {
        self.rect().transform().height
    }
    /// The right x coordinate.
    fn x2(&self) -> f64 {
        self.rect().transform().x2()
    }
    /// The bottom y coordinate.
    fn y2(&self) -> f64 {
        self.rect().transform().y2()
    }
    /// The alignment along the x-axis.
    fn x_mode(&self) -> Alignment {
        self.rect().x_mode()
    }
    /// The alignment along the y-axis.
    fn y_mode(&self) -> Alignment {
        self.rect().y_mode()
    }

    /// Set both coordinates.
    fn set_pos(&mut self, x: f64, y: f64) {
        self.set_x(x);
        self.set_y(y);
    }
    /// Move the x coordinate.
    fn move_x(&mut self, dx: f64) {
        self.set_x(self.x() + dx);
    }
    /// Move the y coordinate.
    fn move_y(&mut self, dy: f64) {
        self.set_y(self.y() + dy);
    }
    /// Move both coordinates.
    fn move_by(&mut self, dx: f64, dy: f64) {
        self.move_x(dx);
        self.move_y(dy);
    }
    /// Set width and height.
    fn set_size(&mut self, width: f64, height: f64) {
        self.set_width(width);
        self.set_height(height);
    }
    /// Change the width by `d_width`.
    fn move_width(&mut self, d_width: f64) {
        self.set_width(self.width() + d_width);
    }
    /// Change the height by `d_height`.
    fn move_height(&mut self, d_height: f64) {
        self.set_height(self.height() + d_height);
    }
    /// Change width and height.
    fn move_size(&mut self, d_width: f64, d_height: f64) {
        self.set_size(self.width() + d_width, self.height() + d_height);
    }

    /// Replace the alignment along the x-axis.
    fn set_x_mode(&mut self, mode: Alignment) {
        *self.modes_mut().0 = mode;
    }
    /// Replace the alignment along the y-axis.
    fn set_y_mode(&mut self, mode: Alignment) {
        *self.modes_mut().1 = mode;
    }
    /// Change the (first) offset of the x-axis alignment, moving the shape by the difference.
    fn set_x_offset(&mut self, offset: f64) {
        let dx = self.modes_mut().0.replace_offset(offset);
        self.move_x(dx);
    }
    /// Change the (first) offset of the y-axis alignment, moving the shape by the difference.
    fn set_y_offset(&mut self, offset: f64) {
        let dy = self.modes_mut().1.replace_offset(offset);
        self.move_y(dy);
    }
    /// Change the second offset of a fill alignment along the x-axis, growing the width by the difference.
    fn set_x_offset_2(&mut self, offset: f64) {
        let d_width = self.modes_mut().0.replace_offset_2(offset);
        self.move_width(d_width);
    }
    /// Change the second offset of a fill alignment along the y-axis, growing the height by the difference.
    fn set_y_offset_2(&mut self, offset: f64) {
        let d_height = self.modes_mut().1.replace_offset_2(offset);
        self.move_height(d_height);
    }

    /// Re-derive position and size from the alignment policies against the containing region
    /// `(x_start, y_start, total_width, total_height)`.
    ///
    /// Calling it twice with the same arguments yields the same state.
    fn update_alignment(
        &mut self,
        total_width: f64,
        total_height: f64,
        x_start: f64,
        y_start: f64,
    ) {
        self.x_mode().align_x(self, total_width, x_start);
        self.y_mode().align_y(self, total_height, y_start);
    }

    /// Re-derive position and size from the alignment policies against the given box.
    fn update_alignment_in(&mut self, region: &Transform) {
        self.update_alignment(region.width, region.height, region.x, region.y);
    }
}
