//! Canvas adapter over an egui painter.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Vec2};
use nalgebra::Point2;
use phasespace_core::{Anchor, Canvas, Stroke};
use phasespace_types::Rgb;

type Point = Point2<f64>;

pub fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

fn to_align(anchor: Anchor) -> Align2 {
    match anchor {
        Anchor::CenterCenter => Align2::CENTER_CENTER,
        Anchor::LeftCenter => Align2::LEFT_CENTER,
        Anchor::RightCenter => Align2::RIGHT_CENTER,
        Anchor::CenterTop => Align2::CENTER_TOP,
        Anchor::CenterBottom => Align2::CENTER_BOTTOM,
    }
}

fn to_stroke(stroke: Stroke) -> egui::Stroke {
    egui::Stroke::new(stroke.width as f32, to_color32(stroke.color))
}

/// Draws into a screen rectangle, with canvas coordinates relative to its top-left
pub struct PainterCanvas<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterCanvas<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, p: Point) -> Pos2 {
        self.rect.min + Vec2::new(p.x as f32, p.y as f32)
    }
}

impl Canvas for PainterCanvas<'_> {
    fn size(&self) -> (f64, f64) {
        (self.rect.width() as f64, self.rect.height() as f64)
    }

    fn clear(&mut self, color: Rgb) {
        self.painter.rect_filled(self.rect, 0.0, to_color32(color));
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.painter
            .line_segment([self.to_screen(from), self.to_screen(to)], to_stroke(stroke));
    }

    fn filled_circle(&mut self, center: Point, radius: f64, color: Rgb) {
        self.painter
            .circle_filled(self.to_screen(center), radius as f32, to_color32(color));
    }

    fn polyline(&mut self, points: &[Point], stroke: Stroke) {
        if points.len() < 2 {
            return;
        }
        let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter.add(Shape::line(screen, to_stroke(stroke)));
    }

    fn text(&mut self, pos: Point, anchor: Anchor, text: &str, size: f64, color: Rgb) {
        self.painter.text(
            self.to_screen(pos),
            to_align(anchor),
            text,
            FontId::proportional(size as f32),
            to_color32(color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion() {
        assert_eq!(to_color32(Rgb::new(1, 2, 3)), Color32::from_rgb(1, 2, 3));
    }

    #[test]
    fn test_anchor_mapping() {
        assert_eq!(to_align(Anchor::RightCenter), Align2::RIGHT_CENTER);
        assert_eq!(to_align(Anchor::CenterBottom), Align2::CENTER_BOTTOM);
    }
}
