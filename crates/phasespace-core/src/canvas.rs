//! Immediate-mode drawing surface consumed by the renderer.

use nalgebra::Point2;
use phasespace_types::Rgb;

/// Line style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub color: Rgb,
}

impl Stroke {
    pub const fn new(width: f64, color: Rgb) -> Self {
        Self { width, color }
    }
}

/// Which point of the text box sits at the given position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    CenterCenter,
    LeftCenter,
    RightCenter,
    CenterTop,
    CenterBottom,
}

/// A drawing surface with the origin at the top-left and y growing downward.
///
/// Coordinates are surface pixels relative to that origin.
pub trait Canvas {
    /// Current width and height
    fn size(&self) -> (f64, f64);

    /// Fill the whole surface
    fn clear(&mut self, color: Rgb);

    fn line(&mut self, from: Point2<f64>, to: Point2<f64>, stroke: Stroke);

    fn filled_circle(&mut self, center: Point2<f64>, radius: f64, color: Rgb);

    /// Connected open path through `points`
    fn polyline(&mut self, points: &[Point2<f64>], stroke: Stroke);

    fn text(&mut self, pos: Point2<f64>, anchor: Anchor, text: &str, size: f64, color: Rgb);
}

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    Line {
        from: Point2<f64>,
        to: Point2<f64>,
        stroke: Stroke,
    },
    FilledCircle {
        center: Point2<f64>,
        radius: f64,
        color: Rgb,
    },
    Polyline {
        points: Vec<Point2<f64>>,
        stroke: Stroke,
    },
    Text {
        pos: Point2<f64>,
        anchor: Anchor,
        text: String,
        size: f64,
        color: Rgb,
    },
}

/// Canvas that records every call, for headless tests and benchmarks
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Drop recorded commands, keeping the size
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Point2<f64>, &Point2<f64>, &Stroke)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, stroke } => Some((from, to, stroke)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (&Point2<f64>, f64, Rgb)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FilledCircle {
                center,
                radius,
                color,
            } => Some((center, *radius, *color)),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[Point2<f64>]> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn line(&mut self, from: Point2<f64>, to: Point2<f64>, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn filled_circle(&mut self, center: Point2<f64>, radius: f64, color: Rgb) {
        self.commands.push(DrawCommand::FilledCircle {
            center,
            radius,
            color,
        });
    }

    fn polyline(&mut self, points: &[Point2<f64>], stroke: Stroke) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn text(&mut self, pos: Point2<f64>, anchor: Anchor, text: &str, size: f64, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            pos,
            anchor,
            text: text.to_string(),
            size,
            color,
        });
    }
}
