//! Frame rendering: physical space on the left, phase space on the right.

use nalgebra::Point2;
use phasespace_types::{
    Rgb, VisualizerSettings, MAX_ANGULAR_FREQUENCY, MAX_DISPLACEMENT, MAX_VELOCITY,
    MIN_ANGULAR_FREQUENCY, MIN_DISPLACEMENT, MIN_VELOCITY,
};

use crate::canvas::{Anchor, Canvas, Stroke};
use crate::clock::Clock;
use crate::mapping::Mapping;
use crate::oscillator::Oscillator;
use crate::simulation::Simulation;

/// Value domains shared by every oscillator's phase space plot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseDomain {
    pub displacement: (f64, f64),
    pub angular_frequency: (f64, f64),
    pub velocity: (f64, f64),
}

impl PhaseDomain {
    /// Domains derived from the global amplitude and frequency bounds
    pub const GLOBAL: PhaseDomain = PhaseDomain {
        displacement: (MIN_DISPLACEMENT, MAX_DISPLACEMENT),
        angular_frequency: (MIN_ANGULAR_FREQUENCY, MAX_ANGULAR_FREQUENCY),
        velocity: (MIN_VELOCITY, MAX_VELOCITY),
    };
}

impl Default for PhaseDomain {
    fn default() -> Self {
        Self::GLOBAL
    }
}

/// Split-panel geometry for one surface size.
///
/// Derived fresh every frame; nothing here outlives a resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl PanelLayout {
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// x of the vertical divider between the two panels
    pub fn divider_x(&self) -> f64 {
        self.width / 2.0
    }

    /// Center of the physical space panel
    pub fn physical_origin(&self) -> Point2<f64> {
        Point2::new(self.width / 4.0, self.height / 2.0)
    }

    /// Center of the phase space panel, where both axes cross
    pub fn phase_origin(&self) -> Point2<f64> {
        Point2::new(self.width * 3.0 / 4.0, self.height / 2.0)
    }

    /// Horizontal pixel span of the phase space plot
    pub fn phase_x_range(&self) -> (f64, f64) {
        (self.width / 2.0 + self.margin, self.width - self.margin)
    }

    /// Vertical pixel span of the phase space plot, bottom first
    pub fn phase_y_range(&self) -> (f64, f64) {
        (self.height - self.margin, self.margin)
    }

    /// Displacement to screen x
    pub fn displacement_mapping(&self, domain: &PhaseDomain) -> Mapping {
        Mapping::new(domain.displacement, self.phase_x_range())
    }

    /// Velocity to screen y; larger velocities sit higher
    pub fn velocity_mapping(&self, domain: &PhaseDomain) -> Mapping {
        Mapping::new(domain.velocity, self.phase_y_range())
    }
}

/// Format an axis bound as a whole number, with an explicit `+` for positive values
pub fn format_bound(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.0}")
    } else {
        format!("{value:.0}")
    }
}

/// Draws complete frames of the visualizer
#[derive(Debug, Clone)]
pub struct Renderer {
    domain: PhaseDomain,
    background: Rgb,
    foreground: Rgb,
    margin: f64,
    stroke_width: f64,
    marker_radius: f64,
    line_half_length: f64,
    label_size: f64,
}

impl Renderer {
    pub fn new(settings: &VisualizerSettings) -> Self {
        Self {
            domain: PhaseDomain::GLOBAL,
            background: Rgb::gray(settings.background_gray),
            foreground: Rgb::BLACK,
            margin: settings.panel_margin,
            stroke_width: settings.stroke_width,
            marker_radius: settings.marker_diameter / 2.0,
            line_half_length: settings.line_half_length,
            label_size: settings.label_size,
        }
    }

    pub fn domain(&self) -> &PhaseDomain {
        &self.domain
    }

    /// Layout for a surface of the given size
    pub fn layout(&self, width: f64, height: f64) -> PanelLayout {
        PanelLayout::new(width, height, self.margin)
    }

    /// Update every oscillator to the clock's time and draw one frame
    pub fn render_frame<C: Canvas + ?Sized>(
        &self,
        sim: &mut Simulation,
        clock: &dyn Clock,
        canvas: &mut C,
    ) {
        let now = clock.now();
        sim.begin_frame(now);

        let (width, height) = canvas.size();
        let layout = self.layout(width, height);

        canvas.clear(self.background);

        let divider = layout.divider_x();
        canvas.line(
            Point2::new(divider, 0.0),
            Point2::new(divider, height),
            Stroke::new(self.stroke_width, self.foreground),
        );

        self.draw_phase_axes(canvas, &layout);

        let x_map = layout.displacement_mapping(&self.domain);
        let y_map = layout.velocity_mapping(&self.domain);

        for osc in sim.registry_mut().iter_mut() {
            osc.update(now);
            self.draw_physical(canvas, &layout, osc);
            self.draw_phase_trajectory(canvas, &x_map, &y_map, osc);
        }
    }

    /// Marker and line of oscillation, centered in the left panel
    pub fn draw_physical<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        layout: &PanelLayout,
        osc: &Oscillator,
    ) {
        let origin = layout.physical_origin();
        let direction = osc.direction().into_inner();

        canvas.filled_circle(origin + osc.position(), self.marker_radius, osc.color());

        let reach = direction * self.line_half_length;
        canvas.line(
            origin - reach,
            origin + reach,
            Stroke::new(self.stroke_width, osc.color()),
        );
    }

    /// Trajectory polyline in the right panel. Fewer than two points draw nothing.
    pub fn draw_phase_trajectory<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        x_map: &Mapping,
        y_map: &Mapping,
        osc: &Oscillator,
    ) {
        let trajectory = osc.trajectory();
        if trajectory.len() < 2 {
            return;
        }

        let points: Vec<_> = trajectory
            .iter()
            .map(|p| Point2::new(x_map.apply(p.displacement), y_map.apply(p.velocity)))
            .collect();
        canvas.polyline(&points, Stroke::new(self.stroke_width, osc.color()));
    }

    /// Axes through the phase space center with titles and bound labels
    pub fn draw_phase_axes<C: Canvas + ?Sized>(&self, canvas: &mut C, layout: &PanelLayout) {
        let stroke = Stroke::new(self.stroke_width, self.foreground);
        let (x_min, x_max) = layout.phase_x_range();
        let (y_bottom, y_top) = layout.phase_y_range();
        let center = layout.phase_origin();
        let m = self.margin;
        let size = self.label_size;
        let ink = self.foreground;

        // Displacement (horizontal) and velocity (vertical)
        canvas.line(Point2::new(x_min, center.y), Point2::new(x_max, center.y), stroke);
        canvas.line(Point2::new(center.x, y_top), Point2::new(center.x, y_bottom), stroke);

        let (d_min, d_max) = self.domain.displacement;
        let (v_min, v_max) = self.domain.velocity;

        canvas.text(
            Point2::new((layout.divider_x() + x_max) / 2.0, center.y + 30.0),
            Anchor::CenterCenter,
            "Displacement",
            size,
            ink,
        );
        canvas.text(
            Point2::new(center.x, center.y + 20.0),
            Anchor::CenterCenter,
            "0",
            size,
            ink,
        );
        canvas.text(
            Point2::new(x_max - 5.0, center.y + 20.0),
            Anchor::RightCenter,
            &format_bound(d_max),
            size,
            ink,
        );
        canvas.text(
            Point2::new(x_min + 5.0, center.y + 20.0),
            Anchor::LeftCenter,
            &format_bound(d_min),
            size,
            ink,
        );

        canvas.text(
            Point2::new(center.x, m - 10.0),
            Anchor::CenterBottom,
            "Velocity",
            size,
            ink,
        );
        let label_x = center.x + 20.0;
        canvas.text(Point2::new(label_x, center.y), Anchor::CenterTop, "0", size, ink);
        canvas.text(
            Point2::new(label_x, y_top + 5.0),
            Anchor::CenterTop,
            &format_bound(v_max),
            size,
            ink,
        );
        canvas.text(
            Point2::new(label_x, y_bottom - 5.0),
            Anchor::CenterTop,
            &format_bound(v_min),
            size,
            ink,
        );
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&VisualizerSettings::default())
    }
}
