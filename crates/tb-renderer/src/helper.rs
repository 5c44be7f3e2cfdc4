//! Arcball visual helpers
//!
//! [`ArcballHelper`] turns an [`ArcballSnapshot`] into polylines:
//!
//! - the drag arc, while a drag is in progress
//! - the ball rim
//! - the result arc of the committed orientation
//! - up to three constraint rings, one per candidate axis
//!
//! All geometry is rebuilt from scratch on every update.

use std::ops::Range;

use glam::Vec3;
use tb_core::geometry::is_view_axis;
use tb_core::{ArcballSnapshot, AxisSet};

use crate::arc::{fill_arc, fill_circle, fill_half_arc};
use crate::config::HelperConfig;
use crate::constants::opacity;
use crate::vertex::HelperVertex;

/// Primitive used to draw a polyline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Connected line segments
    #[default]
    LineStrip,
    /// Connected line segments, closed back to the first point
    LineLoop,
    /// Unconnected points
    Points,
}

/// A colored sequence of points
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// How the points are connected
    pub mode: DrawMode,
    /// RGB color
    pub color: [f32; 3],
    /// Opacity in `[0, 1]`
    pub opacity: f32,
    /// Points in normalized viewport coordinates
    pub points: Vec<Vec3>,
}

impl Polyline {
    fn new(mode: DrawMode, color: [f32; 3], opacity: f32) -> Self {
        Self {
            mode,
            color,
            opacity,
            points: Vec::new(),
        }
    }

    /// Drop all points, keeping the allocation
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Whether there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Vertices of this polyline
    pub fn vertices(&self) -> impl Iterator<Item = HelperVertex> + '_ {
        self.points
            .iter()
            .map(|p| HelperVertex::new(*p, self.color, self.opacity))
    }
}

/// Range of vertices drawn with one primitive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawBatch {
    /// Primitive for this range
    pub mode: DrawMode,
    /// Vertex range within the vertex list
    pub range: Range<u32>,
}

/// Builds helper geometry for an arcball
pub struct ArcballHelper {
    config: HelperConfig,
    drag: Polyline,
    rim: Polyline,
    result: Polyline,
    constraints: [Polyline; 3],
    override_rim: bool,
}

impl Default for ArcballHelper {
    fn default() -> Self {
        Self::new(HelperConfig::default())
    }
}

impl ArcballHelper {
    /// Create a helper with the given configuration
    pub fn new(config: HelperConfig) -> Self {
        let rim = Polyline::new(DrawMode::LineLoop, config.rim_color, config.rim_opacity);
        let drag = Polyline::new(DrawMode::LineStrip, config.drag_color, opacity::FULL);
        let result = Polyline::new(DrawMode::LineStrip, config.result_color, opacity::FULL);
        let constraints = std::array::from_fn(|i| {
            Polyline::new(DrawMode::LineStrip, config.axis_color(i), opacity::FULL)
        });

        Self {
            config,
            drag,
            rim,
            result,
            constraints,
            override_rim: false,
        }
    }

    /// Rebuild all helper geometry from the controller state
    pub fn update(&mut self, snapshot: &ArcballSnapshot<'_>) {
        self.update_drag(snapshot);
        self.update_constraints(snapshot);
        self.update_result(snapshot);
        self.update_rim(snapshot);

        tracing::trace!(
            drag = self.drag.len(),
            rim = self.rim.len(),
            result = self.result.len(),
            constraints = self.constraints.iter().map(Polyline::len).sum::<usize>(),
            "Arcball helper rebuilt"
        );
    }

    fn update_drag(&mut self, snapshot: &ArcballSnapshot<'_>) {
        self.drag.clear();

        if snapshot.dragging {
            // Constrained drags take the color of their axis
            self.drag.color = if snapshot.axis_set != AxisSet::None {
                self.config.axis_color(snapshot.nearest)
            } else {
                self.config.drag_color
            };

            fill_arc(
                &mut self.drag.points,
                snapshot.drag_arc.from,
                snapshot.drag_arc.to,
                snapshot.radius,
                self.config.arc_bisections,
            );
        }
    }

    fn update_constraints(&mut self, snapshot: &ArcballSnapshot<'_>) {
        for constraint in &mut self.constraints {
            constraint.clear();
        }
        self.override_rim = false;

        if !snapshot.allow_constraints || snapshot.axis_set == AxisSet::None {
            return;
        }

        if snapshot.dragging {
            // Only the axis in use; drawn as points so the drag arc fills it in
            if snapshot.nearest < snapshot.axes.len().min(self.constraints.len()) {
                self.fill_constraint(snapshot, snapshot.nearest);
                self.constraints[snapshot.nearest].mode = DrawMode::Points;
            }
        } else {
            for index in 0..snapshot.axes.len().min(self.constraints.len()) {
                self.fill_constraint(snapshot, index);
            }
        }
    }

    fn fill_constraint(&mut self, snapshot: &ArcballSnapshot<'_>, index: usize) {
        let axis = snapshot.axes[index];
        let constraint = &mut self.constraints[index];

        constraint.color = self.config.axis_color(index);
        constraint.opacity = if snapshot.nearest == index {
            opacity::FULL
        } else {
            self.config.dimmed_opacity
        };

        if is_view_axis(axis) {
            // Looking straight down the axis, its ring is the rim itself
            constraint.mode = DrawMode::LineLoop;
            fill_circle(
                &mut constraint.points,
                snapshot.radius,
                self.config.circle_segments,
            );
            self.override_rim = true;
        } else {
            constraint.mode = DrawMode::LineStrip;
            fill_half_arc(
                &mut constraint.points,
                axis,
                snapshot.radius,
                self.config.arc_bisections,
            );
        }
    }

    fn update_result(&mut self, snapshot: &ArcballSnapshot<'_>) {
        self.result.clear();
        fill_arc(
            &mut self.result.points,
            snapshot.result_arc.from,
            snapshot.result_arc.to,
            snapshot.radius,
            self.config.arc_bisections,
        );
    }

    fn update_rim(&mut self, snapshot: &ArcballSnapshot<'_>) {
        self.rim.clear();

        if !self.override_rim {
            fill_circle(
                &mut self.rim.points,
                snapshot.radius,
                self.config.circle_segments,
            );
        }
    }

    /// Helper configuration
    pub fn config(&self) -> &HelperConfig {
        &self.config
    }

    /// Show or hide the drag arc
    pub fn set_show_drag(&mut self, show: bool) {
        self.config.show_drag = show;
    }

    /// Show or hide the rim
    pub fn set_show_rim(&mut self, show: bool) {
        self.config.show_rim = show;
    }

    /// Show or hide the result arc
    pub fn set_show_result(&mut self, show: bool) {
        self.config.show_result = show;
    }

    /// Show or hide the constraint rings
    pub fn set_show_constraints(&mut self, show: bool) {
        self.config.show_constraints = show;
    }

    /// Drag arc from the last update
    pub fn drag(&self) -> &Polyline {
        &self.drag
    }

    /// Rim from the last update
    pub fn rim(&self) -> &Polyline {
        &self.rim
    }

    /// Result arc from the last update
    pub fn result(&self) -> &Polyline {
        &self.result
    }

    /// Constraint rings from the last update, indexed by axis
    pub fn constraints(&self) -> &[Polyline; 3] {
        &self.constraints
    }

    /// Whether a face-on constraint ring replaced the rim in the last update
    pub fn rim_suppressed(&self) -> bool {
        self.override_rim
    }

    /// Non-empty polylines enabled by the visibility flags, in draw order
    pub fn visible(&self) -> impl Iterator<Item = &Polyline> + '_ {
        let config = &self.config;
        let drag = config.show_drag.then_some(&self.drag);
        let rim = config.show_rim.then_some(&self.rim);
        let constraints = self
            .constraints
            .iter()
            .filter(move |_| config.show_constraints);
        let result = config.show_result.then_some(&self.result);

        drag.into_iter()
            .chain(rim)
            .chain(constraints)
            .chain(result)
            .filter(|polyline| !polyline.is_empty())
    }

    /// Vertices of all visible polylines and the batches to draw them with
    pub fn vertices(&self) -> (Vec<HelperVertex>, Vec<DrawBatch>) {
        let mut vertices = Vec::new();
        let mut batches = Vec::new();

        for polyline in self.visible() {
            let start = vertices.len() as u32;
            vertices.extend(polyline.vertices());
            batches.push(DrawBatch {
                mode: polyline.mode,
                range: start..vertices.len() as u32,
            });
        }

        (vertices, batches)
    }
}
