//! Session replay
//!
//! Drives an [`Arcball`] and an [`ArcballHelper`] through a recorded
//! [`Session`] the same way an interactive host would, and records what
//! they produced on every frame.

use serde::Serialize;
use tb_core::{Arcball, ArcballConfig, AxisSet, Input};
use tb_renderer::{ArcballHelper, HelperConfig, Polyline};

use crate::session::Session;

/// State after one replayed frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub index: usize,
    pub dragging: bool,
    pub radius: f32,
    pub axis_set: AxisSet,
    /// Axis the drag is (or would be) constrained to
    pub nearest: Option<usize>,
    /// Target orientation `[x, y, z, w]`
    pub orientation: [f32; 4],
    pub drag_points: usize,
    pub result_points: usize,
    pub constraint_points: [usize; 3],
    pub rim_points: usize,
    /// Vertices the helper would upload this frame
    pub vertex_count: usize,
}

/// Outcome of a replayed session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub frames: Vec<FrameReport>,
    /// Target orientation after the last frame `[x, y, z, w]`
    pub final_orientation: [f32; 4],
}

/// Replay `session` with the given controller and helper configuration
pub fn replay(
    session: &Session,
    arcball_config: ArcballConfig,
    helper_config: HelperConfig,
) -> Report {
    let view = session.view();
    let mut target = session.target_orientation();
    let mut arcball = Arcball::new(target, arcball_config);
    if session.allow_constraints {
        arcball.set_allow_constraints(true);
    }
    let mut helper = ArcballHelper::new(helper_config);
    let mut input = Input::new();

    tracing::info!("Replaying {} frames", session.frames.len());

    let mut frames = Vec::with_capacity(session.frames.len());
    for (index, frame) in session.frames.iter().enumerate() {
        for event in &frame.events {
            input.apply(*event);
        }

        arcball.update(&input, &view, &mut target);

        let snapshot = arcball.snapshot();
        helper.update(&snapshot);

        let (vertices, _) = helper.vertices();
        let report = FrameReport {
            index,
            dragging: snapshot.dragging,
            radius: snapshot.radius,
            axis_set: snapshot.axis_set,
            nearest: snapshot.nearest_axis().map(|_| snapshot.nearest),
            orientation: target.to_array(),
            drag_points: helper.drag().len(),
            result_points: helper.result().len(),
            constraint_points: helper.constraints().each_ref().map(Polyline::len),
            rim_points: helper.rim().len(),
            vertex_count: vertices.len(),
        };
        tracing::trace!(?report, "Frame replayed");
        frames.push(report);

        input.end_frame();
    }

    Report {
        frames,
        final_orientation: target.to_array(),
    }
}
