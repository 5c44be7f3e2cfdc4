//! Arcball rotation controller
//!
//! The controller turns pointer drags into rotations of a single target
//! orientation. It is driven once per frame with [`Arcball::update`] and
//! exposes the geometry it derived through [`Arcball::snapshot`], which the
//! visual helpers read after the update.
//!
//! # Frame order
//!
//! 1. Button edges start a drag (record the pointer) or end it (commit
//!    `start = now`). The frame the button goes down on is still idle;
//!    dragging begins on the next frame.
//! 2. Keys adjust the radius or reset the orientation.
//! 3. Drag origin and pointer are projected onto the ball.
//! 4. While idle, the constraint axis set, its axes and the nearest axis
//!    are refreshed. While dragging they are left as they were on the last
//!    idle frame, so changing modifiers mid-drag has no effect.
//! 5. While dragging, the (optionally constrained) drag arc is turned into
//!    a rotation composed onto `start` and written to the target.
//! 6. The result arc is rebuilt from `start`.

mod axis;

pub use axis::AxisSet;

use glam::{IVec2, Quat, Vec3};

use crate::camera::ViewSource;
use crate::config::ArcballConfig;
use crate::geometry::{self, BallArc};
use crate::input::{Input, State};

/// Read-only view of the controller state after an update
#[derive(Debug, Clone, Copy)]
pub struct ArcballSnapshot<'a> {
    /// A drag is in progress
    pub dragging: bool,
    /// Constraint axes may be selected
    pub allow_constraints: bool,
    /// Ball radius in normalized viewport units
    pub radius: f32,
    /// Drag origin to pointer, constrained when dragging with an axis set
    pub drag_arc: BallArc,
    /// Shortest arc representing the committed orientation
    pub result_arc: BallArc,
    /// Active constraint axis set
    pub axis_set: AxisSet,
    /// Candidate axes of the active set, in camera space
    pub axes: &'a [Vec3],
    /// Index into `axes` of the axis nearest to the pointer
    pub nearest: usize,
}

impl ArcballSnapshot<'_> {
    /// Axis the current drag is (or would be) constrained to
    pub fn nearest_axis(&self) -> Option<Vec3> {
        if self.axis_set == AxisSet::None {
            return None;
        }
        self.axes.get(self.nearest).copied()
    }
}

/// Virtual trackball controlling one target orientation
#[derive(Debug, Clone)]
pub struct Arcball {
    config: ArcballConfig,
    allow_constraints: bool,
    radius: f32,
    dragging: bool,
    drag_origin: IVec2,
    drag_arc: BallArc,
    result_arc: BallArc,
    orientation_reset: Quat,
    orientation_start: Quat,
    orientation_now: Quat,
    axis_set: AxisSet,
    axes: Vec<Vec3>,
    nearest: usize,
}

impl Arcball {
    /// Create a controller for a target currently at `target` orientation.
    ///
    /// `target` becomes the orientation restored by the reset key.
    ///
    /// `config` should pass [`ArcballConfig::validate`]. Configs that don't
    /// are still accepted and logged; the radius is then clamped as well as
    /// their bounds allow.
    pub fn new(target: Quat, config: ArcballConfig) -> Self {
        if let Err(e) = config.validate() {
            tracing::warn!("Arcball created with {}", e);
        }

        let orientation = target.normalize();
        Self {
            allow_constraints: config.allow_constraints,
            radius: config.clamp_radius(config.radius),
            config,
            dragging: false,
            drag_origin: IVec2::ZERO,
            drag_arc: BallArc::default(),
            result_arc: geometry::result_arc(orientation),
            orientation_reset: orientation,
            orientation_start: orientation,
            orientation_now: orientation,
            axis_set: AxisSet::None,
            axes: Vec::with_capacity(3),
            nearest: 0,
        }
    }

    /// Advance the controller by one frame.
    ///
    /// `target` is read for body axes and overwritten while dragging or on
    /// reset.
    pub fn update(&mut self, input: &Input, view: &impl ViewSource, target: &mut Quat) {
        self.update_button(input);
        self.update_key(input, target);

        let viewport = view.viewport();
        self.drag_arc = BallArc::new(
            geometry::ball_coord(self.drag_origin, &viewport, self.radius),
            geometry::ball_coord(input.position(), &viewport, self.radius),
        );

        let camera_orientation = view.orientation();
        if !self.dragging {
            self.update_active_axis_set(input);
            self.axis_set
                .fill_axes(&mut self.axes, camera_orientation, *target);
            self.nearest = geometry::nearest_constraint(self.drag_arc.to, &self.axes);
        } else {
            self.update_drag_arc(camera_orientation);
            *target = self.orientation_now;
        }

        self.result_arc = geometry::result_arc(self.orientation_start);
    }

    fn update_button(&mut self, input: &Input) {
        let button = self.config.bindings.drag_button;

        // The press frame itself is idle, so the axis set and nearest axis
        // are picked at the click position
        self.dragging = input.button(button) == State::Down;

        if input.clicked(button) {
            self.drag_origin = input.position();
            tracing::debug!(origin = ?self.drag_origin, "Arcball drag started");
        } else if input.released(button) {
            self.orientation_start = self.orientation_now;
            tracing::debug!(orientation = ?self.orientation_start, "Arcball drag committed");
        }
    }

    fn update_key(&mut self, input: &Input, target: &mut Quat) {
        let bindings = self.config.bindings;

        if input.pressed(bindings.grow_radius) {
            self.set_radius(self.radius + self.config.radius_step);
        } else if input.pressed(bindings.shrink_radius) {
            self.set_radius(self.radius - self.config.radius_step);
        }

        if input.pressed(bindings.reset) {
            self.reset(target);
            // A drag in progress continues from the reset orientation
            self.drag_origin = input.position();
        }
    }

    fn update_active_axis_set(&mut self, input: &Input) {
        let axis_set = if self.allow_constraints {
            AxisSet::from_modifiers(input.ctrl(), input.shift())
        } else {
            AxisSet::None
        };

        if axis_set != self.axis_set {
            tracing::debug!(from = ?self.axis_set, to = ?axis_set, "Arcball axis set changed");
            self.axis_set = axis_set;
        }
    }

    fn update_drag_arc(&mut self, camera_orientation: Quat) {
        if self.axis_set != AxisSet::None {
            if let Some(axis) = self.axes.get(self.nearest).copied() {
                self.drag_arc = BallArc::new(
                    geometry::constrain_to(self.drag_arc.from, axis),
                    geometry::constrain_to(self.drag_arc.to, axis),
                );
            }
        }

        let drag = geometry::drag_rotation(self.drag_arc.from, self.drag_arc.to, camera_orientation);
        self.orientation_now = (drag * self.orientation_start).normalize();
    }

    /// Restore the orientation recorded at construction
    pub fn reset(&mut self, target: &mut Quat) {
        self.orientation_start = self.orientation_reset;
        self.orientation_now = self.orientation_reset;
        *target = self.orientation_reset;
        tracing::debug!("Arcball orientation reset");
    }

    /// Set the ball radius, clamped to the configured bounds
    pub fn set_radius(&mut self, radius: f32) {
        let radius = self.config.clamp_radius(radius);
        if radius != self.radius {
            tracing::debug!("Arcball radius {} -> {}", self.radius, radius);
            self.radius = radius;
        }
    }

    /// Enable or disable constraint axis selection
    pub fn set_allow_constraints(&mut self, allow: bool) {
        self.allow_constraints = allow;
    }

    /// Read-only view of the state derived by the last update
    pub fn snapshot(&self) -> ArcballSnapshot<'_> {
        ArcballSnapshot {
            dragging: self.dragging,
            allow_constraints: self.allow_constraints,
            radius: self.radius,
            drag_arc: self.drag_arc,
            result_arc: self.result_arc,
            axis_set: self.axis_set,
            axes: &self.axes,
            nearest: self.nearest,
        }
    }

    pub fn config(&self) -> &ArcballConfig {
        &self.config
    }

    pub fn allow_constraints(&self) -> bool {
        self.allow_constraints
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn dragging(&self) -> bool {
        self.dragging
    }

    pub fn drag_arc(&self) -> BallArc {
        self.drag_arc
    }

    pub fn result_arc(&self) -> BallArc {
        self.result_arc
    }

    pub fn axis_set(&self) -> AxisSet {
        self.axis_set
    }

    pub fn axes(&self) -> &[Vec3] {
        &self.axes
    }

    pub fn nearest(&self) -> usize {
        self.nearest
    }

    /// Orientation restored by reset
    pub fn reset_orientation(&self) -> Quat {
        self.orientation_reset
    }

    /// Orientation committed at the start of the latest drag
    pub fn start_orientation(&self) -> Quat {
        self.orientation_start
    }

    /// Orientation including the drag in progress
    pub fn orientation(&self) -> Quat {
        self.orientation_now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{FixedView, Viewport};
    use crate::input::{Button, InputEvent, Key};
    use approx::assert_abs_diff_eq;

    const EPS: f32 = 1e-5;

    struct Harness {
        arcball: Arcball,
        input: Input,
        view: FixedView,
        target: Quat,
    }

    impl Harness {
        fn new(target: Quat, allow_constraints: bool) -> Self {
            let config = ArcballConfig {
                allow_constraints,
                ..ArcballConfig::default()
            };
            Self {
                arcball: Arcball::new(target, config),
                input: Input::new(),
                view: FixedView::new(Quat::IDENTITY, Viewport::from_size(800, 800)),
                target,
            }
        }

        fn frame(&mut self, events: &[InputEvent]) {
            for event in events {
                self.input.apply(*event);
            }
            self.arcball.update(&self.input, &self.view, &mut self.target);
            self.input.end_frame();
        }

        fn move_to(&mut self, x: i32, y: i32) {
            self.frame(&[InputEvent::PointerMoved { x, y }]);
        }
    }

    fn initial() -> Quat {
        Quat::from_euler(glam::EulerRot::XYZ, 0.4, -0.2, 1.3)
    }

    #[test]
    fn test_new_records_orientation() {
        let arcball = Arcball::new(initial(), ArcballConfig::default());
        assert_eq!(arcball.reset_orientation(), initial().normalize());
        assert_eq!(arcball.start_orientation(), arcball.reset_orientation());
        assert_eq!(arcball.orientation(), arcball.reset_orientation());
        assert_eq!(arcball.radius(), 0.75);
        assert!(!arcball.dragging());
    }

    #[test]
    fn test_idle_frames_leave_target_alone() {
        let mut h = Harness::new(initial(), false);
        h.move_to(100, 200);
        h.move_to(700, 30);
        assert_eq!(h.target, initial());
        assert!(!h.arcball.dragging());
    }

    #[test]
    fn test_drag_right_rotates_about_up() {
        let mut h = Harness::new(Quat::IDENTITY, false);
        h.move_to(400, 400);
        h.frame(&[InputEvent::ButtonPressed(Button::Left)]);
        assert!(!h.arcball.dragging());
        h.move_to(500, 400);
        assert!(h.arcball.dragging());

        let (axis, angle) = h.target.to_axis_angle();
        assert!(axis.abs_diff_eq(Vec3::Y, EPS), "{axis:?}");
        assert!(angle > 0.0);
        // The front of the object swings to the right
        assert!((h.target * Vec3::Z).x > 0.0);
        assert_eq!(h.target, h.arcball.orientation());
    }

    #[test]
    fn test_release_commits_and_new_press_keeps_orientation() {
        let mut h = Harness::new(Quat::IDENTITY, false);
        h.move_to(400, 400);
        h.frame(&[InputEvent::ButtonPressed(Button::Left)]);
        h.move_to(520, 330);
        let dragged = h.arcball.orientation();

        h.frame(&[InputEvent::ButtonReleased(Button::Left)]);
        assert!(!h.arcball.dragging());
        assert_eq!(h.arcball.start_orientation(), dragged);

        h.frame(&[InputEvent::ButtonPressed(Button::Left)]);
        h.frame(&[]);
        assert!(h.arcball.dragging());
        assert!(h.arcball.orientation().abs_diff_eq(h.arcball.start_orientation(), EPS));
        assert!(h.target.abs_diff_eq(dragged, EPS));
    }

    #[test]
    fn test_orientation_stays_normalized() {
        let mut h = Harness::new(Quat::from_xyzw(0.0, 0.0, 0.0, 3.0), false);
        for i in 0..20 {
            h.move_to(400, 400);
            h.frame(&[InputEvent::ButtonPressed(Button::Left)]);
            h.move_to(400 + 13 * i, 400 - 7 * i);
            h.frame(&[InputEvent::ButtonReleased(Button::Left)]);
        }
        assert_abs_diff_eq!(h.target.length(), 1.0, epsilon = EPS);
        assert_abs_diff_eq!(h.arcball.start_orientation().length(), 1.0, epsilon = EPS);
    }

    #[test]
    fn test_radius_clamps() {
        let mut h = Harness::new(Quat::IDENTITY, false);
        for _ in 0..3 {
            h.frame(&[InputEvent::KeyPressed(Key::Plus)]);
            h.frame(&[InputEvent::KeyReleased(Key::Plus)]);
        }
        assert_eq!(h.arcball.radius(), 1.0);

        for _ in 0..5 {
            h.frame(&[InputEvent::KeyPressed(Key::Minus)]);
            h.frame(&[InputEvent::KeyReleased(Key::Minus)]);
        }
        assert_eq!(h.arcball.radius(), 0.25);
    }

    #[test]
    fn test_held_key_changes_radius_once() {
        let mut h = Harness::new(Quat::IDENTITY, false);
        h.frame(&[InputEvent::KeyPressed(Key::Minus)]);
        h.frame(&[]);
        h.frame(&[]);
        assert_eq!(h.arcball.radius(), 0.5);
    }

    #[test]
    fn test_reset_restores_orientation_exactly() {
        let mut h = Harness::new(initial(), false);
        h.move_to(400, 400);
        h.frame(&[InputEvent::ButtonPressed(Button::Left)]);
        h.move_to(300, 250);
        h.frame(&[InputEvent::ButtonReleased(Button::Left)]);
        assert_ne!(h.target, h.arcball.reset_orientation());

        h.frame(&[InputEvent::KeyPressed(Key::R)]);
        let reset = h.arcball.reset_orientation();
        assert_eq!(h.target, reset);
        assert_eq!(h.arcball.start_orientation(), reset);
        assert_eq!(h.arcball.orientation(), reset);
    }

    #[test]
    fn test_reset_during_drag() {
        let mut h = Harness::new(initial(), false);
        h.move_to(400, 400);
        h.frame(&[InputEvent::ButtonPressed(Button::Left)]);
        h.move_to(600, 450);

        h.frame(&[InputEvent::KeyPressed(Key::R)]);
        let reset = h.arcball.reset_orientation();
        assert_eq!(h.arcball.start_orientation(), reset);
        assert!(h.target.abs_diff_eq(reset, EPS));
        assert!(h.arcball.orientation().abs_diff_eq(reset, EPS));
    }

    #[test]
    fn test_constraints_need_permission() {
        let mut h = Harness::new(Quat::IDENTITY, false);
        h.frame(&[InputEvent::KeyPressed(Key::LShift)]);
        assert_eq!(h.arcball.axis_set(), AxisSet::None);
        assert!(h.arcball.axes().is_empty());
        assert_eq!(h.arcball.nearest(), 0);

        h.arcball.set_allow_constraints(true);
        h.frame(&[]);
        assert_eq!(h.arcball.axis_set(), AxisSet::Camera);
        assert_eq!(h.arcball.axes(), &[Vec3::X, Vec3::Y, Vec3::Z]);
    }

    #[test]
    fn test_axis_set_follows_modifiers() {
        let mut h = Harness::new(Quat::IDENTITY, true);
        h.frame(&[InputEvent::KeyPressed(Key::LCtrl)]);
        assert_eq!(h.arcball.axis_set(), AxisSet::Body);
        h.frame(&[InputEvent::KeyPressed(Key::RShift)]);
        assert_eq!(h.arcball.axis_set(), AxisSet::World);
        h.frame(&[InputEvent::KeyReleased(Key::LCtrl)]);
        assert_eq!(h.arcball.axis_set(), AxisSet::Camera);
    }

    #[test]
    fn test_nearest_follows_pointer_while_idle() {
        let mut h = Harness::new(Quat::IDENTITY, true);
        h.frame(&[InputEvent::KeyPressed(Key::LShift)]);
        // Straight above the center lies on the X axis circle
        h.move_to(400, 200);
        assert_eq!(h.arcball.nearest(), 0);
        // Straight right of the center lies on the Y axis circle
        h.move_to(600, 400);
        assert_eq!(h.arcball.nearest(), 1);
        // Near the rim everything is closest to the view axis circle
        h.move_to(795, 420);
        assert_eq!(h.arcball.nearest(), 2);
    }

    #[test]
    fn test_constrained_drag_rotates_about_nearest_axis() {
        let mut h = Harness::new(Quat::IDENTITY, true);
        h.frame(&[
            InputEvent::KeyPressed(Key::LShift),
            InputEvent::PointerMoved { x: 400, y: 300 },
        ]);
        assert_eq!(h.arcball.nearest(), 0);

        h.frame(&[InputEvent::ButtonPressed(Button::Left)]);
        h.move_to(470, 180);

        // Horizontal motion is discarded, only the X rotation remains
        assert!((h.target * Vec3::X).abs_diff_eq(Vec3::X, EPS));
        assert!(!h.target.abs_diff_eq(Quat::IDENTITY, EPS));
        let snapshot = h.arcball.snapshot();
        assert_abs_diff_eq!(snapshot.drag_arc.from.x, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(snapshot.drag_arc.to.x, 0.0, epsilon = EPS);
    }

    #[test]
    fn test_click_frame_picks_axis_at_click_position() {
        let mut h = Harness::new(Quat::IDENTITY, true);
        h.frame(&[
            InputEvent::KeyPressed(Key::LShift),
            InputEvent::PointerMoved { x: 400, y: 400 },
        ]);
        assert_eq!(h.arcball.nearest(), 0);

        // Move and press in one frame: right of center is on the Y circle
        h.frame(&[
            InputEvent::PointerMoved { x: 600, y: 400 },
            InputEvent::ButtonPressed(Button::Left),
        ]);
        assert!(!h.arcball.dragging());
        assert_eq!(h.arcball.nearest(), 1);
        assert_eq!(h.target, Quat::IDENTITY);

        h.move_to(600, 250);
        assert!(h.arcball.dragging());
        assert_eq!(h.arcball.nearest(), 1);

        let (axis, angle) = h.target.to_axis_angle();
        assert!(angle > 0.0);
        assert!(axis.abs_diff_eq(Vec3::Y, EPS), "{axis:?}");
        assert!((h.target * Vec3::Y).abs_diff_eq(Vec3::Y, EPS));
    }

    #[test]
    fn test_modifier_pressed_with_button_applies() {
        let mut h = Harness::new(Quat::IDENTITY, true);
        h.move_to(400, 300);
        h.frame(&[
            InputEvent::KeyPressed(Key::LShift),
            InputEvent::ButtonPressed(Button::Left),
        ]);
        assert_eq!(h.arcball.axis_set(), AxisSet::Camera);

        h.move_to(470, 180);
        assert!(h.arcball.dragging());
        assert_eq!(h.arcball.axis_set(), AxisSet::Camera);
        assert!((h.target * Vec3::X).abs_diff_eq(Vec3::X, EPS));
    }

    #[test]
    fn test_crossed_radius_bounds_do_not_panic() {
        let config = ArcballConfig {
            min_radius: 0.9,
            max_radius: 0.3,
            ..ArcballConfig::default()
        };
        let mut arcball = Arcball::new(Quat::IDENTITY, config);
        assert_eq!(arcball.radius(), 0.3);
        arcball.set_radius(0.6);
        assert_eq!(arcball.radius(), 0.3);
    }

    #[test]
    fn test_constraints_frozen_while_dragging() {
        let mut h = Harness::new(Quat::IDENTITY, true);
        h.frame(&[InputEvent::KeyPressed(Key::LShift)]);
        h.frame(&[InputEvent::ButtonPressed(Button::Left)]);
        h.frame(&[InputEvent::KeyPressed(Key::LCtrl)]);
        assert_eq!(h.arcball.axis_set(), AxisSet::Camera);

        h.frame(&[InputEvent::ButtonReleased(Button::Left)]);
        assert_eq!(h.arcball.axis_set(), AxisSet::World);
    }

    #[test]
    fn test_result_arc_tracks_start() {
        let mut h = Harness::new(initial(), false);
        assert_eq!(h.arcball.result_arc(), geometry::result_arc(h.arcball.start_orientation()));

        h.move_to(400, 400);
        h.frame(&[InputEvent::ButtonPressed(Button::Left)]);
        h.move_to(450, 500);
        // Still the committed orientation while the drag is in progress
        assert_eq!(h.arcball.result_arc(), geometry::result_arc(initial().normalize()));

        h.frame(&[InputEvent::ButtonReleased(Button::Left)]);
        assert_eq!(h.arcball.result_arc(), geometry::result_arc(h.arcball.orientation()));
    }

    #[test]
    fn test_drag_axis_follows_camera() {
        let mut h = Harness::new(Quat::IDENTITY, false);
        h.view.orientation = Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2);
        h.move_to(400, 400);
        h.frame(&[InputEvent::ButtonPressed(Button::Left)]);
        h.move_to(500, 400);

        let (axis, _) = h.target.to_axis_angle();
        let expected = h.view.orientation * Vec3::Y;
        assert!(axis.abs_diff_eq(expected, EPS), "{axis:?} != {expected:?}");
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut h = Harness::new(Quat::IDENTITY, true);
        h.frame(&[
            InputEvent::KeyPressed(Key::LShift),
            InputEvent::PointerMoved { x: 400, y: 400 },
        ]);
        let snapshot = h.arcball.snapshot();
        assert!(!snapshot.dragging);
        assert!(snapshot.allow_constraints);
        assert_eq!(snapshot.radius, 0.75);
        assert_eq!(snapshot.axes.len(), 3);
        assert_eq!(snapshot.nearest_axis(), Some(Vec3::X));
        assert!(snapshot.drag_arc.to.abs_diff_eq(Vec3::Z, EPS));
    }
}
