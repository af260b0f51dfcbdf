use super::*;
use crate::app::tools::{
    ComponentId, InputBindings, Key, Modifiers, OverlayPainter, SurfaceTool, ToolError,
    ToolEvent, ToolHost,
};
use crate::core::{GeomPath, Rect, ViewportSurface};
use crate::shared::SurfaceOptions;
use approx::assert_relative_eq;
use glam::{Affine2, Vec2};

// ── Testdoubles ──────────────────────────────────────────────────

/// Linien-Hooks mit Aufrufzählern.
#[derive(Default)]
struct ProbeHooks {
    accelerate: bool,
    concatenate: bool,
    /// `true` → `init_function_evaluation` schlägt fehl
    degenerate: bool,
    /// `true` → `init_concatenation` lehnt ab
    veto_concat: bool,
    resets: usize,
    init_ctrl_calls: usize,
    eval_inits: usize,
    start: Vec2,
    end: Vec2,
}

impl ProbeHooks {
    fn full() -> Self {
        Self {
            accelerate: true,
            concatenate: true,
            ..Default::default()
        }
    }
}

impl GeomShapeHooks for ProbeHooks {
    fn name(&self) -> &str {
        "Probe"
    }

    fn num_ctrl_points(&self) -> usize {
        2
    }

    fn create_basic_shape(&self, ctrl_points: &[Vec2]) -> GeomPath {
        GeomPath::polyline(&ctrl_points[..2])
    }

    fn init_control_points(&mut self, _ctrl_points: &mut [Vec2]) {
        self.init_ctrl_calls += 1;
    }

    fn create_controlled_shape(&self, ctrl_points: &[Vec2]) -> GeomPath {
        GeomPath::polyline(ctrl_points)
    }

    fn init_concatenation(&mut self, _previous: &[Vec2], _next: &mut [Vec2]) -> bool {
        !self.veto_concat
    }

    fn reset_gesture(&mut self) {
        self.resets += 1;
    }

    fn can_concatenate(&self) -> bool {
        self.concatenate
    }

    fn can_accelerate(&self) -> bool {
        self.accelerate
    }

    fn init_function_evaluation(&mut self, ctrl_points: &[Vec2]) -> bool {
        self.eval_inits += 1;
        self.start = ctrl_points[0];
        self.end = ctrl_points[1];
        !self.degenerate
    }

    fn evaluate_function(&self, t: f32) -> Vec2 {
        self.start.lerp(self.end, t)
    }
}

struct RecordingHost {
    id: ComponentId,
    bindings: Option<InputBindings>,
    repaints: Vec<Rect>,
}

impl RecordingHost {
    fn new(id: u64) -> Self {
        Self {
            id: ComponentId(id),
            bindings: None,
            repaints: Vec::new(),
        }
    }
}

impl ToolHost for RecordingHost {
    fn component_id(&self) -> ComponentId {
        self.id
    }

    fn install_bindings(&mut self, bindings: InputBindings) {
        self.bindings = Some(bindings);
    }

    fn remove_bindings(&mut self) {
        self.bindings = None;
    }

    fn repaint(&mut self, area: Rect) {
        self.repaints.push(area);
    }
}

#[derive(Default)]
struct RecordingPainter {
    strokes: usize,
    fills: usize,
    transform: Affine2,
}

impl OverlayPainter for RecordingPainter {
    fn set_stroke(&mut self, _width: f32, _color: [f32; 4]) {}

    fn set_fill(&mut self, _color: [f32; 4]) {}

    fn stroke_path(&mut self, _path: &GeomPath) {
        self.strokes += 1;
    }

    fn fill_path(&mut self, _path: &GeomPath) {
        self.fills += 1;
    }

    fn transform(&self) -> Affine2 {
        self.transform
    }

    fn set_transform(&mut self, transform: Affine2) {
        self.transform = transform;
    }
}

// ── Hilfen ───────────────────────────────────────────────────────

fn v(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

/// 1000×1000 px, keine Snap-Ziele: 1 px = 0.001 virtuell.
fn surface() -> ViewportSurface {
    ViewportSurface::new(Vec2::ZERO, Vec2::splat(1000.0))
}

fn options() -> SurfaceOptions {
    SurfaceOptions {
        render_frames: 11,
        ..SurfaceOptions::default()
    }
}

struct Rig {
    tool: GeomTool<ProbeHooks>,
    surface: ViewportSurface,
    host: RecordingHost,
}

impl Rig {
    fn new(hooks: ProbeHooks) -> Self {
        let mut rig = Self {
            tool: GeomTool::new(hooks, &options()),
            surface: surface(),
            host: RecordingHost::new(1),
        };
        rig.tool
            .acquire(Some(&mut rig.host))
            .expect("Acquire erwartet");
        rig
    }

    /// Zieht eine Linie von (100,100) nach (500,100) px → Zustand Ctrl.
    fn drawn(hooks: ProbeHooks) -> Self {
        let mut rig = Self::new(hooks);
        rig.send(ToolEvent::press(v(100.0, 100.0)));
        rig.send(ToolEvent::drag(v(300.0, 100.0)));
        rig.send(ToolEvent::drag(v(500.0, 100.0)));
        rig.send(ToolEvent::release(v(500.0, 100.0)));
        rig
    }

    fn send(&mut self, event: ToolEvent) {
        self.tool.handle_event(&event, &self.surface, &mut self.host);
    }

    fn ctrl(&self, i: usize) -> Vec2 {
        self.tool.ctrl_points().expect("Geste erwartet")[i]
    }
}

// ── Automat ──────────────────────────────────────────────────────

#[test]
fn test_click_without_drag_cancels() {
    let mut rig = Rig::new(ProbeHooks::full());
    rig.send(ToolEvent::press(v(100.0, 100.0)));
    assert_eq!(rig.tool.state(), DragState::Init);
    rig.send(ToolEvent::release(v(100.0, 100.0)));
    assert_eq!(rig.tool.state(), DragState::None);
    assert!(rig.tool.take_rendered().is_empty());
    assert_eq!(rig.tool.hooks().init_ctrl_calls, 0);
}

#[test]
fn test_drag_threshold_is_exclusive() {
    let mut rig = Rig::new(ProbeHooks::full());
    rig.send(ToolEvent::press(v(100.0, 100.0)));
    rig.send(ToolEvent::drag(v(102.0, 100.0)));
    assert_eq!(rig.tool.state(), DragState::Init, "4 px² liegt unter der Schwelle");
    rig.send(ToolEvent::drag(v(103.0, 100.0)));
    assert_eq!(rig.tool.state(), DragState::InitDrag);
    assert_relative_eq!(rig.ctrl(1).x, 0.103, epsilon = 1e-5);
    assert!(!rig.tool.basic_shape().expect("Shape").is_empty());
}

#[test]
fn test_release_after_drag_enters_ctrl() {
    let rig = Rig::drawn(ProbeHooks::full());
    assert_eq!(rig.tool.state(), DragState::Ctrl);
    assert_eq!(rig.tool.hooks().init_ctrl_calls, 1);
    assert_relative_eq!(rig.ctrl(0).x, 0.1, epsilon = 1e-5);
    assert_relative_eq!(rig.ctrl(1).x, 0.5, epsilon = 1e-5);
    assert!(!rig.tool.controlled_shape().expect("Shape").is_empty());
    assert!(!rig.tool.ctrl_points_shape().expect("Handles").is_empty());
    assert!(rig.tool.is_drawing());
}

#[test]
fn test_ctrl_point_drag_moves_point() {
    let mut rig = Rig::drawn(ProbeHooks::full());
    rig.send(ToolEvent::press(v(504.0, 100.0)));
    assert_eq!(rig.tool.state(), DragState::CtrlDrag);
    rig.send(ToolEvent::drag(v(500.0, 400.0)));
    assert_relative_eq!(rig.ctrl(1).y, 0.4, epsilon = 1e-5);
    rig.send(ToolEvent::release(v(500.0, 400.0)));
    assert_eq!(rig.tool.state(), DragState::Ctrl);
    assert_relative_eq!(rig.ctrl(0).y, 0.1, epsilon = 1e-5);
}

#[test]
fn test_press_outside_hit_radius_keeps_ctrl() {
    let mut rig = Rig::drawn(ProbeHooks::full());
    // 5 px Abstand → 25 px², 5.1 px → 26.01 px²
    rig.send(ToolEvent::press(v(100.0, 105.1)));
    assert_eq!(rig.tool.state(), DragState::Ctrl);
    rig.send(ToolEvent::press(v(100.0, 105.0)));
    assert_eq!(rig.tool.state(), DragState::CtrlDrag);
}

#[test]
fn test_nearest_ctrl_point_wins() {
    let mut rig = Rig::new(ProbeHooks::full());
    rig.send(ToolEvent::press(v(100.0, 100.0)));
    rig.send(ToolEvent::drag(v(108.0, 100.0)));
    rig.send(ToolEvent::release(v(108.0, 100.0)));
    // 25 px² zum Start, 9 px² zum Ende: beide treffen, das Ende ist näher
    rig.send(ToolEvent::press(v(105.0, 100.0)));
    rig.send(ToolEvent::drag(v(105.0, 300.0)));
    assert_relative_eq!(rig.ctrl(0).y, 0.1, epsilon = 1e-5);
    assert_relative_eq!(rig.ctrl(1).y, 0.3, epsilon = 1e-5);
}

#[test]
fn test_enter_in_ctrl_renders_once() {
    let mut rig = Rig::drawn(ProbeHooks::full());
    rig.host.repaints.clear();
    rig.send(ToolEvent::key(Key::Enter));
    assert_eq!(rig.tool.state(), DragState::None);
    assert!(rig.tool.ctrl_points().is_none());
    assert!(!rig.host.repaints.is_empty(), "alter Bereich muss neu gezeichnet werden");

    let rendered = rig.tool.take_rendered();
    assert_eq!(rendered.len(), 1);
    let gesture = &rendered[0];
    assert_eq!(gesture.tool, "Probe");
    assert_eq!(gesture.frames.len(), 11);
    assert_eq!(gesture.velocity, VelocityProfile::UNIFORM);
    assert_eq!(rig.tool.hooks().eval_inits, 1);
    assert_relative_eq!(gesture.frames[0].x, 0.1, epsilon = 1e-5);
    assert_relative_eq!(gesture.frames[5].x, 0.3, epsilon = 1e-5);
    assert_relative_eq!(gesture.frames[10].x, 0.5, epsilon = 1e-5);
    assert!(rig.tool.take_rendered().is_empty());
}

#[test]
fn test_enter_during_initial_drag_renders_nothing() {
    let mut rig = Rig::new(ProbeHooks::full());
    rig.send(ToolEvent::press(v(100.0, 100.0)));
    rig.send(ToolEvent::drag(v(300.0, 100.0)));
    rig.send(ToolEvent::key(Key::Enter));
    assert_eq!(rig.tool.state(), DragState::None);
    assert!(rig.tool.take_rendered().is_empty());
}

#[test]
fn test_escape_cancels_gesture() {
    let mut rig = Rig::drawn(ProbeHooks::full());
    rig.host.repaints.clear();
    rig.send(ToolEvent::key(Key::Escape));
    assert_eq!(rig.tool.state(), DragState::None);
    assert!(!rig.host.repaints.is_empty());
    assert!(rig.tool.take_rendered().is_empty());
    // Enter ohne Geste bleibt folgenlos
    rig.send(ToolEvent::key(Key::Enter));
    assert!(rig.tool.take_rendered().is_empty());
}

#[test]
fn test_unrenderable_gesture_ends_without_output() {
    let mut rig = Rig::drawn(ProbeHooks {
        degenerate: true,
        ..ProbeHooks::full()
    });
    rig.send(ToolEvent::key(Key::Enter));
    assert_eq!(rig.tool.state(), DragState::None);
    assert!(rig.tool.ctrl_points().is_none());
    assert!(rig.tool.take_rendered().is_empty());
    assert_eq!(rig.tool.hooks().eval_inits, 1);
}

#[test]
fn test_every_gesture_end_resets_hooks() {
    let mut rig = Rig::drawn(ProbeHooks::full());
    rig.send(ToolEvent::key(Key::Escape));
    assert_eq!(rig.tool.hooks().resets, 1);

    rig.send(ToolEvent::press(v(100.0, 100.0)));
    rig.send(ToolEvent::release(v(100.0, 100.0)));
    assert_eq!(rig.tool.hooks().resets, 2, "Klick ohne Drag");

    rig.send(ToolEvent::press(v(100.0, 100.0)));
    rig.send(ToolEvent::drag(v(300.0, 100.0)));
    rig.send(ToolEvent::press(v(300.0, 100.0)));
    assert_eq!(rig.tool.hooks().resets, 3, "unerwarteter Zustand");
}

#[test]
fn test_finish_gesture_false_discards() {
    let mut rig = Rig::drawn(ProbeHooks::full());
    rig.tool.finish_gesture(false, &rig.surface, &mut rig.host);
    assert_eq!(rig.tool.state(), DragState::None);
    assert!(rig.tool.take_rendered().is_empty());
}

#[test]
fn test_press_during_initial_drag_aborts() {
    let mut rig = Rig::new(ProbeHooks::full());
    rig.send(ToolEvent::press(v(100.0, 100.0)));
    rig.send(ToolEvent::drag(v(300.0, 100.0)));
    rig.send(ToolEvent::press(v(300.0, 100.0)));
    assert_eq!(rig.tool.state(), DragState::None);
    assert!(rig.tool.take_rendered().is_empty());
}

// ── Geschwindigkeit ──────────────────────────────────────────────

#[test]
fn test_double_click_enters_velocity() {
    let mut rig = Rig::drawn(ProbeHooks::full());
    rig.send(ToolEvent::double_press(v(300.0, 300.0)));
    assert_eq!(rig.tool.state(), DragState::Velocity);
    let points = rig.tool.velocity_ctrl_points().expect("Geschwindigkeits-Punkte");
    // horizontale Linie: Normale zeigt nach +y
    assert_relative_eq!(points[0].y, 0.1 + VELO_NORM, epsilon = 1e-4);
    assert_relative_eq!(points[1].y, 0.1 - VELO_NORM, epsilon = 1e-4);
    assert_relative_eq!(points[2].x, 0.5, epsilon = 1e-4);
    assert!(rig.tool.velocity_shape().is_some());
}

#[test]
fn test_double_click_without_acceleration_stays_ctrl() {
    let mut rig = Rig::drawn(ProbeHooks::default());
    rig.send(ToolEvent::double_press(v(300.0, 300.0)));
    assert_eq!(rig.tool.state(), DragState::Ctrl);

    let mut rig = Rig::drawn(ProbeHooks {
        degenerate: true,
        ..ProbeHooks::full()
    });
    rig.send(ToolEvent::double_press(v(300.0, 300.0)));
    assert_eq!(rig.tool.state(), DragState::Ctrl);
    assert!(rig.tool.velocity_ctrl_points().is_none());
}

#[test]
fn test_velocity_drag_mirrors_partner_and_sets_profile() {
    let mut rig = Rig::drawn(ProbeHooks::full());
    rig.send(ToolEvent::double_press(v(300.0, 300.0)));
    rig.send(ToolEvent::press(v(100.0, 150.0)));
    assert_eq!(rig.tool.state(), DragState::VeloDrag);

    rig.send(ToolEvent::drag(v(100.0, 200.0)));
    let points = rig.tool.velocity_ctrl_points().expect("Punkte");
    assert_relative_eq!(points[0].y, 0.2, epsilon = 1e-4);
    assert_relative_eq!(points[1].y, 0.0, epsilon = 1e-4);
    let profile = rig.tool.velocity_profile().expect("Profil");
    assert_relative_eq!(profile.start, 2.0, epsilon = 1e-3);
    assert_relative_eq!(profile.stop, 1.0, epsilon = 1e-3);

    rig.send(ToolEvent::release(v(100.0, 200.0)));
    assert_eq!(rig.tool.state(), DragState::Velocity);

    rig.send(ToolEvent::key(Key::Enter));
    let rendered = rig.tool.take_rendered();
    assert_eq!(rendered.len(), 1);
    let frames = &rendered[0].frames;
    assert_relative_eq!(frames[0].x, 0.1, epsilon = 1e-5);
    assert_relative_eq!(frames[10].x, 0.5, epsilon = 1e-4);
    // schneller Start: erste Hälfte deckt mehr als die halbe Strecke ab
    assert!(frames[5].x > 0.3);
}

#[test]
fn test_velocity_drag_clamps_to_max() {
    let mut rig = Rig::drawn(ProbeHooks::full());
    rig.send(ToolEvent::double_press(v(300.0, 300.0)));
    rig.send(ToolEvent::press(v(500.0, 150.0)));
    rig.send(ToolEvent::drag(v(500.0, 900.0)));
    rig.send(ToolEvent::release(v(500.0, 900.0)));
    let profile = rig.tool.velocity_profile().expect("Profil");
    assert_relative_eq!(profile.stop, VELOCITY_MAX);
    let points = rig.tool.velocity_ctrl_points().expect("Punkte");
    assert_relative_eq!(points[2].y, 0.1 + VELOCITY_MAX * VELO_NORM, epsilon = 1e-4);
}

#[test]
fn test_velocity_handles_follow_clamped_profile_while_dragging() {
    let mut rig = Rig::drawn(ProbeHooks::full());
    rig.send(ToolEvent::double_press(v(300.0, 300.0)));
    rig.send(ToolEvent::press(v(500.0, 150.0)));
    rig.send(ToolEvent::drag(v(500.0, 900.0)));
    assert_eq!(rig.tool.state(), DragState::VeloDrag);

    let points = rig.tool.velocity_ctrl_points().expect("Punkte");
    assert_relative_eq!(points[2].y, 0.1 + VELOCITY_MAX * VELO_NORM, epsilon = 1e-4);
    assert_relative_eq!(points[3].y, 0.1 - VELOCITY_MAX * VELO_NORM, epsilon = 1e-4);
    let hull = rig.tool.velocity_shape().expect("Hülle").bounds().expect("Bounds");
    assert!(hull.max.y <= points[2].y + 1e-4, "Handle liegt auf der Hülle");
}

#[test]
fn test_warped_time_boundaries() {
    for (v0, v1) in [(1.0, 1.0), (0.0, 3.0), (3.0, 0.0), (2.0, 0.5), (0.0, 0.0)] {
        let profile = VelocityProfile::new(v0, v1);
        assert_relative_eq!(profile.warped_time(0.0), 0.0);
        assert_relative_eq!(profile.warped_time(1.0), 1.0, epsilon = 1e-5);
        assert_relative_eq!(profile.velocity_at(0.0), v0, epsilon = 1e-5);
        assert_relative_eq!(profile.velocity_at(1.0), v1, epsilon = 1e-5);

        let times = profile.warped_times(50);
        assert!(
            times.windows(2).all(|w| w[1] >= w[0] - 1e-6),
            "Zeitverzerrung muss monoton sein für ({v0}, {v1})"
        );
    }
}

#[test]
fn test_uniform_profile_is_identity() {
    let profile = VelocityProfile::UNIFORM;
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        assert_relative_eq!(profile.warped_time(t), t, epsilon = 1e-6);
    }
    assert!(profile.warped_times(0).is_empty());
    assert_eq!(profile.warped_times(1), vec![0.0]);
}

#[test]
fn test_velocity_profile_clamps_inputs() {
    let profile = VelocityProfile::new(-1.0, 7.0);
    assert_eq!(profile, VelocityProfile::new(0.0, VELOCITY_MAX));
}

#[test]
fn test_velocity_samples_tangent_at_edges() {
    let samples = VelocitySamples::sample(|t| Vec2::new(t, 0.0));
    assert_eq!(samples.points.len(), VELO_POINTS);
    assert_relative_eq!(samples.angles[0], 0.0);
    assert_relative_eq!(samples.angles[VELO_POINTS - 1], 0.0);
    let shape = velocity_shape(&samples, &VelocityProfile::UNIFORM);
    let bounds = shape.bounds().expect("Hülle");
    assert_relative_eq!(bounds.height(), 2.0 * VELO_NORM, epsilon = 1e-5);
}

// ── Verkettung ───────────────────────────────────────────────────

#[test]
fn test_ctrl_enter_concatenates_from_end_point() {
    let mut rig = Rig::drawn(ProbeHooks::full());
    rig.send(ToolEvent::KeyPressed {
        key: Key::Enter,
        modifiers: Modifiers::CTRL,
    });
    assert_eq!(rig.tool.take_rendered().len(), 1);
    assert_eq!(rig.tool.state(), DragState::InitDrag);
    assert_relative_eq!(rig.ctrl(0).x, 0.5, epsilon = 1e-5);
    assert_relative_eq!(rig.ctrl(0).y, 0.1, epsilon = 1e-5);

    rig.send(ToolEvent::motion(v(500.0, 300.0)));
    assert_relative_eq!(rig.ctrl(1).y, 0.3, epsilon = 1e-5);
    assert_eq!(rig.tool.state(), DragState::InitDrag);

    rig.send(ToolEvent::press(v(500.0, 400.0)));
    assert_eq!(rig.tool.state(), DragState::Ctrl);
    assert_relative_eq!(rig.ctrl(1).y, 0.4, epsilon = 1e-5);
    rig.send(ToolEvent::release(v(500.0, 400.0)));
    assert_eq!(rig.tool.state(), DragState::Ctrl);
}

#[test]
fn test_ctrl_enter_without_concatenation_support() {
    let mut rig = Rig::drawn(ProbeHooks {
        concatenate: false,
        ..ProbeHooks::full()
    });
    rig.send(ToolEvent::KeyPressed {
        key: Key::Enter,
        modifiers: Modifiers::CTRL,
    });
    assert_eq!(rig.tool.take_rendered().len(), 1);
    assert_eq!(rig.tool.state(), DragState::None);
}

#[test]
fn test_vetoed_concatenation_ends_after_render() {
    let mut rig = Rig::drawn(ProbeHooks {
        veto_concat: true,
        ..ProbeHooks::full()
    });
    rig.send(ToolEvent::KeyPressed {
        key: Key::Enter,
        modifiers: Modifiers::CTRL,
    });
    assert_eq!(rig.tool.take_rendered().len(), 1);
    assert_eq!(rig.tool.state(), DragState::None);
    assert!(rig.tool.ctrl_points().is_none());
}

#[test]
fn test_no_concatenation_after_failed_render() {
    let mut rig = Rig::drawn(ProbeHooks {
        degenerate: true,
        ..ProbeHooks::full()
    });
    rig.send(ToolEvent::KeyPressed {
        key: Key::Enter,
        modifiers: Modifiers::CTRL,
    });
    assert!(rig.tool.take_rendered().is_empty());
    assert_eq!(rig.tool.state(), DragState::None);
    assert!(rig.tool.ctrl_points().is_none());
}

// ── Repaint ──────────────────────────────────────────────────────

#[test]
fn test_small_drag_step_repaints_once() {
    let mut rig = Rig::new(ProbeHooks::full());
    rig.send(ToolEvent::press(v(100.0, 100.0)));
    rig.send(ToolEvent::drag(v(300.0, 100.0)));
    rig.host.repaints.clear();
    rig.send(ToolEvent::drag(v(301.0, 100.0)));
    assert_eq!(rig.host.repaints.len(), 1, "überlappende Bereiche werden vereinigt");
    let area = rig.host.repaints[0];
    assert!(area.contains(v(100.0, 100.0)));
    assert!(area.contains(v(301.0, 100.0)));
}

#[test]
fn test_distant_jump_repaints_twice() {
    let mut rig = Rig::new(ProbeHooks::full());
    rig.send(ToolEvent::press(v(100.0, 100.0)));
    rig.send(ToolEvent::drag(v(100.0, 110.0)));
    rig.send(ToolEvent::release(v(100.0, 110.0)));
    // Endpunkt weit weg ziehen: alte und neue Shape liegen getrennt
    rig.send(ToolEvent::press(v(100.0, 110.0)));
    rig.send(ToolEvent::drag(v(105.0, 110.0)));
    let before = rig.tool.repaint_bounds().expect("Bereich");
    rig.host.repaints.clear();
    rig.send(ToolEvent::drag(v(900.0, 900.0)));
    let after = rig.tool.repaint_bounds().expect("Bereich");
    let expected = RepaintPlan::between(Some(before), Some(after)).rects().len();
    assert_eq!(rig.host.repaints.len(), expected);
}

#[test]
fn test_paint_restores_transform() {
    let mut rig = Rig::drawn(ProbeHooks::full());
    let mut painter = RecordingPainter {
        transform: Affine2::from_translation(v(3.0, 4.0)),
        ..Default::default()
    };
    rig.tool.paint_on_top(&mut painter, &rig.surface);
    assert!(painter.strokes >= 2, "Shape und Handles");
    assert_eq!(painter.fills, 0);
    assert_eq!(painter.transform, Affine2::from_translation(v(3.0, 4.0)));

    rig.send(ToolEvent::double_press(v(300.0, 300.0)));
    let mut painter = RecordingPainter::default();
    rig.tool.paint_on_top(&mut painter, &rig.surface);
    assert_eq!(painter.fills, 2, "Hülle und Geschwindigkeits-Handles");
}

// ── Lebenszyklus ─────────────────────────────────────────────────

#[test]
fn test_acquire_installs_bindings() {
    let rig = Rig::new(ProbeHooks::full());
    let bindings = rig.host.bindings.as_ref().expect("Bindungen");
    assert!(bindings.pointer && bindings.motion);
    assert!(bindings.accepts(&ToolEvent::key(Key::Escape)));
    assert_eq!(rig.tool.binding().component(), Some(ComponentId(1)));
}

#[test]
fn test_acquire_twice_fails() {
    let mut rig = Rig::new(ProbeHooks::full());
    let mut other = RecordingHost::new(2);
    assert_eq!(
        rig.tool.acquire(Some(&mut other)),
        Err(ToolError::AlreadyAcquired(ComponentId(1)))
    );
    assert!(other.bindings.is_none());
}

#[test]
fn test_acquire_without_component_fails() {
    let mut tool = GeomTool::new(ProbeHooks::full(), &options());
    assert_eq!(tool.acquire(None), Err(ToolError::NoComponent));
}

#[test]
fn test_dismiss_cancels_gesture_and_removes_bindings() {
    let mut rig = Rig::drawn(ProbeHooks::full());
    rig.tool.dismiss(&mut rig.host).expect("Dismiss erwartet");
    assert_eq!(rig.tool.state(), DragState::None);
    assert!(rig.host.bindings.is_none());
    assert!(rig.tool.take_rendered().is_empty());
    assert_eq!(rig.tool.dismiss(&mut rig.host), Err(ToolError::NotAcquired));
}

#[test]
fn test_dismiss_from_foreign_component_fails() {
    let mut rig = Rig::new(ProbeHooks::full());
    let mut other = RecordingHost::new(9);
    assert_eq!(
        rig.tool.dismiss(&mut other),
        Err(ToolError::ForeignComponent {
            bound: ComponentId(1),
            requested: ComponentId(9),
        })
    );
    assert!(rig.host.bindings.is_some());
}

#[test]
fn test_events_from_foreign_component_ignored() {
    let mut rig = Rig::new(ProbeHooks::full());
    let mut other = RecordingHost::new(5);
    rig.tool
        .handle_event(&ToolEvent::press(v(100.0, 100.0)), &rig.surface, &mut other);
    assert_eq!(rig.tool.state(), DragState::None);
}

#[test]
fn test_apply_options_changes_frame_count() {
    let mut rig = Rig::drawn(ProbeHooks::full());
    rig.tool.apply_options(&SurfaceOptions {
        render_frames: 3,
        ..SurfaceOptions::default()
    });
    rig.send(ToolEvent::key(Key::Enter));
    assert_eq!(rig.tool.take_rendered()[0].frames.len(), 3);
}
