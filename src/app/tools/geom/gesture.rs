//! Gesten-Automat: Maus-/Tasten-Handler und Shape-Aktualisierung.

use super::hooks::{GeomShapeHooks, GestureStyle};
use super::repaint::RepaintPlan;
use super::state::{DragState, Gesture, VelocityEdit};
use super::velocity::{
    drag_velocity_point, profile_from_ctrl_points, velocity_ctrl_points, velocity_shape,
    VelocityProfile, VelocitySamples,
};
use crate::app::tools::{
    Key, Modifiers, OverlayPainter, RenderedGesture, SurfaceTool, ToolBinding, ToolEvent,
    ToolHost,
};
use crate::core::{GeomPath, Rect, VirtualSurface};
use crate::shared::SurfaceOptions;
use glam::Vec2;

/// Quadrierte Screen-Distanz, ab der ein Press zum initialen Drag wird.
pub const DRAG_THRESHOLD_SQ: f32 = 5.0;
/// Quadrierte Screen-Distanz für Treffer auf Kontrollpunkte.
pub const CTRL_HIT_DIST_SQ: f32 = 25.1;

/// Geometrisches Gesten-Tool: Zustandsautomat über einem `GeomShapeHooks`-Tool.
pub struct GeomTool<H: GeomShapeHooks> {
    hooks: H,
    binding: ToolBinding,
    style: GestureStyle,
    render_frames: usize,
    state: DragState,
    gesture: Option<Gesture>,
    rendered: Vec<RenderedGesture>,
}

impl<H: GeomShapeHooks> GeomTool<H> {
    pub fn new(hooks: H, options: &SurfaceOptions) -> Self {
        Self {
            hooks,
            binding: ToolBinding::new(),
            style: GestureStyle::from_options(options),
            render_frames: options.render_frames,
            state: DragState::None,
            gesture: None,
            rendered: Vec::new(),
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Kontrollpunkte der laufenden Geste (virtueller Raum).
    pub fn ctrl_points(&self) -> Option<&[Vec2]> {
        self.gesture.as_ref().map(|g| g.ctrl_points.as_slice())
    }

    pub fn basic_shape(&self) -> Option<&GeomPath> {
        self.gesture.as_ref().map(|g| &g.basic_shape)
    }

    pub fn controlled_shape(&self) -> Option<&GeomPath> {
        self.gesture.as_ref().map(|g| &g.controlled_shape)
    }

    /// Kontrollpunkt-Handles der laufenden Geste (Screen-Pixel).
    pub fn ctrl_points_shape(&self) -> Option<&GeomPath> {
        self.gesture.as_ref().map(|g| &g.ctrl_points_shape)
    }

    pub fn velocity_profile(&self) -> Option<VelocityProfile> {
        self.gesture.as_ref().map(|g| g.profile)
    }

    pub fn velocity_ctrl_points(&self) -> Option<[Vec2; 4]> {
        self.gesture
            .as_ref()
            .and_then(|g| g.velocity.as_ref())
            .map(|v| v.ctrl_points)
    }

    pub fn velocity_shape(&self) -> Option<&GeomPath> {
        self.gesture
            .as_ref()
            .and_then(|g| g.velocity.as_ref())
            .map(|v| &v.shape)
    }

    /// Zuletzt gemeldeter Repaint-Bereich (Screen-Pixel).
    pub fn repaint_bounds(&self) -> Option<Rect> {
        self.gesture.as_ref().and_then(|g| g.repaint_bounds)
    }

    /// Beendet die Geste: `true` rendert (nur aus Ctrl/Velocity), `false` verwirft.
    pub fn finish_gesture(
        &mut self,
        success: bool,
        surface: &dyn VirtualSurface,
        host: &mut dyn ToolHost,
    ) {
        self.finish(success, false, surface, host);
    }

    // ── Handler ──────────────────────────────────────────────────

    fn mouse_pressed(
        &mut self,
        pos: Vec2,
        click_count: u32,
        modifiers: Modifiers,
        surface: &dyn VirtualSurface,
        host: &mut dyn ToolHost,
    ) {
        match self.state {
            DragState::None => {
                let start = surface.snap_screen(pos);
                let count = self.hooks.num_ctrl_points().max(2);
                self.gesture = Some(Gesture::new(count, start, pos));
                self.state = DragState::Init;
                log::debug!("{}: Geste gestartet bei {:?}", self.hooks.name(), start);
            }
            DragState::InitDrag if self.is_concatenating() => {
                self.complete_initial_drag(pos, surface, host);
            }
            DragState::Ctrl => {
                if click_count >= 2 && self.hooks.can_accelerate() {
                    self.enter_velocity(surface, host);
                } else if let Some(index) = self.hit_ctrl_point(pos, surface) {
                    self.begin_drag(index, DragState::CtrlDrag);
                } else if modifiers.alt && self.hooks.can_rotate() {
                    log::debug!("{}: Rotation wird nicht unterstützt", self.hooks.name());
                }
            }
            DragState::Velocity => {
                if let Some(index) = self.hit_velocity_point(pos, surface) {
                    self.begin_drag(index, DragState::VeloDrag);
                }
            }
            DragState::Init
            | DragState::InitDrag
            | DragState::CtrlDrag
            | DragState::VeloDrag
            | DragState::Rotate => self.abort_unexpected("mouse_pressed", host),
        }
    }

    fn mouse_dragged(&mut self, pos: Vec2, surface: &dyn VirtualSurface, host: &mut dyn ToolHost) {
        match self.state {
            DragState::Init => {
                let Some(g) = self.gesture.as_mut() else {
                    return self.abort_unexpected("mouse_dragged", host);
                };
                if (pos - g.press_screen).length_squared() > DRAG_THRESHOLD_SQ {
                    // Schwelle überschritten: hochstufen und als InitDrag weiterverarbeiten
                    g.repaint_bounds = None;
                    self.state = DragState::InitDrag;
                    self.update_initial_drag(pos, surface, host);
                }
            }
            DragState::InitDrag => self.update_initial_drag(pos, surface, host),
            DragState::CtrlDrag => self.update_ctrl_drag(pos, surface, host),
            DragState::VeloDrag => self.update_velocity_drag(pos, surface, host),
            DragState::None | DragState::Ctrl | DragState::Velocity => {}
            DragState::Rotate => self.abort_unexpected("mouse_dragged", host),
        }
    }

    fn mouse_moved(&mut self, pos: Vec2, surface: &dyn VirtualSurface, host: &mut dyn ToolHost) {
        if self.state == DragState::InitDrag && self.is_concatenating() {
            self.update_initial_drag(pos, surface, host);
        }
    }

    fn mouse_released(&mut self, pos: Vec2, surface: &dyn VirtualSurface, host: &mut dyn ToolHost) {
        match self.state {
            DragState::Init => {
                log::debug!("{}: Klick ohne Drag, Geste verworfen", self.hooks.name());
                self.finish(false, false, surface, host);
            }
            DragState::InitDrag => {
                if !self.is_concatenating() {
                    self.complete_initial_drag(pos, surface, host);
                }
            }
            DragState::CtrlDrag => {
                self.update_ctrl_drag(pos, surface, host);
                self.state = DragState::Ctrl;
                self.refresh(surface, host);
            }
            DragState::VeloDrag => self.complete_velocity_drag(surface, host),
            DragState::None | DragState::Ctrl | DragState::Velocity => {}
            DragState::Rotate => self.abort_unexpected("mouse_released", host),
        }
    }

    fn key_pressed(
        &mut self,
        key: Key,
        modifiers: Modifiers,
        surface: &dyn VirtualSurface,
        host: &mut dyn ToolHost,
    ) {
        if key != Key::Enter || self.state == DragState::None {
            return;
        }
        let concatenate = modifiers.ctrl && self.hooks.can_concatenate();
        self.finish(true, concatenate, surface, host);
    }

    // ── Übergänge ────────────────────────────────────────────────

    fn is_concatenating(&self) -> bool {
        self.gesture.as_ref().is_some_and(|g| g.concatenating)
    }

    fn begin_drag(&mut self, index: usize, state: DragState) {
        if let Some(g) = self.gesture.as_mut() {
            g.drag_index = index;
            self.state = state;
        }
    }

    fn update_initial_drag(
        &mut self,
        pos: Vec2,
        surface: &dyn VirtualSurface,
        host: &mut dyn ToolHost,
    ) {
        let Some(g) = self.gesture.as_mut() else {
            return self.abort_unexpected("initial_drag", host);
        };
        g.ctrl_points[1] = surface.snap_screen(pos);
        g.basic_shape = self.hooks.create_basic_shape(&g.ctrl_points);
        self.refresh(surface, host);
    }

    fn complete_initial_drag(
        &mut self,
        pos: Vec2,
        surface: &dyn VirtualSurface,
        host: &mut dyn ToolHost,
    ) {
        let Some(g) = self.gesture.as_mut() else {
            return self.abort_unexpected("initial_drag_end", host);
        };
        g.ctrl_points[1] = surface.snap_screen(pos);
        self.hooks.init_control_points(&mut g.ctrl_points);
        g.basic_shape = self.hooks.create_basic_shape(&g.ctrl_points);
        g.controlled_shape = self.hooks.create_controlled_shape(&g.ctrl_points);
        g.profile = VelocityProfile::UNIFORM;
        g.concatenating = false;
        self.state = DragState::Ctrl;
        self.refresh(surface, host);
    }

    fn update_ctrl_drag(&mut self, pos: Vec2, surface: &dyn VirtualSurface, host: &mut dyn ToolHost) {
        let Some(g) = self.gesture.as_mut() else {
            return self.abort_unexpected("ctrl_drag", host);
        };
        let index = g.drag_index.min(g.ctrl_points.len() - 1);
        g.ctrl_points[index] = surface.snap_screen(pos);
        g.controlled_shape = self.hooks.create_controlled_shape(&g.ctrl_points);
        self.refresh(surface, host);
    }

    fn enter_velocity(&mut self, surface: &dyn VirtualSurface, host: &mut dyn ToolHost) {
        let Some(g) = self.gesture.as_mut() else {
            return self.abort_unexpected("enter_velocity", host);
        };
        if !self.hooks.init_function_evaluation(&g.ctrl_points) {
            log::debug!(
                "{}: Shape nicht auswertbar, Geschwindigkeits-Modus übersprungen",
                self.hooks.name()
            );
            return;
        }
        let hooks = &self.hooks;
        let samples = VelocitySamples::sample(|t| hooks.evaluate_function(t));
        let ctrl_points = velocity_ctrl_points(&samples, &g.profile);
        let shape = velocity_shape(&samples, &g.profile);
        g.velocity = Some(VelocityEdit {
            samples,
            ctrl_points,
            shape,
        });
        self.state = DragState::Velocity;
        self.refresh(surface, host);
    }

    fn update_velocity_drag(
        &mut self,
        pos: Vec2,
        surface: &dyn VirtualSurface,
        host: &mut dyn ToolHost,
    ) {
        let Some(g) = self.gesture.as_mut() else {
            return self.abort_unexpected("velocity_drag", host);
        };
        let Some(edit) = g.velocity.as_mut() else {
            return self.abort_unexpected("velocity_drag", host);
        };
        let index = g.drag_index.min(3);
        drag_velocity_point(
            &edit.samples,
            &mut edit.ctrl_points,
            index,
            surface.screen_to_virtual(pos),
        );
        g.profile = profile_from_ctrl_points(&edit.samples, &edit.ctrl_points);
        // Handles folgen dem begrenzten Profil, nicht dem rohen Zeiger
        edit.ctrl_points = velocity_ctrl_points(&edit.samples, &g.profile);
        edit.shape = velocity_shape(&edit.samples, &g.profile);
        self.refresh(surface, host);
    }

    fn complete_velocity_drag(&mut self, surface: &dyn VirtualSurface, host: &mut dyn ToolHost) {
        let Some(g) = self.gesture.as_mut() else {
            return self.abort_unexpected("velocity_drag_end", host);
        };
        let Some(edit) = g.velocity.as_mut() else {
            return self.abort_unexpected("velocity_drag_end", host);
        };
        g.profile = profile_from_ctrl_points(&edit.samples, &edit.ctrl_points);
        edit.ctrl_points = velocity_ctrl_points(&edit.samples, &g.profile);
        edit.shape = velocity_shape(&edit.samples, &g.profile);
        log::debug!(
            "{}: Geschwindigkeit {:.2} → {:.2}",
            self.hooks.name(),
            g.profile.start,
            g.profile.stop
        );
        self.state = DragState::Velocity;
        self.refresh(surface, host);
    }

    /// Räumt die Geste ab: Zustand → None, alter Bereich wird neu gezeichnet.
    fn end_gesture(&mut self, host: &mut dyn ToolHost) -> Option<(DragState, Gesture)> {
        self.hooks.reset_gesture();
        let state = std::mem::take(&mut self.state);
        let gesture = self.gesture.take()?;
        RepaintPlan::between(gesture.repaint_bounds, None).apply(host);
        Some((state, gesture))
    }

    fn finish(
        &mut self,
        success: bool,
        concatenate: bool,
        surface: &dyn VirtualSurface,
        host: &mut dyn ToolHost,
    ) {
        let Some((state, gesture)) = self.end_gesture(host) else {
            return;
        };
        if !success {
            log::debug!("{}: Geste abgebrochen ({:?})", self.hooks.name(), state);
            return;
        }
        if !state.can_render() {
            log::debug!(
                "{}: Enter in Zustand {:?}, keine fertige Geste",
                self.hooks.name(),
                state
            );
            return;
        }

        let rendered =
            self.hooks
                .render_gesture(&gesture.ctrl_points, &gesture.profile, self.render_frames);
        let Some(frames) = rendered else {
            log::warn!("{}: Geste konnte nicht gerendert werden", self.hooks.name());
            return;
        };
        log::info!(
            "{}: Geste gerendert ({} Frames)",
            self.hooks.name(),
            frames.len()
        );
        self.rendered.push(RenderedGesture {
            tool: self.hooks.name().to_string(),
            ctrl_points: gesture.ctrl_points.clone(),
            velocity: gesture.profile,
            frames,
        });

        // Verkettung nur an eine tatsächlich geschriebene Geste
        if concatenate {
            self.start_concatenation(&gesture.ctrl_points, surface, host);
        }
    }

    /// Beginnt eine neue Geste am letzten Endpunkt (Ctrl+Enter).
    fn start_concatenation(
        &mut self,
        previous: &[Vec2],
        surface: &dyn VirtualSurface,
        host: &mut dyn ToolHost,
    ) {
        let Some(&end) = previous.get(1) else {
            return;
        };
        let count = self.hooks.num_ctrl_points().max(2);
        let mut next = vec![end; count];
        if !self.hooks.init_concatenation(previous, &mut next) {
            log::debug!("{}: Verkettung abgelehnt", self.hooks.name());
            return;
        }
        let mut gesture = Gesture::from_points(next, surface.virtual_to_screen(end));
        gesture.concatenating = true;
        gesture.basic_shape = self.hooks.create_basic_shape(&gesture.ctrl_points);
        self.gesture = Some(gesture);
        self.state = DragState::InitDrag;
        self.refresh(surface, host);
    }

    /// Unerwarteter Zustand in einem Handler: loggen und Geste abbrechen.
    fn abort_unexpected(&mut self, handler: &str, host: &mut dyn ToolHost) {
        log::warn!(
            "{}: unerwarteter Zustand {:?} in {}, Geste abgebrochen",
            self.hooks.name(),
            self.state,
            handler
        );
        self.end_gesture(host);
    }

    // ── Hit-Tests ────────────────────────────────────────────────

    fn hit_ctrl_point(&self, pos: Vec2, surface: &dyn VirtualSurface) -> Option<usize> {
        let g = self.gesture.as_ref()?;
        nearest_hit(
            g.ctrl_points.iter().map(|p| surface.virtual_to_screen(*p)),
            pos,
        )
    }

    fn hit_velocity_point(&self, pos: Vec2, surface: &dyn VirtualSurface) -> Option<usize> {
        let edit = self.gesture.as_ref()?.velocity.as_ref()?;
        nearest_hit(
            edit.ctrl_points.iter().map(|p| surface.virtual_to_screen(*p)),
            pos,
        )
    }

    // ── Shapes + Repaint ─────────────────────────────────────────

    /// Berechnet die Handles neu und meldet den minimalen Repaint-Bereich.
    fn refresh(&mut self, surface: &dyn VirtualSurface, host: &mut dyn ToolHost) {
        let state = self.state;
        let Some(g) = self.gesture.as_mut() else {
            return;
        };
        g.ctrl_points_shape = if state.shows_ctrl_points() {
            handles_shape(&self.hooks, surface, &g.ctrl_points, self.style.ctrl_point_size)
        } else {
            GeomPath::new()
        };
        let new_bounds =
            transient_bounds(state, g, surface, &self.hooks, self.style.ctrl_point_size)
                .map(|r| r.expand(self.style.repaint_padding));
        RepaintPlan::between(g.repaint_bounds, new_bounds).apply(host);
        g.repaint_bounds = new_bounds;
    }
}

/// Index des nächstgelegenen Punkts mit quadrierter Distanz < `CTRL_HIT_DIST_SQ`.
fn nearest_hit(points: impl Iterator<Item = Vec2>, pos: Vec2) -> Option<usize> {
    points
        .enumerate()
        .map(|(i, p)| (i, p.distance_squared(pos)))
        .filter(|(_, d)| *d < CTRL_HIT_DIST_SQ)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Handles für alle Punkte in Screen-Pixeln.
fn handles_shape<H: GeomShapeHooks>(
    hooks: &H,
    surface: &dyn VirtualSurface,
    points: &[Vec2],
    size: f32,
) -> GeomPath {
    let mut path = GeomPath::new();
    for p in points {
        path.append(&hooks.ctrl_point_shape(surface.virtual_to_screen(*p), size));
    }
    path
}

/// Screen-Bounds aller transienten Shapes im aktuellen Zustand.
fn transient_bounds<H: GeomShapeHooks>(
    state: DragState,
    g: &Gesture,
    surface: &dyn VirtualSurface,
    hooks: &H,
    handle_size: f32,
) -> Option<Rect> {
    let mut parts: Vec<Option<Rect>> = Vec::with_capacity(4);
    match state {
        DragState::InitDrag => {
            parts.push(surface.virtual_to_screen_path(&g.basic_shape).bounds());
        }
        s if s.shows_ctrl_points() => {
            parts.push(surface.virtual_to_screen_path(&g.controlled_shape).bounds());
            parts.push(g.ctrl_points_shape.bounds());
            if let Some(edit) = g.velocity.as_ref().filter(|_| s.shows_velocity()) {
                parts.push(surface.virtual_to_screen_path(&edit.shape).bounds());
                parts.push(handles_shape(hooks, surface, &edit.ctrl_points, handle_size).bounds());
            }
        }
        _ => {}
    }
    parts
        .into_iter()
        .flatten()
        .reduce(|a, b| a.union(&b))
}

impl<H: GeomShapeHooks> SurfaceTool for GeomTool<H> {
    fn name(&self) -> &str {
        self.hooks.name()
    }

    fn status_text(&self) -> &str {
        match self.state {
            DragState::None => "Ziehen, um eine Geste zu beginnen",
            DragState::Init | DragState::InitDrag => "Endpunkt ziehen und loslassen",
            DragState::Ctrl | DragState::CtrlDrag => {
                if self.hooks.can_accelerate() {
                    "Kontrollpunkte ziehen, Doppelklick: Geschwindigkeit, Enter: übernehmen"
                } else {
                    "Kontrollpunkte ziehen, Enter: übernehmen"
                }
            }
            DragState::Velocity | DragState::VeloDrag => {
                "Geschwindigkeit an den Enden ziehen, Enter: übernehmen"
            }
            DragState::Rotate => "Rotation",
        }
    }

    fn binding(&self) -> &ToolBinding {
        &self.binding
    }

    fn binding_mut(&mut self) -> &mut ToolBinding {
        &mut self.binding
    }

    fn cancel_gesture(&mut self, host: &mut dyn ToolHost) {
        if let Some((state, _)) = self.end_gesture(host) {
            log::debug!("{}: Geste abgebrochen ({:?})", self.hooks.name(), state);
        }
    }

    fn process_event(
        &mut self,
        event: &ToolEvent,
        surface: &dyn VirtualSurface,
        host: &mut dyn ToolHost,
    ) {
        match *event {
            ToolEvent::Pressed {
                pos,
                click_count,
                modifiers,
            } => self.mouse_pressed(pos, click_count, modifiers, surface, host),
            ToolEvent::Dragged { pos, .. } => self.mouse_dragged(pos, surface, host),
            ToolEvent::Moved { pos, .. } => self.mouse_moved(pos, surface, host),
            ToolEvent::Released { pos, .. } => self.mouse_released(pos, surface, host),
            ToolEvent::KeyPressed { key, modifiers } => {
                self.key_pressed(key, modifiers, surface, host)
            }
        }
    }

    fn paint_on_top(&self, painter: &mut dyn OverlayPainter, surface: &dyn VirtualSurface) {
        let Some(g) = self.gesture.as_ref() else {
            return;
        };
        let saved = painter.transform();
        match self.state {
            DragState::InitDrag => {
                let shape = surface.virtual_to_screen_path(&g.basic_shape);
                self.hooks.paint_shape(painter, &shape, &self.style);
            }
            s if s.shows_ctrl_points() => {
                if let Some(edit) = g.velocity.as_ref().filter(|_| s.shows_velocity()) {
                    let hull = surface.virtual_to_screen_path(&edit.shape);
                    self.hooks.paint_velocity_shape(painter, &hull, &self.style);
                }
                let shape = surface.virtual_to_screen_path(&g.controlled_shape);
                self.hooks.paint_shape(painter, &shape, &self.style);

                let size = self.style.ctrl_point_size;
                painter.set_stroke(1.0, self.style.ctrl_point_color);
                painter.stroke_path(&handles_shape(&self.hooks, surface, &g.ctrl_points, size));
                if let Some(edit) = g.velocity.as_ref().filter(|_| s.shows_velocity()) {
                    painter.set_fill(self.style.velocity_color);
                    painter.fill_path(&handles_shape(
                        &self.hooks,
                        surface,
                        &edit.ctrl_points,
                        size,
                    ));
                }
            }
            _ => {}
        }
        painter.set_transform(saved);
    }

    fn take_rendered(&mut self) -> Vec<RenderedGesture> {
        std::mem::take(&mut self.rendered)
    }

    fn is_drawing(&self) -> bool {
        self.state != DragState::None
    }

    fn apply_options(&mut self, options: &SurfaceOptions) {
        self.style = GestureStyle::from_options(options);
        self.render_frames = options.render_frames;
    }
}
