//! Zeichenfläche: Session-Darstellung plus Overlay des aktiven Tools.

use super::input::InputState;
use super::keyboard;
use super::overlay::{color32, to_pos2, to_vec2, EguiOverlayPainter};
use crate::app::{AppIntent, AppState};
use crate::core::VirtualSurface;

const BACKGROUND: egui::Color32 = egui::Color32::from_gray(24);
const GRID_COLOR: egui::Color32 = egui::Color32::from_gray(40);
const TRAJECTORY_COLOR: egui::Color32 = egui::Color32::from_gray(110);
const RECEIVER_COLOR: egui::Color32 = egui::Color32::from_rgb(90, 200, 120);
const TRANSMITTER_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 230, 230);
const RECEIVER_RADIUS_PX: f32 = 6.0;
const TRANSMITTER_RADIUS_PX: f32 = 4.0;

/// Rendert die Zeichenfläche in den verfügbaren Bereich und gibt erzeugte Events zurück.
pub fn render_canvas(ui: &mut egui::Ui, state: &AppState, input: &mut InputState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
    let origin = to_vec2(rect.min);
    let size = to_vec2(rect.max) - origin;
    if origin != state.surface.origin || size != state.surface.size {
        events.push(AppIntent::CanvasResized { origin, size });
    }

    let keyboard_free = !ui.ctx().wants_keyboard_input();
    events.extend(ui.input(|i| input.collect_canvas_events(i, rect, keyboard_free)));
    events.extend(keyboard::collect_keyboard_intents(
        ui,
        state.tools.tool_count(),
        state.is_drawing(),
    ));

    if state.tools.active_tool().is_some() && response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
    }

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, BACKGROUND);
    if let Some(step) = state.options.active_grid() {
        paint_grid(&painter, state, step);
    }
    paint_session(&painter, state);

    if let Some(tool) = state.tools.active_tool() {
        let mut overlay = EguiOverlayPainter::new();
        tool.paint_on_top(&mut overlay, &state.surface);
        painter.extend(overlay.into_shapes());
    }

    events
}

fn paint_grid(painter: &egui::Painter, state: &AppState, step: f32) {
    if step <= f32::EPSILON {
        return;
    }
    let stroke = egui::Stroke::new(1.0, GRID_COLOR);
    let lines = (1.0 / step).floor() as usize;
    for i in 1..=lines {
        let v = i as f32 * step;
        let top = state.surface.virtual_to_screen(glam::Vec2::new(v, 0.0));
        let bottom = state.surface.virtual_to_screen(glam::Vec2::new(v, 1.0));
        painter.line_segment([to_pos2(top), to_pos2(bottom)], stroke);
        let left = state.surface.virtual_to_screen(glam::Vec2::new(0.0, v));
        let right = state.surface.virtual_to_screen(glam::Vec2::new(1.0, v));
        painter.line_segment([to_pos2(left), to_pos2(right)], stroke);
    }
}

/// Receiver, Trajektorie des gewählten Transmitters und zuletzt geschriebener Bereich.
fn paint_session(painter: &egui::Painter, state: &AppState) {
    let session = &state.session;
    let surface = &state.surface;
    let to_screen = |p: glam::Vec2| to_pos2(surface.virtual_to_screen(p));

    for receiver in &session.receivers {
        let center = to_screen(receiver.position);
        painter.circle_stroke(center, RECEIVER_RADIUS_PX, egui::Stroke::new(1.5, RECEIVER_COLOR));
        painter.text(
            center + egui::vec2(RECEIVER_RADIUS_PX + 2.0, 0.0),
            egui::Align2::LEFT_CENTER,
            &receiver.name,
            egui::FontId::proportional(12.0),
            RECEIVER_COLOR,
        );
    }

    if let Some(transmitter) = session
        .selected_transmitter
        .and_then(|i| session.transmitters.get(i))
    {
        let frames = transmitter.trajectory.frames();
        let points: Vec<egui::Pos2> = frames.iter().map(|p| to_screen(*p)).collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(1.0, TRAJECTORY_COLOR),
        ));

        if let Some(range) = state.ui.last_written.clone() {
            let written: Vec<egui::Pos2> = frames
                .get(range)
                .unwrap_or_default()
                .iter()
                .map(|p| to_screen(*p))
                .collect();
            painter.add(egui::Shape::line(
                written,
                egui::Stroke::new(2.0, color32(state.options.shape_color)),
            ));
        }
    }

    let cursor_frame = session
        .timeline
        .selection
        .as_ref()
        .map_or(0, |range| range.start);
    for transmitter in &session.transmitters {
        let Some(pos) = transmitter.trajectory.position_at(cursor_frame) else {
            continue;
        };
        let center = to_screen(pos);
        painter.circle_filled(center, TRANSMITTER_RADIUS_PX, TRANSMITTER_COLOR);
        painter.text(
            center + egui::vec2(0.0, -TRANSMITTER_RADIUS_PX - 2.0),
            egui::Align2::CENTER_BOTTOM,
            &transmitter.name,
            egui::FontId::proportional(12.0),
            TRANSMITTER_COLOR,
        );
    }
}
