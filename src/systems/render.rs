//! Rendering.
//!
//! One pass per frame inside raylib's drawing scope:
//! 1. the boxes in 3D, each with its own rotation and role colour;
//! 2. floating texts, projected to the screen and sized from their world
//!    height, farthest first;
//! 3. the control panel, the code echo, the alert modal and the debug
//!    overlay.
//!
//! Translucent boxes are drawn back to front with depth writes disabled so
//! the glyphs inside stay visible.

use std::ffi::CString;

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::floatingtext::FloatingText;
use crate::components::numberbox::NumberBox;
use crate::components::rotation::Rotation;
use crate::components::worldposition::WorldPosition;
use crate::resources::alert::Alert;
use crate::resources::camera3d::SceneCamera;
use crate::resources::controlpanel::{ControlPanel, Field};
use crate::resources::debugmode::DebugMode;
use crate::resources::fontstore::FontStore;
use crate::resources::modelstore::ModelStore;
use crate::resources::sequencer::Sequencer;
use crate::resources::transparency::Transparency;
use crate::resources::windowsize::WindowSize;
use crate::systems::panel::PanelLayout;

const BACKGROUND: Color = Color::new(0x1e, 0x1e, 0x24, 255);
const PANEL_BG: Color = Color::new(0x2a, 0x2a, 0x33, 230);
const WIDGET_BG: Color = Color::new(0x40, 0x40, 0x4c, 255);
const WIDGET_ACTIVE: Color = Color::new(0x5a, 0x6a, 0xc8, 255);
const UI_TEXT: Color = Color::new(0xee, 0xee, 0xee, 255);
const ECHO_TEXT: Color = Color::new(0x9c, 0xdc, 0xfe, 255);
const UI_FONT_SIZE: i32 = 20;
const ECHO_FONT_SIZE: i32 = 16;
const TEXT_SPACING: f32 = 1.0;

fn distance_sq(a: Vector3, b: Vector3) -> f32 {
    let d = a - b;
    d.x * d.x + d.y * d.y + d.z * d.z
}

fn measure(font: &Font, text: &str, size: f32) -> Option<Vector2> {
    let c_text = CString::new(text.as_bytes()).ok()?;
    let measured = unsafe { ffi::MeasureTextEx(**font, c_text.as_ptr(), size, TEXT_SPACING) };
    Some(Vector2::new(measured.x, measured.y))
}

fn draw_button(d: &mut RaylibDrawHandle, rect: Rectangle, label: &str, active: bool) {
    d.draw_rectangle_rec(rect, if active { WIDGET_ACTIVE } else { WIDGET_BG });
    let w = d.measure_text(label, UI_FONT_SIZE);
    d.draw_text(
        label,
        (rect.x + (rect.width - w as f32) / 2.0) as i32,
        (rect.y + (rect.height - UI_FONT_SIZE as f32) / 2.0) as i32,
        UI_FONT_SIZE,
        UI_TEXT,
    );
}

fn draw_field(d: &mut RaylibDrawHandle, rect: Rectangle, caption: &str, value: &str, focused: bool) {
    d.draw_rectangle_rec(rect, WIDGET_BG);
    if focused {
        d.draw_rectangle_lines_ex(rect, 2.0, WIDGET_ACTIVE);
    }
    let text = if value.is_empty() && !focused {
        caption.to_string()
    } else if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };
    d.draw_text(
        &text,
        (rect.x + 8.0) as i32,
        (rect.y + (rect.height - UI_FONT_SIZE as f32) / 2.0) as i32,
        UI_FONT_SIZE,
        if value.is_empty() { Color::GRAY } else { UI_TEXT },
    );
}

fn draw_panel(d: &mut RaylibDrawHandle, layout: &PanelLayout, panel: &ControlPanel, seq: &Sequencer) {
    if let Some(toggle) = layout.menu_toggle {
        draw_button(d, toggle, "=", panel.open);
    }
    if !layout.visible {
        return;
    }
    d.draw_rectangle_rec(layout.panel, PANEL_BG);
    draw_field(
        d,
        layout.first,
        "First number",
        &panel.first_input,
        panel.focused == Some(Field::First),
    );
    draw_field(
        d,
        layout.second,
        "Second number",
        &panel.second_input,
        panel.focused == Some(Field::Second),
    );
    draw_button(d, layout.plus, "+", panel.operator == "+");
    draw_button(d, layout.minus, "-", panel.operator == "-");
    draw_button(d, layout.advance, seq.step().button_label(), seq.is_animating);
    draw_button(d, layout.opacity, "Toggle opacity", false);
    for (i, line) in panel.echo.lines().iter().enumerate() {
        d.draw_text(
            line,
            layout.echo.x as i32,
            layout.echo.y as i32 + i as i32 * (ECHO_FONT_SIZE + 6),
            ECHO_FONT_SIZE,
            ECHO_TEXT,
        );
    }
}

fn draw_alert(d: &mut RaylibDrawHandle, window: WindowSize, alert: &Alert) {
    d.draw_rectangle(0, 0, window.w, window.h, Color::new(0, 0, 0, 160));
    let hint = "Click or press Enter to continue";
    let width = d
        .measure_text(&alert.message, UI_FONT_SIZE)
        .max(d.measure_text(hint, UI_FONT_SIZE))
        + 40;
    let height = UI_FONT_SIZE * 2 + 50;
    let x = (window.w - width) / 2;
    let y = (window.h - height) / 2;
    d.draw_rectangle(x, y, width, height, PANEL_BG);
    d.draw_rectangle_lines(x, y, width, height, WIDGET_ACTIVE);
    d.draw_text(&alert.message, x + 20, y + 15, UI_FONT_SIZE, UI_TEXT);
    d.draw_text(hint, x + 20, y + 25 + UI_FONT_SIZE, UI_FONT_SIZE, Color::GRAY);
}

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    camera: Res<SceneCamera>,
    window: Res<WindowSize>,
    panel: Res<ControlPanel>,
    sequencer: Res<Sequencer>,
    transparency: Res<Transparency>,
    alert: Option<Res<Alert>>,
    debug: Option<Res<DebugMode>>,
    fonts: NonSend<FontStore>,
    mut models: NonSendMut<ModelStore>,
    boxes: Query<(&NumberBox, &WorldPosition, &Rotation)>,
    texts: Query<(&FloatingText, &WorldPosition)>,
) {
    let cam = camera.0;
    let mut d = rl.begin_drawing(&th);
    d.clear_background(BACKGROUND);

    // 1. Boxes
    {
        let mut d3 = d.begin_mode3D(cam);
        if let Some(model) = models.box_model.as_mut() {
            let mut order: Vec<_> = boxes.iter().collect();
            if transparency.translucent {
                order.sort_by(|a, b| {
                    distance_sq(b.1.pos, cam.position).total_cmp(&distance_sq(a.1.pos, cam.position))
                });
                unsafe { ffi::rlDisableDepthMask() };
            }
            let alpha = transparency.alpha();
            for (number_box, pos, rot) in order {
                let mut tint = number_box.role.color();
                tint.a = (255.0 * alpha) as u8;
                model.set_transform(&rot.matrix());
                d3.draw_model(&*model, pos.pos, 1.0, tint);
            }
            if transparency.translucent {
                unsafe { ffi::rlEnableDepthMask() };
            }
        }
        if debug.is_some() {
            d3.draw_grid(20, 1.0);
        }
    }

    // 2. Floating texts
    if let Some(font) = fonts.main() {
        let forward = cam.target - cam.position;
        let mut visible: Vec<(f32, &FloatingText, Vector3)> = texts
            .iter()
            .filter_map(|(text, pos)| {
                let anchor = pos.pos
                    + Vector3 {
                        x: 0.0,
                        y: text.baseline,
                        z: 0.0,
                    };
                let to_text = anchor - cam.position;
                // Behind the camera.
                if to_text.dot(forward) <= 0.0 {
                    return None;
                }
                Some((distance_sq(anchor, cam.position), text, anchor))
            })
            .collect();
        visible.sort_by(|a, b| b.0.total_cmp(&a.0));

        for (_, text, anchor) in visible {
            let center = d.get_world_to_screen(anchor, cam);
            let top = d.get_world_to_screen(
                anchor
                    + Vector3 {
                        x: 0.0,
                        y: text.height,
                        z: 0.0,
                    },
                cam,
            );
            let size = (center.y - top.y).abs();
            if size < 1.0 {
                continue;
            }
            let Some(extent) = measure(font, &text.content, size) else {
                continue;
            };
            d.draw_text_ex(
                font,
                &text.content,
                Vector2::new(center.x - extent.x / 2.0, center.y - extent.y / 2.0),
                size,
                TEXT_SPACING,
                text.effective_color(),
            );
        }
    }

    // 3. UI
    let layout = PanelLayout::compute(*window, panel.open);
    draw_panel(&mut d, &layout, &panel, &sequencer);

    if debug.is_some() {
        let fps = d.get_fps();
        let lines = [
            format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps),
            format!(
                "Step: {:?} | animating: {} | cycles: {}",
                sequencer.step(),
                sequencer.is_animating,
                sequencer.cycles
            ),
            format!("Texts: {} | Boxes: {}", texts.iter().count(), boxes.iter().count()),
        ];
        for (i, line) in lines.iter().enumerate() {
            d.draw_text(line, window.w - 420, 10 + i as i32 * 16, 10, Color::LIME);
        }
    }

    if let Some(alert) = alert {
        draw_alert(&mut d, *window, &alert);
    }
}
