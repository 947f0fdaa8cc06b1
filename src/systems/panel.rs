//! Control panel layout and interaction.
//!
//! The panel is an immediate-mode widget set drawn by the renderer and driven
//! by [`panel_system`] from the [`InputState`] snapshot. Both share
//! [`PanelLayout`], so hit testing always matches what is on screen.
//!
//! On wide windows the panel is always shown. On compact windows a menu
//! button opens and closes it; an accepted advance closes it again.
//!
//! While an [`Alert`] is shown the panel only accepts the dismiss action.

use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::{Rectangle, Vector2};

use crate::events::advance::AdvanceEvent;
use crate::events::opacity::ToggleOpacityEvent;
use crate::events::panel::TogglePanelEvent;
use crate::resources::alert::Alert;
use crate::resources::controlpanel::{ControlPanel, Field};
use crate::resources::input::InputState;
use crate::resources::windowsize::WindowSize;

const MARGIN: f32 = 10.0;
const PANEL_WIDTH: f32 = 280.0;
const ROW_HEIGHT: f32 = 36.0;
const ROW_GAP: f32 = 8.0;
const MENU_BUTTON_SIZE: f32 = 40.0;
/// Height reserved for the three code echo lines.
pub const ECHO_HEIGHT: f32 = 66.0;

pub fn contains(rect: &Rectangle, p: Vector2) -> bool {
    p.x >= rect.x && p.x <= rect.x + rect.width && p.y >= rect.y && p.y <= rect.y + rect.height
}

/// Screen rectangles of every panel widget.
#[derive(Debug, Clone, Copy)]
pub struct PanelLayout {
    /// Whether the panel body is on screen.
    pub visible: bool,
    /// Menu button, compact windows only.
    pub menu_toggle: Option<Rectangle>,
    pub panel: Rectangle,
    pub first: Rectangle,
    pub second: Rectangle,
    pub plus: Rectangle,
    pub minus: Rectangle,
    pub advance: Rectangle,
    pub opacity: Rectangle,
    /// Top-left corner of the code echo.
    pub echo: Vector2,
}

impl PanelLayout {
    pub fn compute(window: WindowSize, open: bool) -> Self {
        let compact = window.is_compact();
        let (menu_toggle, top) = if compact {
            (
                Some(Rectangle::new(
                    MARGIN,
                    MARGIN,
                    MENU_BUTTON_SIZE,
                    MENU_BUTTON_SIZE,
                )),
                MARGIN * 2.0 + MENU_BUTTON_SIZE,
            )
        } else {
            (None, MARGIN)
        };
        let width = PANEL_WIDTH.min((window.w as f32 - MARGIN * 2.0).max(MENU_BUTTON_SIZE));
        let inner_x = MARGIN * 2.0;
        let inner_w = width - MARGIN * 2.0;
        let row = |i: f32| top + MARGIN + i * (ROW_HEIGHT + ROW_GAP);
        let half_w = (inner_w - ROW_GAP) / 2.0;

        let first = Rectangle::new(inner_x, row(0.0), inner_w, ROW_HEIGHT);
        let second = Rectangle::new(inner_x, row(1.0), inner_w, ROW_HEIGHT);
        let plus = Rectangle::new(inner_x, row(2.0), half_w, ROW_HEIGHT);
        let minus = Rectangle::new(inner_x + half_w + ROW_GAP, row(2.0), half_w, ROW_HEIGHT);
        let advance = Rectangle::new(inner_x, row(3.0), inner_w, ROW_HEIGHT);
        let opacity = Rectangle::new(inner_x, row(4.0), inner_w, ROW_HEIGHT);
        let echo = Vector2::new(inner_x, row(5.0));
        let panel = Rectangle::new(
            MARGIN,
            top,
            width,
            echo.y + ECHO_HEIGHT + MARGIN - top,
        );

        PanelLayout {
            visible: !compact || open,
            menu_toggle,
            panel,
            first,
            second,
            plus,
            minus,
            advance,
            opacity,
            echo,
        }
    }

    /// True if `p` is over any visible panel widget or the panel background.
    pub fn captures(&self, p: Vector2) -> bool {
        self.menu_toggle.is_some_and(|r| contains(&r, p)) || (self.visible && contains(&self.panel, p))
    }
}

/// Apply pointer and keyboard input to the control panel.
pub fn panel_system(
    mut input: ResMut<InputState>,
    window: Res<WindowSize>,
    mut panel: ResMut<ControlPanel>,
    alert: Option<Res<Alert>>,
    mut commands: Commands,
) {
    if alert.is_some() {
        if input.pressed || input.enter {
            debug!("Alert dismissed");
            commands.remove_resource::<Alert>();
            // The dismissing click must not reach the boxes.
            input.consume_press();
        }
        return;
    }

    let layout = PanelLayout::compute(*window, panel.open);
    let p = input.pointer;
    let mut advance = false;

    if input.pressed {
        if layout.menu_toggle.is_some_and(|r| contains(&r, p)) {
            commands.trigger(TogglePanelEvent {});
            return;
        }
        if layout.visible {
            if contains(&layout.first, p) {
                panel.focused = Some(Field::First);
            } else if contains(&layout.second, p) {
                panel.focused = Some(Field::Second);
            } else if contains(&layout.plus, p) {
                panel.operator = "+".to_string();
            } else if contains(&layout.minus, p) {
                panel.operator = "-".to_string();
            } else if contains(&layout.advance, p) {
                advance = true;
            } else if contains(&layout.opacity, p) {
                commands.trigger(ToggleOpacityEvent {});
            }
        }
    }

    if !layout.visible {
        return;
    }
    for &c in &input.typed {
        panel.type_char(c);
    }
    if input.backspace {
        panel.backspace();
    }
    if input.tab {
        panel.cycle_focus();
    }
    advance |= input.enter;
    // One advance per frame even if the button and Enter arrive together.
    if advance {
        commands.trigger(AdvanceEvent {});
    }
}
