use macroquad::prelude::*;

/// What a control button does when pressed
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonAction {
    StartStop,
    Reset,
    ToggleLimit,
    ToggleLoopSides,
}

/// Labelled rectangle with hover feedback
#[derive(Clone, Debug)]
pub struct Button {
    rect: Rect,
    label: String,
    pub action: ButtonAction,
}

impl Button {
    const COLOR: Color = Color::new(0.27, 0.51, 0.71, 1.0);
    const HOVER_COLOR: Color = Color::new(0.39, 0.58, 0.93, 1.0);

    pub fn new(rect: Rect, label: impl Into<String>, action: ButtonAction) -> Self {
        Self {
            rect,
            label: label.into(),
            action,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) {
            Self::HOVER_COLOR
        } else {
            Self::COLOR
        };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, color);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            x + (w - size.width) / 2.0,
            y + (h + size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Pressed this frame with the left button
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
