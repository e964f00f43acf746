//! Slow Computer theme and window chrome.
//!
//! Pure black and white. No grays. 1px black outlines. Fonts stay egui's
//! defaults; the panel renders them fine at these sizes.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Ui, Visuals};

/// Only two colors exist on this machine.
pub struct SlowColors;

impl SlowColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Theme configuration for slow computer apps
pub struct SlowTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for SlowTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

impl SlowTheme {
    /// Apply the slow computer theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        // --- visuals: pure black & white ---
        let mut visuals = Visuals::light();

        visuals.window_fill = SlowColors::WHITE;
        visuals.panel_fill = SlowColors::WHITE;
        visuals.faint_bg_color = SlowColors::WHITE;
        visuals.extreme_bg_color = SlowColors::WHITE;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;

        visuals.window_stroke = Stroke::new(1.0, SlowColors::BLACK);

        let bw = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = SlowColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, SlowColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, SlowColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        bw(&mut visuals.widgets.noninteractive);
        bw(&mut visuals.widgets.inactive);
        bw(&mut visuals.widgets.hovered);
        bw(&mut visuals.widgets.active);
        bw(&mut visuals.widgets.open);

        // Disable smooth shadows (we draw dithered shadows manually)
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        // selection: grey background for visible text highlighting
        visuals.selection.bg_fill = Color32::from_rgb(160, 160, 160);
        visuals.selection.stroke = Stroke::new(1.0, SlowColors::BLACK);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(
    ui: &mut Ui,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(SlowColors::WHITE)
        .stroke(Stroke::new(1.0, SlowColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner)
}

/// Status bar: white bg, 1px black top border
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(SlowColors::WHITE)
        .stroke(Stroke::new(1.0, SlowColors::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}

/// Action returned by window control buttons
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowAction {
    None,
    Close,
    Minimize,
}

enum ControlGlyph {
    Cross,
    Dash,
}

/// Draw close and minimize buttons at the left of the menu bar.
/// Call this at the start of your `menu_bar` closure.
///
/// Returns the action the user clicked (Close, Minimize, or None).
pub fn window_control_buttons(ui: &mut Ui) -> WindowAction {
    let mut action = WindowAction::None;

    if control_button(ui, ControlGlyph::Cross).clicked() {
        action = WindowAction::Close;
    }
    ui.add_space(2.0);
    if control_button(ui, ControlGlyph::Dash).clicked() {
        action = WindowAction::Minimize;
    }
    ui.add_space(4.0);

    // Thin vertical separator after the buttons
    let (sep_rect, _) = ui.allocate_exact_size(egui::vec2(4.0, 14.0), egui::Sense::hover());
    if ui.is_rect_visible(sep_rect) {
        ui.painter().vline(
            sep_rect.center().x,
            sep_rect.y_range(),
            Stroke::new(1.0, SlowColors::BLACK),
        );
    }
    ui.add_space(4.0);

    action
}

fn control_button(ui: &mut Ui, glyph: ControlGlyph) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::click());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, SlowColors::WHITE);
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, SlowColors::BLACK));
        if response.hovered() {
            crate::paint::hover_overlay(painter, rect);
        }

        let m = 3.0;
        let stroke = Stroke::new(1.0, SlowColors::BLACK);
        match glyph {
            ControlGlyph::Cross => {
                painter.line_segment(
                    [rect.left_top() + egui::vec2(m, m), rect.right_bottom() - egui::vec2(m, m)],
                    stroke,
                );
                painter.line_segment(
                    [rect.right_top() + egui::vec2(-m, m), rect.left_bottom() + egui::vec2(m, -m)],
                    stroke,
                );
            }
            ControlGlyph::Dash => {
                painter.line_segment(
                    [
                        egui::pos2(rect.left() + m, rect.center().y),
                        egui::pos2(rect.right() - m, rect.center().y),
                    ],
                    stroke,
                );
            }
        }
    }
    response
}

/// Consume problematic key events to prevent unwanted egui behaviors.
/// Call this at the start of your app's update() function.
/// - Tab: prevents menu focus navigation and focus cycling
/// - Cmd+/Cmd-: prevents zoom scaling
///
/// Note: egui processes Tab in begin_frame() to set focus_direction, which
/// runs before update(). Stripping the event is not enough, so the focus
/// that existed before the Tab press is re-requested as well.
pub fn consume_special_keys(ctx: &egui::Context) {
    let tab_pressed = ctx.input(|i| {
        i.events.iter().any(|e| {
            matches!(e, egui::Event::Key { key: egui::Key::Tab, pressed: true, .. })
        })
    });
    let focused_before = if tab_pressed { ctx.memory(|mem| mem.focused()) } else { None };

    ctx.input_mut(|i| {
        i.events.retain(|event| match event {
            egui::Event::Key { key: egui::Key::Tab, .. } => false,
            egui::Event::Text(text) if text.contains('\t') => false,
            egui::Event::Key { key, modifiers, .. } => {
                !(modifiers.command
                    && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals))
            }
            _ => true,
        });
    });

    if tab_pressed {
        match focused_before {
            Some(id) => ctx.memory_mut(|mem| mem.request_focus(id)),
            None => {
                if let Some(id) = ctx.memory(|mem| mem.focused()) {
                    ctx.memory_mut(|mem| mem.surrender_focus(id));
                }
            }
        }
    }
}
