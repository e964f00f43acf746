//! Dithered overlays for e-ink style highlighting.
//!
//! Black boxes would hide the content under a selection, so highlights are
//! checkerboard dithers the panel can render crisply. Dots are batched into
//! one shape list per overlay instead of issued as individual fills.

use egui::{Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::theme::SlowColors;

/// Checkerboard dither over a rectangle. `step` is the dot pitch in points:
/// 1.0 reads as a 50% tone, 2.0 as a light wash.
pub fn dither_fill(painter: &Painter, rect: Rect, step: f32) {
    let step = step.max(1.0);
    let mut dots = Vec::new();
    let mut row = 0u32;
    let mut y = rect.min.y;
    while y < rect.max.y {
        let mut x = rect.min.x + if row % 2 == 0 { 0.0 } else { step };
        while x < rect.max.x {
            let dot = Rect::from_min_size(Pos2::new(x, y), Vec2::splat(1.0)).intersect(rect);
            dots.push(Shape::rect_filled(dot, 0.0, SlowColors::BLACK));
            x += step * 2.0;
        }
        y += step;
        row += 1;
    }
    painter.extend(dots);
}

/// Selection highlight: dense checkerboard, content stays legible in white.
pub fn selection_overlay(painter: &Painter, rect: Rect) {
    dither_fill(painter, rect, 1.0);
}

/// Hover highlight: sparse checkerboard.
pub fn hover_overlay(painter: &Painter, rect: Rect) {
    dither_fill(painter, rect, 2.0);
}

/// Ring marking today's cell.
pub fn today_ring(painter: &Painter, center: Pos2, radius: f32, color: egui::Color32) {
    painter.circle_stroke(center, radius, Stroke::new(1.5, color));
}

/// Dithered drop shadow along a dialog's right and bottom edges. Call with
/// the dialog's rect after showing it; the shadow lands behind the window.
pub fn window_shadow(ctx: &egui::Context, rect: Rect) {
    let painter = ctx.layer_painter(egui::LayerId::background());
    let offset = 4.0;
    let right = Rect::from_min_max(
        Pos2::new(rect.max.x, rect.min.y + offset),
        Pos2::new(rect.max.x + offset, rect.max.y + offset),
    );
    let bottom = Rect::from_min_max(
        Pos2::new(rect.min.x + offset, rect.max.y),
        Pos2::new(rect.max.x, rect.max.y + offset),
    );
    dither_fill(&painter, right, 1.0);
    dither_fill(&painter, bottom, 1.0);
}
