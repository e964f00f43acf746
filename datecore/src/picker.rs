//! The month picker widget.
//!
//! Cells are allocated and painted by hand like the other slow computer
//! widgets: white background, dithered selection and hover, a ring around
//! today. Layout is a header row, a weekday row, then one row per week of
//! whatever grid the state derives for the displayed month.

use chrono::NaiveDate;
use egui::{Align2, FontId, Response, Sense, Ui, Vec2, Widget, WidgetInfo, WidgetType};

use crate::grid::{DayCell, DAYS_PER_WEEK};
use crate::locale;
use crate::paint;
use crate::state::CalendarState;
use crate::theme::SlowColors;

/// Month calendar bound to a date the caller owns.
///
/// Each frame the widget first adopts any outside write to `bound` (only
/// when it names a different calendar day than the current selection), then
/// pushes every selection made here back into `bound`. The caller's value
/// and the calendar never disagree for longer than one frame.
pub struct DatePicker<'a> {
    state: &'a mut CalendarState,
    bound: &'a mut NaiveDate,
    cell_size: f32,
}

impl<'a> DatePicker<'a> {
    pub fn new(state: &'a mut CalendarState, bound: &'a mut NaiveDate) -> Self {
        Self { state, bound, cell_size: 36.0 }
    }

    /// Day cell edge length in points. Default is 36.
    pub fn cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }
}

impl<'a> Widget for DatePicker<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let DatePicker { state, bound, cell_size } = self;

        // Someone outside may have written the binding since last frame.
        state.sync_external(*bound);

        let mut selection_made = false;
        let mut hovered: Option<NaiveDate> = None;

        let mut response = ui
            .vertical(|ui| {
                if header(ui, state) {
                    selection_made = true;
                }

                ui.add_space(8.0);
                weekday_row(ui, cell_size);
                ui.add_space(4.0);

                for week in state.days_in_month().chunks(DAYS_PER_WEEK) {
                    ui.horizontal(|ui| {
                        for cell in week {
                            let resp = day_cell(ui, state, cell, cell_size);
                            if resp.hovered() {
                                hovered = Some(cell.date);
                            }
                            if cell.selectable && resp.clicked() {
                                state.select_date(cell.date);
                                selection_made = true;
                            }
                        }
                    });
                }
            })
            .response;

        // One hover write per frame; None clears it once the pointer leaves.
        state.set_hovered(hovered);

        if selection_made {
            *bound = state.selected_date();
            response.mark_changed();
        }

        response
    }
}

/// Month/year header with navigation. Returns true when "today" was clicked.
fn header(ui: &mut Ui, state: &mut CalendarState) -> bool {
    let mut selected_today = false;
    ui.horizontal(|ui| {
        if nav_button(ui, "◀", locale::PREVIOUS_MONTH).clicked() {
            state.navigate_to_previous_month();
        }

        ui.heading(state.month_heading());

        if nav_button(ui, "▶", locale::NEXT_MONTH).clicked() {
            state.navigate_to_next_month();
        }

        ui.add_space(8.0);
        if nav_button(ui, "today", locale::GO_TO_TODAY).clicked() {
            state.select_today();
            selected_today = true;
        }
    });
    selected_today
}

fn nav_button(ui: &mut Ui, glyph: &str, label: &str) -> Response {
    let response = ui.button(glyph).on_hover_text(label);
    response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, label));
    response
}

fn weekday_row(ui: &mut Ui, cell_size: f32) {
    ui.horizontal(|ui| {
        for header in locale::WEEKDAY_HEADERS {
            let (rect, _) =
                ui.allocate_exact_size(Vec2::new(cell_size, 20.0), Sense::hover());
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                header,
                FontId::proportional(12.0),
                SlowColors::BLACK,
            );
        }
    });
}

fn day_cell(ui: &mut Ui, state: &CalendarState, cell: &DayCell, cell_size: f32) -> Response {
    let sense = if cell.selectable { Sense::click() } else { Sense::hover() };
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(cell_size), sense);

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let selected = state.is_selected(cell.date);

        if selected {
            paint::selection_overlay(painter, rect);
        } else if cell.selectable && response.hovered() {
            paint::hover_overlay(painter, rect);
        }

        let text_color = if selected { SlowColors::WHITE } else { SlowColors::BLACK };
        let font = if cell.is_today {
            FontId::proportional(14.0)
        } else if cell.in_displayed_month {
            FontId::proportional(13.0)
        } else {
            FontId::proportional(11.0)
        };

        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            cell.day_number.to_string(),
            font,
            text_color,
        );

        if cell.is_today {
            paint::today_ring(painter, rect.center(), cell_size * 0.35, text_color);
        }
    }

    let widget_type = if cell.selectable { WidgetType::Button } else { WidgetType::Label };
    response.widget_info(|| {
        WidgetInfo::labeled(widget_type, state.accessibility_label(cell.date))
    });
    response
}
