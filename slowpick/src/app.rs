//! slowPick - date picker application
//!
//! The app owns the selected date; the calendar mirrors it. The set-date
//! field under the grid writes that value from the outside, the same way
//! any hosting form would.

use chrono::NaiveDate;
use datecore::entry;
use datecore::grid;
use datecore::theme::{menu_bar, status_bar, window_control_buttons, SlowColors, WindowAction};
use datecore::{CalendarState, DatePicker};
use egui::{Context, Key};

pub struct SlowPickApp {
    state: CalendarState,
    /// The date value the app owns; the picker is bound to it
    selected: NaiveDate,
    /// Text buffer for the set-date field
    date_entry: String,
    /// Last rejected entry, shown in the status bar until the next apply
    entry_error: Option<String>,
    /// Show about dialog
    show_about: bool,
}

impl SlowPickApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let today = grid::current_day();
        let mut state = CalendarState::new(today);

        // Repaint whenever the calendar changes, whatever triggered it.
        let ctx = cc.egui_ctx.clone();
        state.on_change(move |_| ctx.request_repaint());

        Self {
            state,
            selected: today,
            date_entry: entry::format_entry(today),
            entry_error: None,
            show_about: false,
        }
    }

    fn go_today(&mut self) {
        self.state.select_today();
        self.selected = self.state.selected_date();
        self.date_entry = entry::format_entry(self.selected);
        self.entry_error = None;
    }

    fn apply_entry(&mut self) {
        match entry::parse_entry(&self.date_entry) {
            Ok(date) => {
                // Outside write: the picker adopts it on its next frame.
                self.selected = date;
                self.date_entry = entry::format_entry(date);
                self.entry_error = None;
            }
            Err(err) => self.entry_error = Some(err.to_string()),
        }
    }

    fn copy_date(&self, ctx: &Context) {
        ctx.output_mut(|o| o.copied_text = entry::format_entry(self.selected));
    }

    fn handle_keys(&mut self, ctx: &Context) {
        datecore::theme::consume_special_keys(ctx);

        // Arrows belong to the entry field while it has focus.
        let typing = ctx.memory(|mem| mem.focused().is_some());
        let (prev, next, today) = ctx.input(|i| {
            (
                !typing && i.key_pressed(Key::ArrowLeft),
                !typing && i.key_pressed(Key::ArrowRight),
                i.modifiers.command && i.key_pressed(Key::T),
            )
        });

        // State listeners repaint from inside notify; mutations stay
        // outside the input lock.
        if prev {
            self.state.navigate_to_previous_month();
        }
        if next {
            self.state.navigate_to_next_month();
        }
        if today {
            self.go_today();
        }
    }

    fn status_line(&self) -> String {
        match &self.entry_error {
            Some(err) => format!("error: {}", err),
            None => format!(
                "selected {}  |  viewing {}",
                entry::format_entry(self.selected),
                self.state.month_heading()
            ),
        }
    }
}

impl eframe::App for SlowPickApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        // Menu bar
        let mut win_action = WindowAction::None;
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                win_action = window_control_buttons(ui);
                ui.menu_button("file", |ui| {
                    if ui.button("copy date").clicked() {
                        self.copy_date(ctx);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        ui.close_menu();
                    }
                });
                ui.menu_button("view", |ui| {
                    if ui.button("today  ⌘T").clicked() {
                        self.go_today();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("previous month  ←").clicked() {
                        self.state.navigate_to_previous_month();
                        ui.close_menu();
                    }
                    if ui.button("next month  →").clicked() {
                        self.state.navigate_to_next_month();
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
        match win_action {
            WindowAction::Close => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            WindowAction::Minimize => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
            }
            WindowAction::None => {}
        }

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            status_bar(ui, &self.status_line());
        });

        // Main content
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(SlowColors::WHITE).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                let resp = ui.add(DatePicker::new(&mut self.state, &mut self.selected));
                if resp.changed() {
                    self.date_entry = entry::format_entry(self.selected);
                    self.entry_error = None;
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(4.0);

                ui.label(datecore::locale::day_label(self.selected));

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.label("set date:");
                    let field = ui.add(
                        egui::TextEdit::singleline(&mut self.date_entry)
                            .desired_width(100.0)
                            .font(egui::TextStyle::Monospace),
                    );
                    let submitted =
                        field.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                    if ui.button("set").clicked() || submitted {
                        self.apply_entry();
                    }
                });
            });

        // About dialog
        if self.show_about {
            let resp = egui::Window::new("about slowPick")
                .collapsible(false)
                .resizable(false)
                .default_width(280.0)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("slowPick");
                        ui.label("version 0.1.0");
                        ui.add_space(8.0);
                        ui.label("date picker for slowOS");
                    });
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(4.0);
                    ui.label("controls:");
                    ui.label("  click a day to select it");
                    ui.label("  ← →: previous/next month");
                    ui.label("  ⌘T: go to today");
                    ui.label("  set date: type YYYY-MM-DD");
                    ui.add_space(4.0);
                    ui.label("frameworks:");
                    ui.label("  egui/eframe (MIT), chrono (MIT)");
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("ok").clicked() {
                            self.show_about = false;
                        }
                    });
                });
            if let Some(r) = &resp {
                datecore::paint::window_shadow(ctx, r.response.rect);
            }
        }
    }
}
