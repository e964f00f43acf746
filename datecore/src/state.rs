//! Selection state for one calendar widget.
//!
//! `CalendarState` is the single stateful piece of the engine: it owns the
//! selected date, the displayed month anchor and the hovered date, derives
//! the grid fresh on every read, and tells subscribers when something changed
//! so the UI layer can schedule a paint.
//!
//! The hosting shell owns the real date value. The protocol between the two:
//! call [`CalendarState::sync_external`] with the bound value before reading
//! state each frame; it adopts the value only when it differs by day. After
//! every [`CalendarState::select_date`] or [`CalendarState::select_today`]
//! call, write [`CalendarState::selected_date`] back to the binding
//! unconditionally. That asymmetry is what keeps the two owners from
//! ping-ponging updates forever.

use chrono::NaiveDate;

use crate::grid::{self, DayCell, PaddingPolicy};
use crate::locale;

/// What changed in a [`CalendarState`] mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarEvent {
    /// The selected date was set (select calls notify even on re-selection).
    SelectionChanged,
    /// The displayed month moved without the selection changing.
    MonthChanged,
    /// The hovered date changed.
    HoverChanged,
}

type Listener = Box<dyn FnMut(CalendarEvent)>;

/// Mutable session state behind one visible calendar.
pub struct CalendarState {
    selected: NaiveDate,
    /// Month anchor; only its year/month matter.
    displayed: NaiveDate,
    hovered: Option<NaiveDate>,
    padding: PaddingPolicy,
    listeners: Vec<Listener>,
}

impl CalendarState {
    /// Seed selection and displayed month from the binding's current value.
    pub fn new(initial: NaiveDate) -> Self {
        Self {
            selected: initial,
            displayed: initial,
            hovered: None,
            padding: PaddingPolicy::default(),
            listeners: Vec::new(),
        }
    }

    /// Choose what out-of-month cells do (default: selectable).
    pub fn with_padding(mut self, padding: PaddingPolicy) -> Self {
        self.padding = padding;
        self
    }

    /// Register a change listener. Listeners run synchronously, after the
    /// fields have been updated, once per mutating call.
    pub fn on_change(&mut self, listener: impl FnMut(CalendarEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, event: CalendarEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected
    }

    pub fn displayed_month(&self) -> NaiveDate {
        self.displayed
    }

    pub fn hovered_date(&self) -> Option<NaiveDate> {
        self.hovered
    }

    pub fn padding_policy(&self) -> PaddingPolicy {
        self.padding
    }

    /// Show the next month. Selection and hover stay put.
    pub fn navigate_to_next_month(&mut self) {
        self.displayed = grid::next_month(self.displayed);
        self.notify(CalendarEvent::MonthChanged);
    }

    /// Show the previous month. Selection and hover stay put.
    pub fn navigate_to_previous_month(&mut self) {
        self.displayed = grid::previous_month(self.displayed);
        self.notify(CalendarEvent::MonthChanged);
    }

    /// Select a date. If it lies outside the displayed month, the view
    /// follows it there. Notifies on every call, and the caller must push
    /// [`CalendarState::selected_date`] to the external binding after every
    /// call, even when the same day was re-selected.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected = date;
        if !grid::same_month(date, self.displayed) {
            self.displayed = date;
        }
        self.notify(CalendarEvent::SelectionChanged);
    }

    /// Jump selection and view to the current local day.
    pub fn select_today(&mut self) {
        let today = grid::current_day();
        self.displayed = today;
        self.select_date(today);
    }

    /// Track the cell under the pointer (`None` once the pointer leaves the
    /// grid). Notifies only on an actual change so per-frame tracking stays
    /// quiet.
    pub fn set_hovered(&mut self, date: Option<NaiveDate>) {
        if self.hovered != date {
            self.hovered = date;
            self.notify(CalendarEvent::HoverChanged);
        }
    }

    pub fn clear_hovered(&mut self) {
        self.set_hovered(None);
    }

    /// Adopt a value someone else wrote to the external binding.
    ///
    /// Applied only when it differs from the current selection by day
    /// granularity, so echoes of our own pushes are no-ops. Returns whether
    /// the value was adopted.
    pub fn sync_external(&mut self, bound: NaiveDate) -> bool {
        if grid::same_day(bound, self.selected) {
            return false;
        }
        self.select_date(bound);
        true
    }

    pub fn is_today(&self, date: NaiveDate) -> bool {
        grid::same_day(date, grid::current_day())
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        grid::same_day(date, self.selected)
    }

    /// Whether the date falls in the displayed month.
    pub fn is_current_month(&self, date: NaiveDate) -> bool {
        grid::same_month(date, self.displayed)
    }

    pub fn is_hovered(&self, date: NaiveDate) -> bool {
        self.hovered.map_or(false, |h| grid::same_day(h, date))
    }

    /// The grid for the displayed month. Recomputed on every call so it can
    /// never go stale; cells are plain values and cheap to rebuild.
    pub fn days_in_month(&self) -> Vec<DayCell> {
        grid::month_grid(self.displayed, grid::current_day(), self.padding)
    }

    /// Heading for the displayed month, e.g. "February 2025".
    pub fn month_heading(&self) -> String {
        locale::month_year(self.displayed)
    }

    /// Spoken label for a day: the full date, then markers for today,
    /// selected, and outside-the-displayed-month. Marker order is fixed;
    /// consumers snapshot these strings.
    pub fn accessibility_label(&self, date: NaiveDate) -> String {
        let mut label = locale::day_label(date);
        if self.is_today(date) {
            label.push_str(locale::MARK_TODAY);
        }
        if self.is_selected(date) {
            label.push_str(locale::MARK_SELECTED);
        }
        if !self.is_current_month(date) {
            label.push_str(locale::MARK_OUTSIDE_MONTH);
        }
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn record(state: &mut CalendarState) -> Rc<RefCell<Vec<CalendarEvent>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        state.on_change(move |event| sink.borrow_mut().push(event));
        log
    }

    #[test]
    fn test_selection_follows_into_other_months() {
        let mut state = CalendarState::new(d(2025, 2, 1));
        state.select_date(d(2025, 3, 15));
        assert_eq!(state.selected_date(), d(2025, 3, 15));
        assert!(grid::same_month(state.displayed_month(), d(2025, 3, 1)));
    }

    #[test]
    fn test_selection_inside_displayed_month_keeps_anchor() {
        let mut state = CalendarState::new(d(2025, 2, 1));
        state.select_date(d(2025, 2, 20));
        assert_eq!(state.displayed_month(), d(2025, 2, 1));
    }

    #[test]
    fn test_navigation_leaves_selection_and_hover_alone() {
        let mut state = CalendarState::new(d(2025, 2, 14));
        state.set_hovered(Some(d(2025, 2, 20)));
        state.navigate_to_next_month();
        assert!(grid::same_month(state.displayed_month(), d(2025, 3, 1)));
        assert_eq!(state.selected_date(), d(2025, 2, 14));
        assert_eq!(state.hovered_date(), Some(d(2025, 2, 20)));
        state.navigate_to_previous_month();
        state.navigate_to_previous_month();
        assert!(grid::same_month(state.displayed_month(), d(2025, 1, 1)));
    }

    #[test]
    fn test_select_today_lands_on_today() {
        let mut state = CalendarState::new(d(1999, 1, 1));
        state.select_today();
        let today = grid::current_day();
        assert_eq!(state.selected_date(), today);
        assert!(grid::same_month(state.displayed_month(), today));
    }

    #[test]
    fn test_derived_grid_tracks_displayed_month() {
        let mut state = CalendarState::new(d(2025, 2, 14));
        assert_eq!(state.days_in_month().len(), 35);
        // March 2025 starts on a Saturday and has 31 days: six rows.
        state.navigate_to_next_month();
        assert_eq!(state.days_in_month().len(), 42);
        assert_eq!(state.month_heading(), "March 2025");
    }

    #[test]
    fn test_padding_policy_reaches_the_grid() {
        let state = CalendarState::new(d(2025, 2, 14)).with_padding(PaddingPolicy::Inert);
        let cells = state.days_in_month();
        assert!(cells
            .iter()
            .filter(|c| !c.in_displayed_month)
            .all(|c| !c.selectable));
        assert_eq!(state.padding_policy(), PaddingPolicy::Inert);
    }

    #[test]
    fn test_hover_set_and_clear() {
        let mut state = CalendarState::new(d(2025, 2, 14));
        state.set_hovered(Some(d(2025, 2, 3)));
        assert!(state.is_hovered(d(2025, 2, 3)));
        assert!(!state.is_hovered(d(2025, 2, 4)));
        state.clear_hovered();
        assert_eq!(state.hovered_date(), None);
    }

    #[test]
    fn test_hover_may_leave_the_displayed_month() {
        let mut state = CalendarState::new(d(2025, 2, 14));
        state.set_hovered(Some(d(2025, 3, 1)));
        assert!(state.is_hovered(d(2025, 3, 1)));
        assert!(grid::same_month(state.displayed_month(), d(2025, 2, 1)));
    }

    #[test]
    fn test_external_sync_applies_only_on_day_difference() {
        let mut state = CalendarState::new(d(2025, 2, 14));
        let log = record(&mut state);
        assert!(!state.sync_external(d(2025, 2, 14)));
        assert!(log.borrow().is_empty());
        assert!(state.sync_external(d(2025, 7, 4)));
        assert_eq!(state.selected_date(), d(2025, 7, 4));
        assert!(grid::same_month(state.displayed_month(), d(2025, 7, 1)));
        assert_eq!(*log.borrow(), vec![CalendarEvent::SelectionChanged]);
    }

    #[test]
    fn test_every_select_notifies_even_reselection() {
        let mut state = CalendarState::new(d(2025, 2, 14));
        let log = record(&mut state);
        state.select_date(d(2025, 2, 14));
        state.select_date(d(2025, 2, 14));
        assert_eq!(
            *log.borrow(),
            vec![
                CalendarEvent::SelectionChanged,
                CalendarEvent::SelectionChanged,
            ]
        );
    }

    #[test]
    fn test_notification_kinds_per_mutator() {
        let mut state = CalendarState::new(d(2025, 2, 14));
        let log = record(&mut state);
        state.navigate_to_next_month();
        state.set_hovered(Some(d(2025, 3, 3)));
        state.set_hovered(Some(d(2025, 3, 3)));
        state.select_date(d(2025, 3, 3));
        assert_eq!(
            *log.borrow(),
            vec![
                CalendarEvent::MonthChanged,
                CalendarEvent::HoverChanged,
                CalendarEvent::SelectionChanged,
            ]
        );
    }

    #[test]
    fn test_accessibility_label_marker_order() {
        // A selected today viewed from the following month carries all three
        // markers, in the fixed order.
        let today = grid::current_day();
        let mut state = CalendarState::new(today);
        state.navigate_to_next_month();
        let label = state.accessibility_label(today);
        let expected = format!(
            "{}{}{}{}",
            locale::day_label(today),
            locale::MARK_TODAY,
            locale::MARK_SELECTED,
            locale::MARK_OUTSIDE_MONTH
        );
        assert_eq!(label, expected);
    }

    #[test]
    fn test_accessibility_label_for_plain_and_selected_days() {
        let state = CalendarState::new(d(2025, 2, 14));
        assert_eq!(
            state.accessibility_label(d(2025, 2, 1)),
            "Saturday, February 1, 2025"
        );
        let selected = state.accessibility_label(d(2025, 2, 14));
        assert!(selected.ends_with(locale::MARK_SELECTED));
        let outside = state.accessibility_label(d(2025, 3, 1));
        assert!(outside.ends_with(locale::MARK_OUTSIDE_MONTH));
    }
}
