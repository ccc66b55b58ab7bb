// File: src/tui/handlers.rs
// Handles keyboard and mouse input for the TUI.
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

fn open_selected(state: &mut AppState) -> Option<Action> {
    let (label, link) = match state.get_selected_marker() {
        Some(m) => (m.label.clone(), m.link.clone()),
        None => {
            state.message = "No event selected.".to_string();
            return None;
        }
    };
    match link {
        Some(link) => Some(Action::OpenLink(link)),
        None => {
            state.message = format!("{} has no source link.", label);
            None
        }
    }
}

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char('?') => state.show_full_help = !state.show_full_help,
        KeyCode::Char('r') => return Some(Action::Reload),

        KeyCode::Char('j') | KeyCode::Down => state.next_row(),
        KeyCode::Char('k') | KeyCode::Up => state.previous_row(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => state.next_marker(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => state.previous_marker(),

        KeyCode::Char(']') | KeyCode::PageDown => state.next_day(),
        KeyCode::Char('[') | KeyCode::PageUp => state.previous_day(),

        KeyCode::Enter | KeyCode::Char('o') => return open_selected(state),
        _ => {}
    }
    None
}

pub fn handle_mouse_event(mouse: MouseEvent, state: &mut AppState) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::ScrollDown => state.next_row(),
        MouseEventKind::ScrollUp => state.previous_row(),
        MouseEventKind::Down(MouseButton::Left) => {
            if state.select_at(mouse.column, mouse.row) {
                return open_selected(state);
            }
        }
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventRecord, PriorityTable};
    use crate::store::EventStore;
    use crate::timeline::TimelineAxis;
    use chrono::{NaiveDate, NaiveTime};

    fn state() -> AppState {
        let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let mut store = EventStore::new(PriorityTable::standard());
        store.insert(vec![
            EventRecord::new("Quiz", "QC")
                .with_date(day)
                .with_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap())
                .with_link("https://qc.example.org"),
            EventRecord::new("Finals", "QC")
                .with_date(day)
                .with_time(NaiveTime::from_hms_opt(18, 0, 0).unwrap()),
        ]);
        AppState::new(store, TimelineAxis::default(), None)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_opens_link_of_selected_marker() {
        let mut s = state();
        assert_eq!(
            handle_key_event(press(KeyCode::Enter), &mut s),
            Some(Action::OpenLink("https://qc.example.org".to_string()))
        );
    }

    #[test]
    fn marker_without_link_reports_instead() {
        let mut s = state();
        handle_key_event(press(KeyCode::Tab), &mut s);
        assert_eq!(handle_key_event(press(KeyCode::Char('o')), &mut s), None);
        assert_eq!(s.message, "Event 2 has no source link.");
    }

    #[test]
    fn quit_keys() {
        let mut s = state();
        assert_eq!(handle_key_event(press(KeyCode::Char('q')), &mut s), Some(Action::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &mut s), Some(Action::Quit));
    }
}
