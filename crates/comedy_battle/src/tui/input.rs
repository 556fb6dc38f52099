//! Maps terminal events to game actions.

use battle_tictactoe::Position;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position as ScreenPoint, Rect};

/// What a terminal event asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a mark on this cell.
    Select(Position),
    /// Place a mark under the cursor.
    SelectCursor,
    /// Move the cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Translates `event` into an [`Action`].
///
/// `cells` are the on-screen rectangles of the nine board cells from the
/// last frame, used to hit-test mouse clicks.
pub fn action_for(event: &Event, cells: &[Rect; 9]) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => key_action(key),
        Event::Mouse(mouse) => mouse_action(mouse, cells),
        _ => None,
    }
}

fn key_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('n') | KeyCode::Char('N') => {
            Some(Action::Restart)
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Position::from_index(index).map(Action::Select)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Action::MoveCursor(code))
        }
        _ => None,
    }
}

fn mouse_action(mouse: &MouseEvent, cells: &[Rect; 9]) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    cell_at(cells, mouse.column, mouse.row).map(Action::Select)
}

/// The board cell containing screen coordinate (`column`, `row`).
pub fn cell_at(cells: &[Rect; 9], column: u16, row: u16) -> Option<Position> {
    let point = ScreenPoint::new(column, row);
    cells
        .iter()
        .position(|cell| cell.contains(point))
        .and_then(Position::from_index)
}

/// Moves the cursor one cell with an arrow key, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn grid() -> [Rect; 9] {
        std::array::from_fn(|i| Rect::new((i % 3) as u16 * 10, (i / 3) as u16 * 5, 9, 4))
    }

    #[test]
    fn test_digit_keys_select_cells() {
        let cells = grid();
        assert_eq!(
            action_for(&press(KeyCode::Char('1')), &cells),
            Some(Action::Select(Position::TopLeft))
        );
        assert_eq!(
            action_for(&press(KeyCode::Char('9')), &cells),
            Some(Action::Select(Position::BottomRight))
        );
        assert_eq!(action_for(&press(KeyCode::Char('0')), &cells), None);
    }

    #[test]
    fn test_control_keys() {
        let cells = grid();
        assert_eq!(action_for(&press(KeyCode::Char('q')), &cells), Some(Action::Quit));
        assert_eq!(action_for(&press(KeyCode::Esc), &cells), Some(Action::Quit));
        assert_eq!(action_for(&press(KeyCode::Char('r')), &cells), Some(Action::Restart));
        assert_eq!(action_for(&press(KeyCode::Char('n')), &cells), Some(Action::Restart));
        assert_eq!(action_for(&press(KeyCode::Enter), &cells), Some(Action::SelectCursor));
        assert_eq!(
            action_for(&press(KeyCode::Left), &cells),
            Some(Action::MoveCursor(KeyCode::Left))
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('5'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(action_for(&release, &grid()), None);
    }

    #[test]
    fn test_click_hits_cell() {
        let cells = grid();
        assert_eq!(
            action_for(&click(14, 6), &cells),
            Some(Action::Select(Position::Center))
        );
        assert_eq!(
            action_for(&click(28, 13), &cells),
            Some(Action::Select(Position::BottomRight))
        );
    }

    #[test]
    fn test_click_on_gap_misses() {
        // Column 9 is the gap between the first and second columns.
        assert_eq!(action_for(&click(9, 1), &grid()), None);
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Tab), Position::Center);
    }
}
