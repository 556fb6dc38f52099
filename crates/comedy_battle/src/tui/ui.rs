//! Stateless rendering of the app.

use super::App;
use battle_tictactoe::{Mark, Position, Square};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const GAP: u16 = 1;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + GAP * 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + GAP * 2;

/// Renders the whole screen and returns the cell rectangles it used.
pub fn draw(frame: &mut Frame, app: &App) -> [Rect; 9] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(app.locale().title())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let cells = board_cells(chunks[1]);
    draw_board(frame, app, &cells);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(app.locale().help())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    cells
}

/// The nine cell rectangles of a board centered in `area`, indexed 0-8.
///
/// Rendering and mouse hit-testing both use this, so a click always lands
/// on the cell drawn under it.
pub fn board_cells(area: Rect) -> [Rect; 9] {
    let board = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    // On a cramped terminal the cells shrink; they never overlap.
    let (cell_width, gap_x) = split_span(board.width);
    let (cell_height, gap_y) = split_span(board.height);
    std::array::from_fn(|index| {
        let row = (index / 3) as u16;
        let col = (index % 3) as u16;
        Rect::new(
            board.x + col * (cell_width + gap_x),
            board.y + row * (cell_height + gap_y),
            cell_width,
            cell_height,
        )
    })
}

/// Splits `span` into three equal cells and two gaps, dropping the gaps
/// when there is no room for them.
fn split_span(span: u16) -> (u16, u16) {
    let gap = if span >= 3 + GAP * 2 { GAP } else { 0 };
    ((span - gap * 2) / 3, gap)
}

fn draw_board(frame: &mut Frame, app: &App, cells: &[Rect; 9]) {
    let outcome = app.state().outcome();
    let winning = outcome.winning_line();
    let show_cursor = app.input_enabled();

    for pos in Position::ALL {
        let in_winning_line = winning.is_some_and(|line| line.contains(pos));
        let under_cursor = show_cursor && pos == app.cursor();
        draw_cell(frame, app, cells[pos.to_index()], pos, in_winning_line, under_cursor);
    }
}

fn draw_cell(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    pos: Position,
    in_winning_line: bool,
    under_cursor: bool,
) {
    let label = (pos.to_index() + 1).to_string();
    let (symbol, mut style) = match app.state().board().get(pos) {
        Square::Empty => (label, Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::Human) => (
            app.marks().human.clone(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::Computer) => (
            app.marks().computer.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let border_style = if under_cursor {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if in_winning_line {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if in_winning_line {
        style = style.bg(Color::Green).fg(Color::Black);
    }

    let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(cell, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Marks;
    use crate::status::{Locale, StatusKey};
    use battle_tictactoe::{MediumPolicy, ScriptedRandom};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn app() -> App {
        App::new(
            MediumPolicy::default(),
            Box::new(ScriptedRandom::always_smart()),
            Locale::English,
            Marks::default(),
        )
    }

    fn render(app: &App) -> (Buffer, [Rect; 9]) {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let mut cells = [Rect::default(); 9];
        terminal
            .draw(|frame| {
                cells = draw(frame, app);
            })
            .unwrap();
        (terminal.backend().buffer().clone(), cells)
    }

    fn text(buffer: &Buffer, area: Rect) -> String {
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_board_cells_are_disjoint_and_ordered() {
        let cells = board_cells(Rect::new(0, 0, 60, 20));
        for (i, a) in cells.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            assert_eq!(a.height, CELL_HEIGHT);
            for b in &cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
        assert!(cells[0].x < cells[1].x && cells[1].x < cells[2].x);
        assert!(cells[0].y < cells[3].y && cells[3].y < cells[6].y);
    }

    #[test]
    fn test_board_cells_stay_inside_small_area() {
        let area = Rect::new(0, 0, 10, 5);
        let cells = board_cells(area);
        for (i, a) in cells.iter().enumerate() {
            assert!(area.union(*a) == area);
            for b in &cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_clicks_on_cramped_board_hit_the_drawn_cell() {
        let cells = board_cells(Rect::new(0, 0, 10, 5));
        for (index, cell) in cells.iter().enumerate() {
            assert_eq!(
                crate::tui::cell_at(&cells, cell.right() - 1, cell.bottom() - 1),
                Position::from_index(index)
            );
        }
    }

    #[test]
    fn test_draw_shows_title_status_and_help() {
        let app = app();
        let (buffer, _) = render(&app);
        let screen = text(&buffer, *buffer.area());
        assert!(screen.contains("Comedy Battle"));
        assert!(screen.contains(Locale::English.message(StatusKey::Welcome)));
        assert!(screen.contains("R: new game"));
    }

    #[test]
    fn test_draw_returns_cells_used_for_marks() {
        let mut app = app();
        app.select(Position::TopRight);
        let (buffer, cells) = render(&app);
        assert!(text(&buffer, cells[2]).contains('X'));
        assert!(text(&buffer, cells[0]).contains('1'));
    }
}
