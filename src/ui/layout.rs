use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub input: Rect,
    pub submit: Rect,
    pub body: Rect,
    pub status_line: Rect,
}

pub const SUBMIT_WIDTH: u16 = 16;

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(size);

    let form = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(SUBMIT_WIDTH)])
        .split(vertical[1]);

    UiAreas {
        size,
        header: vertical[0],
        input: form[0],
        submit: form[1],
        body: vertical[2],
        status_line: vertical[3],
    }
}
