use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Screen regions shared by every tab
pub struct AppLayout {
    pub tabs_area: Rect,
    pub main_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Tab bar on top (3 rows with border), content, 1-row status bar at the bottom
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        Self { tabs_area: chunks[0], main_area: chunks[1], status_area: chunks[2] }
    }
}

/// List on the left (60%), detail on the right (40%)
pub fn list_and_detail(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Fixed-height input row above the remaining content
pub fn input_and_body(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Popup rectangle centered in `area`, clamped to its size
pub fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}
