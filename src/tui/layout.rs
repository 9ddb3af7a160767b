use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Sidebar width in columns when open
pub const SIDEBAR_WIDTH: u16 = 28;

/// Portal screen regions
pub struct AppLayout {
    pub sidebar_area: Option<Rect>,
    pub search_area: Rect,
    pub content_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Split the screen:
    /// - Sidebar: fixed width on the left, only when open
    /// - Search bar: 3 rows at the top of the main pane
    /// - Content: remaining rows of the main pane
    /// - Status bar: bottom row across the full width
    pub fn new(area: Rect, sidebar_open: bool) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let (sidebar_area, main_area) = if sidebar_open {
            let horizontal_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(vertical_chunks[0]);
            (Some(horizontal_chunks[0]), horizontal_chunks[1])
        } else {
            (None, vertical_chunks[0])
        };

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(main_area);

        Self {
            sidebar_area,
            search_area: main_chunks[0],
            content_area: main_chunks[1],
            status_area: vertical_chunks[1],
        }
    }
}
