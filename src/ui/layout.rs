use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the navigation sidebar in columns
pub const SIDEBAR_WIDTH: u16 = 26;

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub sidebar_area: Rect,
    pub content_area: Rect,
    pub status_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Middle: sidebar | active view
/// - Bottom bar: status message (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[1]);

    MainLayout {
        keybindings_area: rows[0],
        sidebar_area: columns[0],
        content_area: columns[1],
        status_area: rows[2],
    }
}

/// Split a view into a stats strip and a body
pub fn split_stats(area: Rect, stats_height: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(stats_height), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Divide a row into `n` equal columns
pub fn equal_columns(area: Rect, n: usize) -> Vec<Rect> {
    let n = n.max(1) as u32;
    let constraints: Vec<Constraint> = (0..n).map(|_| Constraint::Ratio(1, n)).collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Create centered modal area (task form, login box)
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.sidebar_area.width, SIDEBAR_WIDTH);
        assert_eq!(layout.content_area.width, 100 - SIDEBAR_WIDTH);
        assert_eq!(layout.content_area.height, 48);
    }

    #[test]
    fn test_equal_columns() {
        let cols = equal_columns(Rect::new(0, 0, 80, 5), 4);
        assert_eq!(cols.len(), 4);
        assert!(cols.iter().all(|c| c.width == 20));
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area, 16);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 16);
    }
}
