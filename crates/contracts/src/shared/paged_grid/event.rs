/// Events emitted by the grid widget
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent<R> {
    /// User asked for another page. `index` is 0-based, as the widget counts.
    PageRequested { index: usize },
    /// Every row now marked selected on the visible page
    SelectionChanged { records: Vec<R> },
}
