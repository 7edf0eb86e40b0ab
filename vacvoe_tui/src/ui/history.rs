//! Move-history panel with time-travel entries.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::app::{App, Focus};

/// Label for a history entry, as shown to the player.
pub fn entry_label(index: usize) -> String {
    if index == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", index)
    }
}

/// Renders the selectable list of recorded snapshots.
pub fn render_history(f: &mut Frame, area: Rect, app: &App) {
    let current = app.history().current_index();

    let items: Vec<ListItem> = (0..app.history().len())
        .map(|index| {
            let marker = if index == current { "▸ " } else { "  " };

            let mut style = Style::default();
            if index == current {
                style = style.fg(Color::Cyan);
            }
            if app.focus() == Focus::History && index == app.selected_entry() {
                style = style.add_modifier(Modifier::REVERSED);
            }

            ListItem::new(format!("{}{}", marker, entry_label(index))).style(style)
        })
        .collect();

    let border_style = if app.focus() == Focus::History {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("History")
            .border_style(border_style),
    );
    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_labels() {
        assert_eq!(entry_label(0), "Go to game start");
        assert_eq!(entry_label(1), "Go to move #1");
        assert_eq!(entry_label(7), "Go to move #7");
    }
}
