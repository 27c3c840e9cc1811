//! Socials modal drawn over the dashboard

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::domain::{SocialPlatform, SocialsDraft};
use crate::tui::theme::THEME;

/// Rectangle of `width` x `height` centered in `area`, clipped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn render_socials_modal(f: &mut Frame, area: Rect, draft: &SocialsDraft) {
    let popup = centered_rect(64, 14, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" ADD SOCIALS ")
        .title_style(THEME.accent_style())
        .borders(Borders::ALL)
        .border_style(THEME.accent_style());

    let platforms: Vec<Span> = SocialPlatform::ALL
        .iter()
        .flat_map(|p| {
            let style = if *p == draft.selected_platform {
                THEME.accent_style()
            } else {
                THEME.inactive_style()
            };
            [Span::styled(p.label(), style), Span::raw(" ")]
        })
        .collect();

    let input = if draft.link.is_empty() {
        Span::styled(draft.placeholder(), THEME.inactive_style())
    } else {
        Span::styled(format!("{}▏", draft.link), THEME.text_style())
    };

    let mut lines = vec![
        Line::from(platforms),
        Line::raw(""),
        Line::from(vec![Span::styled("> ", THEME.accent_style()), input]),
        Line::raw(""),
        Line::from(Span::styled(draft.summary(), THEME.highlight_style())),
    ];
    for social in &draft.socials {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", social.platform.label()), THEME.inactive_style()),
            Span::styled(social.link.clone(), THEME.text_style()),
        ]));
    }

    let submit_style = if draft.is_disabled() {
        THEME.inactive_style()
    } else {
        THEME.green_style()
    };
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Tab", THEME.highlight_style()),
        Span::raw(" platform  "),
        Span::styled("Ctrl+A", THEME.highlight_style()),
        Span::raw(" add another  "),
        Span::styled("Enter", submit_style),
        Span::raw(" submit  "),
        Span::styled("Esc", THEME.highlight_style()),
        Span::raw(" close"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(64, 14, area), Rect::new(18, 13, 64, 14));
        // larger than the screen clips to it
        assert_eq!(centered_rect(200, 80, area), area);
    }
}
