pub mod field;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::{Breakout, Phase};

pub const TITLE: &str = "Break those Bricks!";

pub fn render(frame: &mut Frame, app: &App) {
    let game = &app.game;
    let area = frame.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(220, 80, 80)))
        .title(format!(" 🧱 {TITLE} "))
        .title_style(
            Style::default()
                .fg(Color::Rgb(255, 100, 100))
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(inner);

    render_status(frame, game, chunks[0]);

    let lines = field::render_field(game, chunks[1].width as usize, chunks[1].height as usize);
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    frame.render_widget(Paragraph::new(help_line(game.phase())), chunks[2]);

    if let Some(banner) = game.hud().banner() {
        render_banner(frame, chunks[1], banner);
    }
}

fn render_status(frame: &mut Frame, game: &Breakout, area: Rect) {
    let hud = game.hud();
    let lives = Paragraph::new(Span::styled(
        format!(" {}", hud.lives()),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ));
    let mut right = vec![Span::styled(
        format!("{} ", hud.score()),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    if let Some(best) = game.high_score() {
        right.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        right.push(Span::styled(
            format!("🏆 Best: {best} "),
            Style::default().fg(Color::Cyan),
        ));
    }
    let score = Paragraph::new(Line::from(right)).alignment(Alignment::Right);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);
    frame.render_widget(lives, halves[0]);
    frame.render_widget(score, halves[1]);
}

fn help_line(phase: Phase) -> Line<'static> {
    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);
    let sep = Span::styled("│ ", Style::default().fg(Color::Rgb(60, 60, 60)));
    let mut spans = Vec::new();
    if !phase.is_terminal() {
        spans.push(Span::styled(" ←→ Move Paddle ", dim));
        spans.push(sep.clone());
    }
    if phase == Phase::AwaitingLaunch {
        spans.push(Span::styled("SPACE Launch ", key));
        spans.push(sep);
    }
    spans.push(Span::styled(" Q/Esc Quit", dim));
    Line::from(spans)
}

/// Centered box over the playfield with one line per banner line
fn render_banner(frame: &mut Frame, area: Rect, text: &str) {
    let lines: Vec<&str> = text.lines().collect();
    let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
    let overlay_w = (widest + 6).min(area.width);
    let overlay_h = (lines.len() as u16 + 4).min(area.height);
    let x = area.x + area.width.saturating_sub(overlay_w) / 2;
    let y = area.y + area.height.saturating_sub(overlay_h) / 2;
    let overlay = Rect::new(x, y, overlay_w, overlay_h);

    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Rgb(255, 220, 80)))
        .style(Style::default().bg(Color::Rgb(15, 15, 25)));

    let mut body = vec![Line::from("")];
    body.extend(lines.into_iter().map(|l| {
        Line::from(Span::styled(
            l.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
    }));
    let paragraph = Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, overlay);
}
