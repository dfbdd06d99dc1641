use ratatui::prelude::*;

use crate::game::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::game::{Breakout, GameObject};

const BACKGROUND: Color = Color::Rgb(10, 10, 20);
const WALL: Color = Color::Rgb(60, 60, 80);

/// Brick color by remaining hits, hottest for the toughest
pub fn brick_color(hits: u8) -> Color {
    match hits {
        3 => Color::Rgb(220, 50, 50),
        2 => Color::Rgb(220, 130, 30),
        _ => Color::Rgb(220, 200, 30),
    }
}

/// Rasterize the playfield into `width` x `height` terminal cells.
pub fn render_field(game: &Breakout, width: usize, height: usize) -> Vec<Line<'static>> {
    let (w, h) = (width, height);
    if w == 0 || h == 0 {
        return Vec::new();
    }

    let sx = w as f32 / FIELD_WIDTH;
    let sy = h as f32 / FIELD_HEIGHT;
    let to_col = |x: f32| ((x * sx).max(0.0) as usize).min(w - 1);
    let to_row = |y: f32| ((y * sy).max(0.0) as usize).min(h - 1);

    let bg = Style::default().bg(BACKGROUND);
    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![(' ', bg); w]; h];

    // Side walls and ceiling. The floor is open.
    let wall = bg.fg(WALL);
    for row in grid.iter_mut() {
        row[0] = ('│', wall);
        row[w - 1] = ('│', wall);
    }
    for cell in grid[0].iter_mut() {
        *cell = ('─', wall);
    }
    grid[0][0] = ('╭', wall);
    grid[0][w - 1] = ('╮', wall);

    for brick in game.arena().bricks() {
        let b = brick.bounds();
        let row = to_row(b.center_y());
        let (start, end) = (to_col(b.left), to_col(b.right));
        let style = bg.fg(brick_color(brick.hits()));
        for col in start..end.max(start + 1) {
            let ch = if col == start {
                '▐'
            } else if col + 1 >= end {
                '▌'
            } else {
                '█'
            };
            grid[row][col] = (ch, style);
        }
    }

    let p = game.arena().paddle().bounds();
    let row = to_row(p.center_y());
    let paddle = Style::default()
        .fg(Color::Rgb(180, 200, 255))
        .bg(Color::Rgb(30, 50, 120))
        .add_modifier(Modifier::BOLD);
    for col in to_col(p.left)..=to_col(p.right) {
        grid[row][col] = ('═', paddle);
    }

    // A ball below the floor is off screen
    let ball = game.ball().bounds();
    let in_flight = !game.arena().paddle().is_carrying(game.ball());
    if let (true, Some(speed)) = (in_flight, game.ball().speed()) {
        let d = game.ball().direction();
        let tx = ball.center_x() - d.dx.as_f32() * speed * 2.0;
        let ty = ball.center_y() - d.dy.as_f32() * speed * 2.0;
        if tx >= 0.0 && ty >= 0.0 && ty < FIELD_HEIGHT {
            let cell = &mut grid[to_row(ty)][to_col(tx)];
            if cell.0 == ' ' {
                *cell = ('·', bg.fg(Color::Rgb(100, 100, 120)));
            }
        }
    }
    if ball.center_y() < FIELD_HEIGHT {
        let ball_style = bg.fg(Color::White).add_modifier(Modifier::BOLD);
        grid[to_row(ball.center_y())][to_col(ball.center_x())] = ('●', ball_style);
    }

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}
