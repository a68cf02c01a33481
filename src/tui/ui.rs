//! Dashboard rendering
//!
//! Divides the terminal into a parameter panel, a status line and the
//! results region (summary + verdict, conversion-rate bars, sensitivity
//! chart). Guards against undersized terminals and renders the help
//! overlay on demand.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, BarChart, Block, Borders, Chart, Clear, Dataset, Gauge, GraphType, Paragraph, Wrap,
};
use ratatui::Frame;

use crate::config::SIGNIFICANCE_LEVEL;
use crate::generator::Group;

use super::app::{App, Field, RunOutcome, MIN_COLS, MIN_ROWS};

/// Renders the complete dashboard into the given frame.
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    // Minimum size guard
    if size.width < MIN_COLS || size.height < MIN_ROWS {
        draw_too_small(f, size);
        return;
    }

    if app.show_help {
        draw_help_overlay(f, size);
        return;
    }

    let title = format!(
        " A/B Testing Simulator {:>width$} ",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        width = (size.width as usize).saturating_sub(26),
    );

    let outer_block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let footer = Line::from(Span::styled(
        " [Tab] field  [\u{2190}\u{2192}] adjust  [r]esample  [h]elp  [q]uit ",
        Style::default().fg(Color::DarkGray),
    ));
    let footer_block = Block::default().title_bottom(footer).borders(Borders::NONE);

    let inner = outer_block.inner(size);
    f.render_widget(outer_block, size);
    f.render_widget(footer_block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Parameter controls
            Constraint::Length(1), // Status line
            Constraint::Min(10),   // Results
        ])
        .split(inner);

    draw_params(f, app, chunks[0]);
    draw_status(f, app, chunks[1]);
    draw_results(f, app, chunks[2]);
}

fn draw_params(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(columns[0]);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(columns[1]);

    draw_size_field(f, left[0], "Sample size A", app.n_a, app.focus == Field::SampleA);
    draw_rate_field(f, left[1], "Conversion rate A", app.rate_a_pct, app.focus == Field::RateA);
    draw_size_field(f, right[0], "Sample size B", app.n_b, app.focus == Field::SampleB);
    draw_rate_field(f, right[1], "Conversion rate B", app.rate_b_pct, app.focus == Field::RateB);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border)
}

fn draw_size_field(f: &mut Frame, area: Rect, title: &str, value: u64, focused: bool) {
    let style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let text = Paragraph::new(Span::styled(format!("{:>6}  (step 100)", value), style))
        .block(field_block(title, focused));
    f.render_widget(text, area);
}

fn draw_rate_field(f: &mut Frame, area: Rect, title: &str, percent: u16, focused: bool) {
    let gauge = Gauge::default()
        .block(field_block(title, focused))
        .gauge_style(if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Cyan)
        })
        .percent(percent)
        .label(format!("{}%", percent));
    f.render_widget(gauge, area);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(Span::styled(
        format!(" {}", app.status),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(status, area);
}

fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let Some(outcome) = &app.outcome else {
        let info = Paragraph::new(app.status.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Simulation Results").borders(Borders::ALL));
        f.render_widget(info, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(5)])
        .split(columns[0]);

    draw_summary(f, outcome, left[0]);
    draw_rate_bars(f, outcome, left[1]);
    draw_sweep_chart(f, outcome, columns[1]);
}

fn draw_summary(f: &mut Frame, outcome: &RunOutcome, area: Rect) {
    let significant = outcome.test.p_value < SIGNIFICANCE_LEVEL;

    let mut lines: Vec<Line> = vec![Line::from(format!(
        "{:<6} {:>12} {:>8} {:>10}",
        "Group", "Conversions", "Trials", "Rate"
    ))];
    for (group, summary) in &outcome.summaries {
        lines.push(Line::from(format!(
            "{:<6} {:>12} {:>8} {:>9.4}",
            group.to_string(),
            summary.successes,
            summary.trials,
            summary.conversion_rate()
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Z-statistic: {:.3}", outcome.test.z_score)));
    lines.push(Line::from(format!("P-value: {:.3}", outcome.test.p_value)));
    lines.push(Line::from(Span::styled(
        if significant {
            "Statistically Significant"
        } else {
            "Not Statistically Significant"
        },
        Style::default()
            .fg(if significant { Color::Green } else { Color::Yellow })
            .add_modifier(Modifier::BOLD),
    )));

    let summary = Paragraph::new(lines)
        .block(Block::default().title("Results Summary").borders(Borders::ALL));
    f.render_widget(summary, area);
}

fn draw_rate_bars(f: &mut Frame, outcome: &RunOutcome, area: Rect) {
    let rate = |group: Group| -> u64 {
        outcome
            .summaries
            .get(&group)
            .map(|s| (s.conversion_rate() * 100.0).round() as u64)
            .unwrap_or(0)
    };
    let data = [("A", rate(Group::A)), ("B", rate(Group::B))];

    let chart = BarChart::default()
        .block(
            Block::default()
                .title("Conversion Rates (%)")
                .borders(Borders::ALL),
        )
        .data(&data)
        .bar_width(9)
        .bar_gap(3)
        .max(100)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(chart, area);
}

fn draw_sweep_chart(f: &mut Frame, outcome: &RunOutcome, area: Rect) {
    let block = Block::default()
        .title("P-Value vs Sample Size")
        .borders(Borders::ALL);

    if outcome.sweep.is_empty() {
        let empty = Paragraph::new("No plottable sweep points for these rates.")
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let series: Vec<(f64, f64)> = outcome
        .sweep
        .iter()
        .map(|p| (p.sample_size as f64, p.p_value))
        .collect();
    let x_min = series.first().map(|p| p.0).unwrap_or(0.0);
    let x_max = series.last().map(|p| p.0).unwrap_or(1.0).max(x_min + 1.0);
    let threshold = [(x_min, SIGNIFICANCE_LEVEL), (x_max, SIGNIFICANCE_LEVEL)];

    let datasets = vec![
        Dataset::default()
            .name("p-value")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&series),
        Dataset::default()
            .name(format!("threshold {}", SIGNIFICANCE_LEVEL))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&threshold),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Sample size per group")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_min, x_max])
                .labels([
                    format!("{}", x_min as u64),
                    format!("{}", ((x_min + x_max) / 2.0) as u64),
                    format!("{}", x_max as u64),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("p-value")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, 1.0])
                .labels(["0.0".to_string(), "0.5".to_string(), "1.0".to_string()]),
        );
    f.render_widget(chart, area);
}

fn draw_too_small(f: &mut Frame, size: Rect) {
    let message = Paragraph::new(format!(
        "Terminal too small: need at least {}x{}, have {}x{}",
        MIN_COLS, MIN_ROWS, size.width, size.height
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(message, size);
}

fn draw_help_overlay(f: &mut Frame, size: Rect) {
    let area = centered_rect(60, 50, size);
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "A/B Testing Simulator — Help",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Tab / Shift+Tab   switch parameter field"),
        Line::from("Arrows, + / -     adjust the focused field"),
        Line::from("r                 rerun with fresh samples"),
        Line::from("h                 close this overlay"),
        Line::from("q, Esc, Ctrl+C    quit"),
        Line::from(""),
        Line::from("Sample sizes step by 100, rates by 1%."),
        Line::from("The sweep chart shows how the p-value trends"),
        Line::from("as the per-group sample size grows."),
    ];

    let help = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" Help ").borders(Borders::ALL));
    f.render_widget(help, area);
}

/// Centered sub-rectangle taking the given percentages of the parent.
fn centered_rect(percent_x: u16, percent_y: u16, parent: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(parent);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
