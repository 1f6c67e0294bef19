use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};
use crate::app::{App, ChartFocus};
use super::theme::CatppuccinTheme as Theme;

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Charts
            Constraint::Length(3),  // Footer
        ])
        .split(f.area());

    draw_header(f, chunks[0]);
    draw_charts(f, chunks[1], app);
    draw_footer(f, chunks[2], app);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let title = vec![
        Line::from(vec![
            Span::raw("  "),
            Span::styled("◆", Style::default().fg(Theme::MAUVE)),
            Span::raw(" "),
            Span::styled("Mersenne Trends", Style::default()
                .fg(Theme::LAVENDER)
                .add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled("◆", Style::default().fg(Theme::MAUVE)),
            Span::raw("  "),
            Span::styled("Exponent Growth & Gap Analysis", Style::default()
                .fg(Theme::SUBTEXT0)
                .add_modifier(Modifier::ITALIC)),
        ]),
    ];

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Theme::MAUVE))
            .style(Style::default().bg(Theme::MANTLE)));

    f.render_widget(header, area);
}

fn draw_charts(f: &mut Frame, area: Rect, app: &App) {
    let show_differences = app.config.display.show_differences;

    match app.focus {
        ChartFocus::Exponents => draw_exponent_chart(f, area, app),
        ChartFocus::Differences if show_differences => draw_difference_chart(f, area, app),
        ChartFocus::Differences => draw_exponent_chart(f, area, app),
        ChartFocus::Both => {
            if show_differences {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(area);
                draw_exponent_chart(f, chunks[0], app);
                draw_difference_chart(f, chunks[1], app);
            } else {
                draw_exponent_chart(f, area, app);
            }
        }
    }
}

fn draw_exponent_chart(f: &mut Frame, area: Rect, app: &App) {
    let points = app.dataset.exponent_points();
    let accent = Theme::exponent_accent();

    let x_max = app.dataset.next_index() as f64;
    let y_max = points.iter().map(|p| p.1).fold(1.0_f64, f64::max);

    // Extends one index past the data so the extrapolation target is
    // visible on the same axes.
    let fit_points: Vec<(f64, f64)> = if app.config.display.show_fit_line {
        app.dataset
            .indices
            .iter()
            .map(|&i| i as f64)
            .chain(std::iter::once(x_max))
            .map(|x| (x, app.fit.predict(x).max(0.0)))
            .collect()
    } else {
        Vec::new()
    };

    let mut datasets = vec![Dataset::default()
        .name("Exponent")
        .marker(Marker::Dot)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(accent))
        .data(&points)];

    if !fit_points.is_empty() {
        datasets.push(
            Dataset::default()
                .name("Linear fit")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Theme::fit_accent()))
                .data(&fit_points),
        );
    }

    let chart = chart_frame(
        datasets,
        "Mersenne Prime Exponents Over Time",
        "Exponent",
        accent,
        x_max,
        y_max,
    );

    f.render_widget(chart, area);
}

fn draw_difference_chart(f: &mut Frame, area: Rect, app: &App) {
    // First position has no predecessor; it is simply absent here.
    let points = app.dataset.difference_points();
    let accent = Theme::difference_accent();

    let x_max = app.dataset.next_index() as f64;
    let y_max = points.iter().map(|p| p.1).fold(1.0_f64, f64::max);

    let datasets = vec![Dataset::default()
        .name("Difference")
        .marker(Marker::Dot)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(accent))
        .data(&points)];

    let chart = chart_frame(
        datasets,
        "Differences Between Consecutive Exponents",
        "Difference",
        accent,
        x_max,
        y_max,
    );

    f.render_widget(chart, area);
}

fn chart_frame<'a>(
    datasets: Vec<Dataset<'a>>,
    title: &'a str,
    y_label: &'a str,
    accent: ratatui::style::Color,
    x_max: f64,
    y_max: f64,
) -> Chart<'a> {
    let axis_style = Style::default().fg(Theme::OVERLAY0);
    let label_style = Style::default().fg(Theme::SUBTEXT0);

    let x_labels = axis_labels(1.0, x_max, label_style);
    let y_labels = axis_labels(0.0, y_max, label_style);

    Chart::new(datasets)
        .block(Block::default()
            .title(Span::styled(title, Style::default()
                .fg(accent)
                .add_modifier(Modifier::BOLD)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(Theme::MANTLE)))
        .x_axis(Axis::default()
            .title(Span::styled("Index", label_style))
            .style(axis_style)
            .bounds([1.0, x_max])
            .labels(x_labels))
        .y_axis(Axis::default()
            .title(Span::styled(y_label, label_style))
            .style(axis_style)
            .bounds([0.0, y_max])
            .labels(y_labels))
}

fn axis_labels(min: f64, max: f64, style: Style) -> Vec<Span<'static>> {
    let mid = (min + max) / 2.0;
    [min, mid, max]
        .iter()
        .map(|v| Span::styled(format!("{:.0}", v), style))
        .collect()
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let footer = vec![
        Line::from(vec![
            Span::styled(app.prediction.to_string(), Style::default()
                .fg(Theme::TEXT)
                .add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(
                    "   (slope {:.2}, R\u{b2} {:.3})",
                    app.fit.slope, app.fit.r_squared
                ),
                Style::default().fg(Theme::SUBTEXT0),
            ),
            Span::raw("   "),
            Span::styled("Tab", Style::default().fg(Theme::MAUVE)),
            Span::styled(" focus  ", Style::default().fg(Theme::SUBTEXT0)),
            Span::styled("q", Style::default().fg(Theme::MAUVE)),
            Span::styled(" quit", Style::default().fg(Theme::SUBTEXT0)),
        ]),
    ];

    let widget = Paragraph::new(footer)
        .alignment(Alignment::Center)
        .block(Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Theme::SURFACE0))
            .style(Style::default().bg(Theme::MANTLE)));

    f.render_widget(widget, area);
}
