use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, BorderType, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table,
    },
    Frame, Terminal,
};

use crate::controller::{DashboardController, LoadStatus};
use crate::openmeteo::FetchError;
use crate::paginate::PageWindow;
use crate::series::ForecastSeries;
use crate::view;

const MISSING: &str = "--";

pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    fetch: impl FnOnce() -> Result<ForecastSeries, FetchError>,
) -> io::Result<()> {
    let mut controller = DashboardController::new();

    // One frame of the loading state while the single fetch is in flight.
    terminal.draw(|f| ui(f, &controller))?;
    controller.load(fetch);

    loop {
        terminal.draw(|f| ui(f, &controller))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Left => controller.prev(),
                KeyCode::Right => controller.next(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, controller: &DashboardController) {
    match controller.status() {
        LoadStatus::Loading => center_message(f, "Loading weather data...", Color::Gray),
        LoadStatus::Failed(err) => {
            center_message(f, &format!("Failed to load data: {err}"), Color::Red)
        }
        LoadStatus::Ready => {
            let (Some(series), Some(window)) = (controller.series(), controller.window()) else {
                return;
            };
            dashboard(f, controller, series, &window);
        }
    }
}

fn center_message(f: &mut Frame, text: &str, color: Color) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(f.area());

    let message = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color));
    f.render_widget(message, rows[1]);
}

fn dashboard(
    f: &mut Frame,
    controller: &DashboardController,
    series: &ForecastSeries,
    window: &PageWindow,
) {
    let table_height = window.page_size as u16 + 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(table_height),
            Constraint::Length(3),
        ])
        .split(f.area());

    f.render_widget(display_title(), chunks[0]);
    f.render_widget(display_snapshot(series), chunks[1]);
    display_chart(f, chunks[2], window);
    f.render_widget(display_table(window), chunks[3]);
    f.render_widget(display_pager(controller, window), chunks[4]);
}

fn bordered_block(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(title, Style::default().fg(Color::Yellow)))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(BorderType::Rounded)
}

fn display_title() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        "Weather Forecast",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .border_type(BorderType::Rounded),
    )
}

fn display_snapshot(series: &ForecastSeries) -> Table<'static> {
    let mut rows = vec![Row::new(vec![Cell::from("")])];

    match view::snapshot(series) {
        Some(snap) => {
            rows.push(Row::new(vec![
                Cell::from(" Temperature"),
                Cell::from(format!("{:.1} °C", snap.temperature)).style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            rows.push(Row::new(vec![
                Cell::from(" Time"),
                Cell::from(view::display_time(snap.time)).style(Style::default().fg(Color::Green)),
            ]));
        }
        None => {
            rows.push(Row::new(vec![
                Cell::from(" Temperature"),
                Cell::from(MISSING).style(Style::default().fg(Color::Green)),
            ]));
        }
    }

    Table::new(rows, [Constraint::Length(13), Constraint::Length(20)])
        .block(bordered_block(" Current Temperature "))
}

fn display_chart(f: &mut Frame, area: Rect, window: &PageWindow) {
    let chart = view::chart_series(window);
    let block = bordered_block(" Temperature Chart ");

    if window.is_empty() {
        let empty = Paragraph::new(format!("\n {MISSING}"))
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, area);
        return;
    }

    let points: Vec<(f64, f64)> = chart
        .values
        .iter()
        .enumerate()
        .map(|(i, value)| (i as f64, *value))
        .collect();

    let (y_min, y_max) = chart
        .values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), value| {
            (lo.min(*value), hi.max(*value))
        });
    let pad = ((y_max - y_min) * 0.1).max(1.0);
    let (y_lo, y_hi) = (y_min - pad, y_max + pad);

    let mut x_labels: Vec<Line> = Vec::new();
    if let Some(first) = chart.labels.first() {
        x_labels.push(Line::from(first.as_str()));
    }
    if chart.labels.len() > 2 {
        x_labels.push(Line::from(chart.labels[chart.labels.len() / 2].as_str()));
    }
    if chart.labels.len() > 1 {
        x_labels.push(Line::from(chart.labels[chart.labels.len() - 1].as_str()));
    }

    let datasets = vec![Dataset::default()
        .name("Temperature (°C)")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Blue))
        .data(&points)];

    let widget = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, (window.len() - 1).max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([y_lo, y_hi])
                .labels(vec![
                    Line::from(format!("{y_lo:.1}")),
                    Line::from(format!("{:.1}", (y_lo + y_hi) / 2.0)),
                    Line::from(format!("{y_hi:.1}")),
                ]),
        );

    f.render_widget(widget, area);
}

fn display_table(window: &PageWindow) -> Table<'static> {
    let header = Row::new(vec![Cell::from(" Time"), Cell::from("Temperature (°C)")]).style(
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = view::table_rows(window)
        .into_iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(format!(" {}", row.display_time)),
                Cell::from(format!("{:.1}", row.temperature))
                    .style(Style::default().fg(Color::Green)),
            ])
        })
        .collect();

    Table::new(rows, [Constraint::Length(20), Constraint::Length(18)])
        .header(header)
        .block(bordered_block(" Hourly Forecast "))
}

fn display_pager(controller: &DashboardController, window: &PageWindow) -> Paragraph<'static> {
    let enabled = Style::default().fg(Color::Green);
    let disabled = Style::default().fg(Color::DarkGray);

    let prev_style = if controller.has_prev() {
        enabled
    } else {
        disabled
    };
    let next_style = if controller.has_next() {
        enabled
    } else {
        disabled
    };

    Paragraph::new(Line::from(vec![
        Span::styled("← Prev", prev_style),
        Span::raw(format!(
            "   Page {} of {}   ",
            window.page, window.total_pages
        )),
        Span::styled("Next →", next_style),
        Span::styled("   q to quit", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .border_type(BorderType::Rounded),
    )
}
