use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Row, Table},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::data::Observation;
use crate::tui::app::DashboardApp;

const PRICE_MARGIN: f64 = 30.0;
const VOLUME_MARGIN: f64 = 30_000.0;
const RATE_NOTE: &str = "Prices on this feed may run up to 100 MMK below physical bank notes.";

// Tether green / loss red for the volume series.
const BUY_VOLUME_COLOR: Color = Color::Rgb(0x26, 0xa1, 0x7b);
const SELL_VOLUME_COLOR: Color = Color::Rgb(0xf9, 0x44, 0x49);

pub fn draw(f: &mut Frame, app: &DashboardApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                          // header
            Constraint::Length(5),                          // metric tiles
            Constraint::Min(10),                            // charts
            Constraint::Length(app.table_rows as u16 + 3),  // trailing table
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_tiles(f, app, chunks[1]);
    draw_charts(f, app, chunks[2]);
    draw_table(f, app, chunks[3]);
}

fn draw_header(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let refreshed = app
        .refreshed_at
        .map(|t| t.format("%H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "-".to_string());

    let depth = app
        .rows
        .last()
        .map(|r| {
            format!(
                " | Best offer depth (MMK): buy {} / sell {}",
                fmt_grouped(r.best_buy_volume),
                fmt_grouped(r.best_sell_volume)
            )
        })
        .unwrap_or_default();

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} Exchange Rate Live Dashboard", app.symbol),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("Live order-book monitor. "),
            Span::styled(RATE_NOTE, Style::default().fg(Color::Red)),
        ]),
        Line::from(format!("Last refresh: {}{}", refreshed, depth)),
    ]);
    f.render_widget(header, area);
}

fn draw_tiles(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 6); 6])
        .split(area);

    let cells = [
        ("AVG Buy Price (MMK)", app.latest.avg_buy_price, app.deltas.avg_buy_price),
        ("AVG Sell Price (MMK)", app.latest.avg_sell_price, app.deltas.avg_sell_price),
        ("Best Buy Price (MMK)", app.latest.best_buy_price, app.deltas.best_buy_price),
        ("Best Sell Price (MMK)", app.latest.best_sell_price, app.deltas.best_sell_price),
        ("Top 10 Buy Vol (USDT)", app.latest.total_buy_volume, app.deltas.total_buy_volume),
        ("Top 10 Sell Vol (USDT)", app.latest.total_sell_volume, app.deltas.total_sell_volume),
    ];

    for (i, (label, value, delta)) in cells.into_iter().enumerate() {
        let tile = Paragraph::new(vec![
            Line::from(Span::styled(
                fmt_grouped(value),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            delta_line(delta),
        ])
        .block(Block::default().title(label).borders(Borders::ALL));
        f.render_widget(tile, tiles[i]);
    }
}

fn delta_line(delta: Decimal) -> Line<'static> {
    if delta > Decimal::ZERO {
        Line::from(Span::styled(
            format!("▲ +{}", fmt_grouped(delta)),
            Style::default().fg(Color::Green),
        ))
    } else if delta < Decimal::ZERO {
        Line::from(Span::styled(
            format!("▼ -{}", fmt_grouped(delta.abs())),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::from(Span::styled("0", Style::default().fg(Color::DarkGray)))
    }
}

fn draw_charts(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let best_buy = series(&app.rows, |r| r.best_buy_price);
    let best_sell = series(&app.rows, |r| r.best_sell_price);
    draw_trend(
        f,
        halves[0],
        "Today Price Trend",
        [
            ("Best Buy", Color::Cyan, &best_buy),
            ("Best Sell", Color::Yellow, &best_sell),
        ],
        PRICE_MARGIN,
        &app.rows,
    );

    let buy_vol = series(&app.rows, |r| r.total_buy_volume);
    let sell_vol = series(&app.rows, |r| r.total_sell_volume);
    draw_trend(
        f,
        halves[1],
        "Top 10 Buy & Sell Volume Trend (USDT)",
        [
            ("Buy Vol", BUY_VOLUME_COLOR, &buy_vol),
            ("Sell Vol", SELL_VOLUME_COLOR, &sell_vol),
        ],
        VOLUME_MARGIN,
        &app.rows,
    );
}

fn series(rows: &[Observation], field: impl Fn(&Observation) -> Decimal) -> Vec<(f64, f64)> {
    rows.iter()
        .map(|r| {
            (
                r.recorded_at.timestamp() as f64,
                field(r).to_f64().unwrap_or_default(),
            )
        })
        .collect()
}

fn draw_trend(
    f: &mut Frame,
    area: Rect,
    title: &str,
    lines: [(&str, Color, &[(f64, f64)]); 2],
    margin: f64,
    rows: &[Observation],
) {
    let (x_min, x_max) = match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => (
            first.recorded_at.timestamp() as f64,
            last.recorded_at.timestamp() as f64,
        ),
        _ => (0.0, 1.0),
    };
    // a single observation would collapse the axis
    let x_max = if x_max <= x_min { x_min + 1.0 } else { x_max };

    let ys = lines.iter().flat_map(|(_, _, pts)| pts.iter().map(|p| p.1));
    let y_min = ys.clone().fold(f64::INFINITY, f64::min);
    let y_max = ys.fold(f64::NEG_INFINITY, f64::max);
    let (y_min, y_max) = if y_min.is_finite() {
        (y_min - margin, y_max + margin)
    } else {
        (0.0, 1.0)
    };

    let datasets = lines
        .iter()
        .map(|&(name, color, pts)| {
            Dataset::default()
                .name(name)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(pts)
        })
        .collect::<Vec<_>>();

    let chart = Chart::new(datasets)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .x_axis(Axis::default().bounds([x_min, x_max]).labels(x_axis_labels(rows)))
        .y_axis(
            Axis::default()
                .bounds([y_min, y_max])
                .labels(y_axis_labels(y_min, y_max)),
        );
    f.render_widget(chart, area);
}

fn x_axis_labels(rows: &[Observation]) -> Vec<String> {
    match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => {
            let mid = rows[rows.len() / 2].recorded_at;
            vec![
                first.recorded_at.format("%H:%M").to_string(),
                mid.format("%H:%M").to_string(),
                last.recorded_at.format("%H:%M").to_string(),
            ]
        }
        _ => Vec::new(),
    }
}

fn y_axis_labels(min: f64, max: f64) -> Vec<String> {
    vec![
        group_digits(min.round() as i64),
        group_digits(((min + max) / 2.0).round() as i64),
        group_digits(max.round() as i64),
    ]
}

fn draw_table(f: &mut Frame, app: &DashboardApp, area: Rect) {
    let start = app.rows.len().saturating_sub(app.table_rows);
    let rows = app.rows[start..].iter().map(|r| {
        Row::new(vec![
            r.recorded_at.format("%H:%M:%S").to_string(),
            fmt_grouped(r.avg_buy_price),
            fmt_grouped(r.avg_sell_price),
            fmt_grouped(r.best_buy_price),
            fmt_grouped(r.best_sell_price),
            fmt_grouped(r.total_buy_volume),
            fmt_grouped(r.total_sell_volume),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10), // Time
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(16),
            Constraint::Length(16),
        ],
    )
    .header(
        Row::new([
            "Time",
            "AVG Buy",
            "AVG Sell",
            "Best Buy",
            "Best Sell",
            "Buy Vol (USDT)",
            "Sell Vol (USDT)",
        ])
        .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().title("Detailed Data View").borders(Borders::ALL));
    f.render_widget(table, area);
}

fn fmt_grouped(value: Decimal) -> String {
    group_digits(value.round().to_i64().unwrap_or_default())
}

fn group_digits(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
