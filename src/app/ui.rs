use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use strum::IntoEnumIterator;

use crate::{
    app::{
        app::{InputField, InputForm, RowEdit},
        portfolio::Portfolio,
    },
    models::Position,
};

pub fn render(
    frame: &mut Frame,
    portfolio: &Portfolio,
    form: &InputForm,
    table_state: &mut TableState,
    row_edit: &Option<RowEdit>,
    error_popup: &Option<String>,
    selection_mode: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new("Portfolio Rebalancer")
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, chunks[0]);

    render_form(frame, form, selection_mode && row_edit.is_none(), chunks[1]);
    render_positions(frame, portfolio, table_state, row_edit, chunks[2]);
    render_weight_warning(frame, portfolio, chunks[3]);
    render_recommendations(frame, portfolio, chunks[4]);
    render_footer(frame, row_edit, selection_mode, chunks[5]);

    if let Some(message) = error_popup {
        render_error_popup(frame, message, frame.area());
    }
}

fn render_form(frame: &mut Frame, form: &InputForm, table_focused: bool, area: Rect) {
    let mut spans = Vec::new();
    for field in InputField::iter() {
        let style = if form.focus == field && !table_focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(
            format!("{}: {}", field, form.value(field)),
            style,
        ));
        spans.push(Span::raw("    "));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title("Add Position (Tab: next field, Enter: add)")
            .borders(Borders::ALL),
    );

    frame.render_widget(input, area);
}

fn render_positions(
    frame: &mut Frame,
    portfolio: &Portfolio,
    table_state: &mut TableState,
    row_edit: &Option<RowEdit>,
    area: Rect,
) {
    let positions = portfolio.positions();

    if positions.is_empty() {
        let empty_message = Paragraph::new("No positions added yet.")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().title("Positions").borders(Borders::ALL));
        frame.render_widget(empty_message, area);
        return;
    }

    let header_cells = ["Name", "Shares", "Price", "Target %"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).style(Style::default()).height(1);

    let rows = positions.iter().map(|position| {
        let cells = InputField::iter().map(|field| position_cell(position, field, row_edit));
        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Length(40),
        Constraint::Length(15),
        Constraint::Length(15),
        Constraint::Length(15),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Positions").borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, table_state);
}

fn position_cell<'a>(
    position: &'a Position,
    field: InputField,
    row_edit: &'a Option<RowEdit>,
) -> Cell<'a> {
    if let Some(edit) = row_edit {
        if edit.id == *position.id() && edit.field == field {
            return Cell::from(edit.buffer.clone()).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }

    match field {
        InputField::Name => Cell::from(position.name().clone()),
        InputField::Shares => Cell::from(format!("{:.2}", position.shares())),
        InputField::Price => Cell::from(format!("{:.2}", position.price())),
        InputField::TargetWeight => Cell::from(format!("{:.2}", position.target_weight())),
    }
}

fn render_weight_warning(frame: &mut Frame, portfolio: &Portfolio, area: Rect) {
    let total_target_weight = portfolio.total_target_weight();
    if portfolio.positions().is_empty() || total_target_weight == dec!(100) {
        return;
    }

    let warning = Paragraph::new(format!(
        "Warning: Total target weight is {}%. It should equal 100%.",
        total_target_weight.normalize()
    ))
    .style(Style::default().fg(Color::Yellow));

    frame.render_widget(warning, area);
}

fn render_recommendations(frame: &mut Frame, portfolio: &Portfolio, area: Rect) {
    let results = portfolio.rebalance();

    if results.is_empty() {
        return;
    }

    let header_cells = [
        "Name",
        "Current Value",
        "Target Value",
        "Difference",
        "Trade",
    ]
    .iter()
    .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).style(Style::default()).height(1);

    let rows = results.iter().map(|result| {
        let difference = *result.difference();
        let color_difference = if difference > Decimal::ZERO {
            Color::Green
        } else {
            Color::Red
        };

        let (trade_str, color_trade) = match result.trade_quantity() {
            Some(quantity) if *quantity > Decimal::ZERO => {
                (format!("Buy {:.2}", quantity), Color::Green)
            }
            Some(quantity) => (format!("Sell {:.2}", quantity.abs()), Color::Red),
            None => ("n/a".to_string(), Color::DarkGray),
        };

        let cells = [
            Cell::from(result.position().name().clone()),
            Cell::from(format!("{:.2}", result.current_value())),
            Cell::from(format!("{:.2}", result.target_value())),
            Cell::from(format!("{:.2}", difference))
                .style(Style::default().fg(color_difference)),
            Cell::from(trade_str).style(Style::default().fg(color_trade)),
        ];

        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Length(40),
        Constraint::Length(15),
        Constraint::Length(15),
        Constraint::Length(15),
        Constraint::Length(15),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title("Rebalancing Recommendations")
            .borders(Borders::ALL),
    );

    frame.render_widget(table, area);
}

fn render_footer(frame: &mut Frame, row_edit: &Option<RowEdit>, selection_mode: bool, area: Rect) {
    let help = if row_edit.is_some() {
        "Tab: next field | Enter: apply | Esc: cancel"
    } else if selection_mode {
        "Up/Down: select | e: edit | d: delete | Esc: back to form | q: quit"
    } else {
        "Tab: next field | Enter: add | Up/Down: select row | Ctrl+C: quit"
    };

    let footer = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

fn render_error_popup(frame: &mut Frame, message: &str, area: Rect) {
    let popup_area = centered_rect(60, 20, area);

    let popup = Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Error (press any key)")
                .borders(Borders::ALL),
        );

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
