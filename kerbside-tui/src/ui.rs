use chrono::Local;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};

use crate::app::{App, PremisesField, Screen};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    // Title / header
    let header = Paragraph::new("kerbside – bin collection days")
        .block(Block::default().borders(Borders::ALL).title("Kerbside"));
    frame.render_widget(header, *header_area);

    // Main screen
    match app.screen {
        Screen::CouncilSelect => draw_council_select(frame, app, *content_area),
        Screen::PremisesEntry => draw_premises_entry(frame, app, *content_area),
        Screen::ScheduleView => draw_schedule_view(frame, app, *content_area),
    }

    // Status bar
    let nav_hint = match app.screen {
        Screen::CouncilSelect => "↑/↓ move · Enter/Space select council · q/Ctrl-C quit",
        Screen::PremisesEntry => {
            "Type to edit · Tab switch field · Enter fetch · Left/Esc back · Ctrl-C quit"
        }
        Screen::ScheduleView => "Esc/←/b back to premises · q/Ctrl-C quit",
    };

    let status_text = if app.is_loading {
        format!("Loading… · {nav_hint}")
    } else if let Some(msg) = &app.error_message {
        format!("{msg} · {nav_hint}")
    } else {
        nav_hint.to_owned()
    };

    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else if app.is_loading {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_council_select(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items = app
        .councils
        .iter()
        .enumerate()
        .map(|(idx, (_id, name))| {
            let prefix = if idx == app.council_list_index {
                "> "
            } else {
                "  "
            };
            ListItem::new(format!("{prefix}{name}"))
        })
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select council (↑/↓, Enter)"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !app.councils.is_empty() {
        state.select(Some(app.council_list_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_premises_entry(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // postcode
            Constraint::Length(3), // uprn
            Constraint::Min(0),    // help
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [postcode_area, uprn_area, help_area] = chunks else {
        return;
    };

    let council_name = app
        .councils
        .get(app.council_list_index)
        .map_or("<no council>", |(_, name)| name.as_str());

    let focused_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let postcode_style = if app.focused_field == PremisesField::Postcode {
        focused_style
    } else {
        Style::default()
    };
    let postcode = Paragraph::new(app.postcode_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(postcode_style)
            .title("Postcode"),
    );
    frame.render_widget(postcode, *postcode_area);

    let uprn_style = if app.focused_field == PremisesField::Uprn {
        focused_style
    } else {
        Style::default()
    };
    let uprn = Paragraph::new(app.uprn_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(uprn_style)
            .title("UPRN (unique property reference number)"),
    );
    frame.render_widget(uprn, *uprn_area);

    let help = Paragraph::new(format!(
        "Checking {council_name}. Enter the property's postcode and UPRN, then press Enter.\n\
         The UPRN is on your council tax letter, or look it up at findmyaddress.co.uk."
    ))
    .block(Block::default().borders(Borders::ALL).title("Help"))
    .wrap(Wrap { trim: true });
    frame.render_widget(help, *help_area);
}

fn draw_schedule_view(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let council_name = app
        .councils
        .get(app.council_list_index)
        .map_or("<council>", |(_, name)| name.as_str());

    let title = format!(
        "Collections for {} in {council_name} (Esc/←/b to go back)",
        app.postcode_input.trim()
    );

    if app.is_loading {
        let paragraph = Paragraph::new("Loading schedule…")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    if app.collections.is_empty() {
        let paragraph = Paragraph::new("No collections listed for this property.")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let today = Local::now().date_naive();
    let mut collections = app.collections.clone();
    collections.sort_by_key(|collection| collection.date);

    let rows = collections.into_iter().map(|collection| {
        let date = collection.date.format("%d/%m/%Y").to_string();
        let weekday = collection.date.format("%a").to_string();
        let relative = relative_day_label(collection.date, today);

        let mut style = Style::default().fg(bin_color(&collection.waste_stream));
        if collection.date <= today {
            style = style.add_modifier(Modifier::BOLD);
        }

        Row::new(vec![
            Cell::from(date),
            Cell::from(weekday),
            Cell::from(relative),
            Cell::from(collection.waste_stream),
        ])
        .style(style)
    });

    let column_widths = [
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec!["Date", "Day", "In", "Bin"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(1);

    frame.render_widget(table, area);
}

// Renfrewshire names its bins after their colours; fall back to magenta for
// labels we don't recognise.
fn bin_color(label: &str) -> Color {
    match label {
        "Grey" => Color::Gray,
        "Brown" => Color::LightRed,
        "Green" => Color::Green,
        "Blue" => Color::Blue,
        _ => Color::Magenta,
    }
}

fn relative_day_label(date: chrono::NaiveDate, today: chrono::NaiveDate) -> String {
    let delta = (date - today).num_days();
    match delta {
        0 => "today".to_owned(),
        1 => "tomorrow".to_owned(),
        days if days > 1 => format!("in {days} days"),
        -1 => "yesterday".to_owned(),
        days => format!("{} days ago", days.abs()),
    }
}
