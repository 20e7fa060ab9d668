use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;

use crate::app::{App, Phase, StatusLevel};
use crate::domain::{format_balance, shorten_address, TokenBalanceResult, TokenSpec, WalletInfo};

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_header(f, areas.header, app);
    draw_input(f, areas.input, app);
    draw_submit(f, areas.submit, app);
    draw_body(f, areas.body, app);
    draw_status_line(f, areas.status_line, app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(
            "walletlens",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("RPC ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.endpoint.clone()),
        Span::raw("  "),
        Span::styled("Tokens ", Style::default().fg(Color::DarkGray)),
        Span::raw(app.tokens.len().to_string()),
    ]);
    let block = Block::default().borders(Borders::BOTTOM);
    f.render_widget(Paragraph::new(title).block(block), area);
}

fn draw_input(f: &mut Frame, area: Rect, app: &App) {
    let enabled = app.input_enabled();
    let border = if enabled { Color::LightCyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Wallet address or ENS name ")
        .border_style(Style::default().fg(border));

    let content = if app.input.is_empty() && enabled {
        Line::from(Span::styled(
            "0x… or name.eth",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let style = if enabled {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(Span::styled(app.input.clone(), style))
    };

    f.render_widget(Paragraph::new(content).block(block), area);

    if enabled {
        // Long pastes pin the cursor to the right border
        let len = u16::try_from(app.input.chars().count()).unwrap_or(u16::MAX);
        let max_x = area.x.saturating_add(area.width.saturating_sub(2));
        let x = area.x.saturating_add(1).saturating_add(len).min(max_x);
        f.set_cursor(x, area.y.saturating_add(1));
    }
}

fn draw_submit(f: &mut Frame, area: Rect, app: &App) {
    let style = if app.is_loading() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightCyan)
            .add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new(Line::from(Span::styled(app.submit_label(), style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, area);
}

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
    let lines = match &app.phase {
        Phase::Idle => idle_lines(),
        Phase::Loading => vec![Line::from(Span::styled(
            "Fetching balances…",
            Style::default().fg(Color::LightYellow),
        ))],
        Phase::Error(message) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::LightRed),
        ))],
        Phase::Success(wallet) => wallet_lines(wallet, &app.tokens),
    };

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Result "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn idle_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Type an address or ENS name and press Enter.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Ctrl-U clears the input, Esc quits.",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn label(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::DarkGray))
}

pub(crate) fn wallet_lines(wallet: &WalletInfo, tokens: &[TokenSpec]) -> Vec<Line<'static>> {
    let address = wallet.checksum_address();
    let mut lines = vec![
        Line::from(vec![label("Address  "), Span::raw(address.clone())]),
        Line::from(vec![label("Short    "), Span::raw(shorten_address(&address))]),
    ];
    if let Some(name) = wallet.ens_name.as_ref() {
        lines.push(Line::from(vec![
            label("ENS      "),
            Span::styled(name.clone(), Style::default().fg(Color::LightGreen)),
        ]));
    }
    lines.push(Line::from(vec![
        label("Balance  "),
        Span::styled(
            format!("{} ETH", format_balance(&wallet.balance)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));

    if !wallet.token_balances.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Tokens",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )));
        for (idx, token) in wallet.token_balances.iter().enumerate() {
            lines.push(token_line(token, tokens.get(idx)));
        }
    }
    lines
}

fn token_line(token: &TokenBalanceResult, spec: Option<&TokenSpec>) -> Line<'static> {
    let symbol = token
        .symbol
        .clone()
        .or_else(|| spec.map(|s| s.name.clone()))
        .unwrap_or_else(|| shorten_address(&token.address));

    let balance = match (&token.balance, token.error) {
        (Some(balance), false) => Span::raw(format_balance(balance)),
        _ => Span::styled("Error", Style::default().fg(Color::LightRed)),
    };

    Line::from(vec![
        Span::raw(format!("{:<8}", symbol)),
        balance,
        Span::styled(
            format!("  {}", shorten_address(&token.address)),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let line = if let Some((text, level)) = app.status_text() {
        let color = match level {
            StatusLevel::Info => Color::LightGreen,
            StatusLevel::Warn => Color::LightYellow,
            StatusLevel::Error => Color::LightRed,
        };
        Line::from(vec![
            Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
            Span::styled(text.to_string(), Style::default().fg(color)),
        ])
    } else {
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" check  "),
            Span::styled("Ctrl-U", Style::default().fg(Color::Yellow)),
            Span::raw(" clear  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ])
    };
    f.render_widget(Paragraph::new(line), area);
}
