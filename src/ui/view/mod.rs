//! 视图层模块
//!
//! 包含主渲染入口；散点图和控制栏由各自组件绘制

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::components::{CONTROLS, SCATTERPLOT};
use super::state::App;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(10),   // 散点图
            Constraint::Length(3), // 控制栏
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_panel(frame, app, SCATTERPLOT, chunks[1]);
    render_panel(frame, app, CONTROLS, chunks[2]);
    render_help(frame, app, chunks[3]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        "🌍 预期寿命与生育率  |  {}  |  {} 个国家, {} 条记录",
        app.source.display(),
        app.dataset.country_count(),
        app.dataset.len()
    );
    let title = Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_panel(frame: &mut Frame, app: &mut App, name: &str, area: Rect) {
    if let Some(panel) = app.player.broadcaster_mut().get_mut(name) {
        panel.render(frame, area);
    }
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = "[space] 播放/暂停  [h/l] 上一年/下一年  [Home/End] 首/末年  [q] 退出";

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
