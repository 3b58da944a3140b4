//! 通用 UI 组件
//!
//! 按钮、标签、进度条等小部件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{LineGauge, Paragraph},
};

use crate::playback::Year;

/// [组件] 播放/暂停按钮
pub fn render_toggle_button(frame: &mut Frame, area: Rect, playing: bool, disabled: bool) {
    let (text, color) = if playing {
        ("⏸ 暂停", Color::Yellow)
    } else {
        ("▶ 播放", Color::Green)
    };

    let style = if disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(color)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    };

    let button = Paragraph::new(format!(" {text} "))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(button, area);
}

/// [组件] 年份标签
pub fn render_year_label(frame: &mut Frame, area: Rect, year: Year) {
    let label = Paragraph::new(year.to_string())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(label, area);
}

/// [组件] 年份进度条，两端标注首末年份
pub fn render_year_progress(frame: &mut Frame, area: Rect, ratio: f64, first: Year, last: Year) {
    let gauge = LineGauge::default()
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{first}–{last}"))
        .filled_style(Style::default().fg(Color::Cyan))
        .unfilled_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(gauge, area);
}
