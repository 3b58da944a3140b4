//! 输入事件映射 (Input -> Action)
//!
//! 键盘按键直接映射；鼠标点击交给组件做命中判断

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

use super::actions::Action;
use super::state::App;

/// 获取按键对应的 Action
pub fn get_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') => Some(Action::ToggleAnimation),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::StepForward),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::StepBackward),
        KeyCode::Home => Some(Action::JumpToFirst),
        KeyCode::End => Some(Action::JumpToLast),
        _ => None,
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_action(key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

/// 处理鼠标事件，返回是否退出
pub fn handle_mouse_event(app: &mut App, event: MouseEvent) -> bool {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return false;
    }
    match app.click(event.column, event.row) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
