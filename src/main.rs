mod config;
mod error;
mod logging;
mod models;
mod playback;
mod storage;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::storage::load_dataset;
use crate::ui::{Action, App, render};

fn main() -> Result<(), AppError> {
    logging::init_tracing();

    let config = Config::load()?;
    let dataset = load_dataset(&config.data_path)?;

    // 创建应用状态
    let mut app = App::new(&config, dataset)?;

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    app.resize(size.width, size.height);

    // 开始播放
    if config.autoplay {
        app.dispatch(Action::ToggleAnimation);
    }

    // 主循环
    let result = run_app(&mut terminal, &mut app, config.frame_interval());

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(year = app.selected_year(), "exiting");
    result
}

/// 事件循环
///
/// 有动画或延迟效果时按帧间隔轮询输入，否则阻塞等待输入。
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    frame_interval: Duration,
) -> Result<(), AppError> {
    let origin = Instant::now();
    loop {
        app.frame(origin.elapsed());
        terminal.draw(|f| render(f, app))?;

        if app.wants_frames() && !event::poll(frame_interval)? {
            continue;
        }

        let quit = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                ui::handle_key_event(app, key.code)
            }
            Event::Mouse(mouse) => ui::handle_mouse_event(app, mouse),
            Event::Resize(width, height) => {
                app.resize(width, height);
                false
            }
            _ => false,
        };
        if quit {
            break;
        }
    }
    Ok(())
}
