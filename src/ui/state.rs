//! App 状态定义 (Model)

use std::path::PathBuf;
use std::rc::Rc;

use tracing::debug;

use crate::config::Config;
use crate::error::StateError;
use crate::models::Dataset;
use crate::playback::{AnimationClock, AppState, Player, UpdateBroadcaster, Year, YearRange};

use super::components::{CONTROLS, Controls, Panel, SCATTERPLOT, Scatterplot};

/// 应用状态
pub struct App {
    pub player: Player<dyn Panel>,
    pub dataset: Rc<Dataset>,
    pub source: PathBuf,
    pub message: Option<String>,
}

impl App {
    /// 创建新的应用实例，注册散点图和控制栏
    pub fn new(config: &Config, dataset: Dataset) -> Result<Self, StateError> {
        let range = YearRange::new(config.start_year, config.end_year)?;
        let state = AppState::new(range);
        let dataset = Rc::new(dataset);

        let scatterplot = Scatterplot::new(Rc::clone(&dataset), state.selected_year());
        let controls = Controls::new(
            range,
            state.selected_year(),
            state.is_animating(),
            config.label_delay(),
        )
        .with_disabled(dataset.is_empty());

        let mut broadcaster: UpdateBroadcaster<dyn Panel> = UpdateBroadcaster::new();
        broadcaster.register(SCATTERPLOT, Box::new(scatterplot));
        broadcaster.register(CONTROLS, Box::new(controls));
        debug!(panels = ?broadcaster.names().collect::<Vec<_>>(), "panels ready");

        let player = Player::new(
            state,
            AnimationClock::new(config.transition_interval()),
            broadcaster,
        );

        Ok(Self {
            player,
            dataset,
            source: config.data_path.clone(),
            message: None,
        })
    }

    pub fn selected_year(&self) -> Year {
        self.player.state().selected_year()
    }

    /// 是否需要事件循环继续按帧驱动
    pub fn wants_frames(&self) -> bool {
        self.player.is_frame_scheduled()
            || self
                .player
                .broadcaster()
                .iter()
                .any(|(_, panel)| !panel.is_settled())
    }
}
