//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): App 结构体，持有播放控制器和数据集
//! - View (view/): 布局与通用绘制组件
//! - Intent (actions.rs): 用户交互转化为明确的语义化 Action
//! - components/: 注册到播放控制器的散点图和控制栏

pub mod actions;
pub mod components;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use actions::Action;
pub use input::{handle_key_event, handle_mouse_event};
pub use state::App;
pub use view::render;
