pub mod color;
pub mod command;
pub mod config;
pub mod error;
pub mod light;
pub mod prompt;

pub use color::{rgb_to_hsv, resolve_color_name, HsvColor, RgbColor};
pub use command::{
    build_color_command_params, build_switch_params, normalize_switch_command, Command, ParamMap,
    SwitchCommand,
};
pub use error::LightError;
pub use light::{DomoticzLight, HubResponse, Target};
