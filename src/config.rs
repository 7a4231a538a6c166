use crate::color::{resolve_color_name, HsvColor, RgbColor};
use crate::command::{normalize_switch_command, Command};
use crate::error::{check_range, LightError};
use crate::light::{Target, DEFAULT_URL};
use clap::{Parser, Subcommand};
use std::time::Duration;

/// Control a Domoticz color light.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// json.htm endpoint of the hub
    #[arg(long, env = "DOMOTICZ_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Device idx of the light
    #[arg(long, env = "DOMOTICZ_IDX", default_value_t = 4)]
    pub idx: u32,

    #[arg(short, long, env = "DOMOTICZ_USERNAME", default_value = "admin")]
    pub username: String,

    #[arg(
        short,
        long,
        env = "DOMOTICZ_PASSWORD",
        default_value = "domoticz",
        hide_env_values = true
    )]
    pub password: String,

    /// Request timeout in seconds
    #[arg(long, env = "DOMOTICZ_TIMEOUT", default_value_t = 5)]
    pub timeout: u64,

    /// Run a single action instead of the interactive menu
    #[command(subcommand)]
    pub action: Option<Action>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Action {
    /// Turn the light on or off
    Switch { command: String },

    /// Set the color from hue, saturation and brightness
    Hsv {
        hue: i64,
        saturation: i64,
        #[arg(default_value_t = 100)]
        brightness: i64,
    },

    /// Set the color from red, green and blue channels
    Rgb {
        red: i64,
        green: i64,
        blue: i64,
        #[arg(default_value_t = 100)]
        brightness: i64,
    },

    /// Set a named color
    Color {
        name: String,
        #[arg(default_value_t = 100)]
        brightness: i64,
    },
}

impl Args {
    pub fn target(&self) -> Target {
        Target {
            url: self.url.clone(),
            idx: self.idx,
            username: self.username.clone(),
            password: self.password.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

impl Action {
    /// Validates the arguments into a command for the hub.
    pub fn command(&self) -> Result<Command, LightError> {
        match self {
            Action::Switch { command } => Ok(Command::Switch(normalize_switch_command(command)?)),
            Action::Hsv {
                hue,
                saturation,
                brightness,
            } => Ok(Command::Color(HsvColor::new(*hue, *saturation, *brightness)?)),
            Action::Rgb {
                red,
                green,
                blue,
                brightness,
            } => {
                let brightness = check_range("brightness", *brightness, 0, 100)? as u8;
                Ok(Command::Color(RgbColor::new(*red, *green, *blue)?.to_hsv(brightness)))
            }
            Action::Color { name, brightness } => {
                let rgb = resolve_color_name(name)?;
                let brightness = check_range("brightness", *brightness, 0, 100)? as u8;
                Ok(Command::Color(rgb.to_hsv(brightness)))
            }
        }
    }
}
