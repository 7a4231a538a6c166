use crate::color::HsvColor;
use crate::error::LightError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Query parameters for one request to `json.htm`.
pub type ParamMap = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwitchCommand {
    On,
    Off,
}

impl SwitchCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwitchCommand::On => "On",
            SwitchCommand::Off => "Off",
        }
    }
}

impl fmt::Display for SwitchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwitchCommand {
    type Err = LightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_switch_command(s)
    }
}

/// Capitalizes the first character and lowercases the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn normalize_switch_command(text: &str) -> Result<SwitchCommand, LightError> {
    match capitalize(text.trim()).as_str() {
        "On" => Ok(SwitchCommand::On),
        "Off" => Ok(SwitchCommand::Off),
        _ => Err(LightError::InvalidSwitchCommand(text.trim().to_string())),
    }
}

/// A validated request for the light, ready to be turned into parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Switch(SwitchCommand),
    Color(HsvColor),
}

impl Command {
    pub fn params(&self, idx: u32) -> ParamMap {
        match self {
            Command::Switch(cmd) => build_switch_params(idx, *cmd),
            Command::Color(hsv) => color_params(idx, hsv),
        }
    }
}

fn base_params(idx: u32, param: &str) -> ParamMap {
    let mut params = ParamMap::new();
    params.insert("type", "command".to_string());
    params.insert("param", param.to_string());
    params.insert("idx", idx.to_string());
    params
}

pub fn build_switch_params(idx: u32, command: SwitchCommand) -> ParamMap {
    let mut params = base_params(idx, "switchlight");
    params.insert("switchcmd", command.to_string());
    params
}

pub fn build_color_command_params(
    idx: u32,
    hue: i64,
    saturation: i64,
    brightness: i64,
) -> Result<ParamMap, LightError> {
    let hsv = HsvColor::new(hue, saturation, brightness)?;
    Ok(color_params(idx, &hsv))
}

fn color_params(idx: u32, hsv: &HsvColor) -> ParamMap {
    let mut params = base_params(idx, "setcolbrightnessvalue");
    params.insert("hue", hsv.hue.to_string());
    params.insert("brightness", hsv.brightness.to_string());
    params.insert("saturation", hsv.saturation.to_string());
    params.insert("iswhite", "false".to_string());
    params
}
