use crate::color::{resolve_color_name, HsvColor, RgbColor};
use crate::command::{Command, ParamMap, SwitchCommand};
use crate::error::LightError;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_URL: &str = "http://127.0.0.1:8080/json.htm";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the light lives and how to reach it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub url: String,
    pub idx: u32,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
}

impl Default for Target {
    fn default() -> Self {
        Target {
            url: DEFAULT_URL.to_string(),
            idx: 4,
            username: "admin".to_string(),
            password: "domoticz".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// The hub's reply: HTTP status code and the raw JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubResponse {
    pub status_code: u16,
    pub body: Value,
}

impl HubResponse {
    /// The hub-level `status` field, `"OK"` or `"ERR"`.
    pub fn hub_status(&self) -> Option<&str> {
        self.body.get("status").and_then(Value::as_str)
    }

    pub fn is_ok(&self) -> bool {
        self.hub_status() == Some("OK")
    }
}

#[derive(Debug)]
pub struct DomoticzLight {
    target: Target,

    client: reqwest::Client,
}

impl DomoticzLight {
    pub fn new(target: Target) -> Result<DomoticzLight, LightError> {
        let client = reqwest::Client::builder().timeout(target.timeout).build()?;

        Ok(DomoticzLight { target, client })
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub async fn switch(&self, command: SwitchCommand) -> Result<HubResponse, LightError> {
        self.execute(&Command::Switch(command)).await
    }

    pub async fn set_color_hsv(&self, hsv: HsvColor) -> Result<HubResponse, LightError> {
        self.execute(&Command::Color(hsv)).await
    }

    pub async fn set_color_rgb(
        &self,
        rgb: RgbColor,
        brightness: u8,
    ) -> Result<HubResponse, LightError> {
        self.set_color_hsv(rgb.to_hsv(brightness)).await
    }

    pub async fn set_color_by_name(
        &self,
        name: &str,
        brightness: u8,
    ) -> Result<HubResponse, LightError> {
        let rgb = resolve_color_name(name)?;
        self.set_color_rgb(rgb, brightness).await
    }

    pub async fn execute(&self, command: &Command) -> Result<HubResponse, LightError> {
        self.send(&command.params(self.target.idx)).await
    }

    async fn send(&self, params: &ParamMap) -> Result<HubResponse, LightError> {
        debug!("GET {} {:?}", self.target.url, params);

        let resp = self
            .client
            .get(&self.target.url)
            .basic_auth(&self.target.username, Some(&self.target.password))
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        let status_code = resp.status().as_u16();
        let body = resp.json::<Value>().await?;
        let reply = HubResponse { status_code, body };

        info!("idx {} replied {}", self.target.idx, status_code);
        if !reply.is_ok() {
            warn!("hub did not accept command: {}", reply.body);
        }

        Ok(reply)
    }
}
