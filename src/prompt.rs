//! The interactive menu. Reads one field at a time and validates it before
//! anything is sent to the hub.

use crate::color::{resolve_color_name, HsvColor, RgbColor, DEFAULT_BRIGHTNESS};
use crate::command::{normalize_switch_command, Command};
use crate::error::{check_range, LightError};
use crate::light::HubResponse;
use std::io::{BufRead, Write};

const MENU: &str = "Color Control Options:
1. HSV (Hue, Saturation, Value)
2. RGB (Red, Green, Blue)
3. Color by name
4. Turning on and off
";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, label: &str) -> Result<String, LightError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(LightError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn ask_number(
        &mut self,
        label: &str,
        field: &'static str,
        min: i64,
        max: i64,
    ) -> Result<i64, LightError> {
        let answer = self.ask(label)?;
        let value = answer.parse::<i64>().map_err(|_| LightError::InvalidNumber {
            field,
            input: answer.clone(),
        })?;
        check_range(field, value, min, max)
    }

    fn ask_brightness(&mut self) -> Result<u8, LightError> {
        let answer = self.ask("Brightness (0-100): ")?;
        if answer.is_empty() {
            return Ok(DEFAULT_BRIGHTNESS);
        }
        let value = answer.parse::<i64>().map_err(|_| LightError::InvalidNumber {
            field: "brightness",
            input: answer.clone(),
        })?;
        Ok(check_range("brightness", value, 0, 100)? as u8)
    }

    /// Shows the menu and reads the fields for the chosen option.
    pub fn read_command(&mut self) -> Result<Command, LightError> {
        write!(self.output, "{}", MENU)?;
        let choice = self.ask("Choose option (1 - 4): ")?;

        match choice.as_str() {
            "1" => {
                let hue = self.ask_number("Hue (0-360): ", "hue", 0, 360)?;
                let saturation = self.ask_number("Saturation (0-100): ", "saturation", 0, 100)?;
                let brightness = self.ask_brightness()?;
                Ok(Command::Color(HsvColor::new(
                    hue,
                    saturation,
                    i64::from(brightness),
                )?))
            }
            "2" => {
                let red = self.ask_number("Red (0-255): ", "red", 0, 255)?;
                let green = self.ask_number("Green (0-255): ", "green", 0, 255)?;
                let blue = self.ask_number("Blue (0-255): ", "blue", 0, 255)?;
                let brightness = self.ask_brightness()?;
                Ok(Command::Color(
                    RgbColor::new(red, green, blue)?.to_hsv(brightness),
                ))
            }
            "3" => {
                let name = self.ask("Color name (e.g. pink, blue, orange): ")?;
                let rgb = resolve_color_name(&name)?;
                let brightness = self.ask_brightness()?;
                Ok(Command::Color(rgb.to_hsv(brightness)))
            }
            "4" => {
                let text = self.ask("On or Off: ")?;
                Ok(Command::Switch(normalize_switch_command(&text)?))
            }
            _ => Err(LightError::InvalidChoice(choice)),
        }
    }

    pub fn again(&mut self) -> Result<bool, LightError> {
        let answer = self.ask("Do you want to perform another action? (y/n): ")?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    pub fn report(&mut self, result: &Result<HubResponse, LightError>) -> Result<(), LightError> {
        match result {
            Ok(reply) => {
                writeln!(self.output, "Status code: {}", reply.status_code)?;
                writeln!(self.output, "{}", reply.body)?;
            }
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }
}
