use domoticz_light::{DomoticzLight, HsvColor, SwitchCommand, Target};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    //Hub on localhost, light idx 4
    let light = DomoticzLight::new(Target::default())?;

    //Turn on the light
    light.switch(SwitchCommand::On).await?;

    //Start from orange
    let reply = light.set_color_by_name("orange", 60).await?;
    println!("{:?}", reply);

    //Slowly walk around the color wheel
    for hue in (0..=360).step_by(10) {
        light.set_color_hsv(HsvColor::new(hue, 100, 60)?).await?;

        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    }

    //Turn off the light
    let reply = light.switch(SwitchCommand::Off).await?;
    println!("Status code: {}", reply.status_code);

    Ok(())
}
