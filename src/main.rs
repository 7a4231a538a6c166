use clap::Parser;
use domoticz_light::config::Args;
use domoticz_light::prompt::Prompter;
use domoticz_light::{DomoticzLight, LightError};
use std::error::Error;
use std::io;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let args = Args::parse();
    let light = DomoticzLight::new(args.target())?;

    if let Some(action) = &args.action {
        let reply = light.execute(&action.command()?).await?;
        println!("Status code: {}", reply.status_code);
        println!("{}", reply.body);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    loop {
        let result = match prompter.read_command() {
            Ok(command) => light.execute(&command).await,
            Err(e) => Err(e),
        };

        match &result {
            Err(e) if !e.is_recoverable() => break,
            _ => prompter.report(&result)?,
        }

        match prompter.again() {
            Ok(true) => continue,
            Ok(false) | Err(LightError::InputClosed) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
