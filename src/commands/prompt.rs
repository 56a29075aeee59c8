//! Prints the built prompt for inspection without touching the API.

use anyhow::Result;
use clap::Args;
use rppgen_core::form::RppRequest;
use rppgen_core::prompt::build_prompt;

use crate::commands::FormArgs;

#[derive(Args, Debug, Default)]
pub struct PromptArgs {
    #[command(flatten)]
    pub form: FormArgs,
}

pub fn run(args: PromptArgs) -> Result<()> {
    let mut request = RppRequest::default();
    args.form.apply(&mut request)?;
    request.validate()?;
    print!("{}", build_prompt(&request));
    Ok(())
}
