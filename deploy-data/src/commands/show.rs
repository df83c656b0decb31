use anyhow::Result;

use crate::args::{Cli, SpecArgs};

pub fn show(cli: &Cli, args: &SpecArgs) -> Result<()> {
    let (_, data) = super::load(cli, args)?;
    println!("{data}");
    Ok(())
}
