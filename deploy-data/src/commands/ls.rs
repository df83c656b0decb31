use anyhow::Result;
use deploy_data::environments::ENVIRONMENTS;

pub fn list() -> Result<()> {
    for e in ENVIRONMENTS {
        let layout = e.layout();
        println!(
            "{}\ttemplate={}\tproxy={}",
            e.name(),
            layout.template,
            layout.proxy_spec.is_some()
        );
    }
    Ok(())
}
