use crate::config::Config;
use schemars::schema::RootSchema;
use schemars::schema_for;
use std::io::Write;

/// JSON Schema for `pubcheck.yaml`
pub fn config_schema() -> RootSchema {
    schema_for!(Config)
}

pub fn execute() -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &config_schema())?;
    writeln!(stdout)?;
    Ok(())
}
