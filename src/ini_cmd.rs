//! Ini command: query or normalise a pluto.ini file.

use anyhow::{Context, Result, anyhow};
use tracing::info;

use pluto_io::{KEY_WIDTH, read_ini, write_ini};

use crate::cli::IniArgs;

/// Run the ini command.
pub fn run(args: IniArgs) -> Result<()> {
    let doc = read_ini(&args.input)
        .with_context(|| format!("failed to read configuration: {}", args.input.display()))?;

    match (&args.section, &args.key) {
        (Some(section), Some(key)) => {
            let value = doc
                .get(section, key)
                .ok_or_else(|| anyhow!("no key '{key}' in section [{section}]"))?;
            println!("{value}");
        }
        (Some(section), None) => {
            let keys = doc
                .section(section)
                .ok_or_else(|| anyhow!("no section [{section}]"))?;
            for (key, value) in keys {
                println!("{key:<KEY_WIDTH$}{value}");
            }
        }
        _ => print!("{doc}"),
    }

    if let Some(output) = &args.output {
        write_ini(output, &doc)
            .with_context(|| format!("failed to write configuration: {}", output.display()))?;
        info!(path = %output.display(), "configuration rewritten");
    }

    Ok(())
}
