use crate::*;

pub fn handle_collect_command(
    cli: &Cli,
    settings: &Settings,
    console: &Console,
    client: &GraphClient,
) -> anyhow::Result<bool> {
    let Commands::Collect = &cli.command else {
        return Ok(false);
    };

    console.info("Collecting namespaces...\n");
    let catalog = collect_catalog(client, console)?;
    let out = settings.output_dir.join(COLLECTED_FILE);
    write_catalog(&out, &catalog)?;
    tracing::info!(
        namespaces = catalog.len(),
        actions = catalog.values().map(Vec::len).sum::<usize>(),
        "catalog collected"
    );
    console.info(&format!("\nSaved to {}", out.display()));

    Ok(true)
}
