use crate::*;

pub fn handle_check_command(
    cli: &Cli,
    settings: &Settings,
    console: &Console,
    client: &GraphClient,
) -> anyhow::Result<bool> {
    let Commands::Check {
        collected,
        namespace,
        action,
        scope,
        valid,
    } = &cli.command
    else {
        return Ok(false);
    };

    let collected_path = collected
        .clone()
        .unwrap_or_else(|| settings.data_dir.join(COLLECTED_FILE));
    let catalog = read_catalog(&collected_path)?;
    let table = DecisionTable::load(&settings.data_dir.join(BASELINE_FILE))?;
    tracing::debug!(baseline_rows = table.len(), "baseline loaded");
    let scopes = resolve_scopes(client, scope, console)?;

    let filter = CheckFilter {
        namespace: namespace.clone(),
        action: action.clone(),
        valid_only: *valid,
    };
    let plans = plan_checks(&catalog, &table, &filter);
    let report = run_checks(client, &plans, &scopes, &table, console);

    let out = settings.output_dir.join(RESULTS_FILE);
    write_results(&out, &report.rows)?;
    console.info(&format!(
        "\nChecked {} pairs in {} requests, {} differ from baseline, {} failed chunks",
        report.rows.len(),
        report.submitted_chunks,
        report.mismatches(),
        report.failed_chunks
    ));
    console.info(&format!("Saved to {}", out.display()));

    Ok(true)
}
