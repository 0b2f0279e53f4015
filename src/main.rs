use aggregator_csv::conf::Config;
use aggregator_csv::core::{CliArgs, setup_logging};
use aggregator_csv::gqi::{
    AggregatorCsvSource, ArgumentValues, DataSource, JOB_NAME, MAX_DAYS_TO_SEARCH, RESULTS_FOLDER,
};
use clap::Parser;
use log::info;
use serde_json::json;

fn main() -> anyhow::Result<()> {
    setup_logging();
    let args = CliArgs::parse();
    info!(args = args; "Aggregator CSV source started.");

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let mut values = ArgumentValues::new();
    if let Some(root) = args.root.or(config.source.root) {
        values.insert(RESULTS_FOLDER.name, root);
    }
    if let Some(job) = args.job.or(config.source.job) {
        values.insert(JOB_NAME.name, job);
    }
    values.insert(
        MAX_DAYS_TO_SEARCH.name,
        args.max_days
            .unwrap_or_else(|| config.source.max_days_back.to_string()),
    );

    let mut source = AggregatorCsvSource::new();
    source.on_init();
    source.on_arguments_processed(&values)?;

    let columns = source.columns();
    let mut pages = Vec::new();
    loop {
        let page = source.next_page();
        let has_next_page = page.has_next_page;
        pages.push(page);
        if !has_next_page {
            break;
        }
    }
    source.on_destroy();

    let output = json!({
        "name": source.name(),
        "columns": columns,
        "pages": pages,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
