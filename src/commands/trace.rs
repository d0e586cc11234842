use crate::*;

pub fn handle_trace_commands(cli: &Cli, mode: Mode) -> anyhow::Result<bool> {
    match mode {
        Mode::Trace => {
            let config = trace_config(cli)?;
            let summary = run_trace(&config, !cli.json)?;
            print_summary(cli.json, summary, |s| {
                format!(
                    "processed={} succeeded={} failed={}",
                    s.processed, s.succeeded, s.failed
                )
            })?;
        }
        Mode::TraceCount => {
            let threads = resolve_threads(cli.threads);
            let counts = aggregate_traces(cli.input()?, threads)?;
            print_lines(cli.json, &sorted_entries(&counts), |e| {
                format!("{}: {}", e.rule, e.count)
            })?;
        }
        Mode::MakeRegression => {
            let config = RegressionConfig {
                input_root: cli.input()?.to_path_buf(),
                trace_root: cli.aux()?.to_path_buf(),
                output_root: cli.output_dir()?.to_path_buf(),
                threads: resolve_threads(cli.threads),
            };
            if !cli.json {
                println!("Executing with {} threads", config.threads);
            }
            let summary = build_regressions(&config)?;
            print_summary(cli.json, summary, |s| {
                format!("built {} regression cases", s.cases)
            })?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn trace_config(cli: &Cli) -> anyhow::Result<TraceConfig> {
    Ok(TraceConfig {
        input_root: cli.input()?.to_path_buf(),
        output_root: cli.output_dir()?.to_path_buf(),
        extension: cli.extension.trim_start_matches('.').to_string(),
        solver: cli.cvc5.clone(),
        timeout_ms: cli.timeout,
        threads: resolve_threads(cli.threads),
        retry_failed: cli.retry_failed,
    })
}

/// Plans, runs and tallies one batch. `banner` prints the pre-run lines.
pub fn run_trace(config: &TraceConfig, banner: bool) -> anyhow::Result<TraceSummary> {
    let plan = plan_work(
        &config.input_root,
        &config.output_root,
        &config.extension,
        config.retry_failed,
    )?;
    let solver = SolverCommand::new(&config.solver, config.timeout_ms);
    if banner {
        println!("{}/{} input files skipped", plan.skipped(), plan.total);
        println!("Executing with {} threads", config.threads);
        println!("{}", solver.display());
    }

    let outcomes = dispatch(&plan.items, config.threads, |item| {
        Ok(run_item(&solver, item)?)
    })?;

    let mut summary = TraceSummary {
        total: plan.total,
        skipped: plan.skipped(),
        threads: config.threads,
        ..TraceSummary::default()
    };
    for outcome in &outcomes {
        summary.record(outcome);
    }
    tracing::info!(
        processed = summary.processed,
        failed = summary.failed,
        "trace batch finished"
    );
    Ok(summary)
}
