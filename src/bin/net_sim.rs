//! 场景回放
//!
//! 读取 scenario.json，构建网络并依次执行其中的操作，打印每步结果。

use clap::Parser;
use netpath_rs::scenario::{ScenarioSpec, StepOutcome, run_scenario};
use netpath_rs::viz::VizSnapshot;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "net-sim", about = "Replay a scenario.json against the network path engine")]
struct Args {
    /// Path to scenario.json
    #[arg(long)]
    scenario: PathBuf,

    /// Write the step-by-step report as JSON
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// Write a render snapshot (nodes, links, last path) as JSON
    #[arg(long)]
    viz_json: Option<PathBuf>,

    /// Print the final adjacency listing
    #[arg(long)]
    show: bool,
}

fn print_outcome(o: &StepOutcome) {
    let kind = o.step.kind_name();
    match (&o.path, &o.node, &o.error) {
        (Some(path), _, _) => println!("step {} {} ok {}", o.index, kind, path),
        (None, Some(node), _) => println!("step {} {} ok node={}", o.index, kind, node),
        (None, None, Some(err)) => println!("step {} {} failed: {}", o.index, kind, err),
        (None, None, None) => println!("step {} {} ok", o.index, kind),
    }
}

fn main() -> ExitCode {
    // 日志写到 stderr，stdout 只留结果
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "场景执行失败");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let spec = ScenarioSpec::load(&args.scenario)?;
    info!(scenario = %args.scenario.display(), steps = spec.steps.len(), "加载场景");

    let (net, report) = run_scenario(&spec)?;

    for outcome in &report.outcomes {
        print_outcome(outcome);
    }
    if args.show {
        print!("{net}");
    }

    if let Some(path) = &args.report_json {
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        info!(path = %path.display(), "写出报告");
    }
    if let Some(path) = &args.viz_json {
        VizSnapshot::capture(&net, report.last_path()).write_json(path)?;
        info!(path = %path.display(), "写出可视化快照");
    }

    println!(
        "done nodes={} links={} sent_packets={} received_packets={}",
        report.stats.nodes, report.stats.links, report.stats.sent_packets, report.stats.received_packets
    );
    Ok(())
}
