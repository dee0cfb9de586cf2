//! 单次最短路查询
//!
//! 从命令行描述一个小网络，运行 Dijkstra 或 Bellman-Ford 并打印路径。

use clap::{Parser, ValueEnum};
use netpath_rs::net::{Algorithm, NetError, Network, NodeId};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Dijkstra,
    BellmanFord,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Dijkstra => Algorithm::Dijkstra,
            AlgorithmArg::BellmanFord => Algorithm::BellmanFord,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "shortest-path", about = "最短路查询：节点数 + 链路列表 + 起终点")]
struct Args {
    /// 节点数（下标 0..nodes）
    #[arg(long)]
    nodes: usize,
    /// 链路，格式 from:to:latency_ms，可重复
    #[arg(long = "link", value_parser = parse_link)]
    links: Vec<(usize, usize, i64)>,
    /// 只添加 from -> to 的有向半链路（允许负权）
    #[arg(long)]
    directed: bool,
    #[arg(long)]
    from: usize,
    #[arg(long)]
    to: usize,
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
    algorithm: AlgorithmArg,
}

fn parse_link(raw: &str) -> Result<(usize, usize, i64), String> {
    let parts = raw.split(':').collect::<Vec<_>>();
    let [from, to, weight] = parts[..] else {
        return Err(format!("expected from:to:latency, got {raw:?}"));
    };
    let from = from.trim().parse::<usize>().map_err(|e| format!("bad from {from:?}: {e}"))?;
    let to = to.trim().parse::<usize>().map_err(|e| format!("bad to {to:?}: {e}"))?;
    let weight = weight
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("bad latency {weight:?}: {e}"))?;
    Ok((from, to, weight))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut net = Network::new();
    for _ in 0..args.nodes {
        net.add_node();
    }
    for &(from, to, weight) in &args.links {
        let (from, to) = (NodeId(from), NodeId(to));
        if args.directed {
            net.try_add_directed_edge(from, to, weight)?;
        } else {
            net.try_add_edge(from, to, weight)?;
        }
    }

    let algorithm = Algorithm::from(args.algorithm);
    match net.try_shortest_path(NodeId(args.from), NodeId(args.to), algorithm) {
        Ok(res) => {
            let path = res
                .path
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(",");
            println!("algorithm={} distance={} path={}", res.algorithm, res.distance, path);
            for e in &res.edges {
                println!("edge {} -> {} ({}ms)", e.from, e.to, e.weight);
            }
        }
        Err(NetError::NegativeCycle { affected }) => {
            let affected = affected
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(",");
            println!("negative cycle detected affected={affected}");
        }
        Err(err) => println!("no path: {err}"),
    }
    Ok(())
}
