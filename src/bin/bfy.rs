use colored::*;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use yens_sssp::graph::{read_graph, DirectedGraph};
use yens_sssp::report::{render, ReportConfig};
use yens_sssp::{BellmanFordYens, ShortestPathAlgorithm, ShortestPathResult};

const DEFAULT_DATA_DIR: &str = "data";

const USAGE: &str = "usage: bfy [--source N] [--detail-limit N] [FILE ...]";

/// Settings for one batch run
#[derive(Debug, Clone, PartialEq)]
struct RunnerConfig {
    source: usize,
    detail_limit: usize,
    files: Vec<PathBuf>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            source: 0,
            detail_limit: ReportConfig::default().detail_limit,
            files: Vec::new(),
        }
    }
}

impl RunnerConfig {
    fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = RunnerConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--source" => config.source = parse_value(&arg, args.next())?,
                "--detail-limit" => config.detail_limit = parse_value(&arg, args.next())?,
                flag if flag.starts_with("--") => return Err(format!("unknown option {}", flag)),
                _ => config.files.push(PathBuf::from(&arg)),
            }
        }

        Ok(config)
    }
}

fn parse_value(flag: &str, value: Option<String>) -> Result<usize, String> {
    let value = value.ok_or_else(|| format!("{} expects a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("{} expects a non-negative integer, got `{}`", flag, value))
}

/// Every `*.txt` file of a directory, sorted by name
fn data_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map_or(false, |ext| ext == "txt"))
        .collect();
    files.sort();
    Ok(files)
}

fn process_file(path: &Path, config: &RunnerConfig, report: &ReportConfig) {
    println!("\n{} {}", "Processing file:".bold(), path.display());

    let graph: DirectedGraph<i64> = match read_graph(path) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{} {}", "Error reading graph from file:".red(), err);
            return;
        }
    };

    let result = match BellmanFordYens::new().compute(&graph, config.source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{} {}", "Error:".red(), err);
            return;
        }
    };

    let text = render(&result, report);
    match result {
        ShortestPathResult::NegativeCycle(_) => println!("{}", text.yellow()),
        ShortestPathResult::ShortestPathTree(_) => println!("{}", text.green()),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let mut config = match RunnerConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            return ExitCode::from(2);
        }
    };

    if config.files.is_empty() {
        match data_files(Path::new(DEFAULT_DATA_DIR)) {
            Ok(files) => config.files = files,
            Err(err) => {
                eprintln!("Cannot list {}: {}\n{}", DEFAULT_DATA_DIR, err, USAGE);
                return ExitCode::FAILURE;
            }
        }
    }

    let report = ReportConfig::default().with_detail_limit(config.detail_limit);
    for file in &config.files {
        process_file(file, &config, &report);
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = RunnerConfig::from_args(args(&[])).unwrap();
        assert_eq!(config, RunnerConfig::default());
        assert_eq!(config.detail_limit, 25);
    }

    #[test]
    fn test_flags_and_files() {
        let config =
            RunnerConfig::from_args(args(&["a.txt", "--source", "3", "--detail-limit", "10", "b.txt"]))
                .unwrap();
        assert_eq!(config.source, 3);
        assert_eq!(config.detail_limit, 10);
        assert_eq!(config.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }

    #[test]
    fn test_bad_flags() {
        assert!(RunnerConfig::from_args(args(&["--source"])).is_err());
        assert!(RunnerConfig::from_args(args(&["--source", "-1"])).is_err());
        assert!(RunnerConfig::from_args(args(&["--verbose"])).is_err());
    }

    #[test]
    fn test_bundled_data_files_are_found() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DATA_DIR);
        let files = data_files(&dir).unwrap();
        assert!(!files.is_empty());
        assert!(files.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
