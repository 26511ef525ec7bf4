use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    time::{Duration, Instant},
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;
use mazegraph::{
    util::load_maze, Graph, ListGraph, MatrixGraph, Maze, MazeGrid, NodeId, NodeMarked,
    PathFinderState, Position, SearchInput, Strategy,
};
use serde::Serialize;

/// Find a way through text mazes with depth-first and breadth-first search
#[derive(Debug, Parser)]
#[command(version)]
struct CliArgs {
    /// Maze files: one row per line, `X` for walls, space for open cells, `S` start, `G` goal
    maze_files: Vec<PathBuf>,

    /// Graph representation the searches run on
    #[arg(long, value_enum, default_value_t = GraphKind::List)]
    graph: GraphKind,

    /// Which searches to run
    #[arg(long, value_enum, default_value_t = StrategyArg::Both)]
    strategy: StrategyArg,

    /// Print one JSON report per maze instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GraphKind {
    List,
    Matrix,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Dfs,
    Bfs,
    Both,
}

impl StrategyArg {
    fn strategies(&self) -> &'static [Strategy] {
        match self {
            StrategyArg::Dfs => &[Strategy::Dfs],
            StrategyArg::Bfs => &[Strategy::Bfs],
            StrategyArg::Both => &[Strategy::Dfs, Strategy::Bfs],
        }
    }
}

#[derive(Debug, Serialize)]
struct MazeReport {
    file: String,
    nodes: usize,
    start: NodeId,
    goal: NodeId,
    start_cell: Position,
    goal_cell: Position,
    searches: Vec<SearchReport>,
}

#[derive(Debug, Serialize)]
struct SearchReport {
    strategy: Strategy,
    found: bool,
    path: Vec<NodeId>,
    visited: usize,
    elapsed_us: u128,
}

fn timed_search<G: Graph>(
    strategy: Strategy,
    input: &SearchInput<G>,
) -> (PathFinderState, Duration) {
    let started = Instant::now();
    let state = strategy.run(input);
    (state, started.elapsed())
}

fn print_maze<S: AsRef<str>>(rows: &[S]) {
    for row in rows {
        println!("{}", row.as_ref());
    }
    println!();
}

fn print_path(strategy: Strategy, state: &PathFinderState) {
    match state {
        PathFinderState::PathFound(result) => {
            println!(
                "{}: path is {} long: {:?}",
                strategy,
                result.path.len(),
                result.path
            )
        }
        _ => println!("{}: No Path found!", strategy),
    }
}

fn report<G: Graph>(
    path: &Path,
    grid: &MazeGrid,
    maze: &Maze,
    args: &CliArgs,
) -> anyhow::Result<()> {
    let input: SearchInput<G> = maze.to_graph();
    info!(
        "{}: {} nodes, start {} goal {}",
        path.display(),
        input.graph.size(),
        input.start,
        input.goal
    );

    if args.json {
        let searches = args
            .strategy
            .strategies()
            .iter()
            .map(|strategy| {
                let (state, elapsed) = timed_search(*strategy, &input);
                let visited = state.visited_count().unwrap_or_default();
                let path = state.into_path();
                SearchReport {
                    strategy: *strategy,
                    found: !path.is_empty(),
                    path,
                    visited,
                    elapsed_us: elapsed.as_micros(),
                }
            })
            .collect();

        let report = MazeReport {
            file: path.display().to_string(),
            nodes: input.graph.size(),
            start: input.start,
            goal: input.goal,
            start_cell: maze.start(),
            goal_cell: maze.goal(),
            searches,
        };
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    print_maze(grid);
    print_maze(&NodeMarked::new(grid, maze).rows());
    println!("StartNode = {} GoalNode = {}", input.start, input.goal);
    for strategy in args.strategy.strategies() {
        let (state, elapsed) = timed_search(*strategy, &input);
        print_path(*strategy, &state);
        println!("Time for {}: {:?}", strategy, elapsed);
    }
    println!();

    Ok(())
}

fn run(path: &Path, args: &CliArgs) -> anyhow::Result<()> {
    let (grid, maze) =
        load_maze(path).with_context(|| format!("Skipping maze {}", path.display()))?;

    match args.graph {
        GraphKind::List => report::<ListGraph>(path, &grid, &maze, args),
        GraphKind::Matrix => report::<MatrixGraph>(path, &grid, &maze, args),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();

    if args.maze_files.is_empty() {
        println!("No maze files given. Pass one or more paths, see --help.");
        return ExitCode::SUCCESS;
    }

    let mut failed = 0;
    for path in &args.maze_files {
        if let Err(e) = run(path, &args) {
            eprintln!("{:#}", e);
            failed += 1;
        }
    }

    if failed > 0 {
        eprintln!("{} of {} mazes failed", failed, args.maze_files.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
