use anyhow::{Context, Result};
use std::io;
use task_scheduler::cli::{
    Args, BatchConfig, ConfigDiscovery, ExecutionMode, InteractiveConfig, SchedulerConfig,
    Session, TaskLoader,
};
use task_scheduler::{Deadline, Scheduler, Task};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();
    let mode = match args.mode() {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let ExecutionMode::ShowConfig = mode {
        ConfigDiscovery::show_discovery_info();
        return Ok(());
    }

    let config = ConfigDiscovery::load(args.config.as_deref())?;
    init_logging(&config);
    info!("Starting task scheduler");

    match mode {
        ExecutionMode::Interactive(interactive) => run_interactive_mode(interactive, config),
        ExecutionMode::Batch(batch) => run_batch_mode(batch),
        ExecutionMode::Demo => run_demo(),
        ExecutionMode::ShowConfig => Ok(()),
    }
}

fn init_logging(config: &SchedulerConfig) {
    // RUST_LOG takes precedence over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_interactive_mode(interactive: InteractiveConfig, config: SchedulerConfig) -> Result<()> {
    info!("Running in interactive mode");
    if interactive.verbose {
        if let Some(path) = &interactive.config_override {
            println!("Using configuration {:?}", path);
        }
    }

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config);
    session.run()?;

    println!("Goodbye!");
    Ok(())
}

fn run_batch_mode(batch: BatchConfig) -> Result<()> {
    info!("Loading task list from: {:?}", batch.task_file);
    let tasks = TaskLoader::load_tasks(&batch.task_file)
        .with_context(|| format!("loading {}", batch.task_file.display()))?;

    if batch.verbose {
        println!("Loaded {} tasks", tasks.len());
    }

    let mut scheduler = Scheduler::new();
    for task in tasks {
        scheduler.add_task(task);
    }
    println!("{}", scheduler.display_tasks());

    if batch.dry_run {
        println!("Dry run mode - tasks were queued but not executed");
        return Ok(());
    }

    for task in scheduler.drain() {
        println!("Executing task: {}", task);
    }
    println!("No tasks to execute");
    Ok(())
}

fn run_demo() -> Result<()> {
    let mut scheduler = Scheduler::new();
    scheduler.add_task(Task::new(
        "Finish project",
        3,
        Some(Deadline::from_ymd(2023, 5, 1)?),
    ));
    let revision = scheduler.add_task(Task::new(
        "Exam revision",
        2,
        Some(Deadline::from_ymd(2023, 7, 1)?),
    ));
    let groceries = scheduler.add_task(Task::new("Buy groceries", 1, None));
    println!("{}", scheduler.display_tasks());

    execute_and_print(&mut scheduler);
    println!("{}", scheduler.display_tasks());

    let outcome = scheduler.reorder_task(groceries, 4, Some(Deadline::from_ymd(2023, 5, 10)?));
    println!("Reorder: {:?}", outcome);
    println!("{}", scheduler.display_tasks());

    let outcome = scheduler.update_task_description(revision, "Do homework");
    println!("Update description: {:?}", outcome);
    println!("{}", scheduler.display_tasks());
    println!("Size: {}", scheduler.size());

    while execute_and_print(&mut scheduler) {}

    scheduler.clear_tasks();
    println!("{}", scheduler.display_tasks());
    Ok(())
}

fn execute_and_print(scheduler: &mut Scheduler) -> bool {
    match scheduler.execute_task() {
        Some(task) => {
            println!("Executing task: {}", task);
            true
        }
        None => {
            println!("No tasks to execute");
            false
        }
    }
}
