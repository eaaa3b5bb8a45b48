//! Interactive scheduling session
//!
//! Reads one command per line, prompting for each field the command needs.
//! Tasks are referred to by a user-chosen name kept in a [`TaskRegistry`].
//! Bad input aborts the current command and leaves the queue untouched.

use crate::cli::config::SchedulerConfig;
use crate::task::{
    Scheduler, SchedulerError, Task, TaskRegistry, TaskReport, TaskUpdate, parse_deadline,
    parse_priority,
};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Execute,
    Reorder,
    Show,
    Size,
    UpdateDescription,
    Clear,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.to_lowercase().as_str() {
            "add" => Ok(Command::Add),
            "execute" => Ok(Command::Execute),
            "reorder" => Ok(Command::Reorder),
            "show" => Ok(Command::Show),
            "size" => Ok(Command::Size),
            "update description" | "update" => Ok(Command::UpdateDescription),
            "clear" => Ok(Command::Clear),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command '{other}'")),
        }
    }
}

/// A scheduler plus its name registry, driven by line input
pub struct Session<R, W> {
    input: R,
    output: W,
    scheduler: Scheduler,
    registry: TaskRegistry,
    config: SchedulerConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SchedulerConfig) -> Self {
        Self {
            input,
            output,
            scheduler: Scheduler::new(),
            registry: TaskRegistry::new(),
            config,
        }
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Process commands until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Welcome to your task scheduler, enter 'help' to list all commands"
        )?;

        while let Some(line) = self.prompt("Please enter a command: ")? {
            if line.is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    debug!("Running command {:?}", command);
                    self.dispatch(command)?;
                }
                Err(e) => writeln!(self.output, "{e}, please try again")?,
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Add => self.add(),
            Command::Execute => self.execute(),
            Command::Reorder => self.reorder(),
            Command::Show => self.show(),
            Command::Size => {
                writeln!(self.output, "{}", self.scheduler.size())?;
                Ok(())
            }
            Command::UpdateDescription => self.update_description(),
            Command::Clear => {
                self.scheduler.clear_tasks();
                self.registry.clear();
                writeln!(self.output, "All tasks cleared")?;
                Ok(())
            }
            Command::Help => {
                writeln!(self.output, "{HELP}")?;
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }

    fn add(&mut self) -> Result<()> {
        let Some(description) = self.prompt("Task description: ")? else {
            return Ok(());
        };
        let Some(priority) = self.prompt("Task priority (integer): ")? else {
            return Ok(());
        };
        let Some(deadline) = self.prompt("Task deadline (year,month,day or 'none'): ")? else {
            return Ok(());
        };
        let Some(name) = self.prompt("Name for this task: ")? else {
            return Ok(());
        };

        let parsed = self
            .parse_priority_or_default(&priority)
            .and_then(|priority| Ok((priority, parse_deadline(&deadline)?)));
        let (priority, deadline) = match parsed {
            Ok(values) => values,
            Err(e) => return self.report_invalid(e),
        };

        let task_id = self
            .scheduler
            .add_task(Task::new(description, priority, deadline));

        if name.is_empty() {
            writeln!(self.output, "Successfully added (unnamed)")?;
        } else {
            if self.registry.register(name.clone(), task_id).is_some() {
                writeln!(self.output, "Name '{name}' now refers to the new task")?;
            }
            writeln!(self.output, "Successfully added")?;
        }
        Ok(())
    }

    fn execute(&mut self) -> Result<()> {
        match self.scheduler.execute_task() {
            Some(task) => writeln!(self.output, "Executing task: {task}")?,
            None => writeln!(self.output, "No tasks to execute")?,
        }
        Ok(())
    }

    fn reorder(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Task name: ")? else {
            return Ok(());
        };
        let Some(task_id) = self.registry.resolve(&name) else {
            return self.report_unknown_name(&name);
        };
        let Some(priority) = self.prompt("New task priority (integer): ")? else {
            return Ok(());
        };
        let Some(deadline) = self.prompt("New task deadline (year,month,day or 'none'): ")?
        else {
            return Ok(());
        };

        match self
            .scheduler
            .reorder_task_from_input(task_id, &priority, &deadline)
        {
            Ok(outcome) => self.report_update(&name, outcome, "Successfully reordered"),
            Err(e) => self.report_invalid(e),
        }
    }

    fn update_description(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Task name: ")? else {
            return Ok(());
        };
        let Some(task_id) = self.registry.resolve(&name) else {
            return self.report_unknown_name(&name);
        };
        let Some(description) = self.prompt("New task description: ")? else {
            return Ok(());
        };

        let outcome = self.scheduler.update_task_description(task_id, description);
        self.report_update(&name, outcome, "Successfully updated")
    }

    fn show(&mut self) -> Result<()> {
        let report = self.scheduler.display_tasks();
        if !self.config.display.show_ids {
            writeln!(self.output, "{report}")?;
            return Ok(());
        }

        match report {
            TaskReport::Empty => writeln!(self.output, "No tasks")?,
            TaskReport::Current(tasks) => {
                writeln!(self.output, "Current tasks:")?;
                for task in tasks {
                    writeln!(self.output, "[{}] {}", task.id(), task)?;
                }
            }
        }
        Ok(())
    }

    fn parse_priority_or_default(&self, input: &str) -> Result<i64, SchedulerError> {
        match self.config.input.default_priority {
            Some(default) if input.trim().is_empty() => Ok(default),
            _ => parse_priority(input),
        }
    }

    fn report_update(&mut self, name: &str, outcome: TaskUpdate, success: &str) -> Result<()> {
        match outcome {
            TaskUpdate::Repositioned { .. } => writeln!(self.output, "{success}")?,
            TaskUpdate::NotFound { .. } => {
                writeln!(self.output, "Task '{name}' is no longer in the queue")?
            }
        }
        Ok(())
    }

    fn report_unknown_name(&mut self, name: &str) -> Result<()> {
        writeln!(
            self.output,
            "Sorry, there is no task named '{name}', please try again"
        )?;
        Ok(())
    }

    fn report_invalid(&mut self, error: SchedulerError) -> Result<()> {
        warn!("Rejected input: {}", error);
        writeln!(self.output, "{error}, nothing was changed")?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

const HELP: &str = "\
Commands:
  add                 Add a task (description, priority, deadline, name)
  execute             Execute the task with the highest priority
  reorder             Change the priority and deadline of a named task
  show                Show all tasks in schedule order
  size                Show the number of queued tasks
  update description  Change the description of a named task
  clear               Remove all tasks
  help                Show this help message
  quit                Exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parsing() {
        assert_eq!("add".parse::<Command>().unwrap(), Command::Add);
        assert_eq!(" EXECUTE ".parse::<Command>().unwrap(), Command::Execute);
        assert_eq!(
            "update   description".parse::<Command>().unwrap(),
            Command::UpdateDescription
        );
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
        assert!("launch".parse::<Command>().is_err());
    }

    #[test]
    fn test_blank_priority_uses_configured_default() {
        let mut config = SchedulerConfig::default();
        config.input.default_priority = Some(7);
        let input = "add\nDefaulted\n\nnone\nd\nquit\n";

        let mut session = Session::new(input.as_bytes(), Vec::new(), config);
        session.run().unwrap();

        assert_eq!(session.scheduler().peek_task().unwrap().priority(), 7);
    }

    #[test]
    fn test_blank_priority_without_default_is_rejected() {
        let input = "add\nNo priority\n\nnone\nd\nquit\n";

        let mut session = Session::new(input.as_bytes(), Vec::new(), SchedulerConfig::default());
        session.run().unwrap();

        assert_eq!(session.scheduler().size(), 0);
        assert!(session.registry().is_empty());
    }
}
