use chrono::{DateTime, Utc};
use chrono_humanize::HumanTime;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use owo_colors::OwoColorize;
use taskq_core::engine::TaskStats;
use taskq_core::models::{Task, TaskPriority, Timestamp};

pub fn display_tasks(tasks: &[&Task], now: DateTime<Utc>) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    println!("{}", task_table(tasks, now));
}

pub fn task_table(tasks: &[&Task], now: DateTime<Utc>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Status", "Priority", "Due Date", "Tags", "Repeats"]);

    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(task.id));

        let mut title_cell = Cell::new(&task.title);
        if task.completed {
            title_cell = title_cell
                .add_attribute(Attribute::CrossedOut)
                .fg(Color::DarkGrey);
        } else {
            title_cell = match task.priority {
                Some(TaskPriority::Urgent) => title_cell.fg(Color::Red).add_attribute(Attribute::Bold),
                Some(TaskPriority::High) => title_cell.fg(Color::Red),
                Some(TaskPriority::Medium) => title_cell.fg(Color::Yellow),
                Some(TaskPriority::Low) => title_cell.fg(Color::Green),
                Some(TaskPriority::Unrecognized) | None => title_cell,
            };
        }
        row.add_cell(title_cell);

        row.add_cell(if task.completed {
            Cell::new("Completed").fg(Color::Green)
        } else {
            Cell::new("Pending")
        });

        row.add_cell(Cell::new(
            task.priority.map_or_else(|| "None".to_string(), |p| p.to_string()),
        ));

        row.add_cell(due_date_cell(task, now));

        row.add_cell(Cell::new(if task.tags.is_empty() {
            "None".to_string()
        } else {
            task.tags.join(", ")
        }));

        row.add_cell(Cell::new(
            task.recurrence().map_or_else(|| "-".to_string(), |p| p.to_string()),
        ));
        table.add_row(row);
    }

    table
}

fn due_date_cell(task: &Task, now: DateTime<Utc>) -> Cell {
    match &task.due_date {
        None => Cell::new("None"),
        Some(Timestamp::Malformed(raw)) => Cell::new(format!("{} (invalid)", raw)).fg(Color::DarkGrey),
        Some(Timestamp::Valid(due_at)) => {
            let due_text = format!(
                "{} ({})",
                due_at.format("%Y-%m-%d %H:%M"),
                HumanTime::from(*due_at - now)
            );
            if task.completed {
                Cell::new(due_text)
            } else if *due_at < now {
                Cell::new(due_text).fg(Color::Red) // Overdue
            } else if due_at.date_naive() == now.date_naive() {
                Cell::new(due_text).fg(Color::Yellow) // Due today
            } else {
                Cell::new(due_text)
            }
        }
    }
}

pub fn display_stats(stats: &TaskStats) {
    println!(
        "{} total, {} completed, {} pending, {} overdue, {} high priority ({}% done)",
        stats.total.bold(),
        stats.completed.green(),
        stats.pending.yellow(),
        stats.overdue.red(),
        stats.high_priority.magenta(),
        stats.completion_percent(),
    );
}
