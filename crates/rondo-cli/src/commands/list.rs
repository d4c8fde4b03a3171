use anyhow::Result;

use rondo_core::{storage, AppConfig};

pub fn run(config: &AppConfig) -> Result<()> {
    let path = config.tasks_path();
    let tasks = storage::load_tasks(&path);

    if tasks.is_empty() {
        println!("No tasks.");
        println!("\nTo add one, run:");
        println!("  rondo add <title>");
        return Ok(());
    }

    println!("Tasks ({}):\n", tasks.len());
    for task in &tasks {
        let marker = if task.done { "●" } else { "○" };
        println!("  {} {}", marker, task.title);
    }

    Ok(())
}
