use anyhow::Result;

use rondo_core::{storage, AppConfig};

pub fn run(config: &AppConfig) -> Result<()> {
    let path = config.tasks_path();
    let mut tasks = storage::load_tasks(&path);

    let before = tasks.len();
    tasks.retain(|t| !t.done);
    let removed = before - tasks.len();

    if removed == 0 {
        println!("No completed tasks to clear.");
        return Ok(());
    }

    storage::save_tasks(&path, &tasks)?;
    println!("Cleared {} completed task(s).", removed);
    Ok(())
}
