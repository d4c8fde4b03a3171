use anyhow::{bail, Result};

use rondo_core::{storage, AppConfig, Task};

pub fn run(config: &AppConfig, title: &str) -> Result<()> {
    if title.is_empty() {
        bail!("task title may not be empty");
    }

    let path = config.tasks_path();
    let mut tasks = storage::load_tasks(&path);
    tasks.push(Task::new(title));
    storage::save_tasks(&path, &tasks)?;

    println!("Added: {}", title);
    Ok(())
}
