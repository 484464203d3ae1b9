use crate::cli::commands::api_client;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Students { class_id } = cmd {
        let api = api_client(cfg)?;
        let mut students = api.list_students(*class_id)?;

        if students.is_empty() {
            info(format!("No students enrolled in class {class_id}."));
            return Ok(());
        }

        students.sort_by_key(|s| s.roll_number);

        header(format!("Students of class {class_id}"));
        println!("{:>4}  NAME", "ROLL");
        for s in &students {
            println!("{:>4}  {}", s.roll_number, s.name);
        }
    }

    Ok(())
}
