use crate::cli::commands::api_client;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let api = api_client(cfg)?;
    let classes = api.list_classes()?;

    if classes.is_empty() {
        info("No classes found.");
        return Ok(());
    }

    header("Classes");
    let id_w = classes
        .iter()
        .map(|c| c.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    println!("{:>id_w$}  NAME", "ID", id_w = id_w);
    for c in &classes {
        println!("{:>id_w$}  {}", c.id, c.name, id_w = id_w);
    }

    Ok(())
}
