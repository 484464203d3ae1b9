use crate::db::DbPool;
use crate::db::log::{LogEntry, load_log};
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 60;

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"))
}

pub fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

/// ANSI colour for each operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "mark" => Colour::Green,
        "view" => Colour::Cyan,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        other if other.starts_with("migrate") => Colour::Purple,
        _ => Colour::White,
    }
}

/// "op (target)" truncated to `MAX_OP_WIDTH` visible chars, op coloured.
fn format_op_target(e: &LogEntry) -> String {
    let color = color_for_operation(&e.operation);

    let visible = if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    };

    let truncated = if visible.chars().count() > MAX_OP_WIDTH {
        let mut s = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>();
        s.push_str("...");
        s
    } else {
        visible
    };

    match truncated.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Format log rows as aligned lines: `id: date | op (target) => message`.
    pub fn format_lines(entries: &[LogEntry]) -> Vec<String> {
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        let cells: Vec<String> = entries.iter().map(format_op_target).collect();
        let op_w = cells
            .iter()
            .map(|c| strip_ansi(c).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        entries
            .iter()
            .zip(cells)
            .map(|(e, cell)| {
                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&cell).chars().count()));
                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    e.id,
                    e.date,
                    cell,
                    padding,
                    e.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print_log(pool: &DbPool, operation: Option<&str>) -> AppResult<()> {
        let entries = load_log(&pool.conn, operation)?;

        if entries.is_empty() {
            info("The operation log is empty.");
            return Ok(());
        }

        println!("📜 Operation log:\n");
        for line in Self::format_lines(&entries) {
            println!("{line}");
        }

        Ok(())
    }
}
