use crate::cli::commands::{api_client, open_log, record};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::ViewLogic;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::render::{render_calendar, render_legend};
use crate::ui::messages::{field, header, info};
use crate::utils::colors::{color_for_percentage, paint};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::View {
        student_id,
        from,
        to,
        period,
        export,
        file,
        force,
    } = cmd
    {
        let range = date::resolve_range(
            from.as_deref(),
            to.as_deref(),
            period.as_deref(),
            date::today(),
        )?;

        let api = api_client(cfg)?;
        let out = ViewLogic::fetch(&api, student_id, &range)?;

        header(format!("Attendance for {student_id}"));
        println!(
            "{} → {} ({} days)\n",
            range.start().format("%Y-%m-%d"),
            range.end().format("%Y-%m-%d"),
            range.len_days()
        );

        if out.records == 0 {
            info("No attendance records in this range.");
        }

        print!("{}", render_calendar(&out.matrix, cfg.color));
        println!("\n{}", render_legend(cfg.color));

        let s = &out.summary;
        header("Summary");
        field("Present days", s.present);
        field("Absent days", s.absent);
        field("Total days", s.total);
        field(
            "Attendance",
            paint(
                &s.percentage_label(),
                color_for_percentage(s.percentage, s.total),
                cfg.color,
            ),
        );

        if let (Some(fmt), Some(path)) = (export, file) {
            ExportLogic::export(&out.matrix, *fmt, path, *force)?;
        }

        let pool = open_log(cfg);
        record(
            pool.as_ref(),
            "view",
            student_id,
            &format!(
                "{}..{} present={} absent={}",
                range.start().format("%Y-%m-%d"),
                range.end().format("%Y-%m-%d"),
                s.present,
                s.absent
            ),
        );
        if let (Some(fmt), Some(path)) = (export, file) {
            record(pool.as_ref(), "export", fmt.as_str(), path);
        }
    }

    Ok(())
}
