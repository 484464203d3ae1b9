use crate::cli::commands::{api_client, open_log, record};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::mark::{MarkLogic, MarkRequest};
use crate::core::share::{format_report, whatsapp_url};
use crate::errors::{AppError, AppResult};
use crate::models::roster::{class_name, student_name};
use crate::ui::messages::{field, header, info, success};
use crate::utils::date;

/// Mark absentees and print the confirmation summary.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark {
        class_id,
        date: date_arg,
        session,
        absent,
        marked_by,
        share,
    } = cmd
    {
        //
        // 1. Resolve inputs (CLI first, config second)
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let session = match session {
            Some(s) => *s,
            None => cfg.session()?,
        };

        let req = MarkRequest {
            class_id: *class_id,
            date: d,
            session,
            absentees: absent.clone(),
            marked_by: marked_by.unwrap_or(cfg.marked_by),
        };

        //
        // 2. Submit
        //
        let api = api_client(cfg)?;
        let out = MarkLogic::apply(&api, req)?;
        let sub = &out.submission;

        let rolls = sub
            .absentees
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(",");
        record(
            open_log(cfg).as_ref(),
            "mark",
            &format!("class {}", sub.class_id),
            &format!(
                "{} {} absentees: {}",
                sub.date.format("%Y-%m-%d"),
                sub.session.as_str(),
                rolls
            ),
        );

        //
        // 3. Confirmation
        //
        success("Attendance submitted!");
        if let Some(msg) = &out.ack.message {
            info(msg);
        }

        header("Summary");
        field("Class", class_name(&out.classes, sub.class_id));
        field("Date", sub.date.format("%Y-%m-%d"));
        field("Session", sub.session.as_str().to_uppercase());
        field("Absentees", format!("{} students", sub.absentees.len()));

        for roll in &sub.absentees {
            println!("    {}. {}", roll, student_name(&out.students, *roll));
        }

        if *share {
            let report = format_report(sub, &out.classes, &out.students);
            header("Share");
            println!("{report}\n");
            println!("{}", whatsapp_url(&report));
        }
    }

    Ok(())
}
