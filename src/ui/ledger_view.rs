//! Terminal rendering of an attendance ledger.

use crate::core::time_math::format_minutes;
use crate::models::AttendanceLedger;
use crate::utils::colors::{
    RESET, color_for_weekday, colorize_break, colorize_optional, colorize_total,
};
use crate::utils::table::{Column, Table};
use crate::utils::{format_clock, format_date_ja, weekday_ja};

pub fn render_ledger(ledger: &AttendanceLedger, color: bool) -> String {
    let mut table = Table::new(vec![
        Column::new("#", 3),
        Column::new("日付", 16),
        Column::new("曜", 3),
        Column::new("出勤", 6),
        Column::new("退勤", 6),
        Column::new("休憩", 6),
        Column::new("稼働", 6),
    ]);

    for (i, day) in ledger.days.iter().enumerate() {
        let weekday = weekday_ja(day.date);
        let working = day.working_duration();
        let row = if color {
            let wc = color_for_weekday(weekday, day.is_non_attendance());
            vec![
                (i + 1).to_string(),
                format!("{wc}{}{RESET}", format_date_ja(day.date)),
                format!("{wc}{weekday}{RESET}"),
                colorize_optional(&format_clock(day.clock_in)),
                colorize_optional(&format_clock(day.clock_out)),
                colorize_break(&day.break_duration, day.has_break_notice),
                colorize_optional(&working),
            ]
        } else {
            vec![
                (i + 1).to_string(),
                format_date_ja(day.date),
                weekday.to_string(),
                format_clock(day.clock_in),
                format_clock(day.clock_out),
                day.break_duration.clone(),
                working,
            ]
        };
        table.add_row(row);
    }

    let total = ledger.total_working_minutes();
    let mut out = table.render();
    out.push_str(&format!(
        "\n合計稼働時間: {}  (attended days: {})\n",
        if color {
            colorize_total(total)
        } else {
            format_minutes(total)
        },
        ledger.attended_days()
    ));
    out
}
