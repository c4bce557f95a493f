use std::{fmt::Display, io};

use chrono::TimeZone;
use gronk_data::{JobRecord, Snapshot};

pub const TABLE_WIDTH: usize = 108;
pub const CLEAR_SCREEN: &str = "\x1b[2J";
const FOOTER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

fn rule(out: &mut impl io::Write) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))
}

fn header(out: &mut impl io::Write, machine: &str) -> io::Result<()> {
    rule(out)?;
    writeln!(out, "|    {:<101} |", format!("{machine} job data"))?;
    rule(out)?;
    writeln!(
        out,
        "| {:<7}| {:<16}| {:<9}| {:<9}| {:<20}| {:<10}| {:<8}| {:<12}|",
        "Job Id", "Project", "Run Time", "Walltime", "Location", "Queue", "Nodes", "Mode"
    )?;
    rule(out)
}

/// Only the upstream's pre-formatted fields are shown, nothing is computed from the raw ones.
fn job_row(out: &mut impl io::Write, job: &JobRecord) -> io::Result<()> {
    writeln!(
        out,
        "| {:<7}| {:<16}| {:<9}| {:<9}| {:<20}| {:<10}| {:<8}| {:<12}|",
        job.jobid, job.project, job.runtimef, job.walltimef, job.locationf, job.queue, job.nodes, job.mode
    )
}

fn footer<Tz>(out: &mut impl io::Write, snapshot: &Snapshot, tz: &Tz) -> io::Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let updated = match snapshot.updated_at() {
        Some(updated) => updated.with_timezone(tz).format(FOOTER_TIME_FORMAT).to_string(),
        None => snapshot.updated.to_string(),
    };
    rule(out)?;
    writeln!(out, "| Last updated: {updated:<90} |")?;
    rule(out)
}

/// Writes one full frame: clear screen, header, running jobs (longest walltime first), footer.
///
/// Queued jobs and reservations are not part of the view.
pub fn render<Tz>(out: &mut impl io::Write, machine: &str, snapshot: &mut Snapshot, tz: &Tz) -> io::Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    write!(out, "{CLEAR_SCREEN}")?;
    header(out, machine)?;
    snapshot.sort_running_by_walltime();
    for job in &snapshot.running {
        job_row(out, job)?;
    }
    footer(out, snapshot, tz)
}

#[allow(non_snake_case)]
#[cfg(test)]
mod test {
    use chrono::{FixedOffset, Local, Utc};
    use gronk_data::ReservationRecord;

    use super::*;

    fn demo_job() -> JobRecord {
        JobRecord {
            jobid: 42,
            project: "demo".to_owned(),
            runtimef: "01:00:00".to_owned(),
            walltimef: "02:00:00".to_owned(),
            locationf: "R1-M0".to_owned(),
            queue: "default".to_owned(),
            nodes: 4,
            mode: "script".to_owned(),
            ..Default::default()
        }
    }

    fn render_to_string<Tz>(machine: &str, snapshot: &mut Snapshot, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut buf = Vec::new();
        render(&mut buf, machine, snapshot, tz).unwrap();
        String::from_utf8(buf).unwrap()
    }

    /// Lines of the table itself, without the leading clear-screen sequence.
    fn table_lines(output: &str) -> Vec<&str> {
        output.strip_prefix(CLEAR_SCREEN).unwrap().lines().collect()
    }

    #[test]
    fn job_row__columns() {
        let mut buf = Vec::new();
        job_row(&mut buf, &demo_job()).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "| 42     | demo            | 01:00:00 | 02:00:00 | R1-M0               | default   | 4       | script      |\n"
        );
    }

    #[test]
    fn job_row__long_values_are_not_truncated() {
        let job = JobRecord {
            project: "a_project_name_longer_than_sixteen".to_owned(),
            ..demo_job()
        };
        let mut buf = Vec::new();
        job_row(&mut buf, &job).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("| a_project_name_longer_than_sixteen| "));
    }

    #[test]
    fn render__starts_with_clear_screen() {
        let output = render_to_string("mira", &mut Snapshot::default(), &Utc);
        assert!(output.starts_with("\x1b[2J"));
    }

    #[test]
    fn render__fixed_width() {
        let mut snapshot = Snapshot {
            running: vec![demo_job()],
            ..Default::default()
        };
        let output = render_to_string("mira", &mut snapshot, &Utc);

        for line in table_lines(&output) {
            assert_eq!(line.chars().count(), TABLE_WIDTH, "line `{line}`");
        }
    }

    #[test]
    fn render__header() {
        let output = render_to_string("mira", &mut Snapshot::default(), &Utc);
        let lines = table_lines(&output);

        assert_eq!(lines[0], "-".repeat(TABLE_WIDTH));
        assert!(lines[1].starts_with("|    mira job data "));
        assert_eq!(
            lines[3],
            "| Job Id | Project         | Run Time | Walltime | Location            | Queue     | Nodes   | Mode        |"
        );
    }

    #[test]
    fn render__no_running_jobs() {
        let output = render_to_string("cetus", &mut Snapshot::default(), &Utc);
        let lines = table_lines(&output);

        // 5 header lines, 3 footer lines, no body
        assert_eq!(lines.len(), 8);
        assert!(lines[6].starts_with("| Last updated: "));
    }

    #[test]
    fn render__epoch_footer() {
        let output = render_to_string("mira", &mut Snapshot::default(), &Utc);
        let footer = format!("| Last updated: {:<90} |", "1970-01-01 00:00:00 +0000");
        assert!(table_lines(&output).contains(&footer.as_str()));
    }

    #[test]
    fn render__footer_in_given_timezone() {
        let snapshot = &mut Snapshot {
            updated: 1_398_974_400,
            ..Default::default()
        };
        let central = FixedOffset::west_opt(5 * 3600).unwrap();
        let output = render_to_string("mira", snapshot, &central);
        let footer = format!("| Last updated: {:<90} |", "2014-05-01 15:00:00 -0500");
        assert!(table_lines(&output).contains(&footer.as_str()));
        // the offset shows up once, not again as a zone name
        assert!(!output.contains("-05:00"));
    }

    #[test]
    fn render__local_footer_matches_chrono() {
        let output = render_to_string("mira", &mut Snapshot::default(), &Local);
        let expected = Local.timestamp_opt(0, 0).unwrap().format(FOOTER_TIME_FORMAT).to_string();
        assert!(output.contains(&format!("| Last updated: {expected}")));
    }

    #[test]
    fn render__unrepresentable_timestamp() {
        let snapshot = &mut Snapshot {
            updated: i64::MAX,
            ..Default::default()
        };
        let output = render_to_string("mira", snapshot, &Utc);
        assert!(output.contains(&format!("| Last updated: {}", i64::MAX)));
    }

    #[test]
    fn render__sorted_by_walltime() {
        let job = |jobid, walltime| JobRecord {
            jobid,
            walltime,
            ..demo_job()
        };
        let mut snapshot = Snapshot {
            running: vec![job(1, 1800), job(2, 43200), job(3, 3600)],
            ..Default::default()
        };
        let output = render_to_string("mira", &mut snapshot, &Utc);

        let ids: Vec<_> = table_lines(&output)[5..8]
            .iter()
            .map(|line| line[2..9].trim().to_owned())
            .collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn render__queued_and_reservations_hidden() {
        let mut snapshot = Snapshot {
            running: vec![demo_job()],
            queued: vec![JobRecord {
                project: "waiting_project".to_owned(),
                ..demo_job()
            }],
            reservation: vec![ReservationRecord {
                name: "maintenance".to_owned(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let output = render_to_string("mira", &mut snapshot, &Utc);

        assert!(output.contains("| demo "));
        assert!(!output.contains("waiting_project"));
        assert!(!output.contains("maintenance"));
        assert_eq!(table_lines(&output).len(), 9);
    }
}
