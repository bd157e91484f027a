use crate::core::duration::{calendar_duration, format_duration};
use crate::models::Experience;

/// Returned when a candidate has no experience rows at all
pub const NO_EXPERIENCE_SENTINEL: &str = "No work experience recorded.";

const UNTITLED_ROLE: &str = "Untitled role";
const UNKNOWN_COMPANY: &str = "Unknown company";

/// Render a candidate's employment history as a chronological narrative.
///
/// Entries are sorted by start date, most recent first. Records with an
/// absent or unparseable start date are kept (not dropped) and sort as
/// if they started today, floating to the top. One paragraph per role,
/// blank line between paragraphs.
pub fn format_resume(experiences: &[Experience]) -> String {
    if experiences.is_empty() {
        return NO_EXPERIENCE_SENTINEL.to_string();
    }

    let mut sorted: Vec<&Experience> = experiences.iter().collect();
    sorted.sort_by(|a, b| {
        b.start_date
            .resolve_or_today()
            .cmp(&a.start_date.resolve_or_today())
    });

    let entries: Vec<String> = sorted.iter().map(|exp| format_entry(exp)).collect();
    entries.join("\n\n")
}

fn format_entry(exp: &Experience) -> String {
    let start = exp.start_date.resolve_or_today();
    let end = exp.end_date.resolve();

    let (years, months) = calendar_duration(start, end);
    let duration = format_duration(years, months);

    let start_str = start.format("%b %Y").to_string();
    let end_str = match end {
        Some(date) => date.format("%b %Y").to_string(),
        None => "Present".to_string(),
    };

    let role = exp.role_title.as_deref().unwrap_or(UNTITLED_ROLE);
    let company = exp.company_name.as_deref().unwrap_or(UNKNOWN_COMPANY);

    let mut entry = format!(
        "{} at {} ({} - {}, {})",
        role, company, start_str, end_str, duration
    );

    if let Some(description) = exp.description.as_deref().filter(|d| !d.is_empty()) {
        entry.push_str("\n  ");
        entry.push_str(description);
    }

    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawDate;

    fn experience(role: &str, company: &str, start: &str, end: Option<&str>) -> Experience {
        Experience {
            role_title: Some(role.to_string()),
            company_name: Some(company.to_string()),
            start_date: RawDate::Text(start.to_string()),
            end_date: RawDate::from_text(end.map(String::from)),
            description: None,
        }
    }

    #[test]
    fn test_empty_history_returns_sentinel() {
        let resume = format_resume(&[]);
        assert_eq!(resume, NO_EXPERIENCE_SENTINEL);
        assert!(!resume.is_empty());
    }

    #[test]
    fn test_sorted_most_recent_first() {
        let experiences = vec![
            experience("Engineer", "OldCo", "2015-02-01", Some("2018-06-30")),
            experience("Senior Engineer", "NewCo", "2021-01-10", None),
            experience("Mid Engineer", "MidCo", "2018-07-01", Some("2020-12-31")),
        ];

        let resume = format_resume(&experiences);
        let new_pos = resume.find("NewCo").unwrap();
        let mid_pos = resume.find("MidCo").unwrap();
        let old_pos = resume.find("OldCo").unwrap();
        assert!(new_pos < mid_pos && mid_pos < old_pos);
    }

    #[test]
    fn test_malformed_start_date_kept_and_floats_to_top() {
        let experiences = vec![
            experience("Engineer", "SolidCo", "2012-03-01", Some("2016-01-01")),
            experience("Consultant", "VagueCo", "sometime in the 90s", Some("2001-01-01")),
        ];

        let resume = format_resume(&experiences);
        assert!(resume.contains("VagueCo"), "malformed entry must not be dropped");
        // Unparseable start resolves to today, so it sorts first
        assert!(resume.find("VagueCo").unwrap() < resume.find("SolidCo").unwrap());
    }

    #[test]
    fn test_ongoing_role_renders_present() {
        let experiences = vec![experience("PM", "NowCo", "2022-05-01", None)];
        let resume = format_resume(&experiences);
        assert!(resume.contains("- Present"));
        assert!(resume.starts_with("PM at NowCo (May 2022"));
    }

    #[test]
    fn test_description_included_on_following_line() {
        let mut exp = experience("PM", "DescCo", "2020-01-01", Some("2021-01-01"));
        exp.description = Some("Owned the checkout funnel.".to_string());
        let resume = format_resume(&[exp]);
        assert!(resume.contains("\n  Owned the checkout funnel."));
    }

    #[test]
    fn test_missing_role_and_company_use_placeholders() {
        let exp = Experience {
            role_title: None,
            company_name: None,
            start_date: RawDate::Text("2019-01-01".to_string()),
            end_date: RawDate::Text("2020-01-01".to_string()),
            description: None,
        };
        let resume = format_resume(&[exp]);
        assert!(resume.contains(UNTITLED_ROLE));
        assert!(resume.contains(UNKNOWN_COMPANY));
    }
}
