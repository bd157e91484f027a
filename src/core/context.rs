use crate::core::requirements::JobRequirements;
use crate::models::{Candidate, Job};

const NOT_SPECIFIED: &str = "Not specified";

/// Build the job context block fed to the scoring model.
///
/// Pure formatting: fixed field labels and placeholder text for absent
/// values, no business logic. The required level comes from the job's
/// own level column, falling back to the requirements payload.
pub fn build_job_context(job: &Job, requirements: &JobRequirements) -> String {
    let seniority = job
        .job_level
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(&requirements.seniority);
    let seniority = if seniority.is_empty() {
        "Not specified - infer from title and description"
    } else {
        seniority
    };

    let industries = if requirements.industries.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        requirements.industries.join(", ")
    };

    format!(
        "JOB TITLE: {title}\n\
         REQUIRED LEVEL (career matrix): {seniority}\n\
         INDUSTRIES: {industries}\n\
         \n\
         DESCRIPTION:\n\
         {description}\n\
         \n\
         NON-NEGOTIABLE REQUIREMENTS:\n\
         {non_negotiables}\n\
         \n\
         DESIRED TRAJECTORY:\n\
         {trajectory}\n\
         \n\
         REQUIRES TECHNICAL BACKGROUND: {technical}",
        title = job.job_title,
        seniority = seniority,
        industries = industries,
        description = text_or_placeholder(job.description.as_deref(), "No description"),
        non_negotiables = text_or_placeholder(Some(&requirements.non_negotiables_text), NOT_SPECIFIED),
        trajectory = text_or_placeholder(Some(&requirements.desired_trajectory_text), NOT_SPECIFIED),
        technical = if requirements.needs_technical_background { "Yes" } else { "No" },
    )
}

/// Build the candidate context block fed to the scoring model.
pub fn build_candidate_context(candidate: &Candidate, resume: &str) -> String {
    let level = match candidate.seniority.as_deref().filter(|s| !s.is_empty()) {
        Some(level) => level,
        None => "Not specified - infer from current title and experience",
    };

    format!(
        "NAME: {name}\n\
         CURRENT TITLE: {title}\n\
         LEVEL (career matrix): {level}\n\
         INDUSTRY: {industry}\n\
         \n\
         WORK EXPERIENCE (most recent first):\n\
         {resume}",
        name = candidate.full_name,
        title = text_or_placeholder(candidate.current_job_title.as_deref(), NOT_SPECIFIED),
        level = level,
        industry = text_or_placeholder(candidate.industry.as_deref(), NOT_SPECIFIED),
        resume = resume,
    )
}

fn text_or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn job(level: Option<&str>) -> Job {
        Job {
            id: Uuid::new_v4(),
            job_title: "Senior Product Manager".to_string(),
            description: Some("Own the payments roadmap".to_string()),
            job_level: level.map(String::from),
            requirements_json: None,
        }
    }

    #[test]
    fn test_job_context_has_fixed_labels() {
        let requirements = JobRequirements {
            industries: vec!["fintech".to_string(), "payments".to_string()],
            needs_technical_background: true,
            ..Default::default()
        };
        let context = build_job_context(&job(Some("PM3")), &requirements);

        assert!(context.contains("JOB TITLE: Senior Product Manager"));
        assert!(context.contains("REQUIRED LEVEL (career matrix): PM3"));
        assert!(context.contains("INDUSTRIES: fintech, payments"));
        assert!(context.contains("REQUIRES TECHNICAL BACKGROUND: Yes"));
    }

    #[test]
    fn test_job_level_falls_back_to_requirements_seniority() {
        let requirements = JobRequirements {
            seniority: "PM4".to_string(),
            ..Default::default()
        };
        let context = build_job_context(&job(None), &requirements);
        assert!(context.contains("REQUIRED LEVEL (career matrix): PM4"));
    }

    #[test]
    fn test_missing_fields_render_placeholders() {
        let context = build_job_context(&job(None), &JobRequirements::default());
        assert!(context.contains("REQUIRED LEVEL (career matrix): Not specified"));
        assert!(context.contains("INDUSTRIES: Not specified"));
        assert!(context.contains("NON-NEGOTIABLE REQUIREMENTS:\nNot specified"));
        assert!(context.contains("REQUIRES TECHNICAL BACKGROUND: No"));
    }

    #[test]
    fn test_candidate_context() {
        let candidate = Candidate {
            id: Uuid::new_v4(),
            full_name: "Ana Torres".to_string(),
            current_job_title: Some("Product Manager".to_string()),
            industry: None,
            seniority: Some("PM2".to_string()),
        };
        let context = build_candidate_context(&candidate, "PM at X (Jan 2020 - Present, 2 years)");

        assert!(context.contains("NAME: Ana Torres"));
        assert!(context.contains("CURRENT TITLE: Product Manager"));
        assert!(context.contains("LEVEL (career matrix): PM2"));
        assert!(context.contains("INDUSTRY: Not specified"));
        assert!(context.contains("WORK EXPERIENCE (most recent first):\nPM at X"));
    }
}
