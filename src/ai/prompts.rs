//! Prompt template for the resume analysis request

pub const SYSTEM_INSTRUCTION: &str =
    "You are an expert resume analyzer. Always respond with valid JSON only, no additional text.";

const ANALYSIS_TEMPLATE: &str = r#"You are an expert resume analyzer and career coach. Analyze the following resume for a {role_name} position.

Resume:
{resume}

Required Skills for {role_name}:
{skills}

Provide a detailed analysis in the following JSON format:
{
  "matchPercentage": <number 0-100>,
  "atsScore": <number 0-100>,
  "matchedSkills": [<skills found in the resume, from the required list>],
  "missingSkills": [<skills not found in the resume, from the required list>],
  "suggestions": [<5 specific, actionable suggestions to improve the resume>],
  "detailedFeedback": "<2-3 paragraph analysis of strengths and areas for improvement>"
}

Important:
- Be thorough in identifying skills, including variations and related technologies
- Consider context and experience level when matching skills
- The ATS score should consider formatting, keywords, and structure
- The match percentage should reflect how well the candidate fits the role"#;

/// Substitute the resume, role name, and skill list into the analysis
/// prompt.
pub fn render_analysis(resume_text: &str, role_name: &str, skills: &[String]) -> String {
    ANALYSIS_TEMPLATE
        .replace("{role_name}", role_name)
        .replace("{resume}", resume_text)
        .replace("{skills}", &skills.join(", "))
}
