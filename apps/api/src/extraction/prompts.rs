// Extraction prompt templates. Placeholders are replaced verbatim.

pub const RESUME_EXTRACT_PROMPT: &str = r#"Extract the following resume into a JSON object.

TARGET ROLE (may be empty): {target_role}

RESUME TEXT:
{resume_text}

OUTPUT SCHEMA (return exactly this structure):
{
  "name": "string" | null,
  "email": "string" | null,
  "skills": ["string"],
  "experience": [{"role": "string", "years": number}],
  "total_experience_years": number,
  "projects": ["project title"],
  "education": ["degree and institution"],
  "sections": ["section header exactly as written"],
  "writing_issues": ["short description of one writing problem"]
}

RULES:
1. "total_experience_years" counts only roles relevant to the target role when one is given; otherwise it is the sum of all roles.
2. "sections" lists the resume's own section headings, verbatim.
3. "writing_issues" lists concrete problems: spelling or grammar errors, vague bullets without outcomes, inconsistent tense or formatting. Use [] if there are none.
4. Return ONLY the JSON object."#;

pub const JOB_EXTRACT_PROMPT: &str = r#"Extract the requirements of the following job description into a JSON object.

JOB DESCRIPTION:
{jd_text}

OUTPUT SCHEMA (return exactly this structure):
{
  "required_skills": ["string"],
  "min_experience_years": number,
  "preferred_skills": ["string"],
  "role_responsibilities": ["string"]
}

RULES:
1. "required_skills" holds only skills the description marks as mandatory.
2. "min_experience_years" is 0 when no minimum is stated.
3. Return ONLY the JSON object."#;
