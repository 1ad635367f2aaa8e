// Resume rewrite prompt template.
// The structure is fixed; only the embedded resume text varies.

/// Placeholder replaced by the extracted resume text.
pub const RESUME_TEXT_PLACEHOLDER: &str = "{resume_text}";

/// Rewrite prompt template. Replace `{resume_text}` before sending.
pub const REWRITE_PROMPT_TEMPLATE: &str = r#"Given the following resume text, extract the key details and rewrite it in the following structured format. Don't add any extra fields, only follow the format:

Name of the person whose resume is uploaded, in bold

**Professional Summary:**
- A concise overview of the candidate's experience and skills

-------------------------------------------- add this to separate the Professional Summary and Primary Skillsets fields

**Primary Skillsets:**
- A bullet-point list of the candidate's main technical and soft skills.

-------------------------------------------- add this to separate the Primary Skillsets and Education fields

**Education:**
- Degree, institution, and year of graduation.

-------------------------------------------- add this to separate the Education and Projects fields

**Projects:**
- List of key projects,
  with each project in the following format:
  Name of the project in bold
  - Role: The position or role of the candidate during the project
  - Environment: the technologies and editors used for the project
  - Description: about the project
  - Responsibilities: the work done by the candidate

  -------------------------------------------- add this to separate each project

Here is the original resume text:
{resume_text}

Please ensure clarity, conciseness, and professional formatting."#;
