// Prompt template for resume improvement suggestions.

pub const SUGGESTION_PROMPT: &str = r#"Analyze the following resume content and provide detailed suggestions for improvement:

Resume Content:
{resume_content}

Please provide suggestions in the following categories:
1. **Content & Structure**: Analyze the overall structure, sections, and content organization
2. **Skills & Keywords**: Suggest relevant skills and keywords to add based on the content
3. **Experience Description**: How to better describe work experience and achievements
4. **Formatting & Presentation**: Visual and formatting improvements
5. **Missing Sections**: What important sections might be missing
6. **Industry-Specific Advice**: Tailored advice based on the field/industry

Format your response in a clear, actionable manner with specific recommendations.
Keep it concise: use bullet points, with each suggestion in 1-2 lines. If you cannot find any suggestions, state "No suggestions available".
Also provide suggestions that help improve the ATS score of the resume."#;

pub fn build_suggestion_prompt(resume_content: &str) -> String {
    SUGGESTION_PROMPT.replace("{resume_content}", resume_content)
}
