pub struct PromptTemplate;

impl PromptTemplate {
    pub fn build_system_prompt() -> String {
        "You are a precise data analyst specialized in Vietnamese demographic data processing. \
         You answer with a single JSON object and nothing else."
            .to_string()
    }

    pub fn build_count_prompt(content: &str) -> String {
        format!(
            r#"Analyze the following text list and count the number of males (Nam) and females (Nữ).

Rules:
1. Identify common Vietnamese gender terms: "Nam" (Male), "Nữ" (Female).
2. Handle mixed case (nam, NAM, Nu, nu), typos, or extra punctuation.
3. If a line implies gender (e.g., "Anh ấy", "Cô ấy"), count it appropriately.
4. Lines that are likely people but whose gender is ambiguous, and any other items, count as unknown.
5. Return the raw counts.

OUTPUT FORMAT:
Respond with exactly one JSON object with integer fields:
{{"male": <count of male/nam entries>, "female": <count of female/nữ entries>, "unknown": <count of other entries>}}

Input Text:
"""
{}
"""
"#,
            content
        )
    }
}
