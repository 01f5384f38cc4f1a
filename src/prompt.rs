/// Instructions sent ahead of the raw log data. The log is appended verbatim
/// after the trailing newline.
pub const REPORT_TEMPLATE: &str = r#"
You're a cybersecurity expert and a seasoned system administrator. Analyze the following log data and generate a comprehensive and structured report in Markdown format. The report must include the following sections:

1: Analysis Summary: A synthesis of the most significant events observed in the logs.

2. Relevant Log Excerpts: Include specific portions of the logs that justify your conclusions, accompanied by clear explanations.

3. Detailed Attack Analysis:

- Identify and describe the type of attack (e.g., SQL injection, brute force, DDoS, etc.).

- Specify any vulnerabilities or CVEs that were exploited, if they can be inferred.

- Provide links to reports or online resources that describe this type of attack or vulnerabilities in detail.

4. Potential Impact: Describe the risks that this attack might pose to the system, data, or users.

5. Security Recommendations: List clear, specific, and actionable measures to prevent this type of attack in the future (e.g., software updates, configuration changes, enhanced monitoring, etc.).

Generate all your responses in English. Be technical and precise in your explanations, and ensure the report is professional and directly usable by a security team or system administrator.

The log data is as follows:
"#;

/// Append the log to the template. Invalid UTF-8 is replaced rather than
/// rejected; nothing is escaped or truncated.
pub fn build_prompt(content: &[u8]) -> String {
    let log = String::from_utf8_lossy(content);
    let mut prompt = String::with_capacity(REPORT_TEMPLATE.len() + log.len());
    prompt.push_str(REPORT_TEMPLATE);
    prompt.push_str(&log);
    prompt
}
