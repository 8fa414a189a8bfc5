/// Lowercase, spaces to `-`, keep only `[a-z0-9-]`.
pub fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Branch name for a task: `<prefix><slug>`.
pub fn branch_name(prefix: &str, task: &str) -> String {
    format!("{}{}", prefix, slugify(task))
}
