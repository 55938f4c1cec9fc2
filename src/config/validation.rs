use regex::Regex;
use std::sync::LazyLock;

static ENV_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env reference pattern"));

/// Expand `${VAR_NAME}` references through `lookup`. Unknown variables are
/// left as written.
pub fn expand_with(value: &str, lookup: &dyn Fn(&str) -> Option<String>) -> String {
    let mut result = value.to_string();

    for cap in ENV_REF_RE.captures_iter(value) {
        let var_name = &cap[1];
        let replacement = lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name));
        result = result.replace(&cap[0], &replacement);
    }

    result
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
