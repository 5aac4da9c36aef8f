const TOKEN_ENV_KEYS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

fn non_blank(token: &str) -> Option<String> {
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

fn token_from_env() -> Option<String> {
    TOKEN_ENV_KEYS
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find_map(|token| non_blank(&token))
}

/// Picks the API token: the `github-token` input first, then the usual
/// environment variables.
pub(crate) fn resolve_token(input: Option<&str>) -> anyhow::Result<String> {
    if let Some(token) = input.and_then(non_blank) {
        return Ok(token);
    }
    if let Some(token) = token_from_env() {
        return Ok(token);
    }

    anyhow::bail!("GitHub token not found. Set the `github-token` input or `GITHUB_TOKEN`.");
}
