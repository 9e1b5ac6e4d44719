/// Cleans raw provider output into candidate domains.
///
/// Entries are trimmed and empty strings dropped. Case and order are kept as
/// returned by the provider.
pub fn normalize_candidates<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|entry| {
            let trimmed = entry.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}
