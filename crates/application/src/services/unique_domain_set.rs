use std::collections::HashSet;
use tokio::sync::Mutex;

/// Run-scoped set of every domain discovered so far.
///
/// Shared by all lookup tasks of a run. Inserts go through a single lock and
/// the set only ever grows.
#[derive(Debug, Default)]
pub struct UniqueDomainSet {
    inner: Mutex<HashSet<String>>,
}

impl UniqueDomainSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds `domains` into the set, returning how many were not seen before.
    pub async fn merge<I>(&self, domains: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut set = self.inner.lock().await;
        let before = set.len();
        set.extend(domains);
        set.len() - before
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    pub async fn contains(&self, domain: &str) -> bool {
        self.inner.lock().await.contains(domain)
    }

    /// Lexicographically sorted copy of the current contents.
    pub async fn sorted(&self) -> Vec<String> {
        let set = self.inner.lock().await;
        let mut domains: Vec<String> = set.iter().cloned().collect();
        domains.sort_unstable();
        domains
    }

    pub fn into_sorted(self) -> Vec<String> {
        let mut domains: Vec<String> = self.inner.into_inner().into_iter().collect();
        domains.sort_unstable();
        domains
    }
}

impl FromIterator<String> for UniqueDomainSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            inner: Mutex::new(iter.into_iter().collect()),
        }
    }
}
