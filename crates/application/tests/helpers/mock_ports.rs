#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_revip_application::ports::{DomainSink, Pacer, ReverseIpProvider, TargetSource};
use ferrous_revip_domain::{DomainError, ProviderError, ProviderLookup, TargetIp};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Clone)]
pub struct MockProvider {
    name: String,
    responses: Arc<Mutex<HashMap<String, ProviderLookup>>>,
    fallback: ProviderLookup,
    latency: Option<Duration>,
    panic_on: Option<String>,
    calls: Arc<Mutex<Vec<(String, Instant)>>>,
}

impl MockProvider {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            fallback: ProviderLookup::Found(Vec::new()),
            latency: None,
            panic_on: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(name: &str, error: ProviderError) -> Self {
        let mut provider = Self::new(name);
        provider.fallback = ProviderLookup::Failed(error);
        provider
    }

    pub fn with_response(self, ip: &str, domains: Vec<&str>) -> Self {
        self.responses.lock().unwrap().insert(
            ip.to_string(),
            ProviderLookup::Found(domains.into_iter().map(str::to_string).collect()),
        );
        self
    }

    pub fn with_failure(self, ip: &str, error: ProviderError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(ip.to_string(), ProviderLookup::Failed(error));
        self
    }

    pub fn with_default(mut self, domains: Vec<&str>) -> Self {
        self.fallback = ProviderLookup::Found(domains.into_iter().map(str::to_string).collect());
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn panicking_on(mut self, ip: &str) -> Self {
        self.panic_on = Some(ip.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_for(&self, ip: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(called, _)| called == ip)
            .count()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|(_, at)| *at).collect()
    }
}

#[async_trait]
impl ReverseIpProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn lookup(&self, ip: &TargetIp) -> ProviderLookup {
        self.calls
            .lock()
            .unwrap()
            .push((ip.to_string(), Instant::now()));

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        if self.panic_on.as_deref() == Some(ip.as_str()) {
            panic!("mock provider panicked for {}", ip);
        }

        self.responses
            .lock()
            .unwrap()
            .get(ip.as_str())
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

pub struct MockTargetSource {
    targets: Vec<TargetIp>,
    error: Option<DomainError>,
}

impl MockTargetSource {
    pub fn with_targets(targets: Vec<&str>) -> Self {
        Self {
            targets: targets.into_iter().map(TargetIp::from).collect(),
            error: None,
        }
    }

    pub fn failing(path: &str) -> Self {
        Self {
            targets: Vec::new(),
            error: Some(DomainError::InputRead {
                path: path.to_string(),
                reason: "No such file or directory".to_string(),
            }),
        }
    }
}

#[async_trait]
impl TargetSource for MockTargetSource {
    async fn read_targets(&self) -> Result<Vec<TargetIp>, DomainError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(self.targets.clone()),
        }
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

#[derive(Clone, Default)]
pub struct MockDomainSink {
    written: Arc<Mutex<Option<Vec<String>>>>,
    writes: Arc<AtomicUsize>,
    should_fail: Arc<AtomicBool>,
}

impl MockDomainSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn written(&self) -> Option<Vec<String>> {
        self.written.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DomainSink for MockDomainSink {
    async fn write_domains(&self, domains: &[String]) -> Result<(), DomainError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::OutputWrite {
                path: self.destination(),
                reason: "Permission denied".to_string(),
            });
        }
        *self.written.lock().unwrap() = Some(domains.to_vec());
        Ok(())
    }

    fn destination(&self) -> String {
        "mock://domains".to_string()
    }
}

/// Wraps another pacer and records the instant each wait returns.
pub struct RecordingPacer {
    inner: Arc<dyn Pacer>,
    releases: Mutex<Vec<Instant>>,
}

impl RecordingPacer {
    pub fn new(inner: Arc<dyn Pacer>) -> Self {
        Self {
            inner,
            releases: Mutex::new(Vec::new()),
        }
    }

    pub fn releases(&self) -> Vec<Instant> {
        self.releases.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn wait(&self) {
        self.inner.wait().await;
        self.releases.lock().unwrap().push(Instant::now());
    }

    fn strategy(&self) -> &'static str {
        self.inner.strategy()
    }
}

pub fn providers(list: Vec<MockProvider>) -> Vec<Arc<dyn ReverseIpProvider>> {
    list.into_iter()
        .map(|p| Arc::new(p) as Arc<dyn ReverseIpProvider>)
        .collect()
}
