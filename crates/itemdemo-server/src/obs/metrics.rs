//! Minimal metrics registry for the service.
//!
//! Counter/gauge/histogram types with dynamic labels backed by `DashMap`.
//! Labels are flattened into sorted key vectors and series are rendered in
//! sorted order, so output is deterministic. Histograms count in integer
//! microseconds and are exposed in seconds, formatted exactly without floating
//! point math.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::time::Duration;

type LabelKey = Vec<(String, String)>;

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn render_labels(key: &LabelKey) -> String {
    key.iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

fn write_header(out: &mut String, name: &str, help: &str, kind: &str) {
    let _ = writeln!(out, "# HELP {} {}", name, help);
    let _ = writeln!(out, "# TYPE {} {}", name, kind);
}

/// Snapshot `map` as (rendered labels, value) pairs in label order.
fn sorted_series<V, T>(map: &DashMap<LabelKey, V>, read: impl Fn(&V) -> T) -> Vec<(String, T)> {
    let mut series: Vec<(String, T)> = map
        .iter()
        .map(|r| (render_labels(r.key()), read(r.value())))
        .collect();
    series.sort_by(|a, b| a.0.cmp(&b.0));
    series
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value of one series (0 if never touched).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        write_header(out, name, help, "counter");
        for (labels, val) in sorted_series(&self.map, |c| c.load(Ordering::Relaxed)) {
            let _ = writeln!(out, "{}{{{}}} {}", name, labels, val);
        }
    }
}

#[derive(Default)]
pub struct GaugeVec {
    map: DashMap<LabelKey, AtomicI64>,
}

impl GaugeVec {
    pub fn inc(&self, labels: &[(&str, &str)]) { self.add(labels, 1); }
    pub fn dec(&self, labels: &[(&str, &str)]) { self.add(labels, -1); }

    /// Add an arbitrary signed delta.
    pub fn add(&self, labels: &[(&str, &str)], v: i64) {
        let gauge = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicI64::new(0));
        gauge.fetch_add(v, Ordering::Relaxed);
    }

    pub fn get(&self, labels: &[(&str, &str)]) -> i64 {
        self.map
            .get(&label_key(labels))
            .map(|g| g.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        write_header(out, name, help, "gauge");
        for (labels, val) in sorted_series(&self.map, |g| g.load(Ordering::Relaxed)) {
            let _ = writeln!(out, "{}{{{}}} {}", name, labels, val);
        }
    }
}

/// Whole microseconds in `d`, saturating at `u64::MAX`.
pub fn duration_micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

/// `micros` as a decimal seconds literal: 300 -> "0.0003", 2_000_000 -> "2".
fn micros_as_secs(micros: u64) -> String {
    let whole = micros / 1_000_000;
    let frac = micros % 1_000_000;
    if frac == 0 {
        return whole.to_string();
    }
    let s = format!("{}.{:06}", whole, frac);
    s.trim_end_matches('0').to_string()
}

// 100us, 500us, 1ms, 5ms, 10ms, 50ms, 100ms, 500ms, 1s
const BUCKETS_MICROS: [u64; 9] = [100, 500, 1_000, 5_000, 10_000, 50_000, 100_000, 500_000, 1_000_000];

#[derive(Default)]
struct AtomicHistogram {
    count: AtomicU64,
    sum: AtomicU64,
    buckets: [AtomicU64; BUCKETS_MICROS.len()],
}

struct HistogramSnapshot {
    count: u64,
    sum: u64,
    buckets: [u64; BUCKETS_MICROS.len()],
}

impl AtomicHistogram {
    fn snapshot(&self) -> HistogramSnapshot {
        HistogramSnapshot {
            count: self.count.load(Ordering::Relaxed),
            sum: self.sum.load(Ordering::Relaxed),
            buckets: std::array::from_fn(|i| self.buckets[i].load(Ordering::Relaxed)),
        }
    }
}

#[derive(Default)]
pub struct HistogramVec {
    map: DashMap<LabelKey, AtomicHistogram>,
}

impl HistogramVec {
    /// Observe a duration and increment cumulative buckets.
    pub fn observe(&self, labels: &[(&str, &str)], duration: Duration) {
        let hist = self
            .map
            .entry(label_key(labels))
            .or_insert_with(AtomicHistogram::default);
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);

        hist.count.fetch_add(1, Ordering::Relaxed);
        let _ = hist
            .sum
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |sum| Some(sum.saturating_add(micros)));

        // Cumulative: every bucket whose bound covers the value.
        for (i, &b) in BUCKETS_MICROS.iter().enumerate() {
            if micros <= b {
                hist.buckets[i].fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    pub fn count(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|h| h.count.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    fn render(&self, name: &str, help: &str, out: &mut String) {
        write_header(out, name, help, "histogram");
        for (labels, hist) in sorted_series(&self.map, AtomicHistogram::snapshot) {
            let prefix = if labels.is_empty() { String::new() } else { format!("{},", labels) };

            for (i, &le) in BUCKETS_MICROS.iter().enumerate() {
                let _ = writeln!(out, "{}_bucket{{{}le=\"{}\"}} {}", name, prefix, micros_as_secs(le), hist.buckets[i]);
            }
            let _ = writeln!(out, "{}_bucket{{{}le=\"+Inf\"}} {}", name, prefix, hist.count);
            let _ = writeln!(out, "{}_sum{{{}}} {}", name, labels, micros_as_secs(hist.sum));
            let _ = writeln!(out, "{}_count{{{}}} {}", name, labels, hist.count);
        }
    }
}

/// HTTP request instrumentation shared by every route.
#[derive(Default)]
pub struct ServiceMetrics {
    /// Labels: method, handler, status.
    pub requests_total: CounterVec,
    /// Labels: method, handler.
    pub requests_inprogress: GaugeVec,
    /// Labels: method, handler. Exposed in seconds.
    pub request_duration: HistogramVec,
}

impl ServiceMetrics {
    /// Render all series in Prometheus text exposition format.
    pub fn render(&self, shutting_down: bool) -> String {
        let mut out = String::new();
        self.requests_total.render(
            "http_requests_total",
            "Total number of requests by method, handler and status class.",
            &mut out,
        );
        self.requests_inprogress.render(
            "http_requests_inprogress",
            "Number of requests currently being served.",
            &mut out,
        );
        self.request_duration.render(
            "http_request_duration_seconds",
            "Request latency in seconds.",
            &mut out,
        );

        write_header(&mut out, "service_shutting_down", "1 once a termination signal was received.", "gauge");
        let _ = writeln!(out, "service_shutting_down {}", u8::from(shutting_down));
        out
    }
}
