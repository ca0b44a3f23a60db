//! Per-request render metrics.

use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;
use trail_core::RequestId;

/// Render metrics for a single page request.
#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    /// Request ID for correlation.
    pub request_id: String,
    /// Page workload name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Route path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Time to shell flush (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_shell_us: Option<u64>,
    /// Per-section metrics.
    pub sections: HashMap<String, SectionReport>,
    /// Total request duration (microseconds).
    pub total_duration_us: u64,
    /// HTTP status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Metrics for a single streamed section.
#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    /// Section name.
    pub name: String,
    /// Render duration (microseconds).
    pub duration_us: u64,
    /// Bytes sent for this section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    /// Whether the section used its fallback rendering.
    pub used_fallback: bool,
}

/// Collector for render metrics.
#[derive(Debug)]
pub struct RenderMetrics {
    request_id: RequestId,
    page: Option<String>,
    route: Option<String>,
    start: Instant,
    shell_sent: Option<Instant>,
    sections: HashMap<String, SectionBuilder>,
}

#[derive(Debug)]
struct SectionBuilder {
    start: Instant,
    sent: Option<Instant>,
    bytes: Option<usize>,
    used_fallback: bool,
}

impl RenderMetrics {
    /// Create a new collector.
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            page: None,
            route: None,
            start: Instant::now(),
            shell_sent: None,
            sections: HashMap::new(),
        }
    }

    /// Set the page workload name.
    pub fn set_page(&mut self, page: impl Into<String>) {
        self.page = Some(page.into());
    }

    /// Set the route path.
    pub fn set_route(&mut self, route: impl Into<String>) {
        self.route = Some(route.into());
    }

    /// Record shell sent.
    pub fn record_shell_sent(&mut self) {
        self.shell_sent = Some(Instant::now());
    }

    /// Record section start.
    pub fn record_section_start(&mut self, name: &str) {
        self.sections.insert(
            name.to_string(),
            SectionBuilder {
                start: Instant::now(),
                sent: None,
                bytes: None,
                used_fallback: false,
            },
        );
    }

    /// Record section sent. A section never started records as
    /// zero-duration at this point.
    pub fn record_section_sent(&mut self, name: &str, bytes: Option<usize>, used_fallback: bool) {
        let now = Instant::now();
        let section = self.sections.entry(name.to_string()).or_insert(SectionBuilder {
            start: now,
            sent: None,
            bytes: None,
            used_fallback: false,
        });
        section.sent = Some(now);
        section.bytes = bytes;
        section.used_fallback = used_fallback;
    }

    /// Finalize and return the report.
    pub fn finalize(self, status_code: Option<u16>) -> RenderReport {
        let now = Instant::now();

        let sections = self
            .sections
            .into_iter()
            .map(|(name, builder)| {
                let sent = builder.sent.unwrap_or(now);
                (
                    name.clone(),
                    SectionReport {
                        name,
                        duration_us: sent.duration_since(builder.start).as_micros() as u64,
                        bytes: builder.bytes,
                        used_fallback: builder.used_fallback,
                    },
                )
            })
            .collect();

        RenderReport {
            request_id: self.request_id.to_string(),
            page: self.page,
            route: self.route,
            time_to_shell_us: self
                .shell_sent
                .map(|t| t.duration_since(self.start).as_micros() as u64),
            sections,
            total_duration_us: now.duration_since(self.start).as_micros() as u64,
            status_code,
        }
    }
}

impl RenderReport {
    /// Format as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Format as human-readable summary.
    pub fn to_summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Request: {}", self.request_id));

        if let Some(tts) = self.time_to_shell_us {
            lines.push(format!(
                "  Time to shell: {}us ({:.2}ms)",
                tts,
                tts as f64 / 1000.0
            ));
        }

        lines.push(format!(
            "  Time to full page: {}us ({:.2}ms)",
            self.total_duration_us,
            self.total_duration_us as f64 / 1000.0
        ));

        if !self.sections.is_empty() {
            lines.push("  Sections:".to_string());
            for (name, section) in &self.sections {
                let fallback = if section.used_fallback { " [fallback]" } else { "" };
                lines.push(format!(
                    "    {}: {}us{}",
                    name, section.duration_us, fallback
                ));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_appear_in_report() {
        let mut metrics = RenderMetrics::new(RequestId::from_string("req-9"));
        metrics.set_page("tour-page");
        metrics.record_shell_sent();
        metrics.record_section_start("hero");
        metrics.record_section_sent("hero", Some(512), false);
        metrics.record_section_sent("options", None, true);

        let report = metrics.finalize(Some(200));
        assert_eq!(report.status_code, Some(200));
        assert_eq!(report.sections.len(), 2);
        assert_eq!(report.sections["hero"].bytes, Some(512));
        assert!(report.sections["options"].used_fallback);
        assert!(report.time_to_shell_us.is_some());
    }

    #[test]
    fn test_summary_mentions_fallback_sections() {
        let mut metrics = RenderMetrics::new(RequestId::from_string("req-10"));
        metrics.record_section_sent("cards", None, true);

        let summary = metrics.finalize(None).to_summary();
        assert!(summary.contains("cards"));
        assert!(summary.contains("[fallback]"));
    }
}
