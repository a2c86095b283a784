//! Lightweight render counters for host diagnostics.

use std::time::Duration;

use serde_json::json;

use crate::block::{Block, Content};
use crate::logging::{LogEvent, LogFields, LogLevel};

/// Cumulative counters a host can feed from its render loop.
#[derive(Debug, Default, Clone)]
pub struct RenderMetrics {
    renders: u64,
    lines_emitted: u64,
    blocks_visited: u64,
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_render(&mut self, lines: usize) {
        self.renders = self.renders.saturating_add(1);
        self.lines_emitted = self.lines_emitted.saturating_add(lines as u64);
    }

    pub fn record_blocks(&mut self, count: usize) {
        self.blocks_visited = self.blocks_visited.saturating_add(count as u64);
    }

    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn lines_emitted(&self) -> u64 {
        self.lines_emitted
    }

    pub fn blocks_visited(&self) -> u64 {
        self.blocks_visited
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            renders: self.renders,
            lines_emitted: self.lines_emitted,
            blocks_visited: self.blocks_visited,
        }
    }
}

/// Point-in-time view of [`RenderMetrics`], suitable for log emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub renders: u64,
    pub lines_emitted: u64,
    pub blocks_visited: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut fields = LogFields::new();
        fields.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        fields.insert("renders".to_string(), json!(self.renders));
        fields.insert("lines_emitted".to_string(), json!(self.lines_emitted));
        fields.insert("blocks_visited".to_string(), json!(self.blocks_visited));
        fields
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "metrics_snapshot", self.as_fields())
    }
}

/// Count every node in `block`, including zero-size ones.
pub fn block_count<A>(block: &Block<A>) -> usize {
    1 + match block.content() {
        Content::Blank | Content::Text(_) => 0,
        Content::Row(children) | Content::Col(children) => {
            children.iter().map(block_count).sum()
        }
        Content::Sub { child, .. } => block_count(child),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{hcat, line, vcat};
    use crate::window::Alignment;

    #[test]
    fn counters_accumulate_across_renders() {
        let mut metrics = RenderMetrics::new();
        metrics.record_render(3);
        metrics.record_render(2);
        metrics.record_blocks(7);

        let snapshot = metrics.snapshot(Duration::from_millis(1500));
        assert_eq!(snapshot.renders, 2);
        assert_eq!(snapshot.lines_emitted, 5);
        assert_eq!(snapshot.blocks_visited, 7);
        assert_eq!(snapshot.uptime_ms, 1500);
    }

    #[test]
    fn snapshot_events_carry_every_counter() {
        let snapshot = MetricSnapshot {
            uptime_ms: 10,
            renders: 1,
            lines_emitted: 4,
            blocks_visited: 9,
        };
        let event = snapshot.to_log_event("layout.metrics");
        assert_eq!(event.target, "layout.metrics");
        assert_eq!(event.fields["renders"], json!(1));
        assert_eq!(event.fields["blocks_visited"], json!(9));
    }

    #[test]
    fn block_count_walks_nested_trees() {
        let left: crate::block::Block<()> = line("ab");
        let right = vcat(Alignment::First, vec![line("c"), line("d")]);
        let tree = hcat(Alignment::First, vec![left, right]);
        // root + 2 Sub wrappers + left text + inner Col + 2 Sub wrappers + 2 texts
        assert_eq!(block_count(&tree), 9);
    }
}
