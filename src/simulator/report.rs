//! Estimation report generation.

use super::config::HallwayConfig;
use super::hallway_sim::{MemoryPolicy, RunOutcome};
use super::runner::count_cleared;
use serde::Serialize;

/// Aggregated results for one memory policy.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyReport {
    pub policy: MemoryPolicy,
    pub runs: u32,
    pub runs_cleared: u32,
    pub runs_rage_quit: u32,

    pub mean_hallways: f64,
    pub min_hallways: u64,
    pub median_hallways: u64,
    pub max_hallways: u64,

    // Hallways seen per run, in trial order
    #[serde(skip)]
    pub hallway_distribution: Vec<u64>,
}

impl PolicyReport {
    /// Create a policy report from completed runs.
    pub fn from_outcomes(policy: MemoryPolicy, outcomes: &[RunOutcome]) -> Self {
        let runs = outcomes.len() as u32;
        let runs_cleared = count_cleared(outcomes);
        let hallway_distribution: Vec<u64> = outcomes.iter().map(|o| o.hallways_seen()).collect();

        let total: u64 = hallway_distribution.iter().sum();
        let mean_hallways = total as f64 / runs.max(1) as f64;

        let median_hallways = {
            let mut sorted = hallway_distribution.clone();
            sorted.sort_unstable();
            sorted.get(sorted.len() / 2).copied().unwrap_or(0)
        };

        Self {
            policy,
            runs,
            runs_cleared,
            runs_rage_quit: runs - runs_cleared,
            mean_hallways,
            min_hallways: hallway_distribution.iter().copied().min().unwrap_or(0),
            median_hallways,
            max_hallways: hallway_distribution.iter().copied().max().unwrap_or(0),
            hallway_distribution,
        }
    }

    /// Percentage of runs that cleared the game.
    pub fn completion_rate(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        self.runs_cleared as f64 / self.runs as f64 * 100.0
    }
}

/// Full estimation output: closed-form reach plus every simulated policy.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    pub config: HallwayConfig,
    pub test_iterations: u32,
    pub seed: Option<u64>,
    pub closed_form: f64,
    pub policies: Vec<PolicyReport>,
}

impl EstimateReport {
    pub fn policy(&self, policy: MemoryPolicy) -> Option<&PolicyReport> {
        self.policies.iter().find(|p| p.policy == policy)
    }

    /// One line for the closed-form estimate, then one per policy.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "How far does a player get in one attempt? {}",
            self.closed_form
        )];
        for policy in &self.policies {
            let who = match policy.policy {
                MemoryPolicy::NoMemory => "a player",
                MemoryPolicy::PerfectMemory => "a player with perfect memory",
                MemoryPolicy::PartialMemory => "a player with decent memory",
            };
            lines.push(format!(
                "How many hallways does {} pass through before clearing the game? {}",
                who, policy.mean_hallways
            ));
        }
        lines
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                  HALLWAY ESTIMATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str("── CONFIGURATION ────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Success Chance:        {:.2}\n",
            self.config.success_probability
        ));
        report.push_str(&format!(
            "  Memory Success Chance: {:.2}\n",
            self.config.success_probability_with_memory
        ));
        report.push_str(&format!(
            "  Levels to Clear:       {}\n",
            self.config.level_count
        ));
        report.push_str(&format!(
            "  Hallway Layouts:       {}\n",
            self.config.max_hall_number
        ));
        report.push_str(&format!(
            "  Rage Quit After:       {}\n",
            self.config.rage_quit_count
        ));
        report.push_str(&format!(
            "  Runs per Policy:       {}\n",
            self.test_iterations
        ));
        if let Some(seed) = self.seed {
            report.push_str(&format!("  Seed:                  {}\n", seed));
        }
        report.push('\n');

        report.push_str("── CLOSED FORM ──────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Expected Reach (one attempt): {:.4}\n\n",
            self.closed_form
        ));

        report.push_str("── POLICIES ─────────────────────────────────────────────────────\n");
        report.push_str("  Policy            Mean      Min   Median      Max   Cleared\n");
        report.push_str("  ──────            ────      ───   ──────      ───   ───────\n");
        for p in &self.policies {
            report.push_str(&format!(
                "  {:<16} {:7.2}   {:6}   {:6}   {:6}   {:>6.1}%\n",
                p.policy.label(),
                p.mean_hallways,
                p.min_hallways,
                p.median_hallways,
                p.max_hallways,
                p.completion_rate()
            ));
        }
        report.push('\n');

        report.push_str("── MEMORY EFFECT ────────────────────────────────────────────────\n");
        if let Some(baseline) = self.policy(MemoryPolicy::NoMemory) {
            for p in &self.policies {
                if p.policy == MemoryPolicy::NoMemory {
                    continue;
                }
                let saved = baseline.mean_hallways - p.mean_hallways;
                let pct = if baseline.mean_hallways > 0.0 {
                    saved / baseline.mean_hallways * 100.0
                } else {
                    0.0
                };
                report.push_str(&format!(
                    "  {:<16} saves {:6.2} hallways ({:.1}%)\n",
                    p.policy.label(),
                    saved,
                    pct
                ));
            }
        }
        for p in &self.policies {
            if p.runs_rage_quit > 0 {
                report.push_str(&format!(
                    "  ⚠️  {} rage quit in {} of {} runs\n",
                    p.policy.label(),
                    p.runs_rage_quit,
                    p.runs
                ));
            }
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
