//! Aggregated simulation results.

use std::collections::BTreeMap;

/// Totals accumulated across all simulated encounters.
#[derive(Debug, Clone, Default)]
pub struct SimReport {
    pub encounters: u32,
    pub wins: u32,
    pub flees: u32,
    pub total_rounds: u64,
    pub total_xp: u64,
    pub gold_from_sales: u64,
    /// Drop counts keyed by item name (BTreeMap for stable report order).
    pub drops: BTreeMap<String, u32>,
    pub final_hp: u32,
}

impl SimReport {
    pub fn win_rate(&self) -> f64 {
        if self.encounters == 0 {
            return 0.0;
        }
        self.wins as f64 / self.encounters as f64
    }

    pub fn average_rounds(&self) -> f64 {
        if self.encounters == 0 {
            return 0.0;
        }
        self.total_rounds as f64 / self.encounters as f64
    }

    /// Human-readable summary for the CLI.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Encounter Simulation Report ===\n");
        out.push_str(&format!("Encounters:   {}\n", self.encounters));
        out.push_str(&format!(
            "Won / Fled:   {} / {} ({:.1}% win rate)\n",
            self.wins,
            self.flees,
            self.win_rate() * 100.0
        ));
        out.push_str(&format!("Avg rounds:   {:.2}\n", self.average_rounds()));
        out.push_str(&format!("Total xp:     {}\n", self.total_xp));
        out.push_str(&format!("Gold (sales): {}\n", self.gold_from_sales));
        out.push_str(&format!("Final hp:     {}\n", self.final_hp));
        if !self.drops.is_empty() {
            out.push_str("Drops:\n");
            for (name, count) in &self.drops {
                out.push_str(&format!("  {name}: {count}\n"));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates_handle_zero_encounters() {
        let report = SimReport::default();
        assert_eq!(report.win_rate(), 0.0);
        assert_eq!(report.average_rounds(), 0.0);
    }

    #[test]
    fn test_to_text_lists_drops_in_stable_order() {
        let mut report = SimReport {
            encounters: 2,
            wins: 1,
            flees: 1,
            ..Default::default()
        };
        report.drops.insert("Zouls".to_string(), 1);
        report.drops.insert("Axe".to_string(), 3);
        let text = report.to_text();
        let axe = text.find("Axe").unwrap();
        let zouls = text.find("Zouls").unwrap();
        assert!(axe < zouls);
        assert!(text.contains("50.0% win rate"));
    }
}
