use super::RoiReport;

impl RoiReport {
    /// Cumulative savings series for charting: entry `i` is the total saved
    /// after `i + 1` months.
    pub fn cumulative_savings(&self, months: u32) -> Vec<f64> {
        (1..=months)
            .map(|month| self.monthly_savings * month as f64)
            .collect()
    }

    /// (automated, manual) percentage pair for the productivity split chart.
    pub fn automation_split(&self) -> (u32, u32) {
        let automated = self.productivity_boost_percentage;
        (automated, 100 - automated)
    }
}
