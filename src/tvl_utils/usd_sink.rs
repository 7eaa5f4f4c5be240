/// Caller-owned accumulator for USD contributions. The aggregation core
/// only ever appends to it and never reads it back.
pub trait UsdValueSink {
    fn add_usd_value(&mut self, amount: f64);
}

/// Plain summing sink for callers that just want the final figure.
#[derive(Debug, Default, Clone)]
pub struct UsdValueTotal {
    total: f64,
    contributions: u64,
}

impl UsdValueTotal {
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn contributions(&self) -> u64 {
        self.contributions
    }
}

impl UsdValueSink for UsdValueTotal {
    fn add_usd_value(&mut self, amount: f64) {
        self.total += amount;
        self.contributions += 1;
    }
}
