//! Explanatory panels shown under the chart. Pure presentation content.

use crate::domain::indicators::LatestSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    Spread10y2y,
    Spread10y3m,
    SahmRule,
}

impl Reading {
    pub fn value(self, snapshot: &LatestSnapshot) -> Option<f64> {
        match self {
            Self::Spread10y2y => snapshot.spread_10y_2y,
            Self::Spread10y3m => snapshot.spread_10y_3m,
            Self::SahmRule => snapshot.sahm_rule,
        }
    }
}

/// One row of a threshold table. Text is plain, not HTML.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    pub range: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Panel {
    /// Section heading printed before this panel, if it starts a new group.
    pub heading: Option<&'static str>,
    pub title: &'static str,
    pub summary: &'static str,
    /// Live value quoted after the summary.
    pub reading: Option<Reading>,
    /// Healthy, caution, danger.
    pub tiers: [Tier; 3],
    pub source_label: &'static str,
    pub source_url: &'static str,
}

pub const PANELS: [Panel; 5] = [
    Panel {
        heading: Some("Yield Curve Analysis"),
        title: "1. The 10-Year vs. 2-Year Treasury Spread (10Y-2Y):",
        summary: "Historically regarded as the \"Gold Standard\" of recession forecasting, the 10Y-2Y spread represents the difference in yield between long-term and short-term US Treasury bonds.",
        reading: Some(Reading::Spread10y2y),
        tiers: [
            Tier { range: "> 0.50%", note: "Standard expansionary environment." },
            Tier { range: "0.00% to 0.50%", note: "Flattening curve; signaling late-cycle growth." },
            Tier { range: "< 0.00%", note: "Inverted curve; credit crunch probable." },
        ],
        source_label: "St. Louis FED",
        source_url: "https://www.stlouisfed.org/on-the-economy/2023/october/understanding-the-yield-curve-inversion",
    },
    Panel {
        heading: None,
        title: "2. The 10-Year vs. 3-Month Treasury Spread (10Y-3M):",
        summary: "The Federal Reserve's preferred metric. It reflects the cost of immediate liquidity relative to long-term growth.",
        reading: Some(Reading::Spread10y3m),
        tiers: [
            Tier { range: "> 1.00%", note: "Strong liquidity and growth expectations." },
            Tier { range: "0.00% to 1.00%", note: "Policy tightening beginning to restrict growth." },
            Tier { range: "< 0.00%", note: "Restrictive policy likely leading to a hard landing." },
        ],
        source_label: "New York FED",
        source_url: "https://www.newyorkfed.org/research/capital_markets/yc_index.html",
    },
    Panel {
        heading: Some("Labor & Sentiment Indicators"),
        title: "3. The Sahm Rule Recession Indicator:",
        summary: "This indicator identifies the \"real economy\" momentum. It triggers when unemployment rises 0.5% above its 12-month low.",
        reading: Some(Reading::SahmRule),
        tiers: [
            Tier { range: "< 0.35%", note: "Strong labor market stability." },
            Tier { range: "0.35% to 0.49%", note: "Early warning; labor market starting to crack." },
            Tier { range: "> 0.50%", note: "Negative feedback loop underway." },
        ],
        source_label: "FRED Economic Data",
        source_url: "https://fred.stlouisfed.org/series/SAHMREALTIME",
    },
    Panel {
        heading: None,
        title: "4. Cass Freight Index (Shipments):",
        summary: "Measures the physical movement of goods. Useful as a \"truth serum\" for the industrial cycle vs the financial economy.",
        reading: None,
        tiers: [
            Tier { range: "> 2.0% YoY", note: "Robust physical demand and logistics." },
            Tier { range: "-2.0% to 2.0% YoY", note: "Stagnating demand; Industrial slowdown." },
            Tier { range: "< -2.0% YoY", note: "Contraction in physical goods movement." },
        ],
        source_label: "Cass Information Systems",
        source_url: "https://www.cassinfo.com/freight-audit-payment/cass-transportation-indexes",
    },
    Panel {
        heading: None,
        title: "5. The \"R-Word\" Index:",
        summary: "Tracks \"Reflexivity\", where the fear of a recession leads to pre-emptive saving and a self-fulfilling prophecy.",
        reading: None,
        tiers: [
            Tier { range: "Low Mentions", note: "High consumer and business confidence." },
            Tier { range: "Rising Mentions", note: "Behavioral shift toward defensive spending." },
            Tier { range: "Spiking Mentions", note: "Fear-driven demand collapse is imminent." },
        ],
        source_label: "The Economist",
        source_url: "https://www.economist.com/graphic-detail/2022/07/07/our-r-word-index-suggests-that-america-may-be-heading-for-recession",
    },
];
