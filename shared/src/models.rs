use serde::{Deserialize, Serialize};
use thiserror::Error;

// One time bucket of price data as returned by the exchange.
// Timestamps are seconds since the Unix epoch, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcRecord {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unsupported step {0}s; expected one of 60, 180, 300, 900, 1800, 3600, 7200, 14400, 21600, 43200, 86400, 259200")]
pub struct UnsupportedStep(pub u32);

// Bucket widths accepted by the Bitstamp OHLC endpoint.
// Serialized as the number of seconds so configuration files can say `"step": 900`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum Step {
    Minute1,
    Minute3,
    Minute5,
    #[default]
    Minute15,
    Minute30,
    Hour1,
    Hour2,
    Hour4,
    Hour6,
    Hour12,
    Day1,
    Day3,
}

impl Step {
    pub const ALL: [Step; 12] = [
        Step::Minute1,
        Step::Minute3,
        Step::Minute5,
        Step::Minute15,
        Step::Minute30,
        Step::Hour1,
        Step::Hour2,
        Step::Hour4,
        Step::Hour6,
        Step::Hour12,
        Step::Day1,
        Step::Day3,
    ];

    pub fn seconds(self) -> u32 {
        match self {
            Step::Minute1 => 60,
            Step::Minute3 => 180,
            Step::Minute5 => 300,
            Step::Minute15 => 900,
            Step::Minute30 => 1800,
            Step::Hour1 => 3600,
            Step::Hour2 => 7200,
            Step::Hour4 => 14400,
            Step::Hour6 => 21600,
            Step::Hour12 => 43200,
            Step::Day1 => 86400,
            Step::Day3 => 259200,
        }
    }
}

impl TryFrom<u32> for Step {
    type Error = UnsupportedStep;

    fn try_from(seconds: u32) -> Result<Self, Self::Error> {
        Step::ALL
            .into_iter()
            .find(|step| step.seconds() == seconds)
            .ok_or(UnsupportedStep(seconds))
    }
}

impl From<Step> for u32 {
    fn from(step: Step) -> Self {
        step.seconds()
    }
}
