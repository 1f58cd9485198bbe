use regex::Regex;
use regen_types::Reading;

/// Tried in order, strictest first
const PATTERNS: [&str; 4] = [
    r"(\d+)\s*/\s*(\d+)\s*\((\d+):(\d+)\)",
    r"(\d+)/(\d+)\s*\((\d+):(\d+)\)",
    r"(\d+)\s*/\s*(\d+)\s*\((\d+):(\d+)",
    r"(\d+)/(\d+)\((\d+):(\d+)\)",
];

/// Structured `current/max (mm:ss)` match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterMatch {
    pub current: u32,
    pub max: u32,
    pub minutes: u32,
    pub seconds: u32,
    /// Index of the pattern that matched
    pub pattern: usize,
}

impl CounterMatch {
    pub fn regen_seconds(&self) -> u32 {
        self.minutes.saturating_mul(60).saturating_add(self.seconds)
    }

    pub fn reading(&self) -> Reading {
        Reading {
            current: self.current,
            max: self.max,
            regen_seconds: self.regen_seconds(),
        }
    }
}

/// Pulls the charge counter out of noisy OCR text
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    patterns: Vec<Regex>,
}

impl PatternMatcher {
    pub fn new() -> Result<Self, regex::Error> {
        let patterns = PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// First pattern with a usable match wins; later patterns are not consulted
    pub fn find(&self, text: &str) -> Option<CounterMatch> {
        for (index, pattern) in self.patterns.iter().enumerate() {
            for caps in pattern.captures_iter(text) {
                let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

                let (Some(current), Some(max), Some(minutes), Some(seconds)) =
                    (field(1), field(2), field(3), field(4))
                else {
                    continue;
                };

                // a zero max is a misread; seconds are taken as printed
                if max == 0 {
                    continue;
                }

                tracing::debug!(
                    "Matched pattern {index}: {current}/{max}, timer {minutes}:{seconds:02}"
                );
                return Some(CounterMatch {
                    current,
                    max,
                    minutes,
                    seconds,
                    pattern: index,
                });
            }
        }

        None
    }
}
