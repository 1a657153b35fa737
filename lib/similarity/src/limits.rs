use skillmatch_core::{Error, Result};

/// Bounds for the requested number of results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultLimits {
    pub min: usize,
    pub max: usize,
    /// Advisory increment for interactive pickers; not enforced
    pub step: usize,
    pub default: usize,
}

impl Default for ResultLimits {
    fn default() -> Self {
        Self {
            min: 5,
            max: 20,
            step: 5,
            default: 10,
        }
    }
}

impl ResultLimits {
    pub fn new(min: usize, max: usize, step: usize, default: usize) -> Result<Self> {
        if min == 0 {
            return Err(Error::InvalidConfig("minimum result count must be positive".into()));
        }
        if min > max {
            return Err(Error::InvalidConfig(format!(
                "minimum result count {} exceeds maximum {}",
                min, max
            )));
        }
        if step == 0 {
            return Err(Error::InvalidConfig("result count step must be positive".into()));
        }
        if !(min..=max).contains(&default) {
            return Err(Error::InvalidConfig(format!(
                "default result count {} outside [{}, {}]",
                default, min, max
            )));
        }
        Ok(Self {
            min,
            max,
            step,
            default,
        })
    }

    pub fn validate(&self, top_n: usize) -> Result<usize> {
        if (self.min..=self.max).contains(&top_n) {
            Ok(top_n)
        } else {
            Err(Error::InvalidTopN {
                value: top_n,
                min: self.min,
                max: self.max,
            })
        }
    }
}
