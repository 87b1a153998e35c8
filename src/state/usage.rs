use serde::{Deserialize, Serialize};

use crate::planner::constants::DEFAULT_FREE_PLAN_LIMIT;

/// Generation counter for the current period plus the tier flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageState {
    pub plans_generated_this_period: u32,
    pub is_premium_tier: bool,
}

/// Free/premium check that runs before every generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitlementGate {
    limit: u32,
}

impl Default for EntitlementGate {
    fn default() -> Self {
        Self::new(DEFAULT_FREE_PLAN_LIMIT)
    }
}

impl EntitlementGate {
    pub fn new(limit: u32) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn can_generate(&self, usage: &UsageState) -> bool {
        usage.is_premium_tier || usage.plans_generated_this_period < self.limit
    }

    /// Count one successful generation. The caller invokes this exactly once
    /// per generated plan.
    pub fn record_generation(&self, usage: UsageState) -> UsageState {
        UsageState {
            plans_generated_this_period: usage.plans_generated_this_period.saturating_add(1),
            ..usage
        }
    }

    /// Generations left this period, `None` for premium.
    pub fn remaining(&self, usage: &UsageState) -> Option<u32> {
        if usage.is_premium_tier {
            None
        } else {
            Some(self.limit.saturating_sub(usage.plans_generated_this_period))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage(count: u32, premium: bool) -> UsageState {
        UsageState {
            plans_generated_this_period: count,
            is_premium_tier: premium,
        }
    }

    #[test]
    fn test_free_tier_limit() {
        let gate = EntitlementGate::new(3);
        assert!(gate.can_generate(&usage(0, false)));
        assert!(gate.can_generate(&usage(2, false)));
        assert!(!gate.can_generate(&usage(3, false)));
        assert!(!gate.can_generate(&usage(7, false)));
    }

    #[test]
    fn test_premium_unlimited() {
        let gate = EntitlementGate::new(3);
        assert!(gate.can_generate(&usage(3, true)));
        assert!(gate.can_generate(&usage(u32::MAX, true)));
        assert_eq!(gate.remaining(&usage(50, true)), None);
    }

    #[test]
    fn test_record_increments_by_one() {
        let gate = EntitlementGate::default();
        let next = gate.record_generation(usage(1, false));
        assert_eq!(next, usage(2, false));
        assert_eq!(gate.remaining(&next), Some(1));
        assert_eq!(gate.record_generation(usage(u32::MAX, true)).plans_generated_this_period, u32::MAX);
    }
}
