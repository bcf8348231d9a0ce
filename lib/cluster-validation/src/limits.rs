//! Bounds enforced by the validators

use serde::{Deserialize, Serialize};

/// Maximum number of outbound IPs in a Standard load balancer frontend configuration
pub const MAX_LOAD_BALANCER_OUTBOUND_IPS: i32 = 16;
/// Minimum load balancer idle timeout (minutes)
pub const MIN_LB_IDLE_TIMEOUT_IN_MINUTES: i32 = 4;
/// Maximum load balancer idle timeout (minutes)
pub const MAX_LB_IDLE_TIMEOUT_IN_MINUTES: i32 = 30;
/// Lowest network security rule priority
pub const MIN_RULE_PRIORITY: i32 = 100;
/// Highest network security rule priority
pub const MAX_RULE_PRIORITY: i32 = 4096;

/// Numeric bounds applied to load balancers and security rules
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationLimits {
    /// Upper bound of `frontendIPsCount` on outbound load balancers
    pub max_outbound_ips: i32,
    pub min_idle_timeout_in_minutes: i32,
    pub max_idle_timeout_in_minutes: i32,
    pub min_rule_priority: i32,
    pub max_rule_priority: i32,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_outbound_ips: MAX_LOAD_BALANCER_OUTBOUND_IPS,
            min_idle_timeout_in_minutes: MIN_LB_IDLE_TIMEOUT_IN_MINUTES,
            max_idle_timeout_in_minutes: MAX_LB_IDLE_TIMEOUT_IN_MINUTES,
            min_rule_priority: MIN_RULE_PRIORITY,
            max_rule_priority: MAX_RULE_PRIORITY,
        }
    }
}

impl ValidationLimits {
    pub fn idle_timeout_in_range(&self, minutes: i32) -> bool {
        (self.min_idle_timeout_in_minutes..=self.max_idle_timeout_in_minutes).contains(&minutes)
    }

    pub fn priority_in_range(&self, priority: i32) -> bool {
        (self.min_rule_priority..=self.max_rule_priority).contains(&priority)
    }
}
