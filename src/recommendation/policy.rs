// ABOUTME: Retry policy table for recommendation fetch attempts
// ABOUTME: Maps each failure class to a retry decision and a linear backoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use nutrio_core::constants::retry;
use std::fmt;
use std::time::Duration;

/// Classification of a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureClass {
    /// No usable content and not truncated
    EmptyContent,
    /// Empty content cut at the output token cap
    Truncated,
    /// Transport timeout or attempt deadline
    Timeout,
    /// Upstream HTTP 408
    RequestTimeout,
    /// Upstream HTTP 429
    RateLimited,
    /// Any other non-2xx status
    Status,
    /// Envelope lacks the result/content field
    MissingContent,
    /// Typed error relayed by a recommendation proxy
    Relayed,
    /// Transport failure other than timeout
    Network,
}

impl fmt::Display for FailureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::EmptyContent => "empty_content",
            Self::Truncated => "truncated",
            Self::Timeout => "timeout",
            Self::RequestTimeout => "request_timeout",
            Self::RateLimited => "rate_limited",
            Self::Status => "status",
            Self::MissingContent => "missing_content",
            Self::Relayed => "relayed",
            Self::Network => "network",
        };
        f.write_str(name)
    }
}

/// Retry decision for one failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryRule {
    /// Whether another attempt may follow
    pub retryable: bool,
    /// Delay multiplied by the attempt number
    pub base_delay: Duration,
}

impl RetryRule {
    /// Rule for failures that end the fetch immediately
    pub const TERMINAL: Self = Self {
        retryable: false,
        base_delay: Duration::ZERO,
    };

    /// Rule for failures retried with linear backoff
    #[must_use]
    pub const fn retry_after(base_delay: Duration) -> Self {
        Self {
            retryable: true,
            base_delay,
        }
    }

    /// Backoff before the attempt following `attempt` (1-based)
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }
}

/// Bounded retry policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Backoff base for empty content
    pub empty_content_base: Duration,
    /// Backoff base for timeouts and 408
    pub timeout_base: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: retry::MAX_RETRIES,
            empty_content_base: Duration::from_millis(retry::EMPTY_CONTENT_BASE_DELAY_MS),
            timeout_base: Duration::from_millis(retry::TIMEOUT_BASE_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    /// Total attempts allowed, first one included
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Policy table entry for a failure class
    #[must_use]
    pub const fn rule(&self, class: FailureClass) -> RetryRule {
        match class {
            FailureClass::EmptyContent => RetryRule::retry_after(self.empty_content_base),
            FailureClass::Timeout | FailureClass::RequestTimeout => {
                RetryRule::retry_after(self.timeout_base)
            }
            FailureClass::Truncated
            | FailureClass::RateLimited
            | FailureClass::Status
            | FailureClass::MissingContent
            | FailureClass::Relayed
            | FailureClass::Network => RetryRule::TERMINAL,
        }
    }

    /// Delay before the next attempt, or `None` when the fetch must stop
    ///
    /// `attempt` is the 1-based number of the attempt that just failed.
    #[must_use]
    pub fn next_delay(&self, class: FailureClass, attempt: u32) -> Option<Duration> {
        let rule = self.rule(class);
        (rule.retryable && attempt < self.max_attempts()).then(|| rule.backoff(attempt))
    }
}
