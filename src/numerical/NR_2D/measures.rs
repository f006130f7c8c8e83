//! Diagnostics of one `solve()` call
use std::fmt;
use std::time::Duration;
use tabled::{builder::Builder, settings::Style};

/// why a single attempt (random start -> convergence or failure) was abandoned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptFailure {
    /// jacobian with vanishing determinant
    Singular,
    /// NaN or infinite objective value or step
    NonFinite,
    /// Newton step left the admissible domain
    ConstraintViolated,
    /// per-try or total iteration budget spent
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FailureCounts {
    pub singular: usize,
    pub non_finite: usize,
    pub constraint_violated: usize,
    pub exhausted: usize,
}

impl FailureCounts {
    pub fn record(&mut self, failure: AttemptFailure) {
        match failure {
            AttemptFailure::Singular => self.singular += 1,
            AttemptFailure::NonFinite => self.non_finite += 1,
            AttemptFailure::ConstraintViolated => self.constraint_violated += 1,
            AttemptFailure::Exhausted => self.exhausted += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.singular + self.non_finite + self.constraint_violated + self.exhausted
    }
}

/// Created fresh by every `solve()`.
///
/// - `attempts`         : random starts iterated from (successful one included)
/// - `iterations`       : Newton steps of the last attempt
/// - `total_iterations` : Newton steps over all attempts, never above `iterations_total`
/// - `rejected_starts`  : sampled start points refused by the constraints
/// - `failures`         : abandoned attempts by reason
/// - `residual`         : |(F, G)| at the returned solution, None if no solution
/// - `elapsed`          : wall time of the call
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Measures {
    pub attempts: usize,
    pub iterations: usize,
    pub total_iterations: usize,
    pub rejected_starts: usize,
    pub failures: FailureCounts,
    pub residual: Option<f64>,
    pub elapsed: Duration,
}

impl Measures {
    pub fn converged(&self) -> bool {
        self.residual.is_some()
    }
    /// rows of the statistics table
    pub fn statistics(&self) -> Vec<(String, String)> {
        let residual = match self.residual {
            Some(r) => format!("{:e}", r),
            None => "no solution".to_string(),
        };
        vec![
            ("attempts".to_string(), self.attempts.to_string()),
            ("iterations in last attempt".to_string(), self.iterations.to_string()),
            ("total iterations".to_string(), self.total_iterations.to_string()),
            ("rejected start points".to_string(), self.rejected_starts.to_string()),
            ("singular jacobian".to_string(), self.failures.singular.to_string()),
            ("non-finite values".to_string(), self.failures.non_finite.to_string()),
            ("constraint violations".to_string(), self.failures.constraint_violated.to_string()),
            ("exhausted tries".to_string(), self.failures.exhausted.to_string()),
            ("residual".to_string(), residual),
            ("time elapsed, ms".to_string(), format!("{:.3}", self.elapsed.as_secs_f64() * 1e3)),
        ]
    }
}

impl fmt::Display for Measures {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut builder = Builder::default();
        builder.push_record(["measure".to_string(), "value".to_string()]);
        for (name, value) in self.statistics() {
            builder.push_record([name, value]);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        write!(f, "{}", table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_counts() {
        let mut counts = FailureCounts::default();
        counts.record(AttemptFailure::Singular);
        counts.record(AttemptFailure::Exhausted);
        counts.record(AttemptFailure::Exhausted);
        assert_eq!(counts.singular, 1);
        assert_eq!(counts.exhausted, 2);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_table() {
        let measures = Measures {
            attempts: 3,
            iterations: 7,
            total_iterations: 25,
            residual: Some(1e-9),
            ..Measures::default()
        };
        assert!(measures.converged());
        let table = measures.to_string();
        assert!(table.contains("attempts"));
        assert!(table.contains("total iterations"));
        assert!(table.contains("25"));
        assert!(table.contains("1e-9"));
        assert!(!Measures::default().converged());
        assert!(Measures::default().to_string().contains("no solution"));
    }
}
