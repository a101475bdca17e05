// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::solver::Solution;
use serde::Serialize;
use std::fmt;

/// What gets printed for a solved record. Big integers are kept as decimal
/// strings so that JSON consumers never see a lossy number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub n: u64,
    pub k: u64,
    pub degree: usize,
    pub roots: Vec<String>,
    /// Leading coefficient first; always starts with `"1"`
    pub coefficients: Vec<String>,
}

impl From<&Solution> for Report {
    fn from(solution: &Solution) -> Self {
        Self {
            n: solution.n,
            k: solution.k,
            degree: solution.degree,
            roots: solution.roots.iter().map(ToString::to_string).collect(),
            coefficients: solution
                .polynomial
                .to_descending_coefficients()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl Report {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "INFO:")?;
        writeln!(
            f,
            "  n = {}, k = {}, degree m = k - 1 = {}",
            self.n, self.k, self.degree
        )?;
        writeln!(
            f,
            "  Using first {} roots (as decimal): {}",
            self.degree,
            self.roots.join(", ")
        )?;
        writeln!(f)?;
        writeln!(f, "POLYNOMIAL COEFFICIENTS (descending powers):")?;
        write!(f, "{}", self.coefficients.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputRecord, RootEntry};
    use crate::solver::solve;

    fn report() -> Report {
        let record = InputRecord::new(3, 3)
            .with_root(1, RootEntry::new(10, "2"))
            .with_root(2, RootEntry::new(2, "11"))
            .with_root(3, RootEntry::new(10, "100"));
        Report::from(&solve(&record).unwrap())
    }

    #[test]
    fn test_report_from_solution() {
        let report = report();
        assert_eq!(report.roots, vec!["2", "3"]);
        assert_eq!(report.coefficients, vec!["1", "-5", "6"]);
    }

    #[test]
    fn test_text_report() {
        let expected = "INFO:\n  n = 3, k = 3, degree m = k - 1 = 2\n  Using first 2 roots (as decimal): 2, 3\n\nPOLYNOMIAL COEFFICIENTS (descending powers):\n1 -5 6";
        assert_eq!(report().to_string(), expected);
    }

    #[test]
    fn test_json_report() {
        let json: serde_json::Value = serde_json::from_str(&report().to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "n": 3,
                "k": 3,
                "degree": 2,
                "roots": ["2", "3"],
                "coefficients": ["1", "-5", "6"]
            })
        );
    }
}
