//! Aggregate statistics over the company list.

use serde::{Deserialize, Serialize};

use crate::models::{Company, CompanyStatus};

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Statistics {
    pub total: usize,
    /// In `in_progress` or `final_interview`
    pub in_progress: usize,
    pub offers: usize,
    pub rejected: usize,
    /// Mean overall rating to one decimal; 0 when nothing is rated
    pub average_rating: f64,
}

pub fn statistics(companies: &[Company]) -> Statistics {
    let count = |status: CompanyStatus| companies.iter().filter(|c| c.status == status).count();

    let ratings: Vec<f64> = companies
        .iter()
        .filter_map(|c| c.overall_rating)
        .map(|r| f64::from(r.value()))
        .collect();
    let average_rating = if ratings.is_empty() {
        0.0
    } else {
        let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
        (mean * 10.0).round() / 10.0
    };

    Statistics {
        total: companies.len(),
        in_progress: companies.iter().filter(|c| c.status.is_active()).count(),
        offers: count(CompanyStatus::Offer),
        rejected: count(CompanyStatus::Rejected),
        average_rating,
    }
}
