//! Text, status and priority filtering.

use crate::models::{Company, CompanyQuery, CompanyStatus, Priority};

/// Case-insensitive substring match over name, industry, job title and
/// every stored tag, credential tags included. An empty needle matches
/// everything.
pub fn matches_text(company: &Company, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);
    hit(&company.name)
        || hit(&company.industry)
        || hit(&company.job_details.title)
        || company.tags.iter().any(|tag| hit(tag))
}

pub fn matches_status(company: &Company, status: Option<CompanyStatus>) -> bool {
    status.map_or(true, |s| company.status == s)
}

pub fn matches_priority(company: &Company, priority: Option<Priority>) -> bool {
    priority.map_or(true, |p| company.priority == p)
}

/// Companies passing all three predicates of `query`, in their original
/// order.
pub fn filter_companies<'a>(companies: &'a [Company], query: &CompanyQuery) -> Vec<&'a Company> {
    companies
        .iter()
        .filter(|c| {
            matches_text(c, &query.text)
                && matches_status(c, query.status)
                && matches_priority(c, query.priority)
        })
        .collect()
}
