//! Portfolio statistics.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::Project;

#[derive(Debug, Clone, Serialize)]
pub struct StatusSlice {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CustomerSlice {
    pub name: String,
    pub count: usize,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_value: f64,
    pub status_distribution: Vec<StatusSlice>,
    /// Top five customers by project count.
    pub top_customers: Vec<CustomerSlice>,
}

impl DashboardStats {
    pub fn compute(projects: &[Project]) -> Self {
        let total_value = projects.iter().map(|p| p.value).sum();

        let mut by_status: HashMap<&str, usize> = HashMap::new();
        for project in projects {
            *by_status.entry(project.status.as_str()).or_default() += 1;
        }
        let mut status_distribution: Vec<StatusSlice> = by_status
            .into_iter()
            .map(|(name, count)| StatusSlice {
                name: name.to_string(),
                count,
            })
            .collect();
        status_distribution.sort_by(|a, b| b.count.cmp(&a.count).then(a.name.cmp(&b.name)));

        let mut by_customer: HashMap<&str, (usize, f64)> = HashMap::new();
        for project in projects {
            let entry = by_customer.entry(project.customer_name.as_str()).or_default();
            entry.0 += 1;
            entry.1 += project.value;
        }
        let mut top_customers: Vec<CustomerSlice> = by_customer
            .into_iter()
            .map(|(name, (count, value))| CustomerSlice {
                name: name.to_string(),
                count,
                value,
            })
            .collect();
        top_customers.sort_by(|a, b| b.count.cmp(&a.count).then(a.name.cmp(&b.name)));
        top_customers.truncate(5);

        DashboardStats {
            total_projects: projects.len(),
            total_value,
            status_distribution,
            top_customers,
        }
    }
}
