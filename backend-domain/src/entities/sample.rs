// Seed corpus used to initialize an empty desk.
// Timestamps are expressed relative to seeding time so the queue
// always looks recent on a fresh deployment.

use chrono::{DateTime, Duration, Utc};

use crate::entities::Alert;
use crate::value_objects::{AlertStatus, AnomalyKind};

struct SeedAlert {
    id: &'static str,
    transaction_id: &'static str,
    minutes_ago: i64,
    amount: f64,
    customer_name: &'static str,
    customer_id: &'static str,
    risk_score: f64,
    status: AlertStatus,
    location: &'static str,
    merchant_name: &'static str,
    anomaly_type: &'static [AnomalyKind],
    ip_address: &'static str,
    device_id: &'static str,
    previous_avg_amount: f64,
    location_distance: f64,
}

const SEED_ALERTS: &[SeedAlert] = &[
    SeedAlert {
        id: "CASE-001",
        transaction_id: "TXN-94F72A3E",
        minutes_ago: 15,
        amount: 47500.0,
        customer_name: "Johannes Nambala",
        customer_id: "CUST-89234",
        risk_score: 0.94,
        status: AlertStatus::Pending,
        location: "Cape Town, South Africa",
        merchant_name: "Premium Electronics ZA",
        anomaly_type: &[
            AnomalyKind::HighAmount,
            AnomalyKind::UnusualLocation,
            AnomalyKind::UnusualTime,
        ],
        ip_address: "102.219.45.128",
        device_id: "DEV-X9K2L",
        previous_avg_amount: 8200.0,
        location_distance: 1450.0,
    },
    SeedAlert {
        id: "CASE-002",
        transaction_id: "TXN-28B9E1F5",
        minutes_ago: 32,
        amount: 31200.0,
        customer_name: "Maria Santos",
        customer_id: "CUST-71522",
        risk_score: 0.89,
        status: AlertStatus::UnderReview,
        location: "Johannesburg, South Africa",
        merchant_name: "Luxury Fashion SA",
        anomaly_type: &[AnomalyKind::HighAmount, AnomalyKind::UnusualLocation],
        ip_address: "196.42.177.93",
        device_id: "DEV-M4N8P",
        previous_avg_amount: 5400.0,
        location_distance: 1350.0,
    },
    SeedAlert {
        id: "CASE-003",
        transaction_id: "TXN-5C7D2A91",
        minutes_ago: 48,
        amount: 89300.0,
        customer_name: "David Uukongo",
        customer_id: "CUST-45289",
        risk_score: 0.96,
        status: AlertStatus::Pending,
        location: "Lagos, Nigeria",
        merchant_name: "Global Tech Solutions",
        anomaly_type: &[
            AnomalyKind::HighAmount,
            AnomalyKind::UnusualLocation,
            AnomalyKind::NewMerchant,
            AnomalyKind::UnusualTime,
        ],
        ip_address: "41.203.72.184",
        device_id: "DEV-R7Q3W",
        previous_avg_amount: 12500.0,
        location_distance: 3200.0,
    },
    SeedAlert {
        id: "CASE-004",
        transaction_id: "TXN-A3F8D2B7",
        minutes_ago: 75,
        amount: 22800.0,
        customer_name: "Sarah Kamati",
        customer_id: "CUST-93841",
        risk_score: 0.81,
        status: AlertStatus::Pending,
        location: "Gaborone, Botswana",
        merchant_name: "International Hotel Group",
        anomaly_type: &[AnomalyKind::HighAmount, AnomalyKind::UnusualLocation],
        ip_address: "168.167.82.15",
        device_id: "DEV-T2Y5K",
        previous_avg_amount: 4200.0,
        location_distance: 850.0,
    },
    SeedAlert {
        id: "CASE-005",
        transaction_id: "TXN-9E2F7C4A",
        minutes_ago: 95,
        amount: 15600.0,
        customer_name: "Peter Nghidinwa",
        customer_id: "CUST-62157",
        risk_score: 0.78,
        status: AlertStatus::Resolved,
        location: "Windhoek, Namibia",
        merchant_name: "Windhoek Electronics",
        anomaly_type: &[AnomalyKind::HighAmount],
        ip_address: "105.234.19.44",
        device_id: "DEV-W8H9L",
        previous_avg_amount: 3800.0,
        location_distance: 15.0,
    },
    SeedAlert {
        id: "CASE-006",
        transaction_id: "TXN-B7D1E9F3",
        minutes_ago: 120,
        amount: 54200.0,
        customer_name: "Anna Shikongo",
        customer_id: "CUST-38472",
        risk_score: 0.92,
        status: AlertStatus::Frozen,
        location: "Durban, South Africa",
        merchant_name: "Coastal Jewelers",
        anomaly_type: &[
            AnomalyKind::HighAmount,
            AnomalyKind::UnusualLocation,
            AnomalyKind::UnusualTime,
        ],
        ip_address: "197.85.133.201",
        device_id: "DEV-E4P7M",
        previous_avg_amount: 6700.0,
        location_distance: 1680.0,
    },
    SeedAlert {
        id: "CASE-007",
        transaction_id: "TXN-C8E2D5A6",
        minutes_ago: 145,
        amount: 38900.0,
        customer_name: "Thomas Hamutenya",
        customer_id: "CUST-51293",
        risk_score: 0.87,
        status: AlertStatus::Pending,
        location: "Lusaka, Zambia",
        merchant_name: "Premium Auto Parts",
        anomaly_type: &[AnomalyKind::HighAmount, AnomalyKind::UnusualLocation],
        ip_address: "196.44.98.176",
        device_id: "DEV-N5K8R",
        previous_avg_amount: 7800.0,
        location_distance: 1120.0,
    },
    SeedAlert {
        id: "CASE-008",
        transaction_id: "TXN-D4F9A2E7",
        minutes_ago: 180,
        amount: 19400.0,
        customer_name: "Linda Shipanga",
        customer_id: "CUST-74138",
        risk_score: 0.76,
        status: AlertStatus::Resolved,
        location: "Swakopmund, Namibia",
        merchant_name: "Coastal Resort & Spa",
        anomaly_type: &[AnomalyKind::HighAmount],
        ip_address: "105.235.44.92",
        device_id: "DEV-L2B9V",
        previous_avg_amount: 3200.0,
        location_distance: 360.0,
    },
];

pub fn sample_alerts(now: DateTime<Utc>, currency: &str) -> Vec<Alert> {
    SEED_ALERTS
        .iter()
        .map(|seed| Alert {
            id: seed.id.to_string(),
            transaction_id: seed.transaction_id.to_string(),
            timestamp: now - Duration::minutes(seed.minutes_ago),
            created_at: Some(now),
            updated_at: None,
            amount: seed.amount,
            currency: currency.to_string(),
            customer_name: seed.customer_name.to_string(),
            customer_id: seed.customer_id.to_string(),
            risk_score: seed.risk_score,
            status: seed.status,
            location: seed.location.to_string(),
            merchant_name: seed.merchant_name.to_string(),
            anomaly_type: seed.anomaly_type.to_vec(),
            ip_address: seed.ip_address.to_string(),
            device_id: seed.device_id.to_string(),
            previous_avg_amount: seed.previous_avg_amount,
            location_distance: seed.location_distance,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_set_has_expected_status_mix() {
        let alerts = sample_alerts(Utc::now(), "NAD");
        assert_eq!(alerts.len(), 8);
        let count = |status: AlertStatus| alerts.iter().filter(|a| a.status == status).count();
        assert_eq!(count(AlertStatus::Pending), 4);
        assert_eq!(count(AlertStatus::UnderReview), 1);
        assert_eq!(count(AlertStatus::Resolved), 2);
        assert_eq!(count(AlertStatus::Frozen), 1);
    }

    #[test]
    fn sample_ids_are_unique() {
        let alerts = sample_alerts(Utc::now(), "NAD");
        let mut ids: Vec<_> = alerts.iter().map(|a| a.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }
}
