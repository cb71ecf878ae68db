//! Records loaded at startup.

use chrono::NaiveDate;

use crate::models::{
    BadgeVariant, Bulletin, BulletinPriority, Report, ReportStatus, Unit, UnitStatus, Warrant, WarrantStatus,
};

fn report(id: &str, title: &str, officer: &str, time: &str, status: ReportStatus) -> Report {
    Report {
        id: id.to_string(),
        title: title.to_string(),
        officer: officer.to_string(),
        time: time.to_string(),
        status,
        description: None,
    }
}

fn bulletin(id: &str, title: &str, priority: BulletinPriority, time: &str) -> Bulletin {
    Bulletin {
        id: id.to_string(),
        title: title.to_string(),
        priority,
        time: time.to_string(),
        description: None,
    }
}

fn warrant(id: &str, name: &str, charge: &str, status: WarrantStatus, date: (i32, u32, u32)) -> Warrant {
    Warrant {
        id: id.to_string(),
        name: name.to_string(),
        charge: charge.to_string(),
        status,
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
    }
}

fn unit(id: &str, name: &str, rank: &str, rank_color: BadgeVariant, status: &str) -> Unit {
    Unit {
        id: id.to_string(),
        name: name.to_string(),
        rank: rank.to_string(),
        rank_color,
        status: UnitStatus::from_label(status),
    }
}

pub fn reports() -> Vec<Report> {
    use ReportStatus::*;
    vec![
        report("RPT-2024-001", "Traffic Stop - Speeding", "Officer Johnson", "2 hours ago", Pending),
        report("RPT-2024-002", "Domestic Disturbance", "Officer Smith", "4 hours ago", Completed),
        report("RPT-2024-003", "Vandalism - Downtown", "Officer Williams", "6 hours ago", InProgress),
        report("RPT-2024-004", "DUI Arrest", "Officer Brown", "8 hours ago", Completed),
    ]
}

pub fn bulletins() -> Vec<Bulletin> {
    use BulletinPriority::*;
    vec![
        bulletin("BLT-001", "BOLO: Silver Sedan", High, "1 hour ago"),
        bulletin("BLT-002", "Missing Person Alert", Urgent, "3 hours ago"),
        bulletin("BLT-003", "Community Event Security", Medium, "5 hours ago"),
        bulletin("BLT-004", "Weather Advisory", Low, "7 hours ago"),
    ]
}

pub fn warrants() -> Vec<Warrant> {
    use WarrantStatus::*;
    vec![
        warrant("WRT-2024-001", "John Doe", "Assault", Active, (2024, 1, 15)),
        warrant("WRT-2024-002", "Jane Smith", "Theft", Active, (2024, 1, 14)),
        warrant("WRT-2024-003", "Mike Johnson", "Drug Possession", Served, (2024, 1, 13)),
        warrant("WRT-2024-004", "Sarah Williams", "Fraud", Active, (2024, 1, 12)),
    ]
}

pub fn units() -> Vec<Unit> {
    use BadgeVariant::*;
    vec![
        unit("101", "John Martinez", "Sergeant", Primary, "Available"),
        unit("102", "Sarah Johnson", "Officer", Secondary, "On Call"),
        unit("103", "Mike Thompson", "Lieutenant", Destructive, "Available"),
        unit("104", "Emily Davis", "Officer", Secondary, "Busy"),
        unit("105", "Robert Wilson", "Captain", Accent, "Available"),
        unit("106", "Lisa Anderson", "Officer", Secondary, "On Break"),
        unit("107", "David Brown", "Detective", Primary, "On Call"),
        unit("108", "Jennifer Taylor", "Officer", Secondary, "Available"),
    ]
}
