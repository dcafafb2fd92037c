//! Terminal rendering.
//!
//! Text output for people, `--json` output for scripts. Notifications and
//! errors go to stderr.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use serde::Serialize;

use civicstorm_client::filters::{format_date, summary_line};
use civicstorm_client::models::{Report, ReportStats, User};
use civicstorm_client::services::{Notification, Severity};
use civicstorm_core::ReportStatus;

use crate::error::{AppError, Result};

pub struct Output {
    json: bool,
}

impl Output {
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn user(&self, user: Option<&User>) -> Result<()> {
        if self.json {
            return Self::print_json(&user);
        }
        match user {
            Some(user) => {
                let role = if user.is_admin { "admin" } else { "member" };
                println!("{} <{}> ({role}, {})", user.name, user.email, user.id);
            }
            None => println!("Not logged in"),
        }
        Ok(())
    }

    pub fn report(&self, report: &Report) -> Result<()> {
        if self.json {
            return Self::print_json(report);
        }
        println!("{}", summary_line(report));
        println!("  id:          {}", report.id);
        println!("  category:    {}", report.category.label());
        println!("  location:    {}", report.location);
        println!("  reported on: {}", format_date(report.created_at));
        println!("  updated:     {}", format_date(report.updated_at));
        if let Some(image) = &report.image_url {
            println!("  image:       {image}");
        }
        println!();
        println!("  {}", report.description);
        Ok(())
    }

    pub fn reports<'a>(&self, reports: impl Iterator<Item = &'a Report>) -> Result<()> {
        let reports: Vec<&Report> = reports.collect();
        if self.json {
            return Self::print_json(&reports);
        }
        if reports.is_empty() {
            println!("No reports matching your filters");
            return Ok(());
        }
        for report in reports {
            println!(
                "{:<40} {:<22} {}",
                report.id.as_str(),
                report.location,
                summary_line(report)
            );
        }
        Ok(())
    }

    pub fn stats(&self, stats: &ReportStats) -> Result<()> {
        if self.json {
            return Self::print_json(stats);
        }
        println!("Total reports: {}", stats.total);
        for status in ReportStatus::ALL {
            println!("  {:<12} {}", status.label(), stats.count(status));
        }
        println!("  {:<12} {}", "Civic", stats.civic);
        println!("  {:<12} {}", "Hazard", stats.hazard);
        Ok(())
    }

    pub fn notifications(&self, notifications: &[Notification]) {
        if self.json {
            return;
        }
        for notification in notifications {
            match notification.severity {
                Severity::Info => eprintln!("{notification}"),
                Severity::Destructive => eprintln!("! {notification}"),
            }
        }
    }

    pub fn error(&self, error: &AppError) {
        if self.json {
            let body = serde_json::json!({ "error": error.to_string() });
            eprintln!("{body}");
        } else {
            eprintln!("error: {error}");
        }
    }
}
