//! Secretary operations. Every service call takes the gym context plus the
//! acting secretary and fails with `InactiveSecretary` before doing anything
//! else when that secretary has been replaced.

pub mod client_service;
pub mod enrollment_service;
pub mod notification_service;
pub mod report_service;
pub mod schedule_service;
pub mod staff_service;

pub use client_service::ClientService;
pub use enrollment_service::{EnrollmentRejection, EnrollmentService};
pub use notification_service::NotificationService;
pub use report_service::ReportService;
pub use schedule_service::ScheduleService;
pub use staff_service::{Payroll, Payslip, StaffService};
