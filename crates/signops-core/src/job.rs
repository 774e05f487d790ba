//! # Job Data Model
//!
//! The central entity tracked through the shop, plus the six per-department
//! stage records and the immutable payment ledger entry.
//!
//! ## Stage Records
//!
//! Each department writes its own stage record through its own UI flow, and
//! the shapes have drifted historically: progress is often signalled by the
//! *presence* of a field rather than a canonical sub-status. The records
//! here model that reality as explicit optional fields — the timeline
//! derivers in `signops-timeline` pattern-match on these fields instead of
//! probing an open dictionary. An absent record means the department has
//! not been reached.
//!
//! ## Amounts
//!
//! All amounts are whole currency units (`i64`). Payment arithmetic must be
//! exact; floats are not used for money anywhere in the workspace.

use serde::{Deserialize, Serialize};

use crate::error::StatusParseError;
use crate::identity::{JobId, PaymentRecordId};
use crate::status::{JobStatus, PaymentStatus};
use crate::temporal::Timestamp;

// ─── Payment Ledger ──────────────────────────────────────────────────

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    /// Cash over the counter.
    Cash,
    /// Card terminal.
    Card,
    /// Direct bank transfer.
    BankTransfer,
    /// Cheque.
    Cheque,
    /// Online payment gateway.
    Online,
}

impl PaymentMode {
    /// The stored `snake_case` encoding of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::BankTransfer => "bank_transfer",
            Self::Cheque => "cheque",
            Self::Online => "online",
        }
    }
}

impl std::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentMode {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(Self::Cash),
            "card" => Ok(Self::Card),
            "bank_transfer" => Ok(Self::BankTransfer),
            "cheque" => Ok(Self::Cheque),
            "online" => Ok(Self::Online),
            other => Err(StatusParseError::UnknownPaymentMode { value: other.to_string() }),
        }
    }
}

/// One entry in a job's payment ledger.
///
/// Append-only: once recorded, an entry is never modified or removed. The
/// ledger length is monotonically non-decreasing over a job's life.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Unique identifier of this ledger entry.
    pub id: PaymentRecordId,
    /// Amount paid, in whole currency units.
    pub amount: i64,
    /// How the payment was made.
    pub mode: PaymentMode,
    /// Who recorded the payment.
    pub recorded_by: String,
    /// When the payment was recorded (UTC).
    pub recorded_at: Timestamp,
    /// Free-form notes, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ─── Stage Records ───────────────────────────────────────────────────

/// Reception intake record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReceptionistStage {
    /// Customer contact number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    /// Customer address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_address: Option<String>,
    /// Name of the salesperson assigned to the site visit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_salesperson: Option<String>,
    /// Scheduled appointment date for the visit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_date: Option<Timestamp>,
}

/// Salesperson site-visit record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalespersonStage {
    /// Free-form sub-status written by the sales UI (e.g. "visit_scheduled",
    /// "site_visited"). Legacy rows may omit it and carry detail fields only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Address of the installation site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_address: Option<String>,
    /// Notes taken during the visit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_notes: Option<String>,
    /// Kind of sign agreed with the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_type: Option<String>,
    /// Material to fabricate from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Measurements captured on site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<String>,
    /// When the site was visited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visited_at: Option<Timestamp>,
}

/// Design department record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignStage {
    /// Free-form sub-status written by the design UI. Historical synonyms
    /// abound ("sent_for_review", "under_review", "approved", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// When design work started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Timestamp>,
    /// When the draft was sent to the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_for_review_at: Option<Timestamp>,
    /// When the customer approved the artwork.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<Timestamp>,
}

/// Production department record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductionStage {
    /// Free-form sub-status written by the production UI
    /// ("started", "sent_to_printing", "framing_started", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Team assigned to fabricate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_team: Option<String>,
    /// When fabrication started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Timestamp>,
    /// Estimated completion date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_completion: Option<Timestamp>,
}

/// Printing department record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrintingStage {
    /// Free-form sub-status written by the printing UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// When the print run started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_started_at: Option<Timestamp>,
}

/// Accounts department record: invoice and payment ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountsStage {
    /// Invoice number, once generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    /// When the invoice was sent to the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_sent_at: Option<Timestamp>,
    /// Running total paid, in whole currency units.
    pub amount_paid: i64,
    /// Derived payment status, kept alongside the total for display.
    pub payment_status: PaymentStatus,
    /// Append-only payment ledger.
    pub payments: Vec<PaymentRecord>,
}

impl Default for AccountsStage {
    fn default() -> Self {
        Self {
            invoice_number: None,
            invoice_sent_at: None,
            amount_paid: 0,
            payment_status: PaymentStatus::PaymentPending,
            payments: Vec::new(),
        }
    }
}

// ─── Job ─────────────────────────────────────────────────────────────

/// The unit of work tracked through departments from intake to payment.
///
/// `status` is the single source of truth for which department owns the
/// job; the stage records carry each department's working data. Jobs are
/// never deleted — archival is outside this engine's scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Opaque identifier, immutable for the life of the job.
    pub id: JobId,
    /// Current lifecycle status.
    pub status: JobStatus,
    /// Customer the sign is for.
    pub customer_name: String,
    /// What the customer asked for.
    pub description: String,
    /// Total agreed price in whole currency units. May be 0 until the
    /// sales visit finalizes it.
    pub amount: i64,
    /// Reception intake record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receptionist: Option<ReceptionistStage>,
    /// Salesperson record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salesperson: Option<SalespersonStage>,
    /// Design record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design: Option<DesignStage>,
    /// Production record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production: Option<ProductionStage>,
    /// Printing record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printing: Option<PrintingStage>,
    /// Accounts record. Always present: created empty at intake.
    pub accounts: AccountsStage,
    /// When the job was created.
    pub created_at: Timestamp,
    /// Refreshed on every mutation.
    pub updated_at: Timestamp,
}

impl Job {
    /// Create a job at intake: status `job_received`, an intake record
    /// present, and an empty accounts ledger (`payment_pending`, 0 paid).
    pub fn new(customer_name: String, description: String, amount: i64) -> Self {
        let now = Timestamp::now();
        Self {
            id: JobId::new(),
            status: JobStatus::JobReceived,
            customer_name,
            description,
            amount,
            receptionist: Some(ReceptionistStage::default()),
            salesperson: None,
            design: None,
            production: None,
            printing: None,
            accounts: AccountsStage::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The live payment status of the job, from the accounts record.
    pub fn payment_status(&self) -> PaymentStatus {
        self.accounts.payment_status
    }

    /// Refresh `updated_at`. Called by every mutation path.
    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
