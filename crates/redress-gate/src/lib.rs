//! Redress Gate: safeguarding verdicts.
//!
//! Classifies the safeguarding concern attached to a facts record into a
//! verdict the workflow state machine enforces before the summary can be
//! confirmed. The gate does not decide the classification itself; that
//! arrives from the external conversation layer. It decides what the
//! classification *means* for the workflow.

use redress_core::SafeguardingConcern;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The result of evaluating the safeguarding gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GateVerdict {
    /// No concern; the workflow proceeds unconditionally
    Proceed,

    /// Regulatory concern: proceed only after the user acknowledges a
    /// displayed notice (one-time, session local)
    AcknowledgeNotice {
        /// Text of the notice the user must acknowledge
        notice: String,
    },

    /// Serious concern: the complaints workflow is blocked entirely and
    /// the user is signposted to the appropriate service
    Blocked {
        /// Category tag driving which signposting contacts to display
        category: String,
        /// Services to signpost instead of the complaints process
        signposts: Vec<Signpost>,
    },
}

impl GateVerdict {
    pub fn is_blocked(&self) -> bool {
        matches!(self, GateVerdict::Blocked { .. })
    }

    pub fn needs_acknowledgment(&self) -> bool {
        matches!(self, GateVerdict::AcknowledgeNotice { .. })
    }
}

impl fmt::Display for GateVerdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GateVerdict::Proceed => write!(f, "PROCEED"),
            GateVerdict::AcknowledgeNotice { .. } => write!(f, "ACKNOWLEDGE"),
            GateVerdict::Blocked { category, .. } => write!(f, "BLOCKED: {}", category),
        }
    }
}

/// A service the user is directed to instead of the complaints process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signpost {
    pub name: String,
    pub contact: String,
    pub note: String,
}

impl Signpost {
    fn new(name: &str, contact: &str, note: &str) -> Self {
        Self {
            name: name.to_string(),
            contact: contact.to_string(),
            note: note.to_string(),
        }
    }
}

/// Classify a safeguarding concern into its gate verdict
pub fn classify(concern: SafeguardingConcern) -> GateVerdict {
    match concern {
        SafeguardingConcern::None => GateVerdict::Proceed,
        SafeguardingConcern::Regulatory => GateVerdict::AcknowledgeNotice {
            notice: "This may also be a matter for the body's regulator. A regulatory referral \
                     looks at the service as a whole and will not usually get you an individual \
                     remedy; the complaints route below remains the way to pursue your own case."
                .to_string(),
        },
        SafeguardingConcern::Emergency => GateVerdict::Blocked {
            category: concern.tag().to_string(),
            signposts: vec![Signpost::new(
                "Emergency services",
                "999",
                "If anyone is in immediate danger, call 999 now.",
            )],
        },
        SafeguardingConcern::Crime => GateVerdict::Blocked {
            category: concern.tag().to_string(),
            signposts: vec![
                Signpost::new(
                    "Police",
                    "101",
                    "Report the crime to the police on 101, or 999 in an emergency.",
                ),
                Signpost::new(
                    "Victim Support",
                    "0808 168 9111",
                    "Free and confidential support, whether or not the crime is reported.",
                ),
            ],
        },
        SafeguardingConcern::ChildSafeguarding => GateVerdict::Blocked {
            category: concern.tag().to_string(),
            signposts: vec![
                Signpost::new(
                    "Local authority children's services",
                    "Via your council's safeguarding team",
                    "Safeguarding referrals are handled outside the complaints process.",
                ),
                Signpost::new(
                    "NSPCC helpline",
                    "0808 800 5000",
                    "Advice if you are worried about a child.",
                ),
            ],
        },
        SafeguardingConcern::AdultSafeguarding => GateVerdict::Blocked {
            category: concern.tag().to_string(),
            signposts: vec![Signpost::new(
                "Local authority adult safeguarding team",
                "Via your council",
                "Concerns about abuse or neglect of an adult at risk go to the safeguarding \
                 team, not the complaints process.",
            )],
        },
    }
}

/// Evaluate the gate with the session's acknowledgment state.
///
/// A regulatory concern resolves to `Proceed` once the notice has been
/// acknowledged; serious concerns never do.
pub fn evaluate(concern: SafeguardingConcern, acknowledged: bool) -> GateVerdict {
    match classify(concern) {
        GateVerdict::AcknowledgeNotice { .. } if acknowledged => GateVerdict::Proceed,
        verdict => verdict,
    }
}
