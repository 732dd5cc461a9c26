//! Pathway template data.
//!
//! The per-nation pathways share a small number of shapes: an informal
//! first contact, one or two formal complaint stages, then escalation to
//! an independent ombudsman. The constructors below parameterize those
//! shapes by nation and review body so each catalog entry stays an
//! independent record without hand-duplicating every field.

use once_cell::sync::Lazy;
use redress_core::{PathwayTemplate, StepTemplate};
use std::collections::HashMap;

/// The built catalog, keyed by template key
pub static CATALOG: Lazy<HashMap<String, PathwayTemplate>> = Lazy::new(build_catalog);

/// An independent review body a pathway escalates to
#[derive(Clone, Copy)]
struct ReviewBody {
    name: &'static str,
    url: &'static str,
    /// Human timeline for their reviews
    timeline: &'static str,
    /// How to reach them / route notes
    route_note: &'static str,
}

const PHSO: ReviewBody = ReviewBody {
    name: "Parliamentary and Health Service Ombudsman",
    url: "https://www.ombudsman.org.uk",
    timeline: "Reviews commonly take up to 6 months",
    route_note: "Free to use; you need the organisation's final response first.",
};

const LGSCO: ReviewBody = ReviewBody {
    name: "Local Government and Social Care Ombudsman",
    url: "https://www.lgo.org.uk",
    timeline: "Investigations commonly take up to 6 months",
    route_note: "Free to use; the council must have had chance to respond first.",
};

const SPSO: ReviewBody = ReviewBody {
    name: "Scottish Public Services Ombudsman",
    url: "https://www.spso.org.uk",
    timeline: "Reviews commonly take up to 6 months",
    route_note: "The final stage for complaints about public services in Scotland.",
};

const PSOW: ReviewBody = ReviewBody {
    name: "Public Services Ombudsman for Wales",
    url: "https://www.ombudsman.wales",
    timeline: "Reviews commonly take up to 6 months",
    route_note: "The final stage for complaints about public services in Wales.",
};

const NIPSO: ReviewBody = ReviewBody {
    name: "Northern Ireland Public Services Ombudsman",
    url: "https://nipso.org.uk",
    timeline: "Reviews commonly take up to 6 months",
    route_note: "The final stage for complaints about public services in Northern Ireland.",
};

/// The recurring ombudsman-escalation step shape
fn ombudsman_step(body: ReviewBody) -> StepTemplate {
    StepTemplate::new(
        format!("Escalate to the {}", body.name),
        format!(
            "If you are unhappy with the final response, ask the {} for an independent review. {}",
            body.name, body.route_note
        ),
        body.timeline,
        "This is the final stage of the complaints process.",
    )
    .with_portal(body.url)
    .with_info("The organisation's final response letter")
    .with_info("A summary of why you remain dissatisfied")
}

/// A route decides the formal-stage timings and the final review body
struct EscalationRoute {
    ombudsman: ReviewBody,
    time_limit: &'static str,
    time_limit_detail: &'static str,
    legislation: &'static str,
    formal_response: &'static str,
    formal_ack: &'static str,
}

// =====================================================================
// Health: NHS trusts / health boards and GP practices
// =====================================================================

fn nhs_route(nation_key: Option<&str>) -> EscalationRoute {
    match nation_key {
        Some("scotland") => EscalationRoute {
            ombudsman: SPSO,
            time_limit: "6 months",
            time_limit_detail:
                "Complain within 6 months of the event, or of becoming aware of a reason to complain.",
            legislation: "Patient Rights (Scotland) Act 2011",
            formal_response: "20 working days",
            formal_ack: "3 working days",
        },
        Some("wales") => EscalationRoute {
            ombudsman: PSOW,
            time_limit: "12 months",
            time_limit_detail: "Raise the concern within 12 months of becoming aware of it.",
            legislation:
                "NHS (Concerns, Complaints and Redress Arrangements) (Wales) Regulations 2011",
            formal_response: "30 working days",
            formal_ack: "2 working days",
        },
        Some("northern_ireland") => EscalationRoute {
            ombudsman: NIPSO,
            time_limit: "6 months",
            time_limit_detail: "Complain within 6 months of the event you are complaining about.",
            legislation: "HSC Complaints Procedure Directions (Northern Ireland) 2009",
            formal_response: "20 working days",
            formal_ack: "2 working days",
        },
        _ => EscalationRoute {
            ombudsman: PHSO,
            time_limit: "12 months",
            time_limit_detail:
                "Complain within 12 months of the event, or of becoming aware of a reason to complain.",
            legislation:
                "Local Authority Social Services and NHS Complaints (England) Regulations 2009",
            formal_response: "40 working days",
            formal_ack: "3 working days",
        },
    }
}

fn nhs_trust_template(nation_key: Option<&str>, nation_label: &str) -> PathwayTemplate {
    let route = nhs_route(nation_key);
    let provider = if matches!(nation_key, Some("scotland") | Some("wales")) {
        "health board"
    } else {
        "trust"
    };
    PathwayTemplate {
        key: suffixed("nhs_trust", nation_key),
        title: format!("NHS complaint ({})", nation_label),
        description: format!(
            "Escalation route for complaints about hospital or {} care.",
            provider
        ),
        time_limit: route.time_limit.to_string(),
        time_limit_detail: route.time_limit_detail.to_string(),
        pre_requirements: vec![
            "Know which service or ward the complaint concerns".to_string(),
            "Have the approximate dates of the care in question".to_string(),
        ],
        evidence_guidance: vec![
            "Appointment letters and discharge summaries".to_string(),
            "Names of staff involved, if known".to_string(),
            "A dated note of what happened, written as soon as possible".to_string(),
        ],
        warnings: vec![format!(
            "Complaining does not affect your right to care from the {}.",
            provider
        )],
        tips: vec![
            "Patient advice services can help you phrase the complaint".to_string(),
            "Keep copies of everything you send".to_string(),
        ],
        legislation: route.legislation.to_string(),
        steps: vec![
            StepTemplate::new(
                "Raise it with the service",
                "Speak to the ward, clinic or patient advice service first. Many concerns are resolved on the spot.",
                "Usually within a few days",
                "You are not satisfied, or you prefer a formal route.",
            )
            .default_current(),
            StepTemplate::new(
                format!("Formal complaint to the {}", provider),
                format!(
                    "Put the complaint in writing to the {}'s complaints team, saying what happened and what outcome you want.",
                    provider
                ),
                route.formal_response,
                "You receive a final response you are unhappy with, or no response.",
            )
            .with_acknowledgment(route.formal_ack)
            .with_info("Dates and locations of the care")
            .with_info("What outcome you are seeking"),
            ombudsman_step(route.ombudsman),
        ],
    }
}

fn gp_template(nation_key: Option<&str>, nation_label: &str) -> PathwayTemplate {
    let route = nhs_route(nation_key);
    PathwayTemplate {
        key: suffixed("gp", nation_key),
        title: format!("GP practice complaint ({})", nation_label),
        description: "Escalation route for complaints about a GP practice or its staff.".to_string(),
        time_limit: route.time_limit.to_string(),
        time_limit_detail: route.time_limit_detail.to_string(),
        pre_requirements: vec!["Know whether the complaint is about the practice or an individual".to_string()],
        evidence_guidance: vec![
            "Dates of the appointments concerned".to_string(),
            "Copies of any letters or messages from the practice".to_string(),
        ],
        warnings: vec!["A practice cannot remove you from its list simply for complaining.".to_string()],
        tips: vec!["Ask the practice for a copy of its complaints procedure".to_string()],
        legislation: route.legislation.to_string(),
        steps: vec![
            StepTemplate::new(
                "Speak to the practice manager",
                "Raise the concern informally with the practice manager; many issues are resolved this way.",
                "Usually within a few days",
                "You are not satisfied, or you prefer a formal route.",
            )
            .default_current(),
            StepTemplate::new(
                "Formal complaint to the practice",
                "Write to the practice's complaints lead. You can complain to the commissioning body instead if you would rather not complain to the practice directly.",
                route.formal_response,
                "You receive a final response you are unhappy with, or no response.",
            )
            .with_acknowledgment(route.formal_ack)
            .with_info("What happened and when")
            .with_info("What outcome you are seeking"),
            ombudsman_step(route.ombudsman),
        ],
    }
}

// =====================================================================
// Local government: councils and social care
// =====================================================================

fn council_route(nation_key: Option<&str>) -> EscalationRoute {
    match nation_key {
        Some("scotland") => EscalationRoute {
            ombudsman: SPSO,
            time_limit: "12 months",
            time_limit_detail: "The SPSO normally expects complaints within 12 months of the event.",
            legislation: "Scottish Public Services Ombudsman Act 2002",
            formal_response: "20 working days",
            formal_ack: "3 working days",
        },
        Some("wales") => EscalationRoute {
            ombudsman: PSOW,
            time_limit: "12 months",
            time_limit_detail: "The ombudsman normally expects complaints within 12 months of awareness.",
            legislation: "Public Services Ombudsman (Wales) Act 2019",
            formal_response: "20 working days",
            formal_ack: "5 working days",
        },
        Some("northern_ireland") => EscalationRoute {
            ombudsman: NIPSO,
            time_limit: "6 months",
            time_limit_detail: "Complain to the ombudsman within 6 months of the council's final response.",
            legislation: "Public Services Ombudsman Act (Northern Ireland) 2016",
            formal_response: "20 working days",
            formal_ack: "3 working days",
        },
        _ => EscalationRoute {
            ombudsman: LGSCO,
            time_limit: "12 months",
            time_limit_detail: "The ombudsman normally expects complaints within 12 months of awareness.",
            legislation: "Local Government Act 1974, Part III",
            formal_response: "20 working days",
            formal_ack: "5 working days",
        },
    }
}

fn council_template(nation_key: Option<&str>, nation_label: &str) -> PathwayTemplate {
    let route = council_route(nation_key);
    PathwayTemplate {
        key: suffixed("council", nation_key),
        title: format!("Council complaint ({})", nation_label),
        description: "Escalation route for complaints about local council services and decisions."
            .to_string(),
        time_limit: route.time_limit.to_string(),
        time_limit_detail: route.time_limit_detail.to_string(),
        pre_requirements: vec!["Identify which council department the complaint concerns".to_string()],
        evidence_guidance: vec![
            "Reference numbers from previous contact with the council".to_string(),
            "Copies of letters, emails or notices".to_string(),
            "Photos where they evidence the problem".to_string(),
        ],
        warnings: vec![
            "Statutory appeals (e.g. parking or planning) have separate routes with their own deadlines."
                .to_string(),
        ],
        tips: vec!["Quote the council's own complaints policy back to it where stages are skipped".to_string()],
        legislation: route.legislation.to_string(),
        steps: vec![
            StepTemplate::new(
                "Contact the service",
                "Report the problem to the relevant department first; councils resolve many issues at first contact.",
                "Usually within a few days",
                "The problem is not fixed, or you want a formal record.",
            )
            .default_current(),
            StepTemplate::new(
                "Stage 1 formal complaint",
                "Submit a formal complaint through the council's complaints procedure, stating what went wrong and the outcome you want.",
                "10 working days",
                "The stage 1 response does not resolve the complaint.",
            )
            .with_acknowledgment("3 working days")
            .with_info("What outcome you are seeking"),
            StepTemplate::new(
                "Stage 2 review",
                "Ask the council to review the complaint at its final internal stage, usually by a senior officer not previously involved.",
                route.formal_response,
                "You receive the council's final response and remain dissatisfied.",
            )
            .with_acknowledgment(route.formal_ack),
            ombudsman_step(route.ombudsman),
        ],
    }
}

fn social_care_template(nation_key: Option<&str>, nation_label: &str) -> PathwayTemplate {
    let route = council_route(nation_key);
    PathwayTemplate {
        key: suffixed("social_care", nation_key),
        title: format!("Social care complaint ({})", nation_label),
        description:
            "Escalation route for complaints about adult or children's social care, whether arranged by the council or self-funded."
                .to_string(),
        time_limit: route.time_limit.to_string(),
        time_limit_detail: route.time_limit_detail.to_string(),
        pre_requirements: vec![
            "Know who provides the care and who arranges it".to_string(),
        ],
        evidence_guidance: vec![
            "Care plans and assessment documents".to_string(),
            "A dated log of the incidents or failings".to_string(),
        ],
        warnings: vec![
            "If someone is at immediate risk of harm, contact the local safeguarding team rather than the complaints process."
                .to_string(),
        ],
        tips: vec!["An advocate can complain on your behalf; ask the council about advocacy services".to_string()],
        legislation: route.legislation.to_string(),
        steps: vec![
            StepTemplate::new(
                "Raise it with the care provider",
                "Tell the provider or the council's social work team about the problem first.",
                "Usually within a few days",
                "The concern is not resolved informally.",
            )
            .default_current(),
            StepTemplate::new(
                "Formal complaint to the council",
                "Put the complaint in writing to the council's social care complaints team (or the provider's registered manager for self-funded care).",
                route.formal_response,
                "You receive a final response you are unhappy with, or no response.",
            )
            .with_acknowledgment(route.formal_ack)
            .with_info("Care plan or agreement reference")
            .with_info("Dates of the failings"),
            ombudsman_step(route.ombudsman),
        ],
    }
}

// =====================================================================
// Police
// =====================================================================

fn police_england() -> PathwayTemplate {
    PathwayTemplate {
        key: "police".to_string(),
        title: "Police complaint (England and Wales)".to_string(),
        description: "Escalation route for complaints about police conduct or service.".to_string(),
        time_limit: "12 months".to_string(),
        time_limit_detail: "Complaints should normally be made within 12 months of the incident."
            .to_string(),
        pre_requirements: vec!["Identify the force and, if possible, the officers involved".to_string()],
        evidence_guidance: vec![
            "Incident or custody reference numbers".to_string(),
            "Names or collar numbers of officers, if known".to_string(),
            "Details of any witnesses".to_string(),
        ],
        warnings: vec![
            "If you are reporting a crime rather than complaining about the police, use 101 (or 999 in an emergency)."
                .to_string(),
        ],
        tips: vec!["You can complain directly to the force or through the IOPC's online form".to_string()],
        legislation: "Police Reform Act 2002, Schedule 3".to_string(),
        steps: vec![
            StepTemplate::new(
                "Complain to the force",
                "Submit the complaint to the force's Professional Standards Department, online or in writing.",
                "Handling times vary; the force must keep you updated",
                "You receive the outcome and consider it unreasonable.",
            )
            .with_acknowledgment("3 working days")
            .with_info("Date, time and location of the incident")
            .default_current(),
            StepTemplate::new(
                "Apply for a review",
                "If you are unhappy with the outcome, apply for a review to the relevant review body named in the outcome letter (the local policing body or the IOPC).",
                "28 days to apply, counted from the outcome letter",
                "This is the final stage of the police complaints process.",
            )
            .with_portal("https://www.policeconduct.gov.uk")
            .with_info("The force's outcome letter"),
        ],
    }
}

fn police_scotland() -> PathwayTemplate {
    PathwayTemplate {
        key: "police_scotland".to_string(),
        title: "Police complaint (Scotland)".to_string(),
        description: "Escalation route for complaints about Police Scotland.".to_string(),
        time_limit: "12 months".to_string(),
        time_limit_detail: "Complaints should normally be made within 12 months of the incident."
            .to_string(),
        pre_requirements: vec!["Note the date, place and any incident number".to_string()],
        evidence_guidance: vec![
            "Incident reference numbers".to_string(),
            "Details of any witnesses".to_string(),
        ],
        warnings: vec![
            "Allegations of criminal conduct by officers are dealt with by the procurator fiscal, not the complaints process."
                .to_string(),
        ],
        tips: vec!["Keep the complaint factual and chronological".to_string()],
        legislation: "Police, Public Order and Criminal Justice (Scotland) Act 2006".to_string(),
        steps: vec![
            StepTemplate::new(
                "Complain to Police Scotland",
                "Submit the complaint to Police Scotland's professional standards team, online or in writing.",
                "40 working days",
                "You receive the final response and remain dissatisfied.",
            )
            .with_acknowledgment("3 working days")
            .with_portal("https://www.scotland.police.uk")
            .default_current(),
            StepTemplate::new(
                "Ask the PIRC for a review",
                "Apply to the Police Investigations and Review Commissioner for a complaint handling review.",
                "Reviews commonly take up to 3 months",
                "This is the final stage of the police complaints process in Scotland.",
            )
            .with_portal("https://pirc.scot")
            .with_info("Police Scotland's final response letter"),
        ],
    }
}

fn police_northern_ireland() -> PathwayTemplate {
    PathwayTemplate {
        key: "police_northern_ireland".to_string(),
        title: "Police complaint (Northern Ireland)".to_string(),
        description: "Escalation route for complaints about the PSNI.".to_string(),
        time_limit: "12 months".to_string(),
        time_limit_detail: "The Police Ombudsman normally investigates complaints made within 12 months."
            .to_string(),
        pre_requirements: vec!["Note the date, place and any incident number".to_string()],
        evidence_guidance: vec!["Incident reference numbers".to_string()],
        warnings: vec![],
        tips: vec![
            "Unlike the rest of the UK, complaints about the PSNI go directly to the independent ombudsman."
                .to_string(),
        ],
        legislation: "Police (Northern Ireland) Act 1998".to_string(),
        steps: vec![
            StepTemplate::new(
                "Raise it with the PSNI",
                "For minor service matters you can raise the issue with the officer's supervisor first.",
                "Usually within a few days",
                "The matter is about conduct, or informal resolution fails.",
            )
            .default_current(),
            StepTemplate::new(
                "Complain to the Police Ombudsman",
                "Submit the complaint to the Police Ombudsman for Northern Ireland, who investigates independently of the PSNI.",
                "Investigations commonly take up to 6 months",
                "This is the final stage of the police complaints process in Northern Ireland.",
            )
            .with_portal("https://www.policeombudsman.org")
            .with_info("Date, time and location of the incident"),
        ],
    }
}

// =====================================================================
// Schools
// =====================================================================

fn school_template(nation_key: Option<&str>, nation_label: &str) -> PathwayTemplate {
    let (final_step, legislation) = match nation_key {
        Some("scotland") => (
            StepTemplate::new(
                "Escalate to the council, then the SPSO",
                "Complain to the council's education department; if its final response does not resolve matters, ask the Scottish Public Services Ombudsman for a review.",
                "20 working days",
                "This is the final stage of the school complaints process in Scotland.",
            )
            .with_portal(SPSO.url),
            "Education (Scotland) Act 1980",
        ),
        Some("wales") => (
            StepTemplate::new(
                "Escalate to the Welsh Ministers",
                "If the governing body's final response does not resolve matters, you can refer the complaint to the Welsh Ministers.",
                "Handling times vary",
                "This is the final stage of the school complaints process in Wales.",
            )
            .with_portal("https://www.gov.wales"),
            "Education Act 2002, section 29",
        ),
        Some("northern_ireland") => (
            StepTemplate::new(
                "Escalate to the NIPSO",
                "If the board of governors' final response does not resolve matters, ask the Northern Ireland Public Services Ombudsman for a review.",
                "Reviews commonly take up to 6 months",
                "This is the final stage of the school complaints process in Northern Ireland.",
            )
            .with_portal(NIPSO.url),
            "Education and Libraries (Northern Ireland) Order 1986",
        ),
        _ => (
            StepTemplate::new(
                "Escalate to the Department for Education",
                "If the governors' panel decision does not resolve matters and the school has not followed a proper procedure, refer the complaint to the Department for Education.",
                "Handling times vary",
                "This is the final stage of the school complaints process in England.",
            )
            .with_portal("https://www.gov.uk/complain-about-school"),
            "Education Act 2002, section 29",
        ),
    };

    PathwayTemplate {
        key: suffixed("school", nation_key),
        title: format!("School complaint ({})", nation_label),
        description: "Escalation route for complaints about a school.".to_string(),
        time_limit: "12 months".to_string(),
        time_limit_detail: "Raise school complaints promptly; most procedures expect them within 12 months."
            .to_string(),
        pre_requirements: vec!["Read the school's published complaints procedure".to_string()],
        evidence_guidance: vec![
            "Dates of the incidents and of any meetings with staff".to_string(),
            "Copies of letters or messages exchanged with the school".to_string(),
        ],
        warnings: vec![
            "Admissions appeals and exclusion reviews have separate statutory routes with strict deadlines."
                .to_string(),
        ],
        tips: vec!["Keep communication with the school factual and dated".to_string()],
        legislation: legislation.to_string(),
        steps: vec![
            StepTemplate::new(
                "Raise it with the class teacher",
                "Most concerns are resolved by talking to the class teacher or head of year first.",
                "Usually within a few days",
                "The concern is not resolved informally.",
            )
            .default_current(),
            StepTemplate::new(
                "Formal complaint to the headteacher",
                "Put the complaint in writing to the headteacher under the school's complaints procedure.",
                "10 working days",
                "The headteacher's response does not resolve the complaint, or the complaint is about the headteacher.",
            )
            .with_acknowledgment("3 working days"),
            StepTemplate::new(
                "Complain to the governing body",
                "Escalate to the chair of governors; a panel of governors not previously involved should consider the complaint.",
                "20 working days",
                "The governors' decision does not resolve the complaint.",
            )
            .with_info("The headteacher's written response"),
            final_step,
        ],
    }
}

// =====================================================================
// UK-wide: DWP and HMRC
// =====================================================================

fn dwp_decision() -> PathwayTemplate {
    PathwayTemplate {
        key: "dwp_decision".to_string(),
        title: "Challenging a DWP benefit decision".to_string(),
        description:
            "Route for disputing a benefit decision (e.g. PIP, ESA, Universal Credit): mandatory reconsideration, then tribunal appeal."
                .to_string(),
        time_limit: "1 month".to_string(),
        time_limit_detail:
            "Ask for mandatory reconsideration within 1 month of the date on the decision letter. Late requests need good reasons and are accepted up to 13 months."
                .to_string(),
        pre_requirements: vec!["Have the decision letter to hand".to_string()],
        evidence_guidance: vec![
            "The decision letter and its date".to_string(),
            "Medical or financial evidence the decision maker did not see".to_string(),
        ],
        warnings: vec![
            "This route is for the decision itself. Poor service (delays, lost documents, rudeness) is a separate complaint route."
                .to_string(),
        ],
        tips: vec![
            "A large share of decisions change at tribunal; do not be put off by an unchanged reconsideration."
                .to_string(),
        ],
        legislation: "Social Security Act 1998, sections 9 and 12".to_string(),
        steps: vec![
            StepTemplate::new(
                "Ask for mandatory reconsideration",
                "Ask the DWP to look at the decision again, in writing or by phone, explaining what you think is wrong.",
                "Handling times vary; you will receive a mandatory reconsideration notice",
                "The mandatory reconsideration notice does not change the decision.",
            )
            .with_portal("https://www.gov.uk/mandatory-reconsideration")
            .with_info("The decision letter")
            .with_info("Why you think the decision is wrong")
            .default_current(),
            StepTemplate::new(
                "Appeal to the First-tier Tribunal",
                "Appeal to the independent Social Security and Child Support tribunal within 1 month of the mandatory reconsideration notice.",
                "Hearings are commonly listed within 6 months",
                "The tribunal's decision is final apart from appeals on points of law.",
            )
            .with_portal("https://www.gov.uk/appeal-benefit-decision")
            .with_info("Both mandatory reconsideration notices")
            .with_info("Any new supporting evidence"),
        ],
    }
}

fn dwp_service() -> PathwayTemplate {
    PathwayTemplate {
        key: "dwp_service".to_string(),
        title: "DWP service complaint".to_string(),
        description:
            "Route for complaints about DWP service: delays, lost documents, poor treatment. Not for disputing a benefit decision."
                .to_string(),
        time_limit: "6 months".to_string(),
        time_limit_detail:
            "The Independent Case Examiner accepts complaints within 6 months of the DWP's final response."
                .to_string(),
        pre_requirements: vec!["Have your National Insurance number and claim references ready".to_string()],
        evidence_guidance: vec![
            "Dates and times of calls, with the names of advisers where possible".to_string(),
            "Copies of letters and journal entries".to_string(),
        ],
        warnings: vec![
            "If you disagree with a benefit decision itself, use mandatory reconsideration instead; it has a strict 1 month deadline."
                .to_string(),
        ],
        tips: vec!["Say clearly that you are making a complaint, so it is logged as one".to_string()],
        legislation: "Parliamentary Commissioner Act 1967".to_string(),
        steps: vec![
            StepTemplate::new(
                "Complain to the office handling your claim",
                "Tell the office handling your claim you want to complain, by phone, in your journal, or in writing.",
                "They aim to respond within 15 working days",
                "The response does not resolve the complaint.",
            )
            .with_portal("https://www.gov.uk/complain-dwp")
            .default_current(),
            StepTemplate::new(
                "Ask for a senior review",
                "Ask for the complaint to be escalated to a DWP complaint resolution manager for a final response.",
                "15 working days",
                "You receive the DWP's final response and remain dissatisfied.",
            ),
            StepTemplate::new(
                "Escalate to the Independent Case Examiner",
                "Refer the complaint to the Independent Case Examiner, who reviews DWP complaint handling free of charge.",
                "Investigations commonly take up to 6 months",
                "The ICE's findings do not resolve the complaint.",
            )
            .with_portal("https://www.gov.uk/government/organisations/independent-case-examiner")
            .with_info("The DWP's final response letter"),
            StepTemplate::new(
                "Ask your MP to refer it to the PHSO",
                "As a final step, ask your MP to refer the complaint to the Parliamentary and Health Service Ombudsman.",
                "Reviews commonly take up to 6 months",
                "This is the final stage of the process.",
            )
            .with_portal(PHSO.url),
        ],
    }
}

fn hmrc() -> PathwayTemplate {
    PathwayTemplate {
        key: "hmrc".to_string(),
        title: "HMRC complaint".to_string(),
        description:
            "Route for complaints about HMRC service: delays, errors, poor treatment. Tax disputes themselves have separate appeal routes."
                .to_string(),
        time_limit: "6 months".to_string(),
        time_limit_detail:
            "The Adjudicator accepts complaints within 6 months of HMRC's final (tier 2) response."
                .to_string(),
        pre_requirements: vec!["Have your tax reference or National Insurance number ready".to_string()],
        evidence_guidance: vec![
            "Reference numbers from HMRC letters".to_string(),
            "A log of calls and the advisers spoken to".to_string(),
        ],
        warnings: vec![
            "Appealing a tax decision or penalty is a separate route with a 30 day deadline; this pathway is for service complaints."
                .to_string(),
        ],
        tips: vec!["Ask for costs caused by HMRC error to be considered as part of the complaint".to_string()],
        legislation: "Parliamentary Commissioner Act 1967; HMRC Charter".to_string(),
        steps: vec![
            StepTemplate::new(
                "Complain to HMRC (tier 1)",
                "Complain online or in writing to the HMRC office you have been dealing with.",
                "They aim to respond within 15 working days",
                "The first response does not resolve the complaint.",
            )
            .with_portal("https://www.gov.uk/complain-about-hmrc")
            .default_current(),
            StepTemplate::new(
                "Ask for a second review (tier 2)",
                "Ask HMRC to have a different complaints handler review the complaint and give a final response.",
                "15 working days",
                "You receive HMRC's final response and remain dissatisfied.",
            ),
            StepTemplate::new(
                "Escalate to the Adjudicator",
                "Refer the complaint to the Adjudicator's Office, which reviews HMRC complaints independently and free of charge.",
                "Investigations commonly take up to 6 months",
                "The Adjudicator's findings do not resolve the complaint.",
            )
            .with_portal("https://www.gov.uk/government/organisations/the-adjudicator-s-office")
            .with_info("HMRC's final response letter"),
            StepTemplate::new(
                "Ask your MP to refer it to the PHSO",
                "As a final step, ask your MP to refer the complaint to the Parliamentary and Health Service Ombudsman.",
                "Reviews commonly take up to 6 months",
                "This is the final stage of the process.",
            )
            .with_portal(PHSO.url),
        ],
    }
}

// =====================================================================
// Generic fallback
// =====================================================================

fn other_gov() -> PathwayTemplate {
    PathwayTemplate {
        key: "other_gov".to_string(),
        title: "Government body complaint (general)".to_string(),
        description:
            "General escalation route for complaints about a government body or agency without a specialised pathway."
                .to_string(),
        time_limit: "12 months".to_string(),
        time_limit_detail: "Most ombudsman schemes expect complaints within 12 months of awareness."
            .to_string(),
        pre_requirements: vec!["Find the body's published complaints procedure".to_string()],
        evidence_guidance: vec![
            "Reference numbers from any previous contact".to_string(),
            "Copies of relevant letters and emails".to_string(),
        ],
        warnings: vec![
            "Some decisions carry statutory appeal rights with their own strict deadlines; check the decision letter."
                .to_string(),
        ],
        tips: vec!["State clearly what outcome would put things right".to_string()],
        legislation: "Parliamentary Commissioner Act 1967".to_string(),
        steps: vec![
            StepTemplate::new(
                "Complain to the body",
                "Complain directly to the body using its own complaints procedure.",
                "They should set out their response timescale; 20 working days is typical",
                "The response does not resolve the complaint.",
            )
            .default_current(),
            StepTemplate::new(
                "Ask for a final review",
                "Ask the body to escalate the complaint to its final internal stage and issue a final response.",
                "20 working days",
                "You receive the final response and remain dissatisfied.",
            ),
            StepTemplate::new(
                "Escalate to the relevant ombudsman",
                "Refer the complaint to the ombudsman covering the body; for UK government departments this is the PHSO, reached via your MP.",
                "Reviews commonly take up to 6 months",
                "This is the final stage of the process.",
            )
            .with_portal(PHSO.url)
            .with_info("The body's final response letter"),
        ],
    }
}

// =====================================================================
// Assembly
// =====================================================================

fn suffixed(base: &str, nation_key: Option<&str>) -> String {
    match nation_key {
        Some(suffix) => format!("{}_{}", base, suffix),
        None => base.to_string(),
    }
}

fn build_catalog() -> HashMap<String, PathwayTemplate> {
    let nations: [(Option<&str>, &str); 4] = [
        (None, "England"),
        (Some("scotland"), "Scotland"),
        (Some("wales"), "Wales"),
        (Some("northern_ireland"), "Northern Ireland"),
    ];

    let mut templates = Vec::new();

    for (key, label) in nations {
        templates.push(nhs_trust_template(key, label));
        templates.push(gp_template(key, label));
        templates.push(council_template(key, label));
        templates.push(social_care_template(key, label));
        templates.push(school_template(key, label));
    }

    // Police: the England and Wales system is one scheme; Scotland and
    // Northern Ireland have their own review bodies.
    templates.push(police_england());
    templates.push(police_scotland());
    templates.push(police_northern_ireland());

    // UK-wide pathways, no nation variants. The base "dwp" entry is the
    // service-complaint shape under the plain body-type key, so dwp +
    // general still resolves to something useful.
    let mut dwp_base = dwp_service();
    dwp_base.key = "dwp".to_string();
    templates.push(dwp_base);
    templates.push(dwp_decision());
    templates.push(dwp_service());
    templates.push(hmrc());

    templates.push(other_gov());

    templates
        .into_iter()
        .map(|t| (t.key.clone(), t))
        .collect()
}
