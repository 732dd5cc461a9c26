//! Pathway resolution.
//!
//! A pure, deterministic mapping from (body type, complaint type, nation)
//! to a catalog template. Resolution never fails: an unrecognized
//! combination degrades to the generic fallback instead of blocking the
//! user.

use crate::templates::CATALOG;
use redress_core::{BodyType, ComplaintType, Nation, PathwayTemplate};

/// Look up a template by its catalog key
pub fn get(key: &str) -> Option<&'static PathwayTemplate> {
    CATALOG.get(key)
}

/// All catalog keys, for exhaustive validation
pub fn keys() -> impl Iterator<Item = &'static str> {
    CATALOG.keys().map(|k| k.as_str())
}

/// Resolve the escalation pathway for a complaint.
///
/// Rules, in order:
/// 1. DWP decision/service complaints use the specialised UK-wide
///    templates regardless of nation.
/// 2. A nation-specific variant (`{body}_{suffix}`) wins when one exists.
/// 3. Otherwise the base template for the body type.
/// 4. Otherwise the generic `other_gov` fallback.
pub fn resolve(
    body_type: BodyType,
    complaint_type: ComplaintType,
    nation: Nation,
) -> &'static PathwayTemplate {
    if body_type == BodyType::Dwp {
        match complaint_type {
            ComplaintType::Decision => {
                return CATALOG.get("dwp_decision").expect("dwp_decision template")
            }
            ComplaintType::Service => {
                return CATALOG.get("dwp_service").expect("dwp_service template")
            }
            ComplaintType::General => {}
        }
    }

    if let Some(suffix) = nation.key_suffix() {
        let variant = format!("{}_{}", body_type.key(), suffix);
        if let Some(template) = CATALOG.get(&variant) {
            return template;
        }
    }

    CATALOG
        .get(body_type.key())
        .unwrap_or_else(|| CATALOG.get("other_gov").expect("other_gov template"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dwp_decision_ignores_nation() {
        for nation in Nation::all() {
            let template = resolve(BodyType::Dwp, ComplaintType::Decision, nation);
            assert_eq!(template.key, "dwp_decision", "nation {}", nation);
        }
    }

    #[test]
    fn test_dwp_service_ignores_nation() {
        for nation in Nation::all() {
            let template = resolve(BodyType::Dwp, ComplaintType::Service, nation);
            assert_eq!(template.key, "dwp_service", "nation {}", nation);
        }
    }

    #[test]
    fn test_dwp_general_falls_through_to_base() {
        let template = resolve(BodyType::Dwp, ComplaintType::General, Nation::Scotland);
        assert_eq!(template.key, "dwp");
    }

    #[test]
    fn test_police_scotland_variant() {
        let template = resolve(BodyType::Police, ComplaintType::General, Nation::Scotland);
        assert_eq!(template.key, "police_scotland");
    }

    #[test]
    fn test_police_england_base() {
        let template = resolve(BodyType::Police, ComplaintType::General, Nation::England);
        assert_eq!(template.key, "police");
    }

    #[test]
    fn test_police_wales_falls_back_to_base() {
        // No police_wales variant: England and Wales share one scheme
        let template = resolve(BodyType::Police, ComplaintType::General, Nation::Wales);
        assert_eq!(template.key, "police");
    }

    #[test]
    fn test_nhs_nation_variants() {
        assert_eq!(
            resolve(BodyType::NhsTrust, ComplaintType::General, Nation::Wales).key,
            "nhs_trust_wales"
        );
        assert_eq!(
            resolve(
                BodyType::NhsTrust,
                ComplaintType::General,
                Nation::NorthernIreland
            )
            .key,
            "nhs_trust_northern_ireland"
        );
    }

    #[test]
    fn test_hmrc_has_no_nation_variant() {
        for nation in Nation::all() {
            let template = resolve(BodyType::Hmrc, ComplaintType::General, nation);
            assert_eq!(template.key, "hmrc");
        }
    }

    #[test]
    fn test_other_gov_resolves() {
        let template = resolve(BodyType::OtherGov, ComplaintType::General, Nation::England);
        assert_eq!(template.key, "other_gov");
    }

    #[test]
    fn test_complaint_type_irrelevant_outside_dwp() {
        let a = resolve(BodyType::Council, ComplaintType::Decision, Nation::England);
        let b = resolve(BodyType::Council, ComplaintType::General, Nation::England);
        assert!(std::ptr::eq(a, b));
    }
}
