//! Domain Event Tests
//!
//! Every successful mutation of the book emits exactly one event; failed
//! operations and no-op removals emit none.

use domain_policy::{PolicyEvent, Risk};
use rust_decimal_macros::dec;
use test_utils::{RiskFixtures, TemporalFixtures, TestCompanyBuilder};

const POLICY: &str = "Policy 1";

mod emission {
    use super::*;

    #[test]
    fn test_sale_emits_policy_sold() {
        let mut company = TestCompanyBuilder::new().build();
        let risks = RiskFixtures::standard();
        let now = TemporalFixtures::now();

        company.sell_policy(POLICY, now, 9, &risks[..]).unwrap();
        let events = company.take_events();

        assert_eq!(
            events,
            vec![PolicyEvent::PolicySold {
                insured_object: POLICY.to_string(),
                valid_from: now,
                valid_till: TemporalFixtures::months_from_now(9),
                risks,
                premium: dec!(1000),
                timestamp: now,
            }]
        );
    }

    #[test]
    fn test_risk_mutations_emit_events_in_order() {
        let mut company = TestCompanyBuilder::new()
            .with_policy(POLICY, TemporalFixtures::now(), 9, RiskFixtures::standard())
            .build();
        let now = TemporalFixtures::now();
        let risk_5 = Risk::new("Risk 5", dec!(500));
        let till = TemporalFixtures::days_from_now(30);

        company.add_risk(POLICY, &risk_5, now, now).unwrap();
        company.remove_risk(POLICY, &RiskFixtures::risk_1(), till, now).unwrap();

        let events = company.take_events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            PolicyEvent::RiskAdded {
                insured_object: POLICY.to_string(),
                policy_valid_from: now,
                risk: risk_5,
                risk_valid_from: now,
                premium: dec!(1500),
                timestamp: now,
            }
        );
        assert_eq!(
            events[1],
            PolicyEvent::RiskRemoved {
                insured_object: POLICY.to_string(),
                policy_valid_from: now,
                risk: RiskFixtures::risk_1(),
                risk_valid_till: till,
                premium: dec!(1400),
                timestamp: now,
            }
        );
    }

    #[test]
    fn test_take_events_clears_log() {
        let mut company = TestCompanyBuilder::new().build();
        let risks = RiskFixtures::standard();

        company.sell_policy(POLICY, TemporalFixtures::now(), 9, &risks[..]).unwrap();

        assert_eq!(company.take_events().len(), 1);
        assert!(company.take_events().is_empty());
    }

    #[test]
    fn test_failures_and_noops_emit_nothing() {
        let mut company = TestCompanyBuilder::new()
            .with_policy(POLICY, TemporalFixtures::now(), 9, RiskFixtures::standard())
            .build();
        let risks = RiskFixtures::standard();
        let now = TemporalFixtures::now();

        assert!(company
            .sell_policy(POLICY, TemporalFixtures::months_from_now(1), 3, &risks[..])
            .is_err());
        assert!(company
            .add_risk(POLICY, &RiskFixtures::risk_1(), now, TemporalFixtures::months_from_now(-1))
            .is_err());
        company
            .remove_risk(
                POLICY,
                &RiskFixtures::unavailable(),
                TemporalFixtures::days_from_now(1),
                now,
            )
            .unwrap();

        assert!(company.take_events().is_empty());
    }
}

mod accessors {
    use super::*;

    #[test]
    fn test_common_fields() {
        let mut company = TestCompanyBuilder::new().build();
        let risks = vec![RiskFixtures::risk_2()];

        company.sell_policy(POLICY, TemporalFixtures::now(), 9, &risks[..]).unwrap();
        let event = company.take_events().remove(0);

        assert_eq!(event.event_type(), "PolicySold");
        assert_eq!(event.insured_object(), POLICY);
        assert_eq!(event.timestamp(), TemporalFixtures::now());
        assert_eq!(event.premium_after(), dec!(200));
    }

    #[test]
    fn test_events_serialize_to_json() {
        let mut company = TestCompanyBuilder::new().build();
        let risks = vec![RiskFixtures::risk_1()];

        company.sell_policy(POLICY, TemporalFixtures::now(), 9, &risks[..]).unwrap();
        let event = company.take_events().remove(0);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("PolicySold"));
        assert!(json.contains("Policy 1"));

        let restored: PolicyEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, event);
    }
}
