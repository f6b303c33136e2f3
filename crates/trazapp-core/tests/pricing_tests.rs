// Integration tests for the pricing catalog.

use trazapp_core::*;

#[test]
fn catalog_prices_and_savings() {
    let individual = find_plan("individual").unwrap();
    assert_eq!(individual.price(BillingCycle::Monthly), 6250.0);
    assert_eq!(individual.price(BillingCycle::Yearly), 45000.0);
    assert_eq!(individual.yearly_savings(), 30000.0);

    let team = find_plan("team").unwrap();
    assert!(team.popular);
    assert!((team.yearly_savings() - 45000.0).abs() < 1e-6);

    let ngo = find_plan("ngo").unwrap();
    assert!((ngo.yearly_savings() - 70000.0).abs() < 1e-6);
    assert!(ngo.features().all(|(_, included)| included));
}

#[test]
fn exactly_one_popular_plan() {
    assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
}

#[test]
fn plan_lookup_is_forgiving_about_case_and_spaces() {
    assert_eq!(find_plan(" Team ").unwrap().id, "team");
    assert_eq!(
        find_plan("enterprise").unwrap_err(),
        SiteError::UnknownPlan("enterprise".to_string())
    );
}

#[test]
fn register_links_preselect_plan() {
    assert_eq!(PLANS[0].register_href(), "/register?plan=individual");
    assert_eq!(PLANS[2].register_href(), "/register?plan=ngo");
}

#[test]
fn ars_formatting_groups_thousands_with_dots() {
    assert_eq!(format_ars(0.0), "0");
    assert_eq!(format_ars(950.0), "950");
    assert_eq!(format_ars(6250.0), "6.250");
    assert_eq!(format_ars(115000.0 / 12.0), "9.583");
    assert_eq!(format_ars(1_234_567.0), "1.234.567");
    assert_eq!(format_ars(-45000.0), "-45.000");
}

#[test]
fn billing_cycle_labels() {
    assert_eq!(BillingCycle::from_yearly(true), BillingCycle::Yearly);
    assert_eq!(BillingCycle::default(), BillingCycle::Monthly);
    assert_eq!(BillingCycle::Monthly.period_label(), "mes");
    assert_eq!(BillingCycle::Yearly.period_label(), "año");
}
