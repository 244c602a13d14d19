use super::*;

#[test]
fn build_carries_the_fixed_defaults() {
    let req = build_plan_request(" Youth plan ", " 19.99 ").unwrap();
    assert_eq!(req.name, "Youth plan");
    assert_eq!(req.amount, "19.99");
    assert_eq!(req.currency, "USD");
    assert_eq!(req.billing_period, "MONTHLY");
    assert_eq!(req.grace_days, 7);
    assert!(req.active);
}

#[test]
fn build_requires_a_name() {
    assert!(build_plan_request("  ", "19.99").is_err());
}

#[test]
fn build_rejects_non_numeric_amounts() {
    assert!(build_plan_request("Youth plan", "").is_err());
    assert!(build_plan_request("Youth plan", "abc").is_err());
    assert!(build_plan_request("Youth plan", "19,99").is_err());
}
