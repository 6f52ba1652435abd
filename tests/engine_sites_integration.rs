use site_dp::{solve, SiteSelector};

#[test]
fn restaurant_row_with_unit_distance() {
    let revenues = [2, 4, 5, 17, 11, 8, 4, 2];
    let selection = SiteSelector::new(1, revenues.to_vec()).run();
    assert_eq!(selection.revenue, 31);
    assert_eq!(selection.sites, vec![2, 4, 6, 8]);
    selection.verify(1, &revenues).unwrap();
}

#[test]
fn zero_distance_takes_every_positive_run() {
    let selection = solve(0, &[1, 2, 3]);
    assert_eq!(selection.revenue, 6);
    assert_eq!(selection.sites, vec![1, 2, 3]);
}

#[test]
fn wide_distance_keeps_both_ends() {
    let selection = solve(2, &[5, 1, 1, 5]);
    assert_eq!(selection.revenue, 10);
    assert_eq!(selection.sites, vec![1, 4]);
}

#[test]
fn negative_sites_are_skipped() {
    let revenues = [6, -3, 8, -1, -7, 4];
    let selection = solve(1, &revenues);
    assert_eq!(selection.revenue, 18);
    assert_eq!(selection.sites, vec![1, 3, 6]);
    selection.verify(1, &revenues).unwrap();
}

#[test]
fn distance_beyond_input_picks_single_best() {
    let selection = solve(10, &[3, 9, 4]);
    assert_eq!(selection.revenue, 9);
    assert_eq!(selection.sites, vec![2]);
}

#[test]
fn repeated_runs_are_deterministic() {
    let selector = SiteSelector::new(2, vec![4i64, 4, 4, 4, 4, 4, 4]);
    let first = selector.run();
    let second = selector.run();
    assert_eq!(first, second);
    assert_eq!(first.revenue, 12);
    selector.table().chosen.iter().for_each(|&c| assert!(c));
    // Ties take the later site, so the walk starts from the last one.
    assert_eq!(first.sites, vec![1, 4, 7]);
}
